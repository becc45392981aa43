//! ICU Monitor - Vitals-to-Risk Core
//!
//! Synthetic vital-sign generation, ground-truth risk scoring, status
//! classification, the predictive model adapter and the training dataset
//! builder. Presentation code talks to this crate through [`api`].
//!
//! ```text
//! vitals::generator ──► dataset::builder ──► (external training) ──► model artifact
//!        │                                                                │
//!        └──────────────► api::predict ◄── model::RiskPredictor ◄─────────┘
//!                               │
//!                               └──► risk::classify ──► RiskAssessment
//! ```

pub mod api;
pub mod constants;
pub mod logic;

pub use logic::risk::{RiskAssessment, RiskStatus};
pub use logic::vitals::{RiskLevel, VitalSigns, VitalSnapshot};
