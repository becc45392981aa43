//! Logic Module - Business Logic & Engines
//!
//! - `features/` - Fixed, versioned feature layout shared by dataset and model
//! - `vitals/` - Synthetic vital-sign generation
//! - `risk/` - Ground-truth scorer and status classifier
//! - `model/` - Regressor abstraction, artifact loading, cached predictor
//! - `dataset/` - Labeled training dataset and its file format
//! - `analytics/` - Dataset statistics and model evaluation
//! - `monitor/` - Rolling live-monitoring window

pub mod config;

pub mod features;
pub mod vitals;
pub mod risk;
pub mod model;
pub mod dataset;
pub mod analytics;
pub mod monitor;
