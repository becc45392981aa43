//! API v1 Module
//!
//! Re-exports the current stable API so later versions can coexist.

pub use super::commands::*;
pub use super::engine_status::PipelineStatus;
