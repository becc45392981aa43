//! Features Module - Model Input Schema
//!
//! One fixed order for the five vitals, used by the dataset file, the model
//! artifact and every prediction.

pub mod layout;
pub mod vector;

// Re-export common types
pub use layout::{
    feature_index, feature_name, layout_hash, validate_layout, LayoutInfo, LayoutMismatchError,
    FEATURE_COUNT, FEATURE_LAYOUT, FEATURE_VERSION, TARGET_COLUMN,
};
pub use vector::FeatureVector;
