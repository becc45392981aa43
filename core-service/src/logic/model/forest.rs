//! Tree Ensemble - averaged binary regression trees
//!
//! The artifact shape produced by the external training step (a random
//! forest). Nodes are stored flat; a split sends `x[feature] <= threshold`
//! left, everything else (including NaN) right.

use serde::{Deserialize, Serialize};

use super::regressor::{Hyperparameters, Regressor};
use crate::logic::features::FEATURE_COUNT;

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TreeError {
    #[error("ensemble has no trees")]
    NoTrees,

    #[error("tree has no nodes")]
    EmptyTree,

    #[error("node {node}: non-finite leaf value")]
    NonFiniteLeaf { node: usize },

    #[error("node {node}: feature index {feature} out of range")]
    FeatureOutOfRange { node: usize, feature: usize },

    #[error("node {node}: non-finite threshold")]
    NonFiniteThreshold { node: usize },

    #[error("node {node}: invalid child index {child}")]
    InvalidChild { node: usize, child: usize },

    #[error("feature importances must be finite and non-negative")]
    InvalidImportances,

    #[error("tree {tree}: {source}")]
    InTree { tree: usize, source: Box<TreeError> },
}

// ============================================================================
// TREE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionTree {
    /// Root at index 0; children always have a larger index than their parent
    pub nodes: Vec<TreeNode>,
}

impl RegressionTree {
    pub fn leaf(value: f64) -> Self {
        Self {
            nodes: vec![TreeNode::Leaf { value }],
        }
    }

    /// One split with two leaves
    pub fn stump(feature: usize, threshold: f64, left_value: f64, right_value: f64) -> Self {
        Self {
            nodes: vec![
                TreeNode::Split {
                    feature,
                    threshold,
                    left: 1,
                    right: 2,
                },
                TreeNode::Leaf { value: left_value },
                TreeNode::Leaf { value: right_value },
            ],
        }
    }

    /// NaN if the walk leaves the node list or revisits a node
    pub fn predict(&self, features: &[f64; FEATURE_COUNT]) -> f64 {
        let mut index = 0;
        // an acyclic path visits each node at most once
        for _ in 0..self.nodes.len() {
            match self.nodes.get(index) {
                Some(TreeNode::Leaf { value }) => return *value,
                Some(TreeNode::Split { feature, threshold, left, right }) => {
                    let x = features.get(*feature).copied().unwrap_or(f64::NAN);
                    index = if x <= *threshold { *left } else { *right };
                }
                None => return f64::NAN,
            }
        }
        f64::NAN
    }

    /// Structural check: non-empty, finite values, forward in-bounds children
    pub fn validate(&self) -> Result<(), TreeError> {
        if self.nodes.is_empty() {
            return Err(TreeError::EmptyTree);
        }

        let len = self.nodes.len();
        for (i, node) in self.nodes.iter().enumerate() {
            match node {
                TreeNode::Leaf { value } => {
                    if !value.is_finite() {
                        return Err(TreeError::NonFiniteLeaf { node: i });
                    }
                }
                TreeNode::Split { feature, threshold, left, right } => {
                    if *feature >= FEATURE_COUNT {
                        return Err(TreeError::FeatureOutOfRange {
                            node: i,
                            feature: *feature,
                        });
                    }
                    if !threshold.is_finite() {
                        return Err(TreeError::NonFiniteThreshold { node: i });
                    }
                    for child in [*left, *right] {
                        if child <= i || child >= len {
                            return Err(TreeError::InvalidChild { node: i, child });
                        }
                    }
                }
            }
        }

        Ok(())
    }

    pub fn depth(&self) -> usize {
        fn walk(nodes: &[TreeNode], index: usize) -> usize {
            match nodes.get(index) {
                Some(TreeNode::Split { left, right, .. }) => {
                    1 + walk(nodes, *left).max(walk(nodes, *right))
                }
                _ => 0,
            }
        }
        walk(&self.nodes, 0)
    }
}

// ============================================================================
// ENSEMBLE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeEnsemble {
    pub model_type: String,
    pub hyperparameters: Hyperparameters,
    /// Aligned to FEATURE_LAYOUT
    pub feature_importances: [f64; FEATURE_COUNT],
    pub trees: Vec<RegressionTree>,
}

impl TreeEnsemble {
    pub fn new(
        model_type: impl Into<String>,
        hyperparameters: Hyperparameters,
        feature_importances: [f64; FEATURE_COUNT],
        trees: Vec<RegressionTree>,
    ) -> Result<Self, TreeError> {
        let ensemble = Self {
            model_type: model_type.into(),
            hyperparameters,
            feature_importances,
            trees,
        };
        ensemble.validate()?;
        Ok(ensemble)
    }

    pub fn validate(&self) -> Result<(), TreeError> {
        if self.trees.is_empty() {
            return Err(TreeError::NoTrees);
        }

        for (i, tree) in self.trees.iter().enumerate() {
            tree.validate().map_err(|e| TreeError::InTree {
                tree: i,
                source: Box::new(e),
            })?;
        }

        if self
            .feature_importances
            .iter()
            .any(|w| !w.is_finite() || *w < 0.0)
        {
            return Err(TreeError::InvalidImportances);
        }

        if self.hyperparameters.n_estimators as usize != self.trees.len() {
            log::warn!(
                "Ensemble declares {} estimators but holds {} trees",
                self.hyperparameters.n_estimators,
                self.trees.len()
            );
        }

        Ok(())
    }
}

impl Regressor for TreeEnsemble {
    fn predict(&self, features: &[f64; FEATURE_COUNT]) -> f64 {
        let sum: f64 = self.trees.iter().map(|t| t.predict(features)).sum();
        sum / self.trees.len() as f64
    }

    fn feature_importances(&self) -> [f64; FEATURE_COUNT] {
        self.feature_importances
    }

    fn hyperparameters(&self) -> Hyperparameters {
        self.hyperparameters
    }

    fn model_type(&self) -> &str {
        &self.model_type
    }
}
