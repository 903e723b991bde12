//! Feature encoding, decision-tree training, and the inference pipeline.

pub mod dataset;
pub mod encoder;
pub mod pipeline;
pub mod trainer;
pub mod tree;

pub use dataset::{Dataset, TrainingRow, split_skills};
pub use encoder::{FeatureSchema, SCORE_COLUMNS, TokenEncoder};
pub use pipeline::Pipeline;
pub use trainer::{TrainReport, TrainedModel, train};
pub use tree::DecisionTree;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MlError {
    #[error("dataset has no rows")]
    EmptyDataset,

    #[error("dataset has no career labels")]
    NoLabels,

    #[error("feature matrix and label vector lengths differ ({x} vs {y})")]
    LengthMismatch { x: usize, y: usize },

    #[error("feature row has {got} columns but the schema expects {expected}")]
    FeatureWidthMismatch { got: usize, expected: usize },

    #[error("invalid model: {0}")]
    InvalidModel(String),
}
