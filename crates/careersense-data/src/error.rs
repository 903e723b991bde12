use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}: missing or empty field '{field}'")]
    MissingField { row: usize, field: &'static str },

    #[error("dataset contains no rows")]
    EmptyDataset,

    #[error("artifact file not found: {0}")]
    ArtifactNotFound(std::path::PathBuf),

    #[error("artifact serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(
        "stored column list does not match the encoder vocabularies (artifacts are inconsistent)"
    )]
    ColumnMismatch,

    #[error("model error: {0}")]
    Ml(#[from] careersense_ml::MlError),
}
