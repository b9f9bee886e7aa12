use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("CSV must have at least a header row and one data row")]
    TooFewRows,
}
