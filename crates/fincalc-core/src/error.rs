use thiserror::Error;

#[derive(Debug, Error)]
pub enum FinCalcError {
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for FinCalcError {
    fn from(e: serde_json::Error) -> Self {
        FinCalcError::SerializationError(e.to_string())
    }
}
