use thiserror::Error;

#[derive(Debug, Error)]
pub enum FinanceError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Financial impossibility: {0}")]
    FinancialImpossibility(String),

    #[error("Date error: {0}")]
    DateError(String),

    #[error("Unsuccessful response: {0}")]
    UnsuccessfulResponse(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl FinanceError {
    /// Shorthand for the `InvalidInput` variant.
    pub fn invalid(field: &str, reason: impl Into<String>) -> Self {
        FinanceError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    /// Name of the offending field, if this is an input error.
    pub fn field(&self) -> Option<&str> {
        match self {
            FinanceError::InvalidInput { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for FinanceError {
    fn from(e: serde_json::Error) -> Self {
        FinanceError::SerializationError(e.to_string())
    }
}
