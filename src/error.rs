//! Error types shared by the projection core and the catalog/service layers

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProjectionError {
    /// Caller supplied an input the engine cannot project (negative amount,
    /// annual rate at or below -100%, empty identifier, ...)
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Asset not found: {name}")]
    AssetNotFound { name: String },

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ProjectionError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ProjectionError>;
