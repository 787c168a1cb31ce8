use thiserror::Error;

use crate::imagery::ImageryError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to build imagery request: {0}")]
    Imagery(#[from] ImageryError),
    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}
