use thiserror::Error;

/// RFC model and validation errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("Invalid calendar document: {0}")]
    InvalidDocument(#[from] serde_json::Error),

    #[error(transparent)]
    CoreError(#[from] tessen_core::error::CoreError),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
