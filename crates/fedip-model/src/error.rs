use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid wizard step: {0} (expected 0..=3)")]
    InvalidStep(u8),
    #[error("unknown level token: {0}")]
    UnknownLevel(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
