use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChromaError {
    #[error("invalid color format: {0}")]
    InvalidColorFormat(String),
    #[error("unknown harmony kind: {0}")]
    UnknownHarmony(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, ChromaError>;
