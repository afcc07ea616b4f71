use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown filter axis '{0}' (expected type, genre, decade or platform)")]
    UnknownAxis(String),
    #[error("unknown logical field '{0}'")]
    UnknownField(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
