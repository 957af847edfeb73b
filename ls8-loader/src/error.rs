//! Loader errors

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("{} was not found", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Invalid binary literal at line {line}: {token:?}")]
    InvalidLiteral { line: usize, token: String },

    #[error("Binary literal at line {line} does not fit in 8 bits: {token}")]
    LiteralOutOfRange { line: usize, token: String },

    #[error("Unexpected token at line {line}: {token:?}")]
    UnexpectedToken { line: usize, token: String },

    #[error("Program too large: {len} instructions (memory holds {max})", max = ls8_spec::MEMORY_SIZE)]
    ProgramTooLarge { len: usize },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LoaderError>;
