use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while feeding sources to a parser
///
/// Malformed source is never an error: parsers skip what they cannot classify.
/// These variants cover failures around the source text, not inside it.
#[derive(Error, Debug)]
pub enum ParserError {
    /// Failed to read file or directory
    #[error("IO error reading {0}: {1}")]
    IoError(PathBuf, #[source] std::io::Error),

    /// File too large
    #[error("File {0} exceeds maximum size ({1} bytes)")]
    FileTooLarge(PathBuf, usize),

    /// File is not something this parser handles
    #[error("Unsupported input {0}: {1}")]
    Unsupported(PathBuf, String),

    /// Registry or worker setup failure
    #[error("Registry error: {0}")]
    RegistryError(String),
}

/// Result type for parser operations
pub type ParserResult<T> = Result<T, ParserError>;
