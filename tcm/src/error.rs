//! Error types for tcm

use std::path::PathBuf;
use thiserror::Error;

/// Result type for catalogue operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while reading descriptors or writing catalogues
#[derive(Error, Debug)]
pub enum Error {
    /// Input file missing or unreadable
    #[error("Cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output file cannot be created or written
    #[error("Cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output directory cannot be created
    #[error("Cannot create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Control file line that is not a `<mapping> <catalogue>` pair
    #[error("Malformed control entry at {}:{line}: {entry:?}", path.display())]
    MalformedControlEntry {
        path: PathBuf,
        line: usize,
        entry: String,
    },

    /// Control file without a groups file declaration
    #[error("Control file {} does not declare a groups file", .0.display())]
    EmptyControlFile(PathBuf),

    /// Operation invoked out of order
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
