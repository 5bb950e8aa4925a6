use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SortError {
    #[error("Error reading the input file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid number {token:?} at position {index}: {source}")]
    Parse {
        index: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("the input file contains no numbers")]
    EmptyInput,

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to spawn a sort worker: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("a sort worker exited before reporting its result")]
    WorkerLost,

    #[error("verification failed for {algorithm}")]
    VerificationFailed { algorithm: String },
}

pub type Result<T> = std::result::Result<T, SortError>;
