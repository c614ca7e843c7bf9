//! Error type shared by every stage of the pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while configuring, rendering or saving noise.
#[derive(Debug, Error)]
pub enum Error {
    /// Sample rate, duration or buffer size cannot produce a valid buffer.
    #[error("invalid noise parameters: {0}")]
    InvalidParameters(String),

    /// The low-pass filter cannot be designed with the requested settings.
    #[error("invalid filter configuration: {0}")]
    InvalidFilter(String),

    /// The buffer holds NaN or infinite samples and cannot be normalized.
    #[error("cannot normalize a buffer containing non-finite samples")]
    NonFiniteSamples,

    /// Writing the WAV file failed.
    #[error("failed to save file {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: hound::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
