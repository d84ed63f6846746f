//! Error types for pagespeak operations.

use thiserror::Error;

/// Errors that can surface from the narration engine.
///
/// Extraction and classification never fail — they degrade to empty output.
/// Only talking to the outside world (speech, I/O) produces errors.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("speech synthesis unavailable")]
    SpeechUnavailable,

    #[error("speech synthesis failed: {0}")]
    Speech(String),

    #[error("no element with id: {0}")]
    UnknownElement(String),
}

pub type Result<T> = std::result::Result<T, Error>;
