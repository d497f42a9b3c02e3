//! Error types for the contest protocol.

use std::fmt;
use std::io;

/// Failures while reading or writing the harness protocol.
///
/// The stream comes from a trusted harness, so every variant is fatal:
/// there is no retry and no partial-turn recovery.
#[derive(Debug)]
pub enum ProtocolError {
    /// The stream ended before a required token was read.
    UnexpectedEof,
    /// A token could not be parsed as an integer.
    InvalidToken {
        /// The offending token text.
        token: String,
    },
    /// An underlying read or write failed.
    Io(io::Error),
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::UnexpectedEof => write!(f, "unexpected end of input"),
            ProtocolError::InvalidToken { token } => {
                write!(f, "invalid integer token: {token:?}")
            }
            ProtocolError::Io(e) => write!(f, "stream error: {e}"),
        }
    }
}

impl std::error::Error for ProtocolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProtocolError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ProtocolError {
    fn from(e: io::Error) -> Self {
        ProtocolError::Io(e)
    }
}

/// Result type for protocol reads and writes.
pub type ProtocolResult<T> = Result<T, ProtocolError>;
