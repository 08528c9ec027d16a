//! Crate-level error types.

use std::fmt;

/// Errors produced by the crema crate.
///
/// Resource-load failures during playback are deliberately *not* here:
/// a frame that fails to decode is skipped at draw time, and a content
/// fetch that fails yields an empty result. Only setup-time failures
/// (options files, thread spawn, window creation) surface as errors.
#[derive(Debug)]
pub enum CremaError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// A frame image could not be decoded.
    FrameDecode(String),
    /// Failed to spawn a background thread.
    ThreadSpawn(std::io::Error),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for CremaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::FrameDecode(msg) => {
                write!(f, "frame decode error: {msg}")
            }
            Self::ThreadSpawn(e) => {
                write!(f, "failed to spawn thread: {e}")
            }
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for CremaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) | Self::ThreadSpawn(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CremaError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
