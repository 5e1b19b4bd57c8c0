//! Error types for WAVE container parsing

use thiserror::Error;

/// Result type for container operations
pub type Result<T> = std::result::Result<T, WaveError>;

/// Errors that can occur while parsing a WAVE container or sizing
/// analysis windows
#[derive(Error, Debug)]
pub enum WaveError {
    /// Structural damage: wrong magic, a truncated chunk, or any read
    /// that would cross the end of the input
    #[error("Malformed container: {reason}")]
    MalformedContainer {
        /// What the parser was reading when the container gave out
        reason: String,
    },

    /// The fmt chunk declares a sample encoding the engine cannot decode
    #[error("Unsupported encoding: {encoding} (format tag {tag:#06x})")]
    UnsupportedEncoding {
        /// Human-readable encoding name
        encoding: &'static str,
        /// Raw format tag from the fmt chunk
        tag: u16,
    },

    /// Only 16-bit samples are supported
    #[error("Unsupported bit depth: {0} (only 16-bit PCM is supported)")]
    UnsupportedBitDepth(u16),

    /// Header fields are internally inconsistent
    #[error("Invalid header: {reason}")]
    InvalidHeader {
        /// Which invariant the header violates
        reason: String,
    },

    /// Window duration outside 1-1000 ms, or one that yields zero frames
    /// at this sample rate
    #[error("Invalid analysis window: {0} ms (must be 1-1000 ms and span at least one frame)")]
    InvalidWindow(u32),
}

impl WaveError {
    /// Build a [`WaveError::MalformedContainer`] from any displayable reason
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedContainer {
            reason: reason.into(),
        }
    }

    /// Build a [`WaveError::InvalidHeader`] from any displayable reason
    pub fn invalid_header(reason: impl Into<String>) -> Self {
        Self::InvalidHeader {
            reason: reason.into(),
        }
    }
}
