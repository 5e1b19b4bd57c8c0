//! Error types for loudness analysis

use loudcheck_wave::WaveError;
use thiserror::Error;

/// Result type for analysis operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Errors that can occur while running the detectors
///
/// The detectors themselves are pure arithmetic over a parsed container;
/// the only thing that can go wrong is being asked to analyze with a
/// window the frame math rejects.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The requested window duration cannot address frames at this
    /// sample rate
    #[error("Invalid analysis configuration: {0}")]
    InvalidConfiguration(#[source] WaveError),
}
