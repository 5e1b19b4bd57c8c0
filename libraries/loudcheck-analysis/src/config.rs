//! Detector configuration

use serde::Serialize;

/// Thresholds, window duration, and detector enables for one analysis run
///
/// One explicit value shared by the whole run. The defaults match the
/// shipped command line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisConfig {
    /// Analysis window duration in milliseconds (1-1000)
    pub window_ms: u32,
    /// Level a single window must reach to count as a peak, in dB
    pub peak_threshold_db: f64,
    /// Level the whole-range average must reach, in dB
    pub average_threshold_db: f64,
    /// Jump between nearby windows that counts as sudden, in dB
    pub sudden_threshold_db: f64,
    /// Run the peak detector
    pub peak_enabled: bool,
    /// Run the average detector
    pub average_enabled: bool,
    /// Run the sudden-rise detector
    pub sudden_enabled: bool,
}

impl AnalysisConfig {
    /// Default peak threshold in dB
    pub const DEFAULT_PEAK_THRESHOLD_DB: f64 = -8.0;

    /// Default average threshold in dB
    pub const DEFAULT_AVERAGE_THRESHOLD_DB: f64 = -10.0;

    /// Default sudden-rise threshold in dB
    pub const DEFAULT_SUDDEN_THRESHOLD_DB: f64 = 20.0;

    /// Default analysis window in milliseconds
    pub const DEFAULT_WINDOW_MS: u32 = 200;
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            window_ms: Self::DEFAULT_WINDOW_MS,
            peak_threshold_db: Self::DEFAULT_PEAK_THRESHOLD_DB,
            average_threshold_db: Self::DEFAULT_AVERAGE_THRESHOLD_DB,
            sudden_threshold_db: Self::DEFAULT_SUDDEN_THRESHOLD_DB,
            peak_enabled: true,
            average_enabled: true,
            sudden_enabled: true,
        }
    }
}
