//! Aggregate analysis over one container

use std::time::Instant;

use loudcheck_wave::WavAudio;
use serde::Serialize;
use tracing::debug;

use crate::config::AnalysisConfig;
use crate::detectors;
use crate::error::Result;

/// Results of one analysis run
///
/// Detectors that were disabled in the configuration report `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoudnessReport {
    /// Windows at or above the peak threshold
    pub peak_windows_over: Option<usize>,
    /// Whether the whole-range level reached the average threshold
    pub average_over: Option<bool>,
    /// Sudden rises counted across the window series
    pub sudden_rises: Option<usize>,
}

impl LoudnessReport {
    /// True if any enabled detector flagged the input
    pub fn exceeds_any(&self) -> bool {
        self.peak_windows_over.is_some_and(|count| count > 0)
            || self.average_over == Some(true)
            || self.sudden_rises.is_some_and(|count| count > 0)
    }
}

/// Run every enabled detector over `audio` and collect the results
///
/// Per-detector timing is emitted at debug level.
///
/// # Errors
/// Propagates [`AnalysisError::InvalidConfiguration`](crate::AnalysisError)
/// when the configured window duration is rejected by the frame math.
pub fn analyze(audio: &WavAudio, config: &AnalysisConfig) -> Result<LoudnessReport> {
    let peak_windows_over = if config.peak_enabled {
        let started = Instant::now();
        let count = detectors::check_peak(audio, config.window_ms, config.peak_threshold_db)?;
        debug!("Peak detector finished in {:?}", started.elapsed());
        Some(count)
    } else {
        None
    };

    let average_over = if config.average_enabled {
        let started = Instant::now();
        let over = detectors::check_average(audio, config.average_threshold_db);
        debug!("Average detector finished in {:?}", started.elapsed());
        Some(over)
    } else {
        None
    };

    let sudden_rises = if config.sudden_enabled {
        let started = Instant::now();
        let count = detectors::check_sudden(audio, config.window_ms, config.sudden_threshold_db)?;
        debug!("Sudden-rise detector finished in {:?}", started.elapsed());
        Some(count)
    } else {
        None
    };

    Ok(LoudnessReport {
        peak_windows_over,
        average_over,
        sudden_rises,
    })
}
