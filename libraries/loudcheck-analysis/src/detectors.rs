//! Loudness anomaly detectors
//!
//! Three independent checks over a parsed container:
//! - [`check_peak`] counts fixed windows at or above a threshold
//! - [`check_average`] holds the whole range against a threshold
//! - [`check_sudden`] counts abrupt window-to-window rises
//!
//! All three treat a window as loud when either channel reaches the
//! threshold. None of them mutate the audio or keep state between calls.

use loudcheck_wave::WavAudio;
use tracing::debug;

use crate::error::{AnalysisError, Result};
use crate::levels::{calculate_db, ChannelLevels, WindowSeries};
use crate::SUDDEN_LOOKAHEAD_WINDOWS;

fn window_frames(audio: &WavAudio, window_ms: u32) -> Result<usize> {
    audio
        .frames_per_window(window_ms)
        .map_err(AnalysisError::InvalidConfiguration)
}

/// Count analysis windows at or above `threshold_db` on either channel
///
/// The audio is cut into consecutive windows of `window_ms`; a trailing
/// remainder shorter than one window is not measured.
///
/// # Errors
/// [`AnalysisError::InvalidConfiguration`] if the window duration is
/// rejected by the frame math.
pub fn check_peak(audio: &WavAudio, window_ms: u32, threshold_db: f64) -> Result<usize> {
    let frames_per_window = window_frames(audio, window_ms)?;
    let window_count = audio.total_frames() / frames_per_window;

    let mut over = 0;
    for window in 0..window_count {
        let levels = calculate_db(audio, window * frames_per_window, frames_per_window);
        if levels.either_at_or_above(threshold_db) {
            over += 1;
        }
    }
    Ok(over)
}

/// True if the level over the entire payload reaches `threshold_db` on
/// either channel
///
/// Equivalent to [`check_peak`] with a single window spanning every
/// frame. Audio with no frames at all measures as silence and is never
/// over the threshold.
pub fn check_average(audio: &WavAudio, threshold_db: f64) -> bool {
    calculate_db(audio, 0, audio.total_frames()).either_at_or_above(threshold_db)
}

/// Count sudden rises of at least `threshold_db` between nearby windows
///
/// Builds the full [`WindowSeries`] and scans it with
/// [`count_sudden_rises`].
///
/// # Errors
/// [`AnalysisError::InvalidConfiguration`] if the window duration is
/// rejected by the frame math.
pub fn check_sudden(audio: &WavAudio, window_ms: u32, threshold_db: f64) -> Result<usize> {
    let frames_per_window = window_frames(audio, window_ms)?;
    let series = WindowSeries::measure(audio, frames_per_window);
    Ok(count_sudden_rises(&series, threshold_db))
}

/// Scan a window series front to back, counting non-overlapping rise
/// events
///
/// From each cursor position the next [`SUDDEN_LOOKAHEAD_WINDOWS`]
/// windows are examined; a counted rise moves the cursor to just past
/// the window that rose, so one loud window never produces two events.
pub fn count_sudden_rises(series: &WindowSeries, threshold_db: f64) -> usize {
    let levels = series.levels();
    let mut events = 0;
    let mut cursor = 0;

    while cursor < levels.len() {
        match find_rise(levels, cursor, threshold_db) {
            Some(matched) => {
                events += 1;
                cursor = matched + 1;
            }
            None => cursor += 1,
        }
    }
    events
}

/// Look ahead of `start` for a window that jumps up by `threshold_db`
///
/// Candidates are examined in order; the first one whose level on either
/// channel has not fallen below the level at `start` settles the
/// outcome. If the absolute level difference on either channel reaches
/// the threshold the candidate's index is returned, otherwise the
/// lookahead ends empty. Windows below the starting level are stepped
/// over without ending the scan.
fn find_rise(levels: &[ChannelLevels], start: usize, threshold_db: f64) -> Option<usize> {
    let base = levels[start];
    let last = (start + SUDDEN_LOOKAHEAD_WINDOWS).min(levels.len() - 1);

    for candidate in start + 1..=last {
        let probe = levels[candidate];
        if probe.left >= base.left || probe.right >= base.right {
            let left_jump = (probe.left - base.left).abs();
            let right_jump = (probe.right - base.right).abs();
            if left_jump >= threshold_db || right_jump >= threshold_db {
                debug!(
                    "Sudden rise: window {} ({}) to window {} ({})",
                    start, base, candidate, probe
                );
                return Some(candidate);
            }
            return None;
        }
    }
    None
}
