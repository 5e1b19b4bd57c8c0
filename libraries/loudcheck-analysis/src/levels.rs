//! Per-window decibel measurement
//!
//! Levels are RMS over a frame range, expressed in decibels relative to
//! 16-bit full scale and offset by [`RMS_CALIBRATION_DB`] so a full-scale
//! sine wave reads close to 0 dB. Sums of squares accumulate in `u64`,
//! which holds the worst case (every frame at the 16-bit minimum) for any
//! data chunk a WAVE container can declare.

use std::fmt;

use loudcheck_wave::WavAudio;

use crate::RMS_CALIBRATION_DB;

/// Decibel levels of one analysis window, one value per channel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelLevels {
    /// Left channel level in dB
    pub left: f64,
    /// Right channel level in dB
    pub right: f64,
}

impl ChannelLevels {
    /// Levels of a window with no signal at all
    ///
    /// Negative infinity compares below every finite threshold, so a
    /// silent window can never read as loud.
    pub const SILENCE: Self = Self {
        left: f64::NEG_INFINITY,
        right: f64::NEG_INFINITY,
    };

    /// Both channels at the same level
    pub fn uniform(db: f64) -> Self {
        Self {
            left: db,
            right: db,
        }
    }

    /// True if either channel sits at or above `threshold_db`
    pub fn either_at_or_above(&self, threshold_db: f64) -> bool {
        self.left >= threshold_db || self.right >= threshold_db
    }
}

impl fmt::Display for ChannelLevels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L {:.2} dB / R {:.2} dB", self.left, self.right)
    }
}

/// Measure the level of `frame_count` frames starting at `start_frame`
///
/// RMS is computed per channel over the range, then converted with
/// `20 * log10(rms / 32768)` plus the calibration offset. A range of
/// zero frames is reported as [`ChannelLevels::SILENCE`], as is any
/// range of all-zero samples (the logarithm of zero).
///
/// # Panics
/// Panics if the range runs past [`WavAudio::total_frames`].
pub fn calculate_db(audio: &WavAudio, start_frame: usize, frame_count: usize) -> ChannelLevels {
    if frame_count == 0 {
        return ChannelLevels::SILENCE;
    }

    let mut left_energy: u64 = 0;
    let mut right_energy: u64 = 0;
    for index in start_frame..start_frame + frame_count {
        let (left, right) = audio.stereo_frame(index);
        left_energy += squared(left);
        right_energy += squared(right);
    }

    ChannelLevels {
        left: energy_to_db(left_energy, frame_count),
        right: energy_to_db(right_energy, frame_count),
    }
}

fn squared(sample: i16) -> u64 {
    let value = i64::from(sample);
    (value * value) as u64
}

fn energy_to_db(energy: u64, frame_count: usize) -> f64 {
    let rms = (energy as f64 / frame_count as f64).sqrt();
    20.0 * (rms / 32768.0).log10() + RMS_CALIBRATION_DB
}

/// Levels of every complete analysis window, in temporal order
///
/// The order is load-bearing: the sudden-rise scan walks this series
/// front to back.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSeries {
    levels: Vec<ChannelLevels>,
}

impl WindowSeries {
    /// Measure every complete window of `frames_per_window` frames
    ///
    /// A trailing remainder shorter than one window is dropped.
    ///
    /// # Panics
    /// Panics if `frames_per_window` is zero; obtain it from
    /// [`WavAudio::frames_per_window`], which rejects that.
    pub fn measure(audio: &WavAudio, frames_per_window: usize) -> Self {
        let window_count = audio.total_frames() / frames_per_window;
        let mut levels = Vec::with_capacity(window_count);
        for window in 0..window_count {
            levels.push(calculate_db(
                audio,
                window * frames_per_window,
                frames_per_window,
            ));
        }
        Self { levels }
    }

    /// Wrap precomputed window levels
    pub fn from_levels(levels: Vec<ChannelLevels>) -> Self {
        Self { levels }
    }

    /// Window levels in temporal order
    pub fn levels(&self) -> &[ChannelLevels] {
        &self.levels
    }

    /// Number of complete windows
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// True when the range held less than one complete window
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}
