//! Loudness anomaly analysis for 16-bit PCM audio
//!
//! This crate provides:
//! - Windowed RMS level measurement in decibels ([`calculate_db`],
//!   [`WindowSeries`])
//! - Three independent anomaly detectors: sustained peaks, whole-range
//!   average, and sudden window-to-window rises
//! - An explicit configuration value with documented defaults and an
//!   aggregate [`analyze`] runner
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐     ┌───────────────┐     ┌──────────────────┐
//! │ WavAudio   │ ──► │ WindowSeries  │ ──► │ check_peak       │
//! │ (parsed    │     │ (dB per       │     │ check_average    │
//! │  PCM)      │     │  window)      │     │ check_sudden     │
//! └────────────┘     └───────────────┘     └──────────────────┘
//!                                                  │
//!                                                  ▼
//!                                          ┌──────────────────┐
//!                                          │ LoudnessReport   │
//!                                          └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use loudcheck_analysis::{analyze, AnalysisConfig};
//! use loudcheck_wave::WavAudio;
//!
//! let audio = WavAudio::parse(&bytes)?;
//! let report = analyze(&audio, &AnalysisConfig::default())?;
//!
//! if report.exceeds_any() {
//!     println!("loudness anomaly detected");
//! }
//! ```

#![deny(unsafe_code)]

mod config;
mod detectors;
mod error;
mod levels;
mod report;
#[cfg(test)]
mod test_support;

pub use config::AnalysisConfig;
pub use detectors::{check_average, check_peak, check_sudden, count_sudden_rises};
pub use error::{AnalysisError, Result};
pub use levels::{calculate_db, ChannelLevels, WindowSeries};
pub use report::{analyze, LoudnessReport};

/// Calibration added to every RMS measurement, aligning a full-scale
/// sine wave near 0 dB
pub const RMS_CALIBRATION_DB: f64 = 3.0103;

/// How many windows past the cursor the sudden-rise scan examines
pub const SUDDEN_LOOKAHEAD_WINDOWS: usize = 5;
