//! RIFF/WAVE container parsing for loudness analysis
//!
//! This crate provides:
//! - Bounds-checked parsing of RIFF/WAVE containers into an owned PCM buffer
//! - Validation of the fmt subchunk (integer PCM, 16-bit samples, consistent
//!   block alignment), with non-PCM encodings rejected by name
//! - Frame-level access: analysis window sizing, frame offsets, and
//!   little-endian stereo sample pairs
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐     ┌──────────────┐     ┌────────────────────┐
//! │ Raw bytes  │ ──► │ ChunkReader  │ ──► │ WavAudio           │
//! └────────────┘     │ (bounds-     │     │ (header + owned    │
//!                    │  checked LE) │     │  PCM payload)      │
//!                    └──────────────┘     └────────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use loudcheck_wave::WavAudio;
//!
//! let audio = WavAudio::parse(&bytes)?;
//! println!(
//!     "{} Hz, {} channel(s), {} frames",
//!     audio.format().sample_rate,
//!     audio.format().channels,
//!     audio.total_frames()
//! );
//!
//! let (left, right) = audio.stereo_frame(0);
//! ```

#![deny(unsafe_code)]

mod chunk;
mod error;
mod format;
mod wav;

pub use error::{Result, WaveError};
pub use format::{FormatTag, WavFormat};
pub use wav::{WavAudio, MAX_WINDOW_MS};
