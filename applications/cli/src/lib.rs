//! Loudcheck CLI
//!
//! Decodes an input through FFmpeg, parses the resulting WAV stream, and
//! runs the loudness detectors over it.
//!
//! This library exposes the binary's components for testing purposes.

pub mod decode;
pub mod render;

// Re-export commonly used types for convenience
pub use decode::{fix_header, FfmpegDecoder};
