//! WAVE format chunk: sample encodings and header fields

use crate::error::{Result, WaveError};

/// Sample encodings a fmt chunk can declare
///
/// Only integer PCM is decodable here; the other variants exist so a
/// rejection can name what was actually in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatTag {
    /// Integer PCM (`0x0001`)
    Pcm,
    /// IEEE floating point (`0x0003`)
    IeeeFloat,
    /// 8-bit A-law companding (`0x0006`)
    ALaw,
    /// 8-bit mu-law companding (`0x0007`)
    MuLaw,
    /// `WAVE_FORMAT_EXTENSIBLE` (`0xFFFE`)
    Extensible,
    /// Any tag without a named classification
    Unknown(u16),
}

impl From<u16> for FormatTag {
    fn from(tag: u16) -> Self {
        match tag {
            0x0001 => Self::Pcm,
            0x0003 => Self::IeeeFloat,
            0x0006 => Self::ALaw,
            0x0007 => Self::MuLaw,
            0xFFFE => Self::Extensible,
            other => Self::Unknown(other),
        }
    }
}

impl FormatTag {
    /// Raw tag value as stored in the fmt chunk
    pub fn as_u16(self) -> u16 {
        match self {
            Self::Pcm => 0x0001,
            Self::IeeeFloat => 0x0003,
            Self::ALaw => 0x0006,
            Self::MuLaw => 0x0007,
            Self::Extensible => 0xFFFE,
            Self::Unknown(tag) => tag,
        }
    }

    /// Encoding name used in rejection errors
    ///
    /// Tags without a recognized classification all report as a generic
    /// "decoding error".
    pub fn description(self) -> &'static str {
        match self {
            Self::Pcm => "integer PCM",
            Self::IeeeFloat => "IEEE float",
            Self::ALaw => "8-bit A-law",
            Self::MuLaw => "8-bit mu-law",
            Self::Extensible => "extensible wave format",
            Self::Unknown(_) => "decoding error",
        }
    }
}

/// Decoded fields of the fmt subchunk
///
/// All multi-byte fields are little-endian in the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Sample encoding declared by the container
    pub tag: FormatTag,
    /// Number of interleaved channels
    pub channels: u16,
    /// Frames per second
    pub sample_rate: u32,
    /// Bytes per second of audio data (bookkeeping, not validated)
    pub byte_rate: u32,
    /// Bytes per frame across all channels
    pub block_align: u16,
    /// Bits per sample for a single channel
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Bytes occupied by one frame (one sample per channel)
    pub fn frame_size(&self) -> usize {
        usize::from(self.channels) * usize::from(self.bits_per_sample) / 8
    }

    /// Check the invariants the sample decode relies on
    ///
    /// Ordered so the most specific rejection wins: encoding first, then
    /// bit depth, then field consistency.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.tag != FormatTag::Pcm {
            return Err(WaveError::UnsupportedEncoding {
                encoding: self.tag.description(),
                tag: self.tag.as_u16(),
            });
        }
        if self.bits_per_sample != 16 {
            return Err(WaveError::UnsupportedBitDepth(self.bits_per_sample));
        }
        if self.channels == 0 {
            return Err(WaveError::invalid_header("channel count is zero"));
        }
        if self.sample_rate == 0 {
            return Err(WaveError::invalid_header("sample rate is zero"));
        }

        let expected_align =
            u32::from(self.channels) * u32::from(self.bits_per_sample) / 8;
        if u32::from(self.block_align) != expected_align {
            return Err(WaveError::invalid_header(format!(
                "block align {} does not match {} channels at {} bits per sample",
                self.block_align, self.channels, self.bits_per_sample
            )));
        }
        Ok(())
    }
}
