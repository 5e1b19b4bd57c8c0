//! RIFF/WAVE container parsing and frame-level sample access

use tracing::debug;

use crate::chunk::ChunkReader;
use crate::error::{Result, WaveError};
use crate::format::{FormatTag, WavFormat};

/// Fixed fmt-chunk payload size before any extension bytes
const FMT_CHUNK_MIN_SIZE: u32 = 16;

/// Longest analysis window the frame math supports, in milliseconds
pub const MAX_WINDOW_MS: u32 = 1000;

/// A fully parsed WAVE file: validated header plus an owned copy of the
/// PCM payload
///
/// Constructed only by [`WavAudio::parse`]; a value of this type always
/// satisfies the header invariants (integer PCM, 16-bit samples,
/// consistent block alignment). The payload is copied out of the input
/// at parse time and freed when the value drops.
#[derive(Debug, Clone)]
pub struct WavAudio {
    format: WavFormat,
    data: Vec<u8>,
    total_frames: usize,
}

impl WavAudio {
    /// Parse a WAVE container from raw bytes
    ///
    /// Walks the RIFF structure in order: master header, fmt subchunk,
    /// then chunk by chunk until `data`, whose payload is copied into the
    /// returned value. Every read is bounds-checked against the remaining
    /// input, so truncated or lying containers fail with
    /// [`WaveError::MalformedContainer`] instead of overreading.
    ///
    /// # Errors
    /// - [`WaveError::MalformedContainer`] for bad magic or any overrun
    /// - [`WaveError::UnsupportedEncoding`] for non-PCM format tags
    /// - [`WaveError::UnsupportedBitDepth`] / [`WaveError::InvalidHeader`]
    ///   for headers the decode cannot rely on
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let mut reader = ChunkReader::new(bytes);

        let riff = reader.read_id("RIFF header")?;
        if &riff == b"RIFX" {
            return Err(WaveError::malformed(
                "RIFX (big-endian) wave files are not supported",
            ));
        }
        if &riff != b"RIFF" {
            return Err(WaveError::malformed("input is not a RIFF file"));
        }
        // The master size field only restates the input length; the walk
        // below trusts the actual buffer bounds instead.
        let _riff_size = reader.read_u32("RIFF chunk size")?;

        let wave = reader.read_id("WAVE form type")?;
        if &wave != b"WAVE" {
            return Err(WaveError::malformed("input is not a wave file"));
        }

        let fmt_id = reader.read_id("fmt chunk id")?;
        if &fmt_id != b"fmt " {
            return Err(WaveError::malformed(format!(
                "expected fmt chunk, found {:?}",
                String::from_utf8_lossy(&fmt_id)
            )));
        }
        let fmt_size = reader.read_u32("fmt chunk size")?;
        if fmt_size < FMT_CHUNK_MIN_SIZE {
            return Err(WaveError::malformed(format!(
                "fmt chunk declares {} bytes, expected at least {}",
                fmt_size, FMT_CHUNK_MIN_SIZE
            )));
        }

        let format = WavFormat {
            tag: FormatTag::from(reader.read_u16("format tag")?),
            channels: reader.read_u16("channel count")?,
            sample_rate: reader.read_u32("sample rate")?,
            byte_rate: reader.read_u32("byte rate")?,
            block_align: reader.read_u16("block align")?,
            bits_per_sample: reader.read_u16("bits per sample")?,
        };
        format.validate()?;

        // Extension bytes (cbSize and friends) carry nothing a PCM decode
        // needs.
        reader.skip(
            (fmt_size - FMT_CHUNK_MIN_SIZE) as usize,
            "fmt chunk extension",
        )?;

        let data_size = Self::seek_data_chunk(&mut reader)?;
        let data = reader.read_bytes(data_size, "data chunk payload")?;
        let total_frames = data.len() / format.frame_size();

        debug!(
            "Parsed wave container: {} Hz, {} channel(s), {} frames",
            format.sample_rate, format.channels, total_frames
        );

        Ok(Self {
            format,
            data,
            total_frames,
        })
    }

    /// Walk chunks until `data`, returning its declared payload size
    fn seek_data_chunk(reader: &mut ChunkReader<'_>) -> Result<usize> {
        loop {
            let id = reader.read_id("chunk id")?;
            let size = reader.read_u32("chunk size")? as usize;
            if &id == b"data" {
                return Ok(size);
            }
            debug!(
                "Skipping chunk {:?} ({} bytes)",
                String::from_utf8_lossy(&id),
                size
            );
            reader.skip(size, "chunk payload")?;
        }
    }

    /// Header fields of the fmt subchunk
    pub fn format(&self) -> &WavFormat {
        &self.format
    }

    /// Raw PCM payload
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Size of the PCM payload in bytes
    pub fn data_size(&self) -> usize {
        self.data.len()
    }

    /// Number of complete frames in the payload
    ///
    /// A trailing partial frame, if the data size is not a multiple of
    /// the frame size, is not counted.
    pub fn total_frames(&self) -> usize {
        self.total_frames
    }

    /// Duration of the payload in seconds
    pub fn duration_secs(&self) -> f64 {
        self.total_frames as f64 / f64::from(self.format.sample_rate)
    }

    /// Byte offset of frame `index` within the PCM payload
    pub fn frame_offset(&self, index: usize) -> usize {
        index * self.format.frame_size()
    }

    /// Frames contained in one analysis window of `window_ms` milliseconds
    ///
    /// Computed as `sample_rate / (1000 / window_ms)` with integer
    /// division at each step, so the window length rounds through the
    /// millisecond divisor: 300 ms at 44100 Hz yields 14700 frames (the
    /// divisor 1000/300 truncates to 3), not 13230.
    ///
    /// # Errors
    /// [`WaveError::InvalidWindow`] if `window_ms` is outside 1-1000 or
    /// the sample rate is too low for the window to span a single frame.
    pub fn frames_per_window(&self, window_ms: u32) -> Result<usize> {
        if window_ms == 0 || window_ms > MAX_WINDOW_MS {
            return Err(WaveError::InvalidWindow(window_ms));
        }
        let frames = self.format.sample_rate / (1000 / window_ms);
        if frames == 0 {
            return Err(WaveError::InvalidWindow(window_ms));
        }
        Ok(frames as usize)
    }

    /// Left/right sample pair of frame `index`, decoded as little-endian
    /// signed 16-bit
    ///
    /// Mono audio yields the same sample on both sides; channels past the
    /// first two are ignored.
    ///
    /// # Panics
    /// Panics if `index` is not below [`Self::total_frames`].
    pub fn stereo_frame(&self, index: usize) -> (i16, i16) {
        let offset = self.frame_offset(index);
        let left = i16::from_le_bytes([self.data[offset], self.data[offset + 1]]);
        if self.format.channels == 1 {
            (left, left)
        } else {
            let right = i16::from_le_bytes([self.data[offset + 2], self.data[offset + 3]]);
            (left, right)
        }
    }
}
