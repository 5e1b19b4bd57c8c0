//! Shared helpers for in-crate tests

use loudcheck_wave::WavAudio;

/// Build a parsed container around interleaved 16-bit samples
pub(crate) fn audio_from_samples(channels: u16, sample_rate: u32, samples: &[i16]) -> WavAudio {
    let block_align = channels * 2;
    let byte_rate = sample_rate * u32::from(block_align);
    let data_len = (samples.len() * 2) as u32;

    let mut bytes = Vec::with_capacity(44 + samples.len() * 2);
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(36 + data_len).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");
    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&16u32.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes());
    bytes.extend_from_slice(&channels.to_le_bytes());
    bytes.extend_from_slice(&sample_rate.to_le_bytes());
    bytes.extend_from_slice(&byte_rate.to_le_bytes());
    bytes.extend_from_slice(&block_align.to_le_bytes());
    bytes.extend_from_slice(&16u16.to_le_bytes());
    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&data_len.to_le_bytes());
    for sample in samples {
        bytes.extend_from_slice(&sample.to_le_bytes());
    }

    WavAudio::parse(&bytes).expect("synthesized container must parse")
}

/// Interleaved stereo with every sample at `level` on both channels
pub(crate) fn constant_stereo(level: i16, frames: usize) -> Vec<i16> {
    vec![level; frames * 2]
}

/// Interleaved stereo built from `(level, frames)` sections
pub(crate) fn stereo_sections(sections: &[(i16, usize)]) -> Vec<i16> {
    let total: usize = sections.iter().map(|(_, frames)| frames * 2).sum();
    let mut samples = Vec::with_capacity(total);
    for &(level, frames) in sections {
        samples.extend_from_slice(&constant_stereo(level, frames));
    }
    samples
}
