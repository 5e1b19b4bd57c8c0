/// FFmpeg wrapper - decodes any input path or URL to in-memory WAV bytes
use anyhow::{bail, Context};
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;

/// Smallest byte count a canonical WAV header can occupy
pub const MIN_WAV_BYTES: usize = 44;

#[derive(Debug, Clone)]
pub struct FfmpegDecoder {
    ffmpeg_path: PathBuf,
}

impl FfmpegDecoder {
    pub fn new(ffmpeg_path: PathBuf) -> Self {
        Self { ffmpeg_path }
    }

    /// Decode an input to 16-bit PCM WAV bytes held in memory.
    ///
    /// FFmpeg handles the input resolution, so anything it can open works
    /// here: local files in any container it decodes, and remote URLs.
    pub async fn decode_to_wav(&self, input: &str) -> anyhow::Result<Vec<u8>> {
        let output = Command::new(&self.ffmpeg_path)
            .arg("-i")
            .arg(input)
            .arg("-f")
            .arg("wav")
            .arg("-c:a")
            .arg("pcm_s16le")
            .arg("-")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .with_context(|| {
                format!("failed to run ffmpeg at {}", self.ffmpeg_path.display())
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("ffmpeg failed to decode {}: {}", input, stderr.trim());
        }

        let mut bytes = output.stdout;
        if bytes.len() < MIN_WAV_BYTES {
            bail!(
                "ffmpeg produced {} bytes for {}; input not found or not decodable",
                bytes.len(),
                input
            );
        }

        fix_header(&mut bytes)?;
        tracing::debug!("Decoded {} WAV bytes from {}", bytes.len(), input);

        Ok(bytes)
    }
}

/// Rewrite the placeholder chunk sizes FFmpeg leaves when it streams WAV to
/// a pipe.
///
/// A pipe cannot be seeked, so FFmpeg writes the RIFF master size and the
/// data chunk size as placeholders. Both are recomputed here from the actual
/// byte count: the master size covers everything after its own field, and
/// the data size covers everything after the data chunk header.
pub fn fix_header(bytes: &mut [u8]) -> anyhow::Result<()> {
    let total = bytes.len();
    if total < MIN_WAV_BYTES {
        bail!(
            "WAV stream is {} bytes, shorter than the smallest possible header",
            total
        );
    }

    let master_size = (total - 8) as u32;
    bytes[4..8].copy_from_slice(&master_size.to_le_bytes());

    // Seek through the subchunks for the data chunk
    let mut pos = 12;
    loop {
        if pos + 8 > total {
            bail!("no data chunk found in {} bytes of WAV stream", total);
        }

        let mut id = [0u8; 4];
        id.copy_from_slice(&bytes[pos..pos + 4]);

        if &id == b"data" {
            let payload_len = (total - pos - 8) as u32;
            bytes[pos + 4..pos + 8].copy_from_slice(&payload_len.to_le_bytes());
            return Ok(());
        }

        let mut size = [0u8; 4];
        size.copy_from_slice(&bytes[pos + 4..pos + 8]);
        pos += 8 + u32::from_le_bytes(size) as usize;
    }
}
