//! Generated audio asset.
//!
//! The reminder loop needs a track even before the user picks one, and the
//! crate ships no binary assets. Instead a short two-tone chime is synthesized
//! into the application data directory on first run and reused afterwards.

use super::data_storage::DataStorage;
use anyhow::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub const CHIME_FILE_NAME: &str = "default_chime.wav";

const SAMPLE_RATE: u32 = 44_100;
/// C5 then E5, a gentle ascending interval.
const TONES: [(f64, f64); 2] = [(523.25, 0.75), (659.25, 0.75)];

/// Returns the path to the default chime, generating the file if needed.
pub fn ensure_default_chime() -> Result<PathBuf> {
    let path = DataStorage::new().get_path(CHIME_FILE_NAME)?;
    if !path.exists() {
        write_wav(&path, &chime_samples(), SAMPLE_RATE)?;
    }
    Ok(path)
}

/// Synthesizes the chime as 16-bit mono PCM samples.
fn chime_samples() -> Vec<i16> {
    let mut samples = Vec::new();
    for (freq, secs) in TONES {
        let total = (SAMPLE_RATE as f64 * secs) as usize;
        for n in 0..total {
            let t = n as f64 / SAMPLE_RATE as f64;
            // Linear fade in/out over 10% of the tone keeps the loop click-free.
            let fade = (n as f64 / (total as f64 * 0.1))
                .min((total - n) as f64 / (total as f64 * 0.1))
                .min(1.0);
            let value = (2.0 * std::f64::consts::PI * freq * t).sin() * fade * 0.4;
            samples.push((value * i16::MAX as f64) as i16);
        }
    }
    samples
}

/// Writes a minimal RIFF/WAVE file: PCM, mono, 16-bit.
fn write_wav(path: &Path, samples: &[i16], sample_rate: u32) -> Result<()> {
    let data_len = (samples.len() * 2) as u32;
    let mut out = BufWriter::new(File::create(path)?);

    out.write_all(b"RIFF")?;
    out.write_all(&(36 + data_len).to_le_bytes())?;
    out.write_all(b"WAVE")?;

    out.write_all(b"fmt ")?;
    out.write_all(&16u32.to_le_bytes())?; // fmt chunk size
    out.write_all(&1u16.to_le_bytes())?; // PCM
    out.write_all(&1u16.to_le_bytes())?; // mono
    out.write_all(&sample_rate.to_le_bytes())?;
    out.write_all(&(sample_rate * 2).to_le_bytes())?; // byte rate
    out.write_all(&2u16.to_le_bytes())?; // block align
    out.write_all(&16u16.to_le_bytes())?; // bits per sample

    out.write_all(b"data")?;
    out.write_all(&data_len.to_le_bytes())?;
    for sample in samples {
        out.write_all(&sample.to_le_bytes())?;
    }
    out.flush()?;
    Ok(())
}
