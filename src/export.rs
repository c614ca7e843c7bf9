//! Quantization and WAV output.
//!
//! The floating-point signal is normalized against its peak so that the
//! loudest sample lands on full scale, scaled to the signed 16-bit range and
//! written as mono PCM.

use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};

use crate::error::{Error, Result};

/// Largest positive 16-bit sample value.
pub const MAX_INT_16: f64 = i16::MAX as f64;

/// Normalizes `samples` by their peak absolute value and quantizes to 16 bits.
///
/// Scaled values are truncated toward zero. A silent buffer stays silent.
///
/// # Errors
///
/// Returns [`Error::NonFiniteSamples`] when any sample is NaN or infinite.
///
/// # Examples
///
/// ```
/// use brownian::export::quantize;
///
/// let pcm = quantize(&[0.5, -0.25, 0.0]).unwrap();
/// assert_eq!(pcm, vec![32767, -16383, 0]);
/// ```
pub fn quantize(samples: &[f64]) -> Result<Vec<i16>> {
    let peak = peak_amplitude(samples);
    if !peak.is_finite() {
        return Err(Error::NonFiniteSamples);
    }
    if peak == 0.0 {
        return Ok(vec![0; samples.len()]);
    }

    Ok(samples
        .iter()
        .map(|&s| (s / peak * MAX_INT_16) as i16)
        .collect())
}

/// Largest absolute sample value, NaN if any sample is NaN.
pub fn peak_amplitude(samples: &[f64]) -> f64 {
    samples.iter().fold(0.0_f64, |peak, &s| {
        if s.is_nan() || peak.is_nan() {
            f64::NAN
        } else {
            peak.max(s.abs())
        }
    })
}

/// The WAV layout every exported file uses.
pub fn wav_spec(sample_rate: u32) -> WavSpec {
    WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    }
}

/// Writes 16-bit samples to a mono PCM WAV file.
///
/// # Errors
///
/// Any failure to create, write or finalize the file is returned as
/// [`Error::Save`] carrying the target path.
pub fn write_wav(path: impl AsRef<Path>, sample_rate: u32, samples: &[i16]) -> Result<()> {
    let path = path.as_ref();
    let save_err = |source| Error::Save {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = WavWriter::create(path, wav_spec(sample_rate)).map_err(save_err)?;
    for &sample in samples {
        writer.write_sample(sample).map_err(save_err)?;
    }
    writer.finalize().map_err(save_err)
}

/// Quantizes and writes a floating-point buffer in one step.
pub fn export(path: impl AsRef<Path>, sample_rate: u32, samples: &[f64]) -> Result<()> {
    let pcm = quantize(samples)?;
    write_wav(path, sample_rate, &pcm)
}
