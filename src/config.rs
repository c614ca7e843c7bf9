//! Settings for one rendering run.

use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::filters::Butterworth;
use crate::noise::Reflection;

/// Default sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;
/// Default duration in seconds.
pub const DEFAULT_DURATION: u32 = 1;
/// Default low-pass cutoff in Hz.
pub const DEFAULT_CUTOFF: f64 = 10_000.0;
/// Default Butterworth order.
pub const DEFAULT_ORDER: usize = 6;

// Length of the RIFF/fmt/data headers hound adds to the data size
const WAV_HEADER_BYTES: u32 = 36;

// 16-bit frames whose byte count plus headers still fits the 32-bit RIFF size
const MAX_SAMPLES: usize = ((u32::MAX - WAV_HEADER_BYTES) / 2) as usize;

/// Everything needed to render and save a noise file.
///
/// # Examples
///
/// ```
/// use brownian::NoiseConfig;
///
/// let config = NoiseConfig::new(48000, 2, "out.wav")
///     .with_cutoff(8000.0)
///     .with_order(4)
///     .with_seed(7);
/// assert_eq!(config.num_samples().unwrap(), 96000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseConfig {
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Duration in whole seconds
    pub duration: u32,
    /// Low-pass cutoff in Hz
    pub cutoff: f64,
    /// Butterworth order
    pub order: usize,
    /// Whether the low-pass stage runs at all
    pub filter: bool,
    /// Boundary rule for the brown noise walk
    pub reflection: Reflection,
    /// Seed for a reproducible run; entropy is used when absent
    pub seed: Option<u64>,
    /// Destination of the final (filtered) signal
    pub output: PathBuf,
    /// Optional destination for the unfiltered brown noise
    pub raw_output: Option<PathBuf>,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            duration: DEFAULT_DURATION,
            cutoff: DEFAULT_CUTOFF,
            order: DEFAULT_ORDER,
            filter: true,
            reflection: Reflection::default(),
            seed: None,
            output: PathBuf::from("brown_noise.wav"),
            raw_output: None,
        }
    }
}

impl NoiseConfig {
    /// Creates a configuration with default filter settings.
    pub fn new(sample_rate: u32, duration: u32, output: impl Into<PathBuf>) -> Self {
        Self {
            sample_rate,
            duration,
            output: output.into(),
            ..Self::default()
        }
    }

    /// Set the cutoff frequency (builder pattern)
    pub fn with_cutoff(mut self, cutoff: f64) -> Self {
        self.cutoff = cutoff;
        self
    }

    /// Set the filter order (builder pattern)
    pub fn with_order(mut self, order: usize) -> Self {
        self.order = order;
        self
    }

    /// Enable or disable the low-pass stage (builder pattern)
    pub fn with_filter(mut self, filter: bool) -> Self {
        self.filter = filter;
        self
    }

    /// Set the reflection rule (builder pattern)
    pub fn with_reflection(mut self, reflection: Reflection) -> Self {
        self.reflection = reflection;
        self
    }

    /// Make the run reproducible (builder pattern)
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Also save the unfiltered signal (builder pattern)
    pub fn with_raw_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.raw_output = Some(path.into());
        self
    }

    /// Half the sample rate.
    pub fn nyquist(&self) -> f64 {
        self.sample_rate as f64 / 2.0
    }

    /// Buffer length, `sample_rate * duration`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameters`] when either factor is zero or the
    /// product is too large for a 16-bit WAV data chunk.
    pub fn num_samples(&self) -> Result<usize> {
        if self.sample_rate == 0 {
            return Err(Error::InvalidParameters(
                "sample rate must be greater than zero".into(),
            ));
        }
        if self.duration == 0 {
            return Err(Error::InvalidParameters(
                "duration must be greater than zero".into(),
            ));
        }
        (self.sample_rate as usize)
            .checked_mul(self.duration as usize)
            .filter(|&n| n <= MAX_SAMPLES)
            .ok_or_else(|| {
                Error::InvalidParameters(format!(
                    "{} s at {} Hz is too long for a WAV file",
                    self.duration, self.sample_rate
                ))
            })
    }

    /// Designs the low-pass filter these settings describe.
    pub fn design_filter(&self) -> Result<Butterworth> {
        Butterworth::lowpass(self.cutoff, self.sample_rate as f64, self.order)
    }

    /// Checks every setting before any buffer is allocated.
    ///
    /// The filter settings are only checked when filtering is enabled.
    pub fn validate(&self) -> Result<()> {
        self.num_samples()?;
        if self.filter {
            self.design_filter()?;
        }
        Ok(())
    }
}
