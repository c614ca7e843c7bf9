//! Audio signal traits and extensions for sample-rate-aware signals.

use crate::Signal;
use crate::error::Result;
use crate::filters::{Butterworth, ButterworthFilter};
use crate::noise::{BrownNoise, Reflection};

/// Common interface for anything that produces audio at a known sample rate.
///
/// # Examples
///
/// ```
/// use brownian::{AudioSignal, WhiteNoise};
///
/// let noise = WhiteNoise::seeded(44100.0, 7);
/// assert_eq!(noise.sample_rate(), 44100.0);
/// ```
pub trait AudioSignal: Signal {
    /// Gets the sample rate at which this audio is being generated.
    ///
    /// # Returns
    ///
    /// Sample rate in Hz (e.g., 44100.0 for CD quality)
    fn sample_rate(&self) -> f64;
}

/// Extension trait chaining the pipeline stages onto any audio signal.
///
/// Automatically implemented for every `AudioSignal`; the sample rate needed by
/// the filter design is taken from the source.
///
/// # Examples
///
/// ```
/// use brownian::{AudioSignalExt, Reflection, Signal, WhiteNoise};
///
/// let mut chain = WhiteNoise::seeded(44100.0, 1)
///     .brown(Reflection::Wrap)
///     .butterworth_lowpass(10_000.0, 6)
///     .unwrap();
/// let block = chain.take_samples(256);
/// assert_eq!(block.len(), 256);
/// ```
pub trait AudioSignalExt: AudioSignal + Sized {
    /// Integrates this signal into brown noise.
    fn brown(self, reflection: Reflection) -> BrownNoise<Self> {
        BrownNoise::new(self, reflection)
    }

    /// Applies a Butterworth low-pass filter of the given order.
    ///
    /// Fails with [`crate::Error::InvalidFilter`] when the cutoff is not below
    /// the Nyquist frequency of this signal or the order is zero.
    fn butterworth_lowpass(self, cutoff: f64, order: usize) -> Result<ButterworthFilter<Self>> {
        let design = Butterworth::lowpass(cutoff, self.sample_rate(), order)?;
        Ok(ButterworthFilter::new(self, &design))
    }
}

impl<T: AudioSignal> AudioSignalExt for T {}
