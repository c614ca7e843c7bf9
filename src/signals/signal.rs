//! Core signal trait and buffer-backed source.

/// Common interface for all signal sources and processors.
///
/// This trait defines the core functionality for anything that can generate
/// samples: noise generators, integrators, filters.
///
/// The trait provides two fundamental operations:
/// - Single sample generation via `next_sample()`
/// - Batch processing via `process()`
pub trait Signal {
    /// Generates the next sample from the signal.
    ///
    /// # Returns
    ///
    /// A sample value, typically between -1.0 and 1.0 for audio signals
    fn next_sample(&mut self) -> f64;

    /// Generates multiple samples into a buffer.
    ///
    /// Default implementation calls `next_sample()` for each element.
    ///
    /// # Arguments
    ///
    /// * `buffer` - Mutable slice to fill with samples
    fn process(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample();
        }
    }

    /// Collects `len` samples into a freshly allocated buffer.
    fn take_samples(&mut self, len: usize) -> Vec<f64> {
        let mut buffer = vec![0.0; len];
        self.process(&mut buffer);
        buffer
    }
}

/// Replays a borrowed buffer as a signal.
///
/// Once the buffer is exhausted the signal yields silence.
///
/// # Examples
///
/// ```
/// use brownian::{Signal, SliceSignal};
///
/// let mut signal = SliceSignal::new(&[0.25, -0.5], 44100.0);
/// assert_eq!(signal.next_sample(), 0.25);
/// assert_eq!(signal.next_sample(), -0.5);
/// assert_eq!(signal.next_sample(), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct SliceSignal<'a> {
    samples: &'a [f64],
    position: usize,
    sample_rate: f64,
}

impl<'a> SliceSignal<'a> {
    /// Creates a signal over `samples` recorded at `sample_rate` Hz.
    pub fn new(samples: &'a [f64], sample_rate: f64) -> Self {
        Self {
            samples,
            position: 0,
            sample_rate,
        }
    }

    /// Number of samples not yet read.
    pub fn remaining(&self) -> usize {
        self.samples.len() - self.position
    }
}

impl Signal for SliceSignal<'_> {
    fn next_sample(&mut self) -> f64 {
        match self.samples.get(self.position) {
            Some(&sample) => {
                self.position += 1;
                sample
            }
            None => 0.0,
        }
    }
}

impl crate::AudioSignal for SliceSignal<'_> {
    fn sample_rate(&self) -> f64 {
        self.sample_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_signal_replays_then_silence() {
        let data = [0.1, 0.2, 0.3];
        let mut signal = SliceSignal::new(&data, 8000.0);

        assert_eq!(signal.remaining(), 3);
        let out = signal.take_samples(5);
        assert_eq!(out, vec![0.1, 0.2, 0.3, 0.0, 0.0]);
        assert_eq!(signal.remaining(), 0);
    }

    #[test]
    fn test_process_fills_buffer() {
        let data = [1.0, -1.0];
        let mut signal = SliceSignal::new(&data, 8000.0);
        let mut buffer = [9.0; 2];
        signal.process(&mut buffer);
        assert_eq!(buffer, [1.0, -1.0]);
    }
}
