//! White noise generator implementation.

use crate::{AudioSignal, Signal};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A white noise generator.
///
/// White noise has equal power across all frequencies. Each sample is
/// a random value uniformly distributed between -1.0 and 1.0.
pub struct WhiteNoise<R: Rng = rand::rngs::ThreadRng> {
    /// Sample rate in Hz
    sample_rate: f64,
    /// Random number generator
    rng: R,
}

impl WhiteNoise<rand::rngs::ThreadRng> {
    /// Creates a new white noise generator with the default ThreadRng.
    ///
    /// # Arguments
    ///
    /// * `sample_rate` - Sample rate in Hz (e.g., 44100.0 for CD quality)
    ///
    /// # Examples
    ///
    /// ```
    /// use brownian::{Signal, WhiteNoise};
    ///
    /// let mut noise = WhiteNoise::new(44100.0);
    /// let sample = noise.next_sample();
    /// assert!((-1.0..=1.0).contains(&sample));
    /// ```
    pub fn new(sample_rate: f64) -> Self {
        Self {
            sample_rate,
            rng: rand::thread_rng(),
        }
    }
}

impl WhiteNoise<StdRng> {
    /// Creates a reproducible white noise generator from a seed.
    ///
    /// # Examples
    ///
    /// ```
    /// use brownian::{Signal, WhiteNoise};
    ///
    /// let mut a = WhiteNoise::seeded(44100.0, 42);
    /// let mut b = WhiteNoise::seeded(44100.0, 42);
    /// assert_eq!(a.next_sample(), b.next_sample());
    /// ```
    pub fn seeded(sample_rate: f64, seed: u64) -> Self {
        Self::with_rng(sample_rate, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> WhiteNoise<R> {
    /// Creates a new white noise generator with a custom RNG.
    ///
    /// # Arguments
    ///
    /// * `sample_rate` - Sample rate in Hz (e.g., 44100.0 for CD quality)
    /// * `rng` - Random number generator to use
    pub fn with_rng(sample_rate: f64, rng: R) -> Self {
        Self { sample_rate, rng }
    }
}

impl<R: Rng> Signal for WhiteNoise<R> {
    fn next_sample(&mut self) -> f64 {
        self.rng.gen_range(-1.0..=1.0)
    }
}

impl<R: Rng> AudioSignal for WhiteNoise<R> {
    fn sample_rate(&self) -> f64 {
        self.sample_rate
    }
}

/// Draws `len` independent samples uniformly from [-1, 1].
///
/// The generator is borrowed, so the caller decides whether the run is seeded.
///
/// # Examples
///
/// ```
/// use brownian::white_noise;
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(3);
/// let white = white_noise(&mut rng, 44100);
/// assert_eq!(white.len(), 44100);
/// ```
pub fn white_noise<R: Rng>(rng: &mut R, len: usize) -> Vec<f64> {
    (0..len).map(|_| rng.gen_range(-1.0..=1.0)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation() {
        let noise = WhiteNoise::new(44100.0);
        assert_eq!(noise.sample_rate(), 44100.0);
    }

    #[test]
    fn test_sample_range() {
        let mut noise = WhiteNoise::new(44100.0);
        for _ in 0..10000 {
            let sample = noise.next_sample();
            assert!((-1.0..=1.0).contains(&sample));
        }
    }

    #[test]
    fn test_randomness() {
        let mut noise = WhiteNoise::seeded(44100.0, 9);
        let samples: Vec<f64> = (0..100).map(|_| noise.next_sample()).collect();
        let first = samples[0];
        let all_same = samples.iter().all(|&s| s == first);
        assert!(!all_same, "White noise should produce varying samples");
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let a = WhiteNoise::seeded(48000.0, 1234).take_samples(512);
        let b = WhiteNoise::seeded(48000.0, 1234).take_samples(512);
        let c = WhiteNoise::seeded(48000.0, 4321).take_samples(512);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_buffer_length_and_range() {
        let mut rng = StdRng::seed_from_u64(5);
        let white = white_noise(&mut rng, 44100);
        assert_eq!(white.len(), 44100);
        assert!(white.iter().all(|s| (-1.0..=1.0).contains(s)));
    }

    #[test]
    fn test_buffer_matches_streaming_generator() {
        let mut rng = StdRng::seed_from_u64(77);
        let buffered = white_noise(&mut rng, 64);
        let streamed = WhiteNoise::seeded(8000.0, 77).take_samples(64);
        assert_eq!(buffered, streamed);
    }

    #[test]
    fn test_empty_buffer() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(white_noise(&mut rng, 0).is_empty());
    }

    #[test]
    fn test_mean_near_zero() {
        let mut rng = StdRng::seed_from_u64(11);
        let white = white_noise(&mut rng, 100_000);
        let mean = white.iter().sum::<f64>() / white.len() as f64;
        assert!(mean.abs() < 0.02, "mean drifted: {}", mean);
    }
}
