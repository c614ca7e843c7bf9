//! Brown (red) noise by integrating white noise.
//!
//! Each output sample is the previous output plus the next input sample. The
//! running sum is kept inside [-1, 1] by reflecting it back by whole units
//! whenever it crosses a boundary, which stops the walk from drifting away
//! while keeping its 1/f² spectrum.

use crate::{AudioSignal, Signal};

/// How the random walk is brought back inside [-1, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Reflection {
    /// Shift by exactly one unit. Sums beyond ±2 stay out of range.
    Single,
    /// Shift by as many whole units as needed to land in [-1, 1].
    #[default]
    Wrap,
    /// Saturate at the boundary.
    Clamp,
}

impl Reflection {
    /// Applies the boundary rule to a raw running sum.
    ///
    /// `Single` and `Wrap` agree for every sum within [-2, 2], which covers
    /// all sums produced from white noise in [-1, 1].
    ///
    /// # Examples
    ///
    /// ```
    /// use brownian::Reflection;
    ///
    /// assert_eq!(Reflection::Single.apply(1.5), 0.5);
    /// assert_eq!(Reflection::Single.apply(3.5), 2.5);
    /// assert_eq!(Reflection::Wrap.apply(3.5), 0.5);
    /// assert_eq!(Reflection::Clamp.apply(-3.5), -1.0);
    /// ```
    #[inline]
    pub fn apply(self, raw: f64) -> f64 {
        match self {
            Reflection::Single => {
                if raw < -1.0 {
                    raw + 1.0
                } else if raw > 1.0 {
                    raw - 1.0
                } else {
                    raw
                }
            }
            Reflection::Wrap => {
                if raw > 1.0 {
                    raw - (raw - 1.0).ceil()
                } else if raw < -1.0 {
                    raw + (-1.0 - raw).ceil()
                } else {
                    raw
                }
            }
            Reflection::Clamp => raw.clamp(-1.0, 1.0),
        }
    }
}

/// Integrates a white noise buffer into brown noise.
///
/// The first output sample equals the first input sample; every later sample
/// is `reflection.apply(previous + white[i])`. The output has the same length
/// as the input.
///
/// # Examples
///
/// ```
/// use brownian::{Reflection, integrate_brown};
///
/// let brown = integrate_brown(&[0.5, 0.75, -0.25], Reflection::Wrap);
/// assert_eq!(brown, vec![0.5, 0.25, 0.0]);
/// ```
pub fn integrate_brown(white: &[f64], reflection: Reflection) -> Vec<f64> {
    let mut brown = Vec::with_capacity(white.len());
    let Some((&first, rest)) = white.split_first() else {
        return brown;
    };

    brown.push(first);
    let mut last = first;
    let mut excursions = 0usize;
    for &step in rest {
        last = reflection.apply(last + step);
        if !(-1.0..=1.0).contains(&last) {
            excursions += 1;
        }
        brown.push(last);
    }

    if excursions > 0 {
        log::warn!(
            "{} brown noise samples left [-1, 1] under {:?} reflection",
            excursions,
            reflection
        );
    }
    brown
}

/// A streaming brown noise integrator over any source signal.
///
/// # Examples
///
/// ```
/// use brownian::{BrownNoise, Reflection, Signal, WhiteNoise};
///
/// let mut brown = BrownNoise::new(WhiteNoise::seeded(44100.0, 8), Reflection::Wrap);
/// let sample = brown.next_sample();
/// assert!((-1.0..=1.0).contains(&sample));
/// ```
pub struct BrownNoise<S: Signal> {
    source: S,
    reflection: Reflection,
    // None until the first sample has been produced
    last: Option<f64>,
}

impl<S: Signal> BrownNoise<S> {
    /// Creates an integrator reading from `source`.
    pub fn new(source: S, reflection: Reflection) -> Self {
        Self {
            source,
            reflection,
            last: None,
        }
    }

    /// Returns the boundary rule in use.
    pub fn reflection(&self) -> Reflection {
        self.reflection
    }

    /// Forgets the walk position; the next sample restarts from the source.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

impl<S: Signal> Signal for BrownNoise<S> {
    fn next_sample(&mut self) -> f64 {
        let step = self.source.next_sample();
        let next = match self.last {
            None => step,
            Some(last) => self.reflection.apply(last + step),
        };
        self.last = Some(next);
        next
    }
}

impl<S: AudioSignal> AudioSignal for BrownNoise<S> {
    fn sample_rate(&self) -> f64 {
        self.source.sample_rate()
    }
}
