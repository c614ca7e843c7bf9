//! Digital Butterworth low-pass filters.
//!
//! The analog prototype has its poles evenly spaced on the left half of the
//! unit circle. Each conjugate pole pair becomes one second-order section after
//! the bilinear transform, prewarped so that the digital response is exactly
//! -3 dB at the cutoff; odd orders add a first-order section for the real pole.
//! The result has the same transfer function as SciPy's
//! `butter(order, cutoff, fs=fs, btype="low")`.

use std::f64::consts::PI;

use super::BiquadSection;
use crate::error::{Error, Result};
use crate::{AudioSignal, Signal};

/// A designed Butterworth low-pass filter.
///
/// # Examples
///
/// ```
/// use brownian::filters::Butterworth;
///
/// let filter = Butterworth::lowpass(10_000.0, 44100.0, 6).unwrap();
/// let output = filter.filter(&[1.0, 0.0, 0.0, 0.0]);
/// assert_eq!(output.len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct Butterworth {
    cutoff: f64,
    sample_rate: f64,
    order: usize,
    sections: Vec<BiquadSection>,
}

impl Butterworth {
    /// Designs a low-pass filter.
    ///
    /// # Arguments
    ///
    /// * `cutoff` - Cutoff frequency in Hz, strictly between 0 and Nyquist
    /// * `sample_rate` - Sample rate in Hz
    /// * `order` - Filter order (higher = steeper roll-off), at least 1
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFilter`] when the cutoff is at or above the
    /// Nyquist frequency, not positive, or not finite, when the sample rate is
    /// not positive, or when the order is zero.
    pub fn lowpass(cutoff: f64, sample_rate: f64, order: usize) -> Result<Self> {
        validate(cutoff, sample_rate, order)?;

        // Prewarped cutoff for the bilinear map s = (1 - z^-1) / (1 + z^-1)
        let omega = (PI * cutoff / sample_rate).tan();

        let mut sections: Vec<BiquadSection> = (0..order / 2)
            .map(|k| {
                let zeta = (PI * (2 * k + 1) as f64 / (2 * order) as f64).sin();
                BiquadSection::lowpass_pair(omega, zeta)
            })
            .collect();
        if order % 2 == 1 {
            sections.push(BiquadSection::lowpass_single(omega));
        }

        log::debug!(
            "designed order {} Butterworth low-pass at {} Hz (fs {} Hz) as {} sections",
            order,
            cutoff,
            sample_rate,
            sections.len()
        );

        Ok(Self {
            cutoff,
            sample_rate,
            order,
            sections,
        })
    }

    /// Cutoff frequency in Hz.
    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Filter order.
    pub fn order(&self) -> usize {
        self.order
    }

    /// The cascaded sections, first to last.
    pub fn sections(&self) -> &[BiquadSection] {
        &self.sections
    }

    /// Filters a buffer causally, starting from rest.
    ///
    /// The output has the same length as the input.
    pub fn filter(&self, input: &[f64]) -> Vec<f64> {
        let mut sections = self.sections.clone();
        input
            .iter()
            .map(|&x| run_cascade(&mut sections, x))
            .collect()
    }

    /// Magnitude response at `freq` Hz.
    pub fn gain_at(&self, freq: f64) -> f64 {
        let w = 2.0 * PI * freq / self.sample_rate;
        self.sections.iter().map(|s| s.magnitude_at(w)).product()
    }

    /// Expands the cascade into a single numerator/denominator pair.
    pub fn transfer_function(&self) -> TransferFunction {
        let (mut b, mut a) = (vec![1.0], vec![1.0]);
        for section in &self.sections {
            b = convolve(&b, &section.b());
            a = convolve(&a, &section.a());
        }
        // First-order sections pad both polynomials with a trailing zero.
        let len = self.order + 1;
        b.truncate(len);
        a.truncate(len);
        TransferFunction { b, a }
    }
}

fn validate(cutoff: f64, sample_rate: f64, order: usize) -> Result<()> {
    if order < 1 {
        return Err(Error::InvalidFilter("order must be at least 1".into()));
    }
    if !sample_rate.is_finite() || sample_rate <= 0.0 {
        return Err(Error::InvalidFilter(format!(
            "sample rate must be positive, got {}",
            sample_rate
        )));
    }
    if !cutoff.is_finite() || cutoff <= 0.0 {
        return Err(Error::InvalidFilter(format!(
            "cutoff must be a positive frequency, got {}",
            cutoff
        )));
    }
    let nyquist = sample_rate / 2.0;
    if cutoff >= nyquist {
        return Err(Error::InvalidFilter(format!(
            "cutoff {} Hz must be below the Nyquist frequency {} Hz",
            cutoff, nyquist
        )));
    }
    Ok(())
}

#[inline]
fn run_cascade(sections: &mut [BiquadSection], x: f64) -> f64 {
    sections
        .iter_mut()
        .fold(x, |acc, section| section.process_sample(acc))
}

fn convolve(p: &[f64], q: &[f64]) -> Vec<f64> {
    let mut out = vec![0.0; p.len() + q.len() - 1];
    for (i, &pi) in p.iter().enumerate() {
        for (j, &qj) in q.iter().enumerate() {
            out[i + j] += pi * qj;
        }
    }
    out
}

/// Filter coefficients in polynomial form, `b` over `a`.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferFunction {
    /// Numerator (feedforward) coefficients
    pub b: Vec<f64>,
    /// Denominator (feedback) coefficients, `a[0]` first
    pub a: Vec<f64>,
}

impl TransferFunction {
    /// Applies the difference equation
    /// `a[0]·y[n] = Σ b[k]·x[n-k] - Σ_{k≥1} a[k]·y[n-k]`
    /// in transposed direct form II, starting from rest.
    ///
    /// # Examples
    ///
    /// ```
    /// use brownian::filters::TransferFunction;
    ///
    /// // Two-tap moving average
    /// let tf = TransferFunction { b: vec![0.5, 0.5], a: vec![1.0] };
    /// assert_eq!(tf.lfilter(&[1.0, 1.0, 0.0]), vec![0.5, 1.0, 0.5]);
    /// ```
    pub fn lfilter(&self, input: &[f64]) -> Vec<f64> {
        let a0 = self.a.first().copied().unwrap_or(1.0);
        let n = self.b.len().max(self.a.len());
        if n == 0 {
            return vec![0.0; input.len()];
        }
        let coeff = |c: &[f64], k: usize| c.get(k).copied().unwrap_or(0.0) / a0;
        let b: Vec<f64> = (0..n).map(|k| coeff(&self.b[..], k)).collect();
        let a: Vec<f64> = (0..n).map(|k| coeff(&self.a[..], k)).collect();

        let mut z = vec![0.0; n.saturating_sub(1)];
        input
            .iter()
            .map(|&x| {
                let y = b[0] * x + z.first().copied().unwrap_or(0.0);
                for i in 0..z.len() {
                    let carry = z.get(i + 1).copied().unwrap_or(0.0);
                    z[i] = b[i + 1] * x + carry - a[i + 1] * y;
                }
                y
            })
            .collect()
    }
}

/// A streaming Butterworth low-pass filter over a source signal.
pub struct ButterworthFilter<S: Signal> {
    source: S,
    sections: Vec<BiquadSection>,
}

impl<S: Signal> ButterworthFilter<S> {
    /// Wraps `source` with a fresh copy of the designed cascade.
    pub fn new(source: S, design: &Butterworth) -> Self {
        let mut sections = design.sections.clone();
        sections.iter_mut().for_each(BiquadSection::reset);
        Self { source, sections }
    }
}

impl<S: Signal> Signal for ButterworthFilter<S> {
    fn next_sample(&mut self) -> f64 {
        let x = self.source.next_sample();
        run_cascade(&mut self.sections, x)
    }
}

impl<S: AudioSignal> AudioSignal for ButterworthFilter<S> {
    fn sample_rate(&self) -> f64 {
        self.source.sample_rate()
    }
}
