//! Second-order filter sections.
//!
//! A `BiquadSection` holds normalized coefficients (`a0 == 1`) and the
//! Direct Form I history for one stage of a cascaded IIR filter. First-order
//! stages are stored as biquads with `b2 == a2 == 0`.

/// One stage of a cascaded IIR filter.
#[derive(Debug, Clone, PartialEq)]
pub struct BiquadSection {
    // Biquad coefficients (normalized)
    b0: f64, // Feedforward coefficient for x[n]
    b1: f64, // Feedforward coefficient for x[n-1]
    b2: f64, // Feedforward coefficient for x[n-2]
    a1: f64, // Feedback coefficient for y[n-1]
    a2: f64, // Feedback coefficient for y[n-2]

    // Filter state variables (previous samples)
    x1: f64, // Input at t-1
    x2: f64, // Input at t-2
    y1: f64, // Output at t-1
    y2: f64, // Output at t-2
}

impl BiquadSection {
    /// Builds a section from raw coefficients, normalizing by `a0`.
    pub fn new(b: [f64; 3], a: [f64; 3]) -> Self {
        let a0 = a[0];
        Self {
            b0: b[0] / a0,
            b1: b[1] / a0,
            b2: b[2] / a0,
            a1: a[1] / a0,
            a2: a[2] / a0,
            x1: 0.0,
            x2: 0.0,
            y1: 0.0,
            y2: 0.0,
        }
    }

    /// Low-pass stage for one conjugate pole pair of an analog prototype.
    ///
    /// `omega` is the prewarped cutoff `tan(π·fc/fs)` and `zeta` the damping of
    /// the pole pair. Both zeros sit at Nyquist.
    pub(crate) fn lowpass_pair(omega: f64, zeta: f64) -> Self {
        let omega2 = omega * omega;
        let a0 = 1.0 + 2.0 * zeta * omega + omega2;
        let a1 = 2.0 * (omega2 - 1.0);
        let a2 = 1.0 - 2.0 * zeta * omega + omega2;
        Self::new([omega2, 2.0 * omega2, omega2], [a0, a1, a2])
    }

    /// First-order low-pass stage for the real pole of an odd-order prototype.
    pub(crate) fn lowpass_single(omega: f64) -> Self {
        Self::new([omega, omega, 0.0], [1.0 + omega, omega - 1.0, 0.0])
    }

    /// Normalized feedforward coefficients `[b0, b1, b2]`.
    pub fn b(&self) -> [f64; 3] {
        [self.b0, self.b1, self.b2]
    }

    /// Normalized feedback coefficients `[1, a1, a2]`.
    pub fn a(&self) -> [f64; 3] {
        [1.0, self.a1, self.a2]
    }

    /// Runs one sample through the section.
    #[inline]
    pub fn process_sample(&mut self, x0: f64) -> f64 {
        // Direct Form I biquad difference equation:
        // y[n] = b0*x[n] + b1*x[n-1] + b2*x[n-2] - a1*y[n-1] - a2*y[n-2]
        let y0 = self.b0 * x0 + self.b1 * self.x1 + self.b2 * self.x2
            - self.a1 * self.y1
            - self.a2 * self.y2;

        self.x2 = self.x1;
        self.x1 = x0;
        self.y2 = self.y1;
        self.y1 = y0;

        y0
    }

    /// Clears the sample history.
    pub fn reset(&mut self) {
        self.x1 = 0.0;
        self.x2 = 0.0;
        self.y1 = 0.0;
        self.y2 = 0.0;
    }

    /// Magnitude response at the normalized angular frequency `w` (radians per sample).
    pub fn magnitude_at(&self, w: f64) -> f64 {
        let (b, a) = (self.b(), self.a());
        evaluate(&b, w) / evaluate(&a, w)
    }
}

// |c0 + c1·e^{-jw} + c2·e^{-2jw}|
fn evaluate(coeffs: &[f64; 3], w: f64) -> f64 {
    let (mut re, mut im) = (0.0, 0.0);
    for (k, c) in coeffs.iter().enumerate() {
        let phase = w * k as f64;
        re += c * phase.cos();
        im -= c * phase.sin();
    }
    re.hypot(im)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_1_SQRT_2, PI};

    #[test]
    fn test_normalizes_by_a0() {
        let section = BiquadSection::new([2.0, 4.0, 2.0], [2.0, 1.0, 0.5]);
        assert_eq!(section.b(), [1.0, 2.0, 1.0]);
        assert_eq!(section.a(), [1.0, 0.5, 0.25]);
    }

    #[test]
    fn test_pair_matches_reference_design() {
        // Second-order Butterworth at half Nyquist: omega = tan(pi/4) = 1.
        let section = BiquadSection::lowpass_pair(1.0, FRAC_1_SQRT_2);
        let b = section.b();
        let a = section.a();
        assert!((b[0] - 0.292_893_218_8).abs() < 1e-9);
        assert!((b[1] - 0.585_786_437_6).abs() < 1e-9);
        assert!((b[2] - 0.292_893_218_8).abs() < 1e-9);
        assert!(a[1].abs() < 1e-12);
        assert!((a[2] - 0.171_572_875_3).abs() < 1e-9);
    }

    #[test]
    fn test_unity_dc_gain() {
        let pair = BiquadSection::lowpass_pair(0.3, 0.5);
        let single = BiquadSection::lowpass_single(0.3);
        assert!((pair.magnitude_at(0.0) - 1.0).abs() < 1e-12);
        assert!((single.magnitude_at(0.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_at_nyquist() {
        let pair = BiquadSection::lowpass_pair(0.3, 0.5);
        assert!(pair.magnitude_at(PI) < 1e-9);
    }

    #[test]
    fn test_step_response_settles_to_one() {
        let mut section = BiquadSection::lowpass_pair(0.1, FRAC_1_SQRT_2);
        let mut last = 0.0;
        for _ in 0..2000 {
            last = section.process_sample(1.0);
            assert!(last.is_finite());
        }
        assert!((last - 1.0).abs() < 1e-6, "settled at {}", last);
    }

    #[test]
    fn test_reset_clears_history() {
        let mut section = BiquadSection::lowpass_single(0.2);
        let first = section.process_sample(1.0);
        section.process_sample(1.0);
        section.reset();
        assert_eq!(section.process_sample(1.0), first);
    }
}
