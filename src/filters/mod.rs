//! Low-pass filtering.
//!
//! `Butterworth` designs the filter and applies it to whole buffers;
//! `ButterworthFilter` runs the same cascade over a streaming `Signal`.

mod biquad;
mod butterworth;

pub use biquad::BiquadSection;
pub use butterworth::{Butterworth, ButterworthFilter, TransferFunction};
