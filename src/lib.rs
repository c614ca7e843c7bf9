//! Brownian - colored noise synthesis for Rust
//!
//! This library renders white and brown noise, smooths it with a Butterworth
//! low-pass filter and saves the result as mono 16-bit PCM WAV.

pub mod config;
pub mod error;
pub mod export;
pub mod filters;
pub mod noise;
pub mod pipeline;
pub mod signals;

// Re-export commonly used types at the crate root
pub use config::NoiseConfig;
pub use error::{Error, Result};
pub use filters::{Butterworth, ButterworthFilter};
pub use noise::{BrownNoise, Reflection, WhiteNoise, integrate_brown, white_noise};
pub use pipeline::{Pipeline, Rendering, Report, Stage};
pub use signals::{AudioSignal, AudioSignalExt, Signal, SliceSignal};
