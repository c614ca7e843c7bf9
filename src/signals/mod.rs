//! Signal processing types and traits.
//!
//! This module provides the streaming abstractions shared by the noise
//! generators and the filters:
//! - `Signal` trait for all signal sources and processors
//! - `AudioSignal` trait for sample-rate-aware signals
//! - `AudioSignalExt` trait for chaining the integrator and the low-pass filter
//! - `SliceSignal` for replaying an in-memory buffer

mod audio;
mod signal;

pub use audio::{AudioSignal, AudioSignalExt};
pub use signal::{Signal, SliceSignal};
