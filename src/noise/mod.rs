//! Noise generators for audio synthesis.
//!
//! White noise is the raw material; brown noise is derived from it by
//! integration with reflection at the unit boundaries.

mod brown;
mod white;

pub use brown::{BrownNoise, Reflection, integrate_brown};
pub use white::{WhiteNoise, white_noise};
