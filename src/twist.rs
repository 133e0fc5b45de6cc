//! The twist field: angular offset as a function of normalized height.
//!
//! φ(t) = twist_linear · t + twist_amplitude · sin(2π · twist_cycles · t)
//!
//! Applied as a rigid rotation of the cross-section at height fraction `t`;
//! it never changes the radius function. Zero cycles degenerates to a pure
//! linear twist.

use crate::float_types::{Real, TAU};
use crate::params::ShapeParameters;

/// Twist angle profile over normalized height t ∈ [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwistProfile {
    /// Total linear twist over the full height, radians.
    pub linear: Real,
    /// Amplitude of the sinusoidal component, radians.
    pub amplitude: Real,
    /// Full oscillation cycles over the height.
    pub cycles: u32,
}

impl TwistProfile {
    pub const fn from_parameters(params: &ShapeParameters) -> Self {
        TwistProfile {
            linear: params.twist_linear,
            amplitude: params.twist_amplitude,
            cycles: params.twist_cycles,
        }
    }

    /// Twist angle at height fraction `t`.
    #[inline]
    pub fn angle(&self, t: Real) -> Real {
        self.linear * t + self.amplitude * (TAU * self.cycles as Real * t).sin()
    }
}
