//! The immutable input record for one shape generation.

use crate::float_types::Real;

/// The eleven inputs that fully determine a twisted hollow shell.
///
/// Angles are radians; height, mass and wall thickness are in model units
/// with material density fixed at [`crate::mass::MATERIAL_DENSITY`]. The
/// cross-section base radius is not an input: the lateral scale is solved
/// from `mass` (see [`crate::mass`]).
///
/// `twist_cycles` being unsigned makes the "non-negative integer" invariant
/// unrepresentable to violate; the remaining invariants (positive height,
/// mass, thickness, perimeter ratio, all floats finite) are enforced by
/// [`crate::validate::validate_parameters`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeParameters {
    /// 4-fold harmonic amplitude of the base cross-section.
    pub c4_base: Real,
    /// 8-fold harmonic amplitude of the base cross-section.
    pub c8_base: Real,
    /// 4-fold harmonic amplitude of the top cross-section.
    pub c4_top: Real,
    /// 8-fold harmonic amplitude of the top cross-section.
    pub c8_top: Real,
    /// Total linear twist over the full height, radians.
    pub twist_linear: Real,
    /// Amplitude of the oscillating twist component, radians.
    pub twist_amplitude: Real,
    /// Number of full oscillation cycles over the height.
    pub twist_cycles: u32,
    /// Perimeter of the top cross-section divided by the perimeter of the base.
    pub perimeter_ratio: Real,
    /// Height of the solid. Held fixed; never rescaled by mass matching.
    pub height: Real,
    /// Target material mass of the hollow shell.
    pub mass: Real,
    /// Wall thickness between outer and inner surfaces.
    pub thickness: Real,
}

impl ShapeParameters {
    /// A unit cylinder shell: circular sections, no twist, ratio 1.
    /// Handy baseline for tests and demos; still needs mass/height/thickness.
    pub const fn cylinder(height: Real, mass: Real, thickness: Real) -> Self {
        ShapeParameters {
            c4_base: 0.0,
            c8_base: 0.0,
            c4_top: 0.0,
            c8_top: 0.0,
            twist_linear: 0.0,
            twist_amplitude: 0.0,
            twist_cycles: 0,
            perimeter_ratio: 1.0,
            height,
            mass,
            thickness,
        }
    }
}
