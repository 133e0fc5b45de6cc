//! Mass-normalized lateral scaling.
//!
//! Height is held fixed as given. A uniform lateral scale `s` is solved so
//! that the material volume of the hollow shell times the material density
//! equals the requested mass. The closed form over the full (unhollowed)
//! solid, s₀ = sqrt(mass / (density · V_unit)), is exact for lateral scaling
//! of the outer surface because cross-sectional area scales with s²; the
//! cavity wall keeps its absolute thickness though, so the hollow volume is
//! not analytic in s and s₀ only seeds a bounded bisection.

use crate::errors::{NumericError, ShapeError};
use crate::float_types::{Real, tolerance};
use crate::offset::cavity_area;
use crate::section::ring_area;
use crate::solid::SolidProfile;
use log::{debug, trace};

/// Assumed constant material density. Mass inputs are expressed in units of
/// this density; callers working in grams and millimetres can pre-divide.
pub const MATERIAL_DENSITY: Real = 1.0;

/// Trapezoidal integral of per-layer areas over height.
fn integrate_areas(solid: &SolidProfile, areas: &[Real]) -> Real {
    let mut volume = 0.0;
    for (pair, a) in solid.layers.windows(2).zip(areas.windows(2)) {
        volume += 0.5 * (a[0] + a[1]) * (pair[1].z - pair[0].z);
    }
    volume
}

/// Volume enclosed by the outer surface at unit lateral scale.
pub fn unit_volume(solid: &SolidProfile, theta_segments: usize) -> Real {
    let areas: Vec<Real> = solid
        .layers
        .iter()
        .map(|layer| ring_area(&layer.section.ring(theta_segments)))
        .collect();
    integrate_areas(solid, &areas)
}

/// Material volume of the shell at lateral scale `scale`: outer volume minus
/// the cavity carved by the fixed wall thickness. Layers whose cavity
/// collapses contribute their full outer area.
pub fn material_volume(
    solid: &SolidProfile,
    thickness: Real,
    theta_segments: usize,
    scale: Real,
) -> Real {
    let areas: Vec<Real> = solid
        .layers
        .iter()
        .map(|layer| {
            let scaled = layer.section.scaled(scale);
            let outer = ring_area(&scaled.ring(theta_segments));
            let cavity = cavity_area(&scaled, thickness, theta_segments);
            (outer - cavity).max(0.0)
        })
        .collect();
    integrate_areas(solid, &areas)
}

/// Solve the lateral scale factor matching the target mass.
///
/// Material volume grows monotonically with `s` (the outer surface grows as
/// s² while the cavity trails it by the fixed wall), so bisection between
/// the closed-form seed and a doubled upper bracket converges
/// deterministically.
pub fn lateral_scale(
    solid: &SolidProfile,
    mass: Real,
    thickness: Real,
    theta_segments: usize,
) -> Result<Real, ShapeError> {
    let v_unit = unit_volume(solid, theta_segments);
    if !v_unit.is_finite() || v_unit <= tolerance() {
        return Err(NumericError::DegenerateVolume(v_unit).into());
    }

    let target = mass / MATERIAL_DENSITY;

    // Closed-form seed over the full solid. Material volume can only be
    // smaller at the same scale, so this is a lower bracket.
    let seed = (target / v_unit).sqrt();
    let mut lo = seed;
    let residual = |s: Real| material_volume(solid, thickness, theta_segments, s) - target;

    if residual(lo).abs() <= target * 1e-12 {
        return Ok(lo);
    }

    let mut hi = seed;
    let mut bracketed = false;
    for _ in 0..64 {
        hi *= 2.0;
        if residual(hi) >= 0.0 {
            bracketed = true;
            break;
        }
        lo = hi;
    }
    if !bracketed {
        return Err(NumericError::UnbracketedScale { mass }.into());
    }

    for iteration in 0..200 {
        let mid = 0.5 * (lo + hi);
        let f_mid = residual(mid);
        trace!("mass bisection {iteration}: s={mid} residual={f_mid}");
        if f_mid.abs() <= target * 1e-12 {
            debug!("lateral scale {mid} for target mass {mass} (seed {seed})");
            return Ok(mid);
        }
        if f_mid < 0.0 {
            lo = mid;
        } else {
            hi = mid;
        }
        if (hi - lo) <= mid * Real::EPSILON * 4.0 {
            break;
        }
    }

    let scale = 0.5 * (lo + hi);
    debug!("lateral scale {scale} for target mass {mass} (seed {seed})");
    Ok(scale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::float_types::PI;
    use crate::params::ShapeParameters;
    use crate::tessellate::MeshResolution;

    const SEGMENTS: usize = 128;

    fn sampled(params: &ShapeParameters) -> SolidProfile {
        SolidProfile::sample(params, &MeshResolution::new(SEGMENTS, 32))
    }

    #[test]
    fn unit_volume_of_cylinder_is_pi_h() {
        let params = ShapeParameters::cylinder(20.0, 3.0, 0.7);
        let solid = sampled(&params);
        let exact = PI * 20.0;
        let v = unit_volume(&solid, SEGMENTS);
        assert!((v - exact).abs() / exact < 1e-3);
    }

    #[test]
    fn cylinder_scale_matches_annulus_closed_form() {
        // For a cylinder shell: mass = ρ·π·(s² − (s−w)²)·h.
        let (h, w, mass) = (20.0, 0.7, 300.0);
        let params = ShapeParameters::cylinder(h, mass, w);
        let solid = sampled(&params);
        let s = lateral_scale(&solid, mass, w, SEGMENTS).unwrap();

        let expected = {
            // Solve π(s² − (s−w)²)h = mass ⇒ s = (mass/(πh) + w²) / (2w)
            (mass / (PI * h) + w * w) / (2.0 * w)
        };
        assert!(
            (s - expected).abs() / expected < 1e-3,
            "s = {s}, expected {expected}"
        );
    }

    #[test]
    fn solved_scale_reproduces_target_mass() {
        let params = ShapeParameters {
            c4_base: 0.3,
            c4_top: 0.1,
            perimeter_ratio: 1.6,
            ..ShapeParameters::cylinder(15.0, 250.0, 0.4)
        };
        let solid = sampled(&params);
        let s = lateral_scale(&solid, params.mass, params.thickness, SEGMENTS).unwrap();
        let volume = material_volume(&solid, params.thickness, SEGMENTS, s);
        assert!((volume * MATERIAL_DENSITY - params.mass).abs() / params.mass < 1e-9);
    }

    #[test]
    fn material_volume_is_monotone_in_scale() {
        let params = ShapeParameters {
            c4_base: 0.2,
            ..ShapeParameters::cylinder(10.0, 1.0, 0.5)
        };
        let solid = sampled(&params);
        let mut previous = 0.0;
        for i in 1..=8 {
            let v = material_volume(&solid, 0.5, SEGMENTS, i as Real);
            assert!(v > previous);
            previous = v;
        }
    }
}
