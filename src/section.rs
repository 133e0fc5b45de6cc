//! Harmonic cross-section synthesis and base→top interpolation.
//!
//! A cross-section is the 2D boundary curve of the solid at a fixed height,
//! expressed as radius-by-angle:
//!
//! r(θ) = base_radius · (1 + c4·cos(4θ) + c8·cos(8θ))
//!
//! The 4-fold and 8-fold amplitudes lerp between base and top values; the
//! base radius at height fraction `t` is normalized against the numerically
//! computed unit perimeter so that perimeter(t) = perimeter(0) · ratioᵗ,
//! which lands exactly on `perimeter_ratio` at t = 1.

use crate::float_types::{Real, TAU};
use crate::params::ShapeParameters;
use geo::{Area, Coord, LineString, Polygon};
use nalgebra::Point2;

/// One radius-by-angle curve: a base circle perturbed by two harmonics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossSection {
    pub base_radius: Real,
    pub c4: Real,
    pub c8: Real,
}

impl CrossSection {
    pub const fn new(base_radius: Real, c4: Real, c8: Real) -> Self {
        CrossSection { base_radius, c4, c8 }
    }

    /// Radius at angle `theta`.
    #[inline]
    pub fn radius(&self, theta: Real) -> Real {
        self.base_radius * (1.0 + self.c4 * (4.0 * theta).cos() + self.c8 * (8.0 * theta).cos())
    }

    /// Analytic derivative dr/dθ, used to build the local curve normal.
    #[inline]
    pub fn radius_derivative(&self, theta: Real) -> Real {
        self.base_radius * (-4.0 * self.c4 * (4.0 * theta).sin() - 8.0 * self.c8 * (8.0 * theta).sin())
    }

    /// Point on the curve at angle `theta`, in the untwisted section frame.
    #[inline]
    pub fn point(&self, theta: Real) -> Point2<Real> {
        let r = self.radius(theta);
        Point2::new(r * theta.cos(), r * theta.sin())
    }

    /// Minimum radius over `segments` evenly spaced angle samples,
    /// together with the angle it occurs at.
    pub fn min_radius(&self, segments: usize) -> (Real, Real) {
        let mut min = Real::MAX;
        let mut at = 0.0;
        for i in 0..segments {
            let theta = TAU * i as Real / segments as Real;
            let r = self.radius(theta);
            if r < min {
                min = r;
                at = theta;
            }
        }
        (min, at)
    }

    /// The closed ring sampled at `segments` angles, counterclockwise.
    pub fn ring(&self, segments: usize) -> Vec<Point2<Real>> {
        (0..segments)
            .map(|i| self.point(TAU * i as Real / segments as Real))
            .collect()
    }

    /// Polyline perimeter of the sampled ring.
    pub fn perimeter(&self, segments: usize) -> Real {
        let ring = self.ring(segments);
        let mut len = 0.0;
        for i in 0..segments {
            let next = ring[(i + 1) % segments];
            len += (next - ring[i]).norm();
        }
        len
    }

    /// The same curve with every radius multiplied by `factor`.
    pub fn scaled(&self, factor: Real) -> CrossSection {
        CrossSection {
            base_radius: self.base_radius * factor,
            ..*self
        }
    }
}

/// Area of a sampled closed ring, by way of `geo`'s shoelace.
pub fn ring_area(ring: &[Point2<Real>]) -> Real {
    let coords: Vec<Coord<Real>> = ring.iter().map(|p| Coord { x: p.x, y: p.y }).collect();
    Polygon::new(LineString::new(coords), vec![]).unsigned_area()
}

/// Base→top interpolation of cross-sections, honoring the perimeter ratio.
#[derive(Debug, Clone)]
pub struct SectionProfile {
    c4_base: Real,
    c8_base: Real,
    c4_top: Real,
    c8_top: Real,
    perimeter_ratio: Real,
    /// Perimeter of the unit-radius base section, cached at construction.
    base_unit_perimeter: Real,
    /// Angle samples used for perimeter normalization; matches the mesher's
    /// angular resolution so validation and tessellation agree.
    segments: usize,
}

impl SectionProfile {
    pub fn from_parameters(params: &ShapeParameters, segments: usize) -> Self {
        let base = CrossSection::new(1.0, params.c4_base, params.c8_base);
        SectionProfile {
            c4_base: params.c4_base,
            c8_base: params.c8_base,
            c4_top: params.c4_top,
            c8_top: params.c8_top,
            perimeter_ratio: params.perimeter_ratio,
            base_unit_perimeter: base.perimeter(segments),
            segments,
        }
    }

    /// The interpolated cross-section at height fraction `t` ∈ [0, 1],
    /// at unit lateral scale (base section has base_radius 1).
    pub fn at(&self, t: Real) -> CrossSection {
        let c4 = self.c4_base + (self.c4_top - self.c4_base) * t;
        let c8 = self.c8_base + (self.c8_top - self.c8_base) * t;

        // Normalize against the unit perimeter of the blended harmonics so
        // the perimeter progression is geometric in t and exact at t = 1.
        let unit = CrossSection::new(1.0, c4, c8);
        let unit_perimeter = unit.perimeter(self.segments);
        let base_radius =
            self.perimeter_ratio.powf(t) * self.base_unit_perimeter / unit_perimeter;

        CrossSection::new(base_radius, c4, c8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::float_types::PI;

    const SEGMENTS: usize = 128;

    #[test]
    fn circle_radius_is_constant() {
        let section = CrossSection::new(2.0, 0.0, 0.0);
        for i in 0..16 {
            let theta = TAU * i as Real / 16.0;
            assert!((section.radius(theta) - 2.0).abs() < 1e-12);
        }
    }

    #[test]
    fn harmonic_radius_matches_formula() {
        let section = CrossSection::new(1.5, 0.3, -0.1);
        let theta: Real = 0.7;
        let expected =
            1.5 * (1.0 + 0.3 * (4.0 * theta).cos() - 0.1 * (8.0 * theta).cos());
        assert!((section.radius(theta) - expected).abs() < 1e-12);
    }

    #[test]
    fn circle_ring_area_approaches_pi_r_squared() {
        let section = CrossSection::new(3.0, 0.0, 0.0);
        let area = ring_area(&section.ring(SEGMENTS));
        let exact = PI * 9.0;
        assert!((area - exact).abs() / exact < 1e-3);
    }

    #[test]
    fn perimeter_ratio_is_honored_at_the_top() {
        let params = ShapeParameters {
            c4_base: 0.4,
            c8_base: 0.05,
            c4_top: -0.2,
            c8_top: 0.1,
            perimeter_ratio: 2.0,
            ..ShapeParameters::cylinder(10.0, 1.0, 0.1)
        };
        let profile = SectionProfile::from_parameters(&params, SEGMENTS);
        let base = profile.at(0.0).perimeter(SEGMENTS);
        let top = profile.at(1.0).perimeter(SEGMENTS);
        assert!((top / base - 2.0).abs() < 1e-9);
    }

    #[test]
    fn base_section_has_unit_base_radius() {
        let params = ShapeParameters::cylinder(10.0, 1.0, 0.1);
        let profile = SectionProfile::from_parameters(&params, SEGMENTS);
        assert!((profile.at(0.0).base_radius - 1.0).abs() < 1e-12);
    }

    #[test]
    fn deep_lobes_dip_negative_and_are_reported_by_min_radius() {
        let section = CrossSection::new(1.0, -1.2, 0.0);
        let (min, _) = section.min_radius(SEGMENTS);
        assert!(min < 0.0);
    }
}
