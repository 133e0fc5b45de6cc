//! Inner-surface derivation: inward offset along the local cross-section
//! normal by the wall thickness.
//!
//! Offsetting happens in the untwisted section frame; the twist is a rigid
//! rotation, so it commutes with the offset and is applied later by the
//! mesher. Feasibility is judged at the discretization resolution: the inner
//! ring must keep a positive radius, stay inside the outer ring, and remain
//! a simple polygon.

use crate::errors::ValidationError;
use crate::float_types::{Real, TAU, tolerance};
use crate::section::{CrossSection, ring_area};
use geo::algorithm::validation::Validation;
use geo::{Area, Coord, LineString, Polygon};
use nalgebra::{Point2, Vector2};

/// Inner point for one angle sample: outer point moved inward along the
/// local outward normal of the section curve.
#[inline]
fn offset_point(section: &CrossSection, theta: Real, thickness: Real) -> Point2<Real> {
    let p = section.point(theta);
    let r = section.radius(theta);
    let dr = section.radius_derivative(theta);

    // Tangent of (r(θ)cosθ, r(θ)sinθ); rotate -90° for the outward normal.
    let tangent = Vector2::new(
        dr * theta.cos() - r * theta.sin(),
        dr * theta.sin() + r * theta.cos(),
    );
    // The ring is counterclockwise, so rotating the tangent by -90° points
    // outward; for a circle this reduces to the radial direction.
    let normal = Vector2::new(tangent.y, -tangent.x).normalize();

    p - normal * thickness
}

/// The sampled inner ring for one layer, without feasibility checks.
///
/// Used by the mass solver, which treats an infeasible cavity as collapsed
/// rather than failing; user-facing generation goes through [`inner_ring`].
pub(crate) fn inner_ring_unchecked(
    section: &CrossSection,
    thickness: Real,
    segments: usize,
) -> Vec<Point2<Real>> {
    (0..segments)
        .map(|i| offset_point(section, TAU * i as Real / segments as Real, thickness))
        .collect()
}

/// The sampled inner ring for one layer, validated.
///
/// `t` is the layer's height fraction, carried into the error for reporting.
pub fn inner_ring(
    section: &CrossSection,
    thickness: Real,
    segments: usize,
    t: Real,
) -> Result<Vec<Point2<Real>>, ValidationError> {
    let inner = inner_ring_unchecked(section, thickness, segments);

    for (i, q) in inner.iter().enumerate() {
        let theta = TAU * i as Real / segments as Real;
        let p = section.point(theta);

        // Offset crossed the axis: the wall ate the whole section here.
        if q.coords.dot(&p.coords) <= tolerance() {
            return Err(ValidationError::WallTooThick { thickness, t });
        }
        // Inner landed on or outside the outer surface.
        if q.coords.norm() >= p.coords.norm() {
            return Err(ValidationError::InnerWallSelfIntersection { t });
        }
    }

    // A flipped ring means the offset collapsed past the local curvature.
    let coords: Vec<Coord<Real>> = inner.iter().map(|p| Coord { x: p.x, y: p.y }).collect();
    let polygon = Polygon::new(LineString::new(coords), vec![]);
    if polygon.signed_area() <= 0.0 {
        return Err(ValidationError::WallTooThick { thickness, t });
    }
    if !polygon.is_valid() {
        return Err(ValidationError::InnerWallSelfIntersection { t });
    }

    Ok(inner)
}

/// Cavity area of one layer at the given wall thickness, for the volume
/// integral. Collapsed or self-intersecting cavities count as zero area
/// (a locally solid wall) instead of failing.
pub(crate) fn cavity_area(section: &CrossSection, thickness: Real, segments: usize) -> Real {
    let inner = inner_ring_unchecked(section, thickness, segments);

    for (i, q) in inner.iter().enumerate() {
        let theta = TAU * i as Real / segments as Real;
        let p = section.point(theta);
        if q.coords.dot(&p.coords) <= 0.0 || q.coords.norm() >= p.coords.norm() {
            return 0.0;
        }
    }

    let coords: Vec<Coord<Real>> = inner.iter().map(|p| Coord { x: p.x, y: p.y }).collect();
    let signed = Polygon::new(LineString::new(coords), vec![]).signed_area();
    if signed <= 0.0 {
        return 0.0;
    }
    ring_area(&inner)
}
