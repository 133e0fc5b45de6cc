//! Validation: parameter invariants and cheap geometric pre-checks before
//! the expensive stages, plus the post-tessellation manifold check.
//!
//! Validation never panics; it yields a tagged error carrying the reason.

use crate::errors::ValidationError;
use crate::mesh::Mesh;
use crate::params::ShapeParameters;
use crate::solid::SolidProfile;
use std::fmt::Debug;

/// Reject parameter records violating the basic invariants: all floats
/// finite; height, mass, wall thickness and perimeter ratio positive.
pub fn validate_parameters(params: &ShapeParameters) -> Result<(), ValidationError> {
    let floats = [
        ("c4_base", params.c4_base),
        ("c8_base", params.c8_base),
        ("c4_top", params.c4_top),
        ("c8_top", params.c8_top),
        ("twist_linear", params.twist_linear),
        ("twist_amplitude", params.twist_amplitude),
        ("perimeter_ratio", params.perimeter_ratio),
        ("height", params.height),
        ("mass", params.mass),
        ("thickness", params.thickness),
    ];
    for (name, value) in floats {
        if !value.is_finite() {
            return Err(ValidationError::NonFiniteParameter { name, value });
        }
    }

    if params.height <= 0.0 {
        return Err(ValidationError::NonPositiveHeight(params.height));
    }
    if params.mass <= 0.0 {
        return Err(ValidationError::NonPositiveMass(params.mass));
    }
    if params.thickness <= 0.0 {
        return Err(ValidationError::NonPositiveWallThickness(params.thickness));
    }
    if params.perimeter_ratio <= 0.0 {
        return Err(ValidationError::NonPositivePerimeterRatio(params.perimeter_ratio));
    }
    Ok(())
}

/// Reject geometry whose radius function goes non-positive anywhere in the
/// discretized angle/height domain. Runs before mass scaling and meshing.
pub fn validate_radius_field(
    solid: &SolidProfile,
    theta_segments: usize,
) -> Result<(), ValidationError> {
    for layer in &solid.layers {
        let (radius, theta) = layer.section.min_radius(theta_segments);
        if radius <= 0.0 {
            return Err(ValidationError::NegativeRadius {
                theta,
                t: layer.t,
                radius,
            });
        }
    }
    Ok(())
}

/// Post-generation check: every edge of the tessellation must be shared by
/// exactly two faces.
pub fn validate_manifold<S: Clone + Send + Sync + Debug>(
    mesh: &Mesh<S>,
) -> Result<(), ValidationError> {
    let (defective, total) = mesh.edge_defects();
    if defective != 0 {
        return Err(ValidationError::NotManifold { defective, total });
    }
    Ok(())
}
