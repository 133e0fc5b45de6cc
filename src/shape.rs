//! The per-request aggregate and the generation pipeline.

use crate::errors::ShapeError;
use crate::float_types::Real;
use crate::mass;
use crate::mesh::Mesh;
use crate::offset::inner_ring;
use crate::params::ShapeParameters;
use crate::solid::SolidProfile;
use crate::tessellate::{MeshResolution, tessellate};
use crate::validate;
use log::debug;
use std::fmt::Debug;

/// A validated shape: the parameters plus the watertight mesh they produce.
///
/// Constructing a `Shape` is the proof of validity; there is no "invalid
/// shape" value, only an error. Each generation owns its mesh exclusively
/// and shares nothing with concurrent generations.
#[derive(Clone, Debug)]
pub struct Shape<S: Clone + Send + Sync + Debug> {
    /// The inputs this shape was generated from.
    pub parameters: ShapeParameters,
    /// Lateral scale factor solved by mass matching.
    pub scale: Real,
    /// The tessellated shell.
    pub mesh: Mesh<S>,
}

impl<S: Clone + Send + Sync + Debug> Shape<S> {
    /// Run the full pipeline: validate → sample layers → solve mass scale →
    /// offset the wall → tessellate → manifold check.
    ///
    /// Pure and synchronous; identical parameters and resolution always
    /// produce identical geometry.
    pub fn generate(
        params: &ShapeParameters,
        resolution: &MeshResolution,
        metadata: Option<S>,
    ) -> Result<Self, ShapeError> {
        validate::validate_parameters(params)?;

        let mut solid = SolidProfile::sample(params, resolution);
        validate::validate_radius_field(&solid, resolution.theta_segments)?;

        let scale = mass::lateral_scale(
            &solid,
            params.mass,
            params.thickness,
            resolution.theta_segments,
        )?;
        solid.scale_radii(scale);

        let mut rings = Vec::with_capacity(solid.layers.len());
        for layer in &solid.layers {
            rings.push(inner_ring(
                &layer.section,
                params.thickness,
                resolution.theta_segments,
                layer.t,
            )?);
        }

        let mesh = tessellate(&solid, &rings, resolution, metadata);
        validate::validate_manifold(&mesh)?;
        debug!(
            "generated {} vertices / {} triangles at lateral scale {scale}",
            mesh.vertices.len(),
            mesh.triangle_count()
        );

        Ok(Shape {
            parameters: *params,
            scale,
            mesh,
        })
    }
}

/// The engine boundary consumed by the transport shell: parameters in,
/// binary STL buffer out.
///
/// The buffer is produced per call; callers needing the mesh itself use
/// [`Shape::generate`].
#[cfg(feature = "stl-io")]
pub fn generate(
    params: &ShapeParameters,
    resolution: &MeshResolution,
) -> Result<Vec<u8>, ShapeError> {
    let shape: Shape<()> = Shape::generate(params, resolution, None)?;
    Ok(shape.mesh.to_stl_binary()?)
}
