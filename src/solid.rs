//! Composition of section interpolation and twist into ordered 3D layers.
//!
//! Generation is a pure function of the parameters and the discretization
//! resolution: identical inputs always produce bit-identical geometry.

use crate::float_types::Real;
use crate::params::ShapeParameters;
use crate::section::{CrossSection, SectionProfile};
use crate::tessellate::MeshResolution;
use crate::twist::TwistProfile;
use nalgebra::Point3;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// One sampled height slice: the interpolated cross-section and the twist
/// angle at that height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layer {
    /// Normalized height fraction in [0, 1].
    pub t: Real,
    /// Absolute height of the slice.
    pub z: Real,
    /// Interpolated cross-section at this height.
    pub section: CrossSection,
    /// Twist angle applied to the whole section, radians.
    pub twist: Real,
}

impl Layer {
    /// Outer surface point at angle `theta`:
    /// r(θ) · [cos(θ+φ), sin(θ+φ)] at this layer's height.
    #[inline]
    pub fn outer_point(&self, theta: Real) -> Point3<Real> {
        let r = self.section.radius(theta);
        let rotated = theta + self.twist;
        Point3::new(r * rotated.cos(), r * rotated.sin(), self.z)
    }
}

/// The full outer surface as an ordered sequence of layers, base to top.
#[derive(Debug, Clone)]
pub struct SolidProfile {
    /// Layers in increasing height order; `height_segments + 1` entries.
    pub layers: Vec<Layer>,
    /// Total height of the solid.
    pub height: Real,
}

impl SolidProfile {
    /// Sample the solid at unit lateral scale.
    ///
    /// Layer sampling is independent per slice; with the `parallel` feature
    /// it fans out over rayon without changing the result.
    pub fn sample(params: &ShapeParameters, resolution: &MeshResolution) -> SolidProfile {
        let sections = SectionProfile::from_parameters(params, resolution.theta_segments);
        let twist = TwistProfile::from_parameters(params);
        let n = resolution.height_segments;

        let make = |j: usize| {
            let t = j as Real / n as Real;
            Layer {
                t,
                z: t * params.height,
                section: sections.at(t),
                twist: twist.angle(t),
            }
        };

        #[cfg(not(feature = "parallel"))]
        let layers: Vec<Layer> = (0..=n).map(make).collect();

        #[cfg(feature = "parallel")]
        let layers: Vec<Layer> = (0..=n).into_par_iter().map(make).collect();

        SolidProfile {
            layers,
            height: params.height,
        }
    }

    /// Multiply every layer's radii by `factor`, leaving height unchanged.
    pub fn scale_radii(&mut self, factor: Real) {
        for layer in &mut self.layers {
            layer.section = layer.section.scaled(factor);
        }
    }
}
