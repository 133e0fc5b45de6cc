//! Typed failure taxonomy for shape generation.
//!
//! All failures are returned as values; the engine never panics on bad
//! parameters and never produces partial output.

use crate::float_types::Real;

/// Parameter sets that are self-consistent but produce geometrically
/// infeasible output, plus post-tessellation topology defects.
///
/// Recoverable by the caller retrying with different parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// (NonPositiveHeight) height must be > 0 and finite
    #[error("(NonPositiveHeight) height must be positive and finite, got {0}")]
    NonPositiveHeight(Real),
    /// (NonPositiveMass) mass must be > 0 and finite
    #[error("(NonPositiveMass) mass must be positive and finite, got {0}")]
    NonPositiveMass(Real),
    /// (NonPositiveWallThickness) wall thickness must be > 0 and finite
    #[error("(NonPositiveWallThickness) wall thickness must be positive and finite, got {0}")]
    NonPositiveWallThickness(Real),
    /// (NonPositivePerimeterRatio) top-to-base perimeter ratio must be > 0 and finite
    #[error(
        "(NonPositivePerimeterRatio) top-to-base perimeter ratio must be positive and finite, got {0}"
    )]
    NonPositivePerimeterRatio(Real),
    /// (NonFiniteParameter) a float input is NaN or infinite
    #[error("(NonFiniteParameter) parameter `{name}` must be finite, got {value}")]
    NonFiniteParameter { name: &'static str, value: Real },
    /// (NegativeRadius) the harmonic radius function goes non-positive
    /// somewhere in the discretized angle/height domain
    #[error(
        "(NegativeRadius) cross-section radius is non-positive ({radius}) at angle {theta} rad, height fraction {t}"
    )]
    NegativeRadius { theta: Real, t: Real, radius: Real },
    /// (WallTooThick) wall thickness exceeds the minimum cross-section radius
    #[error(
        "(WallTooThick) wall thickness {thickness} exceeds minimum cross-section radius at height fraction {t}"
    )]
    WallTooThick { thickness: Real, t: Real },
    /// (InnerWallSelfIntersection) the inward-offset surface self-intersects
    /// at the given discretization resolution
    #[error(
        "(InnerWallSelfIntersection) inner wall self-intersects at height fraction {t}; wall thickness infeasible for this geometry"
    )]
    InnerWallSelfIntersection { t: Real },
    /// (NotManifold) some tessellated edge is not shared by exactly two faces
    #[error(
        "(NotManifold) tessellation is not watertight: {defective} of {total} edges are not shared by exactly two faces"
    )]
    NotManifold { defective: usize, total: usize },
    /// Indicates an inconsistency while building a triangle mesh
    #[error("(TriMesh) triangle mesh construction failed: {0}")]
    TriMesh(String),
}

/// Internal numeric degeneracy: the mass-scaling computation cannot proceed.
///
/// Treated as a validation failure from the caller's perspective.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NumericError {
    /// The unit-scale volume integral produced a non-positive or
    /// non-finite value (zero-area profile).
    #[error("(DegenerateVolume) unit solid volume is {0}; profile encloses no volume")]
    DegenerateVolume(Real),
    /// The bisection on the lateral scale factor could not bracket the
    /// target mass within its iteration budget.
    #[error("(UnbracketedScale) could not bracket a lateral scale for target mass {mass}")]
    UnbracketedScale { mass: Real },
}

/// Serialization failures, distinct from parameter validation: they indicate
/// an upstream logic defect rather than a bad request.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StlError {
    /// Export was asked to encode a mesh with no triangles.
    #[error("(EmptyMesh) refusing to serialize a mesh with zero triangles")]
    EmptyMesh,
    /// The underlying STL writer failed.
    #[error("(Io) stl writer: {0}")]
    Io(String),
}

/// Tagged top-level result type for the whole generation pipeline.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShapeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Numeric(#[from] NumericError),
    #[error(transparent)]
    Stl(#[from] StlError),
}
