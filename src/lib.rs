//! Parametric **twisted hollow-shell** solids: harmonic cross-sections,
//! twist fields, mass-normalized scaling, wall offsetting, and watertight
//! triangle-mesh export.
//!
//! Eleven parameters fully determine a shell: four harmonic amplitudes
//! (4-fold and 8-fold, base and top), a linear twist, an oscillating twist
//! (amplitude and whole cycles), the top-to-base perimeter ratio, height,
//! target mass, and wall thickness. Generation is a pure function of the
//! parameters and the discretization resolution; the result is either a
//! closed, consistently wound triangle mesh or a typed error.
//!
//! ```
//! use twistshell::{MeshResolution, ShapeParameters, generate};
//!
//! let params = ShapeParameters {
//!     c4_base: 0.3,
//!     twist_linear: std::f64::consts::PI,
//!     ..ShapeParameters::cylinder(20.0, 400.0, 0.7)
//! };
//! let stl = generate(&params, &MeshResolution::default()).unwrap();
//! let triangles = u32::from_le_bytes(stl[80..84].try_into().unwrap());
//! assert_eq!(stl.len(), 84 + 50 * triangles as usize);
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - [**stl-io**](https://en.wikipedia.org/wiki/STL_(file_format)): binary and ASCII `.stl` export
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon for multithreaded layer sampling

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod params;
pub mod section;
pub mod twist;
pub mod solid;
pub mod mass;
pub mod offset;
pub mod mesh;
pub mod tessellate;
pub mod validate;
pub mod shape;
pub mod io;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::{NumericError, ShapeError, StlError, ValidationError};
pub use mesh::Mesh;
pub use params::ShapeParameters;
pub use shape::Shape;
pub use tessellate::MeshResolution;

#[cfg(feature = "stl-io")]
pub use shape::generate;
