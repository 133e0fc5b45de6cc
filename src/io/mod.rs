//! Triangle-mesh serialization backends.

#[cfg(feature = "stl-io")]
pub mod stl;
