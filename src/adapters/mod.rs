//! Optional conversions to and from external math libraries.
//!
//! Enable feature flags (e.g. `nalgebra`) to convert the vector and matrix types
//! of this crate into the equivalent types of another library and back.

#[cfg(feature = "nalgebra")]
pub mod nalgebra;
