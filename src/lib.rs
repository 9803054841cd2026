//! Kochanek-Bartels (TCB) splines on top of a small fixed-size vector and matrix library.
//!
//! The math types ([`Vec2`], [`Vec3`], [`Vec4`], [`Mat3`], [`Mat4`], [`Mat2x4`]) are plain
//! `Copy` values generic over the float type. The spline engine ([`TcbSegment`],
//! [`TcbCurve`], [`evaluate`]) samples a curve through a sequence of 2D control points,
//! and [`Session`] holds the state of an interactive editor driving it.
//!
//! ```rust
//! use tcb::{evaluate, ShapeParameters, Vec2};
//!
//! let points = [
//!     Vec2::new(0.0f32, 0.0),
//!     Vec2::new(100.0, 0.0),
//!     Vec2::new(100.0, 100.0),
//!     Vec2::new(0.0, 100.0),
//! ];
//! let line = evaluate(ShapeParameters::new(0.5, 0.0, 0.0), &points, 0.05).unwrap();
//! assert_eq!(line.len(), 22);
//! ```
#![no_std]

extern crate alloc;
#[cfg(test)]
extern crate std;

use tinyvec::TinyVec;

#[macro_use]
mod vector;
#[macro_use]
mod matrix;

mod scalar;
mod vec2;
mod vec3;
mod vec4;
mod mat3;
mod mat4;
mod mat2x4;

pub mod transform;
pub mod projection;

mod spline;
mod error;
mod tcb;
mod curve;
mod config;
mod canvas;
mod session;

pub mod adapters;

pub use scalar::*;
pub use vector::Vector;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;
pub use mat3::Mat3;
pub use mat4::Mat4;
pub use mat2x4::Mat2x4;
pub use transform::*;
pub use projection::*;
pub use spline::Spline;
pub use error::SplineError;
pub use tcb::{coefficient_matrix, sample_count, Polyline, Samples, ShapeParameters, TcbSegment, INLINE_SAMPLES};
pub use curve::{evaluate, segment_count, Segments, TcbCurve, MIN_CONTROL_POINTS};
pub use config::*;
pub use canvas::{Canvas, DrawCommand, DrawList, Layer};
pub use session::{PointerAction, Session};
