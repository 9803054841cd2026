//! Nalgebra conversions.
//!
//! Enable this adapter with the `nalgebra` feature to move values between
//! [`Vec2`]/[`Vec3`]/[`Vec4`] and `nalgebra::Vector2/3/4`, and between
//! [`Mat3`]/[`Mat4`]/[`Mat2x4`] and the nalgebra matrices of the same shape.
//! Add `nalgebra` as a direct dependency to name its types in your own code.
//!
//! # Example
//! ```rust,no_run
//! use nalgebra::{Matrix4, Vector4};
//! use tcb::{coefficient_matrix, Vec4};
//!
//! let c: Matrix4<f64> = coefficient_matrix(0.0, 0.0, 0.0).into();
//! let powers: Vector4<f64> = Vec4::new(0.125, 0.25, 0.5, 1.0).into();
//! let weights = c.transpose() * powers;
//! # let _ = weights;
//! ```
//!
//! Rows of this crate's matrices map to rows of the nalgebra matrix, so `m[i][j]`
//! and `n[(i, j)]` address the same entry.

use core::array;

use nalgebra as na;

use crate::{Mat2x4, Mat3, Mat4, Scalar, Vec2, Vec3, Vec4};

macro_rules! vector_conversions {
    ($local:ident, $na:ident, { $($idx:literal => $field:ident),+ }) => {
        impl<T: Scalar + na::Scalar> From<$local<T>> for na::$na<T> {
            fn from(v: $local<T>) -> Self {
                na::$na::new($( v.$field ),+)
            }
        }

        impl<T: Scalar + na::Scalar> From<na::$na<T>> for $local<T> {
            fn from(v: na::$na<T>) -> Self {
                $local { $( $field: v[$idx] ),+ }
            }
        }
    };
}

vector_conversions!(Vec2, Vector2, { 0 => x, 1 => y });
vector_conversions!(Vec3, Vector3, { 0 => x, 1 => y, 2 => z });
vector_conversions!(Vec4, Vector4, { 0 => x, 1 => y, 2 => z, 3 => w });

macro_rules! matrix_conversions {
    ($local:ident, $na:ident, $r:literal, $c:literal) => {
        impl<T: Scalar + na::Scalar> From<$local<T>> for na::$na<T> {
            fn from(m: $local<T>) -> Self {
                na::$na::from_fn(|i, j| m[i][j])
            }
        }

        impl<T: Scalar + na::Scalar> From<na::$na<T>> for $local<T> {
            fn from(m: na::$na<T>) -> Self {
                $local::from_rows(array::from_fn::<[T; $c], $r, _>(|i| array::from_fn(|j| m[(i, j)])))
            }
        }
    };
}

matrix_conversions!(Mat3, Matrix3, 3, 3);
matrix_conversions!(Mat4, Matrix4, 4, 4);
matrix_conversions!(Mat2x4, Matrix2x4, 2, 4);
