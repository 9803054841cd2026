//! Scalar trait and the small set of float helpers shared by all math types.
//!
//! Available functions:
//! - `pi()`, `two_pi()`, `half_pi()`
//! - `rad_to_deg()`, `deg_to_rad()`
//! - `float_equal()`, `float_eq()`
use core::fmt::{Debug, Display};

use num_traits::{Float, FloatConst, NumCast};

/// Default sensitivity used by [`float_eq`].
pub const DEFAULT_SENSITIVITY: f64 = 1.0e-8;

/// Float type the vectors, matrices and splines are generic over.
/// Blanket-implemented, so `f32` and `f64` work out of the box.
pub trait Scalar: Float + FloatConst + Default + Debug + Display {}

impl<T> Scalar for T where T: Float + FloatConst + Default + Debug + Display {}

/// Convert an `f64` constant into `T`.
/// Values that `T` cannot represent become NaN instead of panicking.
#[inline]
pub fn cast<T: Scalar>(value: f64) -> T {
    <T as NumCast>::from(value).unwrap_or_else(T::nan)
}

#[inline]
pub fn pi<T: Scalar>() -> T {
    T::PI()
}

#[inline]
pub fn two_pi<T: Scalar>() -> T {
    T::PI() + T::PI()
}

#[inline]
pub fn half_pi<T: Scalar>() -> T {
    T::FRAC_PI_2()
}

/// Converts radians to degrees.
#[inline]
pub fn rad_to_deg<T: Scalar>(value: T) -> T {
    value * (cast::<T>(180.0) / pi())
}

/// Converts degrees to radians.
#[inline]
pub fn deg_to_rad<T: Scalar>(value: T) -> T {
    value * (pi::<T>() / cast(180.0))
}

/// Approximate equality: `|a - b| < sensitivity`.
/// This is never used by the `==` operators of the math types, which compare exactly.
#[inline]
pub fn float_equal<T: Scalar>(a: T, b: T, sensitivity: T) -> bool {
    (a - b).abs() < sensitivity
}

/// [`float_equal`] with [`DEFAULT_SENSITIVITY`].
#[inline]
pub fn float_eq<T: Scalar>(a: T, b: T) -> bool {
    float_equal(a, b, cast(DEFAULT_SENSITIVITY))
}
