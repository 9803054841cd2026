//! The `Vector` trait and the operator boilerplate shared by `Vec2`, `Vec3` and `Vec4`.
//!
//! Every operator works component-wise and returns a new value. Equality is exact,
//! use [`float_equal`](crate::float_equal) where a tolerance is wanted.
use crate::scalar::Scalar;
use core::ops::{Add, Sub};

use num_traits::Float;

/// Operations shared by all fixed-size vectors.
/// Keeping the trait minimal: only `dot` and `normalize` are implemented per type,
/// the metric helpers follow from them.
pub trait Vector: Copy + PartialEq + Add<Output = Self> + Sub<Output = Self> {
    type Scalar: Scalar;

    /// Number of components.
    const DIM: usize;

    fn dot(self, other: Self) -> Self::Scalar;

    /// `self / self.length()`. A zero vector yields NaN components.
    fn normalize(self) -> Self;

    /// Squared euclidean norm.
    fn length2(self) -> Self::Scalar {
        self.dot(self)
    }

    fn length(self) -> Self::Scalar {
        self.length2().sqrt()
    }

    fn distance(self, other: Self) -> Self::Scalar {
        (self - other).length()
    }

    fn distance2(self, other: Self) -> Self::Scalar {
        (self - other).length2()
    }

    /// Angle in radians between two unit vectors.
    fn angle_between_fast(self, other: Self) -> Self::Scalar {
        self.dot(other).acos()
    }

    /// Angle in radians between two arbitrary (non-zero) vectors.
    fn angle_between(self, other: Self) -> Self::Scalar {
        self.normalize().angle_between_fast(other.normalize())
    }
}

/// Implements the operators, `Index`, array conversions and `Display` for a vector type.
/// The scalar-first operators can't be generic over `T` (orphan rule), so they are
/// provided for `f32` and `f64`.
macro_rules! impl_vector {
    ($name:ident, $label:literal, $dim:literal, { $($idx:literal => $field:ident),+ }) => {
        impl<T: Scalar> Vector for $name<T> {
            type Scalar = T;
            const DIM: usize = $dim;

            #[inline]
            fn dot(self, other: Self) -> T {
                let mut sum = T::zero();
                $( sum = sum + self.$field * other.$field; )+
                sum
            }

            #[inline]
            fn normalize(self) -> Self {
                self / self.length()
            }
        }

        impl<T: Scalar> core::ops::Index<usize> for $name<T> {
            type Output = T;

            fn index(&self, index: usize) -> &T {
                match index {
                    $( $idx => &self.$field, )+
                    _ => panic!(concat!($label, " index out of range: {} (valid 0..{})"), index, $dim),
                }
            }
        }

        impl<T: Scalar> core::ops::IndexMut<usize> for $name<T> {
            fn index_mut(&mut self, index: usize) -> &mut T {
                match index {
                    $( $idx => &mut self.$field, )+
                    _ => panic!(concat!($label, " index out of range: {} (valid 0..{})"), index, $dim),
                }
            }
        }

        impl<T: Scalar> core::ops::Neg for $name<T> {
            type Output = Self;

            fn neg(self) -> Self {
                $name { $( $field: -self.$field ),+ }
            }
        }

        impl<T: Scalar> core::ops::Add for $name<T> {
            type Output = Self;

            fn add(self, other: Self) -> Self {
                $name { $( $field: self.$field + other.$field ),+ }
            }
        }

        impl<T: Scalar> core::ops::Sub for $name<T> {
            type Output = Self;

            fn sub(self, other: Self) -> Self {
                $name { $( $field: self.$field - other.$field ),+ }
            }
        }

        impl<T: Scalar> core::ops::Add<T> for $name<T> {
            type Output = Self;

            fn add(self, rhs: T) -> Self {
                $name { $( $field: self.$field + rhs ),+ }
            }
        }

        impl<T: Scalar> core::ops::Sub<T> for $name<T> {
            type Output = Self;

            fn sub(self, rhs: T) -> Self {
                $name { $( $field: self.$field - rhs ),+ }
            }
        }

        impl<T: Scalar> core::ops::Mul<T> for $name<T> {
            type Output = Self;

            fn mul(self, rhs: T) -> Self {
                $name { $( $field: self.$field * rhs ),+ }
            }
        }

        impl<T: Scalar> core::ops::Div<T> for $name<T> {
            type Output = Self;

            fn div(self, rhs: T) -> Self {
                $name { $( $field: self.$field / rhs ),+ }
            }
        }

        impl<T: Scalar> core::ops::AddAssign for $name<T> {
            fn add_assign(&mut self, other: Self) {
                *self = *self + other;
            }
        }

        impl<T: Scalar> core::ops::SubAssign for $name<T> {
            fn sub_assign(&mut self, other: Self) {
                *self = *self - other;
            }
        }

        impl<T: Scalar> core::ops::AddAssign<T> for $name<T> {
            fn add_assign(&mut self, rhs: T) {
                *self = *self + rhs;
            }
        }

        impl<T: Scalar> core::ops::SubAssign<T> for $name<T> {
            fn sub_assign(&mut self, rhs: T) {
                *self = *self - rhs;
            }
        }

        impl<T: Scalar> core::ops::MulAssign<T> for $name<T> {
            fn mul_assign(&mut self, rhs: T) {
                *self = *self * rhs;
            }
        }

        impl<T: Scalar> core::ops::DivAssign<T> for $name<T> {
            fn div_assign(&mut self, rhs: T) {
                *self = *self / rhs;
            }
        }

        impl<T> From<[T; $dim]> for $name<T> {
            fn from([$( $field ),+]: [T; $dim]) -> Self {
                $name { $( $field ),+ }
            }
        }

        impl<T> From<$name<T>> for [T; $dim] {
            fn from(v: $name<T>) -> Self {
                [$( v.$field ),+]
            }
        }

        impl<T: Scalar> core::fmt::Display for $name<T> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, concat!($label, "("))?;
                $(
                    if $idx > 0 {
                        write!(f, ", ")?;
                    }
                    match f.precision() {
                        Some(p) => write!(f, "{:.*}", p, self.$field)?,
                        None => write!(f, "{}", self.$field)?,
                    }
                )+
                write!(f, ")")
            }
        }

        impl_vector!(@scalar_lhs $name, f32, { $( $field ),+ });
        impl_vector!(@scalar_lhs $name, f64, { $( $field ),+ });
    };

    (@scalar_lhs $name:ident, $t:ty, { $( $field:ident ),+ }) => {
        impl core::ops::Add<$name<$t>> for $t {
            type Output = $name<$t>;

            fn add(self, v: $name<$t>) -> $name<$t> {
                $name { $( $field: self + v.$field ),+ }
            }
        }

        /// `s - v` subtracts every component from the scalar.
        impl core::ops::Sub<$name<$t>> for $t {
            type Output = $name<$t>;

            fn sub(self, v: $name<$t>) -> $name<$t> {
                $name { $( $field: self - v.$field ),+ }
            }
        }

        impl core::ops::Mul<$name<$t>> for $t {
            type Output = $name<$t>;

            fn mul(self, v: $name<$t>) -> $name<$t> {
                $name { $( $field: self * v.$field ),+ }
            }
        }

        /// `s / v` divides the scalar by every component.
        impl core::ops::Div<$name<$t>> for $t {
            type Output = $name<$t>;

            fn div(self, v: $name<$t>) -> $name<$t> {
                $name { $( $field: self / v.$field ),+ }
            }
        }
    };
}
