//! Projection matrices onto the `z = 0` plane.
use super::*;

/// Orthographic projection: drops the `z` coordinate.
pub fn ortho<T: Scalar>() -> Mat4<T> {
    let mut m = Mat4::identity();
    m[2][2] = T::zero();
    m
}

/// Central projection with the center at distance `center` on the `z` axis.
/// The result must be dehomogenized; `center == 0` yields infinities.
pub fn perspective<T: Scalar>(center: T) -> Mat4<T> {
    let mut m = Mat4::identity();
    m[2][2] = T::zero();
    m[3][2] = -T::one() / center;
    m
}

/// Parallel projection along `dir`. `dir.z == 0` yields infinities.
pub fn parallel<T: Scalar>(dir: Vec3<T>) -> Mat4<T> {
    let mut m = Mat4::identity();
    m[0][2] = -dir.x / dir.z;
    m[1][2] = -dir.y / dir.z;
    m[2][2] = T::zero();
    m
}

/// Axonometric projection given the images of the three unit axes.
pub fn axonometry<T: Scalar>(x_axis: Vec2<T>, y_axis: Vec2<T>, z_axis: Vec2<T>) -> Mat4<T> {
    let mut m = Mat4::identity();
    m[0][0] = x_axis.x;
    m[0][1] = y_axis.x;
    m[0][2] = z_axis.x;
    m[1][0] = x_axis.y;
    m[1][1] = y_axis.y;
    m[1][2] = z_axis.y;
    m[2][2] = T::zero();
    m
}

/// Oblique (cavalier style) projection: the `x` axis is drawn at `angle` and
/// shortened by `shortening`, `y` and `z` map onto the screen axes.
pub fn cavalier<T: Scalar>(angle: T, shortening: T) -> Mat4<T> {
    let (sin, cos) = angle.sin_cos();
    let mut m = Mat4::identity();
    m[0][0] = -shortening * cos;
    m[0][1] = T::one();
    m[0][2] = T::zero();
    m[1][0] = -shortening * sin;
    m[1][1] = T::zero();
    m[1][2] = T::one();
    m[2][2] = T::zero();
    m
}
