//! Affine transform builders for homogeneous 2D (`Mat3`) and 3D (`Mat4`) coordinates.
//! All builders are pure functions of their parameters.
use super::*;

pub fn translate2<T: Scalar>(v: Vec2<T>) -> Mat3<T> {
    let mut m = Mat3::identity();
    m[0][2] = v.x;
    m[1][2] = v.y;
    m
}

pub fn translate3<T: Scalar>(v: Vec3<T>) -> Mat4<T> {
    let mut m = Mat4::identity();
    m[0][3] = v.x;
    m[1][3] = v.y;
    m[2][3] = v.z;
    m
}

/// Counter-clockwise rotation by `angle` radians around the origin.
pub fn rotate<T: Scalar>(angle: T) -> Mat3<T> {
    let (sin, cos) = angle.sin_cos();
    let mut m = Mat3::identity();
    m[0][0] = cos;
    m[0][1] = -sin;
    m[1][0] = sin;
    m[1][1] = cos;
    m
}

pub fn rotate_x<T: Scalar>(angle: T) -> Mat4<T> {
    let (sin, cos) = angle.sin_cos();
    let mut m = Mat4::identity();
    m[1][1] = cos;
    m[1][2] = -sin;
    m[2][1] = sin;
    m[2][2] = cos;
    m
}

pub fn rotate_y<T: Scalar>(angle: T) -> Mat4<T> {
    let (sin, cos) = angle.sin_cos();
    let mut m = Mat4::identity();
    m[0][0] = cos;
    m[0][2] = sin;
    m[2][0] = -sin;
    m[2][2] = cos;
    m
}

pub fn rotate_z<T: Scalar>(angle: T) -> Mat4<T> {
    let (sin, cos) = angle.sin_cos();
    let mut m = Mat4::identity();
    m[0][0] = cos;
    m[0][1] = -sin;
    m[1][0] = sin;
    m[1][1] = cos;
    m
}

pub fn scale2<T: Scalar>(v: Vec2<T>) -> Mat3<T> {
    let mut m = Mat3::identity();
    m[0][0] = v.x;
    m[1][1] = v.y;
    m
}

pub fn scale3<T: Scalar>(v: Vec3<T>) -> Mat4<T> {
    let mut m = Mat4::identity();
    m[0][0] = v.x;
    m[1][1] = v.y;
    m[2][2] = v.z;
    m
}

/// Maps the rectangle at `window_pos` with `window_size` onto the one at
/// `viewport_pos` with `viewport_size`: translate to the origin, scale, translate to the viewport.
pub fn window_to_viewport2<T: Scalar>(
    window_pos: Vec2<T>,
    window_size: Vec2<T>,
    viewport_pos: Vec2<T>,
    viewport_size: Vec2<T>,
) -> Mat3<T> {
    translate2(viewport_pos)
        * scale2(Vec2::new(
            viewport_size.x / window_size.x,
            viewport_size.y / window_size.y,
        ))
        * translate2(-window_pos)
}

/// [`window_to_viewport2`] acting on the x/y plane of homogeneous 3D points, `z` is left alone.
pub fn window_to_viewport3<T: Scalar>(
    window_pos: Vec2<T>,
    window_size: Vec2<T>,
    viewport_pos: Vec2<T>,
    viewport_size: Vec2<T>,
) -> Mat4<T> {
    let o = T::zero();
    translate3(viewport_pos.extend(o))
        * scale3(Vec3::new(
            viewport_size.x / window_size.x,
            viewport_size.y / window_size.y,
            T::one(),
        ))
        * translate3(Vec3::new(-window_pos.x, -window_pos.y, o))
}

/// Change of basis into the frame with origin `d` and axes `i`, `j`.
pub fn coordinate_transform2<T: Scalar>(d: Vec2<T>, i: Vec2<T>, j: Vec2<T>) -> Mat3<T> {
    let mut m = Mat3::identity();
    m[0] = i.extend(-d.dot(i));
    m[1] = j.extend(-d.dot(j));
    m
}

/// Change of basis into the frame with origin `d` and axes `i`, `j`, `k`.
pub fn coordinate_transform3<T: Scalar>(d: Vec3<T>, i: Vec3<T>, j: Vec3<T>, k: Vec3<T>) -> Mat4<T> {
    let mut m = Mat4::identity();
    m[0] = i.extend(-d.dot(i));
    m[1] = j.extend(-d.dot(j));
    m[2] = k.extend(-d.dot(k));
    m
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn apply2(m: Mat3<f64>, p: Vec2<f64>) -> Vec2<f64> {
        (m * p.to_homogeneous()).from_homogeneous()
    }

    #[test]
    fn translate_and_scale() {
        let p = Vec2::new(1.0, 2.0);
        assert_eq!(apply2(translate2(Vec2::new(3.0, -1.0)), p), Vec2::new(4.0, 1.0));
        assert_eq!(apply2(scale2(Vec2::new(2.0, 0.5)), p), Vec2::new(2.0, 1.0));

        let q = translate3(Vec3::new(1.0f64, 1.0, 1.0)) * Vec3::new(0.0, 1.0, 2.0).to_homogeneous();
        assert_eq!(q.from_homogeneous(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(scale3(Vec3::splat(2.0f64)).determinant(), 8.0);
    }

    #[test]
    fn rotations() {
        let quarter = core::f64::consts::FRAC_PI_2;
        let p = apply2(rotate(quarter), Vec2::new(1.0, 0.0));
        assert_abs_diff_eq!(p.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 1.0, epsilon = 1e-12);

        let z = rotate_z(quarter) * Vec4::new(1.0, 0.0, 0.0, 1.0);
        assert_abs_diff_eq!(z.y, 1.0, epsilon = 1e-12);
        let x = rotate_x(quarter) * Vec4::new(0.0, 1.0, 0.0, 1.0);
        assert_abs_diff_eq!(x.z, 1.0, epsilon = 1e-12);
        let y = rotate_y(quarter) * Vec4::new(0.0, 0.0, 1.0, 1.0);
        assert_abs_diff_eq!(y.x, 1.0, epsilon = 1e-12);

        // rotations preserve volume
        assert_abs_diff_eq!(rotate_y(0.3f64).determinant(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn window_to_viewport_maps_corners() {
        let m = window_to_viewport2(
            Vec2::new(-1.0, -1.0),
            Vec2::new(2.0, 2.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(1024.0, 768.0),
        );
        assert_eq!(apply2(m, Vec2::new(-1.0, -1.0)), Vec2::new(0.0, 0.0));
        assert_eq!(apply2(m, Vec2::new(1.0, 1.0)), Vec2::new(1024.0, 768.0));
        assert_eq!(apply2(m, Vec2::new(0.0, 0.0)), Vec2::new(512.0, 384.0));

        let m3 = window_to_viewport3(
            Vec2::new(-1.0, -1.0),
            Vec2::new(2.0, 2.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(1024.0, 768.0),
        );
        let p = (m3 * Vec4::new(1.0, 1.0, 5.0, 1.0)).from_homogeneous();
        assert_eq!(p, Vec3::new(1024.0, 768.0, 5.0));
    }

    #[test]
    fn coordinate_transform_moves_origin() {
        let m = coordinate_transform2(Vec2::new(2.0, 3.0), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0));
        assert_eq!(apply2(m, Vec2::new(2.0, 3.0)), Vec2::new(0.0, 0.0));

        let m3 = coordinate_transform3(
            Vec3::new(1.0f64, 1.0, 1.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
        );
        let p = (m3 * Vec4::new(3.0, 2.0, 1.0, 1.0)).from_homogeneous();
        assert_eq!(p, Vec3::new(1.0, 2.0, 0.0));
    }
}
