use super::*;

/// 2x4 row-major matrix. In the spline engine it is the geometry matrix `G`,
/// whose columns are the four control points of a segment, and later `G * C`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat2x4<T> {
    pub(crate) rows: [Vec4<T>; 2],
}

impl<T: Scalar> Mat2x4<T> {
    /// `d` at (0, 0) and (1, 1), zero elsewhere.
    pub fn diagonal(d: T) -> Self {
        let o = T::zero();
        Mat2x4::from_rows([[d, o, o, o], [o, d, o, o]])
    }

    pub fn identity() -> Self {
        Self::diagonal(T::one())
    }

    /// Geometry matrix from four points: row 0 holds the x coordinates, row 1 the y coordinates.
    pub fn from_points(points: [Vec2<T>; 4]) -> Self {
        Self::from_columns(points)
    }
}

impl_matrix!(Mat2x4, "mat2x4", Vec4, Vec2, 2, 4);

impl<T: Scalar> core::ops::Mul<Mat4<T>> for Mat2x4<T> {
    type Output = Mat2x4<T>;

    fn mul(self, other: Mat4<T>) -> Mat2x4<T> {
        let (a, b) = (&self.rows, &other.rows);
        Mat2x4::from_rows(core::array::from_fn(|i| {
            core::array::from_fn(|j| row_times_col!(a, b, i, j, 4))
        }))
    }
}

impl<T: Scalar> core::ops::MulAssign<Mat4<T>> for Mat2x4<T> {
    fn mul_assign(&mut self, other: Mat4<T>) {
        *self = *self * other;
    }
}

impl<T: Scalar> core::ops::Mul<Vec4<T>> for Mat2x4<T> {
    type Output = Vec2<T>;

    fn mul(self, v: Vec4<T>) -> Vec2<T> {
        Vec2::new(self.rows[0].dot(v), self.rows[1].dot(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> Mat2x4<f64> {
        Mat2x4::from_points([
            Vec2::new(0.0, 1.0),
            Vec2::new(2.0, 3.0),
            Vec2::new(4.0, 5.0),
            Vec2::new(6.0, 7.0),
        ])
    }

    #[test]
    fn points_become_columns() {
        let g = geometry();
        assert_eq!(g.row(0), Vec4::new(0.0, 2.0, 4.0, 6.0));
        assert_eq!(g.row(1), Vec4::new(1.0, 3.0, 5.0, 7.0));
        assert_eq!(g.col(2), Vec2::new(4.0, 5.0));
    }

    #[test]
    fn default_is_scaled_identity() {
        let m = Mat2x4::<f32>::default();
        assert_eq!(m.row(0), Vec4::new(1.0, 0.0, 0.0, 0.0));
        assert_eq!(m.row(1), Vec4::new(0.0, 1.0, 0.0, 0.0));
        assert_eq!(Mat2x4::diagonal(3.0f32).col(1), Vec2::new(0.0, 3.0));
    }

    #[test]
    fn times_mat4_and_vec4() {
        let g = geometry();
        assert_eq!(g * Mat4::identity(), g);
        // picking a column with a unit vector returns that control point
        assert_eq!(g * Vec4::new(0.0, 1.0, 0.0, 0.0), Vec2::new(2.0, 3.0));
        let swap = Mat4::from_rows([
            [0.0, 1.0, 0.0, 0.0],
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
            [0.0, 0.0, 1.0, 0.0],
        ]);
        assert_eq!((g * swap).col(0), Vec2::new(2.0, 3.0));
        assert_eq!((g * swap).col(3), Vec2::new(4.0, 5.0));
    }

    #[test]
    fn element_wise_ops() {
        let g = geometry();
        assert_eq!(g - g, Mat2x4::diagonal(0.0));
        assert_eq!(g + g, g * 2.0);
        assert_eq!((2.0 * g) / 2.0, g);
    }

    #[test]
    #[should_panic(expected = "mat2x4 row index out of range")]
    fn row_out_of_range_panics() {
        let _ = geometry()[2];
    }
}
