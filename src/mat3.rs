use super::*;

/// 3x3 row-major matrix, used for 2D homogeneous transforms.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat3<T> {
    pub(crate) rows: [Vec3<T>; 3],
}

impl<T: Scalar> Mat3<T> {
    /// `d` on the diagonal, zero elsewhere.
    pub fn diagonal(d: T) -> Self {
        let o = T::zero();
        Mat3::from_rows([[d, o, o], [o, d, o], [o, o, d]])
    }

    pub fn identity() -> Self {
        Self::diagonal(T::one())
    }

    pub fn transpose(&self) -> Self {
        Mat3::from_row_vectors([self.col(0), self.col(1), self.col(2)])
    }

    /// Closed-form cofactor expansion.
    pub fn determinant(&self) -> T {
        let m = &self.rows;
        m[0][0] * m[1][1] * m[2][2] + m[0][1] * m[1][2] * m[2][0] + m[0][2] * m[1][0] * m[2][1]
            - m[0][0] * m[1][2] * m[2][1]
            - m[0][1] * m[1][0] * m[2][2]
            - m[0][2] * m[1][1] * m[2][0]
    }

    /// Closed-form inverse (adjugate times `1 / det`).
    /// A singular matrix yields infinite or NaN entries.
    pub fn inverse(&self) -> Self {
        let m = &self.rows;
        let inv_det = T::one() / self.determinant();

        Mat3::from_rows([
            [
                (m[1][1] * m[2][2] - m[2][1] * m[1][2]) * inv_det,
                (m[0][2] * m[2][1] - m[0][1] * m[2][2]) * inv_det,
                (m[0][1] * m[1][2] - m[0][2] * m[1][1]) * inv_det,
            ],
            [
                (m[1][2] * m[2][0] - m[1][0] * m[2][2]) * inv_det,
                (m[0][0] * m[2][2] - m[0][2] * m[2][0]) * inv_det,
                (m[1][0] * m[0][2] - m[0][0] * m[1][2]) * inv_det,
            ],
            [
                (m[1][0] * m[2][1] - m[2][0] * m[1][1]) * inv_det,
                (m[2][0] * m[0][1] - m[0][0] * m[2][1]) * inv_det,
                (m[0][0] * m[1][1] - m[1][0] * m[0][1]) * inv_det,
            ],
        ])
    }
}

impl_matrix!(Mat3, "mat3", Vec3, Vec3, 3, 3);

impl<T: Scalar> core::ops::Mul for Mat3<T> {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        let (a, b) = (&self.rows, &other.rows);
        Mat3::from_rows(core::array::from_fn(|i| {
            core::array::from_fn(|j| row_times_col!(a, b, i, j, 3))
        }))
    }
}

impl<T: Scalar> core::ops::MulAssign for Mat3<T> {
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}

impl<T: Scalar> core::ops::Mul<Vec3<T>> for Mat3<T> {
    type Output = Vec3<T>;

    fn mul(self, v: Vec3<T>) -> Vec3<T> {
        Vec3::new(self.rows[0].dot(v), self.rows[1].dot(v), self.rows[2].dot(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::format;

    fn sample() -> Mat3<f64> {
        Mat3::from_rows([[2.0, -1.0, 0.5], [1.0, 3.0, 2.0], [0.0, 4.0, -1.0]])
    }

    fn assert_mat_eq(a: Mat3<f64>, b: Mat3<f64>, eps: f64) {
        for i in 0..3 {
            for j in 0..3 {
                assert_abs_diff_eq!(a[i][j], b[i][j], epsilon = eps);
            }
        }
    }

    #[test]
    fn identity_determinant_is_one() {
        assert_eq!(Mat3::<f32>::identity().determinant(), 1.0);
        assert_eq!(Mat3::<f64>::default(), Mat3::identity());
        assert_eq!(Mat3::diagonal(2.0f64).determinant(), 8.0);
    }

    #[test]
    fn rows_and_columns() {
        let m = sample();
        assert_eq!(m.row(1), Vec3::new(1.0, 3.0, 2.0));
        assert_eq!(m.col(1), Vec3::new(-1.0, 3.0, 4.0));
        assert_eq!(m.transpose().row(1), m.col(1));
        assert_eq!(Mat3::from_columns([m.col(0), m.col(1), m.col(2)]), m);
    }

    #[test]
    #[should_panic(expected = "mat3 column index out of range")]
    fn column_out_of_range_panics() {
        sample().col(3);
    }

    #[test]
    fn product_is_row_by_column() {
        let m = sample();
        let p = m * Mat3::identity();
        assert_eq!(p, m);
        let q = m * m;
        // row 0 of m times column 0 of m
        assert_eq!(q[0][0], 2.0 * 2.0 + -1.0 * 1.0 + 0.5 * 0.0);
        assert_eq!(m * Vec3::new(1.0, 0.0, 0.0), m.col(0));
    }

    #[test]
    fn inverse_of_inverse() {
        let m = sample();
        assert_mat_eq(m * m.inverse(), Mat3::identity(), 1e-12);
        assert_mat_eq(m.inverse().inverse(), m, 1e-12);
    }

    #[test]
    fn singular_inverse_is_not_finite() {
        let m = Mat3::from_rows([[1.0f32, 2.0, 3.0], [2.0, 4.0, 6.0], [0.0, 1.0, 1.0]]);
        assert_eq!(m.determinant(), 0.0);
        assert!(!m.inverse()[0][0].is_finite());
    }

    #[test]
    fn scalar_ops_apply_element_wise() {
        let m = Mat3::<f64>::identity();
        assert_eq!((m + 1.0)[0], Vec3::new(2.0, 1.0, 1.0));
        assert_eq!((1.0 - m)[1], Vec3::new(1.0, 0.0, 1.0));
        assert_eq!((m * 3.0).determinant(), 27.0);
        let mut n = m;
        n *= 4.0;
        n /= 2.0;
        n -= Mat3::identity();
        assert_eq!(n, Mat3::identity());
    }

    #[test]
    fn display() {
        let text = format!("{}", Mat3::<f64>::identity());
        assert_eq!(text, "mat3\n(\n1, 0, 0,\n0, 1, 0,\n0, 0, 1\n)");
    }
}
