use super::*;

/// 4x4 row-major matrix. Holds the TCB coefficient matrix as well as 3D homogeneous transforms.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat4<T> {
    pub(crate) rows: [Vec4<T>; 4],
}

impl<T: Scalar> Mat4<T> {
    /// `d` on the diagonal, zero elsewhere.
    pub fn diagonal(d: T) -> Self {
        let o = T::zero();
        Mat4::from_rows([[d, o, o, o], [o, d, o, o], [o, o, d, o], [o, o, o, d]])
    }

    pub fn identity() -> Self {
        Self::diagonal(T::one())
    }

    pub fn transpose(&self) -> Self {
        Mat4::from_row_vectors([self.col(0), self.col(1), self.col(2), self.col(3)])
    }

    /// Closed-form cofactor expansion over all 24 permutations.
    pub fn determinant(&self) -> T {
        let m = &self.rows;
        m[0][3] * m[1][2] * m[2][1] * m[3][0] - m[0][2] * m[1][3] * m[2][1] * m[3][0]
            - m[0][3] * m[1][1] * m[2][2] * m[3][0] + m[0][1] * m[1][3] * m[2][2] * m[3][0]
            + m[0][2] * m[1][1] * m[2][3] * m[3][0] - m[0][1] * m[1][2] * m[2][3] * m[3][0]
            - m[0][3] * m[1][2] * m[2][0] * m[3][1] + m[0][2] * m[1][3] * m[2][0] * m[3][1]
            + m[0][3] * m[1][0] * m[2][2] * m[3][1] - m[0][0] * m[1][3] * m[2][2] * m[3][1]
            - m[0][2] * m[1][0] * m[2][3] * m[3][1] + m[0][0] * m[1][2] * m[2][3] * m[3][1]
            + m[0][3] * m[1][1] * m[2][0] * m[3][2] - m[0][1] * m[1][3] * m[2][0] * m[3][2]
            - m[0][3] * m[1][0] * m[2][1] * m[3][2] + m[0][0] * m[1][3] * m[2][1] * m[3][2]
            + m[0][1] * m[1][0] * m[2][3] * m[3][2] - m[0][0] * m[1][1] * m[2][3] * m[3][2]
            - m[0][2] * m[1][1] * m[2][0] * m[3][3] + m[0][1] * m[1][2] * m[2][0] * m[3][3]
            + m[0][2] * m[1][0] * m[2][1] * m[3][3] - m[0][0] * m[1][2] * m[2][1] * m[3][3]
            - m[0][1] * m[1][0] * m[2][2] * m[3][3] + m[0][0] * m[1][1] * m[2][2] * m[3][3]
    }

    /// Closed-form inverse using 2x2 sub-determinants, scaled by `1 / det`.
    /// A singular matrix yields infinite or NaN entries.
    pub fn inverse(&self) -> Self {
        let m = &self.rows;

        // aCCRR: 2x2 minor over columns CC of rows RR
        let a2323 = m[2][2] * m[3][3] - m[2][3] * m[3][2];
        let a1323 = m[2][1] * m[3][3] - m[2][3] * m[3][1];
        let a1223 = m[2][1] * m[3][2] - m[2][2] * m[3][1];
        let a0323 = m[2][0] * m[3][3] - m[2][3] * m[3][0];
        let a0223 = m[2][0] * m[3][2] - m[2][2] * m[3][0];
        let a0123 = m[2][0] * m[3][1] - m[2][1] * m[3][0];
        let a2313 = m[1][2] * m[3][3] - m[1][3] * m[3][2];
        let a1313 = m[1][1] * m[3][3] - m[1][3] * m[3][1];
        let a1213 = m[1][1] * m[3][2] - m[1][2] * m[3][1];
        let a2312 = m[1][2] * m[2][3] - m[1][3] * m[2][2];
        let a1312 = m[1][1] * m[2][3] - m[1][3] * m[2][1];
        let a1212 = m[1][1] * m[2][2] - m[1][2] * m[2][1];
        let a0313 = m[1][0] * m[3][3] - m[1][3] * m[3][0];
        let a0213 = m[1][0] * m[3][2] - m[1][2] * m[3][0];
        let a0312 = m[1][0] * m[2][3] - m[1][3] * m[2][0];
        let a0212 = m[1][0] * m[2][2] - m[1][2] * m[2][0];
        let a0113 = m[1][0] * m[3][1] - m[1][1] * m[3][0];
        let a0112 = m[1][0] * m[2][1] - m[1][1] * m[2][0];

        let inv_det = T::one() / self.determinant();

        Mat4::from_rows([
            [
                inv_det * (m[1][1] * a2323 - m[1][2] * a1323 + m[1][3] * a1223),
                inv_det * -(m[0][1] * a2323 - m[0][2] * a1323 + m[0][3] * a1223),
                inv_det * (m[0][1] * a2313 - m[0][2] * a1313 + m[0][3] * a1213),
                inv_det * -(m[0][1] * a2312 - m[0][2] * a1312 + m[0][3] * a1212),
            ],
            [
                inv_det * -(m[1][0] * a2323 - m[1][2] * a0323 + m[1][3] * a0223),
                inv_det * (m[0][0] * a2323 - m[0][2] * a0323 + m[0][3] * a0223),
                inv_det * -(m[0][0] * a2313 - m[0][2] * a0313 + m[0][3] * a0213),
                inv_det * (m[0][0] * a2312 - m[0][2] * a0312 + m[0][3] * a0212),
            ],
            [
                inv_det * (m[1][0] * a1323 - m[1][1] * a0323 + m[1][3] * a0123),
                inv_det * -(m[0][0] * a1323 - m[0][1] * a0323 + m[0][3] * a0123),
                inv_det * (m[0][0] * a1313 - m[0][1] * a0313 + m[0][3] * a0113),
                inv_det * -(m[0][0] * a1312 - m[0][1] * a0312 + m[0][3] * a0112),
            ],
            [
                inv_det * -(m[1][0] * a1223 - m[1][1] * a0223 + m[1][2] * a0123),
                inv_det * (m[0][0] * a1223 - m[0][1] * a0223 + m[0][2] * a0123),
                inv_det * -(m[0][0] * a1213 - m[0][1] * a0213 + m[0][2] * a0113),
                inv_det * (m[0][0] * a1212 - m[0][1] * a0212 + m[0][2] * a0112),
            ],
        ])
    }
}

impl_matrix!(Mat4, "mat4", Vec4, Vec4, 4, 4);

/// Embeds a 3x3 matrix in the upper left corner, with 1 at (3, 3).
impl<T: Scalar> From<Mat3<T>> for Mat4<T> {
    fn from(m: Mat3<T>) -> Self {
        let o = T::zero();
        Mat4::from_row_vectors([
            m[0].extend(o),
            m[1].extend(o),
            m[2].extend(o),
            Vec4::new(o, o, o, T::one()),
        ])
    }
}

impl<T: Scalar> core::ops::Mul for Mat4<T> {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        let (a, b) = (&self.rows, &other.rows);
        Mat4::from_rows(core::array::from_fn(|i| {
            core::array::from_fn(|j| row_times_col!(a, b, i, j, 4))
        }))
    }
}

impl<T: Scalar> core::ops::MulAssign for Mat4<T> {
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}

impl<T: Scalar> core::ops::Mul<Vec4<T>> for Mat4<T> {
    type Output = Vec4<T>;

    fn mul(self, v: Vec4<T>) -> Vec4<T> {
        Vec4::new(
            self.rows[0].dot(v),
            self.rows[1].dot(v),
            self.rows[2].dot(v),
            self.rows[3].dot(v),
        )
    }
}
