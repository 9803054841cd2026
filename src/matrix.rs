//! Operator boilerplate shared by `Mat3`, `Mat4` and `Mat2x4`.
//!
//! Matrices are row-major arrays of row vectors. All scalar operators apply row-wise,
//! the compound operators reassign the whole value.

/// Implements row/column access, element-wise arithmetic, scalar operators and `Display`.
/// Products are implemented per type since their shapes differ.
macro_rules! impl_matrix {
    ($name:ident, $label:literal, $row:ident, $col:ident, $nrows:literal, $ncols:literal) => {
        impl<T: Scalar> $name<T> {
            /// Build from row-major nested arrays.
            pub fn from_rows(rows: [[T; $ncols]; $nrows]) -> Self {
                $name { rows: rows.map($row::from) }
            }

            pub fn from_row_vectors(rows: [$row<T>; $nrows]) -> Self {
                $name { rows }
            }

            /// Build from column vectors, i.e. `columns[j][i]` lands at row `i`, column `j`.
            pub fn from_columns(columns: [$col<T>; $ncols]) -> Self {
                $name {
                    rows: core::array::from_fn(|i| {
                        $row::from(core::array::from_fn::<T, $ncols, _>(|j| columns[j][i]))
                    }),
                }
            }

            /// Returns row `index`. Panics if `index` is out of range.
            pub fn row(&self, index: usize) -> $row<T> {
                self[index]
            }

            /// Returns column `index`. Panics if `index` is out of range.
            pub fn col(&self, index: usize) -> $col<T> {
                assert!(
                    index < $ncols,
                    concat!($label, " column index out of range: {} (valid 0..{})"),
                    index,
                    $ncols
                );
                $col::from(core::array::from_fn::<T, $nrows, _>(|i| self.rows[i][index]))
            }

            /// All rows in order.
            pub fn rows(&self) -> &[$row<T>; $nrows] {
                &self.rows
            }
        }

        impl<T: Scalar> Default for $name<T> {
            /// The identity (diagonal value 1).
            fn default() -> Self {
                Self::diagonal(T::one())
            }
        }

        impl<T: Scalar> core::ops::Index<usize> for $name<T> {
            type Output = $row<T>;

            fn index(&self, index: usize) -> &$row<T> {
                assert!(
                    index < $nrows,
                    concat!($label, " row index out of range: {} (valid 0..{})"),
                    index,
                    $nrows
                );
                &self.rows[index]
            }
        }

        impl<T: Scalar> core::ops::IndexMut<usize> for $name<T> {
            fn index_mut(&mut self, index: usize) -> &mut $row<T> {
                assert!(
                    index < $nrows,
                    concat!($label, " row index out of range: {} (valid 0..{})"),
                    index,
                    $nrows
                );
                &mut self.rows[index]
            }
        }

        impl<T: Scalar> core::ops::Add for $name<T> {
            type Output = Self;

            fn add(self, other: Self) -> Self {
                $name { rows: core::array::from_fn(|i| self.rows[i] + other.rows[i]) }
            }
        }

        impl<T: Scalar> core::ops::Sub for $name<T> {
            type Output = Self;

            fn sub(self, other: Self) -> Self {
                $name { rows: core::array::from_fn(|i| self.rows[i] - other.rows[i]) }
            }
        }

        impl<T: Scalar> core::ops::Add<T> for $name<T> {
            type Output = Self;

            fn add(self, rhs: T) -> Self {
                $name { rows: self.rows.map(|r| r + rhs) }
            }
        }

        impl<T: Scalar> core::ops::Sub<T> for $name<T> {
            type Output = Self;

            fn sub(self, rhs: T) -> Self {
                $name { rows: self.rows.map(|r| r - rhs) }
            }
        }

        impl<T: Scalar> core::ops::Mul<T> for $name<T> {
            type Output = Self;

            fn mul(self, rhs: T) -> Self {
                $name { rows: self.rows.map(|r| r * rhs) }
            }
        }

        impl<T: Scalar> core::ops::Div<T> for $name<T> {
            type Output = Self;

            fn div(self, rhs: T) -> Self {
                $name { rows: self.rows.map(|r| r / rhs) }
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

        impl<T: Scalar> core::fmt::Display for $name<T> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, concat!($label, "\n(\n"))?;
                for (i, row) in self.rows.iter().enumerate() {
                    for j in 0..$ncols {
                        if j > 0 {
                            write!(f, ", ")?;
                        }
                        match f.precision() {
                            Some(p) => write!(f, "{:.*}", p, row[j])?,
                            None => write!(f, "{}", row[j])?,
                        }
                    }
                    if i + 1 < $nrows {
                        writeln!(f, ",")?;
                    } else {
                        writeln!(f)?;
                    }
                }
                write!(f, ")")
            }
        }

        impl_matrix!(@scalar_lhs $name, f32);
        impl_matrix!(@scalar_lhs $name, f64);
    };

    (@scalar_lhs $name:ident, $t:ty) => {
        impl core::ops::Add<$name<$t>> for $t {
            type Output = $name<$t>;

            fn add(self, m: $name<$t>) -> $name<$t> {
                $name { rows: m.rows.map(|r| self + r) }
            }
        }

        impl core::ops::Sub<$name<$t>> for $t {
            type Output = $name<$t>;

            fn sub(self, m: $name<$t>) -> $name<$t> {
                $name { rows: m.rows.map(|r| self - r) }
            }
        }

        impl core::ops::Mul<$name<$t>> for $t {
            type Output = $name<$t>;

            fn mul(self, m: $name<$t>) -> $name<$t> {
                $name { rows: m.rows.map(|r| self * r) }
            }
        }

        impl core::ops::Div<$name<$t>> for $t {
            type Output = $name<$t>;

            fn div(self, m: $name<$t>) -> $name<$t> {
                $name { rows: m.rows.map(|r| self / r) }
            }
        }
    };
}

/// `result[i][j] = Σ_k a[i][k] * b[k][j]`, summed left to right.
macro_rules! row_times_col {
    ($a:expr, $b:expr, $i:expr, $j:expr, $inner:literal) => {{
        let mut acc = $a[$i][0] * $b[0][$j];
        for k in 1..$inner {
            acc = acc + $a[$i][k] * $b[k][$j];
        }
        acc
    }};
}
