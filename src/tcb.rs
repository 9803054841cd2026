//! Kochanek-Bartels (TCB) basis and single-segment evaluation.
//!
//! A segment is defined by a sliding window of four control points `[p0, p1, p2, p3]`.
//! It starts at `p1` (t = 0) and ends at `p2` (t = 1); `p0` and `p3` only shape the tangents.
//! The segment polynomial is
//! ```text
//! P(t) = G * C * (t³, t², t, 1)
//! ```
//! where `G` is the 2x4 geometry matrix (one control point per column) and `C`
//! the 4x4 coefficient matrix built from tension, bias and continuity.
use super::*;

/// Inline capacity of a [`Polyline`]: the number of samples at the default step of 0.05.
pub const INLINE_SAMPLES: usize = 22;

/// Samples of one segment. Stays on the stack for steps down to the default step.
pub type Polyline<T> = TinyVec<[Vec2<T>; INLINE_SAMPLES]>;

/// The three shape parameters shared by every segment of a curve.
/// No range is enforced here; all zero gives a Catmull-Rom spline.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ShapeParameters<T> {
    pub tension: T,
    pub bias: T,
    pub continuity: T,
}

impl<T: Scalar> ShapeParameters<T> {
    pub fn new(tension: T, bias: T, continuity: T) -> Self {
        ShapeParameters {
            tension,
            bias,
            continuity,
        }
    }

    /// Tension, bias and continuity all zero.
    pub fn catmull_rom() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    pub fn coefficient_matrix(&self) -> Mat4<T> {
        coefficient_matrix(self.tension, self.bias, self.continuity)
    }
}

/// Builds the 4x4 TCB coefficient matrix. Pure: identical inputs give bit-identical output.
///
/// # Examples
/// ```rust
/// use tcb::{coefficient_matrix, Vec4};
///
/// let c = coefficient_matrix(0.0f32, 0.0, 0.0);
/// assert_eq!(c.row(0), Vec4::new(-0.5, 1.0, -0.5, 0.0));
/// assert_eq!(c.row(3), Vec4::new(0.5, -0.5, 0.0, 0.0));
/// ```
pub fn coefficient_matrix<T: Scalar>(tension: T, bias: T, continuity: T) -> Mat4<T> {
    let one = T::one();
    let two = one + one;
    let three = two + one;
    let o = T::zero();

    let s = cast::<T>(0.5) * (one - tension);
    let q1 = s * (one + bias) * (one - continuity);
    let q2 = s * (one - bias) * (one + continuity);
    let q3 = s * (one + bias) * (one + continuity);
    let q4 = s * (one - bias) * (one - continuity);

    Mat4::from_rows([
        [-q1, two * q1, -q1, o],
        [q1 - q2 - q3 + two, q3 - (two * q1) + (two * q2) - three, q1 - q2, one],
        [q2 + q3 - q4 - two, q4 - q3 - (two * q2) + three, q2, o],
        [q4, -q4, o, o],
    ])
}

/// Number of samples emitted per segment for `step`: `floor(1 / step) + 2`.
///
/// Samples are taken at `t = i * step`, so the last one sits at or just past `t = 1`.
/// When `1 / step` is within rounding error of a whole number that number is used,
/// e.g. 0.05 gives 22 samples for both `f32` and `f64`.
pub fn sample_count<T: Scalar>(step: T) -> Result<usize, SplineError> {
    if !step.is_finite() || step <= T::zero() {
        return Err(SplineError::InvalidStep);
    }
    let n = T::one() / step;
    let nearest = n.round();
    let whole = if (n - nearest).abs() <= nearest * T::epsilon() * cast(4.0) {
        nearest
    } else {
        n.floor()
    };
    whole
        .to_usize()
        .and_then(|w| w.checked_add(2))
        .ok_or(SplineError::InvalidStep)
}

/// One TCB segment, stored as the premultiplied `G * C` matrix.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TcbSegment<T> {
    gm: Mat2x4<T>,
}

impl<T: Scalar> TcbSegment<T> {
    /// Segment through the window `[p0, p1, p2, p3]` using a precomputed coefficient matrix.
    pub fn new(window: [Vec2<T>; 4], coefficients: &Mat4<T>) -> Self {
        TcbSegment {
            gm: Mat2x4::from_points(window) * *coefficients,
        }
    }

    /// Convenience constructor that builds the coefficient matrix from `params`.
    pub fn with_parameters(window: [Vec2<T>; 4], params: ShapeParameters<T>) -> Self {
        Self::new(window, &params.coefficient_matrix())
    }

    /// The `G * C` matrix; column `j` holds the coefficient of the `t^(3-j)` term.
    pub fn matrix(&self) -> &Mat2x4<T> {
        &self.gm
    }

    /// Evaluate the segment polynomial at `t`. `t` is not clamped.
    pub fn eval(&self, t: T) -> Vec2<T> {
        self.gm * Vec4::new(t * t * t, t * t, t, T::one())
    }

    /// Iterate over the samples at `t = 0, step, 2 * step, ...`, see [`sample_count`].
    pub fn samples(&self, step: T) -> Result<Samples<'_, T>, SplineError> {
        Ok(Samples {
            segment: self,
            step,
            next: 0,
            count: sample_count(step)?,
        })
    }

    /// Collect [`samples`](Self::samples) into a polyline.
    pub fn polyline(&self, step: T) -> Result<Polyline<T>, SplineError> {
        Ok(self.samples(step)?.collect())
    }
}

impl<T: Scalar> Spline<Vec2<T>> for TcbSegment<T> {
    fn eval(&self, t: T) -> Vec2<T> {
        self.eval(t)
    }
}

/// Iterator over the sample points of a [`TcbSegment`].
#[derive(Debug, Clone)]
pub struct Samples<'a, T> {
    segment: &'a TcbSegment<T>,
    step: T,
    next: usize,
    count: usize,
}

impl<'a, T: Scalar> Iterator for Samples<'a, T> {
    type Item = Vec2<T>;

    fn next(&mut self) -> Option<Vec2<T>> {
        if self.next >= self.count {
            return None;
        }
        let t = cast::<T>(self.next as f64) * self.step;
        self.next += 1;
        Some(self.segment.eval(t))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.next;
        (remaining, Some(remaining))
    }
}

impl<'a, T: Scalar> ExactSizeIterator for Samples<'a, T> {}
