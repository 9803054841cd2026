//! Whole-curve evaluation over a control point sequence.
use alloc::vec::Vec;
use core::slice;

use super::*;

/// Fewest control points that produce a segment.
pub const MIN_CONTROL_POINTS: usize = 4;

/// Number of drawable segments for `n` control points: `max(0, n - 3)`.
pub fn segment_count(n: usize) -> usize {
    n.saturating_sub(MIN_CONTROL_POINTS - 1)
}

/// A TCB spline through a borrowed sequence of control points.
/// Segment `i` uses the window `points[i..i + 4]` and runs from `points[i + 1]` to `points[i + 2]`,
/// so the curve does not reach the first and the last control point.
///
/// # Examples
/// ```rust
/// use tcb::{ShapeParameters, TcbCurve, Vec2};
///
/// let points = [
///     Vec2::new(0.0f64, 0.0),
///     Vec2::new(100.0, 0.0),
///     Vec2::new(100.0, 100.0),
///     Vec2::new(0.0, 100.0),
///     Vec2::new(0.0, 0.0),
/// ];
/// let curve = TcbCurve::new(ShapeParameters::catmull_rom(), &points).unwrap();
/// assert_eq!(curve.segment_count(), 2);
///
/// let line = curve.polyline(0.05).unwrap();
/// assert_eq!(line.len(), 2 * 22);
/// assert_eq!(line[0], Vec2::new(100.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TcbCurve<'a, T> {
    points: &'a [Vec2<T>],
    coefficients: Mat4<T>,
}

impl<'a, T: Scalar> TcbCurve<'a, T> {
    /// Fails with [`SplineError::InsufficientControlPoints`] for fewer than four points.
    pub fn new(params: ShapeParameters<T>, points: &'a [Vec2<T>]) -> Result<Self, SplineError> {
        Self::with_coefficients(params.coefficient_matrix(), points)
    }

    /// Same as [`new`](Self::new) with an already built coefficient matrix.
    pub fn with_coefficients(coefficients: Mat4<T>, points: &'a [Vec2<T>]) -> Result<Self, SplineError> {
        if points.len() < MIN_CONTROL_POINTS {
            return Err(SplineError::InsufficientControlPoints {
                required: MIN_CONTROL_POINTS,
                found: points.len(),
            });
        }
        Ok(TcbCurve {
            points,
            coefficients,
        })
    }

    pub fn control_points(&self) -> &'a [Vec2<T>] {
        self.points
    }

    pub fn coefficients(&self) -> &Mat4<T> {
        &self.coefficients
    }

    pub fn segment_count(&self) -> usize {
        segment_count(self.points.len())
    }

    /// Returns segment `index`. Panics if `index >= self.segment_count()`.
    pub fn segment(&self, index: usize) -> TcbSegment<T> {
        assert!(
            index < self.segment_count(),
            "segment index out of range: {} (curve has {} segments)",
            index,
            self.segment_count()
        );
        let p = &self.points[index..index + 4];
        TcbSegment::new([p[0], p[1], p[2], p[3]], &self.coefficients)
    }

    /// Iterate over all segments in order.
    pub fn segments(&self) -> Segments<'a, T> {
        Segments {
            windows: self.points.windows(MIN_CONTROL_POINTS),
            coefficients: self.coefficients,
        }
    }

    /// Concatenation of every segment's polyline, in segment order.
    /// Each segment contributes [`sample_count(step)`](sample_count) points; neighbouring
    /// segments meet at a shared control point but both samples are kept.
    pub fn polyline(&self, step: T) -> Result<Vec<Vec2<T>>, SplineError> {
        let per_segment = sample_count(step)?;
        let total = per_segment
            .checked_mul(self.segment_count())
            .ok_or(SplineError::InvalidStep)?;
        let mut line = Vec::with_capacity(total);
        for segment in self.segments() {
            line.extend(segment.samples(step)?);
        }
        Ok(line)
    }

    /// Map a curve-wide `t` in `[0, 1]` onto a segment index and a local parameter.
    /// Values outside the range are clamped.
    fn segment_parameter(&self, t: T) -> (usize, T) {
        let count = self.segment_count();
        let count_t = cast::<T>(count as f64);
        let scaled = t.max(T::zero()).min(T::one()) * count_t;
        if scaled >= count_t {
            return (count - 1, T::one());
        }
        let index = scaled.floor().to_usize().unwrap_or(0).min(count - 1);
        (index, scaled - cast(index as f64))
    }
}

/// Evaluates the curve with a curve-wide parameter: `t = 0` is the start of the
/// first segment, `t = 1` the end of the last, each segment covering an equal share.
impl<'a, T: Scalar> Spline<Vec2<T>> for TcbCurve<'a, T> {
    fn eval(&self, t: T) -> Vec2<T> {
        let (index, local) = self.segment_parameter(t);
        self.segment(index).eval(local)
    }
}

/// Iterator over the segments of a [`TcbCurve`].
#[derive(Debug, Clone)]
pub struct Segments<'a, T> {
    windows: slice::Windows<'a, Vec2<T>>,
    coefficients: Mat4<T>,
}

impl<'a, T: Scalar> Iterator for Segments<'a, T> {
    type Item = TcbSegment<T>;

    fn next(&mut self) -> Option<TcbSegment<T>> {
        let p = self.windows.next()?;
        Some(TcbSegment::new([p[0], p[1], p[2], p[3]], &self.coefficients))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.windows.size_hint()
    }
}

impl<'a, T: Scalar> ExactSizeIterator for Segments<'a, T> {}

/// Shape parameters and control points in, polyline out.
/// Fails for fewer than four points or an invalid `step`.
pub fn evaluate<T: Scalar>(
    params: ShapeParameters<T>,
    points: &[Vec2<T>],
    step: T,
) -> Result<Vec<Vec2<T>>, SplineError> {
    TcbCurve::new(params, points)?.polyline(step)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::vec;

    fn square() -> Vec<Vec2<f32>> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(100.0, 0.0),
            Vec2::new(100.0, 100.0),
            Vec2::new(0.0, 100.0),
            Vec2::new(0.0, 0.0),
        ]
    }

    #[test]
    fn segment_count_formula() {
        assert_eq!(segment_count(0), 0);
        assert_eq!(segment_count(3), 0);
        assert_eq!(segment_count(4), 1);
        assert_eq!(segment_count(10), 7);
    }

    #[test]
    fn too_few_points_is_reported() {
        let points = [Vec2::new(0.0f64, 0.0), Vec2::new(1.0, 1.0), Vec2::new(2.0, 0.0)];
        let err = TcbCurve::new(ShapeParameters::catmull_rom(), &points).unwrap_err();
        assert_eq!(
            err,
            SplineError::InsufficientControlPoints {
                required: 4,
                found: 3
            }
        );
        assert_eq!(
            evaluate(ShapeParameters::catmull_rom(), &[], 0.05f32),
            Err(SplineError::InsufficientControlPoints {
                required: 4,
                found: 0
            })
        );
    }

    #[test]
    fn segments_use_sliding_windows() {
        let points = square();
        let curve = TcbCurve::new(ShapeParameters::catmull_rom(), &points).unwrap();
        let segments: Vec<_> = curve.segments().collect();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[1], curve.segment(1));
        // segment 1 runs from points[2] to points[3]
        let start = segments[1].eval(0.0);
        let end = segments[1].eval(1.0);
        assert_abs_diff_eq!(start.x, 100.0, epsilon = 1e-4);
        assert_abs_diff_eq!(start.y, 100.0, epsilon = 1e-4);
        assert_abs_diff_eq!(end.x, 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(end.y, 100.0, epsilon = 1e-4);
    }

    #[test]
    #[should_panic(expected = "segment index out of range")]
    fn segment_out_of_range_panics() {
        let points = square();
        let curve = TcbCurve::new(ShapeParameters::catmull_rom(), &points).unwrap();
        curve.segment(2);
    }

    #[test]
    fn polyline_concatenates_segments() {
        let points = square();
        let curve = TcbCurve::new(ShapeParameters::catmull_rom(), &points).unwrap();
        let line = curve.polyline(0.05).unwrap();
        assert_eq!(line.len(), 44);
        let first = curve.segment(0).polyline(0.05).unwrap();
        let second = curve.segment(1).polyline(0.05).unwrap();
        assert_eq!(&line[..22], first.as_slice());
        assert_eq!(&line[22..], second.as_slice());
        assert_eq!(curve.polyline(0.0), Err(SplineError::InvalidStep));
    }

    #[test]
    fn tiny_step_is_rejected() {
        let points = square();
        let curve = TcbCurve::new(ShapeParameters::catmull_rom(), &points).unwrap();
        // one segment's sample count still fits in usize, two segments do not
        assert_eq!(curve.polyline(1e-19), Err(SplineError::InvalidStep));
        let wide: Vec<Vec2<f64>> = points.iter().map(|p| Vec2::new(p.x as f64, p.y as f64)).collect();
        assert_eq!(
            evaluate(ShapeParameters::catmull_rom(), &wide, 1e-19),
            Err(SplineError::InvalidStep)
        );
    }

    #[test]
    fn curve_wide_parameter() {
        let points = square();
        let curve = TcbCurve::new(ShapeParameters::catmull_rom(), &points).unwrap();
        assert_eq!(Spline::eval(&curve, 0.0), curve.segment(0).eval(0.0));
        assert_eq!(Spline::eval(&curve, 0.5), curve.segment(1).eval(0.0));
        assert_eq!(Spline::eval(&curve, 0.75), curve.segment(1).eval(0.5));
        assert_eq!(Spline::eval(&curve, 1.0), curve.segment(1).eval(1.0));
        // clamped
        assert_eq!(Spline::eval(&curve, 7.0), curve.segment(1).eval(1.0));
        assert_eq!(Spline::eval(&curve, -1.0), curve.segment(0).eval(0.0));
        assert_eq!(curve.start(), curve.segment(0).eval(0.0));
        assert_eq!(curve.end(), curve.segment(1).eval(1.0));
    }
}
