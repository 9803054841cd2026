//! Common interface of everything that maps a parameter onto a point.
use super::Vector;

/// A parametric curve over points of type `P`.
///
/// Implemented by a single [`TcbSegment`](crate::TcbSegment), whose `t` is used as is,
/// and by a whole [`TcbCurve`](crate::TcbCurve), which clamps `t` into `[0, 1]`.
pub trait Spline<P: Vector> {
    fn eval(&self, t: P::Scalar) -> P;

    /// `eval(0)`
    fn start(&self) -> P {
        self.eval(num_traits::zero())
    }

    /// `eval(1)`
    fn end(&self) -> P {
        self.eval(num_traits::one())
    }
}
