//! Interactive editing state: the control point sequence, the shape parameters
//! and the overlay toggles, driven by pointer and widget events.
//!
//! The input layer reports pointer events in screen space; a widget layer reports new
//! parameter values. Rendering goes through a [`Canvas`].
use alloc::vec::Vec;

use super::*;

/// What a pointer press did.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PointerAction {
    /// A new control point was appended at this index.
    Appended(usize),
    /// The existing control point at this index is now being dragged.
    Grabbed(usize),
}

/// Owns everything the curve is computed from. One per interactive session.
///
/// # Examples
/// ```rust
/// use tcb::{PointerAction, Session, Vec2};
///
/// let mut session = Session::<f32>::new();
/// session.pointer_down(Vec2::new(0.0, 0.0));
/// session.pointer_up();
/// session.pointer_down(Vec2::new(50.0, 50.0));
/// session.pointer_up();
///
/// // close enough to (50, 50) to pick it up instead of adding a point
/// assert_eq!(session.pointer_down(Vec2::new(51.0, 51.0)), PointerAction::Grabbed(1));
/// session.pointer_moved(Vec2::new(60.0, 40.0));
/// session.pointer_up();
/// assert_eq!(session.control_points()[1], Vec2::new(60.0, 40.0));
/// ```
#[derive(Debug, Clone)]
pub struct Session<T> {
    control_points: Vec<Vec2<T>>,
    params: ShapeParameters<T>,
    settings: Settings<T>,
    show_control_polygon: bool,
    show_control_points: bool,
    dragged: Option<usize>,
}

impl<T: Scalar> Session<T> {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings<T>) -> Self {
        Session {
            control_points: Vec::new(),
            params: ShapeParameters::default(),
            show_control_polygon: settings.show_control_polygon,
            show_control_points: settings.show_control_points,
            settings,
            dragged: None,
        }
    }

    pub fn control_points(&self) -> &[Vec2<T>] {
        &self.control_points
    }

    pub fn parameters(&self) -> ShapeParameters<T> {
        self.params
    }

    pub fn settings(&self) -> &Settings<T> {
        &self.settings
    }

    /// Index of the control point being dragged, if any.
    pub fn dragged(&self) -> Option<usize> {
        self.dragged
    }

    /// Sets the tension, clamped to the configured range. Returns the stored value.
    pub fn set_tension(&mut self, tension: T) -> T {
        self.params.tension = self.settings.clamp_tension(tension);
        #[cfg(feature = "logging")]
        log::trace!("tension set to {}", self.params.tension);
        self.params.tension
    }

    pub fn set_bias(&mut self, bias: T) {
        self.params.bias = bias;
        #[cfg(feature = "logging")]
        log::trace!("bias set to {}", bias);
    }

    pub fn set_continuity(&mut self, continuity: T) {
        self.params.continuity = continuity;
        #[cfg(feature = "logging")]
        log::trace!("continuity set to {}", continuity);
    }

    pub fn show_control_polygon(&self) -> bool {
        self.show_control_polygon
    }

    pub fn set_show_control_polygon(&mut self, show: bool) {
        self.show_control_polygon = show;
    }

    pub fn show_control_points(&self) -> bool {
        self.show_control_points
    }

    pub fn set_show_control_points(&mut self, show: bool) {
        self.show_control_points = show;
    }

    /// First control point, in insertion order, within the click threshold of `pos`.
    pub fn hit_test(&self, pos: Vec2<T>) -> Option<usize> {
        let threshold = self.settings.click_threshold;
        self.control_points
            .iter()
            .position(|p| pos.distance2(*p) <= threshold)
    }

    /// Press at `pos`: grab the control point under the cursor, or append a new one.
    pub fn pointer_down(&mut self, pos: Vec2<T>) -> PointerAction {
        match self.hit_test(pos) {
            Some(index) => {
                self.dragged = Some(index);
                #[cfg(feature = "logging")]
                log::debug!("dragging control point {} from {}", index, self.control_points[index]);
                PointerAction::Grabbed(index)
            }
            None => {
                self.control_points.push(pos);
                let index = self.control_points.len() - 1;
                #[cfg(feature = "logging")]
                log::debug!("appended control point {} at {}", index, pos);
                PointerAction::Appended(index)
            }
        }
    }

    /// Cursor moved to `pos`. Moves the dragged point, returns whether anything changed.
    pub fn pointer_moved(&mut self, pos: Vec2<T>) -> bool {
        match self.dragged {
            Some(index) => {
                self.control_points[index] = pos;
                true
            }
            None => false,
        }
    }

    /// Release ends any drag.
    pub fn pointer_up(&mut self) {
        #[cfg(feature = "logging")]
        if let Some(index) = self.dragged {
            log::debug!("released control point {}", index);
        }
        self.dragged = None;
    }

    /// Drop the drag without a release, e.g. when a widget took over the cursor.
    pub fn cancel_drag(&mut self) {
        self.dragged = None;
    }

    /// The curve through the current control points, or None below four points.
    pub fn curve(&self) -> Option<TcbCurve<'_, T>> {
        if self.control_points.len() < MIN_CONTROL_POINTS {
            return None;
        }
        TcbCurve::new(self.params, &self.control_points).ok()
    }

    /// Polyline of the whole curve at the configured step; empty below four points.
    pub fn polyline(&self) -> Result<Vec<Vec2<T>>, SplineError> {
        match self.curve() {
            Some(curve) => curve.polyline(self.settings.step),
            None => Ok(Vec::new()),
        }
    }

    /// Emit one frame: the curve (only with at least four points), then the
    /// control polygon and the control points when their overlays are on.
    ///
    /// A sampling error only drops the curve; the overlays are still drawn
    /// before the error is returned.
    pub fn render<C: Canvas<T>>(&self, canvas: &mut C) -> Result<(), SplineError> {
        let sampled = self.polyline();
        if let Ok(line) = &sampled {
            if !line.is_empty() {
                canvas.line_strip(Layer::Curve, line);
            }
        }
        if self.show_control_polygon {
            canvas.line_strip(Layer::ControlPolygon, &self.control_points);
        }
        if self.show_control_points {
            canvas.points(Layer::ControlPoints, &self.control_points);
        }
        sampled.map(|_| ())
    }
}

impl<T: Scalar> Default for Session<T> {
    fn default() -> Self {
        Self::new()
    }
}
