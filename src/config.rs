//! Tunable constants of the interactive session.
use super::*;

/// Parameter step used when sampling a segment.
pub const DEFAULT_STEP: f64 = 0.05;

/// A click selects an existing control point if its squared distance to the cursor is
/// at most this many squared screen pixels.
pub const DEFAULT_CLICK_THRESHOLD: f64 = 100.0;

/// Range the tension slider is limited to. Bias and continuity are not limited.
pub const DEFAULT_TENSION_RANGE: (f64, f64) = (-5.0, 5.0);

/// Session settings. `Default` gives the values above, with both overlays shown.
///
/// # Examples
/// ```rust
/// use tcb::Settings;
///
/// let settings = Settings::<f32>::default().with_step(0.1).with_click_threshold(25.0);
/// assert_eq!(settings.step, 0.1);
/// assert!(settings.show_control_polygon);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Settings<T> {
    /// Sampling step `Δt` for every segment.
    pub step: T,
    /// Squared pick radius in screen units.
    pub click_threshold: T,
    /// Inclusive `(min, max)` applied by [`Session::set_tension`].
    pub tension_range: (T, T),
    /// Initial state of the control polygon overlay.
    pub show_control_polygon: bool,
    /// Initial state of the control point overlay.
    pub show_control_points: bool,
}

impl<T: Scalar> Settings<T> {
    pub fn with_step(mut self, step: T) -> Self {
        self.step = step;
        self
    }

    pub fn with_click_threshold(mut self, click_threshold: T) -> Self {
        self.click_threshold = click_threshold;
        self
    }

    pub fn with_tension_range(mut self, min: T, max: T) -> Self {
        self.tension_range = (min, max);
        self
    }

    pub fn with_overlays(mut self, control_polygon: bool, control_points: bool) -> Self {
        self.show_control_polygon = control_polygon;
        self.show_control_points = control_points;
        self
    }

    /// Clamp `tension` into [`tension_range`](Self::tension_range). NaN maps to the lower bound.
    pub fn clamp_tension(&self, tension: T) -> T {
        let (min, max) = self.tension_range;
        tension.max(min).min(max)
    }
}

impl<T: Scalar> Default for Settings<T> {
    fn default() -> Self {
        Settings {
            step: cast(DEFAULT_STEP),
            click_threshold: cast(DEFAULT_CLICK_THRESHOLD),
            tension_range: (cast(DEFAULT_TENSION_RANGE.0), cast(DEFAULT_TENSION_RANGE.1)),
            show_control_polygon: true,
            show_control_points: true,
        }
    }
}
