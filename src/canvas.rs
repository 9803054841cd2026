//! Drawing seam between the session and whatever rasterizes the frame.
//!
//! The session only produces geometry tagged with a [`Layer`]; colors, line widths
//! and the actual rasterization belong to the `Canvas` implementation.
use alloc::vec::Vec;

use super::*;

/// What a batch of geometry represents.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Layer {
    /// The sampled spline, one connected strip across all segments.
    Curve,
    /// Straight lines joining the control points in order.
    ControlPolygon,
    /// The control points themselves.
    ControlPoints,
}

pub trait Canvas<T> {
    /// Draw connected line segments through `points`.
    fn line_strip(&mut self, layer: Layer, points: &[Vec2<T>]);

    /// Draw unconnected points.
    fn points(&mut self, layer: Layer, points: &[Vec2<T>]);
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand<T> {
    LineStrip { layer: Layer, points: Vec<Vec2<T>> },
    Points { layer: Layer, points: Vec<Vec2<T>> },
}

impl<T> DrawCommand<T> {
    pub fn layer(&self) -> Layer {
        match self {
            DrawCommand::LineStrip { layer, .. } | DrawCommand::Points { layer, .. } => *layer,
        }
    }

    pub fn points(&self) -> &[Vec2<T>] {
        match self {
            DrawCommand::LineStrip { points, .. } | DrawCommand::Points { points, .. } => points,
        }
    }
}

/// A `Canvas` that records every call, in order.
/// Handy for tests and for handing a frame to a renderer that is not a `Canvas` itself.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawList<T> {
    commands: Vec<DrawCommand<T>>,
}

impl<T> DrawList<T> {
    pub fn new() -> Self {
        DrawList {
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand<T>] {
        &self.commands
    }

    /// First command drawn on `layer`, if any.
    pub fn find(&self, layer: Layer) -> Option<&DrawCommand<T>> {
        self.commands.iter().find(|c| c.layer() == layer)
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl<T> Default for DrawList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> Canvas<T> for DrawList<T> {
    fn line_strip(&mut self, layer: Layer, points: &[Vec2<T>]) {
        self.commands.push(DrawCommand::LineStrip {
            layer,
            points: points.to_vec(),
        });
    }

    fn points(&mut self, layer: Layer, points: &[Vec2<T>]) {
        self.commands.push(DrawCommand::Points {
            layer,
            points: points.to_vec(),
        });
    }
}
