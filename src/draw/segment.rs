//! Line segments and the stroke style they are committed with.

use super::color::Color;
use crate::geometry::LogicalPoint;
use crate::input::Tool;

/// How a segment is composited into the buffer.
///
/// This is the single source for the active width and compositing mode; the
/// two can never disagree because they live in the same variant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StrokeStyle {
    /// Ink drawn on top of existing content
    Pen {
        /// Stroke width in logical pixels
        width: f64,
        /// Ink color
        color: Color,
    },
    /// Punches existing content back to transparent
    Eraser {
        /// Stroke width in logical pixels
        width: f64,
    },
}

impl StrokeStyle {
    pub fn width(&self) -> f64 {
        match self {
            StrokeStyle::Pen { width, .. } | StrokeStyle::Eraser { width } => *width,
        }
    }

    pub fn tool(&self) -> Tool {
        match self {
            StrokeStyle::Pen { .. } => Tool::Pen,
            StrokeStyle::Eraser { .. } => Tool::Eraser,
        }
    }

    /// Cairo compositing operator: source-over for pen, destination-out for eraser.
    pub fn operator(&self) -> cairo::Operator {
        match self {
            StrokeStyle::Pen { .. } => cairo::Operator::Over,
            StrokeStyle::Eraser { .. } => cairo::Operator::DestOut,
        }
    }
}

/// One straight piece of a stroke, between two consecutive pointer samples.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: LogicalPoint,
    pub to: LogicalPoint,
    pub style: StrokeStyle,
}
