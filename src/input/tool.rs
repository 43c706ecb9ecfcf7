//! Drawing tool selection and per-tool settings.

use crate::draw::{Color, StrokeStyle};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Drawing tool selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Draws ink on top of existing content (default)
    #[default]
    Pen,
    /// Removes existing ink, leaving transparent pixels
    Eraser,
}

impl Tool {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tool::Pen => "pen",
            Tool::Eraser => "eraser",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown tool '{0}' (expected 'pen' or 'eraser')")]
pub struct ParseToolError(String);

impl FromStr for Tool {
    type Err = ParseToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pen" => Ok(Tool::Pen),
            "eraser" => Ok(Tool::Eraser),
            _ => Err(ParseToolError(s.to_string())),
        }
    }
}

/// Active tool plus the independent width of each tool.
///
/// Widths are stored as given: the host is responsible for sane ranges.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolState {
    current: Tool,
    pen_width: f64,
    pen_color: Color,
    eraser_width: f64,
}

impl ToolState {
    /// Creates a tool state with the pen active.
    pub fn new(pen_color: Color, pen_width: f64, eraser_width: f64) -> Self {
        Self {
            current: Tool::Pen,
            pen_width,
            pen_color,
            eraser_width,
        }
    }

    pub fn current_tool(&self) -> Tool {
        self.current
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.current = tool;
    }

    pub fn pen_width(&self) -> f64 {
        self.pen_width
    }

    pub fn set_pen_width(&mut self, width: f64) {
        self.pen_width = width;
    }

    pub fn eraser_width(&self) -> f64 {
        self.eraser_width
    }

    pub fn set_eraser_width(&mut self, width: f64) {
        self.eraser_width = width;
    }

    pub fn pen_color(&self) -> Color {
        self.pen_color
    }

    /// Style for the next segment, resolved from the active tool.
    pub fn stroke_style(&self) -> StrokeStyle {
        match self.current {
            Tool::Pen => StrokeStyle::Pen {
                width: self.pen_width,
                color: self.pen_color,
            },
            Tool::Eraser => StrokeStyle::Eraser {
                width: self.eraser_width,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, RED};

    #[test]
    fn starts_with_pen() {
        let state = ToolState::new(BLACK, 2.0, 20.0);
        assert_eq!(state.current_tool(), Tool::Pen);
        assert_eq!(
            state.stroke_style(),
            StrokeStyle::Pen {
                width: 2.0,
                color: BLACK
            }
        );
    }

    #[test]
    fn width_changes_never_switch_tool() {
        let mut state = ToolState::new(BLACK, 2.0, 20.0);
        state.set_tool(Tool::Eraser);
        state.set_pen_width(8.0);
        state.set_eraser_width(30.0);
        state.set_pen_width(1.0);
        assert_eq!(state.current_tool(), Tool::Eraser);

        state.set_tool(Tool::Pen);
        assert_eq!(state.current_tool(), Tool::Pen);
    }

    #[test]
    fn widths_are_independent() {
        let mut state = ToolState::new(RED, 2.0, 20.0);
        state.set_pen_width(10.0);
        assert_eq!(state.eraser_width(), 20.0);

        state.set_eraser_width(5.0);
        assert_eq!(state.pen_width(), 10.0);
    }

    #[test]
    fn eraser_style_uses_eraser_width() {
        let mut state = ToolState::new(RED, 4.0, 16.0);
        state.set_tool(Tool::Eraser);
        assert_eq!(state.stroke_style(), StrokeStyle::Eraser { width: 16.0 });
    }

    #[test]
    fn widths_are_not_validated() {
        let mut state = ToolState::new(BLACK, 2.0, 20.0);
        state.set_pen_width(-3.0);
        assert_eq!(state.stroke_style().width(), -3.0);
    }

    #[test]
    fn parses_tool_names() {
        assert_eq!("pen".parse::<Tool>(), Ok(Tool::Pen));
        assert_eq!(" Eraser ".parse::<Tool>(), Ok(Tool::Eraser));
        assert!("brush".parse::<Tool>().is_err());
        assert_eq!(Tool::Eraser.to_string(), "eraser");
    }
}
