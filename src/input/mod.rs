//! Input handling: tool state and the gesture state machine.
//!
//! This module turns host pointer/touch events into drawing gestures and holds
//! the tool selection (pen or eraser) with its per-tool widths.

pub mod events;
pub mod gesture;
pub mod tool;

pub use events::PointerEvent;
pub use gesture::GestureState;
pub use tool::{ParseToolError, Tool, ToolState};
