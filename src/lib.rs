//! Freehand drawing surface with pen and eraser tools.
//!
//! A [`DrawingSurface`] owns a Cairo pixel buffer sized for the display's
//! device pixel ratio, maps host pointer/touch events into buffer
//! coordinates, and commits each pointer move as a round-capped segment.
//! Hosts drive it through a small control API (clear, set tool, set widths)
//! and may subscribe to empty/non-empty notifications.

pub mod config;
pub mod draw;
pub mod geometry;
pub mod input;
pub mod script;
pub mod surface;

pub use config::Config;
pub use input::{PointerEvent, Tool};
pub use surface::{DrawingSurface, SurfaceOptions};
