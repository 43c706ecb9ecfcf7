//! Rendering primitives for the drawing surface (Cairo-based).
//!
//! This module defines the drawing-side types:
//! - [`Color`]: RGBA color representation with named constants
//! - [`Segment`] / [`StrokeStyle`]: one piece of a stroke and how it composites
//! - [`Buffer`]: the physical-pixel raster, behind the [`Canvas`] trait
//! - Rendering functions that issue the Cairo commands

pub mod buffer;
pub mod color;
pub mod render;
pub mod segment;

pub use buffer::{Buffer, BufferError, Canvas};
pub use color::Color;
pub use render::{clear_context, render_segment};
pub use segment::{Segment, StrokeStyle};
