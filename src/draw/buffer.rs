//! Pixel buffer backing the drawing surface.
//!
//! The raster lives in physical pixels while every drawing command is issued
//! in logical units: each context handed out by [`Buffer`] is created with the
//! device-pixel-ratio scale already applied.

use super::render::{clear_context, render_segment};
use super::segment::Segment;
use crate::geometry::{BufferSize, DevicePixelRatio};
use log::{debug, info, warn};
use std::io::Write;
use thiserror::Error;

/// Errors raised while managing the raster. They stay inside the crate's
/// drawing layer; the surface API logs them and degrades to a no-op.
#[derive(Debug, Error)]
pub enum BufferError {
    #[error("Failed to allocate {width}x{height} image surface: {source}")]
    Allocation {
        width: i32,
        height: i32,
        #[source]
        source: cairo::Error,
    },

    #[error("Failed to create drawing context: {0}")]
    Context(#[source] cairo::Error),

    #[error("Drawing command failed: {0}")]
    Draw(#[source] cairo::Error),

    #[error("Buffer has no allocated raster")]
    Unallocated,

    #[error("Failed to encode PNG: {0}")]
    Export(#[from] cairo::IoError),
}

/// Drawing target the surface commits segments into.
///
/// [`Buffer`] is the Cairo-backed implementation; hosts with their own raster
/// (or tests that only care about the segments produced) can supply another.
pub trait Canvas {
    /// Re-allocates the raster for a new size/ratio. Returns `true` when the
    /// previous contents were discarded.
    fn resize(&mut self, size: BufferSize, dpr: DevicePixelRatio) -> bool;

    /// Erases everything to fully transparent.
    fn clear(&mut self);

    /// Commits a segment. Returns `false` if nothing could be drawn.
    fn draw_segment(&mut self, segment: &Segment) -> bool;
}

/// Cairo ARGB32 raster sized in physical pixels.
///
/// A buffer without a raster (never sized, zero-sized, or failed allocation)
/// is inert: every operation is a no-op.
#[derive(Default)]
pub struct Buffer {
    surface: Option<cairo::ImageSurface>,
    dpr: DevicePixelRatio,
}

impl Buffer {
    /// Creates an unallocated buffer; call [`Canvas::resize`] to give it pixels.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a buffer with a raster already allocated.
    pub fn with_size(size: BufferSize, dpr: DevicePixelRatio) -> Result<Self, BufferError> {
        Ok(Self {
            surface: Some(allocate(size)?),
            dpr,
        })
    }

    /// Returns whether a raster is currently allocated.
    pub fn is_allocated(&self) -> bool {
        self.surface.is_some()
    }

    /// Raster size in physical pixels, if allocated.
    pub fn size(&self) -> Option<BufferSize> {
        self.surface.as_ref().map(|surface| BufferSize {
            width: surface.width(),
            height: surface.height(),
        })
    }

    pub fn device_pixel_ratio(&self) -> DevicePixelRatio {
        self.dpr
    }

    /// Alpha of the physical pixel at `(x, y)`, or `None` outside the raster.
    pub fn alpha_at(&mut self, x: i32, y: i32) -> Option<u8> {
        let surface = self.surface.as_mut()?;
        if x < 0 || y < 0 || x >= surface.width() || y >= surface.height() {
            return None;
        }
        let stride = surface.stride() as usize;
        surface.flush();
        let data = surface.data().ok()?;
        let offset = y as usize * stride + x as usize * 4;
        let pixel = u32::from_ne_bytes(data[offset..offset + 4].try_into().ok()?);
        Some((pixel >> 24) as u8)
    }

    /// Returns `true` when no pixel carries any ink (or nothing is allocated).
    pub fn is_blank(&mut self) -> bool {
        let Some(surface) = self.surface.as_mut() else {
            return true;
        };
        surface.flush();
        match surface.data() {
            Ok(data) => data.iter().all(|byte| *byte == 0),
            Err(err) => {
                warn!("Could not inspect buffer pixels: {err}");
                false
            }
        }
    }

    /// Encodes the raster (at physical resolution) as PNG.
    pub fn write_png<W: Write>(&self, writer: &mut W) -> Result<(), BufferError> {
        let surface = self.surface.as_ref().ok_or(BufferError::Unallocated)?;
        surface.write_to_png(writer)?;
        Ok(())
    }

    /// Creates a context with the logical-to-physical scale applied.
    fn context(&self) -> Result<cairo::Context, BufferError> {
        let surface = self.surface.as_ref().ok_or(BufferError::Unallocated)?;
        let ctx = cairo::Context::new(surface).map_err(BufferError::Context)?;
        ctx.scale(self.dpr.get(), self.dpr.get());
        Ok(ctx)
    }

    fn try_draw(&self, segment: &Segment) -> Result<(), BufferError> {
        let ctx = self.context()?;
        render_segment(&ctx, segment).map_err(BufferError::Draw)
    }

    fn try_clear(&self) -> Result<(), BufferError> {
        let ctx = self.context()?;
        clear_context(&ctx).map_err(BufferError::Draw)
    }
}

impl Canvas for Buffer {
    fn resize(&mut self, size: BufferSize, dpr: DevicePixelRatio) -> bool {
        if self.size() == Some(size) && self.dpr == dpr {
            debug!("Buffer already {}x{} @{}x; keeping contents", size.width, size.height, dpr.get());
            return false;
        }

        let had_raster = self.surface.is_some();
        self.dpr = dpr;

        if size.is_empty() {
            debug!("Container has no drawable area; buffer is inert");
            self.surface = None;
            return had_raster;
        }

        match allocate(size) {
            Ok(surface) => {
                info!(
                    "Allocated {}x{} buffer (device pixel ratio {})",
                    size.width,
                    size.height,
                    dpr.get()
                );
                self.surface = Some(surface);
            }
            Err(err) => {
                warn!("{err}; drawing disabled");
                self.surface = None;
            }
        }
        had_raster
    }

    fn clear(&mut self) {
        match self.try_clear() {
            Ok(()) | Err(BufferError::Unallocated) => {}
            Err(err) => warn!("Failed to clear buffer: {err}"),
        }
    }

    fn draw_segment(&mut self, segment: &Segment) -> bool {
        match self.try_draw(segment) {
            Ok(()) => true,
            Err(BufferError::Unallocated) => false,
            Err(err) => {
                warn!("Failed to draw segment: {err}");
                false
            }
        }
    }
}

fn allocate(size: BufferSize) -> Result<cairo::ImageSurface, BufferError> {
    cairo::ImageSurface::create(cairo::Format::ARgb32, size.width, size.height).map_err(|source| {
        BufferError::Allocation {
            width: size.width,
            height: size.height,
            source,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::BLACK;
    use crate::draw::segment::StrokeStyle;
    use crate::geometry::LogicalPoint;

    fn size(width: i32, height: i32) -> BufferSize {
        BufferSize { width, height }
    }

    fn pen_segment(from: (f64, f64), to: (f64, f64), width: f64) -> Segment {
        Segment {
            from: LogicalPoint::new(from.0, from.1),
            to: LogicalPoint::new(to.0, to.1),
            style: StrokeStyle::Pen {
                width,
                color: BLACK,
            },
        }
    }

    #[test]
    fn unallocated_buffer_is_inert() {
        let mut buffer = Buffer::new();
        assert!(!buffer.draw_segment(&pen_segment((0.0, 0.0), (5.0, 5.0), 2.0)));
        buffer.clear();
        assert!(buffer.is_blank());
        assert!(matches!(
            buffer.write_png(&mut Vec::new()),
            Err(BufferError::Unallocated)
        ));
    }

    #[test]
    fn segment_lands_at_scaled_physical_pixels() {
        let mut buffer = Buffer::new();
        buffer.resize(size(200, 100), DevicePixelRatio::new(2.0));
        assert!(buffer.draw_segment(&pen_segment((10.0, 10.0), (40.0, 10.0), 4.0)));

        // Logical (25, 10) is physical (50, 20).
        assert_eq!(buffer.alpha_at(50, 20), Some(255));
        assert_eq!(buffer.alpha_at(25, 10), Some(0));
        assert!(!buffer.is_blank());
    }

    #[test]
    fn same_size_resize_keeps_contents() {
        let dpr = DevicePixelRatio::new(1.0);
        let mut buffer = Buffer::new();
        assert!(!buffer.resize(size(50, 50), dpr));
        buffer.draw_segment(&pen_segment((5.0, 25.0), (45.0, 25.0), 6.0));

        assert!(!buffer.resize(size(50, 50), dpr));
        assert!(!buffer.is_blank());

        assert!(buffer.resize(size(60, 50), dpr));
        assert!(buffer.is_blank());

        let denser = DevicePixelRatio::new(2.0);
        assert!(buffer.resize(size(60, 50), denser));
        assert_eq!(buffer.device_pixel_ratio(), denser);
    }

    #[test]
    fn zero_size_resize_drops_raster() {
        let mut buffer = Buffer::new();
        buffer.resize(size(10, 10), DevicePixelRatio::default());
        assert!(buffer.is_allocated());
        buffer.resize(size(0, 10), DevicePixelRatio::default());
        assert!(!buffer.is_allocated());
    }

    #[test]
    fn exported_png_has_signature() {
        let buffer = Buffer::with_size(size(8, 8), DevicePixelRatio::default()).unwrap();
        let mut bytes = Vec::new();
        buffer.write_png(&mut bytes).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }
}
