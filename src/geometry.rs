//! Coordinate spaces and the client-to-buffer coordinate mapper.
//!
//! Three spaces are involved when a pointer event turns into ink:
//! - client space: viewport coordinates delivered by the host's input events
//! - logical space: CSS-pixel units inside the buffer, independent of display density
//! - physical space: actual raster pixels, `logical * device_pixel_ratio`
//!
//! [`LogicalPx`] and [`PhysicalPx`] are distinct types so the two can only be
//! mixed through [`DevicePixelRatio`].

use log::warn;

/// A length in logical (CSS) pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct LogicalPx(pub f64);

/// A length in physical raster pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct PhysicalPx(pub f64);

impl LogicalPx {
    pub fn value(self) -> f64 {
        self.0
    }
}

impl PhysicalPx {
    pub fn value(self) -> f64 {
        self.0
    }

    /// Whole raster pixels, truncating any fractional part.
    pub fn whole_pixels(self) -> i32 {
        self.0.max(0.0) as i32
    }
}

/// Ratio of physical display pixels to logical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DevicePixelRatio(f64);

impl Default for DevicePixelRatio {
    fn default() -> Self {
        Self(1.0)
    }
}

impl DevicePixelRatio {
    /// Creates a ratio, falling back to 1.0 for non-finite or non-positive input.
    pub fn new(ratio: f64) -> Self {
        if ratio.is_finite() && ratio > 0.0 {
            Self(ratio)
        } else {
            warn!("Invalid device pixel ratio {ratio}, using 1.0");
            Self(1.0)
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }

    pub fn to_physical(self, length: LogicalPx) -> PhysicalPx {
        PhysicalPx(length.0 * self.0)
    }

    pub fn to_logical(self, length: PhysicalPx) -> LogicalPx {
        LogicalPx(length.0 / self.0)
    }
}

/// A position in the host's client (viewport) coordinate space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ClientPoint {
    pub x: f64,
    pub y: f64,
}

impl ClientPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A position inside the buffer, in logical pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LogicalPoint {
    pub x: LogicalPx,
    pub y: LogicalPx,
}

impl LogicalPoint {
    /// Degenerate position used when the buffer cannot be measured.
    pub const ORIGIN: LogicalPoint = LogicalPoint {
        x: LogicalPx(0.0),
        y: LogicalPx(0.0),
    };

    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: LogicalPx(x),
            y: LogicalPx(y),
        }
    }
}

/// An on-screen rectangle in client coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ScreenRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Returns `true` when the rectangle has a measurable, non-zero area.
    pub fn is_measurable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Padding of the host container, in logical pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Padding {
    pub fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

/// Raster dimensions of the buffer in whole physical pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BufferSize {
    pub width: i32,
    pub height: i32,
}

impl BufferSize {
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

/// Measured layout of the container hosting the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerLayout {
    /// Container border box on screen
    pub rect: ScreenRect,
    /// Container padding subtracted to obtain the content box
    pub padding: Padding,
    /// Display density at measurement time
    pub device_pixel_ratio: DevicePixelRatio,
}

impl ContainerLayout {
    pub fn new(rect: ScreenRect, padding: Padding, device_pixel_ratio: DevicePixelRatio) -> Self {
        Self {
            rect,
            padding,
            device_pixel_ratio,
        }
    }

    /// Logical size of the content box (container minus padding), never negative.
    pub fn logical_size(&self) -> (LogicalPx, LogicalPx) {
        let width = (self.rect.width - self.padding.left - self.padding.right).max(0.0);
        let height = (self.rect.height - self.padding.top - self.padding.bottom).max(0.0);
        (LogicalPx(width), LogicalPx(height))
    }

    /// Physical raster size: logical size scaled by the device pixel ratio.
    pub fn physical_size(&self) -> BufferSize {
        let (width, height) = self.logical_size();
        BufferSize {
            width: self.device_pixel_ratio.to_physical(width).whole_pixels(),
            height: self.device_pixel_ratio.to_physical(height).whole_pixels(),
        }
    }

    /// On-screen rectangle occupied by the buffer element itself.
    pub fn content_rect(&self) -> ScreenRect {
        let (width, height) = self.logical_size();
        ScreenRect {
            left: self.rect.left + self.padding.left,
            top: self.rect.top + self.padding.top,
            width: width.value(),
            height: height.value(),
        }
    }
}

/// Maps a client-space event position into logical buffer coordinates.
///
/// `display_rect` is the buffer element's on-screen bounding rectangle. The
/// scale factor `physical / on_screen / dpr` cancels both the density
/// oversampling of the raster and any styling that stretches the element.
/// Returns [`LogicalPoint::ORIGIN`] when the element cannot be measured.
pub fn map_client_to_logical(
    client: ClientPoint,
    display_rect: Option<ScreenRect>,
    buffer: BufferSize,
    dpr: DevicePixelRatio,
) -> LogicalPoint {
    let Some(rect) = display_rect.filter(ScreenRect::is_measurable) else {
        return LogicalPoint::ORIGIN;
    };

    let scale_x = buffer.width as f64 / rect.width / dpr.get();
    let scale_y = buffer.height as f64 / rect.height / dpr.get();

    LogicalPoint::new(
        (client.x - rect.left) * scale_x,
        (client.y - rect.top) * scale_y,
    )
}
