//! The drawing surface: owns the buffer and tool state, turns pointer
//! gestures into segments and exposes the host control API.

use crate::config::Config;
use crate::draw::{Buffer, Canvas, Color, Segment, color::BLACK};
use crate::geometry::{
    ClientPoint, ContainerLayout, LogicalPoint, ScreenRect, map_client_to_logical,
};
use crate::input::{GestureState, PointerEvent, Tool, ToolState};
use log::debug;

/// Notification invoked with `true` when the surface becomes empty and with
/// `false` when ink is drawn.
pub type DrawCallback = Box<dyn FnMut(bool)>;

/// Construction options for a [`DrawingSurface`].
pub struct SurfaceOptions {
    /// Ink color used by the pen
    pub pen_color: Color,
    /// Starting pen width in logical pixels
    pub initial_pen_width: f64,
    /// Starting eraser width in logical pixels
    pub initial_eraser_width: f64,
    /// Optional empty-state notification
    pub on_draw: Option<DrawCallback>,
}

impl Default for SurfaceOptions {
    fn default() -> Self {
        Self {
            pen_color: BLACK,
            initial_pen_width: 2.0,
            initial_eraser_width: 20.0,
            on_draw: None,
        }
    }
}

impl SurfaceOptions {
    /// Options seeded from the configured pen and eraser defaults.
    pub fn from_config(config: &Config) -> Self {
        Self {
            pen_color: config.pen.color.to_color(),
            initial_pen_width: config.pen.width,
            initial_eraser_width: config.eraser.width,
            on_draw: None,
        }
    }

    pub fn with_on_draw(mut self, on_draw: impl FnMut(bool) + 'static) -> Self {
        self.on_draw = Some(Box::new(on_draw));
        self
    }
}

/// Freehand drawing surface with pen and eraser tools.
///
/// Lifecycle: create with [`DrawingSurface::new`], [`mount`](Self::mount) once
/// the container is measured, forward host events to
/// [`handle_event`](Self::handle_event) and call [`resize`](Self::resize) when
/// the container changes size. None of the methods fail: without a usable
/// raster the surface simply draws nothing.
pub struct DrawingSurface<C: Canvas = Buffer> {
    canvas: C,
    tools: ToolState,
    gesture: GestureState,
    layout: Option<ContainerLayout>,
    display_rect: Option<ScreenRect>,
    empty: bool,
    ink_reported: bool,
    on_draw: Option<DrawCallback>,
}

impl DrawingSurface<Buffer> {
    /// Creates an unmounted surface backed by a Cairo [`Buffer`].
    pub fn new(options: SurfaceOptions) -> Self {
        Self::with_canvas(options, Buffer::new())
    }
}

impl<C: Canvas> DrawingSurface<C> {
    /// Creates an unmounted surface drawing into `canvas`.
    pub fn with_canvas(options: SurfaceOptions, canvas: C) -> Self {
        Self {
            canvas,
            tools: ToolState::new(
                options.pen_color,
                options.initial_pen_width,
                options.initial_eraser_width,
            ),
            gesture: GestureState::Idle,
            layout: None,
            display_rect: None,
            empty: true,
            ink_reported: false,
            on_draw: options.on_draw,
        }
    }

    /// Sizes the buffer for the measured container.
    pub fn mount(&mut self, layout: ContainerLayout) {
        self.resize(layout);
    }

    /// Re-measures the buffer for a new container layout.
    ///
    /// Re-allocating the raster discards existing strokes; the host is told
    /// through `on_draw(true)` when ink was lost. A layout with the same
    /// physical size and pixel ratio keeps everything.
    pub fn resize(&mut self, layout: ContainerLayout) {
        let size = layout.physical_size();
        let discarded = self.canvas.resize(size, layout.device_pixel_ratio);
        debug!(
            "Surface measured at {}x{} physical pixels (discarded contents: {})",
            size.width, size.height, discarded
        );

        self.layout = Some(layout);
        self.display_rect = Some(layout.content_rect());

        if discarded {
            self.ink_reported = false;
            if !self.empty {
                self.empty = true;
                self.notify(true);
            }
        }
    }

    /// Overrides the element's on-screen rectangle, for hosts that stretch
    /// the surface through styling. Reset on the next resize.
    pub fn set_display_rect(&mut self, rect: ScreenRect) {
        self.display_rect = Some(rect);
    }

    /// Erases the whole buffer and reports the surface as empty.
    pub fn clear_canvas(&mut self) {
        self.canvas.clear();
        self.empty = true;
        self.ink_reported = false;
        self.notify(true);
    }

    pub fn set_tool(&mut self, tool: Tool) {
        debug!("Tool set to {tool}");
        self.tools.set_tool(tool);
    }

    pub fn set_pen_width(&mut self, width: f64) {
        self.tools.set_pen_width(width);
    }

    pub fn set_eraser_width(&mut self, width: f64) {
        self.tools.set_eraser_width(width);
    }

    pub fn current_tool(&self) -> Tool {
        self.tools.current_tool()
    }

    pub fn tool_state(&self) -> &ToolState {
        &self.tools
    }

    /// Returns `true` until ink is drawn, and again after a clear.
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    pub fn is_drawing(&self) -> bool {
        self.gesture.is_drawing()
    }

    pub fn layout(&self) -> Option<&ContainerLayout> {
        self.layout.as_ref()
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    /// Dispatches a host input event.
    ///
    /// Touch events use their first touch point; touch events without any
    /// touch point are ignored.
    pub fn handle_event(&mut self, event: &PointerEvent) {
        match event {
            PointerEvent::PointerDown(_) | PointerEvent::TouchStart(_) => {
                if let Some(point) = event.primary_point() {
                    self.on_pointer_down(point);
                }
            }
            PointerEvent::PointerMove(_) | PointerEvent::TouchMove(_) => {
                if let Some(point) = event.primary_point() {
                    self.on_pointer_move(point);
                }
            }
            PointerEvent::PointerUp | PointerEvent::TouchEnd | PointerEvent::TouchCancel => {
                self.on_pointer_up();
            }
            PointerEvent::PointerLeave => self.on_pointer_leave(),
        }
    }

    /// Begins a gesture at `client`. Nothing is drawn until the first move.
    pub fn on_pointer_down(&mut self, client: ClientPoint) {
        let position = self.to_logical(client);
        debug!(
            "Gesture started at ({:.1}, {:.1})",
            position.x.value(),
            position.y.value()
        );
        self.gesture.begin(position);
    }

    /// Draws one segment from the last position to `client` while drawing.
    pub fn on_pointer_move(&mut self, client: ClientPoint) {
        if !self.gesture.is_drawing() {
            return;
        }
        let position = self.to_logical(client);
        let Some((from, to)) = self.gesture.advance(position) else {
            return;
        };

        let segment = Segment {
            from,
            to,
            style: self.tools.stroke_style(),
        };
        if !self.canvas.draw_segment(&segment) {
            return;
        }

        self.empty = false;
        if !self.ink_reported {
            self.ink_reported = true;
            self.notify(false);
        }
    }

    pub fn on_pointer_up(&mut self) {
        self.end_gesture();
    }

    pub fn on_pointer_leave(&mut self) {
        self.end_gesture();
    }

    fn end_gesture(&mut self) {
        if self.gesture.end() {
            debug!("Gesture ended");
        }
        self.ink_reported = false;
    }

    fn to_logical(&self, client: ClientPoint) -> LogicalPoint {
        match &self.layout {
            Some(layout) => map_client_to_logical(
                client,
                self.display_rect,
                layout.physical_size(),
                layout.device_pixel_ratio,
            ),
            None => LogicalPoint::ORIGIN,
        }
    }

    fn notify(&mut self, is_empty: bool) {
        if let Some(on_draw) = self.on_draw.as_mut() {
            on_draw(is_empty);
        }
    }
}
