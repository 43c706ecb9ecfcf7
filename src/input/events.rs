//! Host input events delivered to the drawing surface.

use crate::geometry::ClientPoint;

/// Pointer and touch events in client (viewport) coordinates.
///
/// Touch events carry the list of active touch points; only the first one is
/// ever read, multi-touch is not supported.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerEvent {
    /// Mouse/pen button pressed over the surface
    PointerDown(ClientPoint),
    /// Pointer moved over the surface
    PointerMove(ClientPoint),
    /// Button released
    PointerUp,
    /// Pointer left the surface element
    PointerLeave,
    /// One or more fingers touched the surface
    TouchStart(Vec<ClientPoint>),
    /// Active touches moved
    TouchMove(Vec<ClientPoint>),
    /// Last touch lifted
    TouchEnd,
    /// Touch sequence interrupted by the host
    TouchCancel,
}

impl PointerEvent {
    /// Position the event refers to: the pointer position, or the first touch.
    pub fn primary_point(&self) -> Option<ClientPoint> {
        match self {
            PointerEvent::PointerDown(point) | PointerEvent::PointerMove(point) => Some(*point),
            PointerEvent::TouchStart(touches) | PointerEvent::TouchMove(touches) => {
                touches.first().copied()
            }
            PointerEvent::PointerUp
            | PointerEvent::PointerLeave
            | PointerEvent::TouchEnd
            | PointerEvent::TouchCancel => None,
        }
    }
}
