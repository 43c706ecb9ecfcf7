//! Gesture state machine: `Idle` until a pointer goes down, `Drawing` until it
//! is released or leaves the surface.

use crate::geometry::LogicalPoint;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    /// No gesture in progress
    #[default]
    Idle,
    /// Pointer held down; `last` is where the next segment starts
    Drawing { last: LogicalPoint },
}

impl GestureState {
    pub fn is_drawing(&self) -> bool {
        matches!(self, GestureState::Drawing { .. })
    }

    /// Starts a gesture at `at`. A down event during a gesture restarts it.
    pub fn begin(&mut self, at: LogicalPoint) {
        *self = GestureState::Drawing { last: at };
    }

    /// Advances the gesture to `to`, returning the `(from, to)` pair to draw.
    /// Returns `None` while idle.
    pub fn advance(&mut self, to: LogicalPoint) -> Option<(LogicalPoint, LogicalPoint)> {
        match self {
            GestureState::Drawing { last } => {
                let from = std::mem::replace(last, to);
                Some((from, to))
            }
            GestureState::Idle => None,
        }
    }

    /// Ends any gesture. Returns `true` if one was in progress.
    pub fn end(&mut self) -> bool {
        let was_drawing = self.is_drawing();
        *self = GestureState::Idle;
        was_drawing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_chain_from_previous_position() {
        let mut gesture = GestureState::default();
        gesture.begin(LogicalPoint::new(10.0, 10.0));

        assert_eq!(
            gesture.advance(LogicalPoint::new(20.0, 10.0)),
            Some((LogicalPoint::new(10.0, 10.0), LogicalPoint::new(20.0, 10.0)))
        );
        assert_eq!(
            gesture.advance(LogicalPoint::new(20.0, 20.0)),
            Some((LogicalPoint::new(20.0, 10.0), LogicalPoint::new(20.0, 20.0)))
        );
    }

    #[test]
    fn idle_does_not_advance() {
        let mut gesture = GestureState::default();
        assert_eq!(gesture.advance(LogicalPoint::new(1.0, 1.0)), None);
        assert!(!gesture.end());
    }

    #[test]
    fn end_clears_last_position() {
        let mut gesture = GestureState::default();
        gesture.begin(LogicalPoint::new(5.0, 5.0));
        assert!(gesture.end());
        assert_eq!(gesture, GestureState::Idle);
        assert_eq!(gesture.advance(LogicalPoint::new(6.0, 6.0)), None);
    }
}
