//! Input events for widgets.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Input event types.
///
/// Raw input (mouse, touch) comes from the host; gesture events are produced
/// from raw input by [`crate::GestureRecognizer`] or delivered directly by a
/// host that does its own recognition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Mouse moved to position
    MouseMove {
        /// New position
        position: Point,
    },
    /// Mouse button pressed
    MouseDown {
        /// Position of click
        position: Point,
        /// Button pressed
        button: MouseButton,
    },
    /// Mouse button released
    MouseUp {
        /// Position of release
        position: Point,
        /// Button released
        button: MouseButton,
    },
    /// Touch started
    TouchStart {
        /// Touch identifier
        id: TouchId,
        /// Touch position
        position: Point,
    },
    /// Touch moved
    TouchMove {
        /// Touch identifier
        id: TouchId,
        /// New position
        position: Point,
    },
    /// Touch ended
    TouchEnd {
        /// Touch identifier
        id: TouchId,
        /// Final position
        position: Point,
    },
    /// Touch cancelled by the system
    TouchCancel {
        /// Touch identifier
        id: TouchId,
    },
    /// Single tap
    GestureTap {
        /// Where the finger went down
        position: Point,
    },
    /// Quick directional flick
    GestureSwipe {
        /// Dominant direction of travel
        direction: SwipeDirection,
        /// Where the finger went down
        start: Point,
        /// Release velocity in pixels per second
        velocity: Point,
    },
}

/// Touch identifier for multi-touch tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct TouchId(pub u32);

impl TouchId {
    /// Create a new touch ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

/// Direction of a swipe gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwipeDirection {
    /// Finger moved toward the left edge
    Left,
    /// Finger moved toward the right edge
    Right,
    /// Finger moved toward the top edge
    Up,
    /// Finger moved toward the bottom edge
    Down,
}

impl SwipeDirection {
    /// Classify a travel vector by its dominant axis.
    ///
    /// Returns `None` for a zero vector.
    #[must_use]
    pub fn from_travel(travel: Point) -> Option<Self> {
        if travel.x == 0.0 && travel.y == 0.0 {
            return None;
        }
        if travel.x.abs() >= travel.y.abs() {
            Some(if travel.x < 0.0 { Self::Left } else { Self::Right })
        } else {
            Some(if travel.y < 0.0 { Self::Up } else { Self::Down })
        }
    }

    /// Whether the swipe runs along the x axis.
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button (wheel click)
    Middle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swipe_direction_from_travel() {
        assert_eq!(
            SwipeDirection::from_travel(Point::new(-40.0, 3.0)),
            Some(SwipeDirection::Left)
        );
        assert_eq!(
            SwipeDirection::from_travel(Point::new(40.0, -10.0)),
            Some(SwipeDirection::Right)
        );
        assert_eq!(
            SwipeDirection::from_travel(Point::new(2.0, -30.0)),
            Some(SwipeDirection::Up)
        );
        assert_eq!(
            SwipeDirection::from_travel(Point::new(0.0, 30.0)),
            Some(SwipeDirection::Down)
        );
        assert_eq!(SwipeDirection::from_travel(Point::ORIGIN), None);
    }

    #[test]
    fn test_swipe_direction_is_horizontal() {
        assert!(SwipeDirection::Left.is_horizontal());
        assert!(SwipeDirection::Right.is_horizontal());
        assert!(!SwipeDirection::Up.is_horizontal());
    }

    #[test]
    fn test_gesture_events_serialize() {
        let swipe = Event::GestureSwipe {
            direction: SwipeDirection::Left,
            start: Point::new(30.0, 15.0),
            velocity: Point::new(-500.0, 0.0),
        };
        let json = serde_json::to_string(&swipe).unwrap();
        assert!(json.contains("GestureSwipe"));
        assert_eq!(serde_json::from_str::<Event>(&json).unwrap(), swipe);
    }
}
