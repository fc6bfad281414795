//! Gesture recognition from touch and mouse events.
//!
//! [`GestureRecognizer`] turns raw single-finger input into the two gestures a
//! switch reacts to: taps and swipes. The left mouse button is treated as one
//! more finger so desktop hosts get the same gestures as touch screens.
//!
//! [`GestureRecognizer::process_at`] takes the current [`Instant`] explicitly;
//! [`GestureRecognizer::process`] reads the system clock.

use crate::event::{Event, MouseButton, SwipeDirection, TouchId};
use crate::geometry::Point;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Touch id reserved for the left mouse button.
pub const MOUSE_TOUCH_ID: TouchId = TouchId(u32::MAX);

/// Thresholds for gesture recognition.
#[derive(Debug, Clone)]
pub struct GestureConfig {
    /// Maximum time for a tap (in milliseconds).
    pub tap_timeout_ms: u64,
    /// Maximum movement for a tap to still be valid.
    pub tap_slop: f32,
    /// Minimum travel along the dominant axis for a swipe (in pixels).
    pub swipe_min_distance: f32,
    /// Minimum release speed for a swipe (pixels per second).
    pub swipe_min_velocity: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            tap_timeout_ms: 300,
            tap_slop: 10.0,
            swipe_min_distance: 20.0,
            swipe_min_velocity: 200.0,
        }
    }
}

/// A finger (or the mouse) that is currently down.
#[derive(Debug, Clone)]
pub struct TouchPoint {
    /// Touch ID.
    pub id: TouchId,
    /// Where it went down.
    pub start_position: Point,
    /// Where it is now.
    pub current_position: Point,
    /// When it went down.
    pub start_time: Instant,
}

impl TouchPoint {
    /// Start tracking a touch.
    pub const fn new(id: TouchId, position: Point, now: Instant) -> Self {
        Self {
            id,
            start_position: position,
            current_position: position,
            start_time: now,
        }
    }

    /// Record a new position.
    pub fn update(&mut self, position: Point) {
        self.current_position = position;
    }

    /// Travel vector from the start position.
    pub fn travel(&self) -> Point {
        self.current_position - self.start_position
    }

    /// Straight-line distance from the start position.
    pub fn total_distance(&self) -> f32 {
        self.start_position.distance(&self.current_position)
    }

    /// Time since the touch started.
    pub fn duration_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.start_time)
    }
}

/// Single-finger tap and swipe recognizer.
///
/// While more than one finger is down no gesture is emitted; the recognizer
/// resumes once every finger has lifted.
#[derive(Debug)]
pub struct GestureRecognizer {
    config: GestureConfig,
    touches: HashMap<TouchId, TouchPoint>,
    multi_touch: bool,
}

impl GestureRecognizer {
    /// Create a recognizer with default thresholds.
    pub fn new() -> Self {
        Self::with_config(GestureConfig::default())
    }

    /// Create a recognizer with custom thresholds.
    pub fn with_config(config: GestureConfig) -> Self {
        Self {
            config,
            touches: HashMap::new(),
            multi_touch: false,
        }
    }

    /// Current thresholds.
    pub const fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Number of fingers currently down.
    pub fn touch_count(&self) -> usize {
        self.touches.len()
    }

    /// Look up an active touch.
    pub fn touch(&self, id: TouchId) -> Option<&TouchPoint> {
        self.touches.get(&id)
    }

    /// Process an event against the system clock.
    pub fn process(&mut self, event: &Event) -> Option<Event> {
        self.process_at(event, Instant::now())
    }

    /// Process a raw event and return the gesture it completes, if any.
    pub fn process_at(&mut self, event: &Event, now: Instant) -> Option<Event> {
        match event {
            Event::TouchStart { id, position } => self.on_down(*id, *position, now),
            Event::TouchMove { id, position } => self.on_move(*id, *position),
            Event::TouchEnd { id, position } => self.on_up(*id, *position, now),
            Event::TouchCancel { id } => self.on_cancel(*id),
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } => self.on_down(MOUSE_TOUCH_ID, *position, now),
            Event::MouseMove { position } => self.on_move(MOUSE_TOUCH_ID, *position),
            Event::MouseUp {
                position,
                button: MouseButton::Left,
            } => self.on_up(MOUSE_TOUCH_ID, *position, now),
            _ => None,
        }
    }

    /// Drop all tracked touches.
    pub fn reset(&mut self) {
        self.touches.clear();
        self.multi_touch = false;
    }

    fn on_down(&mut self, id: TouchId, position: Point, now: Instant) -> Option<Event> {
        self.touches.insert(id, TouchPoint::new(id, position, now));
        if self.touches.len() > 1 {
            self.multi_touch = true;
        }
        None
    }

    fn on_move(&mut self, id: TouchId, position: Point) -> Option<Event> {
        if let Some(touch) = self.touches.get_mut(&id) {
            touch.update(position);
        }
        None
    }

    fn on_up(&mut self, id: TouchId, position: Point, now: Instant) -> Option<Event> {
        let mut touch = self.touches.remove(&id)?;
        touch.update(position);

        if !self.touches.is_empty() {
            return None;
        }
        if std::mem::take(&mut self.multi_touch) {
            return None;
        }

        let duration = touch.duration_at(now);
        if duration.as_millis() < u128::from(self.config.tap_timeout_ms)
            && touch.total_distance() < self.config.tap_slop
        {
            return Some(Event::GestureTap {
                position: touch.start_position,
            });
        }

        self.swipe(&touch, duration)
    }

    fn on_cancel(&mut self, id: TouchId) -> Option<Event> {
        self.touches.remove(&id);
        if self.touches.is_empty() {
            self.multi_touch = false;
        }
        None
    }

    fn swipe(&self, touch: &TouchPoint, duration: Duration) -> Option<Event> {
        let travel = touch.travel();
        let direction = SwipeDirection::from_travel(travel)?;
        let along = if direction.is_horizontal() {
            travel.x.abs()
        } else {
            travel.y.abs()
        };
        if along < self.config.swipe_min_distance {
            return None;
        }

        // Zero elapsed time counts as infinitely fast.
        let secs = duration.as_secs_f32();
        let velocity = if secs > 0.0 {
            Point::new(travel.x / secs, travel.y / secs)
        } else {
            Point::new(travel.x * 1000.0, travel.y * 1000.0)
        };
        if Point::ORIGIN.distance(&velocity) < self.config.swipe_min_velocity {
            return None;
        }

        Some(Event::GestureSwipe {
            direction,
            start: touch.start_position,
            velocity,
        })
    }
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new()
    }
}
