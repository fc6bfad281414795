//! Animated toggle switch.
//!
//! A capsule-shaped `track` holds a circular `knob`. Behind the knob sits a
//! circular `fill` in the "on" color: turning the switch on grows the fill
//! until it covers the whole track, turning it off shrinks it back under the
//! knob. The track clips both children.
//!
//! `is_on` is the single source of truth. At rest the knob offset and fill
//! radius are derived from it and the current geometry; while a transition is
//! running they interpolate linearly toward those rest values.

use serde::{Deserialize, Serialize};
use std::any::Any;
use switcharoo_core::{
    Canvas, Color, Constraints, EasedValue, Easing, Event, LayoutResult, Point, Rect, Size,
    SwipeDirection, TypeId, Widget,
};
use tracing::{debug, trace};

/// Canonical transition duration in seconds.
pub const TRANSITION_DURATION: f64 = 0.2;

/// Size requested from the parent when it leaves the choice open.
pub const PREFERRED_SIZE: Size = Size::new(60.0, 30.0);

/// Message emitted when the switch state flips because of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchChanged {
    /// The new state
    pub on: bool,
}

/// Design-time options for a switch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwitchConfig {
    /// Initial state
    pub is_on: bool,
    /// Inset between the track edge and the knob
    pub padding: f32,
    /// Knob color
    pub dot_color: Color,
    /// Color revealed by the fill when on
    pub on_color: Color,
    /// Track color when off
    pub off_color: Color,
}

impl Default for SwitchConfig {
    fn default() -> Self {
        Self {
            is_on: false,
            padding: 8.0,
            dot_color: Color::WHITE,
            on_color: Color::GREEN,
            off_color: Color::GRAY,
        }
    }
}

/// Geometry derived from the widget bounds and padding.
///
/// Offsets are relative to the left edge of the bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwitchGeometry {
    /// Bounds the switch was laid out in
    pub bounds: Rect,
    /// Padding used for the computation
    pub padding: f32,
    /// Height inside the padding; also the knob diameter
    pub track_height: f32,
    /// Knob offset when on
    pub on_offset_x: f32,
    /// Knob offset when off
    pub off_offset_x: f32,
}

impl SwitchGeometry {
    /// Compute geometry for the given bounds.
    #[must_use]
    pub fn compute(bounds: Rect, padding: f32) -> Self {
        let track_height = 2.0f32.mul_add(-padding, bounds.height);
        Self {
            bounds,
            padding,
            track_height,
            on_offset_x: bounds.width - (padding + track_height),
            off_offset_x: padding,
        }
    }

    /// Knob diameter.
    #[must_use]
    pub const fn knob_diameter(&self) -> f32 {
        self.track_height
    }

    /// Knob radius, never negative.
    #[must_use]
    pub fn knob_radius(&self) -> f32 {
        (self.track_height / 2.0).max(0.0)
    }

    /// Corner radius that makes the track a capsule.
    #[must_use]
    pub fn track_corner_radius(&self) -> f32 {
        self.bounds.height / 2.0
    }

    /// Rest offset of the knob for a state.
    #[must_use]
    pub const fn knob_offset(&self, on: bool) -> f32 {
        if on {
            self.on_offset_x
        } else {
            self.off_offset_x
        }
    }

    /// Rest radius of the fill for a state.
    ///
    /// On, the fill is large enough to cover the track from any knob
    /// position. Off, it hides just inside the knob.
    #[must_use]
    pub fn fill_radius(&self, on: bool) -> f32 {
        if on {
            self.bounds.width * 2.0
        } else {
            (self.track_height / 2.0 - 1.0).max(0.0)
        }
    }

    /// Knob center for a given offset, in the same space as `bounds`.
    #[must_use]
    pub fn knob_center(&self, offset_x: f32) -> Point {
        Point::new(
            self.bounds.x + offset_x + self.track_height / 2.0,
            self.bounds.center().y,
        )
    }

    /// Knob frame for a given offset.
    #[must_use]
    pub fn knob_rect(&self, offset_x: f32) -> Rect {
        Rect::around_circle(self.knob_center(offset_x), self.knob_radius())
    }

    /// Whether a position falls on the right half of the switch.
    #[must_use]
    pub fn is_right_half(&self, position: Point) -> bool {
        self.bounds.to_local(position).x >= self.bounds.width / 2.0
    }
}

/// In-flight interpolation of knob offset and fill radius.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    knob_x: EasedValue,
    fill_radius: EasedValue,
}

impl Transition {
    fn at_rest(knob_x: f32, fill_radius: f32) -> Self {
        Self {
            knob_x: EasedValue::settled(f64::from(knob_x)),
            fill_radius: EasedValue::settled(f64::from(fill_radius)),
        }
    }

    /// Restart toward new targets from the currently displayed values.
    fn retarget(&mut self, knob_x: f32, fill_radius: f32, duration: f64, easing: Easing) {
        self.knob_x.easing = easing;
        self.fill_radius.easing = easing;
        self.knob_x.retarget(f64::from(knob_x), duration);
        self.fill_radius.retarget(f64::from(fill_radius), duration);
    }

    /// Move the end points without restarting the clock.
    fn redirect(&mut self, knob_x: f32, fill_radius: f32) {
        self.knob_x.to = f64::from(knob_x);
        self.fill_radius.to = f64::from(fill_radius);
    }

    fn settle(&mut self, knob_x: f32, fill_radius: f32) {
        self.knob_x.settle(f64::from(knob_x));
        self.fill_radius.settle(f64::from(fill_radius));
    }

    fn update(&mut self, dt: f64) {
        self.knob_x.update(dt);
        self.fill_radius.update(dt);
    }

    /// Whether both values have reached their targets.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.knob_x.is_complete() && self.fill_radius.is_complete()
    }

    /// Displayed knob offset.
    #[must_use]
    pub fn knob_offset(&self) -> f32 {
        self.knob_x.value() as f32
    }

    /// Displayed fill radius; the fill's corner radius tracks it exactly.
    #[must_use]
    pub fn fill_radius(&self) -> f32 {
        self.fill_radius.value() as f32
    }

    /// Fraction of the transition that has elapsed.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.knob_x.progress()
    }
}

/// Toggle switch that flips on tap or horizontal swipe.
#[derive(Debug, Clone)]
pub struct Switcharoo {
    config: SwitchConfig,
    duration: f64,
    easing: Easing,
    preferred_size: Size,
    test_id_value: Option<String>,
    geometry: Option<SwitchGeometry>,
    transition: Transition,
}

impl Default for Switcharoo {
    fn default() -> Self {
        Self::with_config(SwitchConfig::default())
    }
}

impl Switcharoo {
    /// Create a switch with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a switch from design-time options.
    #[must_use]
    pub fn with_config(config: SwitchConfig) -> Self {
        Self {
            config,
            duration: TRANSITION_DURATION,
            easing: Easing::Linear,
            preferred_size: PREFERRED_SIZE,
            test_id_value: None,
            geometry: None,
            transition: Transition::at_rest(0.0, 0.0),
        }
    }

    /// Set the initial state.
    #[must_use]
    pub const fn on(mut self, on: bool) -> Self {
        self.config.is_on = on;
        self
    }

    /// Set the padding between track edge and knob.
    #[must_use]
    pub fn padding(mut self, padding: f32) -> Self {
        self.config.padding = padding.max(0.0);
        self
    }

    /// Set the knob color.
    #[must_use]
    pub const fn dot_color(mut self, color: Color) -> Self {
        self.config.dot_color = color;
        self
    }

    /// Set the color revealed when on.
    #[must_use]
    pub const fn on_color(mut self, color: Color) -> Self {
        self.config.on_color = color;
        self
    }

    /// Set the track color when off.
    #[must_use]
    pub const fn off_color(mut self, color: Color) -> Self {
        self.config.off_color = color;
        self
    }

    /// Override the transition duration (seconds).
    #[must_use]
    pub fn transition_duration(mut self, seconds: f64) -> Self {
        self.duration = seconds.max(0.0);
        self
    }

    /// Override the transition easing curve.
    #[must_use]
    pub const fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Set the size requested from loose constraints.
    #[must_use]
    pub const fn preferred_size(mut self, size: Size) -> Self {
        self.preferred_size = size;
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Current state.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.config.is_on
    }

    /// Current options, including the live state.
    #[must_use]
    pub const fn config(&self) -> &SwitchConfig {
        &self.config
    }

    /// Geometry from the last layout, if layout has run.
    #[must_use]
    pub const fn geometry(&self) -> Option<&SwitchGeometry> {
        self.geometry.as_ref()
    }

    /// Transition state (at rest when no animation is running).
    #[must_use]
    pub const fn transition(&self) -> &Transition {
        &self.transition
    }

    /// Knob offset currently on screen.
    #[must_use]
    pub fn knob_offset(&self) -> f32 {
        self.transition.knob_offset()
    }

    /// Fill radius currently on screen.
    #[must_use]
    pub fn fill_radius(&self) -> f32 {
        self.transition.fill_radius()
    }

    /// Handle a tap at `position` (same coordinate space as the bounds).
    ///
    /// The right half targets on, the left half off. The transition always
    /// re-runs, even when the state does not change. Taps before the first
    /// layout are ignored because there is no half to compare against.
    ///
    /// Returns whether the state flipped.
    pub fn handle_tap(&mut self, position: Point) -> bool {
        let Some(geometry) = self.geometry else {
            trace!("tap before layout ignored");
            return false;
        };
        self.change_state(geometry.is_right_half(position), "tap")
    }

    /// Handle a swipe.
    ///
    /// Left while on turns off, right while off turns on. Anything else is a
    /// no-op and does not animate.
    ///
    /// Returns whether the state flipped.
    pub fn handle_swipe(&mut self, direction: SwipeDirection) -> bool {
        let target = match (self.is_on(), direction) {
            (true, SwipeDirection::Left) => false,
            (false, SwipeDirection::Right) => true,
            _ => return false,
        };
        self.change_state(target, "swipe")
    }

    /// Set the state programmatically and animate to it.
    pub fn set_state(&mut self, on: bool) {
        self.change_state(on, "set_state");
    }

    /// Flip the state and animate to it.
    pub fn toggle(&mut self) {
        self.change_state(!self.is_on(), "toggle");
    }

    /// Animate from what is on screen toward the rest values of `is_on`.
    ///
    /// Before the first layout there is nothing to animate; layout snaps the
    /// visuals to the current state instead.
    pub fn run_transition(&mut self) {
        let Some(geometry) = self.geometry else {
            return;
        };
        let on = self.is_on();
        self.transition.retarget(
            geometry.knob_offset(on),
            geometry.fill_radius(on),
            self.duration,
            self.easing,
        );
        trace!(
            knob_to = geometry.knob_offset(on),
            fill_to = geometry.fill_radius(on),
            "switch transition started"
        );
    }

    fn change_state(&mut self, on: bool, cause: &'static str) -> bool {
        let was = self.is_on();
        self.config.is_on = on;
        if was != on {
            debug!(from = was, to = on, cause, "switch state changed");
        }
        self.run_transition();
        was != on
    }

    fn knob_hit(&self, geometry: &SwitchGeometry, position: &Point) -> bool {
        geometry
            .knob_rect(self.knob_offset())
            .contains_point(position)
    }

    fn changed_message(&self, flipped: bool) -> Option<Box<dyn Any + Send>> {
        flipped.then(|| Box::new(SwitchChanged { on: self.is_on() }) as Box<dyn Any + Send>)
    }
}

impl Widget for Switcharoo {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(self.preferred_size)
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        let geometry = SwitchGeometry::compute(bounds, self.config.padding);
        if self.geometry != Some(geometry) {
            trace!(
                track_height = geometry.track_height,
                on_offset_x = geometry.on_offset_x,
                off_offset_x = geometry.off_offset_x,
                "switch geometry recomputed"
            );
            let on = self.is_on();
            if self.transition.is_complete() {
                self.transition
                    .settle(geometry.knob_offset(on), geometry.fill_radius(on));
            } else {
                self.transition
                    .redirect(geometry.knob_offset(on), geometry.fill_radius(on));
            }
            self.geometry = Some(geometry);
        }
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let Some(geometry) = self.geometry else {
            return;
        };
        let track = geometry.bounds;
        let knob_center = geometry.knob_center(self.knob_offset());

        canvas.push_clip(track, geometry.track_corner_radius());
        canvas.fill_rounded_rect(track, geometry.track_corner_radius(), self.config.off_color);
        canvas.fill_circle(knob_center, self.fill_radius().max(0.0), self.config.on_color);
        canvas.fill_circle(knob_center, geometry.knob_radius(), self.config.dot_color);
        canvas.pop_clip();
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        let geometry = self.geometry?;

        match event {
            Event::GestureTap { position, .. } if geometry.bounds.contains_point(position) => {
                let flipped = self.handle_tap(*position);
                self.changed_message(flipped)
            }
            Event::GestureSwipe {
                direction, start, ..
            } if self.knob_hit(&geometry, start) => {
                let flipped = self.handle_swipe(*direction);
                self.changed_message(flipped)
            }
            _ => None,
        }
    }

    fn update(&mut self, dt: f64) {
        if self.transition.is_complete() {
            return;
        }
        self.transition.update(dt);
        if self.transition.is_complete() {
            trace!(on = self.is_on(), "switch transition finished");
        }
    }

    fn is_animating(&self) -> bool {
        !self.transition.is_complete()
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.geometry.map(|g| g.bounds).unwrap_or_default()
    }
}
