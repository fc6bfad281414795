//! Switcharoo: an animated toggle switch.
//!
//! A capsule track with a circular knob. Tapping the right half turns the
//! switch on, the left half off; a horizontal swipe that starts on the knob
//! flips it as well. Turning on sweeps a circular fill of the "on" color out
//! from the knob until it covers the track.
//!
//! The host drives the widget: it lays it out, feeds it recognized gestures,
//! advances it once per frame while it is animating, and paints it.
//!
//! ```
//! use switcharoo::prelude::*;
//!
//! let mut switch = Switcharoo::new().padding(4.0);
//! switch.layout(Rect::new(0.0, 0.0, 60.0, 30.0));
//!
//! let tap = Event::GestureTap { position: Point::new(50.0, 15.0) };
//! let message = switch.event(&tap).and_then(|m| m.downcast::<SwitchChanged>().ok());
//! assert_eq!(message.map(|m| m.on), Some(true));
//!
//! while switch.is_animating() {
//!     switch.update(1.0 / 60.0);
//! }
//! assert_eq!(switch.knob_offset(), 34.0);
//! ```

pub use switcharoo_core::*;
pub use switcharoo_widgets::{
    SwitchChanged, SwitchConfig, SwitchGeometry, Switcharoo, Transition, PREFERRED_SIZE,
    TRANSITION_DURATION,
};

/// YAML configuration loading.
pub mod yaml {
    pub use switcharoo_yaml::*;
}

/// Common imports.
pub mod prelude {
    pub use switcharoo_core::{
        Canvas, Color, Constraints, Event, GestureRecognizer, Point, Rect, RecordingCanvas, Size,
        SwipeDirection, Widget,
    };
    pub use switcharoo_widgets::{SwitchChanged, SwitchConfig, Switcharoo};
}
