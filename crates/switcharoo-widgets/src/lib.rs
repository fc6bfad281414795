//! The Switcharoo toggle switch widget.

pub mod switch;

pub use switch::{
    SwitchChanged, SwitchConfig, SwitchGeometry, Switcharoo, Transition, PREFERRED_SIZE,
    TRANSITION_DURATION,
};
