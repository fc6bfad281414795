//! Core types and traits for the Switcharoo toggle switch.
//!
//! This crate provides the foundation the widget is built on:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`], [`CornerRadius`]
//! - Colors: [`Color`], parsed from and serialized as hex strings
//! - Layout constraints: [`Constraints`]
//! - Input: [`Event`] and the [`GestureRecognizer`] that derives taps and
//!   swipes from raw touch/mouse input
//! - Animation: [`Easing`] curves and [`EasedValue`]
//! - Rendering: the [`Canvas`] trait, [`DrawCommand`]s and [`RecordingCanvas`]
//! - The [`Widget`] trait

pub mod animation;
pub mod canvas;
mod color;
mod constraints;
pub mod draw;
mod event;
pub mod gesture;
mod geometry;
pub mod widget;

pub use animation::{EasedValue, Easing};
pub use canvas::RecordingCanvas;
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use draw::DrawCommand;
pub use event::{Event, MouseButton, SwipeDirection, TouchId};
pub use geometry::{CornerRadius, Point, Rect, Size};
pub use gesture::{GestureConfig, GestureRecognizer};
pub use widget::{Canvas, LayoutResult, TypeId, Widget};
