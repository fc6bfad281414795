//! Draw commands produced by painting.
//!
//! All rendering reduces to these primitives; a host compositor turns them
//! into pixels.

use crate::{Color, CornerRadius, Point, Rect};
use serde::{Deserialize, Serialize};

/// Drawing primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Filled, possibly rounded, rectangle
    Rect {
        /// Rectangle bounds
        bounds: Rect,
        /// Corner radius
        radius: CornerRadius,
        /// Fill color
        fill: Color,
    },

    /// Filled circle
    Circle {
        /// Center point
        center: Point,
        /// Radius
        radius: f32,
        /// Fill color
        fill: Color,
    },

    /// Clip a command to a rounded rectangle
    Clip {
        /// Clip bounds
        bounds: Rect,
        /// Corner radius of the clip shape
        radius: CornerRadius,
        /// Child command
        child: Box<DrawCommand>,
    },
}

impl DrawCommand {
    /// Create a rounded rectangle.
    #[must_use]
    pub fn rounded_rect(bounds: Rect, radius: f32, color: Color) -> Self {
        Self::Rect {
            bounds,
            radius: CornerRadius::uniform(radius),
            fill: color,
        }
    }

    /// Create a filled circle.
    #[must_use]
    pub fn filled_circle(center: Point, radius: f32, color: Color) -> Self {
        Self::Circle {
            center,
            radius,
            fill: color,
        }
    }

    /// Wrap in a rounded clip.
    #[must_use]
    pub fn with_clip(self, bounds: Rect, radius: CornerRadius) -> Self {
        Self::Clip {
            bounds,
            radius,
            child: Box::new(self),
        }
    }

    /// The command underneath any clip wrappers.
    #[must_use]
    pub fn unclipped(&self) -> &Self {
        match self {
            Self::Clip { child, .. } => child.unclipped(),
            other => other,
        }
    }

    /// Fill color of the underlying shape.
    #[must_use]
    pub fn fill_color(&self) -> Color {
        match self {
            Self::Rect { fill, .. } | Self::Circle { fill, .. } => *fill,
            Self::Clip { child, .. } => child.fill_color(),
        }
    }

    /// Whether this command paints `point`, honoring every clip around it.
    #[must_use]
    pub fn covers(&self, point: &Point) -> bool {
        match self {
            Self::Rect { bounds, radius, .. } => bounds.contains_point_rounded(point, radius),
            Self::Circle { center, radius, .. } => center.distance(point) <= *radius,
            Self::Clip {
                bounds,
                radius,
                child,
            } => bounds.contains_point_rounded(point, radius) && child.covers(point),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRACK: Rect = Rect::new(0.0, 0.0, 60.0, 30.0);

    #[test]
    fn test_rounded_rect() {
        let cmd = DrawCommand::rounded_rect(TRACK, 15.0, Color::GRAY);
        match cmd {
            DrawCommand::Rect { radius, fill, .. } => {
                assert_eq!(radius, CornerRadius::uniform(15.0));
                assert_eq!(fill, Color::GRAY);
            }
            _ => panic!("Expected Rect command"),
        }
    }

    #[test]
    fn test_clip_unwraps() {
        let circle = DrawCommand::filled_circle(Point::new(15.0, 15.0), 11.0, Color::WHITE);
        let clipped = circle
            .clone()
            .with_clip(TRACK, CornerRadius::capsule(30.0))
            .with_clip(Rect::new(0.0, 0.0, 100.0, 100.0), CornerRadius::ZERO);

        assert_eq!(clipped.unclipped(), &circle);
        assert_eq!(clipped.fill_color(), Color::WHITE);
    }

    #[test]
    fn test_circle_covers() {
        let circle = DrawCommand::filled_circle(Point::new(15.0, 15.0), 11.0, Color::WHITE);
        assert!(circle.covers(&Point::new(26.0, 15.0)));
        assert!(!circle.covers(&Point::new(27.0, 15.0)));
    }

    #[test]
    fn test_rounded_clip_hides_corners() {
        let fill = DrawCommand::filled_circle(Point::new(45.0, 15.0), 120.0, Color::GREEN);
        assert!(fill.covers(&Point::new(1.0, 1.0)));

        let clipped = fill.with_clip(TRACK, CornerRadius::capsule(30.0));
        assert!(!clipped.covers(&Point::new(1.0, 1.0)));
        assert!(!clipped.covers(&Point::new(59.0, 29.0)));
        assert!(clipped.covers(&Point::new(30.0, 1.0)));
        assert!(clipped.covers(&Point::new(15.0, 15.0)));
        assert!(!clipped.covers(&Point::new(61.0, 15.0)));
    }

    #[test]
    fn test_draw_command_serializes() {
        let cmd = DrawCommand::filled_circle(Point::new(1.0, 2.0), 3.0, Color::GREEN)
            .with_clip(TRACK, CornerRadius::uniform(15.0));
        let json = serde_json::to_string(&cmd).unwrap();
        let back: DrawCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cmd);
    }
}
