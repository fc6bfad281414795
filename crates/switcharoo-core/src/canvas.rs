//! A canvas that records what a widget paints.

use crate::draw::DrawCommand;
use crate::widget::Canvas;
use crate::{Color, CornerRadius, Point, Rect};

/// Records paint calls as [`DrawCommand`]s instead of rasterizing them.
///
/// A draw issued while clips are pushed is stored wrapped in a single
/// [`DrawCommand::Clip`] for the innermost clip. Hosts hand the recorded list
/// to their compositor; tests assert on it directly.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    clips: Vec<(Rect, CornerRadius)>,
}

impl RecordingCanvas {
    /// Empty canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything painted so far, in paint order.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Hand the recorded frame to the caller and start a fresh one.
    pub fn finish_frame(&mut self) -> Vec<DrawCommand> {
        self.clips.clear();
        std::mem::take(&mut self.commands)
    }

    /// Number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing has been painted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Innermost active clip and its corner radius.
    #[must_use]
    pub fn active_clip(&self) -> Option<(Rect, CornerRadius)> {
        self.clips.last().copied()
    }

    /// Number of clips pushed and not yet popped. Zero after a balanced paint.
    #[must_use]
    pub fn clip_depth(&self) -> usize {
        self.clips.len()
    }

    /// Whether anything recorded so far paints `point`.
    #[must_use]
    pub fn covers(&self, point: &Point) -> bool {
        self.commands.iter().any(|command| command.covers(point))
    }

    fn push_command(&mut self, command: DrawCommand) {
        let command = match self.active_clip() {
            Some((bounds, radius)) => command.with_clip(bounds, radius),
            None => command,
        };
        self.commands.push(command);
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        self.push_command(DrawCommand::rounded_rect(rect, radius, color));
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.push_command(DrawCommand::filled_circle(center, radius, color));
    }

    fn push_clip(&mut self, rect: Rect, radius: f32) {
        self.clips.push((rect, CornerRadius::uniform(radius)));
    }

    fn pop_clip(&mut self) {
        self.clips.pop();
    }
}
