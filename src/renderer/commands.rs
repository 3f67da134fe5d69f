//! Recording renderer
//!
//! Captures draw calls instead of rasterizing them. The headless driver uses
//! it to exercise the full render path; tests use it to inspect frames.

use glam::Vec2;

use super::Renderer;
use crate::color::Color;
use crate::math::Rect;

/// One recorded primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    BeginFrame { clear: Color },
    EndFrame,
    Circle { center: Vec2, radius: f32, color: Color },
    Ring { center: Vec2, inner: f32, outer: f32, color: Color },
    Rect { rect: Rect, color: Color },
    Triangle { points: [Vec2; 3], color: Color },
    Text { text: String, pos: Vec2, size: f32, color: Color },
}

/// Draw commands of the most recent frame
#[derive(Debug, Clone, Default)]
pub struct CommandList {
    commands: Vec<DrawCommand>,
    frames: u64,
}

impl CommandList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Completed frames since creation
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn count(&self, pred: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }
}

impl Renderer for CommandList {
    /// Starting a frame drops whatever the previous one recorded
    fn begin_frame(&mut self, clear: Color) {
        self.commands.clear();
        self.commands.push(DrawCommand::BeginFrame { clear });
    }

    fn end_frame(&mut self) {
        self.commands.push(DrawCommand::EndFrame);
        self.frames += 1;
    }

    fn circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn ring(&mut self, center: Vec2, inner: f32, outer: f32, color: Color) {
        self.commands.push(DrawCommand::Ring {
            center,
            inner,
            outer,
            color,
        });
    }

    fn rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Rect { rect, color });
    }

    fn triangle(&mut self, points: [Vec2; 3], color: Color) {
        self.commands.push(DrawCommand::Triangle { points, color });
    }

    fn text(&mut self, text: &str, pos: Vec2, size: f32, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            pos,
            size,
            color,
        });
    }
}
