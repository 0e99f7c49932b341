// Drawing target for the particle field. The browser uses a canvas backed
// implementation (see renderer.rs); RecordingSurface keeps the calls in
// memory so frames can be inspected without a canvas.

use crate::color::Color;

pub trait Surface {
    fn resize(&mut self, width: u32, height: u32);
    fn clear(&mut self, width: f64, height: f64);
    fn fill_circle(&mut self, center: [f64; 2], radius: f64, color: &Color);
    fn stroke_line(&mut self, from: [f64; 2], to: [f64; 2], width: f64, color: &Color);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Resize { width: u32, height: u32 },
    Clear { width: f64, height: f64 },
    Circle { center: [f64; 2], radius: f64, color: Color },
    Line { from: [f64; 2], to: [f64; 2], width: f64, color: Color },
}

#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
    }

    // Number of draw calls that actually paint something
    pub fn draw_count(&self) -> usize {
        self.circles().count() + self.lines().count()
    }
}

impl Surface for RecordingSurface {
    fn resize(&mut self, width: u32, height: u32) {
        self.commands.push(DrawCommand::Resize { width, height });
    }

    fn clear(&mut self, width: f64, height: f64) {
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn fill_circle(&mut self, center: [f64; 2], radius: f64, color: &Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color: *color,
        });
    }

    fn stroke_line(&mut self, from: [f64; 2], to: [f64; 2], width: f64, color: &Color) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            width,
            color: *color,
        });
    }
}
