//! Aufzeichnender Zeichenkontext für Tests und Benchmarks.

use super::{DrawContext, Rgba};
use glam::Vec2;

/// Ein aufgezeichneter Zeichenbefehl.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    ClearRect {
        origin: Vec2,
        size: Vec2,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Rgba,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    Text {
        text: String,
        center: Vec2,
        font_size: f32,
        color: Rgba,
    },
    CubicBezier {
        points: [Vec2; 4],
        width: f32,
        color: Rgba,
    },
}

/// Sammelt Zeichenbefehle in Aufruf-Reihenfolge.
///
/// Mit [`RecordingContext::last_frame_only`] verwirft jedes `clear_rect` die
/// Befehle des Vorgänger-Frames, der Speicher bleibt bei Dauerbetrieb konstant.
#[derive(Debug, Clone, Default)]
pub struct RecordingContext {
    commands: Vec<DrawCommand>,
    frames: usize,
    last_frame_only: bool,
}

impl RecordingContext {
    /// Zeichnet alle Befehle auf, bis sie mit [`take`](Self::take) abgeholt werden.
    pub fn new() -> Self {
        Self::default()
    }

    /// Behält nur die Befehle des zuletzt begonnenen Frames.
    pub fn last_frame_only() -> Self {
        Self {
            last_frame_only: true,
            ..Self::default()
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Entnimmt alle bisher aufgezeichneten Befehle.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Anzahl begonnener Frames (`clear_rect`-Aufrufe) seit Erstellung.
    pub fn frame_count(&self) -> usize {
        self.frames
    }
}

impl DrawContext for RecordingContext {
    fn clear_rect(&mut self, origin: Vec2, size: Vec2) {
        if self.last_frame_only {
            self.commands.clear();
        }
        self.frames += 1;
        self.commands.push(DrawCommand::ClearRect { origin, size });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            width,
            color,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn fill_text(&mut self, text: &str, center: Vec2, font_size: f32, color: Rgba) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            center,
            font_size,
            color,
        });
    }

    fn stroke_cubic_bezier(&mut self, points: [Vec2; 4], width: f32, color: Rgba) {
        self.commands.push(DrawCommand::CubicBezier {
            points,
            width,
            color,
        });
    }
}
