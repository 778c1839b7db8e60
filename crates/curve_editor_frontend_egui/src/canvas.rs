//! egui-Host für den Kurven-Editor: Canvas-Platzierung, Cursor und Zeichenpuffer.

use curve_editor_engine::{CanvasHost, CanvasRect, CursorHint, DrawContext, Rgba};
use egui::epaint::CubicBezierShape;
use glam::Vec2;

/// RGBA [0, 1] → `egui::Color32`.
pub(crate) fn to_color32(color: Rgba) -> egui::Color32 {
    let [r, g, b, a] = color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Cursor-Hinweis der Engine → egui-Cursor.
pub(crate) fn to_cursor_icon(cursor: CursorHint) -> egui::CursorIcon {
    match cursor {
        CursorHint::Default => egui::CursorIcon::Default,
        CursorHint::Grab => egui::CursorIcon::Grab,
        CursorHint::Grabbing => egui::CursorIcon::Grabbing,
    }
}

/// Gepufferte Zeichenoperation eines Frames (Screen-Koordinaten).
#[derive(Debug, Clone)]
enum PaintOp {
    Shape(egui::Shape),
    /// Text braucht die Fonts des Painters, daher erst beim Flush
    Text {
        pos: egui::Pos2,
        text: String,
        font_size: f32,
        color: egui::Color32,
    },
}

/// Canvas im egui-Layout. Implementiert Host und 2D-Kontext für die Engine.
#[derive(Debug)]
pub struct EguiCanvas {
    origin: egui::Pos2,
    size: Vec2,
    window_width: f32,
    cursor: CursorHint,
    frame_requested: bool,
    ops: Vec<PaintOp>,
}

impl EguiCanvas {
    pub fn new(window_width: f32) -> Self {
        Self {
            origin: egui::Pos2::ZERO,
            size: Vec2::ZERO,
            window_width,
            cursor: CursorHint::Default,
            frame_requested: false,
            ops: Vec::new(),
        }
    }

    /// Übernimmt die aktuelle Fensterbreite. `true`, wenn sie sich geändert hat.
    pub fn set_window_width(&mut self, window_width: f32) -> bool {
        if (self.window_width - window_width).abs() < f32::EPSILON {
            return false;
        }
        self.window_width = window_width;
        true
    }

    /// Setzt die Screen-Position der linken oberen Canvas-Ecke.
    pub fn place(&mut self, origin: egui::Pos2) {
        self.origin = origin;
    }

    /// Screen-Rechteck des Canvas.
    pub fn rect(&self) -> egui::Rect {
        egui::Rect::from_min_size(self.origin, egui::vec2(self.size.x, self.size.y))
    }

    pub fn cursor_icon(&self) -> egui::CursorIcon {
        to_cursor_icon(self.cursor)
    }

    /// Holt die Frame-Anforderung der Engine ab.
    pub fn take_frame_request(&mut self) -> bool {
        std::mem::take(&mut self.frame_requested)
    }

    pub fn has_frame_request(&self) -> bool {
        self.frame_requested
    }

    /// Gibt die gepufferten Operationen an den Painter weiter und leert den Puffer.
    pub fn paint(&mut self, painter: &egui::Painter) {
        for op in self.ops.drain(..) {
            match op {
                PaintOp::Shape(shape) => {
                    painter.add(shape);
                }
                PaintOp::Text {
                    pos,
                    text,
                    font_size,
                    color,
                } => {
                    painter.text(
                        pos,
                        egui::Align2::CENTER_CENTER,
                        text,
                        egui::FontId::proportional(font_size),
                        color,
                    );
                }
            }
        }
    }

    fn screen_pos(&self, canvas_pos: Vec2) -> egui::Pos2 {
        egui::pos2(self.origin.x + canvas_pos.x, self.origin.y + canvas_pos.y)
    }
}

impl CanvasHost for EguiCanvas {
    fn bounding_client_rect(&self) -> CanvasRect {
        CanvasRect::new(self.origin.x, self.origin.y, self.size.x, self.size.y)
    }

    fn canvas_size(&self) -> Vec2 {
        self.size
    }

    fn set_canvas_size(&mut self, size: Vec2) {
        self.size = size;
    }

    fn window_inner_width(&self) -> f32 {
        self.window_width
    }

    fn set_cursor(&mut self, cursor: CursorHint) {
        self.cursor = cursor;
    }

    fn request_animation_frame(&mut self) {
        self.frame_requested = true;
    }

    fn context_2d(&mut self) -> Option<&mut dyn DrawContext> {
        Some(self as &mut dyn DrawContext)
    }
}

impl DrawContext for EguiCanvas {
    fn clear_rect(&mut self, _origin: Vec2, _size: Vec2) {
        // egui zeichnet jeden Frame komplett neu
        self.ops.clear();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        let shape = egui::Shape::line_segment(
            [self.screen_pos(from), self.screen_pos(to)],
            egui::Stroke::new(width, to_color32(color)),
        );
        self.ops.push(PaintOp::Shape(shape));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        let shape = egui::Shape::circle_filled(self.screen_pos(center), radius, to_color32(color));
        self.ops.push(PaintOp::Shape(shape));
    }

    fn fill_text(&mut self, text: &str, center: Vec2, font_size: f32, color: Rgba) {
        self.ops.push(PaintOp::Text {
            pos: self.screen_pos(center),
            text: text.to_string(),
            font_size,
            color: to_color32(color),
        });
    }

    fn stroke_cubic_bezier(&mut self, points: [Vec2; 4], width: f32, color: Rgba) {
        let shape = CubicBezierShape::from_points_stroke(
            points.map(|p| self.screen_pos(p)),
            false,
            egui::Color32::TRANSPARENT,
            egui::Stroke::new(width, to_color32(color)),
        );
        self.ops.push(PaintOp::Shape(shape.into()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curve_editor_engine::{CurveEditor, EditorEvent};

    #[test]
    fn test_color_conversion() {
        assert_eq!(to_color32([1.0, 1.0, 1.0, 1.0]), egui::Color32::WHITE);
        assert_eq!(
            to_color32([85.0 / 255.0, 85.0 / 255.0, 85.0 / 255.0, 1.0]),
            egui::Color32::from_rgb(0x55, 0x55, 0x55)
        );
    }

    #[test]
    fn test_editor_frame_fills_paint_buffer() {
        let mut editor = CurveEditor::new(EguiCanvas::new(800.0), None).unwrap();
        let canvas = editor.host_mut();

        assert_eq!(canvas.rect().size(), egui::vec2(400.0, 400.0));
        assert!(canvas.take_frame_request());
        assert!(!canvas.take_frame_request());
        // Diagonale + 2×(Kreis, Label, Koordinaten) + Kurve
        assert_eq!(canvas.ops.len(), 8);
    }

    #[test]
    fn test_placement_shifts_hit_test() {
        let mut editor = CurveEditor::new(EguiCanvas::new(800.0), None).unwrap();
        editor.host_mut().place(egui::pos2(20.0, 50.0));

        editor.handle_event(EditorEvent::PointerMove {
            client: Vec2::new(120.0, 150.0),
        });

        assert_eq!(editor.host().cursor_icon(), egui::CursorIcon::Grab);
    }

    #[test]
    fn test_window_width_change_detection() {
        let mut canvas = EguiCanvas::new(800.0);
        assert!(!canvas.set_window_width(800.0));
        assert!(canvas.set_window_width(300.0));
        assert_eq!(canvas.window_inner_width(), 300.0);
    }
}
