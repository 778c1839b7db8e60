//! Frame-Rendering des Kurven-Editors.
//!
//! Der [`Renderer`] beschreibt einen Frame über die Primitive von [`DrawContext`].
//! Backends: egui-Painter im Frontend, [`RecordingContext`] für Tests und Benches.

mod recording;

pub use recording::{DrawCommand, RecordingContext};

use crate::core::geometry::normalized_to_pixel;
use crate::core::{ControlPoint, CurveCoordinates};
use crate::shared::EditorOptions;
use glam::Vec2;

/// Farbe als RGBA mit Komponenten in [0, 1].
pub type Rgba = [f32; 4];

/// 2D-Zeichenkontext im Stil eines Canvas-2D-Kontexts.
///
/// Koordinaten sind Canvas-Pixel (Ursprung oben links, y nach unten).
pub trait DrawContext {
    /// Löscht den Bereich `origin .. origin + size`.
    fn clear_rect(&mut self, origin: Vec2, size: Vec2);
    /// Zeichnet eine gerade Linie.
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);
    /// Zeichnet eine gefüllte Kreisscheibe.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    /// Zeichnet Text, horizontal und vertikal um `center` zentriert.
    fn fill_text(&mut self, text: &str, center: Vec2, font_size: f32, color: Rgba);
    /// Zeichnet eine kubische Bézier-Kurve [Start, CP1, CP2, Ende].
    fn stroke_cubic_bezier(&mut self, points: [Vec2; 4], width: f32, color: Rgba);
}

/// Zeichenparameter eines Frames (aus den Editor-Optionen abgeleitet).
#[derive(Debug, Clone, PartialEq)]
pub struct RenderStyle {
    pub point_radius: f32,
    pub point_fill_color: Rgba,
    pub label_color: Rgba,
    pub label_font_size: f32,
    pub coordinate_color: Rgba,
    pub coordinate_font_size: f32,
    pub diagonal_color: Rgba,
    pub diagonal_width: f32,
    pub curve_color: Rgba,
    pub curve_width: f32,
}

impl RenderStyle {
    pub fn from_options(options: &EditorOptions) -> Self {
        Self {
            point_radius: options.point_radius_px,
            point_fill_color: options.point_fill_color,
            label_color: options.point_label_color,
            label_font_size: options.point_label_font_px,
            coordinate_color: options.coordinate_text_color,
            coordinate_font_size: options.coordinate_font_px,
            diagonal_color: options.diagonal_color,
            diagonal_width: options.diagonal_width_px,
            curve_color: options.curve_color,
            curve_width: options.curve_width_px,
        }
    }
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self::from_options(&EditorOptions::default())
    }
}

/// Zeichnet Diagonale, beide Steuerpunkte und die Kurve.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    style: RenderStyle,
}

impl Renderer {
    pub fn new(style: RenderStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    /// Zeichnet einen vollständigen Frame für die Canvas-Größe `size`.
    pub fn draw_frame(&self, ctx: &mut dyn DrawContext, size: Vec2, curve: &CurveCoordinates) {
        ctx.clear_rect(Vec2::ZERO, size);
        self.draw_diagonal(ctx, size);
        for point in ControlPoint::ALL {
            self.draw_point(ctx, size, curve, point);
        }
        self.draw_curve(ctx, size, curve);
    }

    /// Referenz-Diagonale von unten links nach oben rechts.
    fn draw_diagonal(&self, ctx: &mut dyn DrawContext, size: Vec2) {
        ctx.stroke_line(
            Vec2::new(0.0, size.y),
            Vec2::new(size.x, 0.0),
            self.style.diagonal_width,
            self.style.diagonal_color,
        );
    }

    fn draw_point(
        &self,
        ctx: &mut dyn DrawContext,
        size: Vec2,
        curve: &CurveCoordinates,
        point: ControlPoint,
    ) {
        let normalized = curve.point(point);
        let center = normalized_to_pixel(normalized, size);
        let radius = self.style.point_radius;

        ctx.fill_circle(center, radius, self.style.point_fill_color);
        ctx.fill_text(
            point.label(),
            center,
            self.style.label_font_size,
            self.style.label_color,
        );

        // Gespeicherte Werte ungerundet
        let coordinates = format!("({},{})", normalized.x, normalized.y);
        ctx.fill_text(
            &coordinates,
            center + Vec2::new(0.0, radius * 2.0),
            self.style.coordinate_font_size,
            self.style.coordinate_color,
        );
    }

    fn draw_curve(&self, ctx: &mut dyn DrawContext, size: Vec2, curve: &CurveCoordinates) {
        let points = [
            Vec2::new(0.0, size.y),
            normalized_to_pixel(curve.point(ControlPoint::P1), size),
            normalized_to_pixel(curve.point(ControlPoint::P2), size),
            Vec2::new(size.x, 0.0),
        ];
        ctx.stroke_cubic_bezier(points, self.style.curve_width, self.style.curve_color);
    }
}
