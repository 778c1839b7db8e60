//! Headless-Host ohne GUI: für Tests, Benchmarks und Server-seitige Vorschau.

use crate::app::CanvasHost;
use crate::core::{CanvasRect, CursorHint};
use crate::render::{DrawContext, RecordingContext};
use glam::Vec2;

/// Simuliertes Fenster mit Canvas; zeichnet in einen [`RecordingContext`],
/// der nur den jeweils letzten Frame behält.
#[derive(Debug, Clone)]
pub struct HeadlessCanvas {
    origin: Vec2,
    size: Vec2,
    window_width: f32,
    cursor: CursorHint,
    pending_frames: usize,
    context: Option<RecordingContext>,
}

impl HeadlessCanvas {
    /// Canvas im Client-Ursprung in einem Fenster der Breite `window_width`.
    pub fn new(window_width: f32) -> Self {
        Self {
            origin: Vec2::ZERO,
            size: Vec2::ZERO,
            window_width,
            cursor: CursorHint::Default,
            pending_frames: 0,
            context: Some(RecordingContext::last_frame_only()),
        }
    }

    /// Host, der keinen 2D-Kontext bereitstellen kann.
    pub fn without_context(window_width: f32) -> Self {
        Self {
            context: None,
            ..Self::new(window_width)
        }
    }

    /// Verschiebt die Canvas-Position im Client-Koordinatensystem.
    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    /// Ändert die Fensterbreite, die der Editor bei der Konstruktion abfragt.
    /// Laufende Editoren erfahren die neue Breite nur über `WindowResized`.
    pub fn resize_window(&mut self, window_width: f32) {
        self.window_width = window_width;
    }

    pub fn cursor(&self) -> CursorHint {
        self.cursor
    }

    /// Anzahl angeforderter, noch nicht abgeholter Frames.
    pub fn pending_frames(&self) -> usize {
        self.pending_frames
    }

    /// Holt eine Frame-Anforderung ab. `true`, wenn eine vorlag.
    pub fn take_frame_request(&mut self) -> bool {
        if self.pending_frames == 0 {
            return false;
        }
        self.pending_frames -= 1;
        true
    }

    pub fn recording(&self) -> Option<&RecordingContext> {
        self.context.as_ref()
    }

    pub fn recording_mut(&mut self) -> Option<&mut RecordingContext> {
        self.context.as_mut()
    }

    /// Nimmt den Zeichenkontext weg (z.B. Kontextverlust simulieren).
    pub fn drop_context(&mut self) {
        self.context = None;
    }
}

impl CanvasHost for HeadlessCanvas {
    fn bounding_client_rect(&self) -> CanvasRect {
        CanvasRect {
            min: self.origin,
            size: self.size,
        }
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
        self.pending_frames += 1;
    }

    fn context_2d(&mut self) -> Option<&mut dyn DrawContext> {
        self.context.as_mut().map(|ctx| ctx as &mut dyn DrawContext)
    }
}
