//! CurveEditor: verbindet Input-Tracker, Kurvenzustand, Renderer und Notifier.

use super::events::{EditorEvent, EventResponse};
use super::input::InputTracker;
use super::notifier::{CurveObservers, SubscriptionId};
use crate::core::{CanvasRect, CurveCoordinates, CursorHint, generate_curve_string};
use crate::render::{DrawContext, RenderStyle, Renderer};
use crate::shared::EditorOptions;
use glam::Vec2;

/// Schnittstelle zum Host, der Canvas, Fenster und Frame-Scheduler bereitstellt.
pub trait CanvasHost {
    /// Aktuelle Bounding-Box des Canvas in Client-Koordinaten.
    fn bounding_client_rect(&self) -> CanvasRect;
    /// Pixelgröße der Zeichenfläche (Breite, Höhe).
    fn canvas_size(&self) -> Vec2;
    /// Setzt die Pixelgröße der Zeichenfläche.
    fn set_canvas_size(&mut self, size: Vec2);
    /// Innere Fensterbreite in Pixeln.
    fn window_inner_width(&self) -> f32;
    /// Setzt den Cursor über dem Canvas.
    fn set_cursor(&mut self, cursor: CursorHint);
    /// Fordert einen weiteren Frame an; der Host ruft dann `on_animation_frame`.
    fn request_animation_frame(&mut self);
    /// Liefert den 2D-Zeichenkontext oder `None`, wenn keiner verfügbar ist.
    fn context_2d(&mut self) -> Option<&mut dyn DrawContext>;
}

/// Fatale Initialisierungsfehler.
///
/// Das Canvas selbst übergibt der Host als `H`; ein fehlendes Canvas ist damit
/// bereits zur Compile-Zeit ausgeschlossen.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditorError {
    /// Host kann keinen 2D-Kontext bereitstellen
    #[error("2D-Zeichenkontext des Canvas nicht verfügbar")]
    ContextUnavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FrameLoop {
    Running,
    Disposed,
}

/// Interaktiver Editor für eine kubische Bézier-Timing-Kurve.
pub struct CurveEditor<H: CanvasHost> {
    host: H,
    options: EditorOptions,
    curve: CurveCoordinates,
    input: InputTracker,
    renderer: Renderer,
    observers: CurveObservers,
    frame_loop: FrameLoop,
    frames_rendered: u64,
}

impl<H: CanvasHost> CurveEditor<H> {
    /// Erstellt einen Editor mit Standard-Optionen.
    ///
    /// `initial` überschreibt die Standardkurve (wird kopiert).
    pub fn new(host: H, initial: Option<CurveCoordinates>) -> Result<Self, EditorError> {
        Self::with_options(host, EditorOptions::default(), initial)
    }

    /// Erstellt einen Editor, dimensioniert das Canvas und zeichnet den ersten Frame.
    ///
    /// Startkurve: `initial`, sonst `options.default_curve`, sonst Standardwerte.
    pub fn with_options(
        mut host: H,
        options: EditorOptions,
        initial: Option<CurveCoordinates>,
    ) -> Result<Self, EditorError> {
        if host.context_2d().is_none() {
            return Err(EditorError::ContextUnavailable);
        }

        let curve = initial
            .or_else(|| options.initial_curve())
            .unwrap_or_default();

        let mut editor = Self {
            host,
            input: InputTracker::new(options.pointer_buffer_px),
            renderer: Renderer::new(RenderStyle::from_options(&options)),
            options,
            curve,
            observers: CurveObservers::new(),
            frame_loop: FrameLoop::Running,
            frames_rendered: 0,
        };

        let window_width = editor.host.window_inner_width();
        editor.update_canvas_dimensions(window_width);
        log::info!("Kurven-Editor initialisiert: {}", editor.curve);
        editor.on_animation_frame();

        Ok(editor)
    }

    /// Stateless-Formatter für beliebige Koordinaten.
    pub fn generate_curve_string(curve: &CurveCoordinates) -> String {
        generate_curve_string(curve)
    }

    /// Aktueller Kurvenzustand (Live-Referenz).
    pub fn current_curve_coordinates(&self) -> &CurveCoordinates {
        &self.curve
    }

    /// Aktueller Kurven-String `cubic-bezier(...)`.
    pub fn current_curve_string(&self) -> String {
        generate_curve_string(&self.curve)
    }

    /// Registriert einen Observer, der nach jedem Frame aufgerufen wird.
    pub fn on_curve_change(
        &mut self,
        callback: impl FnMut(&CurveCoordinates) + 'static,
    ) -> SubscriptionId {
        self.observers.subscribe(callback)
    }

    /// Entfernt einen Observer.
    pub fn remove_curve_change(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Verarbeitet ein Host-Event vollständig und synchron.
    pub fn handle_event(&mut self, event: EditorEvent) -> EventResponse {
        if self.is_disposed() {
            return EventResponse::IGNORED;
        }

        match event {
            EditorEvent::PointerDown { client } => {
                self.press(client);
                EventResponse::IGNORED
            }
            EditorEvent::PointerMove { client } => {
                self.track(client);
                EventResponse::IGNORED
            }
            EditorEvent::PointerUp | EditorEvent::TouchEnd => {
                self.input.release();
                EventResponse::IGNORED
            }
            EditorEvent::TouchStart { touches } => {
                if let Some(&client) = touches.first() {
                    self.press(client);
                }
                EventResponse::PREVENT_DEFAULT
            }
            EditorEvent::TouchMove { touches } => {
                let Some(&client) = touches.first() else {
                    return EventResponse::IGNORED;
                };
                let prevent_default = self.input.is_dragging();
                self.track(client);
                EventResponse { prevent_default }
            }
            EditorEvent::WindowResized { inner_width } => {
                self.update_canvas_dimensions(inner_width);
                EventResponse::IGNORED
            }
        }
    }

    /// Frame-Tick: zeichnet, benachrichtigt und fordert den nächsten Frame an.
    pub fn on_animation_frame(&mut self) {
        if self.is_disposed() {
            return;
        }

        let size = self.host.canvas_size();
        match self.host.context_2d() {
            Some(ctx) => self.renderer.draw_frame(ctx, size, &self.curve),
            None => log::warn!("Frame übersprungen: kein 2D-Kontext"),
        }
        self.frames_rendered += 1;

        self.observers.notify(&self.curve);
        self.host.request_animation_frame();
    }

    /// Stoppt den Frame-Loop, verwirft alle Observer und ignoriert weitere Events.
    pub fn dispose(&mut self) {
        if self.is_disposed() {
            return;
        }
        self.frame_loop = FrameLoop::Disposed;
        self.observers.clear();
        self.input.release();
        log::info!(
            "Kurven-Editor beendet nach {} Frames",
            self.frames_rendered
        );
    }

    pub fn is_disposed(&self) -> bool {
        self.frame_loop == FrameLoop::Disposed
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    pub fn input(&self) -> &InputTracker {
        &self.input
    }

    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    fn press(&mut self, client: Vec2) {
        let bounds = self.host.bounding_client_rect();
        self.input.press(client, &bounds, &self.curve);
    }

    fn track(&mut self, client: Vec2) {
        let bounds = self.host.bounding_client_rect();
        self.input.track(client, &bounds, &mut self.curve);
        self.host.set_cursor(self.input.cursor());
    }

    /// Quadratisches Canvas: `min(Fensterbreite - Rand, Maximalgröße)`.
    fn update_canvas_dimensions(&mut self, window_width: f32) {
        let size = self.options.canvas_size_for_window(window_width);
        let new_size = Vec2::splat(size);
        if self.host.canvas_size() != new_size {
            log::debug!(
                "Canvas-Größe {} px (Fensterbreite {} px)",
                size,
                window_width
            );
        }
        self.host.set_canvas_size(new_size);
    }
}

impl<H: CanvasHost> std::fmt::Debug for CurveEditor<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurveEditor")
            .field("curve", &self.curve)
            .field("drag", &self.input.state())
            .field("observers", &self.observers)
            .field("frame_loop", &self.frame_loop)
            .field("frames_rendered", &self.frames_rendered)
            .finish()
    }
}
