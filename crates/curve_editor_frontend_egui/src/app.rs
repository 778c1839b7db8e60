//! eframe-Anwendung: Canvas mit Kurven-Editor und Kopier-Leiste.

use crate::canvas::EguiCanvas;
use crate::input::collect_editor_events;
use anyhow::Context as _;
use curve_editor_engine::{
    CurveEditor, EditorEvent, EditorOptions, css_declaration, generate_curve_string,
};
use std::cell::RefCell;
use std::rc::Rc;

/// Anzeigedauer des "Copied!"-Labels in Sekunden.
const COPIED_LABEL_SECONDS: f64 = 1.0;

/// Haupt-Anwendungsstruktur
pub struct CurveGeneratorApp {
    editor: CurveEditor<EguiCanvas>,
    /// Vom Notifier nach jedem Frame aktualisierter Kurven-String
    curve_value: Rc<RefCell<String>>,
    copied_at: Option<f64>,
}

impl CurveGeneratorApp {
    /// Erstellt Editor und Observer. `window_width` ist die initiale Fensterbreite.
    pub fn new(options: EditorOptions, window_width: f32) -> anyhow::Result<Self> {
        let mut editor = CurveEditor::with_options(EguiCanvas::new(window_width), options, None)
            .context("Kurven-Editor konnte nicht initialisiert werden")?;

        let curve_value = Rc::new(RefCell::new(editor.current_curve_string()));
        {
            let curve_value = Rc::clone(&curve_value);
            editor.on_curve_change(move |curve| {
                *curve_value.borrow_mut() = generate_curve_string(curve);
            });
        }

        Ok(Self {
            editor,
            curve_value,
            copied_at: None,
        })
    }

    /// Zuletzt veröffentlichter Kurven-String.
    pub fn curve_value(&self) -> String {
        self.curve_value.borrow().clone()
    }

    pub fn editor(&self) -> &CurveEditor<EguiCanvas> {
        &self.editor
    }

    fn copy_button_label(&self, now: f64) -> &'static str {
        match self.copied_at {
            Some(at) if now - at < COPIED_LABEL_SECONDS => "Copied!",
            _ => "Copy",
        }
    }

    fn copy_to_clipboard(&mut self, ctx: &egui::Context, now: f64) {
        let text = css_declaration(self.editor.current_curve_coordinates());
        log::info!("In Zwischenablage kopiert: {}", text);
        ctx.copy_text(text);
        self.copied_at = Some(now);
        ctx.request_repaint_after(std::time::Duration::from_secs_f64(COPIED_LABEL_SECONDS));
    }

    fn render_toolbar(&mut self, ctx: &egui::Context) {
        let now = ctx.input(|i| i.time);
        egui::TopBottomPanel::top("curve_toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.monospace(self.curve_value());
                if ui.button(self.copy_button_label(now)).clicked() {
                    self.copy_to_clipboard(ctx, now);
                }
            });
        });
    }

    fn render_canvas(&mut self, ctx: &egui::Context) {
        let window_width = window_inner_width(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.editor.host_mut().set_window_width(window_width) {
                self.editor.handle_event(EditorEvent::WindowResized {
                    inner_width: window_width,
                });
            }

            let size = self.editor.host().rect().size();
            let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click_and_drag());
            self.editor.host_mut().place(rect.min);

            for event in collect_editor_events(ui, rect) {
                self.editor.handle_event(event);
            }

            if response.hovered() || self.editor.input().is_dragging() {
                ctx.set_cursor_icon(self.editor.host().cursor_icon());
            }

            if self.editor.host_mut().take_frame_request() {
                self.editor.on_animation_frame();
            }
            self.editor.host_mut().paint(&ui.painter_at(rect));
        });

        if self.editor.host().has_frame_request() {
            ctx.request_repaint();
        }
    }
}

/// Innere Fensterbreite (Viewport), unabhängig von Panel-Rändern.
#[allow(deprecated)]
fn window_inner_width(ctx: &egui::Context) -> f32 {
    ctx.input(|i| i.screen_rect()).width()
}

impl eframe::App for CurveGeneratorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_toolbar(ctx);
        self.render_canvas(ctx);
    }
}

impl Drop for CurveGeneratorApp {
    fn drop(&mut self) {
        self.editor.dispose();
    }
}
