//! egui-Input → Editor-Events.
//!
//! Druck und Loslassen der primären Taste gelten fensterweit, Bewegungen nur
//! über dem Canvas. egui liefert Touch-Eingaben zusätzlich als Pointer-Events,
//! daher werden `egui::Event::Touch` hier nicht gesondert übersetzt.

use curve_editor_engine::EditorEvent;
use glam::Vec2;

/// Sammelt die Editor-Events des aktuellen Frames.
pub(crate) fn collect_editor_events(ui: &egui::Ui, canvas_rect: egui::Rect) -> Vec<EditorEvent> {
    ui.input(|i| {
        i.events
            .iter()
            .filter_map(|event| map_event(event, canvas_rect))
            .collect()
    })
}

fn map_event(event: &egui::Event, canvas_rect: egui::Rect) -> Option<EditorEvent> {
    match event {
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            ..
        } => Some(if *pressed {
            EditorEvent::PointerDown {
                client: to_vec2(*pos),
            }
        } else {
            EditorEvent::PointerUp
        }),
        egui::Event::PointerMoved(pos) if canvas_rect.contains(*pos) => {
            Some(EditorEvent::PointerMove {
                client: to_vec2(*pos),
            })
        }
        _ => None,
    }
}

fn to_vec2(pos: egui::Pos2) -> Vec2 {
    Vec2::new(pos.x, pos.y)
}
