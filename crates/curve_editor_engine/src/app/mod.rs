//! Application-Layer: Editor, Events, Input-Tracker und Notifier.
//!
//! Aufgeteilt in:
//! - `editor`   — `CurveEditor`, Host-Trait, Frame-Loop, Lifecycle
//! - `events`   — Host-Events und Event-Antworten
//! - `input`    — Hit-Test, Drag-Zustandsmaschine, Cursor-Hinweis
//! - `notifier` — Observer-Liste für Kurvenänderungen

mod editor;
mod events;
mod input;
mod notifier;

pub use editor::{CanvasHost, CurveEditor, EditorError};
pub use events::{EditorEvent, EventResponse};
pub use input::{DragHit, DragState, InputTracker};
pub use notifier::{CurveCallback, CurveObservers, SubscriptionId};
