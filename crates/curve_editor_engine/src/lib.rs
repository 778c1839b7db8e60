//! Cubic-Bezier Curve Editor Engine.
//!
//! Headless Kern des Kurven-Editors: Normalisierung von Pointer-Koordinaten,
//! Hit-Test der Steuerpunkte, Kurvenzustand, Frame-Rendering gegen einen
//! abstrakten 2D-Kontext und Benachrichtigung der Observer.
//!
//! Der Host (z.B. das egui-Frontend) liefert Canvas, Events und Frame-Ticks
//! über den Trait [`CanvasHost`].

pub mod app;
pub mod core;
pub mod headless;
pub mod render;
pub mod shared;

pub use app::{
    CanvasHost, CurveEditor, CurveObservers, DragHit, DragState, EditorError, EditorEvent,
    EventResponse, InputTracker, SubscriptionId,
};
pub use core::{
    CanvasRect, ControlPoint, CurveCoordinates, CurveParseError, CursorHint, css_declaration,
    generate_curve_string,
};
pub use headless::HeadlessCanvas;
pub use render::{DrawCommand, DrawContext, RecordingContext, Renderer, Rgba};
pub use shared::EditorOptions;

pub use glam;
