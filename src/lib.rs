//! Cubic-Bezier Curve Editor Library.
//! Fassade über Engine und egui-Frontend, exportiert für Tests und Wiederverwendung.

pub use curve_editor_engine::{
    app, core, css_declaration, generate_curve_string, headless, render, shared, CanvasHost,
    CanvasRect, ControlPoint, CurveCoordinates, CurveEditor, CurveParseError, CursorHint, DragHit,
    DragState, DrawCommand, DrawContext, EditorError, EditorEvent, EditorOptions, EventResponse,
    HeadlessCanvas, InputTracker, RecordingContext, Renderer, Rgba, SubscriptionId,
};
pub use curve_editor_frontend_egui::{CurveGeneratorApp, EguiCanvas};
