//! egui-Frontend des Cubic-Bezier-Editors.
//!
//! Stellt das Canvas als [`curve_editor_engine::CanvasHost`] bereit, übersetzt
//! egui-Input in Editor-Events und zeichnet die Frames mit dem egui-Painter.

pub mod app;
mod canvas;
mod input;

pub use app::CurveGeneratorApp;
pub use canvas::EguiCanvas;
