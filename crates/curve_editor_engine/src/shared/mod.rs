//! Geteilte Konfiguration für Engine und Frontends.

pub mod options;

pub use options::EditorOptions;
pub use options::{CANVAS_MAX_SIZE_PX, POINTER_BUFFER_PX, WINDOW_MARGIN_PX};
