//! Domänen-Kern: Kurvenzustand, Canvas-Geometrie und String-Codec.

mod codec;
mod curve;
pub mod geometry;

pub use codec::{CSS_PROPERTY_PREFIX, CurveParseError, css_declaration, generate_curve_string};
pub use curve::{ControlPoint, CurveCoordinates, clamp_unit, round2};
pub use geometry::CanvasRect;

/// Cursor-Hinweis, den der Host über dem Canvas anzeigen soll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorHint {
    #[default]
    Default,
    /// Pointer über einer Hit-Zone, kein aktiver Drag
    Grab,
    /// Aktiver Drag eines Steuerpunkts
    Grabbing,
}
