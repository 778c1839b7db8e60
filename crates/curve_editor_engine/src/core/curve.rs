//! Kurvenzustand: die beiden Steuerpunkte einer kubischen Bézier-Timing-Kurve.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Standard-X von P1.
pub const DEFAULT_X1: f32 = 0.25;
/// Standard-Y von P1.
pub const DEFAULT_Y1: f32 = 0.75;
/// Standard-X von P2.
pub const DEFAULT_X2: f32 = 0.75;
/// Standard-Y von P2.
pub const DEFAULT_Y2: f32 = 0.25;

/// Einer der beiden Steuerpunkte der Kurve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlPoint {
    P1,
    P2,
}

impl ControlPoint {
    /// Zeichen- und Hit-Test-Reihenfolge.
    pub const ALL: [ControlPoint; 2] = [ControlPoint::P1, ControlPoint::P2];

    /// Beschriftung im Canvas ("P1" / "P2").
    pub fn label(self) -> &'static str {
        match self {
            ControlPoint::P1 => "P1",
            ControlPoint::P2 => "P2",
        }
    }

    /// Kurzkennung ("p1" / "p2").
    pub fn id(self) -> &'static str {
        match self {
            ControlPoint::P1 => "p1",
            ControlPoint::P2 => "p2",
        }
    }
}

/// Normalisierte Steuerpunkte (x1, y1) und (x2, y2).
///
/// Werte sollen in [0, 1] liegen; Drag-Updates klemmen jeden Wert.
/// Zwischen x1/x2 bzw. y1/y2 gibt es keine Ordnung (überkreuzte Kurven sind gültig).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveCoordinates {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl Default for CurveCoordinates {
    fn default() -> Self {
        Self::new(DEFAULT_X1, DEFAULT_Y1, DEFAULT_X2, DEFAULT_Y2)
    }
}

impl CurveCoordinates {
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Liefert die normalisierte Position eines Steuerpunkts.
    pub fn point(&self, point: ControlPoint) -> Vec2 {
        match point {
            ControlPoint::P1 => Vec2::new(self.x1, self.y1),
            ControlPoint::P2 => Vec2::new(self.x2, self.y2),
        }
    }

    /// Setzt einen Steuerpunkt, beide Komponenten auf [0, 1] geklemmt.
    pub fn set_point_clamped(&mut self, point: ControlPoint, pos: Vec2) {
        let x = clamp_unit(pos.x);
        let y = clamp_unit(pos.y);
        match point {
            ControlPoint::P1 => {
                self.x1 = x;
                self.y1 = y;
            }
            ControlPoint::P2 => {
                self.x2 = x;
                self.y2 = y;
            }
        }
    }

    /// Alle vier Werte in der Reihenfolge x1, y1, x2, y2.
    pub fn to_array(&self) -> [f32; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }
}

/// Klemmt einen Wert auf [0, 1].
///
/// NaN sättigt auf 1.0, negative Null wird zu +0.0.
pub fn clamp_unit(value: f32) -> f32 {
    value.min(1.0).max(0.0) + 0.0
}

/// Rundet auf zwei Nachkommastellen (Hälften weg von null).
///
/// Rechnet in f64: `58 / 400` liegt dort knapp unter 0.145 und ergibt 0.14.
pub fn round2(value: f64) -> f32 {
    ((value * 100.0).round() / 100.0) as f32
}
