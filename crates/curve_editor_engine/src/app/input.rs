//! Input-Tracker: Pointer-Positionen → Hit-Test und Drag-Zustand.

use crate::core::geometry::{normalized_to_pixel, within_square_buffer};
use crate::core::{CanvasRect, ControlPoint, CurveCoordinates, CursorHint, round2};
use glam::Vec2;

/// Ergebnis eines Hit-Tests an einer Pointer-Position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragHit {
    /// Getroffener Steuerpunkt (None = keiner)
    pub point: Option<ControlPoint>,
    /// Normalisiertes x, auf 2 Nachkommastellen gerundet, nicht geklemmt
    pub x: f32,
    /// Normalisiertes y (y-Flip), gerundet, nicht geklemmt
    pub y: f32,
}

impl DragHit {
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Zustand der Drag-Interaktion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(ControlPoint),
}

impl DragState {
    pub fn point(self) -> Option<ControlPoint> {
        match self {
            DragState::Idle => None,
            DragState::Dragging(point) => Some(point),
        }
    }
}

/// Verwaltet Drag-Zustand, letzte Hit-Position und Cursor-Hinweis.
#[derive(Debug, Clone)]
pub struct InputTracker {
    pointer_buffer: f32,
    state: DragState,
    last_hit: Option<DragHit>,
    cursor: CursorHint,
}

impl InputTracker {
    /// Erstellt einen Tracker mit der Hit-Zonen-Halbbreite `pointer_buffer` (Pixel).
    pub fn new(pointer_buffer: f32) -> Self {
        Self {
            pointer_buffer,
            state: DragState::Idle,
            last_hit: None,
            cursor: CursorHint::Default,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn last_hit(&self) -> Option<DragHit> {
        self.last_hit
    }

    pub fn cursor(&self) -> CursorHint {
        self.cursor
    }

    pub fn pointer_buffer(&self) -> f32 {
        self.pointer_buffer
    }

    /// Hit-Test und Normalisierung einer Client-Position.
    ///
    /// P1 wird zuerst geprüft, P2 danach und überschreibt bei Treffer:
    /// überlappen beide Hit-Zonen, gewinnt immer P2.
    pub fn calculate_dragging_point(
        &self,
        client: Vec2,
        bounds: &CanvasRect,
        curve: &CurveCoordinates,
    ) -> DragHit {
        let click = bounds.to_local(client);
        let size = bounds.size;

        let mut point = None;
        for candidate in ControlPoint::ALL {
            let center = normalized_to_pixel(curve.point(candidate), size);
            if within_square_buffer(click, center, self.pointer_buffer) {
                point = Some(candidate);
            }
        }

        DragHit {
            point,
            x: round2(f64::from(click.x) / f64::from(size.x)),
            y: round2(f64::from(size.y - click.y) / f64::from(size.y)),
        }
    }

    /// Pointer-Down / Touch-Start: bestimmt das neue Drag-Ziel.
    pub fn press(&mut self, client: Vec2, bounds: &CanvasRect, curve: &CurveCoordinates) {
        let hit = self.calculate_dragging_point(client, bounds, curve);
        self.state = match hit.point {
            Some(point) => DragState::Dragging(point),
            None => DragState::Idle,
        };
        self.last_hit = Some(hit);
        if let Some(point) = hit.point {
            log::debug!("Drag gestartet: {} bei ({}, {})", point.id(), hit.x, hit.y);
        }
    }

    /// Pointer-Move / Touch-Move: aktualisiert Cursor und ggf. den gegriffenen Punkt.
    ///
    /// Gibt `true` zurück, wenn die Kurve verändert wurde.
    pub fn track(
        &mut self,
        client: Vec2,
        bounds: &CanvasRect,
        curve: &mut CurveCoordinates,
    ) -> bool {
        if !bounds.has_area() {
            return false;
        }
        let hit = self.calculate_dragging_point(client, bounds, curve);

        self.cursor = match (self.state, hit.point) {
            (DragState::Dragging(_), _) => CursorHint::Grabbing,
            (DragState::Idle, Some(_)) => CursorHint::Grab,
            (DragState::Idle, None) => CursorHint::Default,
        };

        let DragState::Dragging(point) = self.state else {
            return false;
        };
        curve.set_point_clamped(point, hit.position());
        self.last_hit = Some(hit);
        true
    }

    /// Pointer-Up / Touch-End: beendet jeden Drag.
    pub fn release(&mut self) {
        if let DragState::Dragging(point) = self.state {
            log::debug!("Drag beendet: {}", point.id());
        }
        self.state = DragState::Idle;
        self.last_hit = None;
    }

    /// True solange ein Steuerpunkt gegriffen ist.
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }
}
