//! Zentrale Konfiguration für den Cubic-Bezier-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::CurveCoordinates;
use crate::render::Rgba;
use serde::{Deserialize, Serialize};

// ── Input ───────────────────────────────────────────────────────────

/// Halbbreite der quadratischen Hit-Zone um einen Steuerpunkt (Canvas-Pixel).
pub const POINTER_BUFFER_PX: f32 = 30.0;

// ── Canvas ──────────────────────────────────────────────────────────

/// Maximale Kantenlänge des Canvas in Pixeln.
pub const CANVAS_MAX_SIZE_PX: f32 = 400.0;
/// Abstand, der von der Fensterbreite abgezogen wird.
pub const WINDOW_MARGIN_PX: f32 = 30.0;

// ── Steuerpunkte ────────────────────────────────────────────────────

/// Radius der Steuerpunkt-Scheibe.
pub const POINT_RADIUS_PX: f32 = 15.0;
/// Füllfarbe der Steuerpunkte (RGBA: Weiß).
pub const POINT_FILL_COLOR: Rgba = [1.0, 1.0, 1.0, 1.0];
/// Farbe der Beschriftung "P1"/"P2" (RGBA: Schwarz).
pub const POINT_LABEL_COLOR: Rgba = [0.0, 0.0, 0.0, 1.0];
/// Schriftgröße der Beschriftung.
pub const POINT_LABEL_FONT_PX: f32 = 14.0;
/// Farbe der Koordinaten-Anzeige (RGBA: Weiß).
pub const COORDINATE_TEXT_COLOR: Rgba = [1.0, 1.0, 1.0, 1.0];
/// Schriftgröße der Koordinaten-Anzeige.
pub const COORDINATE_FONT_PX: f32 = 12.0;

// ── Linien ──────────────────────────────────────────────────────────

/// Farbe der Referenz-Diagonale (RGBA: #555555).
pub const DIAGONAL_COLOR: Rgba = [85.0 / 255.0, 85.0 / 255.0, 85.0 / 255.0, 1.0];
/// Linienstärke der Diagonale.
pub const DIAGONAL_WIDTH_PX: f32 = 1.0;
/// Farbe der Kurve (RGBA: Weiß).
pub const CURVE_COLOR: Rgba = [1.0, 1.0, 1.0, 1.0];
/// Linienstärke der Kurve.
pub const CURVE_WIDTH_PX: f32 = 1.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `bezier_curve_editor.toml` neben der Binary gespeichert.
/// Fehlende Felder fallen auf die Standardwerte zurück.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Input ───────────────────────────────────────────────────
    /// Halbbreite der Hit-Zone in Canvas-Pixeln
    pub pointer_buffer_px: f32,

    // ── Canvas ──────────────────────────────────────────────────
    /// Maximale Kantenlänge des Canvas
    pub canvas_max_size_px: f32,
    /// Von der Fensterbreite abgezogener Rand
    pub window_margin_px: f32,

    // ── Steuerpunkte ────────────────────────────────────────────
    pub point_radius_px: f32,
    pub point_fill_color: Rgba,
    pub point_label_color: Rgba,
    pub point_label_font_px: f32,
    pub coordinate_text_color: Rgba,
    pub coordinate_font_px: f32,

    // ── Linien ──────────────────────────────────────────────────
    pub diagonal_color: Rgba,
    pub diagonal_width_px: f32,
    pub curve_color: Rgba,
    pub curve_width_px: f32,

    // ── Startkurve ──────────────────────────────────────────────
    /// Optionale Startkurve als `cubic-bezier(...)`-String
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_curve: Option<String>,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            pointer_buffer_px: POINTER_BUFFER_PX,

            canvas_max_size_px: CANVAS_MAX_SIZE_PX,
            window_margin_px: WINDOW_MARGIN_PX,

            point_radius_px: POINT_RADIUS_PX,
            point_fill_color: POINT_FILL_COLOR,
            point_label_color: POINT_LABEL_COLOR,
            point_label_font_px: POINT_LABEL_FONT_PX,
            coordinate_text_color: COORDINATE_TEXT_COLOR,
            coordinate_font_px: COORDINATE_FONT_PX,

            diagonal_color: DIAGONAL_COLOR,
            diagonal_width_px: DIAGONAL_WIDTH_PX,
            curve_color: CURVE_COLOR,
            curve_width_px: CURVE_WIDTH_PX,

            default_curve: None,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("bezier_curve_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("bezier_curve_editor.toml")
    }

    /// Parst `default_curve`. Ungültige Strings werden geloggt und ignoriert.
    pub fn initial_curve(&self) -> Option<CurveCoordinates> {
        let raw = self.default_curve.as_deref()?;
        match raw.parse() {
            Ok(curve) => Some(curve),
            Err(e) => {
                log::warn!("default_curve '{}' ignoriert: {}", raw, e);
                None
            }
        }
    }

    /// Kantenlänge des Canvas für eine Fensterbreite.
    pub fn canvas_size_for_window(&self, window_width: f32) -> f32 {
        crate::core::geometry::canvas_size_for_window(
            window_width,
            self.window_margin_px,
            self.canvas_max_size_px,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let opts: EditorOptions = toml::from_str("pointer_buffer_px = 12.0\n").unwrap();
        assert_eq!(opts.pointer_buffer_px, 12.0);
        assert_eq!(opts.point_radius_px, POINT_RADIUS_PX);
        assert_eq!(opts.default_curve, None);
    }

    #[test]
    fn test_toml_roundtrip_keeps_default_curve() {
        let opts = EditorOptions {
            default_curve: Some("cubic-bezier(0.42, 0, 0.58, 1)".to_string()),
            ..EditorOptions::default()
        };
        let text = toml::to_string_pretty(&opts).unwrap();
        let back: EditorOptions = toml::from_str(&text).unwrap();
        assert_eq!(back, opts);
    }

    #[test]
    fn test_initial_curve_parsing() {
        let mut opts = EditorOptions::default();
        assert_eq!(opts.initial_curve(), None);

        opts.default_curve = Some("cubic-bezier(0.1, 0.2, 0.3, 0.4)".to_string());
        assert_eq!(
            opts.initial_curve(),
            Some(CurveCoordinates::new(0.1, 0.2, 0.3, 0.4))
        );

        opts.default_curve = Some("linear".to_string());
        assert_eq!(opts.initial_curve(), None);
    }

    #[test]
    fn test_canvas_size_uses_configured_margin() {
        let opts = EditorOptions {
            window_margin_px: 50.0,
            ..EditorOptions::default()
        };
        assert_eq!(opts.canvas_size_for_window(300.0), 250.0);
        assert_eq!(opts.canvas_size_for_window(2000.0), 400.0);
    }
}
