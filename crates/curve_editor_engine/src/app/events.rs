use glam::Vec2;

/// Eingaben des Hosts an den Editor.
///
/// Positionen sind Client-Koordinaten (fensterrelativ, Pixel).
/// `PointerDown`/`PointerUp`/`TouchStart`/`TouchEnd` sollte der Host
/// dokumentweit melden, `PointerMove`/`TouchMove` nur über dem Canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// Maustaste gedrückt
    PointerDown { client: Vec2 },
    /// Maus über dem Canvas bewegt
    PointerMove { client: Vec2 },
    /// Maustaste losgelassen (irgendwo im Dokument)
    PointerUp,
    /// Touch begonnen; aktuelle Berührungspunkte, erster zählt
    TouchStart { touches: Vec<Vec2> },
    /// Touch bewegt; aktuelle Berührungspunkte, erster zählt
    TouchMove { touches: Vec<Vec2> },
    /// Touch beendet
    TouchEnd,
    /// Fenstergröße hat sich geändert
    WindowResized { inner_width: f32 },
}

/// Antwort des Editors auf ein Event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventResponse {
    /// Host soll das Plattform-Standardverhalten (Scroll/Zoom) unterdrücken
    pub prevent_default: bool,
}

impl EventResponse {
    pub(crate) const IGNORED: Self = Self {
        prevent_default: false,
    };

    pub(crate) const PREVENT_DEFAULT: Self = Self {
        prevent_default: true,
    };
}
