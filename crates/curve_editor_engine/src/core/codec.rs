//! CSS-Codec: `cubic-bezier(x1, y1, x2, y2)` erzeugen und einlesen.

use super::CurveCoordinates;
use std::fmt;
use std::str::FromStr;

/// Präfix, mit dem der Kurven-String in die Zwischenablage kopiert wird.
pub const CSS_PROPERTY_PREFIX: &str = "animation-timing-function: ";

const FUNCTION_NAME: &str = "cubic-bezier";

/// Erzeugt den CSS-Timing-Function-String für beliebige Koordinaten.
///
/// Zahlen erscheinen in ihrer kürzesten Dezimaldarstellung (`0.25`, `1`, `0`),
/// ohne zusätzliche Auffüllung.
pub fn generate_curve_string(curve: &CurveCoordinates) -> String {
    format!(
        "{FUNCTION_NAME}({}, {}, {}, {})",
        curve.x1, curve.y1, curve.x2, curve.y2
    )
}

/// Vollständige CSS-Deklaration, z.B. `animation-timing-function: cubic-bezier(…)`.
pub fn css_declaration(curve: &CurveCoordinates) -> String {
    format!("{CSS_PROPERTY_PREFIX}{}", generate_curve_string(curve))
}

impl fmt::Display for CurveCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&generate_curve_string(self))
    }
}

/// Fehler beim Einlesen eines `cubic-bezier(...)`-Strings.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CurveParseError {
    #[error("erwartet 'cubic-bezier(' am Anfang")]
    MissingFunction,
    #[error("schließende Klammer fehlt")]
    MissingClosingParen,
    #[error("erwartet 4 Werte, gefunden {0}")]
    WrongArity(usize),
    #[error("ungültige Zahl: '{0}'")]
    InvalidNumber(String),
}

impl FromStr for CurveCoordinates {
    type Err = CurveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s
            .trim()
            .strip_prefix(FUNCTION_NAME)
            .map(str::trim_start)
            .and_then(|rest| rest.strip_prefix('('))
            .ok_or(CurveParseError::MissingFunction)?;
        let body = body
            .trim_end()
            .strip_suffix(')')
            .ok_or(CurveParseError::MissingClosingParen)?;

        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(CurveParseError::WrongArity(parts.len()));
        }

        let mut values = [0.0f32; 4];
        for (slot, part) in values.iter_mut().zip(&parts) {
            *slot = part
                .parse::<f32>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| CurveParseError::InvalidNumber((*part).to_string()))?;
        }

        let [x1, y1, x2, y2] = values;
        Ok(Self::new(x1, y1, x2, y2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_curve_string() {
        let curve = CurveCoordinates::new(0.25, 0.75, 0.75, 0.25);
        assert_eq!(
            generate_curve_string(&curve),
            "cubic-bezier(0.25, 0.75, 0.75, 0.25)"
        );
    }

    #[test]
    fn test_integral_values_have_no_padding() {
        let curve = CurveCoordinates::new(0.0, 1.0, 1.0, 0.0);
        assert_eq!(curve.to_string(), "cubic-bezier(0, 1, 1, 0)");
    }

    #[test]
    fn test_rounded_drag_values_print_two_decimals() {
        let curve = CurveCoordinates::new(0.31, 0.07, 0.9, 0.5);
        assert_eq!(curve.to_string(), "cubic-bezier(0.31, 0.07, 0.9, 0.5)");
    }

    #[test]
    fn test_css_declaration_prefix() {
        let decl = css_declaration(&CurveCoordinates::default());
        assert_eq!(
            decl,
            "animation-timing-function: cubic-bezier(0.25, 0.75, 0.75, 0.25)"
        );
    }

    #[test]
    fn test_parse_accepts_own_output_and_loose_whitespace() {
        let curve: CurveCoordinates = "  cubic-bezier (0.1,0.2 , 0.3,  0.4 ) ".parse().unwrap();
        assert_eq!(curve, CurveCoordinates::new(0.1, 0.2, 0.3, 0.4));

        let original = CurveCoordinates::new(0.42, 0.0, 0.58, 1.0);
        assert_eq!(original.to_string().parse::<CurveCoordinates>(), Ok(original));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "ease-in".parse::<CurveCoordinates>(),
            Err(CurveParseError::MissingFunction)
        );
        assert_eq!(
            "cubic-bezier(0, 0, 1, 1".parse::<CurveCoordinates>(),
            Err(CurveParseError::MissingClosingParen)
        );
        assert_eq!(
            "cubic-bezier(0, 0, 1)".parse::<CurveCoordinates>(),
            Err(CurveParseError::WrongArity(3))
        );
        assert_eq!(
            "cubic-bezier(0, x, 1, 1)".parse::<CurveCoordinates>(),
            Err(CurveParseError::InvalidNumber("x".to_string()))
        );
        assert!(matches!(
            "cubic-bezier(0, NaN, 1, 1)".parse::<CurveCoordinates>(),
            Err(CurveParseError::InvalidNumber(_))
        ));
    }
}
