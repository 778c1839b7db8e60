//! Canvas-Geometrie: Client- ↔ Canvas-Pixel ↔ normalisierte Koordinaten.
//!
//! Canvas-Pixel wachsen nach unten, Kurvenkoordinaten nach oben.
//! Alle Umrechnungen spiegeln y an der Canvas-Höhe (y-Flip).

use glam::Vec2;

/// Bounding-Box des Canvas im Client-Koordinatensystem des Hosts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasRect {
    /// Linke obere Ecke (left, top)
    pub min: Vec2,
    /// Breite und Höhe
    pub size: Vec2,
}

impl CanvasRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(left, top),
            size: Vec2::new(width, height),
        }
    }

    /// Rechteck im Ursprung mit gegebener Größe.
    pub fn from_size(size: Vec2) -> Self {
        Self {
            min: Vec2::ZERO,
            size,
        }
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Client-Position relativ zur linken oberen Canvas-Ecke.
    pub fn to_local(&self, client: Vec2) -> Vec2 {
        client - self.min
    }

    /// True wenn das Rechteck eine positive Fläche hat.
    pub fn has_area(&self) -> bool {
        self.size.x > 0.0 && self.size.y > 0.0
    }
}

/// Normalisierte Koordinate → Canvas-Pixel (mit y-Flip).
pub fn normalized_to_pixel(normalized: Vec2, size: Vec2) -> Vec2 {
    Vec2::new(normalized.x * size.x, size.y - normalized.y * size.y)
}

/// Canvas-Pixel → normalisierte Koordinate (mit y-Flip), ungerundet.
pub fn pixel_to_normalized(pixel: Vec2, size: Vec2) -> Vec2 {
    Vec2::new(pixel.x / size.x, (size.y - pixel.y) / size.y)
}

/// Prüft, ob `pos` strikt innerhalb des Quadrats mit Halbbreite `buffer` um `center` liegt.
pub fn within_square_buffer(pos: Vec2, center: Vec2, buffer: f32) -> bool {
    pos.x < center.x + buffer
        && pos.x > center.x - buffer
        && pos.y < center.y + buffer
        && pos.y > center.y - buffer
}

/// Kantenlänge des quadratischen Canvas für eine Fensterbreite.
///
/// `min(window_width - margin, max_size)`, nach unten bei 0 begrenzt.
pub fn canvas_size_for_window(window_width: f32, margin: f32, max_size: f32) -> f32 {
    (window_width - margin).min(max_size).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_y_flip_corners() {
        let size = Vec2::new(400.0, 400.0);
        assert_eq!(normalized_to_pixel(Vec2::ZERO, size), Vec2::new(0.0, 400.0));
        assert_eq!(normalized_to_pixel(Vec2::ONE, size), Vec2::new(400.0, 0.0));
        assert_eq!(
            pixel_to_normalized(Vec2::new(0.0, 400.0), size),
            Vec2::ZERO
        );
    }

    #[test]
    fn test_pixel_roundtrip_recovers_normalized() {
        let sizes = [Vec2::new(400.0, 400.0), Vec2::new(270.0, 270.0), Vec2::new(123.0, 77.0)];
        for size in sizes {
            for ix in 0..=20 {
                for iy in 0..=20 {
                    let norm = Vec2::new(ix as f32 / 20.0, iy as f32 / 20.0);
                    let back = pixel_to_normalized(normalized_to_pixel(norm, size), size);
                    assert_abs_diff_eq!(back.x, norm.x, epsilon = 1e-5);
                    assert_abs_diff_eq!(back.y, norm.y, epsilon = 1e-5);
                }
            }
        }
    }

    #[test]
    fn test_square_buffer_is_strict() {
        let center = Vec2::new(100.0, 100.0);
        assert!(within_square_buffer(Vec2::new(129.9, 70.1), center, 30.0));
        assert!(!within_square_buffer(Vec2::new(130.0, 100.0), center, 30.0));
        assert!(!within_square_buffer(Vec2::new(100.0, 70.0), center, 30.0));
    }

    #[test]
    fn test_canvas_size_for_window() {
        assert_eq!(canvas_size_for_window(800.0, 30.0, 400.0), 400.0);
        assert_eq!(canvas_size_for_window(300.0, 30.0, 400.0), 270.0);
        assert_eq!(canvas_size_for_window(10.0, 30.0, 400.0), 0.0);
    }

    #[test]
    fn test_canvas_rect_local() {
        let rect = CanvasRect::new(15.0, 40.0, 400.0, 400.0);
        assert_eq!(rect.to_local(Vec2::new(15.0, 440.0)), Vec2::new(0.0, 400.0));
        assert!(rect.has_area());
        assert!(!CanvasRect::from_size(Vec2::ZERO).has_area());
    }
}
