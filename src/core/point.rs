//! 2D-Punkt-Werttyp der Kurvenauswertung.

use glam::Vec2;

/// Unveränderlicher 2D-Punkt
///
/// Der atomare Baustein aller Geometrie im Kern. Ein verschobener
/// Kontrollpunkt wird durch einen neuen Wert repräsentiert; die
/// Auswertung liest Punkte immer als Wert zum Lesezeitpunkt.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Koordinate in der ersten Dimension
    pub x: f32,
    /// Koordinate in der zweiten Dimension
    pub y: f32,
}

impl Point {
    /// Erstellt einen neuen Punkt
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Lineare Interpolation zwischen `self` und `other`.
    ///
    /// t=0 ergibt `self`, t=1 ergibt `other`. t wird nicht auf [0, 1]
    /// geklemmt — Werte außerhalb extrapolieren entlang der Geraden.
    pub fn lerp(self, other: Point, t: f32) -> Point {
        Point::new(
            t * (other.x - self.x) + self.x,
            t * (other.y - self.y) + self.y,
        )
    }
}

impl From<Vec2> for Point {
    fn from(v: Vec2) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<Point> for Vec2 {
    fn from(p: Point) -> Self {
        Vec2::new(p.x, p.y)
    }
}
