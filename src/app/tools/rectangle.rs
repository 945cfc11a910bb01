use crate::core::room_store::rectangle_corners;
use crate::core::Point;

/// Entwurf eines Rechteck-Raums: feste erste Ecke, zweite Ecke folgt dem Cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct RectangleDraft {
    start: Point,
    cursor: Point,
}

impl RectangleDraft {
    /// Beginnt ein Rechteck an `start`.
    pub fn start(start: Point) -> Self {
        Self {
            start,
            cursor: start,
        }
    }

    /// Erste (feste) Ecke.
    pub fn anchor(&self) -> Point {
        self.start
    }

    pub fn cursor(&self) -> Point {
        self.cursor
    }

    pub fn set_cursor(&mut self, pos: Point) {
        self.cursor = pos;
    }

    /// Die vier Ecken des Rechtecks zwischen Startpunkt und Cursor.
    pub fn corners(&self) -> [Point; 4] {
        rectangle_corners(self.start, self.cursor)
    }

    /// Gibt zurück, ob ein Rechteck bis `end` keine Fläche hätte.
    pub fn is_degenerate(&self, end: Point, tol: f32) -> bool {
        (end.x - self.start.x).abs() <= tol || (end.z - self.start.z).abs() <= tol
    }
}
