use crate::core::geometry::points_equal;
use crate::core::Point;

/// Mindestanzahl gesetzter Punkte, ab der ein Schließ-Klick den Raum anlegen will.
/// Weniger als 3 verschiedene Punkte lehnt der Raum-Bestand anschließend ab.
pub const MIN_POINTS_TO_CLOSE: usize = 2;

/// Entwurf eines Polygon-Raums.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonDraft {
    points: Vec<Point>,
    cursor: Option<Point>,
    last_click_ms: u64,
}

impl PolygonDraft {
    /// Beginnt einen Entwurf mit dem ersten Punkt.
    pub fn start(first: Point, time_ms: u64) -> Self {
        Self {
            points: vec![first],
            cursor: None,
            last_click_ms: time_ms,
        }
    }

    /// Alle bisher gesetzten Punkte.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Letzte Cursor-Position (für die Gummiband-Linie).
    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    pub fn set_cursor(&mut self, pos: Point) {
        self.cursor = Some(pos);
    }

    /// Hängt einen Punkt an. Ein Duplikat des letzten Punkts wird ignoriert,
    /// zählt aber als Klick für die Doppelklick-Erkennung.
    pub fn push(&mut self, pos: Point, tol: f32, time_ms: u64) -> bool {
        self.last_click_ms = time_ms;
        if self
            .points
            .last()
            .is_some_and(|last| points_equal(*last, pos, tol))
        {
            return false;
        }
        self.points.push(pos);
        true
    }

    /// Gibt zurück, ob ein Klick auf `pos` das Polygon schließt.
    pub fn is_closing_click(&self, pos: Point, closing_tol: f32) -> bool {
        self.points.len() >= MIN_POINTS_TO_CLOSE
            && self
                .points
                .first()
                .is_some_and(|first| points_equal(*first, pos, closing_tol))
    }

    /// Gibt zurück, ob ein Klick auf `pos` zur Zeit `time_ms` einen Doppelklick
    /// auf den zuletzt gesetzten Punkt abschließt.
    pub fn is_finishing_double_click(
        &self,
        pos: Point,
        time_ms: u64,
        window_ms: u64,
        radius: f32,
    ) -> bool {
        self.points.len() >= MIN_POINTS_TO_CLOSE
            && time_ms.saturating_sub(self.last_click_ms) <= window_ms
            && self
                .points
                .last()
                .is_some_and(|last| points_equal(*last, pos, radius))
    }

    /// Schließ-Hinweis: Cursor liegt auf dem Startpunkt und das Polygon ist schließbar.
    pub fn closing_hint(&self, closing_tol: f32) -> bool {
        self.cursor
            .is_some_and(|cursor| self.is_closing_click(cursor, closing_tol))
    }
}
