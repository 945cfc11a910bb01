//! Geometrie-Kernel: Punkte auf der Bodenebene, Segmente, Toleranz-Vergleiche.
//!
//! Punkte sind `Vec3` mit `y == 0` (Kompatibilität zum 3D-Renderer),
//! gerechnet wird ausschließlich in der (x, z)-Ebene.

use glam::{Vec2, Vec3};

/// Punkt auf der Bodenebene (y ist immer 0).
pub type Point = Vec3;

/// Standard-Toleranz für alle "gleicher Punkt / gleiche Kante"-Vergleiche.
pub const EDGE_TOLERANCE: f32 = 0.01;

/// Erstellt einen Punkt auf der Bodenebene.
pub fn point(x: f32, z: f32) -> Point {
    Vec3::new(x, 0.0, z)
}

/// Projiziert einen Punkt in die (x, z)-Ebene.
pub fn ground(p: Point) -> Vec2 {
    Vec2::new(p.x, p.z)
}

/// Zwei Punkte gelten als gleich, wenn ihr Abstand höchstens `tol` beträgt.
pub fn points_equal(a: Point, b: Point, tol: f32) -> bool {
    ground(a).distance(ground(b)) <= tol
}

/// Strecke zwischen zwei aufeinanderfolgenden Ring-Punkten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Startpunkt
    pub start: Point,
    /// Endpunkt
    pub end: Point,
}

impl Segment {
    /// Erstellt ein neues Segment.
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Länge in der Bodenebene.
    pub fn length(&self) -> f32 {
        ground(self.start).distance(ground(self.end))
    }

    /// Mittelpunkt des Segments.
    pub fn midpoint(&self) -> Point {
        (self.start + self.end) * 0.5
    }
}

/// Prüft, ob zwei Segmente (in beliebiger Richtung) deckungsgleich sind.
pub fn segments_equal(e1: &Segment, e2: &Segment, tol: f32) -> bool {
    let same = points_equal(e1.start, e2.start, tol) && points_equal(e1.end, e2.end, tol);
    let flipped = points_equal(e1.start, e2.end, tol) && points_equal(e1.end, e2.start, tol);
    same || flipped
}

/// Orthogonale Projektion von `p` auf `seg`, auf die Segmentausdehnung begrenzt.
pub fn closest_point_on_segment(p: Point, seg: &Segment) -> Point {
    let a = ground(seg.start);
    let b = ground(seg.end);
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq < f32::EPSILON {
        return seg.start;
    }
    let t = ((ground(p) - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    let q = a + ab * t;
    point(q.x, q.y)
}

/// Abstand von `p` zum Segment.
pub fn distance_to_segment(p: Point, seg: &Segment) -> f32 {
    ground(p).distance(ground(closest_point_on_segment(p, seg)))
}

/// Fläche eines geschlossenen Rings (Shoelace, Vorzeichen verworfen).
pub fn polygon_area(ring: &[Point]) -> f32 {
    let twice: f32 = ring
        .windows(2)
        .map(|w| w[0].x * w[1].z - w[1].x * w[0].z)
        .sum();
    (twice * 0.5).abs()
}

/// Rastet einen Punkt komponentenweise auf das Raster `step` ein.
///
/// `step <= 0` deaktiviert das Einrasten.
pub fn snap_to_grid(p: Point, step: f32) -> Point {
    if step <= 0.0 {
        return p;
    }
    point((p.x / step).round() * step, (p.z / step).round() * step)
}

/// Achsenparallele Bounding-Box eines Rings als (min, max) in der Bodenebene.
pub fn polygon_bounds(ring: &[Point]) -> Option<(Vec2, Vec2)> {
    let first = ground(*ring.first()?);
    Some(ring.iter().fold((first, first), |(min, max), p| {
        let g = ground(*p);
        (min.min(g), max.max(g))
    }))
}

/// Zentrum der Bounding-Box (Label-Position).
pub fn polygon_center(ring: &[Point]) -> Option<Point> {
    let (min, max) = polygon_bounds(ring)?;
    let c = (min + max) * 0.5;
    Some(point(c.x, c.y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn unit_square_has_area_one() {
        let ring = [
            point(0.0, 0.0),
            point(1.0, 0.0),
            point(1.0, 1.0),
            point(0.0, 1.0),
            point(0.0, 0.0),
        ];
        assert_relative_eq!(polygon_area(&ring), 1.0);
    }

    #[test]
    fn area_ignores_winding() {
        let ring = [
            point(0.0, 0.0),
            point(0.0, 3.0),
            point(4.0, 3.0),
            point(4.0, 0.0),
            point(0.0, 0.0),
        ];
        assert_relative_eq!(polygon_area(&ring), 12.0);
    }

    #[test]
    fn segments_equal_in_both_directions() {
        let a = Segment::new(point(4.0, 0.0), point(4.0, 3.0));
        let b = Segment::new(point(4.005, 3.0), point(4.0, 0.0));
        assert!(segments_equal(&a, &b, EDGE_TOLERANCE));
        let c = Segment::new(point(4.0, 0.0), point(4.0, 3.5));
        assert!(!segments_equal(&a, &c, EDGE_TOLERANCE));
    }

    #[test]
    fn closest_point_is_clamped_to_segment() {
        let seg = Segment::new(point(0.0, 0.0), point(10.0, 0.0));
        assert_eq!(closest_point_on_segment(point(5.0, 3.0), &seg), point(5.0, 0.0));
        assert_eq!(closest_point_on_segment(point(-2.0, 1.0), &seg), point(0.0, 0.0));
        assert_eq!(closest_point_on_segment(point(12.0, -1.0), &seg), point(10.0, 0.0));
        assert_relative_eq!(distance_to_segment(point(5.0, 3.0), &seg), 3.0);
    }

    #[test]
    fn degenerate_segment_projects_to_start() {
        let seg = Segment::new(point(1.0, 1.0), point(1.0, 1.0));
        assert_eq!(closest_point_on_segment(point(3.0, 1.0), &seg), point(1.0, 1.0));
    }

    #[test]
    fn snap_rounds_to_nearest_step() {
        assert_eq!(snap_to_grid(point(0.2, 0.1), 0.5), point(0.0, 0.0));
        assert_eq!(snap_to_grid(point(0.26, 1.74), 0.5), point(0.5, 1.5));
        assert_eq!(snap_to_grid(point(0.26, 1.74), 0.0), point(0.26, 1.74));
    }

    #[test]
    fn bounds_center_of_rectangle() {
        let ring = [point(0.0, 0.0), point(4.0, 0.0), point(4.0, 3.0), point(0.0, 3.0)];
        assert_eq!(polygon_center(&ring), Some(point(2.0, 1.5)));
        assert_eq!(polygon_center(&[]), None);
    }
}
