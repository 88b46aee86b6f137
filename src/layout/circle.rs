//! Circle–circle intersection (chord midpoint method)

use super::types::Point;

/// Intersection points of two circles.
///
/// Returns no points when the circles are disjoint, one is nested inside the
/// other, or they are concentric; one point when they touch; two otherwise.
pub fn intersect(center1: Point, r1: f64, center2: Point, r2: f64) -> Vec<Point> {
    let dx = center2.x - center1.x;
    let dy = center2.y - center1.y;
    let d = dx.hypot(dy);

    if d > r1 + r2 || d < (r1 - r2).abs() || d == 0.0 {
        return vec![];
    }

    // Distance from center1 to the chord midpoint, and half the chord
    let a = (r1 * r1 - r2 * r2 + d * d) / (2.0 * d);
    let h_squared = r1 * r1 - a * a;
    if h_squared < 0.0 {
        return vec![];
    }
    let h = h_squared.sqrt();

    let px = center1.x + a * dx / d;
    let py = center1.y + a * dy / d;

    if h == 0.0 {
        return vec![Point::new(px, py)];
    }

    vec![
        Point::new(px + h * dy / d, py - h * dx / d),
        Point::new(px - h * dy / d, py + h * dx / d),
    ]
}

/// Choose one intersection for the fourth vertex.
///
/// Prefers the highest candidate lying above the x axis, otherwise the first.
/// This assumes the caller's frame puts the reference edge on the x axis with
/// the shape built upward (D at the origin, C on +x). Candidates from any
/// other frame may pick the wrong side of the edge.
pub fn pick_upper(candidates: &[Point]) -> Option<Point> {
    candidates
        .iter()
        .copied()
        .filter(|p| p.y > 0.0)
        .max_by(|a, b| a.y.total_cmp(&b.y))
        .or_else(|| candidates.first().copied())
}
