//! Text anchor placement around the solved outline

use super::types::Point;

/// Mean of the four vertices
pub fn centroid(positions: &[Point; 4]) -> Point {
    let (sx, sy) = positions
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Point::new(sx / 4.0, sy / 4.0)
}

/// Move `point` by `distance` directly away from `origin`.
/// A point on top of `origin` has no direction and stays put.
pub fn push_away(point: Point, origin: Point, distance: f64) -> Point {
    if point.distance_to(origin) < 1e-9 {
        return point;
    }
    point.offset(origin.direction_to(point), distance)
}

pub fn side_anchor(positions: &[Point; 4], side: usize, offset: f64) -> Point {
    let start = positions[side % 4];
    let end = positions[(side + 1) % 4];
    push_away(start.midpoint(end), centroid(positions), offset)
}

pub fn vertex_anchor(positions: &[Point; 4], vertex: usize, offset: f64) -> Point {
    push_away(positions[vertex % 4], centroid(positions), offset)
}

pub fn diagonal_anchor(positions: &[Point; 4], from: usize, to: usize) -> Point {
    positions[from % 4].midpoint(positions[to % 4])
}
