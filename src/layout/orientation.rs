//! Winding order of a quadrilateral outline

use super::types::{Orientation, Point};

/// Shoelace edge sum `Σ (x[i+1] - x[i]) * (y[i+1] + y[i])`, twice the
/// signed area with the sign reversed
pub fn shoelace_sum(positions: &[Point; 4]) -> f64 {
    (0..4)
        .map(|i| {
            let a = positions[i];
            let b = positions[(i + 1) % 4];
            (b.x - a.x) * (b.y + a.y)
        })
        .sum()
}

/// Positive shoelace sum means `Clockwise`.
///
/// The sum is computed on whatever coordinates it is given. On the canvas
/// (y down) a `Clockwise` outline therefore runs counter-clockwise on screen;
/// the arc computation only relies on the label being consistent.
pub fn is_clockwise(positions: &[Point; 4]) -> bool {
    shoelace_sum(positions) > 0.0
}

pub fn detect(positions: &[Point; 4]) -> Orientation {
    if is_clockwise(positions) {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> [Point; 4] {
        [
            Point::new(0.0, 0.0),
            Point::new(0.5, 4.0),
            Point::new(6.0, 3.0),
            Point::new(5.0, -1.0),
        ]
    }

    fn reversed(p: [Point; 4]) -> [Point; 4] {
        [p[3], p[2], p[1], p[0]]
    }

    #[test]
    fn test_known_windings() {
        // y-up clockwise: up, right, down
        assert_eq!(detect(&quad()), Orientation::Clockwise);
        assert_eq!(detect(&reversed(quad())), Orientation::CounterClockwise);
    }

    #[test]
    fn test_invariant_under_scale_and_translation() {
        let base = quad();
        for (scale, dx, dy) in [(0.01, 0.0, 0.0), (3.5, -40.0, 12.0), (250.0, 1e3, -7.0)] {
            let moved = base.map(|p| Point::new(p.x * scale + dx, p.y * scale + dy));
            assert_eq!(is_clockwise(&moved), is_clockwise(&base));
            assert_eq!(is_clockwise(&reversed(moved)), is_clockwise(&reversed(base)));
        }
    }

    #[test]
    fn test_reversal_flips() {
        let base = quad();
        assert_ne!(is_clockwise(&base), is_clockwise(&reversed(base)));
        // Same outline starting at another vertex keeps its winding
        let rotated = [base[2], base[3], base[0], base[1]];
        assert_eq!(is_clockwise(&rotated), is_clockwise(&base));
    }

    #[test]
    fn test_y_flip_reverses_winding() {
        let base = quad();
        let flipped = base.map(|p| Point::new(p.x, -p.y));
        assert_ne!(detect(&flipped), detect(&base));
    }
}
