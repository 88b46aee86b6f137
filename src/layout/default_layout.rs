//! Fixed trapezoid for documents with no side lengths

use super::config::LayoutConfig;
use super::types::Point;

/// Vertex positions as fractions of the padded drawing region:
/// top-left, top-right, bottom-right, bottom-left.
const TRAPEZOID: [(f64, f64); 4] = [(0.25, 0.15), (0.75, 0.15), (0.85, 0.85), (0.15, 0.85)];

/// Canvas-space positions of the default trapezoid
pub fn positions(config: &LayoutConfig) -> [Point; 4] {
    let area = config.content_area();
    TRAPEZOID.map(|(fx, fy)| Point::new(area.x + area.width * fx, area.y + area.height * fy))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_default_canvas_positions() {
        let p = positions(&LayoutConfig::default());
        let expected = [(215.0, 131.0), (485.0, 131.0), (539.0, 369.0), (161.0, 369.0)];
        for (point, (x, y)) in p.iter().zip(expected) {
            assert_abs_diff_eq!(point.x, x, epsilon = 1e-9);
            assert_abs_diff_eq!(point.y, y, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_trapezoid_shape() {
        let [a, b, c, d] = positions(&LayoutConfig::default());
        assert!(a.y < d.y);
        assert!(a.x < b.x);
        assert!(c.y > b.y);
        assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-9);
        assert_abs_diff_eq!(c.y, d.y, epsilon = 1e-9);
    }

    #[test]
    fn test_stays_inside_content_area() {
        let config = LayoutConfig::default().with_canvas_size(300.0, 200.0).with_padding(10.0);
        let area = config.content_area();
        assert!(positions(&config).iter().all(|p| area.contains(*p)));
    }
}
