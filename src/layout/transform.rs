//! Model-to-canvas transformation for solved outlines.
//!
//! The solvers work in model space: side lengths in the document's own units,
//! y pointing up. The renderer wants canvas space: a fixed-size drawing area,
//! y pointing down. [`ScaleCenterTransform`] bridges the two with a pure
//! similarity transform:
//!
//! 1. Take the axis-aligned bounding box of the four solved vertices
//! 2. Scale uniformly so the box fills `fill_ratio` of the padded region in
//!    its tighter dimension
//! 3. Move the box center onto the center of the padded region
//! 4. Mirror vertically
//!
//! ```text
//! x' = cx + (x - bx) * s
//! y' = cy - (y - by) * s
//! ```
//!
//! Distances scale by `s`, and ratios and angles are preserved (the mirror
//! reverses winding, which the arc computation accounts for).

use super::config::LayoutConfig;
use super::error::LayoutError;
use super::types::{BoundingBox, Point};

/// Below this extent a bounding box is treated as having none
const MIN_EXTENT: f64 = 1e-9;

/// Uniform scale plus translation plus y-reflection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleCenterTransform {
    /// Canvas units per model unit
    pub scale: f64,
    /// Center of the model-space bounding box
    pub source_center: Point,
    /// Center of the canvas drawing region
    pub target_center: Point,
}

impl ScaleCenterTransform {
    /// Fit a set of model-space points into the configured canvas.
    ///
    /// # Errors
    /// `LayoutError::InvalidCanvas` when the padded drawing region is empty.
    /// `LayoutError::DegenerateGeometry` when the points are collinear along
    /// an axis (zero-width or zero-height box) or not finite.
    pub fn fit(points: &[Point], config: &LayoutConfig) -> Result<Self, LayoutError> {
        config.validate()?;
        let bounds = BoundingBox::from_points(points)
            .ok_or_else(|| LayoutError::degenerate(0.0, 0.0))?;

        let finite = points.iter().all(Point::is_finite);
        if !finite || !(bounds.width > MIN_EXTENT) || !(bounds.height > MIN_EXTENT) {
            return Err(LayoutError::degenerate(bounds.width, bounds.height));
        }

        let area = config.content_area();
        let scale_x = area.width * config.fill_ratio / bounds.width;
        let scale_y = area.height * config.fill_ratio / bounds.height;

        Ok(Self {
            scale: scale_x.min(scale_y),
            source_center: bounds.center(),
            target_center: area.center(),
        })
    }

    /// Map a model-space point into canvas space
    pub fn transform_point(&self, point: Point) -> Point {
        Point {
            x: self.target_center.x + (point.x - self.source_center.x) * self.scale,
            y: self.target_center.y - (point.y - self.source_center.y) * self.scale,
        }
    }

    /// Map all four vertices
    pub fn transform_all(&self, points: &[Point; 4]) -> [Point; 4] {
        points.map(|p| self.transform_point(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn kite() -> [Point; 4] {
        [
            Point::new(0.0, 3.0),
            Point::new(2.0, 5.5),
            Point::new(7.0, 1.0),
            Point::new(1.5, -2.0),
        ]
    }

    #[test]
    fn test_fills_tighter_dimension() {
        let config = LayoutConfig::default();
        // 10 x 2 box: width is the binding dimension
        let points = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 2.0),
            Point::new(0.0, 2.0),
        ];
        let t = ScaleCenterTransform::fit(&points, &config).unwrap();
        assert_relative_eq!(t.scale, 540.0 * 0.8 / 10.0, max_relative = 1e-12);

        let canvas = t.transform_all(&points);
        let bounds = BoundingBox::from_points(&canvas).unwrap();
        assert_relative_eq!(bounds.width, 432.0, max_relative = 1e-12);
        assert_abs_diff_eq!(bounds.center().x, 350.0, epsilon = 1e-9);
        assert_abs_diff_eq!(bounds.center().y, 250.0, epsilon = 1e-9);
    }

    #[test]
    fn test_never_scales_negatively() {
        let config = LayoutConfig::default().with_padding(400.0);
        let err = ScaleCenterTransform::fit(&kite(), &config).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidCanvas { .. }));
    }

    #[test]
    fn test_flips_y_axis() {
        let config = LayoutConfig::default();
        let points = kite();
        let t = ScaleCenterTransform::fit(&points, &config).unwrap();
        let canvas = t.transform_all(&points);
        // B is the highest model point, so it is the topmost canvas point
        let top = canvas
            .iter()
            .enumerate()
            .min_by(|a, b| a.1.y.total_cmp(&b.1.y))
            .map(|(i, _)| i);
        assert_eq!(top, Some(1));
    }

    #[test]
    fn test_preserves_distance_ratios() {
        let config = LayoutConfig::default();
        let raw = kite();
        let t = ScaleCenterTransform::fit(&raw, &config).unwrap();
        let canvas = t.transform_all(&raw);

        let pairs = [(0, 1), (1, 2), (2, 3), (3, 0), (0, 2), (1, 3)];
        for &(i, j) in &pairs {
            for &(k, l) in &pairs {
                let raw_ratio = raw[i].distance_to(raw[j]) / raw[k].distance_to(raw[l]);
                let canvas_ratio =
                    canvas[i].distance_to(canvas[j]) / canvas[k].distance_to(canvas[l]);
                assert_relative_eq!(raw_ratio, canvas_ratio, max_relative = 1e-9);
            }
        }
        for &(i, j) in &pairs {
            assert_relative_eq!(
                canvas[i].distance_to(canvas[j]),
                raw[i].distance_to(raw[j]) * t.scale,
                max_relative = 1e-9
            );
        }
    }

    #[test]
    fn test_collinear_points_are_degenerate() {
        let config = LayoutConfig::default();
        let flat = [
            Point::new(0.0, 1.0),
            Point::new(3.0, 1.0),
            Point::new(5.0, 1.0),
            Point::new(9.0, 1.0),
        ];
        let err = ScaleCenterTransform::fit(&flat, &config).unwrap_err();
        assert_eq!(err, LayoutError::degenerate(9.0, 0.0));
    }

    #[test]
    fn test_non_finite_points_are_degenerate() {
        let config = LayoutConfig::default();
        let mut points = kite();
        points[2] = Point::new(f64::NAN, 1.0);
        assert!(matches!(
            ScaleCenterTransform::fit(&points, &config),
            Err(LayoutError::DegenerateGeometry { .. })
        ));
    }
}
