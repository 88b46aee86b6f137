//! Configuration for the layout engine

use super::error::LayoutError;
use super::types::{BoundingBox, Point};

/// What to do when a solve collapses onto a line (zero-width or zero-height
/// bounding box) and cannot be scaled into the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegeneratePolicy {
    /// Substitute the default trapezoid and keep going
    #[default]
    Fallback,
    /// Fail with `LayoutError::DegenerateGeometry`
    Error,
}

/// Configuration options for layout computation
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    pub canvas_width: f64,
    pub canvas_height: f64,

    /// Padding on all four sides of the drawing region
    pub padding: f64,

    /// Share of the padded region a scaled solve may occupy
    pub fill_ratio: f64,

    /// Radius of interior-angle arcs
    pub arc_radius: f64,

    /// Distance beyond the arc at which angle labels are anchored
    pub arc_label_offset: f64,

    /// Distance side labels are pushed away from the shape
    pub side_label_offset: f64,

    /// Distance vertex names are pushed away from the shape
    pub vertex_label_offset: f64,

    /// Angle at C (degrees) assumed by the generic solver when unknown
    pub default_angle_c: f64,

    /// Angle at D (degrees) used to place A when the circles do not meet
    pub fallback_angle_d: f64,

    /// Side length assumed when no side length is known at all
    pub fallback_side_length: f64,

    pub degenerate_policy: DegeneratePolicy,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas_width: 700.0,
            canvas_height: 500.0,
            padding: 80.0,
            fill_ratio: 0.8,
            arc_radius: 40.0,
            arc_label_offset: 25.0,
            side_label_offset: 45.0,
            vertex_label_offset: 25.0,
            default_angle_c: 70.0,
            fallback_angle_d: 110.0,
            fallback_side_length: 20.0,
            degenerate_policy: DegeneratePolicy::Fallback,
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the canvas size
    pub fn with_canvas_size(mut self, width: f64, height: f64) -> Self {
        self.canvas_width = width;
        self.canvas_height = height;
        self
    }

    /// Set the padding around the drawing region
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Set the angle-arc radius
    pub fn with_arc_radius(mut self, radius: f64) -> Self {
        self.arc_radius = radius;
        self
    }

    /// Set the degenerate-geometry policy
    pub fn with_degenerate_policy(mut self, policy: DegeneratePolicy) -> Self {
        self.degenerate_policy = policy;
        self
    }

    /// The whole canvas
    pub fn canvas(&self) -> BoundingBox {
        BoundingBox::new(0.0, 0.0, self.canvas_width, self.canvas_height)
    }

    /// The padded drawing region
    pub fn content_area(&self) -> BoundingBox {
        BoundingBox::new(
            self.padding,
            self.padding,
            self.canvas_width - 2.0 * self.padding,
            self.canvas_height - 2.0 * self.padding,
        )
    }

    pub fn content_center(&self) -> Point {
        self.content_area().center()
    }

    /// Check that the canvas is finite and the padded region is non-empty
    pub fn validate(&self) -> Result<(), LayoutError> {
        let area = self.content_area();
        let usable = self.canvas_width.is_finite()
            && self.canvas_height.is_finite()
            && self.padding.is_finite()
            && self.padding >= 0.0
            && area.width > 0.0
            && area.height > 0.0;
        if usable {
            Ok(())
        } else {
            Err(LayoutError::InvalidCanvas {
                width: self.canvas_width,
                height: self.canvas_height,
                padding: self.padding,
            })
        }
    }
}
