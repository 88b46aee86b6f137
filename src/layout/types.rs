//! Core types for the layout engine

use serde::{Deserialize, Serialize};

use crate::parser::ast::LineStyle;

/// A 2D point in the coordinate system
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Direction of the ray from this point towards `other`, in radians
    pub fn direction_to(&self, other: Point) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    /// The point `distance` away along the direction `angle` (radians)
    pub fn offset(&self, angle: f64, distance: f64) -> Point {
        Point {
            x: self.x + distance * angle.cos(),
            y: self.y + distance * angle.sin(),
        }
    }

    pub fn midpoint(&self, other: Point) -> Point {
        Point {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A bounding box representing the spatial extent of a set of points
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Smallest axis-aligned box containing every point
    pub fn from_points(points: &[Point]) -> Option<BoundingBox> {
        let first = points.first()?;
        let (mut min_x, mut max_x, mut min_y, mut max_y) = (first.x, first.x, first.y, first.y);
        for p in &points[1..] {
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }
        Some(BoundingBox::new(min_x, min_y, max_x - min_x, max_y - min_y))
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Center point of the bounding box
    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }

    /// Check if this bounding box contains a point
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.right()
            && point.y >= self.y
            && point.y <= self.bottom()
    }
}

/// Winding order of the four vertices, by the sign of the shoelace sum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
}

impl Orientation {
    pub fn is_clockwise(self) -> bool {
        self == Orientation::Clockwise
    }
}

/// How the vertex positions of a layout were obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resolution {
    /// Explicit `vertex_positions` used verbatim
    Override,
    /// No side length known; fixed trapezoid
    DefaultLayout,
    /// Exact chained placement around a single unknown side
    Sequential { missing_side: usize },
    /// Mean-length substitution plus circle intersection
    Generic,
    /// The solve collapsed to a line; fixed trapezoid substituted
    DegenerateFallback,
}

/// Geometry of one interior-angle marker
///
/// Angles are directions in canvas space (radians, y grows downward), so a
/// `sweep` of `true` means the arc runs towards increasing direction angles,
/// matching the SVG arc sweep flag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AngleArc {
    pub vertex: usize,
    pub center: Point,
    pub radius: f64,
    /// Direction towards the previous vertex
    pub start_angle: f64,
    /// Direction towards the next vertex
    pub end_angle: f64,
    pub start: Point,
    pub end: Point,
    /// `true` for clockwise outlines. Taken from the winding rather than from
    /// `end_angle - start_angle`, which picks the exterior arc on clockwise
    /// outlines.
    pub sweep: bool,
    pub large_arc: bool,
    /// Interior angle as drawn, in degrees
    pub interior_degrees: f64,
    pub label: Option<String>,
    pub label_anchor: Point,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VertexLayout {
    pub index: usize,
    pub name: String,
    pub position: Point,
    pub label_anchor: Point,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SideLayout {
    pub index: usize,
    pub start: Point,
    pub end: Point,
    pub label: Option<String>,
    pub label_anchor: Point,
}

impl SideLayout {
    pub fn length(&self) -> f64 {
        self.start.distance_to(self.end)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagonalLayout {
    pub index: usize,
    pub from: usize,
    pub to: usize,
    pub start: Point,
    pub end: Point,
    pub style: LineStyle,
    pub label: Option<String>,
    pub label_anchor: Point,
}

/// Result of resolving a quadrilateral document, in canvas coordinates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolvedLayout {
    /// Canvas extent, `0 0 width height`
    pub canvas: BoundingBox,
    pub positions: [Point; 4],
    pub orientation: Orientation,
    pub resolution: Resolution,
    /// Canvas units per model unit, when the solve was scaled into the canvas
    pub scale: Option<f64>,
    pub vertices: Vec<VertexLayout>,
    pub sides: Vec<SideLayout>,
    pub diagonals: Vec<DiagonalLayout>,
    pub arcs: Vec<AngleArc>,
}

impl SolvedLayout {
    /// Interior angle at vertex `i` in degrees, measured from the positions
    pub fn interior_angle(&self, i: usize) -> f64 {
        let here = self.positions[i % 4];
        let prev = self.positions[(i + 3) % 4];
        let next = self.positions[(i + 1) % 4];
        let (ax, ay) = (prev.x - here.x, prev.y - here.y);
        let (bx, by) = (next.x - here.x, next.y - here.y);
        let cos = (ax * bx + ay * by) / (ax.hypot(ay) * bx.hypot(by));
        cos.clamp(-1.0, 1.0).acos().to_degrees()
    }
}
