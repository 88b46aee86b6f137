//! Validated quadrilateral document
//!
//! Vertex `i` sits between side `i - 1` and side `i`; side `i` joins vertex
//! `i` to vertex `(i + 1) % 4`. For `ABCD` the sides are `[AB, BC, CD, DA]`
//! and the angles `[∠A, ∠B, ∠C, ∠D]`.

use serde::{Deserialize, Serialize};

use crate::layout::Point;

use super::measurement::Measurement;

/// One of the four sides
#[derive(Debug, Clone, PartialEq)]
pub struct Side {
    pub measurement: Measurement,
    /// Display text, e.g. `"250 m"` or `"x"`
    pub label: Option<String>,
    pub show_label: bool,
}

impl Side {
    pub fn new(length: Option<f64>, label: Option<String>) -> Self {
        Self {
            measurement: Measurement::side(length, label.as_deref()),
            label,
            show_label: true,
        }
    }

    /// A side with a known length and no display text
    pub fn length(length: f64) -> Self {
        Self::new(Some(length), None)
    }

    /// A side described only by its display text
    pub fn labelled(label: impl Into<String>) -> Self {
        Self::new(None, Some(label.into()))
    }

    pub fn unknown() -> Self {
        Self::new(None, None)
    }

    pub fn with_show_label(mut self, show: bool) -> Self {
        self.show_label = show;
        self
    }

    /// Text to draw next to the side, if any
    pub fn display_label(&self) -> Option<&str> {
        self.label.as_deref().filter(|_| self.show_label)
    }
}

/// The interior angle at one vertex
#[derive(Debug, Clone, PartialEq)]
pub struct Angle {
    pub measurement: Measurement,
    /// Display text, e.g. `"36°"` or `"θ"`
    pub label: Option<String>,
    pub show_angle: bool,
}

impl Angle {
    pub fn new(value: Option<f64>, label: Option<String>) -> Self {
        Self {
            measurement: Measurement::angle(value, label.as_deref()),
            label,
            show_angle: true,
        }
    }

    pub fn degrees(value: f64) -> Self {
        Self::new(Some(value), None)
    }

    pub fn labelled(label: impl Into<String>) -> Self {
        Self::new(None, Some(label.into()))
    }

    pub fn unknown() -> Self {
        Self::new(None, None)
    }

    pub fn with_show_angle(mut self, show: bool) -> Self {
        self.show_angle = show;
        self
    }

    /// Whether an arc marker should be drawn at this vertex
    pub fn is_visible(&self) -> bool {
        self.show_angle && !self.measurement.is_unknown()
    }

    /// Text for the arc marker: the label, or the value in degrees
    pub fn display_label(&self) -> Option<String> {
        match (&self.label, &self.measurement) {
            (Some(label), _) => Some(label.clone()),
            (None, Measurement::Known(value)) => Some(format!("{}°", value)),
            _ => None,
        }
    }
}

/// Stroke pattern for diagonals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
}

/// A line between two non-adjacent (or adjacent) vertices
#[derive(Debug, Clone, PartialEq)]
pub struct Diagonal {
    pub from: usize,
    pub to: usize,
    pub label: Option<String>,
    pub show_label: bool,
    pub style: LineStyle,
}

impl Diagonal {
    pub fn new(from: usize, to: usize) -> Self {
        Self {
            from,
            to,
            label: None,
            show_label: false,
            style: LineStyle::Solid,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self.show_label = true;
        self
    }

    pub fn with_style(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }

    pub fn display_label(&self) -> Option<&str> {
        self.label.as_deref().filter(|_| self.show_label)
    }
}

/// Presentation options passed through to the renderer
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayOptions {
    pub show_vertices: bool,
    pub highlight_vertex: Option<usize>,
    pub highlight_side: Option<usize>,
    pub highlight_diagonal: Option<usize>,
    pub caption: Option<String>,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_vertices: true,
            highlight_vertex: None,
            highlight_side: None,
            highlight_diagonal: None,
            caption: None,
        }
    }
}

/// A partially measured quadrilateral
#[derive(Debug, Clone, PartialEq)]
pub struct QuadrilateralSpec {
    pub vertices: [String; 4],
    pub sides: [Side; 4],
    pub angles: [Angle; 4],
    pub diagonals: Vec<Diagonal>,
    /// Canvas coordinates used verbatim, bypassing the solver
    pub vertex_positions: Option<[Point; 4]>,
    pub display: DisplayOptions,
}

impl QuadrilateralSpec {
    pub fn new(vertices: [&str; 4], sides: [Side; 4], angles: [Angle; 4]) -> Self {
        Self {
            vertices: vertices.map(str::to_string),
            sides,
            angles,
            diagonals: vec![],
            vertex_positions: None,
            display: DisplayOptions::default(),
        }
    }

    pub fn with_diagonal(mut self, diagonal: Diagonal) -> Self {
        self.diagonals.push(diagonal);
        self
    }

    pub fn with_vertex_positions(mut self, positions: [Point; 4]) -> Self {
        self.vertex_positions = Some(positions);
        self
    }

    /// Two-letter name of side `i`, e.g. `"DA"`
    pub fn side_name(&self, i: usize) -> String {
        format!("{}{}", self.vertices[i % 4], self.vertices[(i + 1) % 4])
    }
}
