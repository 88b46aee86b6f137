//! Consistency checks between a document and its drawing.
//!
//! Runs after resolution to point out measurements the drawing does not
//! honour: angle sets that cannot belong to a quadrilateral, known angles or
//! side lengths the chosen strategy had to bend, and outlines that cross
//! themselves. None of these stop rendering.

use std::fmt;

use crate::parser::ast::QuadrilateralSpec;
use crate::parser::measurement::{extract_angle_values, extract_side_lengths};

use super::arcs;
use super::types::{Point, SolvedLayout};

/// Tolerance for angle comparisons, in degrees
const ANGLE_TOLERANCE: f64 = 0.5;

/// Relative tolerance for reproduced side lengths
const LENGTH_TOLERANCE: f64 = 1e-3;

/// A lint warning about a drawing defect
#[derive(Debug)]
pub struct LintWarning {
    pub category: LintCategory,
    pub message: String,
}

/// Category of lint defect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintCategory {
    Angle,
    SideLength,
    SelfIntersection,
}

impl fmt::Display for LintCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintCategory::Angle => write!(f, "angle"),
            LintCategory::SideLength => write!(f, "side-length"),
            LintCategory::SelfIntersection => write!(f, "self-intersection"),
        }
    }
}

impl fmt::Display for LintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "warning[{}]: {}", self.category, self.message)
    }
}

/// Run all lint checks on a resolved layout.
pub fn check(spec: &QuadrilateralSpec, layout: &SolvedLayout) -> Vec<LintWarning> {
    let mut warnings = Vec::new();
    check_angle_sum(spec, &mut warnings);
    check_drawn_angles(spec, layout, &mut warnings);
    check_side_lengths(spec, layout, &mut warnings);
    check_self_intersection(spec, layout, &mut warnings);
    warnings
}

fn check_angle_sum(spec: &QuadrilateralSpec, warnings: &mut Vec<LintWarning>) {
    let angles = extract_angle_values(&spec.angles);
    let known: Vec<f64> = angles.iter().flatten().copied().collect();

    let sum: f64 = known.iter().sum();
    let complete = known.len() == 4;
    if (complete && (sum - 360.0).abs() > ANGLE_TOLERANCE) || (!complete && sum >= 360.0) {
        let names = (0..4)
            .filter(|&i| angles[i].is_some())
            .map(|i| format!("∠{}", spec.vertices[i]))
            .collect::<Vec<_>>()
            .join(" + ");
        warnings.push(LintWarning {
            category: LintCategory::Angle,
            message: format!(
                "{} = {}°, but the interior angles of a quadrilateral sum to 360°",
                names, sum
            ),
        });
    }
}

fn check_drawn_angles(
    spec: &QuadrilateralSpec,
    layout: &SolvedLayout,
    warnings: &mut Vec<LintWarning>,
) {
    let angles = extract_angle_values(&spec.angles);
    for (i, expected) in angles.iter().enumerate() {
        let Some(expected) = expected else {
            continue;
        };
        let drawn = arcs::interior_degrees(&layout.positions, i, layout.orientation);
        if (drawn - expected).abs() > ANGLE_TOLERANCE {
            warnings.push(LintWarning {
                category: LintCategory::Angle,
                message: format!(
                    "∠{} is given as {}° but drawn as {:.1}°",
                    spec.vertices[i], expected, drawn
                ),
            });
        }
    }
}

fn check_side_lengths(
    spec: &QuadrilateralSpec,
    layout: &SolvedLayout,
    warnings: &mut Vec<LintWarning>,
) {
    // Only scaled solves have a model length to compare against
    let Some(scale) = layout.scale else {
        return;
    };
    let lengths = extract_side_lengths(&spec.sides);
    for (i, expected) in lengths.iter().enumerate() {
        let Some(expected) = expected else {
            continue;
        };
        let drawn = layout.positions[i].distance_to(layout.positions[(i + 1) % 4]) / scale;
        if ((drawn - expected) / expected).abs() > LENGTH_TOLERANCE {
            warnings.push(LintWarning {
                category: LintCategory::SideLength,
                message: format!(
                    "side {} is given as {} but drawn as {:.3}",
                    spec.side_name(i),
                    expected,
                    drawn
                ),
            });
        }
    }
}

fn check_self_intersection(
    spec: &QuadrilateralSpec,
    layout: &SolvedLayout,
    warnings: &mut Vec<LintWarning>,
) {
    let p = &layout.positions;
    for (a, b) in [(0, 2), (1, 3)] {
        if segments_intersect(&p[a], &p[(a + 1) % 4], &p[b], &p[(b + 1) % 4]) {
            warnings.push(LintWarning {
                category: LintCategory::SelfIntersection,
                message: format!(
                    "outline crosses itself: side {} intersects side {}",
                    spec.side_name(a),
                    spec.side_name(b)
                ),
            });
        }
    }
}

/// Check if two line segments intersect using parametric intersection.
fn segments_intersect(a1: &Point, a2: &Point, b1: &Point, b2: &Point) -> bool {
    let d1x = a2.x - a1.x;
    let d1y = a2.y - a1.y;
    let d2x = b2.x - b1.x;
    let d2y = b2.y - b1.y;

    let denom = d1x * d2y - d1y * d2x;

    // Parallel sides never cross in a way worth reporting
    if denom.abs() < 1e-10 {
        return false;
    }

    let dx = b1.x - a1.x;
    let dy = b1.y - a1.y;

    let t = (dx * d2y - dy * d2x) / denom;
    let u = (dx * d1y - dy * d1x) / denom;

    (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u)
}
