//! Interior-angle arc markers
//!
//! For each vertex the two neighbour directions are measured with `atan2`.
//! The arc starts on the ray towards the previous vertex and ends on the ray
//! towards the next one. Of the two arcs joining those rays, the one inside
//! the outline is picked from the outline's orientation: a `Clockwise`
//! outline (positive shoelace sum) has its interior on the side of increasing
//! direction angle at every vertex, a `CounterClockwise` one on the side of
//! decreasing angle. Reflex vertices get the large arc.

use std::f64::consts::{PI, TAU};

use crate::parser::ast::Angle;

use super::config::LayoutConfig;
use super::types::{AngleArc, Orientation, Point};

/// Wrap an angle into `(-π, π]`
pub fn normalize(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped > PI {
        wrapped - TAU
    } else {
        wrapped
    }
}

/// Signed rotation from the previous-vertex ray to the next-vertex ray
/// through the interior of the outline, in `(-2π, 2π)`
fn interior_rotation(to_prev: f64, to_next: f64, orientation: Orientation) -> f64 {
    let diff = normalize(to_next - to_prev);
    if diff == 0.0 {
        return 0.0;
    }
    match orientation {
        Orientation::Clockwise if diff < 0.0 => diff + TAU,
        Orientation::CounterClockwise if diff > 0.0 => diff - TAU,
        _ => diff,
    }
}

/// Interior angle at vertex `i` in degrees, reflex angles included
pub fn interior_degrees(positions: &[Point; 4], i: usize, orientation: Orientation) -> f64 {
    let vertex = i % 4;
    let here = positions[vertex];
    let to_prev = here.direction_to(positions[(vertex + 3) % 4]);
    let to_next = here.direction_to(positions[(vertex + 1) % 4]);
    interior_rotation(to_prev, to_next, orientation).abs().to_degrees()
}

/// Arc geometry at vertex `i`
pub fn compute_arc(
    positions: &[Point; 4],
    i: usize,
    orientation: Orientation,
    config: &LayoutConfig,
    label: Option<String>,
) -> AngleArc {
    let vertex = i % 4;
    let here = positions[vertex];
    let to_prev = here.direction_to(positions[(vertex + 3) % 4]);
    let to_next = here.direction_to(positions[(vertex + 1) % 4]);

    let rotation = interior_rotation(to_prev, to_next, orientation);
    let bisector = to_prev + rotation / 2.0;
    let radius = config.arc_radius;

    AngleArc {
        vertex,
        center: here,
        radius,
        start_angle: to_prev,
        end_angle: to_next,
        start: here.offset(to_prev, radius),
        end: here.offset(to_next, radius),
        sweep: orientation.is_clockwise(),
        large_arc: rotation.abs() > PI,
        interior_degrees: rotation.abs().to_degrees(),
        label,
        label_anchor: here.offset(bisector, radius + config.arc_label_offset),
    }
}

/// Arcs for every vertex whose angle is shown
pub fn compute_arcs(
    positions: &[Point; 4],
    angles: &[Angle; 4],
    orientation: Orientation,
    config: &LayoutConfig,
) -> Vec<AngleArc> {
    angles
        .iter()
        .enumerate()
        .filter(|(_, angle)| angle.is_visible())
        .map(|(i, angle)| compute_arc(positions, i, orientation, config, angle.display_label()))
        .collect()
}
