//! Geometry resolver for partially measured quadrilaterals
//!
//! Takes a validated [`QuadrilateralSpec`] and produces a [`SolvedLayout`]:
//! four canvas positions, the outline's orientation, interior-angle arcs and
//! label anchors. The pipeline is
//!
//! ```text
//! measurements -> strategy -> (sequential | generic | default) -> scale/center
//!              -> orientation -> arcs + labels
//! ```
//!
//! Explicit vertex positions skip everything up to the orientation step.

pub mod arcs;
pub mod circle;
pub mod config;
pub mod default_layout;
pub mod error;
pub mod generic;
pub mod labels;
pub mod lint;
pub mod orientation;
pub mod sequential;
pub mod strategy;
pub mod transform;
pub mod types;

pub use config::{DegeneratePolicy, LayoutConfig};
pub use error::LayoutError;
pub use strategy::{Placement, Strategy};
pub use transform::ScaleCenterTransform;
pub use types::*;

use tracing::{debug, warn};

use crate::parser::ast::QuadrilateralSpec;
use crate::parser::measurement::{extract_angle_values, extract_side_lengths};

/// Check the structural invariants the solvers rely on.
///
/// Documents coming through [`crate::parser::parse`] already satisfy these;
/// specs built in code may not.
pub fn validate(spec: &QuadrilateralSpec) -> Result<(), LayoutError> {
    for (index, diagonal) in spec.diagonals.iter().enumerate() {
        if diagonal.from > 3 || diagonal.to > 3 || diagonal.from == diagonal.to {
            return Err(LayoutError::InvalidDiagonal {
                index,
                from: diagonal.from,
                to: diagonal.to,
            });
        }
    }
    if let Some(positions) = &spec.vertex_positions {
        if let Some(index) = positions.iter().position(|p| !p.is_finite()) {
            return Err(LayoutError::NonFinitePosition { index });
        }
    }
    Ok(())
}

/// Resolve a document into canvas geometry.
///
/// Incomplete or inconsistent measurements never fail; they degrade to a less
/// exact drawing. The only errors are an unusable canvas
/// ([`LayoutConfig::validate`]), structural ones from [`validate`] and a
/// collapsed solve under [`DegeneratePolicy::Error`].
pub fn resolve(spec: &QuadrilateralSpec, config: &LayoutConfig) -> Result<SolvedLayout, LayoutError> {
    config.validate()?;
    validate(spec)?;

    let (positions, resolution, scale) = match spec.vertex_positions {
        Some(positions) => {
            debug!("using explicit vertex positions");
            (positions, Resolution::Override, None)
        }
        None => solve_positions(spec, config)?,
    };

    let orientation = orientation::detect(&positions);
    debug!(?resolution, ?orientation, ?scale, "resolved quadrilateral");

    Ok(assemble(spec, config, positions, orientation, resolution, scale))
}

fn solve_positions(
    spec: &QuadrilateralSpec,
    config: &LayoutConfig,
) -> Result<([Point; 4], Resolution, Option<f64>), LayoutError> {
    let lengths = extract_side_lengths(&spec.sides);
    let angles = extract_angle_values(&spec.angles);

    let strategy = strategy::classify(&lengths, &angles);
    debug!(?strategy, ?lengths, ?angles, "classified measurements");

    match strategy::solve(strategy, &lengths, &angles, config) {
        Placement::Canvas(positions) => Ok((positions, Resolution::DefaultLayout, None)),
        Placement::Model { points, resolution } => {
            match ScaleCenterTransform::fit(&points, config) {
                Ok(transform) => Ok((
                    transform.transform_all(&points),
                    resolution,
                    Some(transform.scale),
                )),
                Err(err) => match config.degenerate_policy {
                    DegeneratePolicy::Error => Err(err),
                    DegeneratePolicy::Fallback => {
                        warn!(%err, "solve collapsed, drawing the default trapezoid instead");
                        Ok((
                            default_layout::positions(config),
                            Resolution::DegenerateFallback,
                            None,
                        ))
                    }
                },
            }
        }
    }
}

fn assemble(
    spec: &QuadrilateralSpec,
    config: &LayoutConfig,
    positions: [Point; 4],
    orientation: Orientation,
    resolution: Resolution,
    scale: Option<f64>,
) -> SolvedLayout {
    let vertices = (0..4)
        .map(|i| VertexLayout {
            index: i,
            name: spec.vertices[i].clone(),
            position: positions[i],
            label_anchor: labels::vertex_anchor(&positions, i, config.vertex_label_offset),
        })
        .collect();

    let sides = (0..4)
        .map(|i| SideLayout {
            index: i,
            start: positions[i],
            end: positions[(i + 1) % 4],
            label: spec.sides[i].display_label().map(str::to_string),
            label_anchor: labels::side_anchor(&positions, i, config.side_label_offset),
        })
        .collect();

    let diagonals = spec
        .diagonals
        .iter()
        .enumerate()
        .map(|(index, d)| DiagonalLayout {
            index,
            from: d.from,
            to: d.to,
            start: positions[d.from],
            end: positions[d.to],
            style: d.style,
            label: d.display_label().map(str::to_string),
            label_anchor: labels::diagonal_anchor(&positions, d.from, d.to),
        })
        .collect();

    SolvedLayout {
        canvas: config.canvas(),
        positions,
        orientation,
        resolution,
        scale,
        vertices,
        sides,
        diagonals,
        arcs: arcs::compute_arcs(&positions, &spec.angles, orientation, config),
    }
}
