//! Strategy selection for a set of known measurements

use tracing::{debug, warn};

use super::config::LayoutConfig;
use super::default_layout;
use super::generic;
use super::sequential::{self, Chain};
use super::types::{Point, Resolution};

/// The closed-form strategies, in order of preference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// No side length at all
    DefaultLayout,
    /// Exactly one side unknown and both chain angles known
    Sequential(Chain),
    /// Everything else
    Generic,
}

/// Vertex positions produced by a strategy, tagged with their space
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// Already in canvas coordinates
    Canvas([Point; 4]),
    /// Model coordinates (y up) still to be scaled into the canvas
    Model {
        points: [Point; 4],
        resolution: Resolution,
    },
}

pub fn classify(lengths: &[Option<f64>; 4], angles: &[Option<f64>; 4]) -> Strategy {
    let unknown: Vec<usize> = (0..4).filter(|&i| lengths[i].is_none()).collect();

    match unknown.as_slice() {
        [_, _, _, _] => Strategy::DefaultLayout,
        &[missing] => {
            let chain = Chain::for_missing_side(missing);
            if chain.is_supported(lengths, angles) {
                Strategy::Sequential(chain)
            } else {
                Strategy::Generic
            }
        }
        _ => Strategy::Generic,
    }
}

/// Run the chosen strategy
pub fn solve(
    strategy: Strategy,
    lengths: &[Option<f64>; 4],
    angles: &[Option<f64>; 4],
    config: &LayoutConfig,
) -> Placement {
    match strategy {
        Strategy::DefaultLayout => {
            debug!("no side lengths known, using the default trapezoid");
            Placement::Canvas(default_layout::positions(config))
        }
        Strategy::Sequential(chain) => match sequential::solve(&chain, lengths, angles) {
            Some(points) => {
                debug!(missing_side = chain.missing_side, "sequential placement");
                Placement::Model {
                    points,
                    resolution: Resolution::Sequential {
                        missing_side: chain.missing_side,
                    },
                }
            }
            None => {
                warn!(
                    missing_side = chain.missing_side,
                    "sequential placement underspecified, falling back to generic"
                );
                generic_placement(lengths, angles, config)
            }
        },
        Strategy::Generic => generic_placement(lengths, angles, config),
    }
}

fn generic_placement(
    lengths: &[Option<f64>; 4],
    angles: &[Option<f64>; 4],
    config: &LayoutConfig,
) -> Placement {
    debug!("generic placement");
    Placement::Model {
        points: generic::solve(lengths, angles, config),
        resolution: Resolution::Generic,
    }
}
