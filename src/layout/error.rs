//! Error types for the layout engine

use thiserror::Error;

/// Errors that can occur during layout computation
///
/// Incomplete or inconsistent measurements never produce an error; the
/// solver degrades to a less exact drawing instead. These variants cover
/// inputs that cannot be drawn at all.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LayoutError {
    /// The solved outline has no extent in one axis and cannot be scaled
    #[error("degenerate geometry: solved outline spans {width} x {height}")]
    DegenerateGeometry { width: f64, height: f64 },

    /// Canvas size and padding leave no room to draw in
    #[error("canvas {width} x {height} with padding {padding} leaves no drawing region")]
    InvalidCanvas { width: f64, height: f64, padding: f64 },

    /// A diagonal refers to a vertex that does not exist
    #[error("diagonal #{index} joins vertices {from} and {to}, expected two distinct indices in 0..=3")]
    InvalidDiagonal { index: usize, from: usize, to: usize },

    /// An explicit vertex position is NaN or infinite
    #[error("vertex position #{index} is not finite")]
    NonFinitePosition { index: usize },
}

impl LayoutError {
    /// Create a degenerate geometry error
    pub fn degenerate(width: f64, height: f64) -> Self {
        Self::DegenerateGeometry { width, height }
    }
}
