//! SVG renderer for solved layouts
//!
//! Consumes a `SolvedLayout` and produces an SVG string whose colours come
//! from CSS custom properties, so the same drawing can be restyled with a
//! different stylesheet.

pub mod config;
pub mod path;
pub mod svg;

pub use config::{MarkSizes, SvgConfig};
pub use svg::{render_svg, render_svg_with_debug};
