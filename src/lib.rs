//! Quad Illustrator - diagrams for partially measured quadrilaterals
//!
//! Reads a TOML description of a quadrilateral (some side lengths, some
//! interior angles, optional diagonals), works out a consistent set of vertex
//! positions whatever subset of measurements is known, and draws it as SVG
//! with interior-angle arcs and labels.
//!
//! # Example
//!
//! ```rust
//! use quad_illustrator::render;
//!
//! let svg = render(r#"
//!     sides = [{ length = 5 }, { length = 5 }, { length = 5 }, { length = 5 }]
//!     angles = [{ value = 90 }, { value = 90 }, { value = 90 }, { value = 90 }]
//! "#).unwrap();
//! assert!(svg.contains("<svg"));
//! ```

pub mod error;
pub mod layout;
pub mod parser;
pub mod renderer;
pub mod stylesheet;

pub use error::SpecError;
pub use layout::lint::{LintCategory, LintWarning};
pub use layout::{resolve, DegeneratePolicy, LayoutConfig, LayoutError, SolvedLayout};
pub use parser::{parse, QuadrilateralSpec};
pub use renderer::{render_svg, MarkSizes, SvgConfig};
pub use stylesheet::Stylesheet;

use thiserror::Error;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// The document could not be read
    #[error("invalid document: {}", format_spec_errors(.0))]
    Spec(Vec<SpecError>),

    /// The document could not be drawn
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),

    /// The layout could not be serialized
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<Vec<SpecError>> for RenderError {
    fn from(errors: Vec<SpecError>) -> Self {
        RenderError::Spec(errors)
    }
}

impl RenderError {
    /// Format the error for a terminal, with source context for document
    /// errors
    pub fn report(&self, source: &str, filename: &str) -> String {
        match self {
            RenderError::Spec(errors) => errors
                .iter()
                .map(|e| e.format(source, filename))
                .collect::<Vec<_>>()
                .join("\n"),
            other => format!("Error: {}", other),
        }
    }
}

fn format_spec_errors(errors: &[SpecError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    pub layout: LayoutConfig,
    pub svg: SvgConfig,
    pub stylesheet: Stylesheet,
    /// Collect consistency warnings alongside the drawing
    pub lint: bool,
    /// Mark the outline bounds and resolution strategy in the output
    pub debug: bool,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout configuration
    pub fn with_layout(mut self, config: LayoutConfig) -> Self {
        self.layout = config;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Set the stylesheet for color resolution
    pub fn with_stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.stylesheet = stylesheet;
        self
    }

    /// Enable or disable lint checks
    pub fn with_lint(mut self, lint: bool) -> Self {
        self.lint = lint;
        self
    }

    /// Enable or disable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Parse a document and resolve its geometry
pub fn resolve_source(
    source: &str,
    config: &LayoutConfig,
) -> Result<(QuadrilateralSpec, SolvedLayout), RenderError> {
    let spec = parse(source)?;
    let layout = resolve(&spec, config)?;
    Ok((spec, layout))
}

/// Render a document to SVG with default configuration
pub fn render(source: &str) -> Result<String, RenderError> {
    render_with_config(source, RenderConfig::default())
}

/// Render a document to SVG with custom configuration
///
/// # Example
///
/// ```rust
/// use quad_illustrator::{render_with_config, LayoutConfig, RenderConfig, SvgConfig};
///
/// let config = RenderConfig::new()
///     .with_layout(LayoutConfig::default().with_canvas_size(400.0, 300.0).with_padding(20.0))
///     .with_svg(SvgConfig::default().with_pretty_print(false));
///
/// let svg = render_with_config("sides = [{}, {}, {}, {}]\nangles = [{}, {}, {}, {}]", config).unwrap();
/// assert!(svg.contains(r#"viewBox="0 0 400 300""#));
/// ```
pub fn render_with_config(source: &str, config: RenderConfig) -> Result<String, RenderError> {
    render_with_lint(source, config).map(|(svg, _)| svg)
}

/// Render a document to SVG, also returning lint warnings when
/// `config.lint` is set
pub fn render_with_lint(
    source: &str,
    config: RenderConfig,
) -> Result<(String, Vec<LintWarning>), RenderError> {
    let (spec, layout) = resolve_source(source, &config.layout)?;

    let warnings = if config.lint {
        layout::lint::check(&spec, &layout)
    } else {
        vec![]
    };

    let svg = renderer::render_svg_with_debug(
        &layout,
        &spec.display,
        &config.svg,
        &config.stylesheet,
        config.debug,
    );
    Ok((svg, warnings))
}

/// Resolve a document and serialize the layout as pretty-printed JSON
pub fn layout_json(source: &str, config: &LayoutConfig) -> Result<String, RenderError> {
    let (_, layout) = resolve_source(source, config)?;
    Ok(serde_json::to_string_pretty(&layout)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &str = r#"
sides = [{ length = 5 }, { length = 5 }, { length = 5 }, { length = 5 }]
angles = [{ value = 90 }, { value = 90 }, { value = 90 }, { value = 90 }]
"#;

    #[test]
    fn test_render_square() {
        let svg = render(SQUARE).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
        assert_eq!(svg.matches("qi-angle\"").count(), 4);
    }

    #[test]
    fn test_render_spec_error() {
        let err = render("sides = [{}]\nangles = [{}, {}, {}, {}]").unwrap_err();
        assert!(matches!(err, RenderError::Spec(ref errors) if errors.len() == 1));
        assert!(err.to_string().starts_with("invalid document: invalid sides"));
    }

    #[test]
    fn test_report_includes_source_context() {
        let source = "sides = [{}]\nangles = [{}, {}, {}, {}]";
        let err = render(source).unwrap_err();
        let report = err.report(source, "doc.toml");
        assert!(report.contains("doc.toml"));
        assert!(report.contains("expected exactly 4 entries"));
    }

    #[test]
    fn test_degenerate_error_policy() {
        let flat = r#"
sides = [{ length = 1 }, { length = 1 }, { length = 1 }, {}]
angles = [{}, { value = 180 }, { value = 180 }, {}]
"#;
        let config = RenderConfig::new().with_layout(
            LayoutConfig::default().with_degenerate_policy(DegeneratePolicy::Error),
        );
        let err = render_with_config(flat, config).unwrap_err();
        assert!(matches!(err, RenderError::Layout(LayoutError::DegenerateGeometry { .. })));

        // Default policy still draws something
        assert!(render(flat).is_ok());
    }

    #[test]
    fn test_lint_only_when_enabled() {
        let bad = r#"
sides = [{}, {}, {}, {}]
angles = [{ value = 100 }, { value = 100 }, { value = 100 }, { value = 100 }]
"#;
        let (_, quiet) = render_with_lint(bad, RenderConfig::new()).unwrap();
        assert!(quiet.is_empty());

        let (_, warnings) = render_with_lint(bad, RenderConfig::new().with_lint(true)).unwrap();
        assert!(warnings.iter().any(|w| w.category == LintCategory::Angle));
    }

    #[test]
    fn test_layout_json() {
        let json = layout_json(SQUARE, &LayoutConfig::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["resolution"]["kind"], "generic");
        assert_eq!(value["positions"].as_array().map(Vec::len), Some(4));
        assert_eq!(value["arcs"].as_array().map(Vec::len), Some(4));
        assert!(value["scale"].as_f64().is_some_and(|s| s > 0.0));
    }
}
