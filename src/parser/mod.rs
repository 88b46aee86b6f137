//! Reader for quadrilateral documents
//!
//! Documents are TOML. Field names are snake_case; camelCase spellings
//! (`showLabel`, `vertexPositions`, ...) are accepted as aliases.
//!
//! ```toml
//! vertices = ["A", "B", "C", "D"]
//!
//! [[sides]]
//! label = "6 m"
//! [[sides]]
//! length = 4
//! [[sides]]
//! label = "10 m"
//! [[sides]]
//! label = "x"
//!
//! [[angles]]
//! [[angles]]
//! value = 100
//! [[angles]]
//! label = "80°"
//! [[angles]]
//! ```

pub mod ast;
pub mod measurement;

pub use ast::*;
pub use measurement::{extract_numeric_value, Measurement};

use serde::Deserialize;
use toml::Spanned;

use crate::error::{Span, SpecError};
use crate::layout::Point;

const DEFAULT_VERTICES: [&str; 4] = ["A", "B", "C", "D"];

#[derive(Deserialize)]
struct RawSpec {
    vertices: Option<Spanned<Vec<String>>>,
    sides: Spanned<Vec<Spanned<RawSide>>>,
    angles: Spanned<Vec<Spanned<RawAngle>>>,
    #[serde(default)]
    diagonals: Vec<Spanned<RawDiagonal>>,
    #[serde(default, alias = "vertexPositions")]
    vertex_positions: Option<Spanned<Vec<Point>>>,
    #[serde(default)]
    display: Option<Spanned<RawDisplay>>,
}

#[derive(Deserialize)]
struct RawSide {
    length: Option<f64>,
    label: Option<String>,
    #[serde(alias = "showLabel")]
    show_label: Option<bool>,
}

#[derive(Deserialize)]
struct RawAngle {
    value: Option<f64>,
    label: Option<String>,
    #[serde(alias = "showAngle")]
    show_angle: Option<bool>,
}

#[derive(Deserialize)]
struct RawDiagonal {
    from: usize,
    to: usize,
    label: Option<String>,
    #[serde(alias = "showLabel")]
    show_label: Option<bool>,
    #[serde(default)]
    style: LineStyle,
}

/// Highlight indices are signed so that the `-1` "none" convention parses.
#[derive(Deserialize, Default)]
struct RawDisplay {
    #[serde(alias = "showVertices")]
    show_vertices: Option<bool>,
    #[serde(alias = "highlightVertex")]
    highlight_vertex: Option<i64>,
    #[serde(alias = "highlightSide")]
    highlight_side: Option<i64>,
    #[serde(alias = "highlightDiagonal")]
    highlight_diagonal: Option<i64>,
    caption: Option<String>,
}

/// Parse and validate a quadrilateral document.
///
/// All validation problems are reported together.
pub fn parse(source: &str) -> Result<QuadrilateralSpec, Vec<SpecError>> {
    let raw: RawSpec = toml::from_str(source).map_err(|e| vec![SpecError::from(e)])?;
    let mut errors = Vec::new();

    let vertices = match raw.vertices {
        Some(vertices) => {
            let span = vertices.span();
            exactly_four("vertices", span, vertices.into_inner(), &mut errors)
        }
        None => Some(DEFAULT_VERTICES.map(str::to_string)),
    };

    let sides_span = raw.sides.span();
    let sides: Vec<Side> = raw
        .sides
        .into_inner()
        .into_iter()
        .filter_map(|side| convert_side(side, &mut errors))
        .collect();
    let sides = exactly_four("sides", sides_span, sides, &mut errors);

    let angles_span = raw.angles.span();
    let angles: Vec<Angle> = raw
        .angles
        .into_inner()
        .into_iter()
        .filter_map(|angle| convert_angle(angle, &mut errors))
        .collect();
    let angles = exactly_four("angles", angles_span, angles, &mut errors);

    let diagonals: Vec<Diagonal> = raw
        .diagonals
        .into_iter()
        .filter_map(|diagonal| convert_diagonal(diagonal, &mut errors))
        .collect();

    let vertex_positions = raw.vertex_positions.and_then(|positions| {
        let span = positions.span();
        let positions = positions.into_inner();
        if positions.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
            errors.push(SpecError::invalid(
                "vertex_positions",
                span.clone(),
                "coordinates must be finite numbers",
            ));
        }
        exactly_four("vertex_positions", span, positions, &mut errors)
    });

    let display = match raw.display {
        Some(display) => convert_display(display, diagonals.len(), &mut errors),
        None => DisplayOptions::default(),
    };

    match (vertices, sides, angles) {
        (Some(vertices), Some(sides), Some(angles)) if errors.is_empty() => Ok(QuadrilateralSpec {
            vertices,
            sides,
            angles,
            diagonals,
            vertex_positions,
            display,
        }),
        _ => Err(errors),
    }
}

fn exactly_four<T>(
    field: &str,
    span: Span,
    items: Vec<T>,
    errors: &mut Vec<SpecError>,
) -> Option<[T; 4]> {
    let found = items.len();
    match <[T; 4]>::try_from(items) {
        Ok(items) => Some(items),
        Err(_) => {
            errors.push(SpecError::invalid(
                field,
                span,
                format!("expected exactly 4 entries, found {}", found),
            ));
            None
        }
    }
}

fn convert_side(side: Spanned<RawSide>, errors: &mut Vec<SpecError>) -> Option<Side> {
    let span = side.span();
    let raw = side.into_inner();
    if let Some(length) = raw.length {
        if !length.is_finite() || length <= 0.0 {
            errors.push(SpecError::invalid(
                "side length",
                span,
                format!("must be a positive number, got {}", length),
            ));
            return None;
        }
    }
    Some(Side::new(raw.length, raw.label).with_show_label(raw.show_label.unwrap_or(true)))
}

fn convert_angle(angle: Spanned<RawAngle>, errors: &mut Vec<SpecError>) -> Option<Angle> {
    let span = angle.span();
    let raw = angle.into_inner();
    if let Some(value) = raw.value {
        if !value.is_finite() || value <= 0.0 || value >= 360.0 {
            errors.push(SpecError::invalid(
                "angle value",
                span,
                format!("must be strictly between 0 and 360 degrees, got {}", value),
            ));
            return None;
        }
    }
    Some(Angle::new(raw.value, raw.label).with_show_angle(raw.show_angle.unwrap_or(true)))
}

fn convert_diagonal(
    diagonal: Spanned<RawDiagonal>,
    errors: &mut Vec<SpecError>,
) -> Option<Diagonal> {
    let span = diagonal.span();
    let raw = diagonal.into_inner();
    if raw.from > 3 || raw.to > 3 {
        errors.push(SpecError::invalid(
            "diagonal",
            span,
            format!("vertex indices must be 0..=3, got {} -> {}", raw.from, raw.to),
        ));
        return None;
    }
    if raw.from == raw.to {
        errors.push(SpecError::invalid(
            "diagonal",
            span,
            format!("must join two different vertices, got {} -> {}", raw.from, raw.to),
        ));
        return None;
    }
    Some(Diagonal {
        from: raw.from,
        to: raw.to,
        label: raw.label,
        show_label: raw.show_label.unwrap_or(false),
        style: raw.style,
    })
}

fn convert_display(
    display: Spanned<RawDisplay>,
    diagonal_count: usize,
    errors: &mut Vec<SpecError>,
) -> DisplayOptions {
    let span = display.span();
    let raw = display.into_inner();
    let mut index = |field: &str, value: Option<i64>, len: usize| -> Option<usize> {
        let value = value.filter(|v| *v >= 0)?;
        match usize::try_from(value) {
            Ok(i) if i < len => Some(i),
            _ => {
                errors.push(SpecError::invalid(
                    field,
                    span.clone(),
                    format!("index {} is out of range (0..{})", value, len),
                ));
                None
            }
        }
    };

    DisplayOptions {
        show_vertices: raw.show_vertices.unwrap_or(true),
        highlight_vertex: index("highlight_vertex", raw.highlight_vertex, 4),
        highlight_side: index("highlight_side", raw.highlight_side, 4),
        highlight_diagonal: index("highlight_diagonal", raw.highlight_diagonal, diagonal_count),
        caption: raw.caption,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SCENARIO_C: &str = r#"
vertices = ["A", "B", "C", "D"]

[[sides]]
label = "6"
[[sides]]
length = 4
[[sides]]
label = "10 m"
[[sides]]
label = "x"

[[angles]]
[[angles]]
value = 100
[[angles]]
label = "80°"
[[angles]]
"#;

    #[test]
    fn test_parse_measurements() {
        let spec = parse(SCENARIO_C).expect("should parse");
        assert_eq!(
            measurement::extract_side_lengths(&spec.sides),
            [Some(6.0), Some(4.0), Some(10.0), None]
        );
        assert_eq!(spec.sides[3].measurement, Measurement::Label("x".to_string()));
        assert!(spec.sides[0].measurement.is_known());
        assert!(spec.angles[0].measurement.is_unknown());
        assert_eq!(
            measurement::extract_angle_values(&spec.angles),
            [None, Some(100.0), Some(80.0), None]
        );
    }

    #[test]
    fn test_default_vertex_names() {
        let source = r#"
sides = [{}, {}, {}, {}]
angles = [{}, {}, {}, {}]
"#;
        let spec = parse(source).expect("should parse");
        assert_eq!(spec.vertices, ["A", "B", "C", "D"].map(String::from));
        assert_eq!(spec.display, DisplayOptions::default());
    }

    #[test]
    fn test_camel_case_aliases() {
        let source = r#"
vertices = ["P", "Q", "R", "S"]
sides = [{ label = "250 m", showLabel = false }, {}, {}, {}]
angles = [{ label = "θ", showAngle = false }, {}, {}, {}]
vertexPositions = [{ x = 1, y = 1 }, { x = 5, y = 1 }, { x = 5, y = 4 }, { x = 1, y = 4 }]

[[diagonals]]
from = 0
to = 2
label = "PR"
showLabel = true
style = "dashed"

[display]
highlightVertex = -1
highlightDiagonal = 0
"#;
        let spec = parse(source).expect("should parse");
        assert!(!spec.sides[0].show_label);
        assert!(!spec.angles[0].show_angle);
        assert_eq!(spec.vertex_positions.map(|p| p[2]), Some(Point::new(5.0, 4.0)));
        assert_eq!(spec.diagonals[0].style, LineStyle::Dashed);
        assert_eq!(spec.diagonals[0].display_label(), Some("PR"));
        assert_eq!(spec.display.highlight_vertex, None);
        assert_eq!(spec.display.highlight_diagonal, Some(0));
    }

    #[test]
    fn test_wrong_side_count_reported_with_span() {
        let source = r#"
sides = [{}, {}, {}]
angles = [{}, {}, {}, {}]
"#;
        let errors = parse(source).unwrap_err();
        assert_eq!(errors.len(), 1);
        let span = errors[0].span().clone();
        assert!(source[span].contains("{}, {}, {}"));
        assert!(errors[0].to_string().contains("found 3"));
    }

    #[test]
    fn test_all_problems_reported_together() {
        let source = r#"
vertices = ["A", "B"]
sides = [{ length = -2 }, {}, {}, {}]
angles = [{ value = 400 }, {}, {}, {}]

[[diagonals]]
from = 1
to = 1
"#;
        let errors = parse(source).unwrap_err();
        let fields: Vec<String> = errors
            .iter()
            .map(|e| match e {
                SpecError::Invalid { field, .. } => field.clone(),
                SpecError::Syntax { .. } => "syntax".to_string(),
            })
            .collect();
        assert!(fields.contains(&"vertices".to_string()));
        assert!(fields.contains(&"side length".to_string()));
        assert!(fields.contains(&"angle value".to_string()));
        assert!(fields.contains(&"diagonal".to_string()));
    }

    #[test]
    fn test_highlight_out_of_range() {
        let source = r#"
sides = [{}, {}, {}, {}]
angles = [{}, {}, {}, {}]

[display]
highlight_side = 4
"#;
        let errors = parse(source).unwrap_err();
        assert!(errors[0].to_string().contains("highlight_side"));
    }

    #[test]
    fn test_syntax_error() {
        let errors = parse("sides = [").unwrap_err();
        assert!(matches!(errors[0], SpecError::Syntax { .. }));
    }

    #[test]
    fn test_missing_sides_is_syntax_error() {
        let errors = parse("angles = [{}, {}, {}, {}]").unwrap_err();
        assert!(matches!(errors[0], SpecError::Syntax { .. }));
    }
}
