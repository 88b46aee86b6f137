//! SVG generation from solved layouts

use crate::layout::{AngleArc, BoundingBox, DiagonalLayout, Point, SideLayout, SolvedLayout};
use crate::parser::ast::{DisplayOptions, LineStyle};
use crate::stylesheet::Stylesheet;

use super::path::{arc_segments, to_svg_d, wedge_segments};
use super::config::{MarkSizes, SvgConfig};

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    styles: Vec<String>,
    elements: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            styles: vec![],
            elements: vec![],
            indent: 1,
        }
    }

    /// Add CSS custom properties from a stylesheet, plus the class rules that
    /// consume them
    pub fn add_stylesheet(&mut self, stylesheet: &Stylesheet) {
        let nl = self.newline();
        let pad = if self.config.pretty_print { "      " } else { " " };
        let mut css = format!(":root {{{}", nl);
        for (token, value) in stylesheet.merged() {
            css.push_str(&format!("{}--{}: {};{}", pad, token, value, nl));
        }
        css.push_str(if self.config.pretty_print { "    }" } else { " }" });
        self.styles.push(css);

        let p = self.prefix();
        let rules = [
            format!(".{p}background {{ fill: var(--background); }}"),
            format!(".{p}side {{ stroke: var(--line); stroke-width: 2.5; }}"),
            format!(".{p}diagonal {{ stroke: var(--diagonal); stroke-width: 2; }}"),
            format!(".{p}dashed {{ stroke-dasharray: 5,5; }}"),
            format!(".{p}angle {{ stroke: var(--angle); stroke-width: 2.5; fill: none; }}"),
            format!(".{p}highlight {{ stroke: var(--highlight); stroke-width: 3; }}"),
            format!(".{p}angle-fill {{ fill: var(--highlight); fill-opacity: 0.15; stroke: none; }}"),
            format!(".{p}vertex {{ fill: var(--vertex); }}"),
            format!(".{p}vertex.{p}highlight {{ fill: var(--highlight); stroke: none; }}"),
            format!(".{p}label-bg {{ fill: var(--label-background); opacity: 0.9; }}"),
            format!(".{p}text {{ fill: var(--text); font-family: sans-serif; font-size: 16px; }}"),
            format!(".{p}angle-label {{ fill: var(--angle); }}"),
            format!(".{p}diagonal-label {{ fill: var(--diagonal); font-size: 14px; }}"),
            format!(".{p}vertex-label {{ font-size: 22px; font-weight: bold; }}"),
            format!(".{p}debug {{ stroke: var(--highlight); stroke-dasharray: 2,4; fill: none; }}"),
        ];
        self.styles.extend(rules);
    }

    fn prefix(&self) -> String {
        self.config.prefix().to_string()
    }

    fn classes(&self, names: &[&str]) -> String {
        let prefix = self.prefix();
        names
            .iter()
            .map(|n| format!("{}{}", prefix, n))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add a rectangle element
    pub fn add_rect(&mut self, bounds: BoundingBox, rx: f64, classes: &[&str]) {
        self.elements.push(format!(
            r#"{}<rect class="{}" x="{}" y="{}" width="{}" height="{}" rx="{}"/>"#,
            self.indent_str(),
            self.classes(classes),
            num(bounds.x),
            num(bounds.y),
            num(bounds.width),
            num(bounds.height),
            num(rx)
        ));
    }

    /// Add a circle element
    pub fn add_circle(&mut self, center: Point, r: f64, classes: &[&str]) {
        self.elements.push(format!(
            r#"{}<circle class="{}" cx="{}" cy="{}" r="{}"/>"#,
            self.indent_str(),
            self.classes(classes),
            num(center.x),
            num(center.y),
            num(r)
        ));
    }

    /// Add a line element
    pub fn add_line(&mut self, from: Point, to: Point, classes: &[&str]) {
        self.elements.push(format!(
            r#"{}<line class="{}" x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
            self.indent_str(),
            self.classes(classes),
            num(from.x),
            num(from.y),
            num(to.x),
            num(to.y)
        ));
    }

    /// Add a path element
    pub fn add_path(&mut self, d: &str, classes: &[&str]) {
        self.elements.push(format!(
            r#"{}<path class="{}" d="{}"/>"#,
            self.indent_str(),
            self.classes(classes),
            d
        ));
    }

    /// Add a text element centred on `at`
    pub fn add_text(&mut self, text: &str, at: Point, classes: &[&str]) {
        let mut names = vec!["text"];
        names.extend_from_slice(classes);
        self.elements.push(format!(
            r#"{}<text class="{}" x="{}" y="{}" text-anchor="middle" dominant-baseline="middle">{}</text>"#,
            self.indent_str(),
            self.classes(&names),
            num(at.x),
            num(at.y),
            escape_xml(text)
        ));
    }

    /// Add an XML comment
    pub fn add_comment(&mut self, text: &str) {
        self.elements.push(format!(
            "{}<!-- {} -->",
            self.indent_str(),
            text.replace("--", "- -")
        ));
    }

    /// Open a group element
    pub fn start_group(&mut self, classes: &[&str]) {
        self.elements.push(format!(
            r#"{}<g class="{}">"#,
            self.indent_str(),
            self.classes(classes)
        ));
        self.indent += 1;
    }

    /// Close a group element
    pub fn end_group(&mut self) {
        self.indent = self.indent.saturating_sub(1);
        self.elements.push(format!("{}</g>", self.indent_str()));
    }

    /// Build the final SVG string
    pub fn build(self, canvas: BoundingBox) -> String {
        let nl = self.newline();

        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="{} {} {} {}">"#,
            num(canvas.width),
            num(canvas.height),
            num(canvas.x),
            num(canvas.y),
            num(canvas.width),
            num(canvas.height)
        ));
        svg.push_str(nl);

        if !self.styles.is_empty() {
            svg.push_str("  <style>");
            svg.push_str(nl);
            for style in &self.styles {
                svg.push_str("    ");
                svg.push_str(style);
                svg.push_str(nl);
            }
            svg.push_str("  </style>");
            svg.push_str(nl);
        }

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");

        svg
    }
}

/// Render a solved layout to an SVG string
pub fn render_svg(
    layout: &SolvedLayout,
    display: &DisplayOptions,
    config: &SvgConfig,
    stylesheet: &Stylesheet,
) -> String {
    render_svg_with_debug(layout, display, config, stylesheet, false)
}

/// Render a solved layout, optionally marking the drawing region and the
/// strategy that produced the geometry
pub fn render_svg_with_debug(
    layout: &SolvedLayout,
    display: &DisplayOptions,
    config: &SvgConfig,
    stylesheet: &Stylesheet,
    debug: bool,
) -> String {
    let marks = config.marks;
    let mut builder = SvgBuilder::new(config.clone());
    builder.add_stylesheet(stylesheet);
    builder.add_rect(layout.canvas, 0.0, &["background"]);

    if debug {
        builder.add_comment(&format!(
            "resolution: {:?}, orientation: {:?}, scale: {:?}",
            layout.resolution, layout.orientation, layout.scale
        ));
        if let Some(bounds) = BoundingBox::from_points(&layout.positions) {
            builder.add_rect(bounds, 0.0, &["debug"]);
        }
    }

    builder.start_group(&["sides"]);
    for side in &layout.sides {
        render_side(side, display, &mut builder);
    }
    builder.end_group();

    builder.start_group(&["diagonals"]);
    for diagonal in &layout.diagonals {
        render_diagonal(diagonal, display, &mut builder);
    }
    builder.end_group();

    builder.start_group(&["angles"]);
    for arc in &layout.arcs {
        render_arc(arc, display, &marks, &mut builder);
    }
    builder.end_group();

    builder.start_group(&["labels"]);
    for side in &layout.sides {
        if let Some(label) = &side.label {
            let (w, h) = marks.side_label_box;
            let at = side.label_anchor;
            builder.add_rect(
                BoundingBox::new(at.x - w / 2.0, at.y - h / 2.0, w, h),
                4.0,
                &["label-bg"],
            );
            builder.add_text(&strip_math(label), at, &["side-label"]);
        }
    }
    for diagonal in &layout.diagonals {
        if let Some(label) = &diagonal.label {
            builder.add_text(&strip_math(label), diagonal.label_anchor, &["diagonal-label"]);
        }
    }
    builder.end_group();

    if display.show_vertices {
        builder.start_group(&["vertices"]);
        for vertex in &layout.vertices {
            if display.highlight_vertex == Some(vertex.index) {
                builder.add_circle(
                    vertex.position,
                    marks.highlighted_vertex_radius,
                    &["vertex", "highlight"],
                );
            } else {
                builder.add_circle(vertex.position, marks.vertex_radius, &["vertex"]);
            }
            builder.add_text(&vertex.name, vertex.label_anchor, &["vertex-label"]);
        }
        builder.end_group();
    }

    if let Some(caption) = &display.caption {
        let at = Point::new(
            layout.canvas.x + layout.canvas.width / 2.0,
            layout.canvas.bottom() - marks.caption_offset,
        );
        builder.add_text(&strip_math(caption), at, &["caption"]);
    }

    builder.build(layout.canvas)
}

fn render_side(side: &SideLayout, display: &DisplayOptions, builder: &mut SvgBuilder) {
    if display.highlight_side == Some(side.index) {
        builder.add_line(side.start, side.end, &["side", "highlight"]);
    } else {
        builder.add_line(side.start, side.end, &["side"]);
    }
}

fn render_diagonal(diagonal: &DiagonalLayout, display: &DisplayOptions, builder: &mut SvgBuilder) {
    let mut classes = vec!["diagonal"];
    if diagonal.style == LineStyle::Dashed {
        classes.push("dashed");
    }
    if display.highlight_diagonal == Some(diagonal.index) {
        classes.push("highlight");
    }
    builder.add_line(diagonal.start, diagonal.end, &classes);
}

fn render_arc(
    arc: &AngleArc,
    display: &DisplayOptions,
    marks: &MarkSizes,
    builder: &mut SvgBuilder,
) {
    if display.highlight_vertex == Some(arc.vertex) {
        builder.add_path(&to_svg_d(&wedge_segments(arc)), &["angle-fill"]);
    }
    builder.add_path(&to_svg_d(&arc_segments(arc)), &["angle"]);
    if let Some(label) = &arc.label {
        builder.add_circle(arc.label_anchor, marks.angle_label_radius, &["label-bg"]);
        builder.add_text(&strip_math(label), arc.label_anchor, &["angle-label"]);
    }
}

/// Drop `$` math delimiters from a label
fn strip_math(label: &str) -> String {
    label.replace('$', "")
}

/// Format a coordinate with at most two decimals
fn num(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    // Avoid printing "-0"
    if rounded == 0.0 {
        return "0".to_string();
    }
    format!("{}", rounded)
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{resolve, LayoutConfig};
    use crate::parser::ast::{Angle, Diagonal, LineStyle, QuadrilateralSpec, Side};

    fn render(spec: &QuadrilateralSpec) -> String {
        let layout = resolve(spec, &LayoutConfig::default()).unwrap();
        render_svg(&layout, &spec.display, &SvgConfig::default(), &Stylesheet::default())
    }

    fn scenario_c() -> QuadrilateralSpec {
        QuadrilateralSpec::new(
            ["A", "B", "C", "D"],
            [
                Side::labelled("6"),
                Side::labelled("4"),
                Side::labelled("10"),
                Side::labelled("$x$"),
            ],
            [
                Angle::unknown(),
                Angle::degrees(100.0),
                Angle::degrees(80.0),
                Angle::unknown(),
            ],
        )
    }

    #[test]
    fn test_num_formatting() {
        assert_eq!(num(215.00000000000003), "215");
        assert_eq!(num(12.3456), "12.35");
        assert_eq!(num(-0.001), "0");
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a < b"), "a &lt; b");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml("<tag>"), "&lt;tag&gt;");
    }

    #[test]
    fn test_strip_math() {
        assert_eq!(strip_math("$x$"), "x");
        assert_eq!(strip_math("250 m"), "250 m");
    }

    #[test]
    fn test_render_structure() {
        let svg = render(&scenario_c());

        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains(r#"viewBox="0 0 700 500""#));
        assert!(svg.ends_with("</svg>"));
        assert_eq!(svg.matches(r#"class="qi-side""#).count(), 4);
        assert_eq!(svg.matches(r#"class="qi-angle""#).count(), 2);
        assert_eq!(svg.matches(r#"class="qi-vertex""#).count(), 4);
        assert!(svg.contains(">x</text>"));
        assert!(!svg.contains('$'));
        assert!(svg.contains("--angle: #3b82f6;"));
    }

    #[test]
    fn test_render_diagonal_and_highlights() {
        let mut spec = scenario_c()
            .with_diagonal(Diagonal::new(0, 2).with_style(LineStyle::Dashed).with_label("d"));
        spec.display.highlight_side = Some(2);
        spec.display.highlight_vertex = Some(1);
        spec.display.highlight_diagonal = Some(0);
        spec.display.caption = Some("Find $x$".to_string());

        let svg = render(&spec);
        assert!(svg.contains(r#"class="qi-diagonal qi-dashed qi-highlight""#));
        assert!(svg.contains(r#"class="qi-side qi-highlight""#));
        assert!(svg.contains(r#"class="qi-vertex qi-highlight""#));
        assert_eq!(svg.matches(r#"class="qi-angle-fill""#).count(), 1);
        assert!(svg.contains(r#"r="7""#));
        assert!(svg.contains(">Find x</text>"));
        assert!(svg.contains(">d</text>"));
    }

    #[test]
    fn test_hidden_vertices() {
        let mut spec = scenario_c();
        spec.display.show_vertices = false;
        let svg = render(&spec);
        assert!(!svg.contains(r#"class="qi-vertex""#));
        assert!(!svg.contains(r#"qi-vertex-label""#));
        assert!(!svg.contains(r#"class="qi-vertices""#));
    }

    #[test]
    fn test_compact_output_without_prefix() {
        let spec = scenario_c();
        let layout = resolve(&spec, &LayoutConfig::default()).unwrap();
        let config = SvgConfig::new()
            .with_pretty_print(false)
            .with_standalone(false)
            .without_class_prefix();
        let svg = render_svg(&layout, &spec.display, &config, &Stylesheet::default());

        assert!(svg.starts_with("<svg"));
        assert!(!svg.contains('\n'));
        assert!(svg.contains(r#"class="side""#));
    }

    #[test]
    fn test_debug_marks_resolution() {
        let spec = scenario_c();
        let layout = resolve(&spec, &LayoutConfig::default()).unwrap();
        let svg = render_svg_with_debug(
            &layout,
            &spec.display,
            &SvgConfig::default(),
            &Stylesheet::default(),
            true,
        );
        assert!(svg.contains("<!-- resolution: Sequential { missing_side: 3 }"));
        assert!(svg.contains(r#"class="qi-debug""#));
    }
}
