//! Render pipeline tests: documents to SVG and JSON

use pretty_assertions::assert_eq;

use quad_illustrator::{
    layout_json, render, render_with_config, LayoutConfig, RenderConfig, RenderError, Stylesheet,
    SvgConfig,
};

const MISSING_DA: &str = include_str!("fixtures/missing_da.toml");

#[test]
fn test_render_missing_da() {
    let svg = render(MISSING_DA).expect("should render");

    assert!(svg.starts_with("<?xml"));
    assert!(svg.contains(r#"viewBox="0 0 700 500""#));
    assert_eq!(svg.matches(r#"class="qi-side""#).count(), 3);
    assert_eq!(svg.matches(r#"class="qi-side qi-highlight""#).count(), 1);
    assert_eq!(svg.matches(r#"class="qi-angle""#).count(), 2);
    assert!(svg.contains(r#"class="qi-diagonal qi-dashed""#));

    // Math delimiters are dropped from drawn text
    assert!(svg.contains(">x</text>"));
    assert!(svg.contains(">Find x</text>"));
    assert!(svg.contains(">80°</text>"));
    assert!(svg.contains(">AC</text>"));
    assert!(!svg.contains('$'));
}

#[test]
fn test_render_vertex_names() {
    let svg = render(include_str!("fixtures/override.toml")).expect("should render");
    for name in ["P", "Q", "R", "S"] {
        assert!(svg.contains(&format!(">{}</text>", name)), "missing vertex {}", name);
    }
    assert!(svg.contains(r#"<line class="qi-side" x1="150" y1="120" x2="560" y2="140"/>"#));
}

#[test]
fn test_render_unmeasured_has_no_arcs() {
    let svg = render(include_str!("fixtures/unmeasured.toml")).expect("should render");
    assert!(!svg.contains(r#"class="qi-angle""#));
    assert_eq!(svg.matches("qi-side-label").count(), 4);
}

#[test]
fn test_custom_stylesheet_colors() {
    let stylesheet: Stylesheet = r##"
[colors]
line = "#000000"
"##
    .parse()
    .expect("valid stylesheet");

    let config = RenderConfig::new().with_stylesheet(stylesheet);
    let svg = render_with_config(MISSING_DA, config).expect("should render");

    assert!(svg.contains("--line: #000000;"));
    // Untouched tokens keep their defaults
    assert!(svg.contains("--angle: #3b82f6;"));
}

#[test]
fn test_compact_fragment() {
    let config = RenderConfig::new().with_svg(
        SvgConfig::new()
            .with_standalone(false)
            .with_pretty_print(false)
            .without_class_prefix(),
    );
    let svg = render_with_config(MISSING_DA, config).expect("should render");

    assert!(svg.starts_with("<svg"));
    assert!(!svg.contains('\n'));
    assert!(svg.contains(r#"class="side highlight""#));
    assert!(!svg.contains("qi-"));
}

#[test]
fn test_debug_output_names_resolution() {
    let config = RenderConfig::new().with_debug(true);
    let svg = render_with_config(MISSING_DA, config).expect("should render");
    assert!(svg.contains("resolution: Sequential { missing_side: 3 }"));
    assert!(svg.contains(r#"class="qi-debug""#));
}

#[test]
fn test_invalid_document_reports_every_problem() {
    let source = r#"
sides = [{}, {}, {}]
angles = [{}, {}, {}, {}]

[display]
highlight_side = 9
"#;
    let err = render(source).expect_err("should fail");
    let RenderError::Spec(errors) = &err else {
        panic!("expected document errors, got {:?}", err);
    };
    assert_eq!(errors.len(), 2);

    let report = err.report(source, "bad.toml");
    assert!(report.contains("bad.toml"));
}

#[test]
fn test_layout_json_shape() {
    let json = layout_json(MISSING_DA, &LayoutConfig::default()).expect("should serialize");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

    assert_eq!(value["resolution"]["kind"], "sequential");
    assert_eq!(value["resolution"]["missing_side"], 3);
    assert_eq!(value["canvas"]["width"], 700.0);
    assert_eq!(value["sides"][3]["label"], "$x$");
    assert_eq!(value["diagonals"][0]["style"], "dashed");
    assert_eq!(value["arcs"].as_array().map(Vec::len), Some(2));
    assert!(value["orientation"].is_string());
}

#[test]
fn test_layout_json_override_has_no_scale() {
    let json = layout_json(include_str!("fixtures/override.toml"), &LayoutConfig::default())
        .expect("should serialize");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

    assert_eq!(value["resolution"]["kind"], "override");
    assert!(value["scale"].is_null());
    assert_eq!(value["positions"][1]["x"], 560.0);
}
