//! Configuration for SVG rendering

/// Sizes of the marks drawn around the outline, in canvas units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkSizes {
    /// Width and height of the rounded box behind a side label
    pub side_label_box: (f64, f64),
    /// Radius of the disc behind an angle label
    pub angle_label_radius: f64,
    pub vertex_radius: f64,
    pub highlighted_vertex_radius: f64,
    /// Distance of the caption baseline above the bottom canvas edge
    pub caption_offset: f64,
}

impl Default for MarkSizes {
    fn default() -> Self {
        Self {
            side_label_box: (76.0, 36.0),
            angle_label_radius: 26.0,
            vertex_radius: 6.0,
            highlighted_vertex_radius: 7.0,
            caption_offset: 20.0,
        }
    }
}

/// Configuration options for SVG output
#[derive(Debug, Clone)]
pub struct SvgConfig {
    /// Emit an XML declaration before the root element
    pub standalone: bool,

    /// Indent elements, one per line
    pub pretty_print: bool,

    /// Prefix for CSS class names, `"qi-"` gives `qi-side`, `qi-angle`, ...
    pub class_prefix: Option<String>,

    pub marks: MarkSizes,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            standalone: true,
            pretty_print: true,
            class_prefix: Some("qi-".to_string()),
            marks: MarkSizes::default(),
        }
    }
}

impl SvgConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a bare `<svg>` fragment when `false`, e.g. for inlining in HTML
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Use bare class names (`side`, `angle`, ...)
    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }

    pub fn with_marks(mut self, marks: MarkSizes) -> Self {
        self.marks = marks;
        self
    }

    /// Class prefix, empty when none is set
    pub fn prefix(&self) -> &str {
        self.class_prefix.as_deref().unwrap_or_default()
    }
}
