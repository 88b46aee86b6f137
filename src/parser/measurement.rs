//! Numeric measurements recovered from side and angle annotations
//!
//! Authors annotate diagrams with display strings such as `"250 m"`, `"36°"`
//! or `"x"`. Each annotation is resolved exactly once, at the document
//! boundary, into a [`Measurement`]; the layout engine only ever sees the
//! resolved form.

use serde::Serialize;

use super::ast::{Angle, Side};

/// A side length or angle as far as the layout engine is concerned
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Measurement {
    /// A usable numeric value (side length in model units, or degrees)
    Known(f64),
    /// Annotated, but with a symbol rather than a number (e.g. `"x"`, `"θ"`)
    Label(String),
    /// Nothing given
    Unknown,
}

impl Measurement {
    /// Resolve a side from its optional explicit length and display label.
    ///
    /// Only finite, strictly positive lengths count as known.
    pub fn side(length: Option<f64>, label: Option<&str>) -> Self {
        Self::resolve(length, label, |v| v.is_finite() && v > 0.0)
    }

    /// Resolve an angle from its optional explicit value and display label.
    ///
    /// An explicit value always takes precedence over the label. Only values
    /// strictly between 0° and 360° count as known, so a label such as
    /// `"400°"` stays a label.
    pub fn angle(value: Option<f64>, label: Option<&str>) -> Self {
        Self::resolve(value, label, |v| v.is_finite() && v > 0.0 && v < 360.0)
    }

    fn resolve(explicit: Option<f64>, label: Option<&str>, usable: impl Fn(f64) -> bool) -> Self {
        if let Some(v) = explicit.filter(|v| usable(*v)) {
            return Measurement::Known(v);
        }
        if let Some(v) = extract_numeric_value(label).filter(|v| usable(*v)) {
            return Measurement::Known(v);
        }
        match label.map(str::trim) {
            Some(text) if !text.is_empty() => Measurement::Label(text.to_string()),
            _ => Measurement::Unknown,
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Measurement::Known(v) => Some(*v),
            Measurement::Label(_) | Measurement::Unknown => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Measurement::Known(_))
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Measurement::Unknown)
    }
}

/// Characters dropped before looking for a number: whitespace, metres,
/// degrees and TeX math delimiters.
fn is_ignored(c: char) -> bool {
    c.is_whitespace() || matches!(c, 'm' | '°' | '$')
}

/// Extract the first integer or decimal number from a display label.
///
/// Returns `None` when the label is absent or contains no digits.
pub fn extract_numeric_value(label: Option<&str>) -> Option<f64> {
    let stripped: String = label?.chars().filter(|c| !is_ignored(*c)).collect();
    let bytes = stripped.as_bytes();

    let start = (0..bytes.len()).find(|&i| {
        bytes[i].is_ascii_digit()
            || (bytes[i] == b'.' && bytes.get(i + 1).is_some_and(|b| b.is_ascii_digit()))
    })?;

    let mut end = start;
    let mut seen_dot = false;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => {}
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }

    stripped[start..end].trim_end_matches('.').parse().ok()
}

/// Known side lengths, in side order `[AB, BC, CD, DA]`
pub fn extract_side_lengths(sides: &[Side; 4]) -> [Option<f64>; 4] {
    std::array::from_fn(|i| sides[i].measurement.value())
}

/// Known interior angles in degrees, in vertex order
pub fn extract_angle_values(angles: &[Angle; 4]) -> [Option<f64>; 4] {
    std::array::from_fn(|i| angles[i].measurement.value())
}
