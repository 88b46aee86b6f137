//! Colour palette for rendered diagrams
//!
//! The renderer never hard-codes colours: every stroke and fill refers to a
//! CSS custom property (`var(--line)`, `var(--angle)`, ...) whose value comes
//! from a stylesheet. Stylesheets are TOML files:
//!
//! ```toml
//! [metadata]
//! name = "Chalkboard"
//!
//! [colors]
//! background = "#1f2a24"
//! line = "#f0f0f0"
//! ```
//!
//! Tokens missing from a stylesheet fall back to the default palette.

use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing stylesheets
#[derive(Error, Debug)]
pub enum StylesheetError {
    #[error("Failed to read stylesheet file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse stylesheet TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// A stylesheet mapping colour tokens to concrete values
#[derive(Debug, Clone, PartialEq)]
pub struct Stylesheet {
    pub name: Option<String>,
    pub description: Option<String>,
    /// Token name -> CSS colour, kept sorted so output is stable
    pub colors: BTreeMap<String, String>,
}

#[derive(Deserialize)]
struct TomlStylesheet {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    colors: BTreeMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

/// Default palette: grey outline, blue angle markers, purple diagonals and a
/// red highlight
const DEFAULT_PALETTE: &[(&str, &str)] = &[
    ("angle", "#3b82f6"),
    ("background", "#ffffff"),
    ("diagonal", "#8b5cf6"),
    ("highlight", "#ef4444"),
    ("label-background", "#ffffff"),
    ("line", "#666666"),
    ("text", "#333333"),
    ("vertex", "#333333"),
];

impl Stylesheet {
    /// Load stylesheet from TOML file
    pub fn from_file(path: &Path) -> Result<Self, StylesheetError> {
        let content = std::fs::read_to_string(path)?;
        content.parse()
    }

    /// Look up a token in this stylesheet only
    pub fn resolve(&self, token: &str) -> Option<&str> {
        self.colors.get(token).map(|s| s.as_str())
    }

    /// Look up a token, falling back to the default palette and then to the
    /// text colour
    pub fn resolve_or_default(&self, token: &str) -> String {
        if let Some(color) = self.resolve(token) {
            return color.to_string();
        }
        DEFAULT_PALETTE
            .iter()
            .find(|(name, _)| *name == token)
            .map(|(_, color)| color.to_string())
            .unwrap_or_else(|| "#333333".to_string())
    }

    /// Every default token, overridden by this stylesheet where defined
    pub fn merged(&self) -> BTreeMap<String, String> {
        let mut colors: BTreeMap<String, String> = DEFAULT_PALETTE
            .iter()
            .map(|(name, color)| (name.to_string(), color.to_string()))
            .collect();
        colors.extend(self.colors.clone());
        colors
    }
}

impl FromStr for Stylesheet {
    type Err = StylesheetError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let parsed: TomlStylesheet = toml::from_str(content)?;

        Ok(Stylesheet {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            colors: parsed.colors,
        })
    }
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self {
            name: Some("default".to_string()),
            description: None,
            colors: DEFAULT_PALETTE
                .iter()
                .map(|(name, color)| (name.to_string(), color.to_string()))
                .collect(),
        }
    }
}
