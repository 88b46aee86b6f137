//! Error types for reading and validating quadrilateral documents

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpecError {
    /// The document is not well-formed TOML, or a value has the wrong type
    #[error("syntax error at {span:?}: {message}")]
    Syntax { span: Span, message: String },

    /// The document parsed but describes an impossible quadrilateral
    #[error("invalid {field} at {span:?}: {message}")]
    Invalid {
        field: String,
        span: Span,
        message: String,
    },
}

impl SpecError {
    pub fn invalid(field: impl Into<String>, span: Span, message: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            span,
            message: message.into(),
        }
    }

    pub fn span(&self) -> &Span {
        match self {
            Self::Syntax { span, .. } | Self::Invalid { span, .. } => span,
        }
    }

    fn message(&self) -> String {
        match self {
            Self::Syntax { message, .. } => message.clone(),
            Self::Invalid { field, message, .. } => format!("{}: {}", field, message),
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let span = self.span().clone();
        let message = self.message();
        let mut buf = Vec::new();

        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message(&message)
            .with_label(
                Label::new((filename, span))
                    .with_message(&message)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}

impl From<toml::de::Error> for SpecError {
    fn from(err: toml::de::Error) -> Self {
        SpecError::Syntax {
            span: err.span().unwrap_or(0..0),
            message: err.message().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_display_names_field() {
        let err = SpecError::invalid("sides", 4..10, "expected exactly 4 entries, found 3");
        insta::assert_snapshot!(
            err.to_string(),
            @"invalid sides at 4..10: expected exactly 4 entries, found 3"
        );
    }

    #[test]
    fn test_toml_error_keeps_span() {
        let err = toml::from_str::<toml::Table>("vertices = [").unwrap_err();
        let spec_err = SpecError::from(err);
        assert!(matches!(spec_err, SpecError::Syntax { .. }));
        assert!(spec_err.span().start <= "vertices = [".len());
    }

    #[test]
    fn test_format_includes_filename_and_message() {
        let source = "vertices = [\"A\", \"B\"]\n";
        let err = SpecError::invalid("vertices", 11..21, "expected exactly 4 entries, found 2");
        let report = err.format(source, "quad.toml");
        assert!(report.contains("quad.toml"));
        assert!(report.contains("expected exactly 4 entries"));
    }
}
