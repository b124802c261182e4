//! Error types for loading chart documents

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Failed to read chart document: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error{}: {message}", format_location(.span))]
    Parse { message: String, span: Option<Span> },
}

impl DocumentError {
    /// Format the error with source context using ariadne
    ///
    /// Errors without a source location fall back to their display text.
    pub fn format(&self, source: &str, filename: &str) -> String {
        let (message, span) = match self {
            DocumentError::Parse {
                message,
                span: Some(span),
            } => (message, span),
            _ => return self.to_string(),
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message("invalid chart document")
            .with_label(
                Label::new((filename, span.clone()))
                    .with_message(message)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);
        if written.is_err() {
            return self.to_string();
        }
        String::from_utf8(buf).unwrap_or_else(|_| self.to_string())
    }
}

fn format_location(span: &Option<Span>) -> String {
    span.as_ref()
        .map(|s| format!(" at {:?}", s))
        .unwrap_or_default()
}

impl From<toml::de::Error> for DocumentError {
    fn from(err: toml::de::Error) -> Self {
        DocumentError::Parse {
            message: err.message().trim().to_string(),
            span: err.span(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_span() {
        let err = DocumentError::Parse {
            message: "expected `=`".to_string(),
            span: Some(3..5),
        };
        assert_eq!(err.to_string(), "Parse error at 3..5: expected `=`");
    }

    #[test]
    fn test_display_without_span() {
        let err = DocumentError::Parse {
            message: "missing field `label`".to_string(),
            span: None,
        };
        assert_eq!(err.to_string(), "Parse error: missing field `label`");
        assert_eq!(err.format("", "chart.toml"), err.to_string());
    }

    #[test]
    fn test_format_includes_filename_and_message() {
        let source = "x = ";
        let err: DocumentError = toml::from_str::<toml::Value>(source)
            .map(|_| ())
            .map_err(DocumentError::from)
            .unwrap_err();
        let report = err.format(source, "chart.toml");
        assert!(report.contains("chart.toml"));
        assert!(report.contains("invalid chart document"));
    }
}
