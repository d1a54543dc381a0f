//! Diagnostics for save files, with byte-span locations and terminal
//! rendering via ariadne.

use ariadne::{Color, Label, Report, ReportKind, Source};
use std::fmt;

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The file cannot produce a world.
    Error,
    /// The file loads, but something about it deserves attention.
    Warning,
}

/// A diagnostic message with a source location.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// How serious this diagnostic is.
    pub severity: Severity,
    /// Byte range in the source text the diagnostic points at.
    pub span: std::ops::Range<usize>,
    /// The headline message.
    pub message: String,
    /// Optional label shown next to the highlighted span.
    pub label: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    pub fn error(span: std::ops::Range<usize>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            span,
            message: message.into(),
            label: None,
        }
    }

    /// Create a warning diagnostic.
    pub fn warning(span: std::ops::Range<usize>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            span,
            message: message.into(),
            label: None,
        }
    }

    /// Attach a label to the highlighted span.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{prefix}: {}", self.message)
    }
}

/// Render diagnostics using ariadne for pretty terminal output.
pub fn render_diagnostics(source: &str, filename: &str, diagnostics: &[Diagnostic]) -> String {
    let mut output = Vec::new();

    for diag in diagnostics {
        let (kind, color) = match diag.severity {
            Severity::Error => (ReportKind::Error, Color::Red),
            Severity::Warning => (ReportKind::Warning, Color::Yellow),
        };

        let label_text = diag.label.as_deref().unwrap_or(&diag.message);
        Report::build(kind, (filename, diag.span.clone()))
            .with_message(&diag.message)
            .with_label(
                Label::new((filename, diag.span.clone()))
                    .with_message(label_text)
                    .with_color(color),
            )
            .finish()
            .write((filename, Source::from(source)), &mut output)
            .ok();
    }

    String::from_utf8(output).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_display() {
        let d = Diagnostic::error(0..5, "reference to undefined thing #7");
        assert_eq!(d.to_string(), "error: reference to undefined thing #7");
    }

    #[test]
    fn render_points_at_the_span() {
        let source = "room #1 cell\nA damp cell.\ncontents #7\n";
        let diags = vec![
            Diagnostic::error(35..37, "reference to undefined thing #7")
                .with_label("not defined in the things section"),
        ];
        let output = render_diagnostics(source, "cell.wld", &diags);
        assert!(!output.is_empty());
        assert!(output.contains("reference to undefined thing #7"));
    }

    #[test]
    fn warnings_render_too() {
        let source = "thing #9 ghost\nNobody can reach it.\n";
        let diags = vec![Diagnostic::warning(0..14, "thing #9 is not placed anywhere")];
        let output = render_diagnostics(source, "ghost.wld", &diags);
        assert!(output.contains("thing #9 is not placed anywhere"));
    }
}
