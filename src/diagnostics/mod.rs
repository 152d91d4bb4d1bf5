//! Diagnostics for fatal run errors.
//!
//! Errors are plain `thiserror` enums; [`Diagnostic`] turns one into the
//! text printed on stderr before the binary exits, with the offending token
//! underlined when the input text is available.

pub mod error;
pub mod position;

use std::fmt::Write as _;

pub use error::{InputError, QuodigiousError, Result, SearchError};
use position::{Position, Span};

use crate::search::bounds::{MAX_DIGIT_LENGTH, MIN_DIGIT_LENGTH};

/// Name shown in location lines.
pub const INPUT_NAME: &str = "stdin";

/// Kind of hint to display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintKind {
    Hint,
    Note,
}

impl HintKind {
    fn label(self) -> &'static str {
        match self {
            HintKind::Hint => "hint",
            HintKind::Note => "note",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    pub kind: HintKind,
    pub text: String,
}

impl Hint {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: HintKind::Hint,
            text: text.into(),
        }
    }

    pub fn note(text: impl Into<String>) -> Self {
        Self {
            kind: HintKind::Note,
            text: text.into(),
        }
    }
}

/// A renderable error report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
    pub span: Option<Span>,
    pub label: Option<String>,
    pub hints: Vec<Hint>,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            span: None,
            label: None,
            hints: Vec::new(),
        }
    }

    pub fn with_span(mut self, span: Span, label: impl Into<String>) -> Self {
        self.span = Some(span);
        self.label = Some(label.into());
        self
    }

    pub fn with_hint(mut self, hint: Hint) -> Self {
        self.hints.push(hint);
        self
    }

    /// Renders the report. When `source` is given and the diagnostic has a
    /// span, the offending line is echoed with a caret underline.
    pub fn render(&self, source: Option<&str>) -> String {
        let mut out = format!("error: {}", self.message);

        if let (Some(span), Some(source)) = (self.span, source) {
            let pos = Position::locate(source, span.start);
            let _ = write!(out, "\n  --> {INPUT_NAME}:{}:{}", pos.line, pos.column);

            let line_text = source.lines().nth(pos.line - 1).unwrap_or_default();
            let gutter = pos.line.to_string();
            let pad = " ".repeat(gutter.len());
            let width = source
                .get(span.start..span.end)
                .map_or(span.len(), |token| token.chars().count());
            let carets = "^".repeat(width.max(1));
            let indent = " ".repeat(pos.column - 1);

            let _ = write!(out, "\n{pad} |");
            let _ = write!(out, "\n{gutter} | {line_text}");
            let _ = write!(out, "\n{pad} | {indent}{carets}");
            if let Some(label) = &self.label {
                let _ = write!(out, " {label}");
            }
        }

        for hint in &self.hints {
            let _ = write!(out, "\n  = {}: {}", hint.kind.label(), hint.text);
        }

        out
    }
}

impl From<&QuodigiousError> for Diagnostic {
    fn from(err: &QuodigiousError) -> Self {
        let range_hint = || {
            Hint::text(format!(
                "digit lengths are whole numbers from {MIN_DIGIT_LENGTH} to {MAX_DIGIT_LENGTH}"
            ))
        };

        match err {
            QuodigiousError::Input(input @ InputError::Malformed { span, .. }) => {
                Diagnostic::error(input.to_string())
                    .with_span(*span, "not an unsigned integer")
                    .with_hint(range_hint())
            }
            QuodigiousError::Input(input @ InputError::OutOfRange { span, source, .. }) => {
                Diagnostic::error(input.to_string())
                    .with_span(*span, source.to_string())
                    .with_hint(range_hint())
                    .with_hint(Hint::note(format!(
                        "10^{} is the widest exclusive bound that fits in 64 bits",
                        MAX_DIGIT_LENGTH
                    )))
            }
            other => Diagnostic::error(other.to_string()),
        }
    }
}
