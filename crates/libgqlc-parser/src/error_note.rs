use crate::SmallVec;
use crate::SourceSpan;

/// The kind of an error note (determines how the note is rendered).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorNoteKind {
    /// General context or explanation about the error.
    ///
    /// Rendered as `= note: ...` in CLI output.
    General,

    /// Actionable suggestion for fixing the error.
    ///
    /// Rendered as `= help: ...` in CLI output.
    Help,

    /// Reference to the GraphQL specification.
    ///
    /// Rendered as `= spec: ...` in CLI output.
    Spec,
}

/// An error note providing additional context about a [`SyntaxError`].
///
/// [`SyntaxError`]: crate::SyntaxError
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorNote {
    pub kind: ErrorNoteKind,
    pub message: String,

    /// Optional span pointing to a related location (e.g. where an
    /// unterminated string was opened).
    pub span: Option<SourceSpan>,
}

impl ErrorNote {
    pub fn general(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorNoteKind::General,
            message: message.into(),
            span: None,
        }
    }

    pub fn general_with_span(message: impl Into<String>, span: SourceSpan) -> Self {
        Self {
            kind: ErrorNoteKind::General,
            message: message.into(),
            span: Some(span),
        }
    }

    pub fn help(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorNoteKind::Help,
            message: message.into(),
            span: None,
        }
    }

    pub fn spec(url: impl Into<String>) -> Self {
        Self {
            kind: ErrorNoteKind::Spec,
            message: url.into(),
            span: None,
        }
    }
}

/// Most errors carry 0-2 notes.
pub type ErrorNotes = SmallVec<[ErrorNote; 2]>;
