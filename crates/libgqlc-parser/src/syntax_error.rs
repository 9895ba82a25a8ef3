use crate::ErrorNote;
use crate::ErrorNoteKind;
use crate::ErrorNotes;
use crate::SourceSpan;
use crate::SyntaxErrorKind;
use std::path::PathBuf;

/// A fatal lexical or syntax error with location information and contextual
/// notes.
///
/// Lexing and tree building stop at the first `SyntaxError`; no partial tree
/// is produced. The payload is boxed so that the `Result`s threaded through
/// the recursive builders stay pointer-sized.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct SyntaxError {
    data: Box<SyntaxErrorData>,
}

#[derive(Debug, Clone)]
struct SyntaxErrorData {
    /// Examples: "expected `:`, received `String`", "unterminated string".
    message: String,

    /// The primary span where the error was detected.
    ///
    /// - For "unexpected token" errors: the unexpected token's span
    /// - For invalid numbers, names and escapes: the offending character
    /// - For unterminated strings: the opening delimiter
    span: SourceSpan,

    kind: SyntaxErrorKind,
    notes: ErrorNotes,
    file_path: Option<PathBuf>,
}

impl SyntaxError {
    pub fn new(
        message: impl Into<String>,
        span: SourceSpan,
        kind: SyntaxErrorKind,
    ) -> Self {
        Self {
            data: Box::new(SyntaxErrorData {
                message: message.into(),
                span,
                kind,
                notes: ErrorNotes::new(),
                file_path: None,
            }),
        }
    }

    /// Builds the canonical "expected X, received Y" error.
    pub fn unexpected_token(
        expected: impl Into<String>,
        found: impl Into<String>,
        span: SourceSpan,
    ) -> Self {
        let expected = expected.into();
        let found = found.into();
        Self::new(
            format!("expected {expected}, received `{found}`"),
            span,
            SyntaxErrorKind::UnexpectedToken { expected, found },
        )
    }

    /// Builds an "unexpected end of input" error.
    pub fn unexpected_eof(expected: impl Into<String>, span: SourceSpan) -> Self {
        let expected = expected.into();
        Self::new(
            format!("expected {expected}, received end of input"),
            span,
            SyntaxErrorKind::UnexpectedEof { expected },
        )
    }

    pub fn message(&self) -> &str {
        &self.data.message
    }

    pub fn span(&self) -> &SourceSpan {
        &self.data.span
    }

    pub fn kind(&self) -> &SyntaxErrorKind {
        &self.data.kind
    }

    pub fn notes(&self) -> &ErrorNotes {
        &self.data.notes
    }

    pub fn file_path(&self) -> Option<&PathBuf> {
        self.data.file_path.as_ref()
    }

    /// Associates this error with the file the source text was read from.
    pub fn with_file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data.file_path = Some(path.into());
        self
    }

    pub fn with_note(mut self, note: ErrorNote) -> Self {
        self.data.notes.push(note);
        self
    }

    pub fn add_note(&mut self, message: impl Into<String>) {
        self.data.notes.push(ErrorNote::general(message));
    }

    pub fn add_note_with_span(&mut self, message: impl Into<String>, span: SourceSpan) {
        self.data.notes.push(ErrorNote::general_with_span(message, span));
    }

    pub fn add_help(&mut self, message: impl Into<String>) {
        self.data.notes.push(ErrorNote::help(message));
    }

    pub fn add_spec(&mut self, url: impl Into<String>) {
        self.data.notes.push(ErrorNote::spec(url));
    }

    fn display_file_name(&self) -> String {
        self.data.file_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<input>".to_string())
    }

    /// Formats this error as a single-line summary.
    ///
    /// ```text
    /// query.graphql:5:12: error: expected `:`, received `String`
    /// ```
    pub fn format_oneline(&self) -> String {
        format!(
            "{}:{}: error: {}",
            self.display_file_name(),
            self.data.span.start_inclusive,
            self.data.message,
        )
    }

    /// Formats this error as a diagnostic for CLI output.
    ///
    /// ```text
    /// error: expected `:`, received `String`
    ///   --> query.graphql:5:12
    ///    |
    ///  5 |     userName String
    ///    |              ^^^^^^
    ///    = help: ...
    /// ```
    ///
    /// When `source` is `None`, snippets are omitted but line/column
    /// information is still shown.
    pub fn format_detailed(&self, source: Option<&str>) -> String {
        let mut output = String::new();

        output.push_str("error: ");
        output.push_str(&self.data.message);
        output.push('\n');
        output.push_str(&format!(
            "  --> {}:{}\n",
            self.display_file_name(),
            self.data.span.start_inclusive,
        ));

        if let Some(src) = source
            && let Some(snippet) = format_snippet(src, &self.data.span, '^')
        {
            output.push_str(&snippet);
        }

        for note in &self.data.notes {
            let prefix = match note.kind {
                ErrorNoteKind::General => "note",
                ErrorNoteKind::Help => "help",
                ErrorNoteKind::Spec => "spec",
            };
            output.push_str(&format!("   = {prefix}: {}\n", note.message));

            if let (Some(note_span), Some(src)) = (&note.span, source)
                && let Some(snippet) = format_snippet(src, note_span, '-')
            {
                output.push_str(&snippet);
            }
        }

        output
    }
}

fn format_snippet(source: &str, span: &SourceSpan, marker: char) -> Option<String> {
    let line_num = span.start_inclusive.line();
    let line_content = source.lines().nth(line_num)?;
    let display_line_num = line_num + 1;
    let width = display_line_num.to_string().len().max(2);

    let col_start = span.start_inclusive.column();
    let underline_len =
        if span.end_exclusive.line() == line_num
            && span.end_exclusive.column() > col_start {
            span.end_exclusive.column() - col_start
        } else {
            1
        };

    let mut output = String::new();
    output.push_str(&format!("{:>width$} |\n", ""));
    output.push_str(&format!("{display_line_num:>width$} | {line_content}\n"));
    output.push_str(&format!(
        "{:>width$} | {:>padding$}{}\n",
        "",
        "",
        marker.to_string().repeat(underline_len),
        padding = col_start,
    ));
    Some(output)
}
