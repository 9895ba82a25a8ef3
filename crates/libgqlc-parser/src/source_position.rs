/// A position within a source document.
///
/// This is a pure data struct. The lexer computes position values as it scans
/// input; every token, syntax node and diagnostic carries one.
///
/// # Indexing Convention
///
/// **All position values are 0-based:**
/// - `line`: 0 = first line of the document
/// - `column`: character count (not bytes) from the start of the line
/// - `byte_offset`: byte offset from the start of the document
///
/// Use [`SourcePosition::display_line()`] and
/// [`SourcePosition::display_column()`] when rendering for humans.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct SourcePosition {
    line: usize,
    column: usize,
    byte_offset: usize,
}

impl SourcePosition {
    /// Create a new SourcePosition.
    ///
    /// # Arguments
    /// - `line`: 0-based line number (0 = first line)
    /// - `column`: 0-based character count within the current line
    /// - `byte_offset`: 0-based byte offset from document start
    pub const fn new(line: usize, column: usize, byte_offset: usize) -> Self {
        Self {
            line,
            column,
            byte_offset,
        }
    }

    /// Returns the 0-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 0-based character count within the current line.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Returns the 0-based byte offset from document start.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    /// The 1-based line number, for display.
    pub fn display_line(&self) -> usize {
        self.line + 1
    }

    /// The 1-based column number, for display.
    pub fn display_column(&self) -> usize {
        self.column + 1
    }

    /// Returns the position reached after scanning `text` starting from this
    /// position.
    ///
    /// `\r\n` counts as a single line terminator.
    pub fn advanced_over(&self, text: &str) -> Self {
        let mut line = self.line;
        let mut column = self.column;
        let mut last_was_cr = false;
        for ch in text.chars() {
            match ch {
                '\n' if last_was_cr => {
                    last_was_cr = false;
                },
                '\n' => {
                    line += 1;
                    column = 0;
                },
                '\r' => {
                    line += 1;
                    column = 0;
                    last_was_cr = true;
                },
                _ => {
                    column += 1;
                    last_was_cr = false;
                },
            }
        }
        Self {
            line,
            column,
            byte_offset: self.byte_offset + text.len(),
        }
    }
}

impl std::fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.display_line(), self.display_column())
    }
}
