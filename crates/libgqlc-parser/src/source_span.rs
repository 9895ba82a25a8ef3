use crate::SourcePosition;

/// Represents a span of source text from start to end position.
///
/// The span is a half-open interval: `[start_inclusive, end_exclusive)`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct SourceSpan {
    pub start_inclusive: SourcePosition,
    pub end_exclusive: SourcePosition,
}

impl SourceSpan {
    pub const fn new(start: SourcePosition, end: SourcePosition) -> Self {
        Self {
            start_inclusive: start,
            end_exclusive: end,
        }
    }

    /// A zero-width span at `pos`.
    pub const fn at(pos: SourcePosition) -> Self {
        Self::new(pos, pos)
    }

    /// The slice of `source` covered by this span.
    ///
    /// Returns `None` if the span's byte offsets do not fall on character
    /// boundaries of `source` (e.g. the span came from a different document).
    pub fn slice<'src>(&self, source: &'src str) -> Option<&'src str> {
        source.get(self.start_inclusive.byte_offset()..self.end_exclusive.byte_offset())
    }

    /// Extends this span so that it ends where `other` ends.
    pub fn to(self, other: SourceSpan) -> SourceSpan {
        SourceSpan::new(self.start_inclusive, other.end_exclusive)
    }
}
