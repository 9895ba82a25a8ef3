use crate::messages::MessageSeverity;
use libgqlc_parser::SourcePosition;

/// Machine-readable message codes.
pub mod codes {
    /// The document is not valid for the schema.
    pub const INVALID_DOCUMENT: &str = "INVALID_DOCUMENT";
    /// An operation nests fields deeper than the configured limit.
    pub const MAX_DEPTH_EXCEEDED: &str = "MAX_DEPTH_EXCEEDED";
    /// The document could not be lexed or parsed.
    pub const SYNTAX_ERROR: &str = "SYNTAX_ERROR";
    /// Construction met a syntax node it cannot place.
    pub const UNRECOGNIZED_NODE: &str = "UNRECOGNIZED_NODE";
}

/// One diagnostic produced while compiling a document.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GraphMessage {
    pub(crate) severity: MessageSeverity,
    pub(crate) rule_number: Option<&'static str>,
    pub(crate) anchor: Option<&'static str>,
    pub(crate) code: &'static str,
    pub(crate) message: String,
    pub(crate) position: Option<SourcePosition>,
}
impl GraphMessage {
    pub fn new(
        severity: MessageSeverity,
        code: &'static str,
        message: impl Into<String>,
        position: Option<SourcePosition>,
    ) -> Self {
        Self {
            severity,
            rule_number: None,
            anchor: None,
            code,
            message: message.into(),
            position,
        }
    }

    /// A critical [`codes::INVALID_DOCUMENT`] message raised by a validation
    /// rule.
    pub fn from_rule(
        rule_number: &'static str,
        anchor: &'static str,
        message: impl Into<String>,
        position: Option<SourcePosition>,
    ) -> Self {
        Self {
            rule_number: Some(rule_number),
            anchor: Some(anchor),
            ..Self::new(MessageSeverity::Critical, codes::INVALID_DOCUMENT, message, position)
        }
    }

    pub fn severity(&self) -> MessageSeverity {
        self.severity
    }

    /// The numbered requirement of the GraphQL specification this message
    /// enforces, e.g. `5.8.3`.
    pub fn rule_number(&self) -> Option<&'static str> {
        self.rule_number
    }

    /// A URL into the GraphQL specification for [`Self::rule_number()`].
    pub fn anchor(&self) -> Option<&'static str> {
        self.anchor
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn position(&self) -> Option<SourcePosition> {
        self.position
    }

    pub fn is_critical(&self) -> bool {
        self.severity == MessageSeverity::Critical
    }
}
impl std::fmt::Display for GraphMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(position) = self.position {
            write!(f, "{position}: ")?;
        }
        write!(f, "{} [{}]: {}", self.severity, self.code, self.message)?;
        if let Some(rule_number) = self.rule_number {
            write!(f, " (rule {rule_number})")?;
        }
        Ok(())
    }
}
