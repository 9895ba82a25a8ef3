use crate::CompilerConfig;
use crate::construction::ConstructionContext;
use crate::document::DocumentPart;
use crate::document::PartId;
use crate::document::QueryDocument;
use crate::messages::GraphMessage;
use crate::messages::MessageCollection;
use crate::schema::Schema;
use libgqlc_parser::SourcePosition;

/// A rule run against each syntax node while the document is constructed.
///
/// `execute` returns `false` to skip the node's subtree.
pub struct ConstructionRule {
    pub rule_number: &'static str,
    pub anchor: &'static str,
    pub applies: fn(&ConstructionContext<'_, '_, '_>) -> bool,
    pub execute: fn(&ConstructionContext<'_, '_, '_>, &mut RuleMessages<'_>) -> bool,
}

/// A rule run once against the whole constructed document.
pub struct DocumentRule {
    pub rule_number: &'static str,
    pub anchor: &'static str,
    pub execute: fn(&DocumentContext<'_, '_>, &mut RuleMessages<'_>),
}

/// A rule run against every part it applies to, in pre-order.
pub struct PartRule {
    pub rule_number: &'static str,
    pub anchor: &'static str,
    pub applies: fn(&PartContext<'_, '_>) -> bool,
    pub execute: fn(&PartContext<'_, '_>, &mut RuleMessages<'_>),
}

/// Writes critical messages stamped with one rule's number and anchor.
pub struct RuleMessages<'a> {
    messages: &'a mut MessageCollection,
    rule_number: &'static str,
    anchor: &'static str,
}
impl<'a> RuleMessages<'a> {
    pub(crate) fn new(
        messages: &'a mut MessageCollection,
        rule_number: &'static str,
        anchor: &'static str,
    ) -> Self {
        Self {
            messages,
            rule_number,
            anchor,
        }
    }

    pub fn error(&mut self, message: impl Into<String>, position: SourcePosition) {
        self.messages.add(GraphMessage::from_rule(
            self.rule_number,
            self.anchor,
            message,
            Some(position),
        ));
    }

    /// A writer for a numbered sub-requirement of this rule.
    pub fn with_rule(
        &mut self,
        rule_number: &'static str,
        anchor: &'static str,
    ) -> RuleMessages<'_> {
        RuleMessages::new(&mut *self.messages, rule_number, anchor)
    }
}

/// What a [`DocumentRule`] sees.
#[derive(Clone, Copy)]
pub struct DocumentContext<'a, 'schema> {
    pub document: &'a QueryDocument<'schema>,
    pub schema: &'schema Schema,
    pub config: &'a CompilerConfig,
}

/// What a [`PartRule`] sees: the document plus the part being checked.
#[derive(Clone, Copy)]
pub struct PartContext<'a, 'schema> {
    pub document: &'a QueryDocument<'schema>,
    pub schema: &'schema Schema,
    pub config: &'a CompilerConfig,
    pub id: PartId,
    pub part: &'a DocumentPart<'schema>,
}
impl<'a, 'schema> PartContext<'a, 'schema> {
    pub fn parent(&self) -> Option<&'a DocumentPart<'schema>> {
        self.part.parent().map(|id| self.document.part(id))
    }

    pub fn position(&self) -> SourcePosition {
        self.part.position()
    }
}
