use crate::CompilerConfig;
use crate::document::QueryDocument;
use crate::messages::GraphMessage;
use crate::messages::MessageCollection;
use crate::messages::MessageSeverity;
use crate::messages::codes;
use crate::rules::COMPLETION_RULES;
use crate::rules::DOCUMENT_RULES;
use crate::rules::DocumentContext;
use crate::rules::DocumentRule;
use crate::rules::PART_RULES;
use crate::rules::PartContext;
use crate::rules::RuleMessages;
use crate::rules::walk::selection_depth;
use crate::schema::Schema;

/// Runs the document, part and completion rule tables over a constructed
/// [`QueryDocument`].
///
/// Validation only appends messages and sets "referenced" flags, so running
/// it twice over one document yields the same messages both times.
pub struct DocumentValidator<'a, 'schema> {
    schema: &'schema Schema,
    config: &'a CompilerConfig,
}
impl<'a, 'schema> DocumentValidator<'a, 'schema> {
    pub fn new(schema: &'schema Schema, config: &'a CompilerConfig) -> Self {
        Self { schema, config }
    }

    pub fn validate(&self, document: &QueryDocument<'schema>, messages: &mut MessageCollection) {
        let before = messages.len();
        let document_ctx = DocumentContext {
            document,
            schema: self.schema,
            config: self.config,
        };

        self.run_document_rules(DOCUMENT_RULES, &document_ctx, messages);
        self.check_query_depth(document, messages);

        let mut executed = 0usize;
        for id in document.iter() {
            let part = document.part(id);
            let ctx = PartContext {
                document,
                schema: self.schema,
                config: self.config,
                id,
                part,
            };
            for rule in PART_RULES {
                if !(rule.applies)(&ctx) {
                    continue;
                }
                executed += 1;
                let mut writer = RuleMessages::new(messages, rule.rule_number, rule.anchor);
                (rule.execute)(&ctx, &mut writer);
            }
        }

        self.run_document_rules(COMPLETION_RULES, &document_ctx, messages);
        log::debug!(
            "validated {} document parts with {executed} part rule executions; {} new messages",
            document.len(),
            messages.len() - before,
        );
    }

    fn run_document_rules(
        &self,
        rules: &[DocumentRule],
        ctx: &DocumentContext<'_, 'schema>,
        messages: &mut MessageCollection,
    ) {
        for rule in rules {
            log::trace!("running document rule {}", rule.rule_number);
            let mut writer = RuleMessages::new(messages, rule.rule_number, rule.anchor);
            (rule.execute)(ctx, &mut writer);
        }
    }

    fn check_query_depth(&self, document: &QueryDocument<'schema>, messages: &mut MessageCollection) {
        let Some(max_depth) = self.config.max_query_depth else {
            return;
        };
        for id in document.operations().iter() {
            let part = document.part(id);
            let Some(operation) = part.as_operation() else {
                continue;
            };
            let Some(selection_set) = operation.selection_set() else {
                continue;
            };
            let depth = selection_depth(document, selection_set, &mut vec![]);
            if depth > max_depth {
                messages.add(GraphMessage::new(
                    MessageSeverity::Critical,
                    codes::MAX_DEPTH_EXCEEDED,
                    format!(
                        "{} nests fields {depth} levels deep, exceeding the limit of {max_depth}",
                        operation.describe(),
                    ),
                    Some(part.position()),
                ));
            }
        }
    }
}
