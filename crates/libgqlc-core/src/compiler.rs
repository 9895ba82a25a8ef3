use crate::CompilerConfig;
use crate::construction::DocumentGenerator;
use crate::document::QueryDocument;
use crate::messages::GraphMessage;
use crate::messages::MessageCollection;
use crate::messages::MessageSeverity;
use crate::messages::codes;
use crate::rules::DocumentValidator;
use crate::schema::Schema;
use libgqlc_parser::SyntaxError;
use libgqlc_parser::SyntaxTree;
use libgqlc_parser::parse_document_with_options;

/// Compiles executable documents against one [`Schema`].
///
/// The compiler keeps no state between documents; a single schema may be
/// shared by compilers on many threads.
#[derive(Clone, Debug)]
pub struct QueryCompiler<'schema> {
    schema: &'schema Schema,
    config: CompilerConfig,
}

/// What compiling one document produced.
///
/// The document must be treated as unusable whenever
/// [`messages`](Self::messages) holds a critical message.
#[derive(Debug)]
pub struct CompileOutcome<'schema> {
    /// Absent when the source failed to parse or construction met a node it
    /// could not place.
    pub document: Option<QueryDocument<'schema>>,
    pub messages: MessageCollection,
    /// The lexical or syntax error that stopped compilation, if any. It is
    /// also recorded in `messages`.
    pub syntax_error: Option<SyntaxError>,
}
impl CompileOutcome<'_> {
    pub fn is_success(&self) -> bool {
        self.document.is_some() && self.messages.is_success()
    }
}

impl<'schema> QueryCompiler<'schema> {
    pub fn new(schema: &'schema Schema) -> Self {
        Self::with_config(schema, CompilerConfig::default())
    }

    pub fn with_config(schema: &'schema Schema, config: CompilerConfig) -> Self {
        Self { schema, config }
    }

    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    pub fn schema(&self) -> &'schema Schema {
        self.schema
    }

    /// Parses, constructs and validates `source`.
    pub fn compile(&self, source: &str) -> CompileOutcome<'schema> {
        match parse_document_with_options(source, &self.config.parser_options()) {
            Ok(tree) => self.compile_tree(&tree),
            Err(err) => {
                log::debug!("syntax error: {}", err.format_oneline());
                let mut messages = MessageCollection::new();
                messages.add(GraphMessage::new(
                    MessageSeverity::Critical,
                    codes::SYNTAX_ERROR,
                    err.message(),
                    Some(err.span().start_inclusive),
                ));
                CompileOutcome {
                    document: None,
                    messages,
                    syntax_error: Some(err),
                }
            },
        }
    }

    /// Constructs and validates an already-built syntax tree.
    pub fn compile_tree(&self, tree: &SyntaxTree<'_>) -> CompileOutcome<'schema> {
        let mut messages = MessageCollection::new();
        let generator = DocumentGenerator::new(self.schema, &self.config);
        let document = match generator.generate(tree, &mut messages) {
            Ok(document) => document,
            Err(err) => {
                log::debug!("construction failed: {err}");
                // Messages from the abandoned walk describe a document that
                // no longer exists.
                let mut messages = MessageCollection::new();
                messages.add(GraphMessage::new(
                    MessageSeverity::Critical,
                    codes::UNRECOGNIZED_NODE,
                    err.to_string(),
                    Some(err.position()),
                ));
                return CompileOutcome {
                    document: None,
                    messages,
                    syntax_error: None,
                };
            },
        };

        DocumentValidator::new(self.schema, &self.config).validate(&document, &mut messages);
        log::debug!(
            "compiled document with {} messages ({} critical)",
            messages.len(),
            messages.critical_count(),
        );
        CompileOutcome {
            document: Some(document),
            messages,
            syntax_error: None,
        }
    }

    /// Runs the validation rules over `document` again, returning only the
    /// messages this run produced.
    pub fn validate(&self, document: &QueryDocument<'schema>) -> MessageCollection {
        let mut messages = MessageCollection::new();
        DocumentValidator::new(self.schema, &self.config).validate(document, &mut messages);
        messages
    }
}
