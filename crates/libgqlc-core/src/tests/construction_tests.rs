use crate::CompilerConfig;
use crate::QueryCompiler;
use crate::construction::ConstructionError;
use crate::construction::DocumentGenerator;
use crate::document::ArgumentTarget;
use crate::document::PartKind;
use crate::document::QueryDocument;
use crate::document::SuppliedValue;
use crate::messages::MessageCollection;
use crate::messages::codes;
use crate::schema::OperationKind;
use crate::tests::utils::compile;
use crate::tests::utils::compile_with;
use crate::tests::utils::test_schema;
use libgqlc_parser::SourceSpan;
use libgqlc_parser::SyntaxTree;
use libgqlc_parser::parse_document;
use libgqlc_parser::syntax::SyntaxNodeKind;

fn field_parents<'a>(document: &'a QueryDocument<'_>, requested_name: &str) -> Vec<&'a str> {
    document
        .iter()
        .filter_map(|id| document.field_selection(id))
        .filter(|selection| selection.requested_name() == requested_name)
        .map(|selection| selection.parent_type())
        .collect()
}

// =============================================================================
// Operations and fragments
// =============================================================================

#[test]
fn operations_bind_to_root_types() {
    let schema = test_schema();
    let outcome = compile(
        &schema,
        "query Q { version } mutation M { rename(id: 1, name: \"n\") { id } } \
         subscription S { tick }",
    );
    assert!(outcome.is_success());
    let document = outcome.document.expect("document is constructed");

    let roots: Vec<_> = document
        .roots()
        .iter()
        .filter_map(|id| document.part(*id).as_operation())
        .map(|op| (op.kind(), op.root_type()))
        .collect();
    assert_eq!(
        roots,
        vec![
            (OperationKind::Query, "Query"),
            (OperationKind::Mutation, "Mutation"),
            (OperationKind::Subscription, "Subscription"),
        ],
    );
    assert_eq!(document.operation("M"), Some(document.roots()[1]));
}

#[test]
fn operation_tracks_field_depth() {
    let schema = test_schema();
    let document = compile(&schema, "{ version user(id: 1) { friends { name } } }")
        .document
        .expect("document is constructed");
    let operation = document
        .part(document.roots()[0])
        .as_operation()
        .expect("first root is an operation");
    assert_eq!(operation.field_depth(), 3);
}

#[test]
fn fragments_are_registered_by_name() {
    let schema = test_schema();
    let document = compile(
        &schema,
        "{ user(id: 1) { ...F } } fragment F on User { name }",
    )
    .document
    .expect("document is constructed");

    let fragment = document.fragment("F").expect("F is registered");
    assert_eq!(fragment.type_condition(), "User");
    assert!(fragment.is_referenced());
    assert_eq!(field_parents(&document, "name"), vec!["User"]);
}

#[test]
fn variables_are_registered_on_their_operation() {
    let schema = test_schema();
    let document = compile(&schema, "query Q($id: ID!, $n: Int = 3) { user(id: $id) { id } }")
        .document
        .expect("document is constructed");
    let operation = document
        .part(document.roots()[0])
        .as_operation()
        .expect("first root is an operation");

    assert_eq!(operation.variables().names().collect::<Vec<_>>(), vec!["id", "n"]);
    let n = operation
        .variables()
        .get("n")
        .and_then(|id| document.part(id).as_variable())
        .expect("$n is declared");
    assert_eq!(n.raw_type(), "Int");
    let default = n.default_value().expect("$n has a default");
    assert_eq!(
        document.part(default).as_value().map(|value| value.value().describe()),
        Some("3".to_string()),
    );
}

// =============================================================================
// Selections
// =============================================================================

#[test]
fn inline_fragment_fields_join_the_enclosing_selection_set() {
    let schema = test_schema();
    let document = compile(&schema, "{ pet { name ... on Dog { barks } } }")
        .document
        .expect("document is constructed");

    let pet = document
        .iter()
        .find(|id| {
            document
                .field_selection(*id)
                .is_some_and(|field| field.requested_name() == "pet")
        })
        .and_then(|id| document.field_selection(id))
        .expect("pet is selected");
    let selection_set = pet.selection_set().expect("pet has a selection set");
    let kinds: Vec<_> = document
        .part(selection_set)
        .children()
        .iter()
        .map(|id| document.part(*id).kind().name())
        .collect();
    assert_eq!(kinds, vec!["FieldSelection", "InlineFragment", "FieldSelection"]);
    assert_eq!(field_parents(&document, "barks"), vec!["Dog"]);
    assert_eq!(field_parents(&document, "name"), vec!["Pet"]);
}

#[test]
fn typename_on_abstract_type_binds_each_concrete_type() {
    let schema = test_schema();
    let document = compile(&schema, "{ pet { __typename } }")
        .document
        .expect("document is constructed");
    assert_eq!(field_parents(&document, "__typename"), vec!["Dog", "Cat"]);
}

#[test]
fn typename_expansion_can_be_disabled() {
    let schema = test_schema();
    let config = CompilerConfig {
        typename_expands_abstract_types: false,
        ..CompilerConfig::default()
    };
    let document = compile_with(&schema, config, "{ pet { __typename } }")
        .document
        .expect("document is constructed");
    assert_eq!(field_parents(&document, "__typename"), vec!["Pet"]);
}

#[test]
fn directives_are_inherited_by_later_parts_in_scope() {
    let schema = test_schema();
    let document = compile(&schema, "{ pet @tag(name: \"t\") { name } }")
        .document
        .expect("document is constructed");

    let directive = document
        .iter()
        .find(|id| document.part(*id).as_directive().is_some())
        .expect("directive is attached");
    let name = document
        .iter()
        .find(|id| {
            document
                .field_selection(*id)
                .is_some_and(|field| field.requested_name() == "name")
        })
        .expect("name is selected");
    assert_eq!(document.part(name).inherited_directives(), &[directive]);
}

#[test]
fn arguments_bind_to_their_definitions() {
    let schema = test_schema();
    let document = compile(&schema, "{ users(filter: { required: true, color: RED }) { id } }")
        .document
        .expect("document is constructed");

    let targets: Vec<_> = document
        .iter()
        .filter_map(|id| document.part(id).as_argument())
        .map(|argument| match argument.target() {
            ArgumentTarget::Argument(definition) => format!("arg {}", definition.name()),
            ArgumentTarget::InputField(field) => format!("input {}", field.name()),
            ArgumentTarget::Undefined => "undefined".to_string(),
        })
        .collect();
    assert_eq!(targets, vec!["arg filter", "input required", "input color"]);

    let values: Vec<_> = document
        .iter()
        .filter_map(|id| document.part(id).as_value())
        .map(|value| value.value().clone())
        .collect();
    assert!(matches!(values[0], SuppliedValue::Complex));
    assert_eq!(values[2], SuppliedValue::Enum("RED".to_string()));
}

// =============================================================================
// Unrecognized nodes
// =============================================================================

#[test]
fn unrecognized_node_stops_construction() {
    let schema = test_schema();
    let mut tree = SyntaxTree::new("");
    let root = tree.root();
    tree.append_child(root, SyntaxNodeKind::Field, SourceSpan::default());

    let config = CompilerConfig::default();
    let mut messages = MessageCollection::new();
    let result = DocumentGenerator::new(&schema, &config).generate(&tree, &mut messages);
    assert!(matches!(
        result,
        Err(ConstructionError::UnrecognizedNode {
            kind: SyntaxNodeKind::Field,
            parent: Some(SyntaxNodeKind::Document),
            ..
        }),
    ));
}

#[test]
fn unrecognized_node_yields_one_critical_message_and_no_document() {
    let schema = test_schema();
    let source = "{ pet { name } }";
    let mut tree = parse_document(source).expect("source parses");
    // A value where a selection belongs.
    let selection_set = tree
        .iter()
        .find(|(_, node)| node.kind == SyntaxNodeKind::SelectionSet)
        .map(|(id, _)| id)
        .expect("tree has a selection set");
    tree.append_child(selection_set, SyntaxNodeKind::NullValue, SourceSpan::default());

    let outcome = QueryCompiler::new(&schema).compile_tree(&tree);
    assert!(outcome.document.is_none());
    assert_eq!(outcome.messages.len(), 1);
    let message = outcome.messages.iter().next().expect("one message");
    assert!(message.is_critical());
    assert_eq!(message.code(), codes::UNRECOGNIZED_NODE);
    assert_eq!(message.rule_number(), None);
}
