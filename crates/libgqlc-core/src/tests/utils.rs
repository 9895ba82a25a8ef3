use crate::CompileOutcome;
use crate::CompilerConfig;
use crate::QueryCompiler;
use crate::Schema;
use crate::SchemaBuilder;

pub const TEST_SCHEMA: &str = r#"
schema { query: Query mutation: Mutation subscription: Subscription }

directive @cached(ttl: Int!) on FIELD
directive @tag(name: String!) repeatable on FIELD | FRAGMENT_SPREAD | INLINE_FRAGMENT

scalar DateTime

enum Color { RED GREEN BLUE }

input UserFilter {
  name: String
  color: Color
  minAge: Int! = 0
  required: Boolean!
  nested: UserFilter
  tags: [String!]
}

interface Node { id: ID! }
interface Pet { name: String }

type User implements Node {
  id: ID!
  name: String
  friends(first: Int): [User!]!
  avatar(size: Int! = 64): String
  profile(ctx: ID! @internal, parent: ID! @source): String
}

type Dog implements Pet & Node { id: ID! name: String barks: Boolean nickname: String }
type Cat implements Pet & Node { id: ID! name: String meows: Boolean nickname: Int }

union SearchResult = User | Dog

type Query {
  user(id: ID!): User
  users(first: Int, filter: UserFilter): [User!]!
  node(id: ID!): Node
  search(term: String!): [SearchResult!]!
  pet: Pet
  version: String
  echo(value: String, values: [Int!], color: Color, at: DateTime, size: Float): String
}

type Mutation {
  rename(id: ID!, name: String!): User
}

type Subscription {
  feed: Feed @virtual
  userAdded: User
  tick: Int
}

type Feed { latest: FeedPage @virtual }
type FeedPage { item: String other: String }
"#;

pub fn test_schema() -> Schema {
    schema_from(TEST_SCHEMA)
}

pub fn schema_from(sdl: &str) -> Schema {
    SchemaBuilder::new()
        .load_str(None, sdl)
        .and_then(|builder| builder.build())
        .unwrap_or_else(|err| panic!("test schema is invalid: {err}"))
}

pub fn compile<'schema>(schema: &'schema Schema, source: &str) -> CompileOutcome<'schema> {
    QueryCompiler::new(schema).compile(source)
}

pub fn compile_with<'schema>(
    schema: &'schema Schema,
    config: CompilerConfig,
    source: &str,
) -> CompileOutcome<'schema> {
    QueryCompiler::with_config(schema, config).compile(source)
}

/// The rule number of every message, in order.
pub fn rule_numbers(outcome: &CompileOutcome<'_>) -> Vec<&'static str> {
    outcome
        .messages
        .iter()
        .map(|message| message.rule_number().unwrap_or("-"))
        .collect()
}

/// The text of every message.
pub fn message_texts<'a>(outcome: &'a CompileOutcome<'_>) -> Vec<&'a str> {
    outcome.messages.iter().map(|message| message.message()).collect()
}

pub fn assert_valid(schema: &Schema, source: &str) {
    let outcome = compile(schema, source);
    assert!(
        outcome.is_success(),
        "expected {source:?} to be valid, got: {:#?}",
        message_texts(&outcome),
    );
}

/// Compiles `source` and asserts it produced exactly one message, from
/// `rule_number`, whose text is returned.
pub fn single_error(schema: &Schema, source: &str, rule_number: &str) -> String {
    let outcome = compile(schema, source);
    assert_eq!(
        rule_numbers(&outcome),
        vec![rule_number],
        "unexpected messages for {source:?}: {:#?}",
        message_texts(&outcome),
    );
    outcome.messages.iter().map(|m| m.message().to_string()).collect()
}
