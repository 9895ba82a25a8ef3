use crate::CompilerConfig;
use crate::construction::ArgumentSource;
use crate::construction::ConstructionContext;
use crate::construction::ConstructionError;
use crate::construction::ContextItems;
use crate::document::ArgumentTarget;
use crate::document::DirectivePart;
use crate::document::DocumentPart;
use crate::document::DocumentScope;
use crate::document::FieldSelectionPart;
use crate::document::FieldSelectionSetPart;
use crate::document::FragmentPart;
use crate::document::FragmentSpreadPart;
use crate::document::InlineFragmentPart;
use crate::document::InputArgumentPart;
use crate::document::OperationPart;
use crate::document::PartCollection;
use crate::document::PartId;
use crate::document::PartKind;
use crate::document::QueryDocument;
use crate::document::SuppliedValue;
use crate::document::SuppliedValuePart;
use crate::document::VariablePart;
use crate::messages::MessageCollection;
use crate::rules::CONSTRUCTION_RULES;
use crate::rules::RuleMessages;
use crate::schema::DirectiveLocation;
use crate::schema::Field;
use crate::schema::GraphType;
use crate::schema::OperationKind;
use crate::schema::Schema;
use crate::types::TypeExpression;
use libgqlc_parser::SyntaxTree;
use libgqlc_parser::syntax::SyntaxNodeKind;
use std::cell::Cell;
use std::rc::Rc;

type Result<T> = std::result::Result<T, ConstructionError>;

/// Walks a [`SyntaxTree`] depth-first and binds it to a [`Schema`].
///
/// Construction rules run against every node before it is bound; a rule
/// that fails skips the node's subtree and leaves a message behind. The walk
/// itself only fails on a node in a position no step accepts.
pub struct DocumentGenerator<'a, 'schema> {
    schema: &'schema Schema,
    config: &'a CompilerConfig,
}
impl<'a, 'schema> DocumentGenerator<'a, 'schema> {
    pub fn new(schema: &'schema Schema, config: &'a CompilerConfig) -> Self {
        Self { schema, config }
    }

    pub fn generate(
        &self,
        tree: &SyntaxTree<'_>,
        messages: &mut MessageCollection,
    ) -> Result<QueryDocument<'schema>> {
        let mut document = QueryDocument::new();
        let root = tree.root();
        for child in tree.children(root) {
            let ctx = ConstructionContext::new(
                self.schema,
                tree,
                child,
                DocumentScope::root(None),
                ContextItems::default(),
            );
            match ctx.node().kind {
                SyntaxNodeKind::Operation => self.visit_operation(&mut document, &ctx, messages)?,
                SyntaxNodeKind::Fragment => self.visit_fragment(&mut document, &ctx, messages)?,
                _ => return Err(ctx.unrecognized()),
            }
        }
        log::debug!(
            "constructed {} document parts from {} syntax nodes",
            document.len(),
            tree.len(),
        );
        Ok(document)
    }

    fn passes_construction_rules(
        &self,
        ctx: &ConstructionContext<'_, 'schema, '_>,
        messages: &mut MessageCollection,
    ) -> bool {
        for rule in CONSTRUCTION_RULES {
            if !(rule.applies)(ctx) {
                continue;
            }
            let mut writer = RuleMessages::new(messages, rule.rule_number, rule.anchor);
            if !(rule.execute)(ctx, &mut writer) {
                log::trace!(
                    "rule {} skipped the {:?} node at {}",
                    rule.rule_number,
                    ctx.node().kind,
                    ctx.position(),
                );
                return false;
            }
        }
        true
    }

    fn visit_operation(
        &self,
        document: &mut QueryDocument<'schema>,
        ctx: &ConstructionContext<'_, 'schema, '_>,
        messages: &mut MessageCollection,
    ) -> Result<()> {
        let node = ctx.node();
        let kind = match node.literal {
            None => OperationKind::Query,
            Some(keyword) => OperationKind::from_keyword(keyword).ok_or_else(|| ctx.unrecognized())?,
        };
        if !self.passes_construction_rules(ctx, messages) {
            return Ok(());
        }
        let Some(root_type) = self.schema.root_type(kind) else {
            return Ok(());
        };

        let operation = OperationPart {
            kind,
            name: node.name.map(str::to_string),
            root_type: root_type.name().to_string(),
            variables: PartCollection::new(),
            selection_set: None,
            field_depth: 0,
        };
        let id = document.push(
            None,
            DocumentPart::new(PartKind::Operation(operation), ctx.position(), vec![]),
        );
        document.operations.insert(node.name, id);

        let scope = DocumentScope::root(Some(root_type.name().to_string()));
        let items = ContextItems {
            operation: Some(id),
            owner: Some(id),
            directive_location: Some(match kind {
                OperationKind::Query => DirectiveLocation::Query,
                OperationKind::Mutation => DirectiveLocation::Mutation,
                OperationKind::Subscription => DirectiveLocation::Subscription,
            }),
            ..ContextItems::default()
        };

        for child in ctx.tree.children(ctx.node_id) {
            let child_ctx = ctx.descend_with(child, Rc::clone(&scope), items.clone());
            match child_ctx.node().kind {
                SyntaxNodeKind::VariableCollection => {
                    self.visit_variable_collection(document, &child_ctx, messages)?
                },
                SyntaxNodeKind::Directive => self.visit_directive(document, &child_ctx, messages)?,
                SyntaxNodeKind::SelectionSet => {
                    let selection_set = self.open_selection_set(document, &child_ctx, id, root_type);
                    if let PartKind::Operation(op) = &mut document.part_mut(id).kind {
                        op.selection_set = Some(selection_set);
                    }
                    let mut set_ctx = child_ctx;
                    set_ctx.items.selection_set = Some(selection_set);
                    self.visit_selections(document, &set_ctx, messages)?;
                },
                _ => return Err(child_ctx.unrecognized()),
            }
        }
        Ok(())
    }

    fn visit_fragment(
        &self,
        document: &mut QueryDocument<'schema>,
        ctx: &ConstructionContext<'_, 'schema, '_>,
        messages: &mut MessageCollection,
    ) -> Result<()> {
        let node = ctx.node();
        let (Some(name), Some(type_condition)) = (node.name, node.literal) else {
            return Err(ctx.unrecognized());
        };
        if !self.passes_construction_rules(ctx, messages) {
            return Ok(());
        }

        let fragment = FragmentPart {
            name: name.to_string(),
            type_condition: type_condition.to_string(),
            selection_set: None,
            referenced: Cell::new(false),
        };
        let id = document.push(
            None,
            DocumentPart::new(PartKind::Fragment(fragment), ctx.position(), vec![]),
        );
        document.fragments.insert(Some(name), id);

        let target = self
            .schema
            .type_by_name(type_condition)
            .filter(|graph_type| graph_type.is_composite());
        let scope = DocumentScope::root(target.map(|t| t.name().to_string()));
        let items = ContextItems {
            owner: Some(id),
            directive_location: Some(DirectiveLocation::FragmentDefinition),
            ..ContextItems::default()
        };

        for child in ctx.tree.children(ctx.node_id) {
            let child_ctx = ctx.descend_with(child, Rc::clone(&scope), items.clone());
            match child_ctx.node().kind {
                SyntaxNodeKind::Directive => self.visit_directive(document, &child_ctx, messages)?,
                SyntaxNodeKind::SelectionSet => {
                    // Selections against an unknown or leaf type cannot be
                    // bound; the fragment rules report the type instead.
                    let Some(target) = target else {
                        continue;
                    };
                    let selection_set = self.open_selection_set(document, &child_ctx, id, target);
                    if let PartKind::Fragment(fragment) = &mut document.part_mut(id).kind {
                        fragment.selection_set = Some(selection_set);
                    }
                    let mut set_ctx = child_ctx;
                    set_ctx.items.selection_set = Some(selection_set);
                    self.visit_selections(document, &set_ctx, messages)?;
                },
                _ => return Err(child_ctx.unrecognized()),
            }
        }
        Ok(())
    }

    fn open_selection_set(
        &self,
        document: &mut QueryDocument<'schema>,
        ctx: &ConstructionContext<'_, 'schema, '_>,
        parent: PartId,
        graph_type: &GraphType,
    ) -> PartId {
        let part = FieldSelectionSetPart {
            graph_type: graph_type.name().to_string(),
        };
        document.push(
            Some(parent),
            DocumentPart::new(
                PartKind::FieldSelectionSet(part),
                ctx.position(),
                ctx.scope.inherited_directives(),
            ),
        )
    }

    /// Visits the children of a `SelectionSet` node, appending them to the
    /// selection set part in the context items.
    fn visit_selections(
        &self,
        document: &mut QueryDocument<'schema>,
        ctx: &ConstructionContext<'_, 'schema, '_>,
        messages: &mut MessageCollection,
    ) -> Result<()> {
        for child in ctx.tree.children(ctx.node_id) {
            let child_ctx = ctx.descend(child);
            match child_ctx.node().kind {
                SyntaxNodeKind::Field => self.visit_field(document, &child_ctx, messages)?,
                SyntaxNodeKind::FragmentSpread => {
                    self.visit_fragment_spread(document, &child_ctx, messages)?
                },
                SyntaxNodeKind::InlineFragment => {
                    self.visit_inline_fragment(document, &child_ctx, messages)?
                },
                _ => return Err(child_ctx.unrecognized()),
            }
        }
        Ok(())
    }

    fn visit_field(
        &self,
        document: &mut QueryDocument<'schema>,
        ctx: &ConstructionContext<'_, 'schema, '_>,
        messages: &mut MessageCollection,
    ) -> Result<()> {
        let Some(requested_name) = ctx.node().name else {
            return Err(ctx.unrecognized());
        };
        if ctx.items.selection_set.is_none() {
            return Err(ctx.unrecognized());
        }
        if !self.passes_construction_rules(ctx, messages) {
            return Ok(());
        }
        let Some(scoped_type) = ctx.scoped_type() else {
            return Ok(());
        };

        let mut bindings = vec![];
        if requested_name == "__typename"
            && scoped_type.is_abstract()
            && self.config.typename_expands_abstract_types
        {
            for concrete in self.schema.expand_abstract_type(scoped_type.name()) {
                if let Some(field) = concrete.field(requested_name) {
                    bindings.push((field, concrete.name()));
                }
            }
        }
        if bindings.is_empty() {
            if let Some(field) = scoped_type.field(requested_name) {
                bindings.push((field, scoped_type.name()));
            }
        }

        for (field, parent_type) in bindings {
            self.bind_field(document, ctx, field, parent_type, messages)?;
        }
        Ok(())
    }

    fn bind_field(
        &self,
        document: &mut QueryDocument<'schema>,
        ctx: &ConstructionContext<'_, 'schema, '_>,
        field: &'schema Field,
        parent_type: &str,
        messages: &mut MessageCollection,
    ) -> Result<()> {
        let node = ctx.node();
        let selection = FieldSelectionPart {
            alias: node.alias.map(str::to_string),
            requested_name: node.name.unwrap_or_default().to_string(),
            field,
            parent_type: parent_type.to_string(),
            selection_set: None,
            swapped: false,
        };
        let id = document.push(
            ctx.items.selection_set,
            DocumentPart::new(
                PartKind::FieldSelection(selection),
                ctx.position(),
                ctx.scope.inherited_directives(),
            ),
        );

        let depth = ctx.items.field_depth + 1;
        if let Some(operation) = ctx.items.operation {
            if let PartKind::Operation(op) = &mut document.part_mut(operation).kind {
                op.field_depth = op.field_depth.max(depth);
            }
        }

        let return_type = self.schema.type_by_name(field.return_type());
        let scope = ctx.scope.restricted(field.return_type());
        let items = ContextItems {
            owner: Some(id),
            directive_location: Some(DirectiveLocation::Field),
            argument_source: ArgumentSource::Field(field),
            field_depth: depth,
            ..ctx.items.clone()
        };

        for child in ctx.tree.children(ctx.node_id) {
            let child_ctx = ctx.descend_with(child, Rc::clone(&scope), items.clone());
            match child_ctx.node().kind {
                SyntaxNodeKind::InputItemCollection => {
                    self.visit_input_items(document, &child_ctx, messages)?
                },
                SyntaxNodeKind::Directive => self.visit_directive(document, &child_ctx, messages)?,
                SyntaxNodeKind::SelectionSet => {
                    let Some(return_type) = return_type else {
                        continue;
                    };
                    let selection_set =
                        self.open_selection_set(document, &child_ctx, id, return_type);
                    if let PartKind::FieldSelection(selection) = &mut document.part_mut(id).kind {
                        selection.selection_set = Some(selection_set);
                    }
                    // A selection set under a leaf field is kept so the leaf
                    // rule can report it, but nothing inside it is bound.
                    if return_type.is_composite() {
                        let mut set_ctx = child_ctx;
                        set_ctx.items.selection_set = Some(selection_set);
                        self.visit_selections(document, &set_ctx, messages)?;
                    }
                },
                _ => return Err(child_ctx.unrecognized()),
            }
        }
        Ok(())
    }

    fn visit_fragment_spread(
        &self,
        document: &mut QueryDocument<'schema>,
        ctx: &ConstructionContext<'_, 'schema, '_>,
        messages: &mut MessageCollection,
    ) -> Result<()> {
        let Some(name) = ctx.node().name else {
            return Err(ctx.unrecognized());
        };
        if !self.passes_construction_rules(ctx, messages) {
            return Ok(());
        }

        let spread = FragmentSpreadPart {
            name: name.to_string(),
            parent_type: ctx.scope.graph_type().unwrap_or_default().to_string(),
        };
        let id = document.push(
            ctx.items.selection_set,
            DocumentPart::new(
                PartKind::FragmentSpread(spread),
                ctx.position(),
                ctx.scope.inherited_directives(),
            ),
        );

        let scope = ctx.scope.child();
        let items = ContextItems {
            owner: Some(id),
            directive_location: Some(DirectiveLocation::FragmentSpread),
            ..ctx.items.clone()
        };
        for child in ctx.tree.children(ctx.node_id) {
            let child_ctx = ctx.descend_with(child, Rc::clone(&scope), items.clone());
            match child_ctx.node().kind {
                SyntaxNodeKind::Directive => self.visit_directive(document, &child_ctx, messages)?,
                _ => return Err(child_ctx.unrecognized()),
            }
        }
        Ok(())
    }

    fn visit_inline_fragment(
        &self,
        document: &mut QueryDocument<'schema>,
        ctx: &ConstructionContext<'_, 'schema, '_>,
        messages: &mut MessageCollection,
    ) -> Result<()> {
        if !self.passes_construction_rules(ctx, messages) {
            return Ok(());
        }
        let type_condition = ctx.node().literal;
        let inline = InlineFragmentPart {
            type_condition: type_condition.map(str::to_string),
            parent_type: ctx.scope.graph_type().unwrap_or_default().to_string(),
        };
        let id = document.push(
            ctx.items.selection_set,
            DocumentPart::new(
                PartKind::InlineFragment(inline),
                ctx.position(),
                ctx.scope.inherited_directives(),
            ),
        );

        let scope = match type_condition {
            Some(type_condition) => ctx.scope.restricted(type_condition),
            None => ctx.scope.child(),
        };
        let restricted_type = scope
            .graph_type()
            .and_then(|name| self.schema.type_by_name(name));
        let items = ContextItems {
            owner: Some(id),
            directive_location: Some(DirectiveLocation::InlineFragment),
            ..ctx.items.clone()
        };

        for child in ctx.tree.children(ctx.node_id) {
            let child_ctx = ctx.descend_with(child, Rc::clone(&scope), items.clone());
            match child_ctx.node().kind {
                SyntaxNodeKind::Directive => self.visit_directive(document, &child_ctx, messages)?,
                SyntaxNodeKind::SelectionSet => {
                    // Fields land in the enclosing selection set, restricted
                    // to the type condition by the scope.
                    if restricted_type.is_some_and(GraphType::is_composite) {
                        let mut set_ctx = child_ctx;
                        set_ctx.items.selection_set = ctx.items.selection_set;
                        self.visit_selections(document, &set_ctx, messages)?;
                    }
                },
                _ => return Err(child_ctx.unrecognized()),
            }
        }
        Ok(())
    }

    fn visit_directive(
        &self,
        document: &mut QueryDocument<'schema>,
        ctx: &ConstructionContext<'_, 'schema, '_>,
        messages: &mut MessageCollection,
    ) -> Result<()> {
        let node = ctx.node();
        let (Some(name), Some(location)) = (node.name, ctx.items.directive_location) else {
            return Err(ctx.unrecognized());
        };
        if !self.passes_construction_rules(ctx, messages) {
            return Ok(());
        }

        let definition = self.schema.directive(name);
        let directive = DirectivePart {
            name: name.to_string(),
            location,
            definition,
        };
        let id = document.push(
            ctx.items.owner,
            DocumentPart::new(
                PartKind::Directive(directive),
                ctx.position(),
                ctx.scope.inherited_directives(),
            ),
        );
        ctx.scope.add_directive(id);

        let items = ContextItems {
            owner: Some(id),
            argument_source: ArgumentSource::Directive(definition),
            ..ctx.items.clone()
        };
        for child in ctx.tree.children(ctx.node_id) {
            let child_ctx = ctx.descend_with(child, Rc::clone(&ctx.scope), items.clone());
            match child_ctx.node().kind {
                SyntaxNodeKind::InputItemCollection => {
                    self.visit_input_items(document, &child_ctx, messages)?
                },
                _ => return Err(child_ctx.unrecognized()),
            }
        }
        Ok(())
    }

    fn visit_input_items(
        &self,
        document: &mut QueryDocument<'schema>,
        ctx: &ConstructionContext<'_, 'schema, '_>,
        messages: &mut MessageCollection,
    ) -> Result<()> {
        for child in ctx.tree.children(ctx.node_id) {
            let child_ctx = ctx.descend(child);
            match child_ctx.node().kind {
                SyntaxNodeKind::InputItem => self.visit_input_item(document, &child_ctx, messages)?,
                _ => return Err(child_ctx.unrecognized()),
            }
        }
        Ok(())
    }

    /// An argument, or a field of a complex value. Each opens a scope root.
    fn visit_input_item(
        &self,
        document: &mut QueryDocument<'schema>,
        ctx: &ConstructionContext<'_, 'schema, '_>,
        messages: &mut MessageCollection,
    ) -> Result<()> {
        let Some(name) = ctx.node().name else {
            return Err(ctx.unrecognized());
        };
        if ctx.items.owner.is_none() {
            return Err(ctx.unrecognized());
        }
        if !self.passes_construction_rules(ctx, messages) {
            return Ok(());
        }

        let target = match ctx.items.argument_source {
            ArgumentSource::Field(field) => field.argument(name).map(ArgumentTarget::Argument),
            ArgumentSource::Directive(definition) => definition
                .and_then(|d| d.argument(name))
                .map(ArgumentTarget::Argument),
            ArgumentSource::InputObject(input_object) => input_object
                .and_then(|obj| obj.field(name))
                .map(ArgumentTarget::InputField),
            ArgumentSource::None => None,
        }
        .unwrap_or(ArgumentTarget::Undefined);

        let argument = InputArgumentPart {
            name: name.to_string(),
            target,
            value: None,
        };
        let has_default = argument.has_default();
        let expected_type = argument.expected_type().cloned();
        let id = document.push(
            ctx.items.owner,
            DocumentPart::new(PartKind::InputArgument(argument), ctx.position(), vec![]),
        );

        let scope = DocumentScope::root(None);
        let items = ContextItems {
            assignable: Some(id),
            expected_type,
            location_has_default: has_default,
            ..ctx.items.clone()
        };
        for child in ctx.tree.children(ctx.node_id) {
            let child_ctx = ctx.descend_with(child, Rc::clone(&scope), items.clone());
            if !child_ctx.node().kind.is_value() {
                return Err(child_ctx.unrecognized());
            }
            self.visit_value(document, &child_ctx, messages)?;
        }
        Ok(())
    }

    fn visit_variable_collection(
        &self,
        document: &mut QueryDocument<'schema>,
        ctx: &ConstructionContext<'_, 'schema, '_>,
        messages: &mut MessageCollection,
    ) -> Result<()> {
        for child in ctx.tree.children(ctx.node_id) {
            let child_ctx = ctx.descend(child);
            match child_ctx.node().kind {
                SyntaxNodeKind::Variable => self.visit_variable(document, &child_ctx, messages)?,
                _ => return Err(child_ctx.unrecognized()),
            }
        }
        Ok(())
    }

    fn visit_variable(
        &self,
        document: &mut QueryDocument<'schema>,
        ctx: &ConstructionContext<'_, 'schema, '_>,
        messages: &mut MessageCollection,
    ) -> Result<()> {
        let node = ctx.node();
        let (Some(name), Some(operation)) = (node.name, ctx.items.operation) else {
            return Err(ctx.unrecognized());
        };
        if !self.passes_construction_rules(ctx, messages) {
            return Ok(());
        }

        let raw_type = node.literal.unwrap_or_default();
        let type_expression = match TypeExpression::parse(raw_type) {
            Ok(type_expression) => Some(type_expression),
            Err(err) => {
                log::debug!("variable `${name}`: {err}");
                None
            },
        };
        let variable = VariablePart {
            name: name.to_string(),
            raw_type: raw_type.to_string(),
            type_expression: type_expression.clone(),
            default_value: None,
            referenced: Cell::new(false),
        };
        let id = document.push(
            Some(operation),
            DocumentPart::new(PartKind::Variable(variable), ctx.position(), vec![]),
        );
        if let PartKind::Operation(op) = &mut document.part_mut(operation).kind {
            op.variables.insert(Some(name), id);
        }

        let scope = ctx.scope.child();
        let items = ContextItems {
            owner: Some(id),
            assignable: Some(id),
            expected_type: type_expression,
            location_has_default: false,
            directive_location: Some(DirectiveLocation::VariableDefinition),
            ..ctx.items.clone()
        };
        for child in ctx.tree.children(ctx.node_id) {
            let child_ctx = ctx.descend_with(child, Rc::clone(&scope), items.clone());
            match child_ctx.node().kind {
                SyntaxNodeKind::Directive => self.visit_directive(document, &child_ctx, messages)?,
                kind if kind.is_value() => self.visit_value(document, &child_ctx, messages)?,
                _ => return Err(child_ctx.unrecognized()),
            }
        }
        Ok(())
    }

    fn visit_value(
        &self,
        document: &mut QueryDocument<'schema>,
        ctx: &ConstructionContext<'_, 'schema, '_>,
        messages: &mut MessageCollection,
    ) -> Result<()> {
        let Some(assignable) = ctx.items.assignable else {
            return Err(ctx.unrecognized());
        };
        if !self.passes_construction_rules(ctx, messages) {
            return Ok(());
        }

        let node = ctx.node();
        let expected = ctx.items.expected_type.clone();
        let (value, expected_type) = match node.kind {
            SyntaxNodeKind::ScalarValue(kind) => (
                SuppliedValue::Scalar {
                    kind,
                    literal: node.literal.unwrap_or_default().to_string(),
                },
                unwrap_list_types(expected),
            ),
            SyntaxNodeKind::EnumValue => (
                SuppliedValue::Enum(node.name.unwrap_or_default().to_string()),
                unwrap_list_types(expected),
            ),
            SyntaxNodeKind::ComplexValue => (SuppliedValue::Complex, unwrap_list_types(expected)),
            SyntaxNodeKind::NullValue => (SuppliedValue::Null, expected),
            SyntaxNodeKind::ListValue => (SuppliedValue::List, expected),
            SyntaxNodeKind::VariableValue => (
                SuppliedValue::VariableRef(node.name.unwrap_or_default().to_string()),
                expected,
            ),
            _ => return Err(ctx.unrecognized()),
        };

        let is_list = value == SuppliedValue::List;
        let is_complex = value == SuppliedValue::Complex;
        let input_object = expected_type
            .as_ref()
            .and_then(|t| self.schema.type_by_name(t.innermost_name()))
            .and_then(GraphType::as_input_object);
        let item_type = expected_type.as_ref().and_then(|t| t.list_item()).cloned();

        let part = SuppliedValuePart {
            value,
            expected_type,
            location_has_default: ctx.items.location_has_default,
        };
        let id = document.push(
            Some(assignable),
            DocumentPart::new(
                PartKind::SuppliedValue(part),
                ctx.position(),
                ctx.scope.inherited_directives(),
            ),
        );
        match &mut document.part_mut(assignable).kind {
            PartKind::InputArgument(argument) => argument.value = Some(id),
            PartKind::Variable(variable) => variable.default_value = Some(id),
            _ => (),
        }

        let items = if is_list {
            ContextItems {
                assignable: Some(id),
                expected_type: item_type,
                location_has_default: false,
                ..ctx.items.clone()
            }
        } else {
            ContextItems {
                owner: Some(id),
                argument_source: ArgumentSource::InputObject(input_object),
                ..ctx.items.clone()
            }
        };
        for child in ctx.tree.children(ctx.node_id) {
            let child_ctx = ctx.descend_with(child, Rc::clone(&ctx.scope), items.clone());
            let child_kind = child_ctx.node().kind;
            if is_list && child_kind.is_value() {
                self.visit_value(document, &child_ctx, messages)?;
            } else if is_complex && child_kind == SyntaxNodeKind::InputItem {
                self.visit_input_item(document, &child_ctx, messages)?;
            } else {
                return Err(child_ctx.unrecognized());
            }
        }
        Ok(())
    }
}

/// A non-list value written where a list is expected is checked against the
/// list's item type.
fn unwrap_list_types(expected: Option<TypeExpression>) -> Option<TypeExpression> {
    let mut expected = expected?;
    while let Some(item) = expected.list_item() {
        expected = item.clone();
    }
    Some(expected)
}
