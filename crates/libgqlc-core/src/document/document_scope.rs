use crate::document::PartId;
use std::cell::RefCell;
use std::rc::Rc;

/// What applies to every part added beneath some point of construction.
///
/// Scopes form a parent-linked chain. Directives registered on a scope are
/// inherited by every part later added into it or into a descendant scope. A
/// type restriction narrows descendants only.
#[derive(Debug, Default)]
pub(crate) struct DocumentScope {
    parent: Option<Rc<DocumentScope>>,
    directives: RefCell<Vec<PartId>>,
    graph_type: Option<String>,
}
impl DocumentScope {
    /// A scope with no parent: nothing is inherited.
    pub(crate) fn root(graph_type: Option<String>) -> Rc<Self> {
        Rc::new(Self {
            parent: None,
            directives: RefCell::new(vec![]),
            graph_type,
        })
    }

    pub(crate) fn child(self: &Rc<Self>) -> Rc<Self> {
        Rc::new(Self {
            parent: Some(Rc::clone(self)),
            directives: RefCell::new(vec![]),
            graph_type: None,
        })
    }

    /// A child scope whose parts resolve against `graph_type`.
    pub(crate) fn restricted(self: &Rc<Self>, graph_type: impl Into<String>) -> Rc<Self> {
        Rc::new(Self {
            parent: Some(Rc::clone(self)),
            directives: RefCell::new(vec![]),
            graph_type: Some(graph_type.into()),
        })
    }

    pub(crate) fn add_directive(&self, directive: PartId) {
        self.directives.borrow_mut().push(directive);
    }

    /// The nearest type restriction in the chain.
    pub(crate) fn graph_type(&self) -> Option<&str> {
        match &self.graph_type {
            Some(graph_type) => Some(graph_type),
            None => self.parent.as_deref().and_then(DocumentScope::graph_type),
        }
    }

    /// Directives of the whole chain, outermost first.
    pub(crate) fn inherited_directives(&self) -> Vec<PartId> {
        let mut directives = match &self.parent {
            Some(parent) => parent.inherited_directives(),
            None => vec![],
        };
        directives.extend(self.directives.borrow().iter().copied());
        directives
    }
}
