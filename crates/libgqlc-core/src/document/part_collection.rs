use crate::document::PartId;
use indexmap::IndexMap;

/// Named parts (operations, fragments or variables) in insertion order.
///
/// Inserting a name twice does not replace the first entry; every entry is
/// kept so that uniqueness rules can report the duplicates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PartCollection {
    named: IndexMap<String, Vec<PartId>>,
    anonymous: Vec<PartId>,
    order: Vec<PartId>,
}
impl PartCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `id` under `name`. Returns `false` if the name was already
    /// taken.
    pub fn insert(&mut self, name: Option<&str>, id: PartId) -> bool {
        self.order.push(id);
        match name {
            Some(name) => {
                let entries = self.named.entry(name.to_string()).or_default();
                entries.push(id);
                entries.len() == 1
            },
            None => {
                self.anonymous.push(id);
                true
            },
        }
    }

    /// The first part registered under `name`.
    pub fn get(&self, name: &str) -> Option<PartId> {
        self.named.get(name).and_then(|entries| entries.first().copied())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.named.contains_key(name)
    }

    pub fn anonymous(&self) -> &[PartId] {
        &self.anonymous
    }

    /// Every name registered more than once, with all of its entries.
    pub fn duplicates(&self) -> impl Iterator<Item = (&str, &[PartId])> {
        self.named
            .iter()
            .filter(|(_, entries)| entries.len() > 1)
            .map(|(name, entries)| (name.as_str(), entries.as_slice()))
    }

    /// All parts in insertion order, named or not.
    pub fn iter(&self) -> impl Iterator<Item = PartId> + '_ {
        self.order.iter().copied()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.named.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
