use crate::messages::GraphMessage;
use crate::messages::MessageSeverity;

/// An ordered, append-only list of [`GraphMessage`]s.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MessageCollection {
    messages: Vec<GraphMessage>,
}
impl MessageCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, message: GraphMessage) {
        log::trace!("message added: {message}");
        self.messages.push(message);
    }

    pub fn extend(&mut self, other: MessageCollection) {
        self.messages.extend(other.messages);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GraphMessage> {
        self.messages.iter()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Messages at or above `severity`.
    pub fn at_least(&self, severity: MessageSeverity) -> impl Iterator<Item = &GraphMessage> {
        self.messages.iter().filter(move |m| m.severity >= severity)
    }

    pub fn critical_count(&self) -> usize {
        self.at_least(MessageSeverity::Critical).count()
    }

    /// False iff any message is [`MessageSeverity::Critical`].
    pub fn is_success(&self) -> bool {
        !self.messages.iter().any(GraphMessage::is_critical)
    }

    pub fn into_vec(self) -> Vec<GraphMessage> {
        self.messages
    }
}
impl<'a> IntoIterator for &'a MessageCollection {
    type Item = &'a GraphMessage;
    type IntoIter = std::slice::Iter<'a, GraphMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}
