mod graph_message;
mod message_collection;
mod message_severity;

pub use graph_message::GraphMessage;
pub use graph_message::codes;
pub use message_collection::MessageCollection;
pub use message_severity::MessageSeverity;
