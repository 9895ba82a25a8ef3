/// How serious a [`GraphMessage`](crate::messages::GraphMessage) is.
///
/// Any [`MessageSeverity::Critical`] message means the compiled document must
/// not be executed.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    serde::Deserialize,
    serde::Serialize,
)]
pub enum MessageSeverity {
    Trace,
    Debug,
    Info,
    Warning,
    Critical,
}
impl MessageSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}
impl std::fmt::Display for MessageSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
