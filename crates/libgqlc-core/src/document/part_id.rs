/// Index of a [`DocumentPart`](crate::document::DocumentPart) within its
/// [`QueryDocument`](crate::document::QueryDocument).
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct PartId(pub(crate) u32);

impl PartId {
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "part#{}", self.0)
    }
}
