/// Result of applying a command to the text buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    /// Byte ranges in the new text touched by the edit (empty range for a pure deletion)
    pub changed: Vec<std::ops::Range<usize>>,
    pub version: u64,
}
