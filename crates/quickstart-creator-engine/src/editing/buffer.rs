use xi_rope::Rope;

use crate::editing::{Cmd, Patch, commands::compile_command};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("edit range {start}..{end} is outside the buffer (length {len})")]
    OutOfBounds { start: usize, end: usize, len: usize },
    #[error("edit offset {0} is not on a character boundary")]
    NotCharBoundary(usize),
}

/// Raw YAML text exactly as the author typed it
///
/// Every accepted command bumps `version`; the version is never reset, so a
/// pending parse tagged with an older version is known to be stale.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    pub(crate) rope: Rope,
    pub(crate) version: u64,
}

impl TextBuffer {
    pub fn new(text: &str) -> Self {
        Self {
            rope: Rope::from(text),
            version: 0,
        }
    }

    /// Current content as an owned string (exact round-trip)
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn len(&self) -> usize {
        self.rope.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len() == 0
    }

    /// True when the buffer holds nothing but whitespace
    pub fn is_blank(&self) -> bool {
        self.text().trim().is_empty()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Apply a command to the buffer
    ///
    /// Validation happens before the rope is touched, so a rejected command
    /// leaves both text and version unchanged.
    pub fn apply(&mut self, cmd: Cmd) -> Result<Patch, EditError> {
        let len = self.rope.len();
        self.validate(&cmd, len)?;

        let delta = compile_command(len, &cmd);
        self.rope = delta.apply(&self.rope);
        self.version += 1;

        Ok(Patch {
            changed: vec![cmd.changed_range(len)],
            version: self.version,
        })
    }

    fn validate(&self, cmd: &Cmd, len: usize) -> Result<(), EditError> {
        let target = cmd.target(len);
        if target.start > target.end || target.end > len {
            return Err(EditError::OutOfBounds {
                start: target.start,
                end: target.end,
                len,
            });
        }

        if matches!(cmd, Cmd::ReplaceAll { .. }) {
            return Ok(());
        }

        let text = self.text();
        for offset in [target.start, target.end] {
            if !text.is_char_boundary(offset) {
                return Err(EditError::NotCharBoundary(offset));
            }
        }
        Ok(())
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new("")
    }
}
