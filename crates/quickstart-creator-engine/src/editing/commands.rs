use xi_rope::delta::Builder;
use xi_rope::{Delta, Rope, RopeInfo};

/// Commands that can be applied to the text buffer
#[derive(Debug, Clone, PartialEq)]
pub enum Cmd {
    /// Replace the whole buffer, as an editor widget does on paste or `onChange`
    ReplaceAll {
        text: String,
    },
    InsertText {
        at: usize,
        text: String,
    },
    DeleteRange {
        range: std::ops::Range<usize>,
    },
    ReplaceRange {
        range: std::ops::Range<usize>,
        text: String,
    },
}

impl Cmd {
    /// The byte range in the old text this command rewrites
    pub(crate) fn target(&self, len: usize) -> std::ops::Range<usize> {
        match self {
            Cmd::ReplaceAll { .. } => 0..len,
            Cmd::InsertText { at, .. } => *at..*at,
            Cmd::DeleteRange { range } | Cmd::ReplaceRange { range, .. } => range.clone(),
        }
    }

    /// Text inserted at the start of the target range
    pub(crate) fn inserted(&self) -> &str {
        match self {
            Cmd::ReplaceAll { text }
            | Cmd::InsertText { text, .. }
            | Cmd::ReplaceRange { text, .. } => text,
            Cmd::DeleteRange { .. } => "",
        }
    }

    /// Range of the new text covered by this command once applied
    pub(crate) fn changed_range(&self, len: usize) -> std::ops::Range<usize> {
        let start = self.target(len).start;
        start..start + self.inserted().len()
    }
}

/// Compile a command into a delta over a rope of `len` bytes
///
/// The caller has already checked that the target range is in bounds and on
/// character boundaries; `Builder` panics otherwise.
pub(crate) fn compile_command(len: usize, cmd: &Cmd) -> Delta<RopeInfo> {
    let mut builder = Builder::new(len);
    let target = cmd.target(len);
    match cmd {
        Cmd::DeleteRange { .. } => builder.delete(target),
        _ => builder.replace(target, Rope::from(cmd.inserted())),
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_all_targets_whole_text() {
        let cmd = Cmd::ReplaceAll {
            text: "spec: {}".to_string(),
        };

        assert_eq!(cmd.target(12), 0..12);
        assert_eq!(cmd.changed_range(12), 0..8);
    }

    #[test]
    fn test_insert_targets_empty_range() {
        let cmd = Cmd::InsertText {
            at: 4,
            text: "abc".to_string(),
        };

        assert_eq!(cmd.target(10), 4..4);
        assert_eq!(cmd.changed_range(10), 4..7);
    }

    #[test]
    fn test_delete_collapses_changed_range() {
        let cmd = Cmd::DeleteRange { range: 2..6 };

        assert_eq!(cmd.inserted(), "");
        assert_eq!(cmd.changed_range(10), 2..2);
    }

    #[test]
    fn test_compiled_delta_applies_to_rope() {
        let rope = Rope::from("name: old");
        let cmd = Cmd::ReplaceRange {
            range: 6..9,
            text: "new".to_string(),
        };

        let delta = compile_command(rope.len(), &cmd);
        let updated = delta.apply(&rope);

        assert_eq!(updated.to_string(), "name: new");
    }
}
