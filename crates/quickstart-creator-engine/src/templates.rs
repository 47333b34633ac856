//! Fixed documents the creator starts from.

/// What a fresh editor shows before the author types anything
pub const DEFAULT_PLACEHOLDER_YAML: &str =
    "# YAML Quickstart Definition\n# Start typing or paste your YAML here\n";

/// Sample quickstart loaded by [`CreatorSession::load_sample`](crate::CreatorSession::load_sample)
pub const SAMPLE_QUICKSTART_YAML: &str = r#"apiVersion: console.openshift.io/v1
kind: QuickStarts
metadata:
  name: sample-interactive-quickstart
spec:
  version: 0.1
  displayName: Sample Interactive QuickStart
  durationMinutes: 10
  type:
    text: Quick start
    color: green
  icon: ~
  description: >-
    This is a sample description. This text appears on the card in the catalog.
  introduction: |
    Welcome to the tutorial!
    This text appears in the side panel when you start the quick start.
  tasks:
    - title: First Task
      description: |
        This is the instruction for the first task.
        1. Click on the "Home" button.
        2. Navigate to the "Overview" page.
      review:
        instructions: |
          Did you see the Overview page load?
        failedTaskHelp: |
          If the page didn't load, try refreshing.
"#;

/// Asks the author whether their current text may be thrown away
///
/// Implemented for any `FnMut(&str) -> bool`, which receives the text that
/// would be replaced.
pub trait ConfirmReplace {
    fn confirm_replace(&mut self, current: &str) -> bool;
}

impl<F> ConfirmReplace for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm_replace(&mut self, current: &str) -> bool {
        self(current)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The sample replaced the buffer and was parsed
    Loaded,
    /// The author kept their text; nothing changed
    Declined,
}
