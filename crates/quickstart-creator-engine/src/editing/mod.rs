/*!
 * # Editing Core Module
 *
 * The author's YAML lives here, exactly as typed.
 *
 * ## Architecture Overview
 *
 * ### 1. Single Source of Truth: xi-rope Buffer
 * - The whole draft is stored in one **`xi_rope::Rope`** inside [`TextBuffer`]
 * - Parsed state is derived from the rope and never written back, so comments,
 *   key ordering and formatting survive every failed parse
 * - Saving writes the rope bytes verbatim
 *
 * ### 2. Command-Based Editing
 * - Every edit is a **Command** (`Cmd` enum) compiled to an xi-rope **Delta**
 * - Commands apply immediately and bump the buffer version
 * - Whole-text replacement (`Cmd::ReplaceAll`) is what an editor widget sends
 *   on paste or on a full `onChange`; range commands model incremental edits
 *
 * ### 3. Patches
 * - Applying a command returns a [`Patch`] with the changed ranges (in the new
 *   text) and the new version
 * - The version is what the debounce scheduler tags a pending parse with
 *
 * ## Usage Pattern
 *
 * ```rust
 * use quickstart_creator_engine::editing::*;
 *
 * let mut buffer = TextBuffer::new("metadata:\n  name: demo\n");
 * let patch = buffer
 *     .apply(Cmd::InsertText { at: 0, text: "# draft\n".to_string() })
 *     .unwrap();
 *
 * assert_eq!(patch.version, 1);
 * assert!(buffer.text().starts_with("# draft\n"));
 * ```
 */

pub mod buffer;
pub mod commands;
pub mod patch;

pub use buffer::{EditError, TextBuffer};
pub use commands::Cmd;
pub use patch::Patch;
