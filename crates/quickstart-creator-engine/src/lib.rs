pub mod creator;
pub mod editing;
pub mod io;
pub mod models;
pub mod parsing;
pub mod scheduling;
pub mod templates;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use creator::*;
pub use editing::{Cmd, EditError, Patch, TextBuffer};
pub use io::*;
pub use models::*;
pub use parsing::{ParseError, ParsedQuickStart, QuickStartSummary, parse_quickstart};
pub use scheduling::{Clock, ManualClock, SystemClock};
pub use templates::*;
