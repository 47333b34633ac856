pub mod quickstart;
pub mod tag_groups;

pub use quickstart::{DEFAULT_QUICKSTART_NAME, MetadataTag, QuickStartDraft, QuickStartSpec};
pub use tag_groups::{BUNDLE_TAG_KIND, DerivedFacts, TagGroups};
