use std::fmt;

use crate::models::{DerivedFacts, MetadataTag, QuickStartDraft, QuickStartSpec, TagGroups};

type Listener<T> = Option<Box<dyn FnMut(T)>>;

/// Callbacks owned by the surrounding view, all optional
///
/// Each listener gets its own clone of the new value, never a reference into
/// session state. There is intentionally no listener for the quickstart
/// `type`: YAML edits must not overwrite the type picked in the wizard.
///
/// Listeners fire only after a successful parse. A session mounted on the
/// comment-only placeholder parses nothing, so hosts get no notification
/// until the first edit that holds a document; start from
/// [`QuickStartDraft::default`] instead of waiting for one.
///
/// ```rust
/// use quickstart_creator_engine::CreatorCallbacks;
///
/// let callbacks = CreatorCallbacks::new()
///     .on_bundles_changed(|bundles| println!("bundles: {bundles:?}"))
///     .on_tags_changed(|tags| println!("{} tag kinds", tags.len()));
/// # assert!(!callbacks.is_empty());
/// ```
#[derive(Default)]
pub struct CreatorCallbacks {
    spec_changed: Listener<QuickStartSpec>,
    bundles_changed: Listener<Vec<String>>,
    tags_changed: Listener<TagGroups>,
    metadata_tags_changed: Listener<Vec<MetadataTag>>,
}

impl CreatorCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_spec_changed(mut self, listener: impl FnMut(QuickStartSpec) + 'static) -> Self {
        self.spec_changed = Some(Box::new(listener));
        self
    }

    pub fn on_bundles_changed(mut self, listener: impl FnMut(Vec<String>) + 'static) -> Self {
        self.bundles_changed = Some(Box::new(listener));
        self
    }

    pub fn on_tags_changed(mut self, listener: impl FnMut(TagGroups) + 'static) -> Self {
        self.tags_changed = Some(Box::new(listener));
        self
    }

    /// Receives the raw `metadata.tags` list, malformed entries included
    pub fn on_metadata_tags_changed(
        mut self,
        listener: impl FnMut(Vec<MetadataTag>) + 'static,
    ) -> Self {
        self.metadata_tags_changed = Some(Box::new(listener));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.spec_changed.is_none()
            && self.bundles_changed.is_none()
            && self.tags_changed.is_none()
            && self.metadata_tags_changed.is_none()
    }

    /// Hand a freshly parsed state to every registered listener, once each
    pub(crate) fn propagate(&mut self, draft: &QuickStartDraft, facts: &DerivedFacts) {
        if let Some(listener) = self.spec_changed.as_mut() {
            listener(draft.spec.clone());
        }
        if let Some(listener) = self.bundles_changed.as_mut() {
            listener(facts.bundles.clone());
        }
        if let Some(listener) = self.tags_changed.as_mut() {
            listener(facts.tags_by_kind.clone());
        }
        if let Some(listener) = self.metadata_tags_changed.as_mut() {
            listener(draft.tags.clone());
        }
    }
}

impl fmt::Debug for CreatorCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreatorCallbacks")
            .field("spec_changed", &self.spec_changed.is_some())
            .field("bundles_changed", &self.bundles_changed.is_some())
            .field("tags_changed", &self.tags_changed.is_some())
            .field("metadata_tags_changed", &self.metadata_tags_changed.is_some())
            .finish()
    }
}
