//! Shared helpers for unit tests.

use std::cell::RefCell;
use std::rc::Rc;

use crate::creator::CreatorCallbacks;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecorderEvent {
    Spec,
    Bundles,
    Tags,
    MetadataTags,
}

/// Records which callbacks fired, in order
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    events: Rc<RefCell<Vec<RecorderEvent>>>,
}

impl Recorder {
    pub fn events(&self) -> Vec<RecorderEvent> {
        self.events.borrow().clone()
    }

    pub fn count(&self, event: RecorderEvent) -> usize {
        self.events.borrow().iter().filter(|e| **e == event).count()
    }

    fn push(&self, event: RecorderEvent) {
        self.events.borrow_mut().push(event);
    }
}

/// Callbacks with every listener registered, feeding one [`Recorder`]
pub fn recording_callbacks() -> (CreatorCallbacks, Recorder) {
    let recorder = Recorder::default();
    let (spec, bundles, tags, raw) = (
        recorder.clone(),
        recorder.clone(),
        recorder.clone(),
        recorder.clone(),
    );
    let callbacks = CreatorCallbacks::new()
        .on_spec_changed(move |_| spec.push(RecorderEvent::Spec))
        .on_bundles_changed(move |_| bundles.push(RecorderEvent::Bundles))
        .on_tags_changed(move |_| tags.push(RecorderEvent::Tags))
        .on_metadata_tags_changed(move |_| raw.push(RecorderEvent::MetadataTags));
    (callbacks, recorder)
}
