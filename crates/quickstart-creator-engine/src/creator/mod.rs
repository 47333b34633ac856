/*!
 * # Creator Session
 *
 * [`CreatorSession`] is the YAML side of the quickstart creator. It owns:
 *
 * - the **text buffer**, updated synchronously on every edit
 * - the **debounce scheduler**, at most one pending parse at a time
 * - the **last good state**, replaced only by a successful parse
 * - the **parse alert**, set by a failed parse and cleared by the next success
 * - the **callbacks** that propagate successful parses to the structured editor
 *
 * ## Edit Loop
 *
 * 1. `on_edit` / `apply` store the text immediately and re-arm the debounce
 * 2. The host calls `tick` from its event loop
 * 3. Once the text has been quiet for the configured delay, `tick` parses it
 * 4. Success replaces the draft and facts, clears the alert, fires callbacks
 * 5. Failure only sets the alert; the draft, facts and callbacks are untouched
 *
 * ```rust
 * use std::time::Duration;
 * use quickstart_creator_engine::{
 *     CreatorCallbacks, CreatorOptions, CreatorSession, ManualClock,
 * };
 *
 * let clock = ManualClock::new();
 * let mut session =
 *     CreatorSession::with_clock(CreatorOptions::default(), CreatorCallbacks::new(), clock.clone());
 *
 * session.on_edit("metadata:\n  name: demo\n");
 * assert!(session.tick().is_none());
 *
 * clock.advance(Duration::from_millis(200));
 * assert!(session.tick().is_some());
 * assert_eq!(session.draft().name, "demo");
 * ```
 */

pub mod alert;
pub mod callbacks;

use std::time::{Duration, Instant};

pub use alert::{PARSE_ALERT_NOTICE, PARSE_ALERT_TITLE, ParseAlert};
pub use callbacks::CreatorCallbacks;

use crate::editing::{Cmd, EditError, Patch, TextBuffer};
use crate::models::{DerivedFacts, QuickStartDraft};
use crate::parsing::{ParseError, parse_quickstart};
use crate::scheduling::{Clock, Debouncer, SystemClock};
use crate::templates::{
    ConfirmReplace, DEFAULT_PLACEHOLDER_YAML, LoadOutcome, SAMPLE_QUICKSTART_YAML,
};

/// Quiet period before an edit is parsed
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatorOptions {
    pub debounce: Duration,
    /// Text the buffer starts with
    pub initial_text: String,
}

impl Default for CreatorOptions {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            initial_text: DEFAULT_PLACEHOLDER_YAML.to_string(),
        }
    }
}

/// How a parse attempt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// New draft and facts are in place and were propagated
    Updated,
    /// The alert was set; the previous draft and facts are still current
    Rejected,
}

pub struct CreatorSession<C: Clock = SystemClock> {
    buffer: TextBuffer,
    scheduler: Debouncer,
    clock: C,
    callbacks: CreatorCallbacks,
    draft: QuickStartDraft,
    facts: DerivedFacts,
    alert: Option<ParseAlert>,
    parse_attempts: u64,
    mounted: bool,
}

impl CreatorSession<SystemClock> {
    /// Mount a session driven by the wall clock
    pub fn new(options: CreatorOptions, callbacks: CreatorCallbacks) -> Self {
        Self::with_clock(options, callbacks, SystemClock)
    }
}

impl<C: Clock> CreatorSession<C> {
    /// Mount a session and parse its initial text right away
    ///
    /// An initial text with no document in it (the comment-only placeholder)
    /// is not an error: the session starts from the default draft without an
    /// alert and without calling anyone.
    pub fn with_clock(options: CreatorOptions, callbacks: CreatorCallbacks, clock: C) -> Self {
        let mut session = Self {
            buffer: TextBuffer::new(&options.initial_text),
            scheduler: Debouncer::new(options.debounce),
            clock,
            callbacks,
            draft: QuickStartDraft::default(),
            facts: DerivedFacts::default(),
            alert: None,
            parse_attempts: 0,
            mounted: true,
        };
        session.mount_parse();
        session
    }

    fn mount_parse(&mut self) {
        self.parse_attempts += 1;
        match parse_quickstart(&self.buffer.text()) {
            Ok(parsed) => self.accept(parsed.draft, parsed.facts),
            Err(ParseError::EmptyDocument) => {
                log::debug!("initial text holds no document, starting from defaults");
            }
            Err(err) => self.reject(err),
        }
    }

    /// Replace the whole text, as an editor widget reports a change
    pub fn on_edit(&mut self, text: impl Into<String>) {
        let patch = self.apply(Cmd::ReplaceAll { text: text.into() });
        debug_assert!(patch.is_ok(), "whole-text replacement is always in bounds");
    }

    /// Apply an edit command and (re)arm the debounce
    ///
    /// A parse whose deadline already passed fires first, against the text it
    /// was armed for, exactly as a real timer would have before this edit.
    pub fn apply(&mut self, cmd: Cmd) -> Result<Patch, EditError> {
        let now = self.clock.now();
        self.tick_at(now);

        let patch = self.buffer.apply(cmd)?;
        if self.mounted
            && let Some(replaced) = self.scheduler.arm(now, patch.version)
        {
            log::debug!(
                "edit v{} supersedes pending parse of v{}",
                patch.version,
                replaced.version
            );
        }
        Ok(patch)
    }

    /// Fire the pending parse if it is due on this session's clock
    pub fn tick(&mut self) -> Option<ReconcileOutcome> {
        let now = self.clock.now();
        self.tick_at(now)
    }

    /// Fire the pending parse if it is due at `now`
    pub fn tick_at(&mut self, now: Instant) -> Option<ReconcileOutcome> {
        if !self.mounted {
            return None;
        }
        let pending = self.scheduler.take_due(now)?;
        // Every buffer change re-arms or cancels, so a mismatch means the
        // parse was scheduled for text that is gone
        if pending.version != self.buffer.version() {
            log::debug!(
                "dropping stale parse of v{} (buffer is at v{})",
                pending.version,
                self.buffer.version()
            );
            return None;
        }
        Some(self.reconcile())
    }

    /// Parse now instead of waiting for the quiet period
    pub fn flush(&mut self) -> Option<ReconcileOutcome> {
        if !self.mounted {
            return None;
        }
        self.scheduler.cancel()?;
        Some(self.reconcile())
    }

    /// Tear the session down: cancel the pending parse and detach callbacks
    ///
    /// Later edits are still stored but nothing is parsed or propagated.
    pub fn unmount(&mut self) {
        if let Some(pending) = self.scheduler.cancel() {
            log::debug!("unmount cancelled pending parse of v{}", pending.version);
        }
        self.callbacks = CreatorCallbacks::new();
        self.mounted = false;
    }

    /// Replace the text with the sample quickstart and parse it immediately
    ///
    /// Text that is more than whitespace is only replaced once `confirm` agrees.
    ///
    /// An unmounted session declines without asking and keeps its text.
    pub fn load_sample(&mut self, mut confirm: impl ConfirmReplace) -> LoadOutcome {
        if !self.mounted {
            log::debug!("sample template ignored, session is unmounted");
            return LoadOutcome::Declined;
        }
        if !self.buffer.is_blank() && !confirm.confirm_replace(&self.buffer.text()) {
            log::debug!("sample template declined, keeping current text");
            return LoadOutcome::Declined;
        }

        self.scheduler.cancel();
        let replaced = self.buffer.apply(Cmd::ReplaceAll {
            text: SAMPLE_QUICKSTART_YAML.to_string(),
        });
        debug_assert!(replaced.is_ok(), "whole-text replacement is always in bounds");
        self.reconcile();
        LoadOutcome::Loaded
    }

    fn reconcile(&mut self) -> ReconcileOutcome {
        self.parse_attempts += 1;
        match parse_quickstart(&self.buffer.text()) {
            Ok(parsed) => {
                self.accept(parsed.draft, parsed.facts);
                ReconcileOutcome::Updated
            }
            Err(err) => {
                self.reject(err);
                ReconcileOutcome::Rejected
            }
        }
    }

    fn accept(&mut self, draft: QuickStartDraft, facts: DerivedFacts) {
        log::debug!(
            "parsed v{}: `{}` with {} bundle(s) and {} tag kind(s)",
            self.buffer.version(),
            draft.name,
            facts.bundles.len(),
            facts.tags_by_kind.len()
        );
        self.draft = draft;
        self.facts = facts;
        self.alert = None;
        self.callbacks.propagate(&self.draft, &self.facts);
    }

    fn reject(&mut self, err: ParseError) {
        log::warn!("YAML parse failed, keeping last valid state: {err}");
        self.alert = Some(ParseAlert::from(err));
    }

    /// Raw text as typed, which may be ahead of [`draft`](Self::draft)
    pub fn text(&self) -> String {
        self.buffer.text()
    }

    pub fn version(&self) -> u64 {
        self.buffer.version()
    }

    /// Last successfully parsed projection
    pub fn draft(&self) -> &QuickStartDraft {
        &self.draft
    }

    pub fn facts(&self) -> &DerivedFacts {
        &self.facts
    }

    pub fn alert(&self) -> Option<&ParseAlert> {
        self.alert.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.scheduler.is_pending()
    }

    /// Time left before the pending parse is due, for hosts that sleep
    pub fn time_until_due(&self) -> Option<Duration> {
        self.scheduler.time_until_due(self.clock.now())
    }

    pub fn debounce(&self) -> Duration {
        self.scheduler.delay()
    }

    /// Number of parses run so far, the mount parse included
    pub fn parse_attempts(&self) -> u64 {
        self.parse_attempts
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }
}
