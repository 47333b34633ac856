//! YAML → [`QuickStartDraft`] projection.
//!
//! [`parse_quickstart`] is a pure function of its input text. It never
//! consults the previous state; keeping the last good projection on failure
//! is the session's job.

mod fields;

use serde::Serialize;
use serde_yaml::Value;

use crate::models::{DerivedFacts, QuickStartDraft, TagGroups};

pub const EMPTY_DOCUMENT_MESSAGE: &str = "YAML document is empty";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The text is not well-formed YAML; carries the decoder's message verbatim
    #[error("{0}")]
    Syntax(String),
    /// The text holds no document (blank, comments only, or an explicit null)
    #[error("{}", EMPTY_DOCUMENT_MESSAGE)]
    EmptyDocument,
}

/// Successful parse: the projection plus the facts derived from its tags
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedQuickStart {
    pub draft: QuickStartDraft,
    pub facts: DerivedFacts,
}

impl ParsedQuickStart {
    pub fn summary(&self) -> QuickStartSummary {
        QuickStartSummary {
            name: self.draft.name.clone(),
            display_name: self.draft.spec.display_name.clone(),
            description: self.draft.spec.description.clone(),
            bundles: self.facts.bundles.clone(),
            tags_by_kind: self.facts.tags_by_kind.clone(),
        }
    }
}

/// The fields a reviewer usually wants to see at a glance
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickStartSummary {
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub bundles: Vec<String>,
    pub tags_by_kind: TagGroups,
}

/// Parse quickstart YAML into a draft and its derived facts
///
/// Missing or oddly shaped `metadata` / `spec` sections are treated as empty
/// rather than rejected; only malformed YAML and empty documents fail.
pub fn parse_quickstart(text: &str) -> Result<ParsedQuickStart, ParseError> {
    if fields::has_no_content(text) {
        return Err(ParseError::EmptyDocument);
    }

    let mut document: Value =
        serde_yaml::from_str(text).map_err(|e| ParseError::Syntax(e.to_string()))?;
    if document.is_null() {
        return Err(ParseError::EmptyDocument);
    }
    // `<<: *anchor` is otherwise left as a literal key
    document
        .apply_merge()
        .map_err(|e| ParseError::Syntax(e.to_string()))?;

    let metadata = fields::section(&document, "metadata");
    let spec = fields::section(&document, "spec");

    let tags = fields::metadata_tags(metadata);
    let facts = DerivedFacts::from_tags(&tags);

    let draft = QuickStartDraft {
        name: fields::name(metadata),
        spec: fields::spec(spec),
        tags,
    };

    Ok(ParsedQuickStart { draft, facts })
}
