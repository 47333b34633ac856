use serde::Serialize;
use serde_yaml::{Mapping, Value};

/// Identifier used when `metadata.name` is missing or empty
pub const DEFAULT_QUICKSTART_NAME: &str = "new-quickstart";

/// Last successfully parsed projection of the author's YAML
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickStartDraft {
    pub name: String,
    pub spec: QuickStartSpec,
    /// Raw `metadata.tags` entries, malformed ones included
    pub tags: Vec<MetadataTag>,
}

impl Default for QuickStartDraft {
    /// The projection of a document with neither `metadata` nor `spec`
    fn default() -> Self {
        Self {
            name: DEFAULT_QUICKSTART_NAME.to_string(),
            spec: QuickStartSpec::default(),
            tags: Vec::new(),
        }
    }
}

/// The `spec` block handed to the structured editor
///
/// Only `displayName` and `description` are interpreted. The remaining
/// fields are mirrored verbatim: `None` means the key was absent, while
/// `Some(Value::Null)` means it was present with an explicit null (`icon: ~`).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickStartSpec {
    pub display_name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Value>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prerequisites: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub introduction: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Value>,
    /// Any other `spec` keys (`version`, ...) in document order
    #[serde(flatten)]
    pub extra: Mapping,
}

impl QuickStartSpec {
    /// Keys with a dedicated field; everything else lands in `extra`
    pub const KNOWN_KEYS: [&'static str; 9] = [
        "displayName",
        "description",
        "icon",
        "type",
        "durationMinutes",
        "link",
        "prerequisites",
        "introduction",
        "tasks",
    ];
}

/// One entry of `metadata.tags`, kept as written
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MetadataTag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl MetadataTag {
    pub fn new(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            value: Some(value.into()),
        }
    }

    /// `(kind, value)` when both are present and non-empty
    pub fn pair(&self) -> Option<(&str, &str)> {
        let kind = self.kind.as_deref().filter(|k| !k.is_empty())?;
        let value = self.value.as_deref().filter(|v| !v.is_empty())?;
        Some((kind, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_draft_uses_placeholder_name() {
        let draft = QuickStartDraft::default();

        assert_eq!(draft.name, "new-quickstart");
        assert_eq!(draft.spec.display_name, "");
        assert_eq!(draft.spec.description, "");
        assert!(draft.tags.is_empty());
    }

    #[test]
    fn test_tag_pair_requires_both_halves() {
        assert_eq!(
            MetadataTag::new("product", "openshift").pair(),
            Some(("product", "openshift"))
        );

        let missing_value = MetadataTag {
            kind: Some("product".to_string()),
            value: None,
        };
        assert_eq!(missing_value.pair(), None);

        let empty_kind = MetadataTag {
            kind: Some(String::new()),
            value: Some("x".to_string()),
        };
        assert_eq!(empty_kind.pair(), None);
    }

    #[test]
    fn test_spec_serializes_camel_case_and_skips_absent() {
        let spec = QuickStartSpec {
            display_name: "Demo".to_string(),
            duration_minutes: Some(Value::from(5)),
            ..Default::default()
        };

        let yaml = serde_yaml::to_string(&spec).unwrap();

        assert_eq!(
            yaml,
            "displayName: Demo\ndescription: ''\ndurationMinutes: 5\n"
        );
    }
}
