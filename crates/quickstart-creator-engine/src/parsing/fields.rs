use serde_yaml::{Mapping, Value};

use crate::models::{DEFAULT_QUICKSTART_NAME, MetadataTag, QuickStartSpec};

/// True when nothing but whitespace, comments and document markers remain
pub(super) fn has_no_content(text: &str) -> bool {
    text.lines().map(str::trim).all(|line| {
        line.is_empty() || line.starts_with('#') || line == "---" || line == "..."
    })
}

/// Top-level mapping under `key`, if the document has one
pub(super) fn section<'a>(document: &'a Value, key: &str) -> Option<&'a Mapping> {
    let value = document.get(key)?;
    match value {
        Value::Mapping(mapping) => Some(mapping),
        Value::Null => None,
        other => {
            log::warn!("`{key}` is not a mapping ({}), treating it as empty", kind_of(other));
            None
        }
    }
}

/// Scalars read as text; anything structured counts as absent
pub(super) fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn string_field(mapping: Option<&Mapping>, key: &str) -> Option<String> {
    mapping?.get(key).and_then(scalar)
}

pub(super) fn name(metadata: Option<&Mapping>) -> String {
    string_field(metadata, "name")
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_QUICKSTART_NAME.to_string())
}

pub(super) fn metadata_tags(metadata: Option<&Mapping>) -> Vec<MetadataTag> {
    let Some(tags) = metadata.and_then(|m| m.get("tags")) else {
        return Vec::new();
    };

    match tags {
        Value::Sequence(entries) => entries
            .iter()
            .map(|entry| MetadataTag {
                kind: entry.get("kind").and_then(scalar),
                value: entry.get("value").and_then(scalar),
            })
            .collect(),
        Value::Null => Vec::new(),
        other => {
            log::warn!("`metadata.tags` is not a sequence ({}), ignoring it", kind_of(other));
            Vec::new()
        }
    }
}

pub(super) fn spec(spec: Option<&Mapping>) -> QuickStartSpec {
    let passthrough = |key: &str| spec.and_then(|s| s.get(key)).cloned();

    let extra = spec
        .map(|s| {
            s.iter()
                .filter(|(key, _)| {
                    key.as_str()
                        .is_none_or(|key| !QuickStartSpec::KNOWN_KEYS.contains(&key))
                })
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect()
        })
        .unwrap_or_default();

    QuickStartSpec {
        display_name: string_field(spec, "displayName").unwrap_or_default(),
        description: string_field(spec, "description").unwrap_or_default(),
        icon: passthrough("icon"),
        r#type: passthrough("type"),
        duration_minutes: passthrough("durationMinutes"),
        link: passthrough("link"),
        prerequisites: passthrough("prerequisites"),
        introduction: passthrough("introduction"),
        tasks: passthrough("tasks"),
        extra,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", true)]
    #[case("# a\n  # b\n", true)]
    #[case("---\n...\n", true)]
    #[case("a: 1", false)]
    #[case("# header\nspec: {}\n", false)]
    fn test_has_no_content(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(has_no_content(text), expected);
    }

    #[rstest]
    #[case("text: hi", Some("hi"))]
    #[case("text: 12", Some("12"))]
    #[case("text: true", Some("true"))]
    #[case("text: ~", None)]
    #[case("text: [a]", None)]
    fn test_scalar(#[case] yaml: &str, #[case] expected: Option<&str>) {
        let document: Value = serde_yaml::from_str(yaml).unwrap();
        let text = document.get("text").and_then(scalar);

        assert_eq!(text.as_deref(), expected);
    }

    #[test]
    fn test_spec_without_section_is_default() {
        assert_eq!(spec(None), QuickStartSpec::default());
    }
}
