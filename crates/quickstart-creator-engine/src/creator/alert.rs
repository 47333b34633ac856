use std::fmt;

use crate::parsing::ParseError;

pub const PARSE_ALERT_TITLE: &str = "YAML Parse Error";
pub const PARSE_ALERT_NOTICE: &str =
    "Showing the previous valid state. Fix the YAML to apply your changes.";

/// Warning shown while the text no longer parses
///
/// Stays up until a later parse resolves, whatever the author types meanwhile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlert {
    pub error: ParseError,
}

impl ParseAlert {
    pub fn title(&self) -> &'static str {
        PARSE_ALERT_TITLE
    }

    pub fn message(&self) -> String {
        self.error.to_string()
    }

    pub fn notice(&self) -> &'static str {
        PARSE_ALERT_NOTICE
    }
}

impl From<ParseError> for ParseAlert {
    fn from(error: ParseError) -> Self {
        Self { error }
    }
}

impl fmt::Display for ParseAlert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}. {}", self.title(), self.error, self.notice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_display_carries_message_and_notice() {
        let alert = ParseAlert::from(ParseError::EmptyDocument);

        assert_eq!(
            alert.to_string(),
            "YAML Parse Error: YAML document is empty. Showing the previous valid state. Fix the YAML to apply your changes."
        );
    }

    #[test]
    fn test_syntax_message_is_verbatim() {
        let alert = ParseAlert::from(ParseError::Syntax("bad indent at line 2".to_string()));

        assert_eq!(alert.message(), "bad indent at line 2");
        assert!(alert.notice().contains("previous valid state"));
    }
}
