//! Full-match validation patterns for template nodes.

use crate::error::TemplateResult;
use crate::schema::PropertyType;
use regex::Regex;
use std::fmt;

/// The pattern a single path element must satisfy.
///
/// Literal patterns only accept the exact literal text. Property patterns
/// are compiled once from the property's type and anchored at both ends, so a
/// candidate matching only part of its text is rejected.
#[derive(Debug, Clone)]
pub enum NodePattern {
    /// Exact text, with its regex-escaped source kept for display
    Literal { text: String, source: String },
    /// Anchored regex derived from a property type
    Property { source: &'static str, regex: Regex },
}

impl NodePattern {
    /// Pattern accepting only `text`.
    pub fn literal(text: impl Into<String>) -> Self {
        let text = text.into();
        let source = regex::escape(&text);
        Self::Literal { text, source }
    }

    /// Pattern accepting the textual form of `property_type` values.
    pub fn for_property(property_type: PropertyType) -> TemplateResult<Self> {
        let source = property_type.pattern();
        let regex = Regex::new(&format!("^(?:{})$", source))?;
        Ok(Self::Property { source, regex })
    }

    /// Unanchored pattern source.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Literal { source, .. } => source,
            Self::Property { source, .. } => source,
        }
    }

    /// Whether `candidate` conforms to the pattern in its entirety.
    pub fn is_full_match(&self, candidate: &str) -> bool {
        match self {
            Self::Literal { text, .. } => text == candidate,
            Self::Property { regex, .. } => regex.is_match(candidate),
        }
    }
}

impl fmt::Display for NodePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn property(property_type: PropertyType) -> NodePattern {
        NodePattern::for_property(property_type).unwrap()
    }

    #[test]
    fn test_literal_escapes_metacharacters() {
        let pattern = NodePattern::literal("a.b+");
        assert_eq!(pattern.as_str(), r"a\.b\+");
        assert!(pattern.is_full_match("a.b+"));
        assert!(!pattern.is_full_match("axbb"));
        assert!(!pattern.is_full_match("a.b+c"));
    }

    #[test]
    fn test_text_pattern() {
        let pattern = property(PropertyType::Text);
        assert!(pattern.is_full_match("Alpha"));
        assert!(pattern.is_full_match("abc123"));
        assert!(!pattern.is_full_match(""));
        assert!(!pattern.is_full_match("NOT A REAL"));
        assert!(!pattern.is_full_match("a-b"));
    }

    #[test]
    fn test_integer_pattern() {
        let pattern = property(PropertyType::Int32);
        assert!(pattern.is_full_match("1234"));
        assert!(pattern.is_full_match("-17"));
        assert!(pattern.is_full_match("+0098"));
        assert!(!pattern.is_full_match("12.5"));
        assert!(!pattern.is_full_match("x12"));
        assert!(!pattern.is_full_match("-"));
    }

    #[test]
    fn test_number_pattern() {
        let pattern = property(PropertyType::Decimal);
        assert!(pattern.is_full_match("3.14159"));
        assert!(pattern.is_full_match("-100.12345678"));
        assert!(pattern.is_full_match("42"));
        assert!(pattern.is_full_match("42."));
        assert!(!pattern.is_full_match(".5"));
        assert!(!pattern.is_full_match("1e10"));
        assert!(!pattern.is_full_match("NOT A REAL"));
    }

    #[test]
    fn test_boolean_pattern() {
        let pattern = property(PropertyType::Boolean);
        for accepted in ["true", "false", "TRUE", "False", "0", "1"] {
            assert!(pattern.is_full_match(accepted), "{} should match", accepted);
        }
        for rejected in ["yes", "2", "truefalse", "10", ""] {
            assert!(!pattern.is_full_match(rejected), "{} should not match", rejected);
        }
    }

    #[test]
    fn test_alternation_is_anchored_as_a_whole() {
        // Without grouping, `^true|false|0|1$` would accept "0abc"
        let pattern = property(PropertyType::Boolean);
        assert!(!pattern.is_full_match("0abc"));
        assert!(!pattern.is_full_match("abc1"));
    }

    #[test]
    fn test_display_shows_source() {
        assert_eq!(property(PropertyType::Int64).to_string(), "[+-]?[0-9]+");
        assert_eq!(NodePattern::literal("beans").to_string(), "beans");
    }
}
