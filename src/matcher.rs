use regex::Regex;
use serde_json::{Map, Value};

/// A bag of properties belonging to a single group or design token node.
///
/// Values are kept exactly as they appeared in the input document. The
/// parser never validates or coerces them.
pub type PropertyBag = Map<String, Value>;

/// Matches property names against either an exact name or a pattern.
///
/// Matcher lists in a [`FormatProfile`](crate::format::FormatProfile) are
/// evaluated per key and order-independently; a key matches the list if it
/// matches any entry.
#[derive(Debug, Clone)]
pub enum PropertyMatcher {
    Exact(String),
    Pattern(Regex),
}

impl PropertyMatcher {
    #[must_use]
    pub fn is_match(&self, name: &str) -> bool {
        match self {
            PropertyMatcher::Exact(exact) => exact == name,
            PropertyMatcher::Pattern(pattern) => pattern.is_match(name),
        }
    }
}

impl From<&str> for PropertyMatcher {
    fn from(name: &str) -> Self {
        PropertyMatcher::Exact(name.to_string())
    }
}

impl From<String> for PropertyMatcher {
    fn from(name: String) -> Self {
        PropertyMatcher::Exact(name)
    }
}

impl From<Regex> for PropertyMatcher {
    fn from(pattern: Regex) -> Self {
        PropertyMatcher::Pattern(pattern)
    }
}

/// The two halves of a property bag split by [`extract_properties`].
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedProperties {
    /// Properties whose names matched the matcher list.
    pub extracted: PropertyBag,
    /// Everything else, in original document order.
    pub rest: PropertyBag,
}

/// Splits `data` into the properties whose names match `matchers` and the
/// remainder. Both output bags are freshly allocated; the input is never
/// modified.
#[must_use]
pub fn extract_properties(data: &PropertyBag, matchers: &[PropertyMatcher]) -> ExtractedProperties {
    let mut extracted = PropertyBag::new();
    let mut rest = PropertyBag::new();
    for (name, value) in data {
        if matchers.iter().any(|m| m.is_match(name)) {
            extracted.insert(name.clone(), value.clone());
        } else {
            rest.insert(name.clone(), value.clone());
        }
    }
    ExtractedProperties { extracted, rest }
}
