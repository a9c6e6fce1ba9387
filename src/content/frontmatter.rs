//! Front-matter parsing

use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Opening marker at the very start, header up to the first closing marker line,
    /// body is everything after it.
    static ref FRONT_MATTER_RE: Regex = Regex::new(r"(?s)\A---\n(.*?)\n---\n(.*)\z").unwrap();
}

/// Front-matter data from a post or page
///
/// A flat `key: value` mapping in declaration order. Values are always strings;
/// lists such as `tags` are comma separated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    fields: IndexMap<String, String>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    ///
    /// Never fails: a document that does not open with a complete header is
    /// returned whole as the body with an empty mapping.
    pub fn parse(content: &str) -> (Self, &str) {
        let Some(caps) = FRONT_MATTER_RE.captures(content) else {
            return (FrontMatter::default(), content);
        };

        let header = caps.get(1).map_or("", |m| m.as_str());
        let body = caps.get(2).map_or("", |m| m.as_str());

        let mut fields = IndexMap::new();
        for line in header.split('\n') {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            if key.is_empty() {
                continue;
            }
            fields.insert(key.trim().to_string(), unquote(value.trim()).to_string());
        }

        (Self { fields }, body)
    }

    /// Look up a raw value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Look up a value, treating an empty string as absent
    fn non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    pub fn title(&self) -> Option<&str> {
        self.non_empty("title")
    }

    pub fn date(&self) -> Option<&str> {
        self.non_empty("date")
    }

    /// Comma-separated `tags` value, each tag trimmed
    pub fn tags(&self) -> Vec<&str> {
        self.non_empty("tags")
            .map(|tags| tags.split(',').map(str::trim).collect())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

/// Strip one leading and one trailing quote character, independently
fn unquote(value: &str) -> &str {
    let value = value.strip_prefix(['"', '\'']).unwrap_or(value);
    value.strip_suffix(['"', '\'']).unwrap_or(value)
}
