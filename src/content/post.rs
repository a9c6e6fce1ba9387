//! Post index entries

use serde::{Deserialize, Deserializer, Serialize};

/// Accepts a list of strings, a single string, or null for the `tags` field
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string, a list of strings, or null")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(item) = seq.next_element::<String>()? {
                vec.push(item);
            }
            Ok(vec)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

/// One entry of the post index (`posts.json`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    /// Document name under the posts directory, also the route target
    pub file: String,
    pub title: String,
    pub date: String,
    #[serde(deserialize_with = "string_or_vec", default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
}

impl PostSummary {
    /// Hash fragment that opens this post
    pub fn route(&self) -> String {
        format!("post/{}", self.file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_optional_fields() {
        let json = r#"[
            {"file": "a.md", "title": "A", "date": "2024-01-02", "tags": ["x", "y"], "excerpt": "short"},
            {"file": "b.md", "title": "B", "date": "2024-01-01"},
            {"file": "c.md", "title": "C", "date": "2023-12-31", "tags": null, "excerpt": null},
            {"file": "d.md", "title": "D", "date": "2023-12-30", "tags": "solo"}
        ]"#;

        let posts: Vec<PostSummary> = serde_json::from_str(json).unwrap();
        assert_eq!(posts.len(), 4);
        assert_eq!(posts[0].tags, vec!["x", "y"]);
        assert_eq!(posts[0].excerpt.as_deref(), Some("short"));
        assert!(posts[1].tags.is_empty());
        assert_eq!(posts[1].excerpt, None);
        assert_eq!(posts[1].route(), "post/b.md");
        assert!(posts[2].tags.is_empty());
        assert_eq!(posts[2].excerpt, None);
        assert_eq!(posts[3].tags, vec!["solo"]);
    }
}
