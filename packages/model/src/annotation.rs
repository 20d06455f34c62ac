//! Typed, attributed objects (links, images, embeds) referenced by
//! document characters. Annotations are stored once in the
//! [`ContentState`](crate::ContentState) registry and shared by
//! reference from any number of characters.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Well-known annotation type tags. Open-ended, like block types.
pub mod annotation_types {
    /// Only valid inside atomic blocks.
    pub const IMAGE: &str = "IMAGE";
    /// Enabled via `allow_horizontal_rule`, not the annotation list.
    pub const HORIZONTAL_RULE: &str = "HORIZONTAL_RULE";
    pub const LINK: &str = "LINK";
    pub const EMBED: &str = "EMBED";
}

/// A typed annotation with an open-ended attribute payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Registry key. Characters reference annotations by this key.
    pub key: String,

    /// Annotation type tag (see [`annotation_types`]).
    #[serde(rename = "type")]
    pub annotation_type: String,

    /// Attribute name → value payload.
    #[serde(default)]
    pub data: BTreeMap<String, Value>,
}

impl Annotation {
    pub fn new(key: impl Into<String>, annotation_type: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            annotation_type: annotation_type.into(),
            data: BTreeMap::new(),
        }
    }

    /// Builder-style attribute insertion, mostly for fixtures.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.insert(name.into(), value.into());
        self
    }

    /// Same annotation with a replaced payload.
    pub fn with_data(&self, data: BTreeMap<String, Value>) -> Self {
        Self {
            key: self.key.clone(),
            annotation_type: self.annotation_type.clone(),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_with_data_replaces_payload() {
        let ann = Annotation::new("e1", annotation_types::LINK)
            .with_attribute("url", "http://x")
            .with_attribute("title", "evil");

        let filtered = ann.with_data([("url".to_string(), json!("http://x"))].into());
        assert_eq!(filtered.key, "e1");
        assert_eq!(filtered.annotation_type, annotation_types::LINK);
        assert_eq!(filtered.data.len(), 1);
        assert_eq!(filtered.data["url"], json!("http://x"));
        // Source annotation untouched.
        assert_eq!(ann.data.len(), 2);
    }
}
