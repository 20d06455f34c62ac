//! Filter configuration: the caller-declared whitelist of block
//! types, inline styles and annotation types, plus per-annotation
//! attribute whitelisting.
//!
//! The config is plain data (serde-deserializable, camelCase for host
//! interchange). Derived lookup sets are built once per pipeline call
//! rather than scanned per block or per annotation.

use redraft_model::annotation_types;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Whitelist entry for one annotation type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotationRule {
    /// Annotation type tag this entry enables.
    #[serde(rename = "type")]
    pub annotation_type: String,

    /// Attribute names copied through by attribute whitelisting.
    /// Anything else in an annotation's data is dropped.
    pub attributes: Vec<String>,

    /// Attribute name → regex pattern, consulted by
    /// [`passes_attribute_whitelist`](crate::passes_attribute_whitelist).
    pub whitelist: BTreeMap<String, String>,
}

impl AnnotationRule {
    pub fn new(annotation_type: impl Into<String>) -> Self {
        Self {
            annotation_type: annotation_type.into(),
            ..Self::default()
        }
    }

    pub fn with_attributes<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes = attributes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_pattern(mut self, attribute: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.whitelist.insert(attribute.into(), pattern.into());
        self
    }
}

/// The full whitelist configuration. `Default` disallows everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterConfig {
    /// Maximum list nesting depth; deeper blocks are clamped.
    pub max_list_nesting: u32,

    /// Enables horizontal-rule annotations without an explicit entry
    /// in `enabled_annotation_types`.
    pub allow_horizontal_rule: bool,

    /// Block type tags to keep. `unstyled` and `atomic` are always
    /// force-enabled by the pipeline.
    pub enabled_block_types: Vec<String>,

    /// Inline style tags to keep.
    pub enabled_styles: Vec<String>,

    /// Annotation types to keep, with per-type attribute rules.
    pub enabled_annotation_types: Vec<AnnotationRule>,
}

impl FilterConfig {
    /// Enabled annotation type tags, extended with `HORIZONTAL_RULE`
    /// when `allow_horizontal_rule` is set.
    pub(crate) fn annotation_type_set(&self) -> BTreeSet<&str> {
        let mut set: BTreeSet<&str> = self
            .enabled_annotation_types
            .iter()
            .map(|rule| rule.annotation_type.as_str())
            .collect();
        if self.allow_horizontal_rule {
            set.insert(annotation_types::HORIZONTAL_RULE);
        }
        set
    }

    pub(crate) fn style_set(&self) -> BTreeSet<&str> {
        self.enabled_styles.iter().map(String::as_str).collect()
    }

    pub(crate) fn block_type_set(&self) -> BTreeSet<&str> {
        self.enabled_block_types.iter().map(String::as_str).collect()
    }
}
