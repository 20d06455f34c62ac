//! # Content Blocks
//!
//! A block is one ordered unit of document content (paragraph,
//! heading, atomic embed placeholder, ...) with its own type, text,
//! nesting depth and per-character formatting metadata.
//!
//! Invariant: `chars.len() == text.chars().count()` — every character
//! position carries exactly one [`CharacterMetadata`] entry.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Well-known block type tags. The set is open-ended: a block's type
/// is any string, these are the ones the pipeline treats specially or
/// that hosts commonly enable.
pub mod block_types {
    /// Plain paragraph; the demotion target for disallowed types.
    pub const UNSTYLED: &str = "unstyled";
    /// Single non-text unit of content (image, embed, rule). Exactly
    /// one placeholder character.
    pub const ATOMIC: &str = "atomic";
    pub const BLOCKQUOTE: &str = "blockquote";
    pub const HEADER_ONE: &str = "header-one";
    pub const HEADER_TWO: &str = "header-two";
    pub const HEADER_THREE: &str = "header-three";
    pub const HEADER_FOUR: &str = "header-four";
    pub const HEADER_FIVE: &str = "header-five";
    pub const HEADER_SIX: &str = "header-six";
    pub const UNORDERED_LIST_ITEM: &str = "unordered-list-item";
    pub const ORDERED_LIST_ITEM: &str = "ordered-list-item";
    pub const CODE_BLOCK: &str = "code-block";
}

/// Placeholder glyph carried by atomic blocks. Also the residual
/// artifact left behind in raw text when an image annotation reference
/// is cleared outside an atomic block (the text is intentionally left
/// untouched; only the reference goes).
pub const ATOMIC_PLACEHOLDER: char = '\u{1F4F7}';

/// Per-character formatting state: active style tags plus an optional
/// reference into the annotation registry.
///
/// Immutable value per character position. A rewrite that wants a
/// different assignment replaces the block's whole metadata sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterMetadata {
    /// Active inline style tags (e.g. "BOLD", "ITALIC").
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub styles: BTreeSet<String>,

    /// Key of the annotation this character references, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
}

impl CharacterMetadata {
    /// Metadata with no styles and no annotation reference.
    pub fn plain() -> Self {
        Self::default()
    }

    /// Metadata referencing an annotation, no styles.
    pub fn annotated(key: impl Into<String>) -> Self {
        Self {
            styles: BTreeSet::new(),
            annotation: Some(key.into()),
        }
    }

    /// Metadata with the given style tags, no annotation reference.
    pub fn styled<I, S>(styles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            styles: styles.into_iter().map(Into::into).collect(),
            annotation: None,
        }
    }

    /// Same character with the annotation reference cleared.
    pub fn without_annotation(&self) -> Self {
        Self {
            styles: self.styles.clone(),
            annotation: None,
        }
    }

    /// Same character keeping only the styles present in `enabled`.
    pub fn retain_styles(&self, enabled: &BTreeSet<&str>) -> Self {
        Self {
            styles: self
                .styles
                .iter()
                .filter(|s| enabled.contains(s.as_str()))
                .cloned()
                .collect(),
            annotation: self.annotation.clone(),
        }
    }
}

/// One ordered unit of document content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBlock {
    /// Unique, stable key within the document. Order of blocks — not
    /// keys — defines adjacency.
    pub key: String,

    /// Block type tag (see [`block_types`]).
    #[serde(rename = "type")]
    pub block_type: String,

    /// Raw text content.
    pub text: String,

    /// Non-negative nesting level (list nesting).
    pub depth: u32,

    /// Per-character metadata, aligned 1:1 with `text`'s characters.
    pub chars: Vec<CharacterMetadata>,
}

impl ContentBlock {
    /// Create a block with plain (unstyled, unannotated) metadata for
    /// every character of `text`.
    pub fn new(key: impl Into<String>, block_type: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let chars = text.chars().map(|_| CharacterMetadata::plain()).collect();
        Self {
            key: key.into(),
            block_type: block_type.into(),
            text,
            depth: 0,
            chars,
        }
    }

    /// Number of character positions (equals `chars.len()` under the
    /// alignment invariant).
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Whether text and metadata are aligned 1:1.
    pub fn is_aligned(&self) -> bool {
        self.text.chars().count() == self.chars.len()
    }

    /// Metadata of the character at offset 0, if any.
    pub fn first_char(&self) -> Option<&CharacterMetadata> {
        self.chars.first()
    }

    /// Annotation key referenced at offset 0, if any.
    pub fn first_annotation(&self) -> Option<&str> {
        self.first_char()?.annotation.as_deref()
    }

    /// Same block with a different type.
    pub fn with_type(&self, block_type: impl Into<String>) -> Self {
        Self {
            block_type: block_type.into(),
            ..self.clone()
        }
    }

    /// Same block with a different depth.
    pub fn with_depth(&self, depth: u32) -> Self {
        Self {
            depth,
            ..self.clone()
        }
    }

    /// Same block with `depth`, type and key, but new text and
    /// metadata. The caller is responsible for alignment.
    pub fn with_text(&self, text: impl Into<String>, chars: Vec<CharacterMetadata>) -> Self {
        Self {
            key: self.key.clone(),
            block_type: self.block_type.clone(),
            text: text.into(),
            depth: self.depth,
            chars,
        }
    }

    /// Same block with a replaced metadata sequence (text unchanged).
    pub fn with_chars(&self, chars: Vec<CharacterMetadata>) -> Self {
        Self {
            key: self.key.clone(),
            block_type: self.block_type.clone(),
            text: self.text.clone(),
            depth: self.depth,
            chars,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_block_aligns_metadata_with_text() {
        let block = ContentBlock::new("a", block_types::UNSTYLED, "hello");
        assert!(block.is_aligned());
        assert_eq!(block.len(), 5);
        assert!(block.chars.iter().all(|c| c.styles.is_empty() && c.annotation.is_none()));
    }

    #[test]
    fn test_alignment_counts_chars_not_bytes() {
        let block = ContentBlock::new("a", block_types::ATOMIC, ATOMIC_PLACEHOLDER.to_string());
        assert!(block.is_aligned());
        assert_eq!(block.len(), 1);
    }

    #[test]
    fn test_retain_styles_drops_disallowed_tags() {
        let meta = CharacterMetadata {
            styles: ["BOLD".to_string(), "ITALIC".to_string()].into(),
            annotation: Some("ann1".to_string()),
        };
        let enabled: BTreeSet<&str> = ["BOLD"].into();
        let kept = meta.retain_styles(&enabled);
        assert_eq!(kept.styles, ["BOLD".to_string()].into());
        assert_eq!(kept.annotation.as_deref(), Some("ann1"));
    }

    #[test]
    fn test_without_annotation_keeps_styles() {
        let meta = CharacterMetadata {
            styles: ["BOLD".to_string()].into(),
            annotation: Some("ann1".to_string()),
        };
        let cleared = meta.without_annotation();
        assert_eq!(cleared.annotation, None);
        assert_eq!(cleared.styles, meta.styles);
    }

    #[test]
    fn test_with_type_preserves_everything_else() {
        let block = ContentBlock::new("a", block_types::BLOCKQUOTE, "quote").with_depth(2);
        let reset = block.with_type(block_types::UNSTYLED);
        assert_eq!(reset.block_type, block_types::UNSTYLED);
        assert_eq!(reset.key, "a");
        assert_eq!(reset.text, "quote");
        assert_eq!(reset.depth, 2);
        assert_eq!(reset.chars, block.chars);
    }
}
