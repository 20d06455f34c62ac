//! # Annotation-type filtering
//!
//! Clears per-character annotation references under two independent
//! rules; styles and raw text are never altered:
//!
//! - **type rule**: the annotation's type is not enabled.
//! - **placement rule**: the annotation is an image and the enclosing
//!   block is not `atomic`. Paste can leave image annotations on
//!   characters of ordinary blocks — a representable but invalid
//!   state — so images are confined to atomic blocks independently of
//!   whether the image type is enabled.
//!
//! The placeholder glyph the host may have inserted alongside a
//! removed image reference stays in the raw text; that residual
//! artifact is a documented limitation of this pass, not a defect.

use redraft_model::{annotation_types, block_types, ContentState};
use std::collections::BTreeSet;

/// Remove disallowed or misplaced annotation references from every
/// character. A reference that does not resolve in the registry is
/// cleared as well, keeping referential integrity.
pub fn filter_annotations(
    content: &ContentState,
    enabled_annotation_types: &BTreeSet<&str>,
) -> ContentState {
    content.map_blocks(|block| {
        let is_atomic = block.block_type == block_types::ATOMIC;

        let should_clear = |key: &str| -> bool {
            let annotation = match content.annotation(key) {
                Some(a) => a,
                None => return true,
            };
            let type_tag = annotation.annotation_type.as_str();
            !enabled_annotation_types.contains(type_tag)
                || (type_tag == annotation_types::IMAGE && !is_atomic)
        };

        let needs_filtering = block
            .chars
            .iter()
            .any(|c| c.annotation.as_deref().is_some_and(&should_clear));
        if !needs_filtering {
            return None;
        }

        let chars = block
            .chars
            .iter()
            .map(|c| match c.annotation.as_deref() {
                Some(key) if should_clear(key) => c.without_annotation(),
                _ => c.clone(),
            })
            .collect();
        Some(block.with_chars(chars))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use redraft_model::{Annotation, CharacterMetadata, ContentBlock, ATOMIC_PLACEHOLDER};
    use std::sync::Arc;

    fn block_with_chars(key: &str, block_type: &str, text: &str, chars: Vec<CharacterMetadata>) -> ContentBlock {
        ContentBlock {
            key: key.to_string(),
            block_type: block_type.to_string(),
            text: text.to_string(),
            depth: 0,
            chars,
        }
    }

    #[test]
    fn test_disallowed_type_reference_is_cleared() {
        let content = ContentState::new(
            [block_with_chars(
                "a",
                block_types::UNSTYLED,
                "x",
                vec![CharacterMetadata::annotated("e1")],
            )],
            [Annotation::new("e1", annotation_types::LINK)],
        );
        let enabled = BTreeSet::new();

        let out = filter_annotations(&content, &enabled);
        assert_eq!(out.block("a").unwrap().chars[0].annotation, None);
        // The registry itself is not this pass's concern.
        assert!(out.annotation("e1").is_some());
    }

    #[test]
    fn test_enabled_type_reference_is_kept_by_identity() {
        let content = ContentState::new(
            [block_with_chars(
                "a",
                block_types::UNSTYLED,
                "x",
                vec![CharacterMetadata::annotated("e1")],
            )],
            [Annotation::new("e1", annotation_types::LINK)],
        );
        let enabled = [annotation_types::LINK].into();

        let out = filter_annotations(&content, &enabled);
        assert!(Arc::ptr_eq(content.block("a").unwrap(), out.block("a").unwrap()));
    }

    #[test]
    fn test_image_outside_atomic_block_is_cleared_even_when_enabled() {
        let content = ContentState::new(
            [block_with_chars(
                "a",
                block_types::UNSTYLED,
                &ATOMIC_PLACEHOLDER.to_string(),
                vec![CharacterMetadata::annotated("e1")],
            )],
            [Annotation::new("e1", annotation_types::IMAGE)],
        );
        let enabled = [annotation_types::IMAGE].into();

        let out = filter_annotations(&content, &enabled);
        let block = out.block("a").unwrap();
        assert_eq!(block.chars[0].annotation, None);
        // The stray placeholder glyph stays in the raw text.
        assert_eq!(block.text, ATOMIC_PLACEHOLDER.to_string());
        assert_eq!(block.block_type, block_types::UNSTYLED);
    }

    #[test]
    fn test_image_inside_atomic_block_is_kept() {
        let content = ContentState::new(
            [block_with_chars(
                "a",
                block_types::ATOMIC,
                &ATOMIC_PLACEHOLDER.to_string(),
                vec![CharacterMetadata::annotated("e1")],
            )],
            [Annotation::new("e1", annotation_types::IMAGE)],
        );
        let enabled = [annotation_types::IMAGE].into();

        let out = filter_annotations(&content, &enabled);
        assert!(Arc::ptr_eq(content.block("a").unwrap(), out.block("a").unwrap()));
    }

    #[test]
    fn test_dangling_reference_is_cleared() {
        let content = ContentState::new(
            [block_with_chars(
                "a",
                block_types::UNSTYLED,
                "x",
                vec![CharacterMetadata::annotated("gone")],
            )],
            [],
        );
        let enabled = [annotation_types::LINK].into();

        let out = filter_annotations(&content, &enabled);
        assert_eq!(out.block("a").unwrap().chars[0].annotation, None);
    }

    #[test]
    fn test_styles_untouched_when_clearing_reference() {
        let content = ContentState::new(
            [block_with_chars(
                "a",
                block_types::UNSTYLED,
                "x",
                vec![CharacterMetadata {
                    styles: ["BOLD".to_string()].into(),
                    annotation: Some("e1".to_string()),
                }],
            )],
            [Annotation::new("e1", annotation_types::LINK)],
        );
        let enabled = BTreeSet::new();

        let out = filter_annotations(&content, &enabled);
        let c = &out.block("a").unwrap().chars[0];
        assert_eq!(c.annotation, None);
        assert_eq!(c.styles, ["BOLD".to_string()].into());
    }
}
