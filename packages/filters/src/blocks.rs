//! # Block-level normalization passes
//!
//! Three single-purpose rewrites of block fields:
//!
//! - **Promotion**: blocks carrying a block-level annotation at
//!   offset 0 are forced to `atomic`, restoring the shape upstream
//!   insertion may have lost. Runs before type whitelisting so these
//!   blocks survive it as atomics.
//! - **Depth clamp**: list nesting deeper than the configured maximum
//!   is clamped. No reordering.
//! - **Type reset**: disallowed block types are demoted to
//!   `unstyled`. Text, depth and characters are untouched.

use redraft_model::{block_types, ContentState};
use std::collections::BTreeSet;

/// Force the type of any block whose first character carries an
/// annotation of a block-level type (e.g. images, horizontal rules)
/// to `atomic`. Blocks that are already atomic, or whose offset-0
/// annotation is of some other type, are unchanged.
pub fn promote_annotated_blocks(
    content: &ContentState,
    block_level_annotation_types: &BTreeSet<&str>,
) -> ContentState {
    content.map_blocks(|block| {
        if block.block_type == block_types::ATOMIC {
            return None;
        }
        let key = block.first_annotation()?;
        let annotation = content.annotation(key)?;
        if block_level_annotation_types.contains(annotation.annotation_type.as_str()) {
            Some(block.with_type(block_types::ATOMIC))
        } else {
            None
        }
    })
}

/// Clamp every block's depth to at most `max_list_nesting`.
pub fn clamp_depth(content: &ContentState, max_list_nesting: u32) -> ContentState {
    content.map_blocks(|block| {
        (block.depth > max_list_nesting).then(|| block.with_depth(max_list_nesting))
    })
}

/// Demote every block whose type is not in `enabled_block_types` to
/// `unstyled`. Callers must include `unstyled` and `atomic` in the
/// set; the pipeline force-enables both regardless of configuration.
pub fn reset_disallowed_block_types(
    content: &ContentState,
    enabled_block_types: &BTreeSet<&str>,
) -> ContentState {
    content.map_blocks(|block| {
        if enabled_block_types.contains(block.block_type.as_str()) {
            None
        } else {
            Some(block.with_type(block_types::UNSTYLED))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use redraft_model::{annotation_types, Annotation, CharacterMetadata, ContentBlock};
    use std::sync::Arc;

    fn annotated_block(key: &str, block_type: &str, annotation_key: &str) -> ContentBlock {
        ContentBlock {
            key: key.to_string(),
            block_type: block_type.to_string(),
            text: " ".to_string(),
            depth: 0,
            chars: vec![CharacterMetadata::annotated(annotation_key)],
        }
    }

    #[test]
    fn test_promote_block_with_image_annotation_at_offset_zero() {
        let content = ContentState::new(
            [annotated_block("a", block_types::UNSTYLED, "e1")],
            [Annotation::new("e1", annotation_types::IMAGE)],
        );
        let block_level = [annotation_types::IMAGE, annotation_types::HORIZONTAL_RULE].into();

        let out = promote_annotated_blocks(&content, &block_level);
        assert_eq!(out.block("a").unwrap().block_type, block_types::ATOMIC);
    }

    #[test]
    fn test_promote_ignores_inline_annotations() {
        let content = ContentState::new(
            [annotated_block("a", block_types::UNSTYLED, "e1")],
            [Annotation::new("e1", annotation_types::LINK)],
        );
        let block_level = [annotation_types::IMAGE].into();

        let out = promote_annotated_blocks(&content, &block_level);
        assert!(Arc::ptr_eq(content.block("a").unwrap(), out.block("a").unwrap()));
    }

    #[test]
    fn test_promote_ignores_unannotated_and_atomic_blocks() {
        let content = ContentState::new(
            [
                ContentBlock::new("a", block_types::UNSTYLED, "plain"),
                annotated_block("b", block_types::ATOMIC, "e1"),
            ],
            [Annotation::new("e1", annotation_types::IMAGE)],
        );
        let block_level = [annotation_types::IMAGE].into();

        let out = promote_annotated_blocks(&content, &block_level);
        assert!(Arc::ptr_eq(content.block("a").unwrap(), out.block("a").unwrap()));
        assert!(Arc::ptr_eq(content.block("b").unwrap(), out.block("b").unwrap()));
    }

    #[test]
    fn test_clamp_depth_only_touches_deep_blocks() {
        let content = ContentState::new(
            [
                ContentBlock::new("a", block_types::UNORDERED_LIST_ITEM, "one").with_depth(1),
                ContentBlock::new("b", block_types::UNORDERED_LIST_ITEM, "two").with_depth(4),
            ],
            [],
        );

        let out = clamp_depth(&content, 1);
        assert!(Arc::ptr_eq(content.block("a").unwrap(), out.block("a").unwrap()));
        assert_eq!(out.block("b").unwrap().depth, 1);
    }

    #[test]
    fn test_reset_disallowed_types_to_unstyled() {
        let content = ContentState::new(
            [
                ContentBlock::new("a", block_types::BLOCKQUOTE, "quote").with_depth(2),
                ContentBlock::new("b", block_types::HEADER_ONE, "title"),
            ],
            [],
        );
        let enabled = [block_types::UNSTYLED, block_types::ATOMIC, block_types::HEADER_ONE].into();

        let out = reset_disallowed_block_types(&content, &enabled);
        let reset = out.block("a").unwrap();
        assert_eq!(reset.block_type, block_types::UNSTYLED);
        assert_eq!(reset.text, "quote");
        assert_eq!(reset.depth, 2);
        assert!(Arc::ptr_eq(content.block("b").unwrap(), out.block("b").unwrap()));
    }
}
