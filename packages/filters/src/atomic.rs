//! # Atomic block normalization and demotion
//!
//! Atomic blocks represent exactly one non-text unit of content and
//! are structurally constrained to a single placeholder character
//! whose metadata carries the block's sole annotation reference.
//! Upstream passes (or the uncontrolled input itself) can leave
//! atomic blocks with stray text, stray styles, or an annotation type
//! the configuration does not allow. This pass restores the shape and
//! demotes blocks whose annotation did not survive.
//!
//! Shape normalization must run first: demotion classifies the block
//! by the annotation at offset 0, and a stale multi-character atomic
//! block's offset-0 annotation is still the one to inspect. Shape
//! normalization never removes that reference.

use redraft_model::{block_types, CharacterMetadata, ContentState, ATOMIC_PLACEHOLDER};
use std::collections::BTreeSet;

/// Normalize every `atomic` block to the single-placeholder shape,
/// then demote to `unstyled` any atomic block whose offset-0
/// annotation is missing or of a disallowed type.
pub fn normalize_atomic_blocks(
    content: &ContentState,
    enabled_annotation_types: &BTreeSet<&str>,
) -> ContentState {
    let placeholder = ATOMIC_PLACEHOLDER.to_string();

    content.map_blocks(|block| {
        if block.block_type != block_types::ATOMIC {
            return None;
        }

        let annotation_key = block.first_annotation().map(str::to_string);

        // Shape: exactly one placeholder character, no styles, only
        // the original annotation reference retained.
        let well_shaped = block.text == placeholder
            && block.chars.len() == 1
            && block.chars[0].styles.is_empty();

        let keep_type = annotation_key
            .as_deref()
            .and_then(|key| content.annotation(key))
            .map(|a| enabled_annotation_types.contains(a.annotation_type.as_str()))
            .unwrap_or(false);

        if well_shaped && keep_type {
            return None;
        }

        let mut normalized = if well_shaped {
            block.clone()
        } else {
            let chars = vec![match &annotation_key {
                Some(key) => CharacterMetadata::annotated(key.clone()),
                None => CharacterMetadata::plain(),
            }];
            block.with_text(placeholder.clone(), chars)
        };
        if !keep_type {
            normalized.block_type = block_types::UNSTYLED.to_string();
        }
        Some(normalized)
    })
}
