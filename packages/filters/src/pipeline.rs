//! # Filter pipeline
//!
//! Composes the sanitization passes in fixed order. The order is
//! load-bearing:
//!
//! 1. promotion runs before block-type reset, so block-level
//!    annotations survive type whitelisting by already being atomic;
//! 2. atomic normalization runs before annotation filtering, so a
//!    demoted block's annotation is classified against its new
//!    (non-atomic) enclosing block.

use crate::{
    clamp_depth, filter_annotation_attributes, filter_annotations, filter_styles,
    normalize_atomic_blocks, promote_annotated_blocks, reconcile_selection,
    reset_disallowed_block_types, FilterConfig, FilterError,
};
use redraft_model::{annotation_types, block_types, ContentState, SelectionState};
use std::collections::BTreeSet;
use tracing::debug;

/// Annotation types that only ever exist as whole-block content.
/// Promotion restores their atomic shape regardless of what the
/// caller enables; whitelisting decides survival afterwards.
const BLOCK_LEVEL_ANNOTATION_TYPES: [&str; 2] = [
    annotation_types::IMAGE,
    annotation_types::HORIZONTAL_RULE,
];

/// Run the block/character pipeline: the returned snapshot uses only
/// whitelisted block types, styles and annotation types. Attribute
/// whitelisting is a separate stage
/// ([`filter_annotation_attributes`]); [`apply_filters`] runs both.
pub fn filter_document(content: &ContentState, config: &FilterConfig) -> ContentState {
    let block_level: BTreeSet<&str> = BLOCK_LEVEL_ANNOTATION_TYPES.into();
    let annotation_types = config.annotation_type_set();
    let styles = config.style_set();
    let mut block_types_enabled = config.block_type_set();
    // The editor surface depends on both always being available.
    block_types_enabled.insert(block_types::UNSTYLED);
    block_types_enabled.insert(block_types::ATOMIC);

    let content = promote_annotated_blocks(content, &block_level);
    debug!(blocks = content.blocks().len(), "promoted annotated blocks");
    let content = clamp_depth(&content, config.max_list_nesting);
    let content = reset_disallowed_block_types(&content, &block_types_enabled);
    let content = filter_styles(&content, &styles);
    let content = normalize_atomic_blocks(&content, &annotation_types);
    let content = filter_annotations(&content, &annotation_types);
    debug!(
        blocks = content.blocks().len(),
        annotations = content.annotations().len(),
        "filter pipeline complete"
    );
    content
}

/// Full sanitization entry point: block/character pipeline, then
/// attribute whitelisting, then selection reconciliation against the
/// pre-filter document. Returns the (document, selection) pair the
/// host applies back in one replace-state operation.
pub fn apply_filters(
    content: &ContentState,
    selection: &SelectionState,
    config: &FilterConfig,
) -> Result<(ContentState, SelectionState), FilterError> {
    let filtered = filter_document(content, config);

    // The flag enables horizontal rules without a rule entry; the
    // attribute stage still needs one for every surviving type.
    let mut rules = config.enabled_annotation_types.clone();
    if config.allow_horizontal_rule
        && !rules
            .iter()
            .any(|r| r.annotation_type == annotation_types::HORIZONTAL_RULE)
    {
        rules.push(crate::AnnotationRule::new(annotation_types::HORIZONTAL_RULE));
    }

    let filtered = filter_annotation_attributes(&filtered, &rules)?;
    let selection = reconcile_selection(content, &filtered, selection);
    Ok((filtered, selection))
}
