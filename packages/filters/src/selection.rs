//! # Selection reconciliation
//!
//! Filtering can remove or merge away the block a collapsed selection
//! sits on. Reconciliation compares block adjacency between the pre-
//! and post-filter documents to find where the removal happened, and
//! parks the cursor at the end of the surviving block just before it.
//!
//! This is a lazy diff of two ordered key sequences restricted to
//! "where did adjacency change", computed from the end of the new
//! document.

use redraft_model::{ContentState, SelectionState};

/// Reposition `selection` against `new` after a rewrite of `old`.
///
/// Non-collapsed selections, and collapsed selections whose anchor
/// block still exists, are returned unchanged. Otherwise the new
/// document's keys are scanned in reverse for the first block whose
/// successor in `old` differs from its successor in `new` — the point
/// where a removed block once sat — and a collapsed selection is
/// placed at the end of that block's text. If adjacency never
/// diverged (document emptied or unchanged) the original selection is
/// returned as-is; callers must validate it before use.
pub fn reconcile_selection(
    old: &ContentState,
    new: &ContentState,
    selection: &SelectionState,
) -> SelectionState {
    if !selection.is_collapsed() || new.block(&selection.anchor_key).is_some() {
        return selection.clone();
    }

    for block in new.blocks().iter().rev() {
        let old_next = old.block_after(&block.key).map(|b| b.key.as_str());
        let new_next = new.block_after(&block.key).map(|b| b.key.as_str());
        if old_next != new_next {
            return SelectionState::collapsed(block.key.clone(), block.len());
        }
    }

    selection.clone()
}
