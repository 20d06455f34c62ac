//! Inline style filtering: strip every style tag outside the enabled
//! set from every character. Blocks with no disallowed tag are
//! returned unchanged by reference, so hosts diffing on identity only
//! re-render what actually changed.

use redraft_model::ContentState;
use std::collections::BTreeSet;

/// Remove disallowed style tags from every character of every block.
pub fn filter_styles(content: &ContentState, enabled_styles: &BTreeSet<&str>) -> ContentState {
    content.map_blocks(|block| {
        let needs_filtering = block
            .chars
            .iter()
            .any(|c| c.styles.iter().any(|s| !enabled_styles.contains(s.as_str())));
        if !needs_filtering {
            return None;
        }
        let chars = block
            .chars
            .iter()
            .map(|c| c.retain_styles(enabled_styles))
            .collect();
        Some(block.with_chars(chars))
    })
}
