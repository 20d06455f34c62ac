//! Text cursor / selection range over a document snapshot.
//!
//! A selection is only meaningful against the document it was read
//! from: both block keys must resolve there. After a rewrite the host
//! runs selection reconciliation and must validate the result before
//! use (the degenerate emptied-document case can return a selection
//! that no longer resolves).

use serde::{Deserialize, Serialize};

/// A selection range between two (block key, character offset) points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    pub anchor_key: String,
    pub anchor_offset: usize,
    pub focus_key: String,
    pub focus_offset: usize,
}

impl SelectionState {
    /// A collapsed selection (cursor) at the given point.
    pub fn collapsed(key: impl Into<String>, offset: usize) -> Self {
        let key = key.into();
        Self {
            anchor_key: key.clone(),
            anchor_offset: offset,
            focus_key: key,
            focus_offset: offset,
        }
    }

    /// A range selection between anchor and focus.
    pub fn range(
        anchor_key: impl Into<String>,
        anchor_offset: usize,
        focus_key: impl Into<String>,
        focus_offset: usize,
    ) -> Self {
        Self {
            anchor_key: anchor_key.into(),
            anchor_offset,
            focus_key: focus_key.into(),
            focus_offset,
        }
    }

    /// Whether anchor and focus coincide (a cursor with no range).
    pub fn is_collapsed(&self) -> bool {
        self.anchor_key == self.focus_key && self.anchor_offset == self.focus_offset
    }
}
