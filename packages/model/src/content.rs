//! # Content State
//!
//! An immutable document snapshot: ordered blocks plus the annotation
//! registry. Every derivation (`with_blocks`, `with_annotations`,
//! `map_blocks`) produces a new snapshot that shares unaffected
//! blocks and annotations with its source by reference.
//!
//! ## Lifecycle
//!
//! ```text
//! host snapshot → pass → pass → ... → new snapshot
//!       ↑                                  ↓
//!       └────────── replace-state ─────────┘
//! ```

use crate::{Annotation, ContentBlock};
use std::collections::HashMap;
use std::sync::Arc;

/// Immutable document snapshot: ordered blocks + annotation registry.
#[derive(Debug, Clone, Default)]
pub struct ContentState {
    blocks: Vec<Arc<ContentBlock>>,
    annotations: HashMap<String, Arc<Annotation>>,
    // Key → position, rebuilt whenever the block sequence changes.
    index: HashMap<String, usize>,
}

impl ContentState {
    /// Build a snapshot from owned blocks and annotations.
    pub fn new<B, A>(blocks: B, annotations: A) -> Self
    where
        B: IntoIterator<Item = ContentBlock>,
        A: IntoIterator<Item = Annotation>,
    {
        let blocks: Vec<Arc<ContentBlock>> = blocks.into_iter().map(Arc::new).collect();
        let annotations = annotations
            .into_iter()
            .map(|a| (a.key.clone(), Arc::new(a)))
            .collect();
        let index = Self::build_index(&blocks);
        Self {
            blocks,
            annotations,
            index,
        }
    }

    fn build_index(blocks: &[Arc<ContentBlock>]) -> HashMap<String, usize> {
        blocks
            .iter()
            .enumerate()
            .map(|(i, b)| (b.key.clone(), i))
            .collect()
    }

    /// Blocks in document order.
    pub fn blocks(&self) -> &[Arc<ContentBlock>] {
        &self.blocks
    }

    /// Resolve a block by key.
    pub fn block(&self, key: &str) -> Option<&Arc<ContentBlock>> {
        self.index.get(key).map(|&i| &self.blocks[i])
    }

    /// The block immediately following `key` in document order.
    pub fn block_after(&self, key: &str) -> Option<&Arc<ContentBlock>> {
        self.index.get(key).and_then(|&i| self.blocks.get(i + 1))
    }

    pub fn first_block(&self) -> Option<&Arc<ContentBlock>> {
        self.blocks.first()
    }

    pub fn last_block(&self) -> Option<&Arc<ContentBlock>> {
        self.blocks.last()
    }

    /// Resolve an annotation by registry key.
    pub fn annotation(&self, key: &str) -> Option<&Arc<Annotation>> {
        self.annotations.get(key)
    }

    /// The full annotation registry.
    pub fn annotations(&self) -> &HashMap<String, Arc<Annotation>> {
        &self.annotations
    }

    /// New snapshot with a replaced block sequence; the annotation
    /// registry is shared with `self`.
    pub fn with_blocks(&self, blocks: Vec<Arc<ContentBlock>>) -> Self {
        let index = Self::build_index(&blocks);
        Self {
            blocks,
            annotations: self.annotations.clone(),
            index,
        }
    }

    /// New snapshot with a replaced annotation registry; the block
    /// sequence is shared with `self`.
    pub fn with_annotations(&self, annotations: HashMap<String, Arc<Annotation>>) -> Self {
        Self {
            blocks: self.blocks.clone(),
            annotations,
            index: self.index.clone(),
        }
    }

    /// Structural-sharing rewrite primitive: apply `f` to every block
    /// in order, where `None` means "unchanged". Unchanged blocks are
    /// carried into the result by reference; if no block changed at
    /// all, the result shares the entire block sequence with `self`.
    pub fn map_blocks<F>(&self, mut f: F) -> Self
    where
        F: FnMut(&ContentBlock) -> Option<ContentBlock>,
    {
        let mut changed = false;
        let blocks: Vec<Arc<ContentBlock>> = self
            .blocks
            .iter()
            .map(|block| match f(block.as_ref()) {
                Some(rewritten) => {
                    changed = true;
                    Arc::new(rewritten)
                }
                None => Arc::clone(block),
            })
            .collect();

        if !changed {
            return self.clone();
        }
        // Keys never change under map_blocks, so the index carries over.
        Self {
            blocks,
            annotations: self.annotations.clone(),
            index: self.index.clone(),
        }
    }
}
