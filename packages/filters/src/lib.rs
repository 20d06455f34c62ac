//! # Redraft Filters
//!
//! Content sanitization pipeline for the Redraft document model.
//!
//! Given a document produced by an uncontrolled input path (paste,
//! external import, collaborative merge) and a caller-declared
//! whitelist, the pipeline deterministically rewrites the document so
//! it only uses allowed block types, inline styles and annotation
//! types — disturbing the document and the user's cursor as little as
//! possible. Disallowed content is dropped or demoted, never
//! relocated.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ filter_document: fixed-order pass pipeline  │
//! │   promote → clamp depth → reset types       │
//! │   → filter styles → normalize atomics       │
//! │   → filter annotations                      │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ filter_annotation_attributes: registry-only │
//! │ attribute whitelisting (independent stage)  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ reconcile_selection: old vs new adjacency   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Pure passes**: every stage maps a snapshot to a snapshot; no
//!    I/O, no shared state across invocations
//! 2. **Minimal disturbance**: unaffected blocks and annotations keep
//!    their identity in the output (structural sharing)
//! 3. **Order is load-bearing**: promotion runs before type reset so
//!    block-level annotations survive whitelisting as atomics; atomic
//!    normalization runs before annotation filtering so demoted
//!    blocks are classified correctly

mod annotations;
mod atomic;
mod attributes;
mod blocks;
mod config;
mod error;
mod pipeline;
mod selection;
mod styles;

pub use annotations::filter_annotations;
pub use atomic::normalize_atomic_blocks;
pub use attributes::{filter_annotation_attributes, passes_attribute_whitelist};
pub use blocks::{clamp_depth, promote_annotated_blocks, reset_disallowed_block_types};
pub use config::{AnnotationRule, FilterConfig};
pub use error::FilterError;
pub use pipeline::{apply_filters, filter_document};
pub use selection::reconcile_selection;
pub use styles::filter_styles;

// Re-export the model for convenience
pub use redraft_model::{
    annotation_types, block_types, Annotation, CharacterMetadata, ContentBlock, ContentState,
    SelectionState, ATOMIC_PLACEHOLDER,
};
