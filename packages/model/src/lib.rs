//! # Redraft Model
//!
//! Immutable rich-text document model for the Redraft sanitization
//! pipeline.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ ContentState: ordered blocks + annotations  │
//! │  - Blocks addressed by unique, stable key   │
//! │  - Annotations stored once, shared by ref   │
//! │  - Snapshots derive snapshots, never mutate │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ ContentBlock: key + type + text + depth     │
//! │  + per-character metadata (1:1 with text)   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Snapshots, not mutation**: every derivation produces a new
//!    value; callers never observe in-place change
//! 2. **Structural sharing**: unaffected blocks and annotations are
//!    carried into derived snapshots by reference (`Arc`), so the cost
//!    of a rewrite is proportional to what actually changed
//! 3. **Open-ended tags**: block types, style tags and annotation
//!    types are strings; well-known values live in the `block_types`
//!    and `annotation_types` constant modules

mod annotation;
mod block;
mod content;
mod selection;

pub use annotation::{annotation_types, Annotation};
pub use block::{block_types, CharacterMetadata, ContentBlock, ATOMIC_PLACEHOLDER};
pub use content::ContentState;
pub use selection::SelectionState;
