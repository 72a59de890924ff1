//! Composer manifest derivation, merging, and writing
//!
//! This module provides:
//! - `ComposerPatch` - a complete, self-consistent manifest patch derived
//!   from the collected answers and enabled features
//! - Ordered, shallow merging of the patch over an existing composer.json
//! - Stable pretty-printed serialization

pub mod builder;
pub mod writer;

pub use builder::{build_composer_patch, ComposerPatch};
pub use writer::{merge_composer, merge_ordered, KEY_ORDER};
