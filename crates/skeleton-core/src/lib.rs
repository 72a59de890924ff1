//! Skeleton Core - Library for configuring a Laravel package skeleton
//!
//! This library turns a generic package skeleton (the current working
//! directory) into a concrete, ready-to-use Laravel package: it collects
//! answers through terminal prompts, rewrites placeholder tokens, promotes
//! optional stub files, merges `composer.json`, and optionally runs
//! `composer update`.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Pure functions for string transforms,
//!   composer manifest derivation/merging, directory and stub scaffolding
//! - **Layer 2: Collaborators** - Subprocess wrappers for git identity
//!   lookups, tool detection, and the composer install step
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompt
//!   pipeline (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompt pipeline
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use skeleton_core::{answers, composer};
//!
//! // Build a composer.json patch from an already-collected answer set
//! let patch = composer::build_composer_patch(&answer_set, &feature_set);
//! composer::merge_composer(patch, std::path::Path::new("composer.json")).await?;
//! ```

pub mod answers;
pub mod composer;
pub mod error;
pub mod runtime;
pub mod scaffold;
pub mod text;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use answers::{AnswerSet, Feature, FeatureSet, LaravelVersion, PhpVersion, TestingFramework};
pub use composer::{build_composer_patch, merge_composer, ComposerPatch};
pub use error::ScaffoldError;

#[cfg(feature = "tui")]
pub use tui::{run, InitArgs};
