//! Filesystem scaffolding for the package skeleton
//!
//! This module provides:
//! - Idempotent creation of the fixed package directory layout
//! - Facade and service provider source generation
//! - Stub promotion (rename out of `stubs/`) with token substitution,
//!   gated by the enabled features
//! - Cleanup of the installer binary and the stubs directory

pub mod dirs;
pub mod sources;
pub mod stubs;

pub use dirs::{ensure_directories, update_license, write_config_stub, PACKAGE_DIRECTORIES};
pub use sources::scaffold_facade_and_provider;
pub use stubs::{
    remove_installer, remove_stubs, scaffold_docs, scaffold_feature_files, scaffold_github_files,
    scaffold_tests, GITHUB_DIR, STUBS_DIR,
};
