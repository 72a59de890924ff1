//! Subprocess collaborators
//!
//! This module provides:
//! - Tool detection (git, PHP, composer)
//! - Git identity lookups and skeleton remote retargeting
//! - Composer installation management and the dependency install step

pub mod check;
pub mod git;
pub mod install;
pub mod tool;

pub use check::{check_git, check_php, check_tools, ToolInfo};
pub use install::composer_update;
pub use tool::{composer_tool, ToolManager};
