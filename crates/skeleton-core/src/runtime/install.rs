//! Dependency installation via composer
//!
//! The subprocess exit code is checked deliberately: a failing
//! `composer update` halts the run instead of silently proceeding to the
//! README step with an unresolved vendor tree.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

/// Run `composer update` non-interactively in `root`.
pub async fn composer_update(root: &Path) -> Result<()> {
    let status = Command::new("composer")
        .args(["update", "--quiet", "--no-interaction"])
        .current_dir(root)
        .stdin(Stdio::null())
        .status()
        .await
        .context("Failed to run composer")?;

    if !status.success() {
        anyhow::bail!(
            "composer update failed with exit code {}",
            status.code().unwrap_or(-1)
        );
    }

    Ok(())
}
