//! Git identity lookups and skeleton remote retargeting
//!
//! Queries are best-effort: a failing or empty `git config` yields `None`
//! and the prompt simply has no suggested default. Only the remote rewrite,
//! which mutates repository state, reports failure.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

/// Origin URLs still pointing at the upstream skeleton carry this suffix.
const SKELETON_REMOTE_MARKER: &str = "skeleton.git";

/// Read a single `git config` value, `None` on failure or empty output.
pub fn config_value(root: &Path, key: &str) -> Option<String> {
    let output = Command::new("git")
        .args(["config", "--get", key])
        .current_dir(root)
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let value = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

pub fn user_name(root: &Path) -> Option<String> {
    config_value(root, "user.name")
}

pub fn user_email(root: &Path) -> Option<String> {
    config_value(root, "user.email")
}

pub fn remote_origin_url(root: &Path) -> Option<String> {
    config_value(root, "remote.origin.url")
}

/// Rewrite the last path segment of a skeleton-marker origin URL to
/// `<package_slug>.git`.
pub fn retarget_url(origin: &str, package_slug: &str) -> Option<String> {
    if !origin.ends_with(SKELETON_REMOTE_MARKER) {
        return None;
    }
    let (base, _) = origin.rsplit_once('/')?;
    Some(format!("{base}/{package_slug}.git"))
}

/// If the origin remote still points at the upstream skeleton, retarget it
/// to the new package name. Returns the new URL when a rewrite happened.
pub fn retarget_skeleton_remote(root: &Path, package_slug: &str) -> Result<Option<String>> {
    let Some(origin) = remote_origin_url(root) else {
        return Ok(None);
    };
    let Some(new_url) = retarget_url(&origin, package_slug) else {
        return Ok(None);
    };

    let status = Command::new("git")
        .args(["remote", "set-url", "origin", &new_url])
        .current_dir(root)
        .status()
        .context("Failed to run git remote set-url")?;

    if !status.success() {
        anyhow::bail!("git remote set-url failed with exit code {}", status.code().unwrap_or(-1));
    }

    Ok(Some(new_url))
}
