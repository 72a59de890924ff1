//! Fixed package layout: directories, config stub, LICENSE tokens

use crate::error::ScaffoldError;
use crate::text;
use chrono::{Datelike, Utc};
use std::path::Path;
use tokio::fs;

/// Directories every scaffolded package gets, nested paths included.
pub const PACKAGE_DIRECTORIES: [&str; 8] = [
    "config",
    "database/factories",
    "database/migrations",
    "database/seeders",
    "resources/views",
    "routes",
    "src/Facades",
    "tests",
];

/// Create the fixed directory layout under `root`, ancestors included.
/// Idempotent: re-running never fails or touches existing content.
pub async fn ensure_directories(root: &Path) -> Result<(), ScaffoldError> {
    for dir in PACKAGE_DIRECTORIES {
        let path = root.join(dir);
        fs::create_dir_all(&path)
            .await
            .map_err(|source| ScaffoldError::Unwritable { path, source })?;
    }
    Ok(())
}

/// Write the empty `config/<package>.php` stub.
pub async fn write_config_stub(root: &Path, package_name: &str) -> Result<(), ScaffoldError> {
    let path = root.join("config").join(format!("{package_name}.php"));
    fs::write(&path, "<?php\n\nreturn [\n\n];\n")
        .await
        .map_err(|source| ScaffoldError::Unwritable { path, source })
}

/// Rewrite the `:year` and `:fullName` tokens in the root LICENSE file.
pub async fn update_license(root: &Path, author: &str) -> Result<(), ScaffoldError> {
    let year = Utc::now().year().to_string();
    text::replace_in_file(&[":year", ":fullName"], &[&year, author], &root.join("LICENSE")).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ensure_directories_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();

        ensure_directories(dir.path()).await.unwrap();
        for sub in PACKAGE_DIRECTORIES {
            assert!(dir.path().join(sub).is_dir(), "missing {sub}");
        }

        // A file inside an existing directory must survive a re-run
        let marker = dir.path().join("config/existing.php");
        tokio::fs::write(&marker, "<?php\n").await.unwrap();
        ensure_directories(dir.path()).await.unwrap();
        assert!(marker.exists());
    }

    #[tokio::test]
    async fn test_write_config_stub() {
        let dir = tempfile::tempdir().unwrap();
        tokio::fs::create_dir(dir.path().join("config")).await.unwrap();

        write_config_stub(dir.path(), "cool-thing").await.unwrap();

        let content = tokio::fs::read_to_string(dir.path().join("config/cool-thing.php"))
            .await
            .unwrap();
        assert_eq!(content, "<?php\n\nreturn [\n\n];\n");
    }

    #[tokio::test]
    async fn test_update_license() {
        let dir = tempfile::tempdir().unwrap();
        let license = dir.path().join("LICENSE");
        tokio::fs::write(&license, "Copyright (c) :year :fullName\n")
            .await
            .unwrap();

        update_license(dir.path(), "Jane Doe").await.unwrap();

        let content = tokio::fs::read_to_string(&license).await.unwrap();
        assert!(content.contains("Jane Doe"));
        assert!(!content.contains(":year"));
        assert!(!content.contains(":fullName"));
    }
}
