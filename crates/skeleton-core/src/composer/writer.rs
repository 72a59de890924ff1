//! Ordered merging of the composer patch over an existing composer.json
//!
//! Merge semantics: shallow, top-level, patch wins on conflict. Keys on the
//! fixed order list that exist on either side are emitted in list order;
//! pre-existing keys outside the list are appended afterward, keeping their
//! original relative order. Because the patch always carries a complete
//! `scripts` object, stale feature scripts in the existing manifest cannot
//! survive the merge.

use crate::composer::builder::ComposerPatch;
use crate::error::ScaffoldError;
use serde_json::{Map, Value};
use std::path::Path;
use tokio::fs;

/// Fixed emission order for top-level composer.json keys.
pub const KEY_ORDER: [&str; 15] = [
    "name",
    "description",
    "keywords",
    "homepage",
    "license",
    "authors",
    "require",
    "require-dev",
    "autoload",
    "autoload-dev",
    "scripts",
    "config",
    "extra",
    "minimum-stability",
    "prefer-stable",
];

/// Merge `patch` over `existing` with the fixed key order. Pure; both maps
/// are consumed.
pub fn merge_ordered(
    mut patch: Map<String, Value>,
    mut existing: Map<String, Value>,
) -> Map<String, Value> {
    let mut merged = Map::new();

    for key in KEY_ORDER {
        if let Some(value) = patch.remove(key) {
            existing.remove(key);
            merged.insert(key.to_string(), value);
        } else if let Some(value) = existing.remove(key) {
            merged.insert(key.to_string(), value);
        }
    }

    // Pre-existing keys outside the order list keep their relative order
    for (key, value) in existing {
        merged.insert(key, value);
    }

    // Patch keys outside the order list (none today) go last
    for (key, value) in patch {
        merged.insert(key, value);
    }

    merged
}

/// Read, merge, and rewrite the composer manifest at `path`.
///
/// Fails with a `ScaffoldError` if the file cannot be read or written, or
/// if the existing content is not a JSON object. Merge conflicts are not
/// failures; the patch simply wins.
pub async fn merge_composer(patch: ComposerPatch, path: &Path) -> Result<(), ScaffoldError> {
    let raw = fs::read_to_string(path)
        .await
        .map_err(|source| ScaffoldError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

    let existing: Map<String, Value> =
        serde_json::from_str(&raw).map_err(|source| ScaffoldError::InvalidManifest {
            path: path.to_path_buf(),
            source,
        })?;

    let merged = merge_ordered(patch.into_map(), existing);

    // serde_json pretty printing leaves path separators unescaped
    let mut serialized = serde_json::to_string_pretty(&Value::Object(merged))
        .map_err(|source| ScaffoldError::InvalidManifest {
            path: path.to_path_buf(),
            source,
        })?;
    serialized.push('\n');

    fs::write(path, serialized)
        .await
        .map_err(|source| ScaffoldError::Unwritable {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::{
        AnswerSet, Feature, FeatureSet, LaravelVersion, PhpVersion, TestingFramework,
    };
    use crate::composer::builder::build_composer_patch;
    use serde_json::json;

    fn answers() -> AnswerSet {
        AnswerSet {
            author_name: "Jane Doe".to_string(),
            author_email: "jane@example.com".to_string(),
            vcs_username: "jane-doe".to_string(),
            vendor_namespace: "Acme".to_string(),
            package_name: "cool-thing".to_string(),
            package_description: "Does cool things".to_string(),
            class_name: "CoolThing".to_string(),
            php_version: PhpVersion::Php84,
            laravel_version: LaravelVersion::Laravel12,
            testing_framework: TestingFramework::Pest,
        }
    }

    fn as_map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_unknown_existing_keys_survive_after_ordered_keys() {
        let patch = build_composer_patch(&answers(), &FeatureSet::default()).into_map();
        let existing = as_map(json!({
            "repositories": [{ "type": "vcs", "url": "https://example.com" }],
            "funding": []
        }));

        let merged = merge_ordered(patch, existing);

        assert_eq!(
            merged["repositories"],
            json!([{ "type": "vcs", "url": "https://example.com" }])
        );

        let keys: Vec<&str> = merged.keys().map(String::as_str).collect();
        let repositories_at = keys.iter().position(|k| *k == "repositories").unwrap();
        let funding_at = keys.iter().position(|k| *k == "funding").unwrap();
        let prefer_stable_at = keys.iter().position(|k| *k == "prefer-stable").unwrap();
        assert!(repositories_at > prefer_stable_at);
        assert!(funding_at > repositories_at);
    }

    #[test]
    fn test_stale_refactor_scripts_are_removed() {
        let features = FeatureSet::new(vec![Feature::Pint], false);
        let patch = build_composer_patch(&answers(), &features).into_map();
        let existing = as_map(json!({
            "scripts": {
                "refactor": "rector",
                "refactor:dry": "rector --dry-run"
            }
        }));

        let merged = merge_ordered(patch, existing);

        let scripts = merged["scripts"].as_object().unwrap();
        assert!(!scripts.contains_key("refactor"));
        assert!(!scripts.contains_key("refactor:dry"));
        assert!(scripts.contains_key("lint"));
    }

    #[test]
    fn test_key_order_is_stable() {
        let patch = build_composer_patch(&answers(), &FeatureSet::default());
        let merged = merge_ordered(patch.into_map(), Map::new());

        let keys: Vec<&str> = merged.keys().map(String::as_str).collect();
        assert_eq!(keys, KEY_ORDER.to_vec());
    }

    #[tokio::test]
    async fn test_merge_composer_round_trips_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("composer.json");
        tokio::fs::write(&path, r#"{ "repositories": [], "name": "old/name" }"#)
            .await
            .unwrap();

        let patch = build_composer_patch(&answers(), &FeatureSet::default());
        merge_composer(patch, &path).await.unwrap();

        let written: Map<String, Value> =
            serde_json::from_str(&tokio::fs::read_to_string(&path).await.unwrap()).unwrap();
        assert_eq!(written["name"], json!("acme/cool-thing"));
        assert!(written.contains_key("repositories"));

        // Re-running with identical inputs is byte-stable in key order
        let first = tokio::fs::read_to_string(&path).await.unwrap();
        let patch = build_composer_patch(&answers(), &FeatureSet::default());
        merge_composer(patch, &path).await.unwrap();
        let second = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_merge_composer_rejects_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("composer.json");
        tokio::fs::write(&path, "not json at all").await.unwrap();

        let patch = build_composer_patch(&answers(), &FeatureSet::default());
        let err = merge_composer(patch, &path).await.unwrap_err();
        assert!(matches!(err, ScaffoldError::InvalidManifest { .. }));
    }

    #[tokio::test]
    async fn test_merge_composer_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("composer.json");

        let patch = build_composer_patch(&answers(), &FeatureSet::default());
        let err = merge_composer(patch, &path).await.unwrap_err();
        assert!(matches!(err, ScaffoldError::Unreadable { .. }));
    }
}
