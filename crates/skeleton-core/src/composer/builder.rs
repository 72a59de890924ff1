//! Composer manifest derivation from the collected answers
//!
//! Pure computation over already-validated inputs. Each feature contributes
//! a complete slice of dependencies and scripts, or nothing at all; the
//! emitted `scripts` map is always complete, so a shallow patch-wins merge
//! cannot leave stale feature scripts behind.

use crate::answers::{AnswerSet, Feature, FeatureSet, TestingFramework};
use serde::Serialize;
use serde_json::{json, Map, Value};

/// A composer.json author entry.
#[derive(Debug, Clone, Serialize)]
pub struct Author {
    pub name: String,
    pub email: String,
}

/// The full composer.json patch this tool produces. Field order here is the
/// serialization order of the patch itself; the writer re-orders against
/// `KEY_ORDER` when merging over an existing manifest.
#[derive(Debug, Clone, Serialize)]
pub struct ComposerPatch {
    pub name: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub homepage: String,
    pub license: String,
    pub authors: Vec<Author>,
    pub require: Map<String, Value>,
    #[serde(rename = "require-dev")]
    pub require_dev: Map<String, Value>,
    pub autoload: Map<String, Value>,
    #[serde(rename = "autoload-dev")]
    pub autoload_dev: Map<String, Value>,
    pub scripts: Map<String, Value>,
    pub config: Map<String, Value>,
    pub extra: Map<String, Value>,
    #[serde(rename = "minimum-stability")]
    pub minimum_stability: String,
    #[serde(rename = "prefer-stable")]
    pub prefer_stable: bool,
}

impl ComposerPatch {
    /// Flatten into a JSON object for merging.
    pub fn into_map(self) -> Map<String, Value> {
        match serde_json::to_value(&self) {
            Ok(Value::Object(map)) => map,
            // Unreachable: every field serializes to a plain JSON value
            _ => Map::new(),
        }
    }
}

/// Derive the composer.json patch from the answer set and enabled features.
pub fn build_composer_patch(answers: &AnswerSet, features: &FeatureSet) -> ComposerPatch {
    let psr4_prefix = answers.psr4_prefix();

    let mut require = Map::new();
    require.insert(
        "php".to_string(),
        json!(format!("^{}", answers.php_version.as_str())),
    );
    require.insert(
        "illuminate/support".to_string(),
        json!(format!("^{}.0", answers.laravel_version.as_str())),
    );

    let mut require_dev = Map::new();
    require_dev.insert("nunomaduro/collision".to_string(), json!("^8.0"));
    require_dev.insert("orchestra/testbench".to_string(), json!("^10.0"));

    let mut scripts = Map::new();
    scripts.insert(
        "post-autoload-dump".to_string(),
        json!(["Illuminate\\Foundation\\ComposerScripts::postAutoloadDump"]),
    );
    scripts.insert("post-update-cmd".to_string(), json!([]));

    let mut config = Map::new();
    config.insert("sort-packages".to_string(), json!(true));

    // Testing framework: exactly one branch taken
    match answers.testing_framework {
        TestingFramework::Pest => {
            require_dev.insert("pestphp/pest".to_string(), json!("^3.0"));
            require_dev.insert("pestphp/pest-plugin-arch".to_string(), json!("^3.0"));
            require_dev.insert("pestphp/pest-plugin-laravel".to_string(), json!("^3.0"));
            config.insert(
                "allow-plugins".to_string(),
                json!({ "pestphp/pest-plugin": true }),
            );
            scripts.insert("test".to_string(), json!("vendor/bin/pest"));
        }
        TestingFramework::Phpunit => {
            require_dev.insert("phpunit/phpunit".to_string(), json!("^12.0"));
            scripts.insert("test".to_string(), json!("@php vendor/bin/phpunit"));
        }
    }

    if features.contains(Feature::Rector) {
        require_dev.insert("driftingly/rector-laravel".to_string(), json!("^2.0"));
        require_dev.insert("rector/rector".to_string(), json!("^2.0"));
        scripts.insert("refactor".to_string(), json!("rector"));
        scripts.insert("refactor:dry".to_string(), json!("rector --dry-run"));
    }

    if features.contains(Feature::Pint) {
        require_dev.insert("laravel/pint".to_string(), json!("^1.0"));
        scripts.insert("lint".to_string(), json!("./vendor/bin/pint"));
        scripts.insert("lint:test".to_string(), json!("./vendor/bin/pint --test"));
    }

    if features.contains(Feature::Phpstan) {
        require_dev.insert("phpstan/phpstan".to_string(), json!("^2.0"));
        if features.larastan() {
            require_dev.insert("larastan/larastan".to_string(), json!("^3.0"));
        }
    }

    let mut psr4 = Map::new();
    psr4.insert(psr4_prefix.clone(), json!("src/"));
    psr4.insert(
        format!("{}Database\\Factories\\", psr4_prefix),
        json!("database/factories/"),
    );
    let mut autoload = Map::new();
    autoload.insert("psr-4".to_string(), Value::Object(psr4));

    let mut psr4_dev = Map::new();
    psr4_dev.insert(format!("{}Tests\\", psr4_prefix), json!("tests/"));
    let mut autoload_dev = Map::new();
    autoload_dev.insert("psr-4".to_string(), Value::Object(psr4_dev));

    let mut aliases = Map::new();
    aliases.insert(
        answers.class_name.clone(),
        json!(format!("{}Facades\\{}", psr4_prefix, answers.class_name)),
    );
    let mut laravel = Map::new();
    laravel.insert(
        "providers".to_string(),
        json!([format!("{}{}", psr4_prefix, answers.service_provider_name())]),
    );
    laravel.insert("aliases".to_string(), Value::Object(aliases));
    let mut extra = Map::new();
    extra.insert("laravel".to_string(), Value::Object(laravel));

    ComposerPatch {
        name: answers.package_identity(),
        description: answers.package_description.clone(),
        keywords: vec!["laravel".to_string(), answers.package_name.clone()],
        homepage: format!(
            "https://github.com/{}/{}",
            answers.vendor_slug(),
            answers.package_name
        ),
        license: "MIT".to_string(),
        authors: vec![Author {
            name: answers.author_name.clone(),
            email: answers.author_email.clone(),
        }],
        require,
        require_dev,
        autoload,
        autoload_dev,
        scripts,
        config,
        extra,
        minimum_stability: "stable".to_string(),
        prefer_stable: true,
    }
}
