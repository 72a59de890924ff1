//! Facade and service provider source generation

use crate::answers::AnswerSet;
use crate::error::ScaffoldError;
use crate::text;
use std::path::Path;
use tokio::fs;

/// Generate `src/Facades/<Class>.php` and `src/<Class>ServiceProvider.php`
/// from built-in templates with the answer set substituted in.
pub async fn scaffold_facade_and_provider(
    root: &Path,
    answers: &AnswerSet,
) -> Result<(), ScaffoldError> {
    let vendor = &answers.vendor_namespace;
    let package = answers.namespace_segment();
    let class = &answers.class_name;
    let accessor = text::kebab_case(&package);

    let facade = format!(
        "<?php

namespace {vendor}\\{package}\\Facades;

use Illuminate\\Support\\Facades\\Facade;

class {class} extends Facade
{{
    protected static function getFacadeAccessor(): string
    {{
        return '{accessor}';
    }}
}}
"
    );

    let facade_path = root.join("src/Facades").join(format!("{class}.php"));
    fs::write(&facade_path, facade)
        .await
        .map_err(|source| ScaffoldError::Unwritable {
            path: facade_path.clone(),
            source,
        })?;

    let provider = format!(
        "<?php

namespace {vendor}\\{package};

use Illuminate\\Support\\ServiceProvider;

class {class}ServiceProvider extends ServiceProvider
{{
    public function boot(): void
    {{
        // ...
    }}
}}
"
    );

    let provider_path = root.join("src").join(format!("{class}ServiceProvider.php"));
    fs::write(&provider_path, provider)
        .await
        .map_err(|source| ScaffoldError::Unwritable {
            path: provider_path,
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::{LaravelVersion, PhpVersion, TestingFramework};

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

    #[tokio::test]
    async fn test_generates_facade_and_provider() {
        let dir = tempfile::tempdir().unwrap();
        tokio::fs::create_dir_all(dir.path().join("src/Facades"))
            .await
            .unwrap();

        scaffold_facade_and_provider(dir.path(), &answers())
            .await
            .unwrap();

        let facade = tokio::fs::read_to_string(dir.path().join("src/Facades/CoolThing.php"))
            .await
            .unwrap();
        assert!(facade.contains("namespace Acme\\CoolThing\\Facades;"));
        assert!(facade.contains("class CoolThing extends Facade"));
        assert!(facade.contains("return 'cool-thing';"));

        let provider =
            tokio::fs::read_to_string(dir.path().join("src/CoolThingServiceProvider.php"))
                .await
                .unwrap();
        assert!(provider.contains("namespace Acme\\CoolThing;"));
        assert!(provider.contains("class CoolThingServiceProvider extends ServiceProvider"));
    }
}
