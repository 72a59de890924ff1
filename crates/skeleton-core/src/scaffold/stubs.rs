//! Stub promotion and feature-gated file materialization
//!
//! Stubs ship with the skeleton under `stubs/`. Enabling a feature promotes
//! (renames) its stub to the active target path and substitutes tokens;
//! disabling leaves the stub in place for the bulk cleanup at the end of
//! the run. A missing stub is fatal: it means the skeleton is corrupted.

use crate::answers::{AnswerSet, Feature, FeatureSet, TestingFramework};
use crate::error::ScaffoldError;
use crate::text;
use std::path::{Path, PathBuf};
use tokio::fs;
use walkdir::WalkDir;

/// Directory the skeleton ships its stub files in.
pub const STUBS_DIR: &str = "stubs";

/// GitHub platform directory.
pub const GITHUB_DIR: &str = ".github";

/// Promote a stub to its active target path.
async fn promote(root: &Path, stub: &str, target: &str) -> Result<(), ScaffoldError> {
    let from = root.join(STUBS_DIR).join(stub);
    if !from.exists() {
        return Err(ScaffoldError::MissingStub { path: from });
    }
    let to = root.join(target);
    fs::rename(&from, &to)
        .await
        .map_err(|source| ScaffoldError::Unwritable { path: to, source })
}

async fn ensure_github_dirs(root: &Path) -> Result<(), ScaffoldError> {
    for dir in ["workflows", "ISSUE_TEMPLATE"] {
        let path = root.join(GITHUB_DIR).join(dir);
        fs::create_dir_all(&path)
            .await
            .map_err(|source| ScaffoldError::Unwritable { path, source })?;
    }
    Ok(())
}

/// Materialize the GitHub platform files: the bug report template always,
/// Dependabot and changelog automation only when enabled.
pub async fn scaffold_github_files(root: &Path, features: &FeatureSet) -> Result<(), ScaffoldError> {
    ensure_github_dirs(root).await?;

    if features.contains(Feature::Dependabot) {
        promote(root, "dependabot.yml.stub", ".github/dependabot.yml").await?;
        promote(
            root,
            "dependabot-auto-merge.yml.stub",
            ".github/workflows/dependabot-auto-merge.yml",
        )
        .await?;
    }

    if features.contains(Feature::UpdateChangelog) {
        promote(
            root,
            "update-changelog.yml.stub",
            ".github/workflows/update-changelog.yml",
        )
        .await?;
    }

    promote(root, "bug_report.yml.stub", ".github/ISSUE_TEMPLATE/bug_report.yml").await
}

/// Materialize and configure the test scaffolding for the chosen framework.
pub async fn scaffold_tests(root: &Path, answers: &AnswerSet) -> Result<(), ScaffoldError> {
    promote(root, "Arch.php.stub", "tests/Arch.php").await?;
    promote(root, "TestCase.php.stub", "tests/TestCase.php").await?;

    text::replace_in_file(
        &[":vendorName", ":packageName", ":packageNameServiceProvider"],
        &[
            &answers.vendor_namespace,
            &answers.namespace_segment(),
            &answers.service_provider_name(),
        ],
        &root.join("tests/TestCase.php"),
    )
    .await?;

    let version_tokens = [":phpVersion", ":laravelVersion"];
    let version_values = [
        answers.php_version.as_str(),
        answers.laravel_version.as_str(),
    ];

    match answers.testing_framework {
        TestingFramework::Phpunit => {
            promote(root, "run-tests.yml.stub", ".github/workflows/run-tests.yml").await?;
            text::replace_in_file(
                &version_tokens,
                &version_values,
                &root.join(".github/workflows/run-tests.yml"),
            )
            .await?;
        }
        TestingFramework::Pest => {
            let pest = format!(
                "<?php\n\nuse {}Tests\\TestCase;\n\nuses(TestCase::class)->in(__DIR__);\n",
                answers.psr4_prefix()
            );
            let pest_path = root.join("tests/Pest.php");
            fs::write(&pest_path, pest)
                .await
                .map_err(|source| ScaffoldError::Unwritable {
                    path: pest_path,
                    source,
                })?;

            promote(root, "run-pest.yml.stub", ".github/workflows/run-pest.yml").await?;
            text::replace_in_file(
                &version_tokens,
                &version_values,
                &root.join(".github/workflows/run-pest.yml"),
            )
            .await?;
        }
    }

    Ok(())
}

/// Materialize the files for each enabled optional feature.
pub async fn scaffold_feature_files(
    root: &Path,
    features: &FeatureSet,
    answers: &AnswerSet,
) -> Result<(), ScaffoldError> {
    if features.contains(Feature::Pint) {
        promote(root, "run-linter.yml.stub", ".github/workflows/run-linter.yml").await?;
    }

    if features.contains(Feature::Phpstan) {
        promote(root, "phpstan.neon.stub", "phpstan.neon").await?;
        promote(
            root,
            "static-analysis.yml.stub",
            ".github/workflows/static-analysis.yml",
        )
        .await?;

        if features.larastan() {
            prepend_larastan_include(&root.join("phpstan.neon")).await?;
        }

        text::replace_in_file(
            &[":phpVersion"],
            &[answers.php_version.as_str()],
            &root.join(".github/workflows/static-analysis.yml"),
        )
        .await?;
    }

    if features.contains(Feature::Rector) {
        promote(root, "rector.php.stub", "rector.php").await?;
        text::replace_in_file(
            &[":laravelVersion"],
            &[answers.laravel_version.as_str()],
            &root.join("rector.php"),
        )
        .await?;
    }

    Ok(())
}

async fn prepend_larastan_include(path: &Path) -> Result<(), ScaffoldError> {
    let existing = fs::read_to_string(path)
        .await
        .map_err(|source| ScaffoldError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
    let content = format!(
        "includes:\n    - ./vendor/larastan/larastan/extension.neon\n\n{existing}"
    );
    fs::write(path, content)
        .await
        .map_err(|source| ScaffoldError::Unwritable {
            path: path.to_path_buf(),
            source,
        })
}

/// Materialize the README and pull request template after a successful
/// dependency install.
pub async fn scaffold_docs(root: &Path, answers: &AnswerSet) -> Result<(), ScaffoldError> {
    promote(
        root,
        "PULL_REQUEST_TEMPLATE.md.stub",
        ".github/PULL_REQUEST_TEMPLATE.md",
    )
    .await?;
    promote(root, "README.md.stub", "README.md").await?;

    text::replace_in_file(
        &[":username", ":packageName", ":laravelVersion", ":which-test"],
        &[
            &answers.vcs_username,
            &text::kebab_case(&answers.package_name),
            answers.laravel_version.as_str(),
            answers.testing_framework.workflow_slug(),
        ],
        &root.join("README.md"),
    )
    .await
}

/// Delete the stubs directory. Returns how many files were removed.
pub async fn remove_stubs(root: &Path) -> Result<usize, ScaffoldError> {
    let stubs = root.join(STUBS_DIR);
    let count = WalkDir::new(&stubs)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .count();

    fs::remove_dir_all(&stubs)
        .await
        .map_err(|source| ScaffoldError::Unwritable {
            path: stubs,
            source,
        })?;

    Ok(count)
}

/// Delete the running installer binary itself. Returns the deleted path.
pub fn remove_installer() -> Result<PathBuf, ScaffoldError> {
    let exe = std::env::current_exe().map_err(|source| ScaffoldError::Unreadable {
        path: PathBuf::from("<installer>"),
        source,
    })?;
    std::fs::remove_file(&exe).map_err(|source| ScaffoldError::Unwritable {
        path: exe.clone(),
        source,
    })?;
    Ok(exe)
}
