//! Answer set, feature catalog, and prompt validators
//!
//! The answer set is collected once, validated at prompt time, and then
//! trusted everywhere downstream. Validators live here as pure functions so
//! they can be threaded into prompt `.validate()` closures and tested
//! without a terminal.

use crate::text;
use std::fmt;

/// Minimum supported PHP version, newest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhpVersion {
    Php84,
    Php83,
}

impl PhpVersion {
    pub const ALL: [PhpVersion; 2] = [PhpVersion::Php84, PhpVersion::Php83];

    pub fn as_str(&self) -> &'static str {
        match self {
            PhpVersion::Php84 => "8.4",
            PhpVersion::Php83 => "8.3",
        }
    }
}

impl fmt::Display for PhpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Minimum supported Laravel version, newest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaravelVersion {
    Laravel12,
    Laravel11,
}

impl LaravelVersion {
    pub const ALL: [LaravelVersion; 2] = [LaravelVersion::Laravel12, LaravelVersion::Laravel11];

    pub fn as_str(&self) -> &'static str {
        match self {
            LaravelVersion::Laravel12 => "12",
            LaravelVersion::Laravel11 => "11",
        }
    }
}

impl fmt::Display for LaravelVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The two supported testing frameworks. Exactly one is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestingFramework {
    Pest,
    Phpunit,
}

impl TestingFramework {
    pub fn display_name(&self) -> &'static str {
        match self {
            TestingFramework::Pest => "Pest",
            TestingFramework::Phpunit => "PHPUnit",
        }
    }

    /// Workflow slug used by the README test badge (`:which-test` token).
    pub fn workflow_slug(&self) -> &'static str {
        match self {
            TestingFramework::Pest => "pest",
            TestingFramework::Phpunit => "tests",
        }
    }
}

impl fmt::Display for TestingFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Optional, independently togglable capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Dependabot,
    UpdateChangelog,
    Pint,
    Phpstan,
    Rector,
}

impl Feature {
    pub const ALL: [Feature; 5] = [
        Feature::Dependabot,
        Feature::UpdateChangelog,
        Feature::Pint,
        Feature::Phpstan,
        Feature::Rector,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Feature::Dependabot => "Dependabot",
            Feature::UpdateChangelog => "Update CHANGELOG",
            Feature::Pint => "Pint",
            Feature::Phpstan => "PHPStan",
            Feature::Rector => "Rector",
        }
    }

    /// Features preselected in the multiselect prompt.
    pub fn default_enabled() -> Vec<Feature> {
        vec![Feature::Dependabot, Feature::UpdateChangelog]
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// The set of enabled features, plus the Larastan sub-choice which is only
/// meaningful when PHPStan is enabled.
#[derive(Debug, Clone, Default)]
pub struct FeatureSet {
    enabled: Vec<Feature>,
    larastan: bool,
}

impl FeatureSet {
    /// The Larastan flag is normalized away unless PHPStan itself is on, so
    /// consumers never see an inconsistent combination.
    pub fn new(enabled: Vec<Feature>, larastan: bool) -> Self {
        let larastan = larastan && enabled.contains(&Feature::Phpstan);
        Self { enabled, larastan }
    }

    pub fn contains(&self, feature: Feature) -> bool {
        self.enabled.contains(&feature)
    }

    pub fn larastan(&self) -> bool {
        self.larastan
    }

    pub fn enabled(&self) -> &[Feature] {
        &self.enabled
    }
}

/// Everything the prompts collect about the package. Immutable after
/// collection; all fields are already validated and normalized (slugs are
/// slugs, the namespace is capitalized).
#[derive(Debug, Clone)]
pub struct AnswerSet {
    pub author_name: String,
    pub author_email: String,
    /// VCS provider username, slugified.
    pub vcs_username: String,
    /// PHP namespace vendor segment, e.g. `Acme`.
    pub vendor_namespace: String,
    /// Package name slug, e.g. `cool-thing`.
    pub package_name: String,
    pub package_description: String,
    /// Facade class name, e.g. `CoolThing`.
    pub class_name: String,
    pub php_version: PhpVersion,
    pub laravel_version: LaravelVersion,
    pub testing_framework: TestingFramework,
}

impl AnswerSet {
    /// Slugified vendor segment used in the composer package identity.
    pub fn vendor_slug(&self) -> String {
        text::slugify(&self.vendor_namespace)
    }

    /// `vendor/package` composer identity.
    pub fn package_identity(&self) -> String {
        format!("{}/{}", self.vendor_slug(), self.package_name)
    }

    /// Camel-cased package segment used in PHP namespaces, e.g. `CoolThing`.
    pub fn namespace_segment(&self) -> String {
        text::camel_case(&self.package_name, true)
    }

    /// Root PSR-4 namespace prefix, e.g. `Acme\CoolThing\`.
    pub fn psr4_prefix(&self) -> String {
        format!("{}\\{}\\", self.vendor_namespace, self.namespace_segment())
    }

    /// Service provider class name, e.g. `CoolThingServiceProvider`.
    pub fn service_provider_name(&self) -> String {
        format!("{}ServiceProvider", self.class_name)
    }
}

/// Suggested vendor namespace for a slugified username: first letter
/// uppercased, dashes removed (`john-doe` -> `Johndoe`).
pub fn suggest_vendor_namespace(username: &str) -> String {
    let mut chars = username.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    };
    capitalized.replace('-', "")
}

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Reject empty or whitespace-only input.
pub fn validate_required(input: &str) -> Result<(), &'static str> {
    if input.trim().is_empty() {
        Err("A value is required")
    } else {
        Ok(())
    }
}

/// Structural email check: one `@`, non-empty local part, dotted domain.
pub fn validate_email(input: &str) -> Result<(), &'static str> {
    const MESSAGE: &str = "The email must be a valid email address";

    let Some((local, domain)) = input.split_once('@') else {
        return Err(MESSAGE);
    };
    if local.is_empty() || input.contains(' ') || domain.contains('@') {
        return Err(MESSAGE);
    }
    let valid_domain = domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty());
    if !valid_domain {
        return Err(MESSAGE);
    }
    Ok(())
}

/// Vendor namespace: alphanumeric (dashes allowed), starting with an
/// uppercase letter.
pub fn validate_vendor_namespace(input: &str) -> Result<(), &'static str> {
    if input.is_empty() || !input.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err("Vendor namespace must be alphanumeric");
    }
    if !input.chars().next().is_some_and(|c| c.is_ascii_uppercase()) {
        return Err("Vendor namespace must be capitalized");
    }
    Ok(())
}

/// Package name: alphanumeric, spaces and dashes allowed (slugified after).
pub fn validate_package_name(input: &str) -> Result<(), &'static str> {
    if input.is_empty()
        || !input
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == ' ')
    {
        return Err("Package name must be alphanumeric");
    }
    Ok(())
}

/// Class name: alphanumeric (dashes allowed).
pub fn validate_class_name(input: &str) -> Result<(), &'static str> {
    if input.is_empty() || !input.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err("Class name must be alphanumeric");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn test_derived_identity_fields() {
        let a = answers();
        assert_eq!(a.package_identity(), "acme/cool-thing");
        assert_eq!(a.namespace_segment(), "CoolThing");
        assert_eq!(a.psr4_prefix(), "Acme\\CoolThing\\");
        assert_eq!(a.service_provider_name(), "CoolThingServiceProvider");
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("jane@example.com").is_ok());
        assert!(validate_email("jane@sub.example.com").is_ok());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("jane@example").is_err());
        assert!(validate_email("jane doe@example.com").is_err());
    }

    #[test]
    fn test_validate_vendor_namespace() {
        assert!(validate_vendor_namespace("Acme").is_ok());
        assert!(validate_vendor_namespace("acme").is_err());
        assert!(validate_vendor_namespace("Ac me").is_err());
        assert!(validate_vendor_namespace("").is_err());
    }

    #[test]
    fn test_validate_package_name() {
        assert!(validate_package_name("cool-thing").is_ok());
        assert!(validate_package_name("Cool Thing").is_ok());
        assert!(validate_package_name("cool_thing").is_err());
    }

    #[test]
    fn test_suggest_vendor_namespace() {
        assert_eq!(suggest_vendor_namespace("jane-doe"), "Janedoe");
        assert_eq!(suggest_vendor_namespace(""), "");
    }

    #[test]
    fn test_larastan_requires_phpstan() {
        let without = FeatureSet::new(vec![Feature::Pint], true);
        assert!(!without.larastan());

        let with = FeatureSet::new(vec![Feature::Phpstan], true);
        assert!(with.larastan());
    }
}
