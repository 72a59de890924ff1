//! The interactive scaffolding pipeline
//!
//! Strictly ordered, no rollback: every step's failure is fatal and halts
//! the run with the partially-scaffolded directory left as-is.

use crate::answers::{
    self, AnswerSet, Feature, FeatureSet, LaravelVersion, PhpVersion, TestingFramework,
};
use crate::composer;
use crate::runtime::{self, check, git};
use crate::scaffold;
use crate::text;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// CLI arguments for the init command
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    /// Skeleton directory to configure (defaults to the current directory)
    pub directory: Option<PathBuf>,

    /// Auto-confirm all confirmations (non-interactive mode)
    pub yes: bool,

    /// Skip the composer install step entirely
    pub skip_install: bool,

    /// Skip the git/php/composer tool check
    pub skip_tool_check: bool,
}

/// Run the full scaffolding pipeline with interactive prompts
pub async fn run(args: InitArgs) -> Result<()> {
    cliclack::intro("Package Skeleton")?;

    let root = resolve_root(&args)?;

    if args.skip_tool_check {
        cliclack::log::info("Skipping tool check")?;
    } else {
        handle_tool_check(&args).await?;
    }

    let (answers, features) = collect_answers(&root)?;

    if let Some(new_url) = git::retarget_skeleton_remote(&root, &answers.package_name)? {
        cliclack::log::info(format!("Repository remote now points at {}", new_url))?;
    }

    let spinner = cliclack::spinner();
    spinner.start("Scaffolding package layout...");
    scaffold::ensure_directories(&root).await?;
    scaffold::write_config_stub(&root, &answers.package_name).await?;
    scaffold::update_license(&root, &answers.author_name).await?;
    spinner.stop("Package layout ready");

    let spinner = cliclack::spinner();
    spinner.start("Materializing files...");
    scaffold::scaffold_github_files(&root, &features).await?;
    scaffold::scaffold_facade_and_provider(&root, &answers).await?;
    scaffold::scaffold_tests(&root, &answers).await?;
    scaffold::scaffold_feature_files(&root, &features, &answers).await?;
    spinner.stop("Files materialized");

    let spinner = cliclack::spinner();
    spinner.start("Writing composer.json...");
    let patch = composer::build_composer_patch(&answers, &features);
    composer::merge_composer(patch, &root.join("composer.json")).await?;
    spinner.stop("composer.json written");

    if args.skip_install {
        cliclack::log::info("Skipping dependency installation")?;
    } else {
        install_dependencies(&root, &answers, args.yes).await?;
    }

    cleanup_installer(args.yes)?;
    cleanup_stubs(&root, args.yes).await?;

    cliclack::outro("Installation complete! You're all set to start building your package.")?;

    Ok(())
}

fn resolve_root(args: &InitArgs) -> Result<PathBuf> {
    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let root = match &args.directory {
        Some(dir) if dir.is_absolute() => dir.clone(),
        Some(dir) => current_dir.join(dir),
        None => current_dir,
    };

    if !root.is_dir() {
        anyhow::bail!("Skeleton directory does not exist: {}", root.display());
    }

    cliclack::log::info(format!("Configuring skeleton in {}", root.display()))?;
    Ok(root)
}

async fn handle_tool_check(args: &InitArgs) -> Result<()> {
    let tools = check::check_tools();
    for info in &tools {
        if info.available {
            cliclack::log::success(format!(
                "{} detected ({})",
                info.name,
                info.version.as_deref().unwrap_or("unknown")
            ))?;
        } else {
            cliclack::log::warning(format!("{} is not installed", info.name))?;
        }
    }

    let tool = runtime::composer_tool();

    if tool.is_installed() {
        let version = tool.get_version().unwrap_or_else(|| "unknown".to_string());
        cliclack::log::success(format!(
            "{} installed ({})",
            tool.config().display_name,
            version
        ))?;
        return Ok(());
    }

    cliclack::log::warning(format!("{} is not installed", tool.config().display_name))?;

    // In non-interactive mode, just continue; the install step will fail
    // loudly later if it is actually needed
    if args.yes {
        cliclack::log::info(format!(
            "Continuing without {} (--yes mode)",
            tool.config().display_name
        ))?;
        return Ok(());
    }

    let action: &str = cliclack::select("What would you like to do?")
        .item(
            "install",
            format!("Install {} automatically", tool.config().display_name),
            "",
        )
        .item(
            "docs",
            format!("Open documentation ({})", tool.config().docs_url),
            "",
        )
        .item(
            "skip",
            format!("Skip and continue without {}", tool.config().display_name),
            "",
        )
        .interact()?;

    match action {
        "install" => {
            cliclack::log::info(format!("This will execute: {}", tool.install_command()))?;
            let confirm: bool = cliclack::confirm("Proceed with installation?")
                .initial_value(true)
                .interact()?;

            if confirm {
                match tool.install().await {
                    Ok(()) => cliclack::log::success(format!(
                        "{} installed successfully",
                        tool.config().display_name
                    ))?,
                    Err(e) => {
                        cliclack::log::error(format!("{}", e))?;
                        cliclack::log::info(format!(
                            "Continuing without {}; the install step can be skipped later",
                            tool.config().display_name
                        ))?;
                    }
                }
            }
        }
        "docs" => {
            tool.open_docs()?;
            cliclack::outro(format!(
                "After installing {}, run this command again.",
                tool.config().display_name
            ))?;
            std::process::exit(0);
        }
        _ => {
            cliclack::log::info(format!(
                "Continuing without {}. Installation instructions: {}",
                tool.config().display_name,
                tool.config().docs_url
            ))?;
        }
    }

    Ok(())
}

/// Present the fixed, ordered prompt sequence and return the validated
/// answer and feature sets.
fn collect_answers(root: &Path) -> Result<(AnswerSet, FeatureSet)> {
    let git_name = git::user_name(root).unwrap_or_default();
    let git_email = git::user_email(root).unwrap_or_default();

    let mut author_prompt = cliclack::input("What is the package author's name?");
    if !git_name.is_empty() {
        author_prompt = author_prompt.default_input(&git_name);
    }
    let author_name: String = author_prompt
        .validate(|v: &String| answers::validate_required(v))
        .interact()?;

    let mut email_prompt = cliclack::input("What is the package author's email?");
    if !git_email.is_empty() {
        email_prompt = email_prompt.default_input(&git_email);
    }
    let author_email: String = email_prompt
        .validate(|v: &String| answers::validate_email(v))
        .interact()?;

    let username: String = cliclack::input("What is your VCS username?")
        .placeholder("Your VCS provider username")
        .validate(|v: &String| answers::validate_required(v))
        .interact()?;
    let vcs_username = text::slugify(&username);

    let suggested_vendor = answers::suggest_vendor_namespace(&vcs_username);
    let mut vendor_prompt = cliclack::input("What namespace should the package use?");
    if !suggested_vendor.is_empty() {
        vendor_prompt = vendor_prompt
            .default_input(&suggested_vendor)
            .placeholder(&format!("Consider: {}", suggested_vendor));
    }
    let vendor_namespace: String = vendor_prompt
        .validate(|v: &String| answers::validate_vendor_namespace(v))
        .interact()?;

    let dir_basename = root
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();
    let mut package_prompt = cliclack::input("What name would you like to give your package?");
    if !dir_basename.is_empty() {
        package_prompt = package_prompt.default_input(&dir_basename);
    }
    let package_name: String = package_prompt
        .validate(|v: &String| answers::validate_package_name(v))
        .interact()?;
    let package_name = text::slugify(&package_name);

    let package_description: String =
        cliclack::input("Describe what your package tries to accomplish")
            .validate(|v: &String| answers::validate_required(v))
            .interact()?;

    let class_name: String = cliclack::input("Choose a class name for your package")
        .default_input(&text::camel_case(&package_name, true))
        .validate(|v: &String| answers::validate_class_name(v))
        .interact()?;
    let class_name = answers::capitalize(&class_name);

    let mut php_select =
        cliclack::select("What is the minimum PHP version your package supports?");
    for version in PhpVersion::ALL {
        php_select = php_select.item(version, version.as_str(), "");
    }
    let php_version: PhpVersion = php_select.initial_value(PhpVersion::Php84).interact()?;

    let mut laravel_select =
        cliclack::select("What is the minimum Laravel version your package supports?");
    for version in LaravelVersion::ALL {
        laravel_select = laravel_select.item(version, version.as_str(), "");
    }
    let laravel_version: LaravelVersion = laravel_select
        .initial_value(LaravelVersion::Laravel12)
        .interact()?;

    let testing_framework: TestingFramework = cliclack::select("Select a Testing Framework")
        .item(TestingFramework::Pest, "Pest", "")
        .item(TestingFramework::Phpunit, "PHPUnit", "")
        .initial_value(TestingFramework::Pest)
        .interact()?;

    let mut feature_select = cliclack::multiselect("Which extra features do you want enabled?");
    for feature in Feature::ALL {
        feature_select = feature_select.item(feature, feature.display_name(), "");
    }
    let enabled: Vec<Feature> = feature_select
        .initial_values(Feature::default_enabled())
        .required(false)
        .interact()?;

    // Conditional sub-question, only meaningful when PHPStan is selected
    let larastan = if enabled.contains(&Feature::Phpstan) {
        cliclack::confirm("Do you want to enable Larastan?")
            .initial_value(true)
            .interact()?
    } else {
        false
    };

    let answer_set = AnswerSet {
        author_name,
        author_email,
        vcs_username,
        vendor_namespace,
        package_name,
        package_description,
        class_name,
        php_version,
        laravel_version,
        testing_framework,
    };

    Ok((answer_set, FeatureSet::new(enabled, larastan)))
}

async fn install_dependencies(root: &Path, answers: &AnswerSet, yes: bool) -> Result<()> {
    let confirmed = yes
        || cliclack::confirm("Are you ready to install the dependencies?")
            .initial_value(true)
            .interact()?;
    if !confirmed {
        return Ok(());
    }

    let spinner = cliclack::spinner();
    spinner.start("Installing dependencies...");

    if let Err(e) = runtime::composer_update(root).await {
        spinner.stop("Dependency installation failed");
        return Err(e);
    }

    scaffold::scaffold_docs(root, answers).await?;
    spinner.stop("Dependencies installed");

    Ok(())
}

fn cleanup_installer(yes: bool) -> Result<()> {
    let confirmed = yes
        || cliclack::confirm("Do you want to delete the installer?")
            .initial_value(true)
            .interact()?;
    if confirmed {
        let path = scaffold::remove_installer()?;
        cliclack::log::warning(format!("The installer has been deleted ({})", path.display()))?;
    }
    Ok(())
}

async fn cleanup_stubs(root: &Path, yes: bool) -> Result<()> {
    if !root.join(scaffold::STUBS_DIR).exists() {
        return Ok(());
    }

    let confirmed = yes
        || cliclack::confirm("Do you want to delete the stubs?")
            .initial_value(true)
            .interact()?;
    if confirmed {
        let removed = scaffold::remove_stubs(root).await?;
        cliclack::log::warning(format!(
            "The stubs folder has been deleted ({} files)",
            removed
        ))?;
    }
    Ok(())
}
