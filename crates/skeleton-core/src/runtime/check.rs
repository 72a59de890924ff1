//! Detection of the external tools the pipeline leans on
//!
//! All checks are advisory: a missing git only degrades the suggested
//! prompt defaults, and a missing PHP only matters if the install step is
//! accepted. Nothing here hard-fails the run. Composer has its own
//! detect-and-install flow through `tool::composer_tool`.

use std::process::Command;

/// Tool detection result.
#[derive(Debug, Clone)]
pub struct ToolInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

fn check_version(name: &'static str, binary: &str) -> ToolInfo {
    let output = Command::new(binary).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout)
                .lines()
                .next()
                .unwrap_or("")
                .trim()
                .to_string();
            ToolInfo {
                name,
                version: Some(version),
                available: true,
            }
        }
        _ => ToolInfo {
            name,
            version: None,
            available: false,
        },
    }
}

/// Check if git is available.
pub fn check_git() -> ToolInfo {
    check_version("git", "git")
}

/// Check if the PHP CLI is available.
pub fn check_php() -> ToolInfo {
    check_version("PHP", "php")
}

/// Check the advisory tools (git and PHP).
pub fn check_tools() -> Vec<ToolInfo> {
    vec![check_git(), check_php()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_binary_reports_unavailable() {
        let info = check_version("nope", "definitely-not-a-real-binary");
        assert!(!info.available);
        assert!(info.version.is_none());
    }

    #[test]
    fn test_check_tools_covers_the_advisory_collaborators() {
        let tools = check_tools();
        let names: Vec<&str> = tools.iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["git", "PHP"]);
    }
}
