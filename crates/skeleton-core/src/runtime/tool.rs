//! Generic tool management for external CLI tools
//!
//! Provides a reusable abstraction for checking and installing the tools
//! the pipeline shells out to - composer today, anything installable via a
//! piped install script tomorrow.

use anyhow::{Context, Result};
use colored::Colorize;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command as TokioCommand;
use tokio::time::timeout;

/// Timeout for installation (2 minutes)
const INSTALL_TIMEOUT: Duration = Duration::from_secs(120);

/// Configuration for an external CLI tool
#[derive(Debug, Clone)]
pub struct ToolConfig {
    /// Name of the tool binary (e.g., "composer")
    pub name: &'static str,
    /// Display name for user-facing messages
    pub display_name: &'static str,
    /// URL to the install script
    pub install_script_url: &'static str,
    /// Interpreter the install script is piped into
    pub install_interpreter: &'static str,
    /// URL to the documentation
    pub docs_url: &'static str,
}

/// Manager for checking and installing external CLI tools
pub struct ToolManager {
    config: ToolConfig,
}

impl ToolManager {
    /// Create a new tool manager with the given configuration
    pub fn new(config: ToolConfig) -> Self {
        Self { config }
    }

    /// Get the tool configuration
    pub fn config(&self) -> &ToolConfig {
        &self.config
    }

    /// Get the install command string
    pub fn install_command(&self) -> String {
        format!(
            "curl -fsSL {} | {}",
            self.config.install_script_url, self.config.install_interpreter
        )
    }

    /// Check if the tool is installed and available in PATH
    pub fn is_installed(&self) -> bool {
        std::process::Command::new("which")
            .arg(self.config.name)
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
    }

    /// Get the installed tool version (if available)
    pub fn get_version(&self) -> Option<String> {
        std::process::Command::new(self.config.name)
            .arg("--version")
            .output()
            .ok()
            .and_then(|output| {
                if output.status.success() {
                    String::from_utf8(output.stdout)
                        .ok()
                        .map(|s| s.trim().to_string())
                } else {
                    None
                }
            })
    }

    /// Install the tool using its official install script, echoing the
    /// installer's output as it arrives.
    pub async fn install(&self) -> Result<()> {
        let cmd = self.install_command();
        println!();
        println!("{} {}", "Running:".dimmed(), cmd.yellow());
        println!();

        let mut child = TokioCommand::new("sh")
            .arg("-c")
            .arg(&cmd)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        let (Some(stdout), Some(stderr)) = (child.stdout.take(), child.stderr.take()) else {
            anyhow::bail!("Failed to capture installer output");
        };

        // Echo both streams line by line, indented; stderr in yellow
        let echo_stdout = tokio::spawn(async move {
            let mut lines = BufReader::new(stdout).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                println!("  {}", line);
            }
        });
        let echo_stderr = tokio::spawn(async move {
            let mut lines = BufReader::new(stderr).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                eprintln!("  {}", line.yellow());
            }
        });

        let status = match timeout(INSTALL_TIMEOUT, child.wait()).await {
            Ok(status) => status.context("Failed to wait for installer")?,
            Err(_) => {
                let _ = child.kill().await;
                echo_stdout.abort();
                echo_stderr.abort();
                println!();
                anyhow::bail!(
                    "Installation timed out after {} seconds. \
                     Try again later or install manually:\n{}",
                    INSTALL_TIMEOUT.as_secs(),
                    cmd
                );
            }
        };

        let _ = echo_stdout.await;
        let _ = echo_stderr.await;
        println!();

        if status.success() {
            Ok(())
        } else {
            anyhow::bail!(
                "Installation failed with exit code {}. Try installing manually: {}",
                status.code().unwrap_or(-1),
                cmd
            );
        }
    }

    /// Open the tool's documentation in the default browser
    pub fn open_docs(&self) -> Result<()> {
        println!(
            "{}",
            format!(
                "Opening {} documentation in your browser...",
                self.config.display_name
            )
            .cyan()
        );
        open::that(self.config.docs_url)?;
        Ok(())
    }
}

/// Pre-configured tool manager for composer
pub fn composer_tool() -> ToolManager {
    ToolManager::new(ToolConfig {
        name: "composer",
        display_name: "Composer",
        install_script_url: "https://getcomposer.org/installer",
        install_interpreter: "php",
        docs_url: "https://getcomposer.org/download/",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composer_install_command() {
        let tool = composer_tool();
        assert_eq!(
            tool.install_command(),
            "curl -fsSL https://getcomposer.org/installer | php"
        );
    }

    #[test]
    fn test_missing_tool_is_not_installed() {
        let tool = ToolManager::new(ToolConfig {
            name: "definitely-not-a-real-binary",
            display_name: "Nothing",
            install_script_url: "https://example.com/install",
            install_interpreter: "sh",
            docs_url: "https://example.com/docs",
        });
        assert!(!tool.is_installed());
        assert!(tool.get_version().is_none());
    }
}
