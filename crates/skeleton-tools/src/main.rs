//! skeleton-tools - Interactive configurator for a Laravel package skeleton

use anyhow::Result;
use clap::{Parser, Subcommand};
use skeleton_core::InitArgs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "skeleton-tools")]
#[command(about = "CLI for configuring a Laravel package skeleton")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configure the skeleton in the current (or given) directory
    Init(CliInitArgs),
}

#[derive(Parser, Debug)]
pub struct CliInitArgs {
    /// Skeleton directory to configure (defaults to the current directory)
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Auto-confirm all confirmations (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,

    /// Skip the composer install step
    #[arg(long = "skip-install")]
    pub skip_install: bool,

    /// Skip the git/php/composer tool check
    #[arg(long = "skip-tool-check")]
    pub skip_tool_check: bool,
}

impl From<CliInitArgs> for InitArgs {
    fn from(args: CliInitArgs) -> Self {
        InitArgs {
            directory: args.directory,
            yes: args.yes,
            skip_install: args.skip_install,
            skip_tool_check: args.skip_tool_check,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();

    let init_args = match args.command {
        Some(Command::Init(init_args)) => init_args.into(),
        // No subcommand provided, default to interactive init
        None => InitArgs::default(),
    };

    let result = skeleton_core::run(init_args).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
