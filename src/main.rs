//! CLI harness around the diffsend review core.
//!
//! Stands in for the editor host: selects files from the command line, runs
//! one review orchestration and prints the prompt (or copies it to the
//! clipboard).

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

use diffsend::application::review::orchestrator::{ReviewContext, ReviewOrchestrator};
use diffsend::infra::config::{load_config, save_config};
use diffsend::infra::locale::ui_language_tag;
use diffsend::infra::term::{PromptDelivery, PromptDestination, TermNotifier};
use diffsend::infra::vcs::VcsDetector;

#[derive(Parser, Debug)]
#[command(name = "diffsend")]
#[command(about = "Send file diffs to an AI chat assistant for review", long_about = None)]
struct Args {
    /// Files to review, in the order they should appear in the prompt
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Override the configured prompt language (e.g. `en`, `ja`, `auto`)
    #[arg(short, long)]
    language: Option<String>,

    /// Copy the prompt to the clipboard instead of printing it
    #[arg(long)]
    copy: bool,

    /// Persist the language override to the config file
    #[arg(long, requires = "language")]
    save: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = load_config();
    if let Some(language) = args.language {
        config.language = language;
        if args.save {
            save_config(&config).context("Failed to save config")?;
        }
    }

    let context = ReviewContext {
        configured_language: config.language.clone(),
        locale_tag: ui_language_tag(),
        custom_prompts: config.custom_prompts.clone(),
    };

    let notifier = TermNotifier;
    let delivery = PromptDelivery::new(if args.copy {
        PromptDestination::Clipboard
    } else {
        PromptDestination::Stdout
    });

    let selected: Vec<PathBuf> = args.paths.iter().map(|path| absolutize(path)).collect();

    let orchestrator = ReviewOrchestrator::new(&notifier, &delivery, context);
    orchestrator
        .run(&VcsDetector, &selected)
        .await
        .context("Review run failed")
}

/// Absolute form of a selected path. Deleted files cannot be canonicalized,
/// so this only joins against the working directory.
fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}
