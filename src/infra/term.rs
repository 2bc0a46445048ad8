//! Terminal implementations of the notification and chat-delivery seams,
//! used by the CLI harness in place of an editor's message surfaces.

use crate::application::review::orchestrator::{ChatSink, NotificationSink};
use crate::domain::Confirmation;
use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Notices on stderr; the two-choice warning reads a line from stdin.
pub struct TermNotifier;

#[async_trait]
impl NotificationSink for TermNotifier {
    async fn info(&self, message: &str) {
        eprintln!("{message}");
    }

    async fn warn_choice(
        &self,
        message: &str,
        accept_label: &str,
        cancel_label: &str,
    ) -> Confirmation {
        eprintln!("{message}");
        eprintln!("  [1] {accept_label}");
        eprintln!("  [2] {cancel_label}");

        let mut line = String::new();
        let mut reader = BufReader::new(tokio::io::stdin());
        if reader.read_line(&mut line).await.is_err() {
            return Confirmation::Cancelled;
        }
        match line.trim() {
            "1" => Confirmation::Accepted,
            _ => Confirmation::Cancelled,
        }
    }
}

/// Where the assembled prompt goes when no chat panel is attached.
pub enum PromptDestination {
    Stdout,
    Clipboard,
}

pub struct PromptDelivery {
    destination: PromptDestination,
}

impl PromptDelivery {
    pub fn new(destination: PromptDestination) -> Self {
        Self { destination }
    }
}

#[async_trait]
impl ChatSink for PromptDelivery {
    async fn deliver(&self, prompt: String) -> Result<()> {
        match self.destination {
            PromptDestination::Stdout => {
                println!("{prompt}");
                Ok(())
            }
            PromptDestination::Clipboard => {
                let mut clipboard =
                    arboard::Clipboard::new().context("Could not open the system clipboard")?;
                clipboard
                    .set_text(prompt)
                    .context("Failed to copy the prompt to the clipboard")?;
                eprintln!("Prompt copied to clipboard.");
                Ok(())
            }
        }
    }
}
