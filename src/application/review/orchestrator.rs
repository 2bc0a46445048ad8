//! Review orchestration: drives per-file resolution, applies the cumulative
//! size budget and hands the assembled prompt to the chat sink.

use super::resolver;
use crate::domain::{Confirmation, FileChange};
use crate::infra::vcs::BackendSelector;
use crate::prompts;
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;

/// Cumulative prompt budget, counted in characters.
pub const MAX_PROMPT_CHARS: usize = 50_000;

/// Transient notices shown to the user; the warning variant presents two
/// labeled choices and suspends the run until one is picked.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn info(&self, message: &str);

    async fn warn_choice(
        &self,
        message: &str,
        accept_label: &str,
        cancel_label: &str,
    ) -> Confirmation;
}

/// Delivers one assembled prompt to the external assistant surface.
#[async_trait]
pub trait ChatSink: Send + Sync {
    async fn deliver(&self, prompt: String) -> Result<()>;
}

/// Configuration and environment snapshot resolved by the host before the
/// run starts, so the orchestrator never reads ambient state itself.
#[derive(Debug, Clone)]
pub struct ReviewContext {
    /// Configured prompt language: `auto` or an explicit code.
    pub configured_language: String,
    /// Host UI locale tag, consulted only when the language is `auto`.
    pub locale_tag: String,
    /// Per-language custom prompt overrides.
    pub custom_prompts: HashMap<String, String>,
}

pub struct ReviewOrchestrator<'a> {
    notifications: &'a dyn NotificationSink,
    chat: &'a dyn ChatSink,
    context: ReviewContext,
}

impl<'a> ReviewOrchestrator<'a> {
    pub fn new(
        notifications: &'a dyn NotificationSink,
        chat: &'a dyn ChatSink,
        context: ReviewContext,
    ) -> Self {
        Self {
            notifications,
            chat,
            context,
        }
    }

    /// Run one review over the selected paths, in selection order.
    ///
    /// Delivers exactly one prompt to the chat sink, or nothing when no diff
    /// was accepted or the user cancelled the oversized-file dialog.
    pub async fn run(&self, selector: &dyn BackendSelector, selected: &[PathBuf]) -> Result<()> {
        let mut accepted: Vec<(String, String)> = Vec::new();
        let mut total_chars = 0usize;
        let mut skipped = 0usize;

        for path in selected {
            let display = path.to_string_lossy();

            let Some(backend) = selector.select(path).await else {
                // No repository owns the path; same outcome as "no change".
                self.notifications
                    .info(&format!("No pending change detected for {display}."))
                    .await;
                continue;
            };

            let change = FileChange {
                path: path.clone(),
                relative_label: backend.relative_label(path),
            };

            let diff = match resolver::resolve(backend.as_ref(), &change).await {
                Ok(Some(diff)) => diff,
                Ok(None) => {
                    self.notifications
                        .info(&format!(
                            "No pending change detected for {}.",
                            change.relative_label
                        ))
                        .await;
                    continue;
                }
                Err(err) => {
                    log::warn!("diff resolution failed: {err}");
                    self.notifications
                        .info(&format!(
                            "Could not retrieve a diff for {}.",
                            change.relative_label
                        ))
                        .await;
                    skipped += 1;
                    continue;
                }
            };

            let diff_chars = diff.chars().count();
            if total_chars + diff_chars <= MAX_PROMPT_CHARS {
                total_chars += diff_chars;
                accepted.push((change.relative_label, diff));
                continue;
            }

            if accepted.is_empty() {
                // The very first accepted diff alone would blow the budget;
                // offer to truncate it or abandon the whole run.
                let choice = self
                    .notifications
                    .warn_choice(
                        &format!(
                            "The diff for {} exceeds the {MAX_PROMPT_CHARS} character limit.",
                            change.relative_label
                        ),
                        "Truncate and send",
                        "Cancel",
                    )
                    .await;

                match choice {
                    Confirmation::Accepted => {
                        accepted
                            .push((change.relative_label, truncate_chars(&diff, MAX_PROMPT_CHARS)));
                        skipped += selected.len() - 1;
                    }
                    Confirmation::Cancelled => return Ok(()),
                }
            } else {
                // Later overflow: drop this file and everything after it.
                skipped += selected.len() - accepted.len();
            }
            break;
        }

        if accepted.is_empty() {
            return Ok(());
        }

        let language =
            prompts::resolve_language(&self.context.configured_language, &self.context.locale_tag);
        let custom_prompt = self.context.custom_prompts.get(language).map(String::as_str);
        let prompt = prompts::assemble(&accepted, skipped, language, custom_prompt);

        self.chat.deliver(prompt).await
    }
}

/// First `limit` characters of `text`, cut on a char boundary.
fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((index, _)) => text[..index].to_string(),
        None => text.to_string(),
    }
}
