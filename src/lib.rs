//! Core of a thin editor plugin that retrieves version-control diffs for
//! selected files and forwards them, wrapped in a localized prompt, to an
//! external chat assistant.
//!
//! The host (editor bridge, CLI, tests) supplies the collaborators — backend
//! selection, notifications, chat delivery — through the trait seams in
//! [`application::review::orchestrator`] and [`infra::vcs`].

pub mod application;
pub mod domain;
pub mod infra;
pub mod prompts;
