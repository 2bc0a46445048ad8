//! Per-file diff resolution and review orchestration.

pub mod orchestrator;
pub mod resolver;
