//! Application layer (use-cases, policies).
//!
//! Orchestrates domain logic over the collaborator trait seams without
//! depending on a concrete host, UI or storage.

pub mod review;
