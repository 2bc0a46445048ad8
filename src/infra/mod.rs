//! Infrastructure layer (adapters/implementations).
//!
//! IO-heavy integrations: version-control subprocesses, config storage,
//! locale probing and the terminal stand-ins for the editor's surfaces.

pub mod config;
pub mod locale;
pub mod term;
pub mod vcs;
