//! Kaomoji dance party (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof so the binary, the
//! integration tests and the benchmarks share a single import path:
//! `kaomoji_dance::{core, input, term, types}`.

pub mod config;
pub mod logging;

pub use kaomoji_dance_core as core;
pub use kaomoji_dance_input as input;
pub use kaomoji_dance_term as term;
pub use kaomoji_dance_types as types;

pub use config::AppConfig;
