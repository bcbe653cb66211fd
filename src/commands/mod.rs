//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*` and `hub`.
//! - Keep behavior and output schema stable.

pub mod runtime;

pub use runtime::handle_commands;
