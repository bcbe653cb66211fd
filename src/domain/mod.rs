//! Shared data model layer (structs/tables only).
//!
//! ## Purpose
//! - Keep DTO and report structs in one place.
//! - Hold the static classification tables.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — hub DTOs, ledger records, report/output structs.
//! - `tasks.rs` — architecture-suffix → task table + classifier.
//! - `languages.rs` — known hub language tags for the English filter.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/network side effects.

pub mod languages;
pub mod models;
pub mod tasks;
