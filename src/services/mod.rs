//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `lister.rs` — candidate selection: language/ledger filters + classify loop.
//! - `ledger.rs` — processed-models ledger load/update/save.
//! - `settings.rs` — config file + environment overrides.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod ledger;
pub mod lister;
pub mod output;
pub mod settings;
