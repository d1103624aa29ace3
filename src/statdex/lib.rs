//! # Statdex Architecture
//!
//! Statdex turns a collection of creature stat records into the exact slice of
//! rows a table shows on one page, together with the min/max power of those
//! rows. It is a library with a CLI client, not the other way around.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders tables, reads browse events    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs, session.rs)                             │
//! │  - Owns the dataset snapshot loaded at startup              │
//! │  - Normalizes inputs (threshold text, page clamping)        │
//! │  - TableSession re-runs the pipeline on every input event   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - power → filter → paginate → summarize                    │
//! │  - Pure functions over borrowed records, no I/O             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store Layer (store/)                                       │
//! │  - RecordSource trait: FileSource, InMemorySource           │
//! │  - Dataset: validated, read-only snapshot                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Pipeline
//!
//! Every recomputation starts from the full record set:
//!
//! 1. [`commands::power`]: `hp + attack + defense + special_attack + special_defense + speed`
//! 2. [`commands::filter`]: case-insensitive name substring AND `power >= min_power`
//! 3. [`commands::paginate`]: the visible window plus empty-row padding for a short last page
//! 4. [`commands::summarize`]: min/max power of the visible rows, `None` when there are none
//!
//! ## Faults
//!
//! Nothing in the pipeline fails. Malformed records are dropped at load time
//! and reported; an unreadable source yields an empty table; a non-numeric
//! threshold means "no minimum".
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`session`]: Event-driven table state for interactive clients
//! - [`commands`]: Pipeline stages and the config command
//! - [`store`]: Record sources and the loaded dataset
//! - [`model`]: The `Record` type
//! - [`config`]: Configuration file handling
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod session;
pub mod store;
