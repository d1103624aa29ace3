//! # CLI Layer
//!
//! One possible UI client for statdex. This is the only place that knows
//! about stdin/stdout/stderr, argument parsing and colors.
//!
//! - `setup`: clap definitions
//! - `commands`: `run()` and the per-command handlers
//! - `browse`: the line-driven interactive session
//! - `render`: table, message and config output via templates
//! - `styles`, `templates`: the theme and the embedded templates

mod browse;
mod commands;
mod render;
mod setup;
mod styles;
mod templates;

pub use commands::run;
