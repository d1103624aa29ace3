//! Output templates.
//!
//! Templates are minijinja files kept next to this module and embedded at
//! compile time. The environment runs with `trim_blocks` and `lstrip_blocks`,
//! so a line holding only a block tag produces no output. A line that ends in
//! a block tag loses its newline, so such lines are followed by a blank one.

pub const TABLE_TEMPLATE: &str = include_str!("templates/table.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const CONFIG_TEMPLATE: &str = include_str!("templates/config.tmp");
