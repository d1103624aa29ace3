//! # Command Layer
//!
//! Pure logic. The table pipeline stages take borrowed records and plain
//! values and return plain values; none of them touch the filesystem or the
//! terminal. `config` is the one command that does I/O, against the config
//! directory only.
//!
//! - [`power`]: derived power metric
//! - [`filter`]: name + minimum-power predicates
//! - [`paginate`]: visible window, empty-row padding, page counts
//! - [`summarize`]: min/max power of the visible window
//! - [`query`]: the four stages composed into a [`query::TableView`]

use crate::config::TableConfig;
use query::TableView;

pub mod config;
pub mod filter;
pub mod paginate;
pub mod power;
pub mod query;
pub mod summarize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub table: Option<TableView>,
    pub config: Option<TableConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_table(mut self, table: TableView) -> Self {
        self.table = Some(table);
        self
    }

    pub fn with_config(mut self, config: TableConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
