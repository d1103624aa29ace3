//! Named styles for terminal output.
//!
//! Templates refer to styles by semantic name (`header`, `stat`, `muted`...)
//! through the `style` filter; the actual colors live only here.

use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Prepended to text whose style name is not registered, to catch template typos.
pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

pub mod names {
    pub const HEADER: &str = "header";
    pub const RULE: &str = "rule";
    pub const LABEL: &str = "label";
    pub const STAT: &str = "stat";
    pub const MUTED: &str = "muted";
    pub const ID: &str = "id";
    pub const NAME: &str = "name";
    pub const TYPES: &str = "types";
    pub const NUMBER: &str = "number";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
}

pub static STATDEX_THEME: Lazy<HashMap<&'static str, Style>> = Lazy::new(|| {
    HashMap::from([
        (names::HEADER, Style::new().bold()),
        (names::RULE, Style::new().color256(244)),
        (names::LABEL, Style::new().color256(246)),
        (names::STAT, Style::new().bold().cyan()),
        (names::MUTED, Style::new().dim().italic()),
        (names::ID, Style::new().color256(244)),
        (names::NAME, Style::new().bold()),
        (names::TYPES, Style::new().yellow()),
        (names::NUMBER, Style::new()),
        (names::INFO, Style::new().dim()),
        (names::SUCCESS, Style::new().green()),
        (names::WARNING, Style::new().yellow()),
        (names::ERROR, Style::new().red()),
    ])
});

/// Applies a named style. Plain mode keeps the text but still flags unknown names.
pub fn apply(name: &str, text: &str, use_color: bool) -> String {
    match STATDEX_THEME.get(name) {
        Some(style) if use_color => style.clone().force_styling(true).apply_to(text).to_string(),
        Some(_) => text.to_string(),
        None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
    }
}
