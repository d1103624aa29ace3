//! # Rendering Module
//!
//! Layout math (column widths, centering, truncation) stays in Rust because
//! it needs Unicode-aware widths. Templates decide structure and which named
//! style each piece gets.

use super::styles::{self, names};
use super::templates::{CONFIG_TEMPLATE, MESSAGES_TEMPLATE, TABLE_TEMPLATE};
use minijinja::{Environment, Error, Value};
use serde::Serialize;
use statdex::api::{CmdMessage, MessageLevel, TableView};
use statdex::config::{TableConfig, CONFIG_KEYS};
use statdex::model::Record;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const COLUMNS: [&str; 9] = [
    "ID",
    "Name",
    "Type",
    "Health",
    "Attack",
    "Defense",
    "Special Attack",
    "Special Defense",
    "Speed",
];

/// Terminal lines per table row; padding rows use the same height.
pub const ROW_HEIGHT: usize = 1;
const MAX_TEXT_WIDTH: usize = 24;
const COLUMN_GAP: &str = "  ";
const EMPTY_STAT: &str = "-";
const EMPTY_TABLE_MESSAGE: &str = "No records match.";
const PREV_MARKER: &str = "‹";
const NEXT_MARKER: &str = "›";

#[derive(Serialize)]
struct CellData {
    text: String,
    style: &'static str,
}

#[derive(Serialize)]
struct TableData {
    min_power: String,
    max_power: String,
    stat_style: &'static str,
    header: Vec<String>,
    rule: String,
    rows: Vec<Vec<CellData>>,
    empty: bool,
    empty_message: &'static str,
    padding_lines: usize,
    gap: &'static str,
    page_size: String,
    range_label: String,
    pages_label: String,
    prev_marker: &'static str,
    next_marker: &'static str,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Serialize)]
struct ConfigEntry {
    key: &'static str,
    value: String,
}

#[derive(Serialize)]
struct ConfigData {
    entries: Vec<ConfigEntry>,
}

fn render_template<T: Serialize>(
    template: &str,
    data: &T,
    use_color: bool,
) -> Result<String, Error> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_keep_trailing_newline(true);
    env.add_filter("style", move |value: Value, name: String| -> String {
        styles::apply(&name, &value.to_string(), use_color)
    });
    env.add_template("_inline", template)?;
    env.get_template("_inline")?.render(data)
}

/// Renders the power summary, the table, padding rows and the pager footer.
pub fn render_table(view: &TableView, use_color: bool) -> String {
    let cells: Vec<[String; 9]> = view.rows.iter().map(row_cells).collect();

    let mut widths = COLUMNS.map(|c| c.width());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let header = COLUMNS
        .iter()
        .zip(widths)
        .map(|(title, w)| center(title, w))
        .collect();

    let rows = cells
        .iter()
        .map(|row| {
            row.iter()
                .zip(widths)
                .enumerate()
                .map(|(col, (text, w))| CellData {
                    text: center(text, w),
                    style: column_style(col),
                })
                .collect()
        })
        .collect();

    let total_width = widths.iter().sum::<usize>() + COLUMN_GAP.len() * (COLUMNS.len() - 1);

    let (min_power, max_power, stat_style) = match view.power_range {
        Some(range) => (range.min.to_string(), range.max.to_string(), names::STAT),
        None => (EMPTY_STAT.to_string(), EMPTY_STAT.to_string(), names::MUTED),
    };

    let data = TableData {
        min_power,
        max_power,
        stat_style,
        header,
        rule: "─".repeat(total_width),
        rows,
        empty: view.rows.is_empty(),
        empty_message: EMPTY_TABLE_MESSAGE,
        padding_lines: view.empty_row_count * ROW_HEIGHT,
        gap: COLUMN_GAP,
        page_size: view.page_size.to_string(),
        range_label: range_label(view),
        pages_label: pages_label(view),
        prev_marker: nav_marker(view.has_prev(), PREV_MARKER),
        next_marker: nav_marker(view.has_next(), NEXT_MARKER),
    };

    render_template(TABLE_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

fn row_cells(record: &Record) -> [String; 9] {
    let [hp, attack, defense, sp_attack, sp_defense, speed] = record.stats();
    [
        record.id.to_string(),
        truncate_to_width(&record.name, MAX_TEXT_WIDTH),
        truncate_to_width(&record.type_label(), MAX_TEXT_WIDTH),
        hp.to_string(),
        attack.to_string(),
        defense.to_string(),
        sp_attack.to_string(),
        sp_defense.to_string(),
        speed.to_string(),
    ]
}

fn column_style(col: usize) -> &'static str {
    match col {
        0 => names::ID,
        1 => names::NAME,
        2 => names::TYPES,
        _ => names::NUMBER,
    }
}

/// `"6-10 of 12"`, as a pager caption.
fn range_label(view: &TableView) -> String {
    format!("{}-{} of {}", view.first_row, view.last_row, view.total_filtered)
}

fn pages_label(view: &TableView) -> String {
    if view.page_count == 0 {
        "No pages".to_string()
    } else {
        format!("Page {} of {}", view.page_index + 1, view.page_count)
    }
}

/// Shows `marker` when that direction can be navigated, a blank otherwise.
fn nav_marker(available: bool, marker: &'static str) -> &'static str {
    if available {
        marker
    } else {
        " "
    }
}

fn center(text: &str, width: usize) -> String {
    let slack = width.saturating_sub(text.width());
    let left = slack / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(slack - left))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

pub fn render_messages(messages: &[CmdMessage], use_color: bool) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let data = MessagesData {
        messages: messages
            .iter()
            .map(|msg| MessageData {
                content: msg.content.clone(),
                style: match msg.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                    MessageLevel::Error => names::ERROR,
                },
            })
            .collect(),
    };

    render_template(MESSAGES_TEMPLATE, &data, use_color).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

pub fn render_config(config: &TableConfig, use_color: bool) -> String {
    let data = ConfigData {
        entries: CONFIG_KEYS
            .iter()
            .map(|&key| ConfigEntry {
                key,
                value: config.get(key).unwrap_or_default(),
            })
            .collect(),
    };
    render_template(CONFIG_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}
