use clap::{Args, Parser, Subcommand};
use statdex::commands::paginate::PageSize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "statdex", bin_name = "statdex", version)]
#[command(about = "Search, filter and page through creature stat records", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Record file to load (overrides the configured data-file)
    #[arg(short, long, global = true, value_name = "PATH", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print one page of the table
    #[command(alias = "ls", display_order = 1)]
    List(ListArgs),

    /// Browse the table interactively, one command per line on stdin
    #[command(display_order = 2)]
    Browse {
        /// Rows per page: a positive number or "all"
        #[arg(long, value_name = "N|all", allow_hyphen_values = true)]
        page_size: Option<PageSize>,
    },

    /// Get or set configuration
    #[command(display_order = 3)]
    Config {
        /// Configuration key (data-file or page-size)
        key: Option<String>,
        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Args, Debug, Default, PartialEq, Eq)]
pub struct ListArgs {
    /// Case-insensitive substring of the name
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Minimum power; non-numeric input shows all powers
    #[arg(short, long, default_value = "", allow_hyphen_values = true)]
    pub min_power: String,

    /// Page to show, starting at 1 (clamped to the last page)
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page: a positive number or "all"
    #[arg(long, value_name = "N|all", allow_hyphen_values = true)]
    pub page_size: Option<PageSize>,

    /// Print the page as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    /// 0-based page index; page 0 is read as the first page.
    pub fn page_index(&self) -> usize {
        self.page.saturating_sub(1)
    }
}
