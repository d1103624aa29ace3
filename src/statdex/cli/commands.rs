//! # CLI Dispatch
//!
//! Parses arguments, builds the [`StatdexApi`] and turns each `CmdResult`
//! into terminal output. Tables and command output go to stdout; load
//! warnings go to stdout too, except in `--json` mode where stdout carries
//! only the JSON document.

use super::browse;
use super::render::{render_config, render_messages, render_table};
use super::setup::{Cli, Commands, ListArgs};
use clap::Parser;
use console::Term;
use directories::ProjectDirs;
use statdex::api::{CmdMessage, ConfigAction, StatdexApi};
use statdex::commands::paginate::{PageSize, PageState};
use statdex::config::TableConfig;
use statdex::error::Result;
use statdex::store::fs::FileSource;
use statdex::store::Dataset;
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "STATDEX_LOG";
const HOME_ENV: &str = "STATDEX_HOME";

struct AppContext {
    api: StatdexApi,
    config: TableConfig,
    use_color: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let use_color = !cli.no_color && Term::stdout().features().colors_supported();
    let config_dir = config_dir();
    debug!(config_dir = %config_dir.display(), "resolved config directory");

    match cli.command {
        // Config never needs the record collection.
        Some(Commands::Config { key, value }) => {
            let api = StatdexApi::from_dataset(Dataset::default(), config_dir);
            handle_config(&api, key, value, use_color)
        }
        Some(Commands::List(args)) => {
            handle_list(&init_context(cli.data, config_dir, use_color), args)
        }
        Some(Commands::Browse { page_size }) => {
            handle_browse(&init_context(cli.data, config_dir, use_color), page_size)
        }
        None => handle_list(
            &init_context(cli.data, config_dir, use_color),
            ListArgs::default(),
        ),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A second init (e.g. from tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn config_dir() -> PathBuf {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return PathBuf::from(home);
    }
    ProjectDirs::from("com", "statdex", "statdex")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".statdex"))
}

fn init_context(data: Option<PathBuf>, config_dir: PathBuf, use_color: bool) -> AppContext {
    let config = TableConfig::load(&config_dir).unwrap_or_else(|e| {
        warn!(error = %e, "unreadable config, using defaults");
        TableConfig::default()
    });

    let data_file = data.unwrap_or_else(|| config.data_file());
    let api = StatdexApi::open(&FileSource::new(data_file), config_dir);

    AppContext {
        api,
        config,
        use_color,
    }
}

fn handle_list(ctx: &AppContext, args: ListArgs) -> Result<()> {
    let page = PageState {
        page_index: args.page_index(),
        page_size: args.page_size.unwrap_or(ctx.config.page_size),
    };
    let result = ctx.api.query_input(&args.search, &args.min_power, page);

    let mut messages = ctx.api.load_messages();
    messages.extend(result.messages);

    if args.json {
        if let Some(view) = &result.table {
            println!("{}", serde_json::to_string_pretty(view)?);
        }
        eprint!("{}", render_messages(&messages, false));
        return Ok(());
    }

    print_messages(&messages, ctx.use_color);
    if let Some(view) = &result.table {
        print!("{}", render_table(view, ctx.use_color));
    }
    Ok(())
}

fn handle_browse(ctx: &AppContext, page_size: Option<PageSize>) -> Result<()> {
    print_messages(&ctx.api.load_messages(), ctx.use_color);

    let mut session = ctx
        .api
        .session(page_size.unwrap_or(ctx.config.page_size));
    browse::run_stdio(&mut session, ctx.use_color)
}

fn handle_config(
    api: &StatdexApi,
    key: Option<String>,
    value: Option<String>,
    use_color: bool,
) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = action == ConfigAction::ShowAll;

    let result = api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config, use_color));
        }
    }
    print_messages(&result.messages, use_color);
    Ok(())
}

fn print_messages(messages: &[CmdMessage], use_color: bool) {
    print!("{}", render_messages(messages, use_color));
}
