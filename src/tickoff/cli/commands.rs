//! # CLI Layer
//!
//! One client of the tickoff library. This is the only place that knows about
//! stdout, stderr, exit codes, the data directory and log setup.
//!
//! - `run()`: parses arguments and dispatches (called by `main.rs`)
//! - `init_context()`: resolves the data directory, config and list file
//! - `handle_*()`: load the list, call the API, print, save

use super::demo;
use super::print::{print_counts, print_json, print_messages, print_todos};
use super::setup::{init_logging, Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;
use tickoff::api::{CmdResult, ListFilter, TickoffApi};
use tickoff::config::TickoffConfig;
use tickoff::error::{Result, TickoffError};
use tickoff::store::fs::FileStore;
use tracing::debug;

const HOME_ENV: &str = "TICKOFF_HOME";

struct AppContext {
    file: FileStore,
    json: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Demo) => {
            apply_color(cli.no_color, true);
            demo::run();
            Ok(())
        }
        command => {
            let ctx = init_context(cli.file, cli.no_color, cli.json)?;
            dispatch(&ctx, command)
        }
    }
}

fn dispatch(ctx: &AppContext, command: Option<Commands>) -> Result<()> {
    match command {
        Some(Commands::Add { task }) => handle_add(ctx, task.join(" ")),
        Some(Commands::List { pending, completed }) => {
            let filter = if pending {
                ListFilter::Pending
            } else if completed {
                ListFilter::Completed
            } else {
                ListFilter::All
            };
            handle_list(ctx, filter)
        }
        Some(Commands::Toggle { selector, task }) => handle_toggle(ctx, selector, task),
        Some(Commands::Remove { selector, task }) => handle_remove(ctx, selector, task),
        Some(Commands::Clear) => handle_clear(ctx),
        Some(Commands::Status) => handle_status(ctx),
        Some(Commands::Demo) | None => handle_list(ctx, ListFilter::All),
    }
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    let proj_dirs = ProjectDirs::from("com", "tickoff", "tickoff")
        .ok_or_else(|| TickoffError::Config("Could not determine data directory".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn init_context(file: Option<PathBuf>, no_color: bool, json: bool) -> Result<AppContext> {
    let data_dir = data_dir()?;
    let config = TickoffConfig::load(&data_dir)?;
    apply_color(no_color, config.color);

    let path = file.unwrap_or_else(|| config.data_path(&data_dir));
    debug!(path = %path.display(), "using todo list");

    Ok(AppContext {
        file: FileStore::new(path),
        json,
    })
}

fn apply_color(no_color_flag: bool, config_color: bool) {
    if no_color_flag || !config_color {
        colored::control::set_override(false);
    }
}

fn load_api(ctx: &AppContext) -> Result<TickoffApi> {
    Ok(TickoffApi::new(ctx.file.load()?))
}

/// Prints the outcome and persists the list unless nothing matched.
fn finish(ctx: &AppContext, api: TickoffApi, result: CmdResult) -> Result<()> {
    if ctx.json {
        print_json(&result)?;
    } else {
        print_messages(&result.messages);
    }
    if !result.not_found {
        ctx.file.save(&api.into_store())?;
    }
    Ok(())
}

fn handle_add(ctx: &AppContext, task: String) -> Result<()> {
    let mut api = load_api(ctx)?;
    let result = api.add(task);
    finish(ctx, api, result)
}

fn handle_toggle(ctx: &AppContext, selector: Vec<String>, by_task: bool) -> Result<()> {
    let mut api = load_api(ctx)?;
    let result = if by_task {
        api.toggle_task(selector.as_slice())?
    } else {
        api.toggle(selector.as_slice())?
    };
    finish(ctx, api, result)
}

fn handle_remove(ctx: &AppContext, selector: Vec<String>, by_task: bool) -> Result<()> {
    let mut api = load_api(ctx)?;
    let result = if by_task {
        api.remove_task(selector.as_slice())?
    } else {
        api.remove(selector.as_slice())?
    };
    finish(ctx, api, result)
}

fn handle_clear(ctx: &AppContext) -> Result<()> {
    let mut api = load_api(ctx)?;
    let result = api.clear_completed();
    finish(ctx, api, result)
}

fn handle_list(ctx: &AppContext, filter: ListFilter) -> Result<()> {
    let api = load_api(ctx)?;
    let result = api.list(filter);
    if ctx.json {
        return print_json(&result);
    }
    print_todos(&result.listed_todos);
    print_messages(&result.messages);
    Ok(())
}

fn handle_status(ctx: &AppContext) -> Result<()> {
    let api = load_api(ctx)?;
    let result = api.status();
    if ctx.json {
        return print_json(&result);
    }
    if let Some(counts) = &result.counts {
        print_counts(counts);
    }
    Ok(())
}
