//! Terminal front end for the checklist core.
//!
//! # Responsibility
//! - Open the durable store, apply one command, and wait for its save.
//! - Render the snapshot; never hold checklist state of its own.

mod cli;
mod render;

use checklist_core::{
    default_log_level, flush_logging, init_logging, ChecklistStore, KvChecklistRepository,
    MutationOutcome, SqliteKeyValueStore,
};
use clap::Parser;
use cli::{Cli, Command};
use log::{error, warn};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

const DB_FILE_NAME: &str = "checklist.sqlite3";

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let code = match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=cli_exit module=cli status=error error={err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    };
    // Why: the logger buffers writes and this process exits right after one
    // command, so unflushed load/save failures would never reach the file.
    flush_logging();
    code
}

async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    if let Command::Version = cli.command {
        println!("checklist_core version={}", checklist_core::core_version());
        return Ok(());
    }

    let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);
    std::fs::create_dir_all(&data_dir)?;
    let data_dir = std::fs::canonicalize(&data_dir)?;

    let level = cli
        .log_level
        .unwrap_or_else(|| default_log_level().to_string());
    let log_dir = data_dir.join("logs");
    if let Err(err) = init_logging(&level, &log_dir.to_string_lossy()) {
        eprintln!("warning: logging disabled: {err}");
    }

    let backend = SqliteKeyValueStore::open(data_dir.join(DB_FILE_NAME))?;
    let mut store = ChecklistStore::load(KvChecklistRepository::new(backend)).await;

    let outcome = match cli.command {
        Command::List => None,
        Command::Add { title, notes } => Some(store.add(&title, &notes)),
        Command::Toggle { target } => Some(
            match render::resolve_target(store.snapshot(), &target) {
                Some(id) => store.toggle_done(&id),
                None => MutationOutcome::NotFound,
            },
        ),
        Command::Delete { target } => Some(
            match render::resolve_target(store.snapshot(), &target) {
                Some(id) => store.delete(&id),
                None => MutationOutcome::NotFound,
            },
        ),
        Command::Version => None,
    };

    match outcome {
        Some(MutationOutcome::Unchanged) => println!("Nothing added: title is blank."),
        Some(MutationOutcome::NotFound) => println!("No such item."),
        _ => {}
    }
    println!("{}", render::render_items(store.snapshot()).trim_end());
    if !store.is_empty() {
        println!("{} of {} remaining", store.remaining(), store.len());
    }

    if let Some(stats) = store.shutdown().await {
        if stats.failed > 0 {
            warn!("event=cli_exit module=cli status=degraded failed_saves={}", stats.failed);
            eprintln!("warning: changes could not be saved; see logs in {}", log_dir.display());
        }
    }
    Ok(())
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("checklist")
}
