use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use dialoguer::Confirm;

use crate::config::{Config, ConfigArgs};
use crate::export::ExportFormat;
use crate::filters::{parse_date_input, parse_record_date};
use crate::logging;
use crate::models::SessionId;
use crate::parsers::collect_import_files;
use crate::state::AppState;
use crate::tui::run_interactive;
use crate::utils::{format_age, format_path_with_tilde, format_upload_date, sanitize_cell};
use crate::view::FilteredView;

#[derive(Parser)]
#[command(name = "delivery-ledger")]
#[command(version = "0.1.0")]
#[command(about = "Import, filter and export service-delivery records", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Inclusive date range, both ends required
#[derive(Args, Debug, Clone)]
pub struct RangeArgs {
    /// First day to include (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// Last day to include (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,
}

impl RangeArgs {
    fn dates(&self) -> Result<(Option<NaiveDate>, Option<NaiveDate>)> {
        let from = self.from.as_deref().map(parse_date_input).transpose()?;
        let to = self.to.as_deref().map(parse_date_input).transpose()?;
        Ok((from, to))
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Import .csv / .json files (or directories of them), one upload session per file
    Import {
        paths: Vec<PathBuf>,

        /// Descend into subdirectories
        #[arg(short, long)]
        recursive: bool,
    },
    /// List upload sessions
    Sessions,
    /// Delete an upload session and all of its records
    Delete {
        id: SessionId,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Show one page of the records dated within a range
    Filter {
        #[command(flatten)]
        range: RangeArgs,

        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Write filtered records to filtered_data.json / filtered_data.csv
    Export {
        #[command(flatten)]
        range: RangeArgs,

        #[arg(long, value_enum)]
        format: ExportFormat,

        /// Page used when exporting with --scope page
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Page through filtered records interactively
    Browse {
        #[command(flatten)]
        range: RangeArgs,
    },
    /// Show statistics about the stored sessions
    Stats,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let Some(command) = cli.command else {
        println!("Use --help for usage information");
        return Ok(());
    };

    let config = Config::from_args(&cli.config)?;
    let mut state = AppState::open(config.upload_store(), config.page_size).with_context(|| {
        format!("Failed to load sessions from {}", format_path_with_tilde(&config.store_path))
    })?;

    match command {
        Commands::Import { paths, recursive } => import(&mut state, &paths, recursive),
        Commands::Sessions => {
            list_sessions(&state);
            Ok(())
        }
        Commands::Delete { id, yes } => delete(&mut state, id, yes),
        Commands::Filter { range, page } => {
            let (from, to) = range.dates()?;
            state.apply_filter(from, to)?;
            state.select_page(page)?;
            if let Some(view) = state.view() {
                print_page(view);
            }
            Ok(())
        }
        Commands::Export { range, format, page } => {
            let (from, to) = range.dates()?;
            state.apply_filter(from, to)?;
            state.select_page(page)?;

            let path = state.export(format, config.export_scope, &config.export_dir)?;
            println!("Exported to {}", format_path_with_tilde(&path));
            Ok(())
        }
        Commands::Browse { range } => {
            let (from, to) = range.dates()?;
            state.apply_filter(from, to)?;
            match state.into_view() {
                Some(view) => run_interactive(view, config.export_dir, config.export_scope),
                None => Ok(()),
            }
        }
        Commands::Stats => {
            show_stats(&state);
            Ok(())
        }
    }
}

fn import(state: &mut AppState, inputs: &[PathBuf], recursive: bool) -> Result<()> {
    let files = collect_import_files(inputs, recursive)?;
    let results = state.import_files(&files);

    let mut failed = 0;
    for result in &results {
        let name = format_path_with_tilde(&result.path);
        match &result.outcome {
            Ok(imported) => {
                println!(
                    "Imported {} records from {} (session {})",
                    imported.records, name, imported.session_id
                );
                for discard in &imported.discarded {
                    println!("  skipped line {}: {}", discard.position, discard.reason);
                }
            }
            Err(e) => {
                failed += 1;
                eprintln!("Failed to import {}: {}", name, e);
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} files failed to import", failed, results.len());
    }
    Ok(())
}

fn list_sessions(state: &AppState) {
    let sessions = state.sessions();
    if sessions.is_empty() {
        println!("No upload sessions.");
        return;
    }

    println!("{:<15} {:<10} {:<8} {:>7}  {}", "ID", "Date", "Time", "Records", "Age");
    for session in sessions {
        let (date, time) = format_upload_date(&session.upload_date);
        println!(
            "{:<15} {:<10} {:<8} {:>7}  {}",
            session.id,
            date,
            time,
            session.entries.len(),
            format_age(&session.upload_date)
        );
    }
}

fn delete(state: &mut AppState, id: SessionId, yes: bool) -> Result<()> {
    if state.snapshot().find(id).is_none() {
        bail!("No upload session with id {}", id);
    }

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(
                "Are you sure you want to delete this entire upload session? This cannot be undone.",
            )
            .default(false)
            .interact()
            .context("Confirmation prompt failed (use --yes to skip it)")?;
        if !confirmed {
            println!("Deletion cancelled.");
            return Ok(());
        }
    }

    state.delete_session(id)?;
    println!("Deleted upload session {}", id);
    Ok(())
}

fn print_page(view: &FilteredView) {
    if view.is_empty() {
        println!("No filtered data available.");
    } else {
        for record in view.page_records() {
            let cells = record.values().map(sanitize_cell);
            println!("{}", cells.join(" | "));
        }

        println!();
        println!("{} records", view.len());
        if view.total_pages() > 1 {
            println!("Page {} of {}", view.current_page(), view.total_pages());
        }
    }

    if !view.discarded().is_empty() {
        eprintln!("Skipped {} records with an unparseable Date", view.discarded().len());
    }
}

fn show_stats(state: &AppState) {
    let store = state.snapshot();
    let dates: Vec<_> = store
        .sessions
        .iter()
        .flat_map(|s| &s.entries)
        .filter_map(|r| parse_record_date(&r.date))
        .collect();

    println!("Delivery Ledger Statistics");
    println!("==========================");
    println!("Upload sessions: {}", store.sessions.len());
    println!("Total records: {}", store.record_count());
    if let (Some(earliest), Some(latest)) = (dates.iter().min(), dates.iter().max()) {
        println!("Earliest record: {}", earliest.format("%Y-%m-%d"));
        println!("Latest record: {}", latest.format("%Y-%m-%d"));
    }
    println!();
    println!("Store file: {}", format_path_with_tilde(state.store_path()));
}
