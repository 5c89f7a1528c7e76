// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! svn-inventory: export Subversion file listings to Excel
//!
//! Parses the command line, merges it with the saved settings, runs the
//! export on a background worker and prints its log as it arrives.

use std::io::{IsTerminal, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use svn_inventory::config::{Command, Config};
use svn_inventory::i18n::Catalog;
use svn_inventory::pipeline::RunEvent;
use svn_inventory::settings::Settings;
use svn_inventory::worker::{ExportWorker, RunHandle};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(config).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!(error = %e, "svn-inventory failed");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> Result<bool> {
    config.validate().context("Invalid configuration")?;

    let settings_path = config.settings_path();
    let mut settings = Settings::load(&settings_path).unwrap_or_else(|e| {
        warn!(error = %e, "Ignoring unreadable settings");
        Settings::default()
    });
    let catalog = config.language(&settings).catalog();

    if let Some(Command::History) = config.command {
        print_history(&settings, &catalog);
        return Ok(true);
    }

    let request = config.export_request(&settings);
    let missing = request.missing_fields();
    if !missing.is_empty() {
        eprintln!("{}", catalog.missing_fields(&missing));
        return Ok(false);
    }

    if !config.no_save {
        settings.record_run(&request);
        settings.language = catalog.language();
        if let Err(e) = settings.save(&settings_path) {
            warn!(error = %e, "Could not save settings");
        }
    }

    let worker = ExportWorker::new(config.client()?, catalog);
    let mut handle = worker.start(request)?;
    let ok = follow(&mut handle, &catalog, config.quiet).await;

    match handle.wait().await {
        Ok(summary) => {
            info!(
                entries = summary.entries,
                lines = summary.lines,
                unparsed = summary.unparsed,
                output = %summary.output.display(),
                "Export complete"
            );
        }
        Err(e) if ok.is_none() => eprintln!("{}", e.localized(&catalog)),
        Err(_) => {}
    }

    Ok(ok.unwrap_or(false))
}

/// Print run events until the run ends; returns the `Finished` status
async fn follow(handle: &mut RunHandle, catalog: &Catalog, quiet: bool) -> Option<bool> {
    let show_progress = !quiet && std::io::stderr().is_terminal();
    let cancel = handle.cancel_token();
    let mut interrupted = false;
    let mut progress_shown = false;
    let mut finished = None;

    loop {
        tokio::select! {
            event = handle.next_event() => match event {
                Some(RunEvent::Progress(count)) if show_progress => {
                    eprint!("\r{}", catalog.progress(count));
                    let _ = std::io::stderr().flush();
                    progress_shown = true;
                }
                Some(RunEvent::Progress(_)) => {}
                Some(RunEvent::Log(line)) => {
                    if progress_shown {
                        eprintln!();
                        progress_shown = false;
                    }
                    if !quiet {
                        println!("{line}");
                    }
                }
                Some(RunEvent::Finished { ok, message }) => {
                    if progress_shown {
                        eprintln!();
                        progress_shown = false;
                    }
                    if ok {
                        println!("{message}");
                    } else {
                        eprintln!("{message}");
                    }
                    finished = Some(ok);
                }
                None => break,
            },
            _ = tokio::signal::ctrl_c(), if !interrupted => {
                warn!("Interrupted, cancelling export");
                cancel.cancel();
                interrupted = true;
            }
        }
    }

    finished
}

fn print_history(settings: &Settings, catalog: &Catalog) {
    if settings.recent_urls.is_empty() {
        println!("{}", catalog.no_recent_urls());
        return;
    }
    println!("{}", catalog.recent_urls());
    for url in &settings.recent_urls {
        println!("  {url}");
    }
}
