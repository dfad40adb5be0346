//! Wiring & DI. Entry point: load config, bootstrap adapters, run the note service.
//! No business logic here.

use anyhow::Context;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use weekly_notes::adapters::{FixedClock, FsNoteStore, SystemClock};
use weekly_notes::domain::NoteOutcome;
use weekly_notes::ports::{Clock, NoteStore};
use weekly_notes::shared::config::AppConfig;
use weekly_notes::usecases::WeeklyNoteService;

fn main() -> ExitCode {
    // Only place .env is read. Variables already set in the process environment win.
    let env_loaded = dotenv::dotenv();
    // Diagnostics go to stderr; a successful run prints nothing at the default level.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &env_loaded {
        Ok(path) => debug!(path = %path.display(), "loaded .env"),
        Err(_) => debug!("no .env found"),
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // `{:#}` joins the context chain with ": ", keeping the report on one line.
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let cfg = AppConfig::load().context("error loading configuration")?;
    let root = cfg.root_or_default();
    debug!(root = %root.display(), "notes root");

    let clock: Arc<dyn Clock> = match cfg.reference_date()? {
        Some(date) => {
            info!(%date, "using pinned reference date");
            Arc::new(FixedClock(date))
        }
        None => Arc::new(SystemClock),
    };
    let store: Arc<dyn NoteStore> = Arc::new(FsNoteStore::new(&root));

    let service = WeeklyNoteService::new(store, clock);
    match service.generate().context("error creating weekly note")? {
        NoteOutcome::Created(path) => debug!(path = %path.display(), "done"),
        NoteOutcome::AlreadyExists(path) => debug!(path = %path.display(), "already up to date"),
    }

    Ok(())
}
