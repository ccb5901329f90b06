mod alerts;
mod auth;
mod ledger;
mod models;
mod normalize;
mod report;
mod run;
mod settings;
mod sheet;
mod ui;

use anyhow::{Context, Result};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let settings = settings::Settings::load()?;
    init_tracing(&settings)?;

    let store = sheet::RemoteStore::connect(&settings.store)
        .context("connecting to the fleet document store")?;
    let ledger = ledger::Ledger::new(Box::new(store), settings.normalize.rules());

    match args.len() {
        1 => run::as_tui(&ledger, &settings),
        2.. => run::as_cli(&args, &ledger, &settings),
        _ => {
            eprintln!("Usage: fleettui [command]");
            Ok(())
        }
    }
}

/// Diagnostics go to a file: the terminal belongs to the TUI.
fn init_tracing(settings: &settings::Settings) -> Result<()> {
    let path = settings::data_dir()?.join("fleettui.log");
    let file = std::fs::File::create(&path)
        .with_context(|| format!("creating log file: {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(format!(
            "fleettui={}",
            settings.log.level
        )))
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
