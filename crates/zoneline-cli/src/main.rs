//! Zoneline CLI Application
//!
//! Terminal front end for the world-clock preference engine: it opens the
//! preference store, runs the self-healing pass, and dispatches to the
//! command handlers.

mod args;
mod cli;
mod renderer;
mod watch;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use zoneline_core::{store::MemoryStore, PreferencesBuilder};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args { store_file, ephemeral, no_color, command } = Args::parse();

    let builder = if ephemeral {
        PreferencesBuilder::new().with_store(MemoryStore::new())
    } else {
        PreferencesBuilder::new().with_store_path(store_file)
    };
    let prefs = builder.build().context("Failed to open preferences")?;

    // validate persisted state before any command touches it
    let report = prefs.heal().context("Failed to validate preferences")?;
    if !report.is_clean() {
        info!("Healed stale preferences: {}", report.to_string().trim_end());
    }

    let cli = Cli::new(prefs, TerminalRenderer::new(!no_color));

    info!("Zoneline started");

    match command {
        Some(Show { json }) => cli.show_clock(json),
        Some(Zones { command }) => cli.handle_zone_command(command),
        Some(Format { command }) => cli.handle_format_command(command),
        Some(Menubar { command }) => cli.handle_menubar_command(command),
        Some(Watch) => watch::run(&cli).await,
        None => cli.show_clock(false),
    }
}
