use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{FormatCommands, MenuBarCommands, ZoneCommands};

/// Main command-line interface for the Zoneline world-clock utility
///
/// Zoneline keeps a small list of selected time zones (up to five, with
/// optional custom names), renders them as a world clock under configurable
/// format presets, and computes the compact menu-bar style label. Running
/// without a command shows the world clock once.
#[derive(Parser)]
#[command(version, about, name = "zl")]
pub struct Args {
    /// Path to the SQLite preference store. Defaults to
    /// $XDG_DATA_HOME/zoneline/zoneline.db
    #[arg(long, global = true)]
    pub store_file: Option<PathBuf>,

    /// Use a throwaway in-memory store instead of the SQLite file
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Zoneline CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Show the world clock once
    #[command(alias = "s")]
    Show {
        /// Emit the view as JSON instead of markdown
        #[arg(long)]
        json: bool,
    },
    /// Manage the selected time zones
    #[command(alias = "z")]
    Zones {
        #[command(subcommand)]
        command: ZoneCommands,
    },
    /// World-clock date format
    #[command(alias = "f")]
    Format {
        #[command(subcommand)]
        command: FormatCommands,
    },
    /// Menu-bar indicator settings
    #[command(alias = "m")]
    Menubar {
        #[command(subcommand)]
        command: MenuBarCommands,
    },
    /// Re-render the world clock every 10 seconds until interrupted
    Watch,
}
