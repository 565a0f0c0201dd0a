//! Command definitions and handlers.
//!
//! Argument structs here carry the clap derives and convert into the core
//! parameter types via `From`, so `zoneline-core` signatures stay free of
//! CLI framework concerns. Positions on the command line are 1-indexed to
//! match the numbered `zones list` output; the conversions subtract one.

use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};
use jiff::Timestamp;
use zoneline_core::{
    catalog,
    display::{FormatPresets, OperationStatus, SelectedZones, ZoneOptions},
    format,
    params::{
        AddZone, MoveZone, RemoveZone, RenameZone, SetDateFormat, SetEmoji, SetMenuBarFormat,
        SetMenuBarZone, SetShortLabel, SetShowTime,
    },
    Preferences, MENU_BAR_FORMATS, POPOVER_FORMATS,
};

use crate::renderer::TerminalRenderer;

/// Operations on the selected-zone list
#[derive(Subcommand)]
pub enum ZoneCommands {
    /// List the selected zones in display order
    #[command(alias = "ls")]
    List,
    /// List every zone in the time-zone database with its UTC offset
    Catalog {
        /// Emit the catalog as JSON instead of markdown
        #[arg(long)]
        json: bool,
    },
    /// Add a zone (at most five; duplicates are rejected)
    Add(AddZoneArgs),
    /// Remove the zone at a position
    Rm(RemoveZoneArgs),
    /// Move a zone to another position
    Move(MoveZoneArgs),
    /// Set or clear a zone's custom display name
    Rename(RenameZoneArgs),
}

/// World-clock format operations
#[derive(Subcommand)]
pub enum FormatCommands {
    /// Show the active format pattern with a preview
    Show,
    /// List the format presets with previews
    List,
    /// Select a format pattern from the preset catalog
    Set(SetDateFormatArgs),
}

/// Menu-bar indicator operations
#[derive(Subcommand)]
pub enum MenuBarCommands {
    /// Print the current menu-bar label
    Label,
    /// Show the full menu-bar configuration
    Show,
    /// Switch between icon mode and time mode
    Mode(SetModeArgs),
    /// Set the icon-mode emoji
    Emoji(SetEmojiArgs),
    /// Set or clear the time-mode prefix label (five characters at most)
    Prefix(SetPrefixArgs),
    /// Choose which zone the menu bar shows
    Zone(SetZoneArgs),
    /// List the zones valid for the menu bar
    Zones,
    /// Select a menu-bar format pattern
    Format(SetMenuBarFormatArgs),
    /// List the menu-bar format presets with previews
    Formats,
}

#[derive(Args)]
pub struct AddZoneArgs {
    /// Canonical identifier, e.g. America/New_York
    pub identifier: String,
}

impl From<AddZoneArgs> for AddZone {
    fn from(val: AddZoneArgs) -> Self {
        AddZone {
            identifier: val.identifier,
        }
    }
}

#[derive(Args)]
pub struct RemoveZoneArgs {
    /// Position in the list, as shown by `zones list`
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub position: u32,
}

impl From<RemoveZoneArgs> for RemoveZone {
    fn from(val: RemoveZoneArgs) -> Self {
        RemoveZone {
            index: (val.position - 1) as usize,
        }
    }
}

#[derive(Args)]
pub struct MoveZoneArgs {
    /// Position to move from, as shown by `zones list`
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub from: u32,
    /// Position to move to (clamped into the list)
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub to: u32,
}

impl From<MoveZoneArgs> for MoveZone {
    fn from(val: MoveZoneArgs) -> Self {
        MoveZone {
            from: (val.from - 1) as usize,
            to: (val.to - 1) as usize,
        }
    }
}

#[derive(Args)]
pub struct RenameZoneArgs {
    /// Identifier of a selected zone
    pub identifier: String,
    /// New display name; omit to clear the custom name
    pub name: Option<String>,
}

impl From<RenameZoneArgs> for RenameZone {
    fn from(val: RenameZoneArgs) -> Self {
        RenameZone {
            identifier: val.identifier,
            name: val.name.unwrap_or_default(),
        }
    }
}

#[derive(Args)]
pub struct SetDateFormatArgs {
    /// Pattern from the preset catalog, e.g. "MMM dd EEE hh:mm a"
    pub pattern: String,
}

impl From<SetDateFormatArgs> for SetDateFormat {
    fn from(val: SetDateFormatArgs) -> Self {
        SetDateFormat {
            pattern: val.pattern,
        }
    }
}

/// What the menu bar shows: the icon emoji or the formatted time
#[derive(Clone, Copy, ValueEnum)]
pub enum MenuBarMode {
    Icon,
    Time,
}

#[derive(Args)]
pub struct SetModeArgs {
    #[arg(value_enum)]
    pub mode: MenuBarMode,
}

impl From<SetModeArgs> for SetShowTime {
    fn from(val: SetModeArgs) -> Self {
        SetShowTime {
            show: matches!(val.mode, MenuBarMode::Time),
        }
    }
}

#[derive(Args)]
pub struct SetEmojiArgs {
    /// Any glyph; the menu bar is tight on space, keep it to one character
    pub emoji: String,
}

impl From<SetEmojiArgs> for SetEmoji {
    fn from(val: SetEmojiArgs) -> Self {
        SetEmoji { emoji: val.emoji }
    }
}

#[derive(Args)]
pub struct SetPrefixArgs {
    /// Prefix label, e.g. NYC; omit to clear
    pub label: Option<String>,
}

impl From<SetPrefixArgs> for SetShortLabel {
    fn from(val: SetPrefixArgs) -> Self {
        SetShortLabel {
            label: val.label.unwrap_or_default(),
        }
    }
}

#[derive(Args)]
pub struct SetZoneArgs {
    /// "local" or an identifier from the selected list
    pub zone_id: String,
}

impl From<SetZoneArgs> for SetMenuBarZone {
    fn from(val: SetZoneArgs) -> Self {
        SetMenuBarZone {
            zone_id: val.zone_id,
        }
    }
}

#[derive(Args)]
pub struct SetMenuBarFormatArgs {
    /// Pattern from the menu-bar preset catalog, e.g. "HH:mm"
    pub pattern: String,
}

impl From<SetMenuBarFormatArgs> for SetMenuBarFormat {
    fn from(val: SetMenuBarFormatArgs) -> Self {
        SetMenuBarFormat {
            pattern: val.pattern,
        }
    }
}

/// Command dispatcher owning the preference handle and the renderer.
pub struct Cli {
    prefs: Preferences,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(prefs: Preferences, renderer: TerminalRenderer) -> Self {
        Self { prefs, renderer }
    }

    /// Renders the world clock once.
    pub fn show_clock(&self, json: bool) -> Result<()> {
        let clock = self.prefs.world_clock(Timestamp::now())?;
        if json {
            println!("{}", serde_json::to_string_pretty(&clock)?);
        } else {
            self.renderer.render(&clock.to_string());
        }
        Ok(())
    }

    /// Renders one watch tick: the menu-bar label plus the world clock.
    pub fn render_tick(&self) -> Result<()> {
        let now = Timestamp::now();
        let label = self.prefs.menu_bar_label(now)?;
        let clock = self.prefs.world_clock(now)?;
        self.renderer.render(&format!("---\n**{label}**\n\n{clock}"));
        Ok(())
    }

    pub fn handle_zone_command(&self, command: ZoneCommands) -> Result<()> {
        match command {
            ZoneCommands::List => {
                let zones = self.prefs.zones()?;
                self.renderer
                    .render(&format!("# Time Zones\n\n{}", SelectedZones(zones)));
            }
            ZoneCommands::Catalog { json } => {
                let options = catalog::list_all_zones(Timestamp::now());
                if json {
                    println!("{}", serde_json::to_string_pretty(&options)?);
                } else {
                    self.renderer.render(&ZoneOptions(options).to_string());
                }
            }
            ZoneCommands::Add(args) => self.report(self.prefs.add_zone(&args.into())?),
            ZoneCommands::Rm(args) => self.report(self.prefs.remove_zone(&args.into())?),
            ZoneCommands::Move(args) => self.report(self.prefs.move_zone(&args.into())?),
            ZoneCommands::Rename(args) => self.report(self.prefs.rename_zone(&args.into())?),
        }
        Ok(())
    }

    pub fn handle_format_command(&self, command: FormatCommands) -> Result<()> {
        match command {
            FormatCommands::Show => {
                let pattern = self.prefs.date_format()?;
                self.renderer.render(&format!(
                    "Active format: `{}` — {}\n",
                    pattern,
                    format::sample_label(&pattern)
                ));
            }
            FormatCommands::List => {
                self.renderer.render(
                    &format!("# Formats\n\n{}", FormatPresets(&POPOVER_FORMATS)),
                );
            }
            FormatCommands::Set(args) => self.report(self.prefs.set_date_format(&args.into())?),
        }
        Ok(())
    }

    pub fn handle_menubar_command(&self, command: MenuBarCommands) -> Result<()> {
        match command {
            MenuBarCommands::Label => {
                println!("{}", self.prefs.menu_bar_label(Timestamp::now())?);
            }
            MenuBarCommands::Show => {
                let config = self.prefs.menu_bar_config()?;
                let label = self.prefs.menu_bar_label(Timestamp::now())?;
                self.renderer
                    .render(&format!("{config}- Current label: {label}\n"));
            }
            MenuBarCommands::Mode(args) => self.report(self.prefs.set_show_time(&args.into())?),
            MenuBarCommands::Emoji(args) => self.report(self.prefs.set_emoji(&args.into())?),
            MenuBarCommands::Prefix(args) => {
                self.report(self.prefs.set_short_label(&args.into())?)
            }
            MenuBarCommands::Zone(args) => {
                self.report(self.prefs.set_menu_bar_zone(&args.into())?)
            }
            MenuBarCommands::Zones => {
                let options = self.prefs.menu_bar_zone_options()?;
                self.renderer.render(&ZoneOptions(options).to_string());
            }
            MenuBarCommands::Format(args) => {
                self.report(self.prefs.set_menu_bar_format(&args.into())?)
            }
            MenuBarCommands::Formats => {
                self.renderer.render(&format!(
                    "# Menu Bar Formats\n\n{}",
                    FormatPresets(&MENU_BAR_FORMATS)
                ));
            }
        }
        Ok(())
    }

    fn report(&self, status: OperationStatus) {
        self.renderer.render(&status.to_string());
    }
}
