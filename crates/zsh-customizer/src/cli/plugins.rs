use std::io::{
    Write,
    stdout,
};

use clap::Subcommand;
use crossterm::queue;
use crossterm::style::{
    self,
    Color,
};
use eyre::{
    Result,
    bail,
};
use tracing::warn;

use super::Session;
use crate::config::is_valid_plugin_id;
use crate::plugins::{
    PLUGINS,
    find_plugin,
};

/// Plugin management commands
#[derive(Clone, Debug, PartialEq, Eq, Subcommand)]
pub enum PluginsSubcommand {
    /// List available plugins
    List,
    /// Print the selected plugin ids in order
    Selected,
    /// Enable a plugin, or disable it if already enabled
    Toggle { id: String },
}

impl PluginsSubcommand {
    pub fn execute(self, session: &mut Session) -> Result<()> {
        match self {
            Self::List => Self::execute_list(session),
            Self::Selected => Self::execute_selected(session),
            Self::Toggle { ref id } => Self::execute_toggle(session, id),
        }
    }

    fn execute_list(session: &Session) -> Result<()> {
        let selected = &session.state().selected_plugin_ids;
        let mut out = stdout();

        queue!(
            out,
            style::SetForegroundColor(Color::Green),
            style::Print("Available plugins:\n"),
            style::SetForegroundColor(Color::Reset)
        )?;

        for plugin in PLUGINS {
            let (marker, color) = if selected.iter().any(|id| id == plugin.id) {
                ("✓", Color::Green)
            } else {
                ("•", Color::Reset)
            };
            queue!(
                out,
                style::SetForegroundColor(color),
                style::Print(format!("  {marker} {:<24}", plugin.id)),
                style::SetForegroundColor(Color::Reset),
                style::Print(format!("{}\n", plugin.description)),
                style::SetForegroundColor(Color::DarkGrey),
                style::Print(format!("      {}\n", plugin.commands.join("  "))),
            )?;
            if plugin.installation.is_some() {
                queue!(
                    out,
                    style::SetForegroundColor(Color::Yellow),
                    style::Print("      requires manual installation\n"),
                )?;
            }
            queue!(out, style::SetForegroundColor(Color::Reset))?;
        }

        Ok(out.flush()?)
    }

    fn execute_selected(session: &Session) -> Result<()> {
        let mut out = stdout();
        for id in &session.state().selected_plugin_ids {
            queue!(out, style::Print(format!("{id}\n")))?;
        }
        Ok(out.flush()?)
    }

    fn execute_toggle(session: &mut Session, id: &str) -> Result<()> {
        if !is_valid_plugin_id(id) {
            bail!("invalid plugin id '{id}'");
        }

        let mut out = stdout();
        if find_plugin(id).is_none() {
            warn!(plugin = id, "toggling a plugin outside the catalog");
            queue!(
                out,
                style::SetForegroundColor(Color::Yellow),
                style::Print(format!("'{id}' is not in the plugin catalog; it will be written to the config as-is\n")),
                style::SetForegroundColor(Color::Reset)
            )?;
        }

        let mut enabled = false;
        session.apply(|state| enabled = state.toggle_plugin(id))?;

        let (verb, color) = if enabled {
            ("Enabled", Color::Green)
        } else {
            ("Disabled", Color::Red)
        };
        queue!(
            out,
            style::SetForegroundColor(color),
            style::Print(format!("✓ {verb} plugin: {id}\n")),
            style::SetForegroundColor(Color::Reset)
        )?;

        if let Some(command) = find_plugin(id).and_then(|plugin| plugin.installation).filter(|_| enabled) {
            queue!(
                out,
                style::SetForegroundColor(Color::Yellow),
                style::Print(format!("  This plugin needs a manual install:\n    {command}\n")),
                style::SetForegroundColor(Color::Reset)
            )?;
        }

        Ok(out.flush()?)
    }
}
