use std::io::{
    Write,
    stderr,
    stdout,
};
use std::path::PathBuf;

use clap::{
    Args,
    Subcommand,
};
use crossterm::queue;
use crossterm::style::{
    self,
    Color,
};
use eyre::{
    Result,
    bail,
};
use tracing::info;

use super::Session;
use crate::config::{
    install_instructions,
    read_config,
    write_config,
};
use crate::prompt::{
    PromptParts,
    PromptStyle,
    build_prompt,
};

/// Custom prompt options shared by `show` and `write`. The prompt only
/// lives for this run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Args)]
pub struct PromptArgs {
    /// Custom PROMPT text (implies --style custom)
    #[arg(long)]
    pub prompt: Option<String>,
    /// Build the PROMPT from a preset
    #[arg(long, value_enum)]
    pub style: Option<PromptStyle>,
    /// Leave the username out of the preset
    #[arg(long)]
    pub no_user: bool,
    /// Leave the hostname out of the preset
    #[arg(long)]
    pub no_host: bool,
    /// Leave the current path out of the preset
    #[arg(long)]
    pub no_path: bool,
    /// Leave the git branch out of the preset
    #[arg(long)]
    pub no_git: bool,
}

impl PromptArgs {
    fn parts(&self) -> PromptParts {
        PromptParts {
            user: !self.no_user,
            host: !self.no_host,
            path: !self.no_path,
            git: !self.no_git,
        }
    }

    /// The prompt these options ask for, or `None` to keep the current one.
    pub fn resolve(&self) -> Result<Option<String>> {
        let toggled = self.parts() != PromptParts::default();
        let style = match (self.style, &self.prompt) {
            (Some(PromptStyle::Custom), _) | (None, Some(_)) => PromptStyle::Custom,
            (Some(style), Some(_)) => bail!("--prompt only applies to --style custom, not --style {style}"),
            (Some(style), None) => style,
            (None, None) if toggled => PromptStyle::default(),
            (None, None) => return Ok(None),
        };

        Ok(Some(build_prompt(style, self.parts(), self.prompt.as_deref().unwrap_or_default())))
    }
}

/// .zshrc generation commands
#[derive(Clone, Debug, PartialEq, Eq, Subcommand)]
pub enum ConfigSubcommand {
    /// Print the generated .zshrc
    Show {
        #[command(flatten)]
        prompt: PromptArgs,
        /// Skip the installation instructions
        #[arg(short, long)]
        quiet: bool,
    },
    /// Write the generated .zshrc to a file
    Write {
        path: PathBuf,
        #[command(flatten)]
        prompt: PromptArgs,
        /// Replace the file if it already exists
        #[arg(short, long)]
        force: bool,
    },
    /// Adopt the theme and plugins of an existing .zshrc
    Import { path: PathBuf },
}

impl ConfigSubcommand {
    pub fn execute(self, session: &mut Session) -> Result<()> {
        match self {
            Self::Show { prompt, quiet } => {
                Self::apply_prompt(session, &prompt)?;
                let mut out = stdout();
                queue!(out, style::Print(&session.derived().config))?;
                out.flush()?;

                if !quiet {
                    Self::print_instructions(session)?;
                }
                Ok(())
            },
            Self::Write { path, prompt, force } => {
                Self::apply_prompt(session, &prompt)?;
                write_config(&path, &session.derived().config, force)?;
                info!(path = %path.display(), "config written");

                let mut out = stdout();
                queue!(
                    out,
                    style::SetForegroundColor(Color::Green),
                    style::Print(format!("✓ Wrote {}\n", path.display())),
                    style::SetForegroundColor(Color::Reset)
                )?;
                out.flush()?;
                Self::print_instructions(session)
            },
            Self::Import { path } => Self::execute_import(session, &path),
        }
    }

    fn apply_prompt(session: &mut Session, args: &PromptArgs) -> Result<()> {
        match args.resolve()? {
            Some(prompt) => session.apply(|state| state.set_custom_prompt(&prompt)),
            None => Ok(()),
        }
    }

    fn print_instructions(session: &Session) -> Result<()> {
        let mut err = stderr();
        queue!(
            err,
            style::SetForegroundColor(Color::Cyan),
            style::Print("\nInstallation instructions:\n"),
            style::SetForegroundColor(Color::Reset),
            style::Print(install_instructions(&session.state().selected_plugin_ids)),
        )?;
        Ok(err.flush()?)
    }

    fn execute_import(session: &mut Session, path: &std::path::Path) -> Result<()> {
        let parsed = read_config(path)?;
        let mut out = stdout();

        if parsed.theme_id.is_none() && parsed.plugin_ids.is_none() {
            queue!(
                out,
                style::SetForegroundColor(Color::Yellow),
                style::Print(format!("No ZSH_THEME or plugins line found in {}\n", path.display())),
                style::SetForegroundColor(Color::Reset)
            )?;
            return Ok(out.flush()?);
        }

        session.apply(|state| {
            if let Some(theme_id) = parsed.theme_id.as_deref().filter(|id| !id.is_empty()) {
                state.select_theme(theme_id);
            }
            if let Some(plugin_ids) = &parsed.plugin_ids {
                state.selected_plugin_ids = plugin_ids.clone();
            }
        })?;

        let state = session.state();
        queue!(
            out,
            style::SetForegroundColor(Color::Green),
            style::Print(format!("✓ Imported {}\n", path.display())),
            style::SetForegroundColor(Color::Reset),
            style::Print(format!("  Theme: {}\n", state.theme_id)),
            style::Print(format!("  Plugins: {}\n", state.selected_plugin_ids.join(" "))),
        )?;
        if parsed.custom_prompt.is_some() {
            queue!(
                out,
                style::SetForegroundColor(Color::Yellow),
                style::Print("  A custom PROMPT was found; pass it with --prompt to keep it\n"),
                style::SetForegroundColor(Color::Reset)
            )?;
        }

        Ok(out.flush()?)
    }
}
