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
use dialoguer::Select;
use eyre::{
    Result,
    bail,
};
use themes::{
    DEFAULT_THEME,
    ThemeManager,
};
use tracing::warn;

use super::Session;

/// Theme management commands
#[derive(Clone, Debug, PartialEq, Eq, Subcommand)]
pub enum ThemesSubcommand {
    /// List available themes
    List,
    /// Show the selected theme
    Current,
    /// Print the rendered prompt of a theme
    Preview { name: String },
    /// Select a theme, interactively when no name is given
    Select { name: Option<String> },
    /// Render a theme in both color modes and check the escape sequences
    Validate { name: String },
}

impl ThemesSubcommand {
    pub fn execute(self, session: &mut Session) -> Result<()> {
        let manager = ThemeManager::new();
        match self {
            Self::List => Self::execute_list(&manager, session),
            Self::Current => Self::execute_current(&manager, session),
            Self::Preview { ref name } => Self::execute_preview(&manager, session, name),
            Self::Select { name: Some(ref name) } => Self::execute_select(&manager, session, name),
            Self::Select { name: None } => Self::execute_select_interactive(&manager, session),
            Self::Validate { ref name } => Self::execute_validate(&manager, name),
        }
    }

    fn execute_list(manager: &ThemeManager, session: &Session) -> Result<()> {
        let mut out = stdout();
        let current = session.state().theme_id.as_str();

        queue!(
            out,
            style::SetForegroundColor(Color::Green),
            style::Print("Available themes:\n"),
            style::SetForegroundColor(Color::Reset)
        )?;

        for theme in manager.list_themes() {
            let (marker, color) = if theme.id == current {
                ("✓", Color::Green)
            } else {
                ("•", Color::Reset)
            };
            queue!(
                out,
                style::SetForegroundColor(color),
                style::Print(format!("  {marker} {:<14}", theme.id)),
                style::SetForegroundColor(Color::Reset),
                style::Print(format!("{}: {}\n", theme.name, theme.description)),
                style::SetForegroundColor(Color::DarkGrey),
                style::Print(format!("      {}\n", theme.preview)),
                style::SetForegroundColor(Color::Reset)
            )?;
        }

        Ok(out.flush()?)
    }

    fn execute_current(manager: &ThemeManager, session: &Session) -> Result<()> {
        let current = session.state().theme_id.as_str();
        let mut out = stdout();

        queue!(out, style::Print(format!("{current}\n")))?;
        if !manager.is_builtin(current) {
            queue!(
                out,
                style::SetForegroundColor(Color::Yellow),
                style::Print(format!("(not a builtin theme, previews use {DEFAULT_THEME})\n")),
                style::SetForegroundColor(Color::Reset)
            )?;
        }

        Ok(out.flush()?)
    }

    fn execute_preview(manager: &ThemeManager, session: &Session, name: &str) -> Result<()> {
        let theme = manager.load_theme(name)?;
        let prompt = manager.render_prompt(theme.id, session.state().dark_mode);

        let mut out = stdout();
        queue!(
            out,
            style::SetForegroundColor(Color::Cyan),
            style::Print(format!("Preview of theme '{}':\n", theme.id)),
            style::SetForegroundColor(Color::Reset),
            style::Print(format!("{prompt}\n")),
            style::ResetColor
        )?;

        Ok(out.flush()?)
    }

    fn execute_select(manager: &ThemeManager, session: &mut Session, name: &str) -> Result<()> {
        if name.is_empty() || name.contains(|ch: char| ch.is_whitespace() || ch == '"') {
            bail!("invalid theme name '{name}'");
        }

        let mut out = stdout();
        if !manager.is_builtin(name) {
            warn!(theme = name, "selecting a theme outside the catalog");
            queue!(
                out,
                style::SetForegroundColor(Color::Yellow),
                style::Print(format!(
                    "'{name}' is not a builtin theme; it will be written to the config as-is and previewed as {DEFAULT_THEME}\n"
                )),
                style::SetForegroundColor(Color::Reset)
            )?;
        }

        session.apply(|state| state.select_theme(name))?;

        queue!(
            out,
            style::SetForegroundColor(Color::Green),
            style::Print(format!("✓ Switched to theme: {name}\n")),
            style::SetForegroundColor(Color::Reset)
        )?;

        Ok(out.flush()?)
    }

    fn execute_select_interactive(manager: &ThemeManager, session: &mut Session) -> Result<()> {
        let themes = manager.list_themes();
        let labels: Vec<String> = themes
            .iter()
            .map(|theme| format!("{:<14} {}", theme.id, theme.preview))
            .collect();
        let current = themes
            .iter()
            .position(|theme| theme.id == session.state().theme_id)
            .unwrap_or(0);

        let selection = match Select::with_theme(&crate::util::dialoguer_theme())
            .with_prompt("Select a theme")
            .items(&labels)
            .default(current)
            .interact_on_opt(&dialoguer::console::Term::stdout())
        {
            Ok(selection) => selection,
            Err(dialoguer::Error::IO(ref err)) if err.kind() == std::io::ErrorKind::Interrupted => None,
            Err(err) => bail!("Failed to choose theme: {err}"),
        };

        match selection.and_then(|index| themes.get(index)) {
            Some(theme) => Self::execute_select(manager, session, theme.id),
            None => Ok(()),
        }
    }

    fn execute_validate(manager: &ThemeManager, name: &str) -> Result<()> {
        manager.validate_theme(name)?;

        let mut out = stdout();
        queue!(
            out,
            style::SetForegroundColor(Color::Green),
            style::Print(format!("✓ {name} renders cleanly in dark and light mode\n")),
            style::SetForegroundColor(Color::Reset)
        )?;
        Ok(out.flush()?)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn session(temp_dir: &TempDir) -> Session {
        Session::open(temp_dir.path().join("store.json")).unwrap()
    }

    #[test]
    fn test_select_builtin_theme() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = session(&temp_dir);

        ThemesSubcommand::Select {
            name: Some("agnoster".to_string()),
        }
        .execute(&mut session)
        .unwrap();

        assert_eq!(session.state().theme_id, "agnoster");
        assert!(session.derived().config.contains("ZSH_THEME=\"agnoster\""));
    }

    #[test]
    fn test_select_foreign_theme_is_kept_verbatim() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = session(&temp_dir);

        ThemesSubcommand::Select {
            name: Some("powerlevel10k".to_string()),
        }
        .execute(&mut session)
        .unwrap();
        assert!(session.derived().config.contains("ZSH_THEME=\"powerlevel10k\""));
    }

    #[test]
    fn test_select_rejects_blank_name() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = session(&temp_dir);

        let result = ThemesSubcommand::Select {
            name: Some("  ".to_string()),
        }
        .execute(&mut session);
        assert!(result.is_err());
        assert_eq!(session.state().theme_id, DEFAULT_THEME);
    }

    #[test]
    fn test_preview_and_validate_unknown_theme_fail() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = session(&temp_dir);

        let preview = ThemesSubcommand::Preview {
            name: "nope".to_string(),
        }
        .execute(&mut session);
        assert_eq!(preview.unwrap_err().to_string(), "Theme 'nope' not found");

        let validate = ThemesSubcommand::Validate {
            name: "nope".to_string(),
        }
        .execute(&mut session);
        assert!(validate.is_err());
    }

    #[test]
    fn test_validate_every_builtin_theme() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = session(&temp_dir);

        for theme in ThemeManager::new().list_themes() {
            ThemesSubcommand::Validate {
                name: theme.id.to_string(),
            }
            .execute(&mut session)
            .unwrap();
        }
    }
}
