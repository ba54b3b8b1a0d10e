mod config;
mod guide;
mod plugins;
mod preview;
mod themes;

use std::io::{
    Write,
    stdout,
};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{
    ArgAction,
    Parser,
    Subcommand,
    ValueEnum,
};
use crossterm::queue;
use crossterm::style::{
    self,
    Color,
};
use eyre::Result;
use tracing::debug;

pub use self::config::{
    ConfigSubcommand,
    PromptArgs,
};
pub use self::plugins::PluginsSubcommand;
pub use self::themes::ThemesSubcommand;
use crate::state::{
    Derived,
    SelectionState,
    Tab,
    recompute_derived,
};
use crate::storage::{
    FileStore,
    is_guided,
    load_selection,
    persist_selection,
};
use crate::util::directories;

/// Customize your Zsh: pick an Oh My Zsh theme and plugins, preview the
/// prompt and generate a .zshrc
#[derive(Debug, Parser)]
#[command(name = "zsh-customizer", version, about)]
pub struct Cli {
    /// Key/value store holding your selection [env: ZSH_CUSTOMIZER_STORE]
    #[arg(long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,
    /// Increase log verbosity
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum Command {
    /// Browse and select themes
    #[command(subcommand)]
    Themes(ThemesSubcommand),
    /// Browse and toggle plugins
    #[command(subcommand)]
    Plugins(PluginsSubcommand),
    /// Show or generate the .zshrc configuration
    #[command(subcommand)]
    Config(ConfigSubcommand),
    /// Render the terminal preview of the selected theme
    Preview {
        /// Preview this theme instead of the selected one
        #[arg(long)]
        theme: Option<String>,
        /// Width of the preview in columns (defaults to the terminal width)
        #[arg(long)]
        cols: Option<u16>,
    },
    /// Print the resolved color palette as JSON
    Palette {
        /// Theme to resolve (defaults to the selected one)
        #[arg(long)]
        theme: Option<String>,
        /// Resolve the light palette
        #[arg(long, conflicts_with = "dark")]
        light: bool,
        /// Resolve the dark palette
        #[arg(long)]
        dark: bool,
    },
    /// Show or change the color mode
    Mode {
        #[arg(value_enum)]
        mode: Option<ModeArg>,
    },
    /// Open one of the customizer views
    View {
        #[arg(value_enum)]
        tab: Tab,
    },
    /// Walk through the getting-started guide
    Guide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Dark,
    Light,
    Toggle,
}

/// The selection loaded from the store, plus everything derived from it.
pub struct Session {
    store: FileStore,
    state: SelectionState,
    derived: Derived,
}

impl Session {
    pub fn open(path: PathBuf) -> Result<Self> {
        let mut store = FileStore::open(path)?;
        let state = load_selection(&mut store);
        let derived = recompute_derived(&state, None);

        Ok(Self { store, state, derived })
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn derived(&self) -> &Derived {
        &self.derived
    }

    pub fn store(&self) -> &FileStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut FileStore {
        &mut self.store
    }

    /// Mutate the selection, then recompute derived values and persist.
    pub fn apply(&mut self, change: impl FnOnce(&mut SelectionState)) -> Result<()> {
        change(&mut self.state);
        self.derived = recompute_derived(&self.state, Some(&self.derived));
        persist_selection(&mut self.store, &self.state)?;
        debug!(
            theme = %self.state.theme_id,
            palette_changed = self.derived.palette_changed,
            "selection updated"
        );
        Ok(())
    }
}

impl Cli {
    pub fn execute(self) -> Result<ExitCode> {
        let path = directories::store_path(self.store)?;
        let mut session = Session::open(path)?;

        if self.command != Command::Guide && !is_guided(session.store()) {
            let mut err = std::io::stderr();
            queue!(
                err,
                style::SetForegroundColor(Color::Yellow),
                style::Print("💡 New here? Run `zsh-customizer guide` for a quick tour.\n"),
                style::SetForegroundColor(Color::Reset)
            )?;
            err.flush()?;
        }

        self.command.execute(&mut session)?;
        stdout().flush()?;
        Ok(ExitCode::SUCCESS)
    }
}

impl Command {
    fn execute(self, session: &mut Session) -> Result<()> {
        match self {
            Self::Themes(subcommand) => subcommand.execute(session),
            Self::Plugins(subcommand) => subcommand.execute(session),
            Self::Config(subcommand) => subcommand.execute(session),
            Self::Preview { theme, cols } => preview::execute_preview(session, theme.as_deref(), cols),
            Self::Palette { theme, light, dark } => {
                let dark_mode = if light || dark { dark } else { session.state().dark_mode };
                preview::execute_palette(session, theme.as_deref(), dark_mode)
            },
            Self::Mode { mode } => preview::execute_mode(session, mode),
            Self::View { tab } => Self::execute_view(session, tab),
            Self::Guide => guide::execute_guide(session),
        }
    }

    fn execute_view(session: &mut Session, tab: Tab) -> Result<()> {
        session.apply(|state| state.set_active_tab(tab))?;
        match tab {
            Tab::Themes => ThemesSubcommand::List.execute(session),
            Tab::Plugins => PluginsSubcommand::List.execute(session),
            Tab::Terminal => preview::execute_preview(session, None, None),
            Tab::Config => ConfigSubcommand::Show {
                prompt: PromptArgs::default(),
                quiet: false,
            }
            .execute(session),
        }
    }
}
