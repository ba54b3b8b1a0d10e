use std::path::{
    Path,
    PathBuf,
};

use regex::Regex;
use thiserror::Error;
use tracing::debug;

use crate::plugins::{
    Plugin,
    find_plugin,
};

pub const OH_MY_ZSH_INSTALL: &str =
    r#"sh -c "$(curl -fsSL https://raw.githubusercontent.com/ohmyzsh/ohmyzsh/master/tools/install.sh)""#;
pub const NERD_FONT_INSTALL: &str = "brew tap homebrew/cask-fonts && brew install --cask font-jetbrains-mono-nerd-font";

const FALLBACK_COMMENT: &str = "# Add your custom configurations below";

lazy_static::lazy_static! {
    static ref THEME_LINE: Regex = Regex::new(r#"(?m)^ZSH_THEME="([^"\n]*)"$"#).expect("valid theme pattern");
    static ref PLUGINS_LINE: Regex = Regex::new(r"(?m)^plugins=\(([^)\n]*)\)$").expect("valid plugins pattern");
    static ref PROMPT_LINE: Regex = Regex::new(r#"(?m)^PROMPT="(.*)"$"#).expect("valid prompt pattern");
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{} already exists, pass --force to overwrite it", .0.display())]
    AlreadyExists(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Build the `.zshrc` text for a selection.
///
/// Plugin ids are emitted verbatim in the order given; they are not checked
/// against the plugin catalog.
pub fn generate_config(theme_id: &str, selected_plugin_ids: &[String], custom_prompt: &str) -> String {
    let user_section = if custom_prompt.is_empty() {
        FALLBACK_COMMENT.to_string()
    } else {
        format!("\n# Custom prompt\nPROMPT=\"{custom_prompt}\"\n")
    };

    format!(
        "# Generated by Zsh Customizer

# Path to your oh-my-zsh installation
export ZSH=\"$HOME/.oh-my-zsh\"

# Set theme
ZSH_THEME=\"{theme_id}\"

# Plugins
plugins=({plugins})

# Source oh-my-zsh
source $ZSH/oh-my-zsh.sh

# User configuration
{user_section}
",
        plugins = selected_plugin_ids.join(" "),
    )
}

/// Whether `id` can sit in the `plugins=(...)` line and be parsed back out.
pub fn is_valid_plugin_id(id: &str) -> bool {
    !id.is_empty() && !id.contains(|ch: char| ch.is_whitespace() || ch == '(' || ch == ')')
}

/// Selected plugins that need a manual clone, in selection order.
pub fn external_plugins(selected_plugin_ids: &[String]) -> Vec<&'static Plugin> {
    selected_plugin_ids
        .iter()
        .filter_map(|id| find_plugin(id))
        .filter(|plugin| plugin.installation.is_some())
        .collect()
}

/// Numbered setup steps to accompany a generated config.
pub fn install_instructions(selected_plugin_ids: &[String]) -> String {
    let mut steps = vec![
        "Save the generated configuration as .zshrc in your home directory (back up your existing one first)"
            .to_string(),
        format!("If you don't have Oh My Zsh installed, run:\n     {OH_MY_ZSH_INSTALL}"),
        format!(
            "Install JetBrainsMono Nerd Font:\n     {NERD_FONT_INSTALL}\n     or download it from https://www.nerdfonts.com/font-downloads"
        ),
        "Configure your terminal emulator to use \"JetBrainsMono Nerd Font\"".to_string(),
    ];

    let clones: Vec<String> = external_plugins(selected_plugin_ids)
        .iter()
        .filter_map(|plugin| {
            plugin
                .installation
                .map(|command| format!("\n     {}: {command}", plugin.name))
        })
        .collect();
    if !clones.is_empty() {
        steps.push(format!("Install selected external plugins:{}", clones.concat()));
    }

    steps.push("Restart your terminal or run: source ~/.zshrc".to_string());

    steps
        .iter()
        .enumerate()
        .map(|(index, step)| format!("  {}. {step}\n", index + 1))
        .collect()
}

/// Theme, plugin and prompt settings recovered from a config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedConfig {
    pub theme_id: Option<String>,
    pub plugin_ids: Option<Vec<String>>,
    pub custom_prompt: Option<String>,
}

impl ParsedConfig {
    pub fn parse(text: &str) -> Self {
        let theme_id = THEME_LINE.captures(text).map(|caps| caps[1].to_string());
        let plugin_ids = PLUGINS_LINE
            .captures(text)
            .map(|caps| caps[1].split_whitespace().map(str::to_string).collect());
        let custom_prompt = PROMPT_LINE.captures(text).map(|caps| caps[1].to_string());

        Self {
            theme_id,
            plugin_ids,
            custom_prompt,
        }
    }
}

/// Write the config to `path`, refusing to replace an existing file unless
/// `force` is set.
pub fn write_config(path: &Path, text: &str, force: bool) -> Result<(), ConfigError> {
    if path.exists() && !force {
        return Err(ConfigError::AlreadyExists(path.to_path_buf()));
    }

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, text)?;
    debug!(path = %path.display(), bytes = text.len(), "wrote config");
    Ok(())
}

pub fn read_config(path: &Path) -> Result<ParsedConfig, ConfigError> {
    let text = std::fs::read_to_string(path)?;
    Ok(ParsedConfig::parse(&text))
}
