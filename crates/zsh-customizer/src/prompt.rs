use clap::ValueEnum;
use strum::{
    Display,
    EnumIter,
};

const USER: &str = "user";
const HOST: &str = "host";
const PATH: &str = "~/projects";
const BRANCH: &str = "(main)";

/// Preset layouts for a custom `PROMPT`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum PromptStyle {
    /// user@host:~/projects (main) $
    #[default]
    Default,
    /// user at host in ~/projects (main) ➜
    Arrow,
    /// ~/projects $
    Minimal,
    /// [user@host ~/projects] (main)$
    Informative,
    /// The text given with --prompt, as-is
    Custom,
}

/// Which pieces a preset prompt shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptParts {
    pub user: bool,
    pub host: bool,
    pub path: bool,
    pub git: bool,
}

impl Default for PromptParts {
    fn default() -> Self {
        Self {
            user: true,
            host: true,
            path: true,
            git: true,
        }
    }
}

/// Assemble the prompt text for `style`. `custom` is only used by
/// [`PromptStyle::Custom`]; `parts` is ignored there.
pub fn build_prompt(style: PromptStyle, parts: PromptParts, custom: &str) -> String {
    let mut prompt = String::new();

    match style {
        PromptStyle::Custom => prompt.push_str(custom),
        PromptStyle::Default => {
            if parts.user {
                prompt.push_str(USER);
            }
            if parts.user && parts.host {
                prompt.push('@');
            }
            if parts.host {
                prompt.push_str(HOST);
            }
            if (parts.user || parts.host) && parts.path {
                prompt.push(':');
            }
            if parts.path {
                prompt.push_str(PATH);
            }
            if parts.git {
                prompt.push(' ');
                prompt.push_str(BRANCH);
            }
            prompt.push_str(" $ ");
        },
        PromptStyle::Arrow => {
            if parts.user {
                prompt.push_str(&format!("{USER} "));
            }
            if parts.host {
                prompt.push_str(&format!("at {HOST} "));
            }
            if parts.path {
                prompt.push_str(&format!("in {PATH} "));
            }
            if parts.git {
                prompt.push_str(&format!("{BRANCH} "));
            }
            prompt.push_str("➜ ");
        },
        PromptStyle::Minimal => {
            if parts.path {
                prompt.push_str(&format!("{PATH} "));
            }
            prompt.push_str("$ ");
        },
        PromptStyle::Informative => {
            prompt.push('[');
            if parts.user {
                prompt.push_str(USER);
            }
            if parts.user && parts.host {
                prompt.push('@');
            }
            if parts.host {
                prompt.push_str(HOST);
            }
            if parts.path {
                prompt.push_str(&format!(" {PATH}"));
            }
            prompt.push(']');
            if parts.git {
                prompt.push_str(&format!(" {BRANCH}"));
            }
            prompt.push_str("$ ");
        },
    }

    prompt
}
