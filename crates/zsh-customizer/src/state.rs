use clap::ValueEnum;
use serde::{
    Deserialize,
    Serialize,
};
use strum::{
    Display,
    EnumIter,
};
use themes::DEFAULT_THEME;

use crate::config::generate_config;

pub const DEFAULT_PLUGINS: &[&str] = &["git", "docker"];

/// The views of the customizer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Display, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Tab {
    #[default]
    Themes,
    Plugins,
    Terminal,
    Config,
}

/// Everything the user has chosen so far.
///
/// `theme_id`, `selected_plugin_ids` and `dark_mode` are persisted;
/// `custom_prompt` and `active_tab` live for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    pub theme_id: String,
    pub selected_plugin_ids: Vec<String>,
    pub custom_prompt: String,
    pub dark_mode: bool,
    pub active_tab: Tab,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            theme_id: DEFAULT_THEME.to_string(),
            selected_plugin_ids: DEFAULT_PLUGINS.iter().map(|&id| id.to_string()).collect(),
            custom_prompt: String::new(),
            dark_mode: true,
            active_tab: Tab::default(),
        }
    }
}

impl SelectionState {
    pub fn select_theme(&mut self, theme_id: &str) {
        self.theme_id = theme_id.to_string();
    }

    /// Remove `plugin_id` if selected, otherwise append it. Returns whether
    /// the plugin is selected afterwards.
    pub fn toggle_plugin(&mut self, plugin_id: &str) -> bool {
        if self.selected_plugin_ids.iter().any(|id| id == plugin_id) {
            self.selected_plugin_ids.retain(|id| id != plugin_id);
            false
        } else {
            self.selected_plugin_ids.push(plugin_id.to_string());
            true
        }
    }

    pub fn set_custom_prompt(&mut self, prompt: &str) {
        self.custom_prompt = prompt.to_string();
    }

    pub fn set_dark_mode(&mut self, dark_mode: bool) {
        self.dark_mode = dark_mode;
    }

    pub fn toggle_dark_mode(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.dark_mode
    }

    pub fn set_active_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    /// Identity of the color scheme this state displays.
    pub fn palette_key(&self) -> (String, bool) {
        (self.theme_id.clone(), self.dark_mode)
    }
}

/// Values computed from a [`SelectionState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Derived {
    pub config: String,
    pub palette_key: (String, bool),
    /// Whether the display surface needs a new color scheme.
    pub palette_changed: bool,
}

/// Recompute everything derived from `state`; call after every mutation.
pub fn recompute_derived(state: &SelectionState, previous: Option<&Derived>) -> Derived {
    let palette_key = state.palette_key();
    let palette_changed = previous.is_none_or(|prev| prev.palette_key != palette_key);

    Derived {
        config: generate_config(&state.theme_id, &state.selected_plugin_ids, &state.custom_prompt),
        palette_key,
        palette_changed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plugins(state: &SelectionState) -> Vec<&str> {
        state.selected_plugin_ids.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_defaults() {
        let state = SelectionState::default();
        assert_eq!(state.theme_id, "robbyrussell");
        assert_eq!(plugins(&state), vec!["git", "docker"]);
        assert!(state.custom_prompt.is_empty());
        assert_eq!(state.active_tab, Tab::Themes);
    }

    #[test]
    fn test_toggle_removes_exactly_one_and_keeps_order() {
        let mut state = SelectionState::default();
        state.toggle_plugin("npm");
        state.toggle_plugin("z");
        assert_eq!(plugins(&state), vec!["git", "docker", "npm", "z"]);

        assert!(!state.toggle_plugin("docker"));
        assert_eq!(plugins(&state), vec!["git", "npm", "z"]);
    }

    #[test]
    fn test_toggle_appends_missing_plugin() {
        let mut state = SelectionState::default();
        assert!(state.toggle_plugin("sudo"));
        assert_eq!(plugins(&state), vec!["git", "docker", "sudo"]);
        assert!(!state.toggle_plugin("sudo"));
        assert_eq!(plugins(&state), vec!["git", "docker"]);
    }

    #[test]
    fn test_recompute_tracks_palette_changes() {
        let mut state = SelectionState::default();
        let first = recompute_derived(&state, None);
        assert!(first.palette_changed);
        assert!(first.config.contains("ZSH_THEME=\"robbyrussell\""));

        state.toggle_plugin("z");
        let second = recompute_derived(&state, Some(&first));
        assert!(!second.palette_changed);
        assert!(second.config.contains("plugins=(git docker z)"));

        state.toggle_dark_mode();
        let third = recompute_derived(&state, Some(&second));
        assert!(third.palette_changed);

        state.select_theme("agnoster");
        let fourth = recompute_derived(&state, Some(&third));
        assert!(fourth.palette_changed);
        assert!(fourth.config.contains("ZSH_THEME=\"agnoster\""));
    }

    #[test]
    fn test_custom_prompt_reaches_config() {
        let mut state = SelectionState::default();
        state.set_custom_prompt("%n@%m");
        let derived = recompute_derived(&state, None);
        assert!(derived.config.contains("PROMPT=\"%n@%m\""));
    }
}
