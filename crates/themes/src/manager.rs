use std::collections::HashMap;

use crate::catalog::{
    THEMES,
    Theme,
};
use crate::error::ThemeError;
use crate::palette::{
    Palette,
    resolve_palette,
};
use crate::renderer::ThemeRenderer;

pub struct ThemeManager {
    builtin_themes: HashMap<&'static str, &'static Theme>,
    renderer: ThemeRenderer,
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeManager {
    pub fn new() -> Self {
        let builtin_themes = THEMES.iter().map(|theme| (theme.id, theme)).collect();

        Self {
            builtin_themes,
            renderer: ThemeRenderer::new(),
        }
    }

    /// Builtin themes in catalog order.
    pub fn list_themes(&self) -> Vec<&'static Theme> {
        THEMES.iter().collect()
    }

    pub fn load_theme(&self, name: &str) -> Result<&'static Theme, ThemeError> {
        self.builtin_themes
            .get(name)
            .copied()
            .ok_or_else(|| ThemeError::NotFound(name.to_string()))
    }

    pub fn is_builtin(&self, name: &str) -> bool {
        self.builtin_themes.contains_key(name)
    }

    /// Render both color modes of a known theme and check them.
    pub fn validate_theme(&self, name: &str) -> Result<(), ThemeError> {
        let theme = self.load_theme(name)?;
        for dark_mode in [true, false] {
            ThemeRenderer::validate_prompt(&self.renderer.render_prompt(theme.id, dark_mode))?;
        }
        Ok(())
    }

    /// Prompt for any id; unknown ids fall back to the default theme.
    pub fn render_prompt(&self, name: &str, dark_mode: bool) -> String {
        self.renderer.render_prompt(name, dark_mode)
    }

    pub fn palette(&self, name: &str, dark_mode: bool) -> Palette {
        resolve_palette(name, dark_mode)
    }
}
