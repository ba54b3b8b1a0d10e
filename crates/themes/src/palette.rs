use std::collections::HashMap;

use serde::{
    Deserialize,
    Serialize,
};
use strum::{
    AsRefStr,
    EnumIter,
};
use tracing::debug;

use crate::DEFAULT_THEME;

/// Named color roles of a terminal color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
#[strum(serialize_all = "camelCase")]
pub enum Role {
    Background,
    Foreground,
    Cursor,
    SelectionBackground,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

/// A complete color scheme. Every role always holds a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub background: String,
    pub foreground: String,
    pub cursor: String,
    pub selection_background: String,
    pub black: String,
    pub red: String,
    pub green: String,
    pub yellow: String,
    pub blue: String,
    pub magenta: String,
    pub cyan: String,
    pub white: String,
    pub bright_black: String,
    pub bright_red: String,
    pub bright_green: String,
    pub bright_yellow: String,
    pub bright_blue: String,
    pub bright_magenta: String,
    pub bright_cyan: String,
    pub bright_white: String,
}

impl Palette {
    /// Base scheme, a function of the color mode alone.
    pub fn base(dark_mode: bool) -> Self {
        let pick = |dark: &str, light: &str| (if dark_mode { dark } else { light }).to_owned();

        Self {
            background: pick("#1e1e2e", "#ffffff"),
            foreground: pick("#cad3f5", "#4c4f69"),
            cursor: pick("#f5e0dc", "#dc8a78"),
            selection_background: pick("rgba(91, 96, 120, 0.5)", "rgba(172, 176, 190, 0.5)"),
            black: pick("#5b6078", "#5c5f77"),
            red: pick("#ed8796", "#d20f39"),
            green: pick("#a6da95", "#40a02b"),
            yellow: pick("#eed49f", "#df8e1d"),
            blue: pick("#8aadf4", "#1e66f5"),
            magenta: pick("#f5bde6", "#ea76cb"),
            cyan: pick("#8bd5ca", "#179299"),
            white: pick("#a5adce", "#bcc0cc"),
            bright_black: pick("#6e738d", "#6c6f85"),
            bright_red: pick("#ed8796", "#d20f39"),
            bright_green: pick("#a6da95", "#40a02b"),
            bright_yellow: pick("#eed49f", "#df8e1d"),
            bright_blue: pick("#8aadf4", "#1e66f5"),
            bright_magenta: pick("#f5bde6", "#ea76cb"),
            bright_cyan: pick("#8bd5ca", "#179299"),
            bright_white: pick("#cad3f5", "#4c4f69"),
        }
    }

    pub fn get(&self, role: Role) -> &str {
        match role {
            Role::Background => &self.background,
            Role::Foreground => &self.foreground,
            Role::Cursor => &self.cursor,
            Role::SelectionBackground => &self.selection_background,
            Role::Black => &self.black,
            Role::Red => &self.red,
            Role::Green => &self.green,
            Role::Yellow => &self.yellow,
            Role::Blue => &self.blue,
            Role::Magenta => &self.magenta,
            Role::Cyan => &self.cyan,
            Role::White => &self.white,
            Role::BrightBlack => &self.bright_black,
            Role::BrightRed => &self.bright_red,
            Role::BrightGreen => &self.bright_green,
            Role::BrightYellow => &self.bright_yellow,
            Role::BrightBlue => &self.bright_blue,
            Role::BrightMagenta => &self.bright_magenta,
            Role::BrightCyan => &self.bright_cyan,
            Role::BrightWhite => &self.bright_white,
        }
    }

    fn slot_mut(&mut self, role: Role) -> &mut String {
        match role {
            Role::Background => &mut self.background,
            Role::Foreground => &mut self.foreground,
            Role::Cursor => &mut self.cursor,
            Role::SelectionBackground => &mut self.selection_background,
            Role::Black => &mut self.black,
            Role::Red => &mut self.red,
            Role::Green => &mut self.green,
            Role::Yellow => &mut self.yellow,
            Role::Blue => &mut self.blue,
            Role::Magenta => &mut self.magenta,
            Role::Cyan => &mut self.cyan,
            Role::White => &mut self.white,
            Role::BrightBlack => &mut self.bright_black,
            Role::BrightRed => &mut self.bright_red,
            Role::BrightGreen => &mut self.bright_green,
            Role::BrightYellow => &mut self.bright_yellow,
            Role::BrightBlue => &mut self.bright_blue,
            Role::BrightMagenta => &mut self.bright_magenta,
            Role::BrightCyan => &mut self.bright_cyan,
            Role::BrightWhite => &mut self.bright_white,
        }
    }

    /// Shadow the named roles, leaving every other role untouched.
    fn layer(mut self, overrides: &[Override], dark_mode: bool) -> Self {
        for entry in overrides {
            let value = if dark_mode { entry.dark } else { entry.light };
            *self.slot_mut(entry.role) = value.to_owned();
        }
        self
    }
}

/// One theme-specific role value, per color mode.
#[derive(Debug, Clone, Copy)]
struct Override {
    role: Role,
    dark: &'static str,
    light: &'static str,
}

const fn ov(role: Role, dark: &'static str, light: &'static str) -> Override {
    Override { role, dark, light }
}

const AGNOSTER: &[Override] = &[
    ov(Role::Background, "#2d2d2d", "#f0f0f0"),
    ov(Role::Foreground, "#e0e0e0", "#333333"),
    ov(Role::Blue, "#589df6", "#005fff"),
    ov(Role::Black, "#444444", "#bbbbbb"),
    ov(Role::Green, "#9ece6a", "#40a02b"),
    ov(Role::White, "#ffffff", "#000000"),
    ov(Role::BrightBlack, "#000000", "#ffffff"),
];

const ROBBYRUSSELL: &[Override] = &[
    ov(Role::Cyan, "#89b4fa", "#1e66f5"),
    ov(Role::Red, "#f38ba8", "#d20f39"),
];

const AVIT: &[Override] = &[
    ov(Role::Green, "#a6e3a1", "#40a02b"),
    ov(Role::Blue, "#89b4fa", "#1e66f5"),
    ov(Role::Cyan, "#94e2d5", "#179299"),
];

const BIRA: &[Override] = &[ov(Role::Yellow, "#f9e2af", "#df8e1d")];

lazy_static::lazy_static! {
    static ref OVERRIDES: HashMap<&'static str, &'static [Override]> = {
        let mut table: HashMap<&'static str, &'static [Override]> = HashMap::new();
        table.insert("agnoster", AGNOSTER);
        table.insert("robbyrussell", ROBBYRUSSELL);
        table.insert("avit", AVIT);
        table.insert("bira", BIRA);
        table
    };
}

/// Resolve the full color scheme for a theme in the given mode.
///
/// Themes without an override table borrow the default theme's table, so
/// unknown ids still get that theme's colors rather than the bare base.
pub fn resolve_palette(theme_id: &str, dark_mode: bool) -> Palette {
    let overrides = match OVERRIDES.get(theme_id) {
        Some(table) => *table,
        None => {
            debug!(theme_id, "no palette overrides, using {}", DEFAULT_THEME);
            OVERRIDES[DEFAULT_THEME]
        },
    };

    Palette::base(dark_mode).layer(overrides, dark_mode)
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_every_role_resolves_for_known_and_unknown_themes() {
        for theme_id in ["agnoster", "robbyrussell", "avit", "bira", "gnzh", "nonexistent-theme", ""] {
            for dark_mode in [true, false] {
                let palette = resolve_palette(theme_id, dark_mode);
                for role in Role::iter() {
                    assert!(
                        !palette.get(role).is_empty(),
                        "{theme_id}/{dark_mode}: role {} is empty",
                        role.as_ref()
                    );
                }
            }
        }
    }

    #[test]
    fn test_overrides_shadow_only_named_roles() {
        let base = Palette::base(true);
        let agnoster = resolve_palette("agnoster", true);

        assert_eq!(agnoster.background, "#2d2d2d");
        assert_eq!(agnoster.bright_black, "#000000");
        assert_eq!(agnoster.magenta, base.magenta);
        assert_eq!(agnoster.cursor, base.cursor);
        assert_eq!(agnoster.bright_white, base.bright_white);
    }

    #[test]
    fn test_light_and_dark_bases_differ() {
        let dark = Palette::base(true);
        let light = Palette::base(false);
        assert_eq!(dark.background, "#1e1e2e");
        assert_eq!(light.background, "#ffffff");
        assert_ne!(dark.foreground, light.foreground);
    }

    #[test]
    fn test_unknown_theme_uses_default_theme_overrides() {
        let fallback = resolve_palette("nonexistent-theme", false);
        let default = resolve_palette(DEFAULT_THEME, false);
        assert_eq!(fallback, default);
        assert_ne!(fallback, Palette::base(false));
    }

    #[test]
    fn test_catalog_theme_without_overrides_uses_default_theme_overrides() {
        assert!(!OVERRIDES.contains_key("dallas"));
        for dark_mode in [true, false] {
            assert_eq!(resolve_palette("dallas", dark_mode), resolve_palette(DEFAULT_THEME, dark_mode));
            assert_ne!(resolve_palette("dallas", dark_mode), Palette::base(dark_mode));
        }
    }

    #[test]
    fn test_palette_serializes_with_camel_case_roles() {
        let json = serde_json::to_value(resolve_palette("bira", true)).unwrap();
        assert_eq!(json["yellow"], "#f9e2af");
        assert_eq!(json["selectionBackground"], "rgba(91, 96, 120, 0.5)");
        for role in Role::iter() {
            assert!(json.get(role.as_ref()).is_some(), "missing {}", role.as_ref());
        }
    }
}
