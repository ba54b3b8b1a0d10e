use regex::Regex;
use tracing::debug;

use crate::DEFAULT_THEME;
use crate::ansi::{
    self,
    BOLD,
    Ink,
    RESET,
};
use crate::error::ThemeError;
use crate::layout::{
    Block,
    LAYOUTS,
    Layout,
    Piece,
    ThemeLayout,
};

lazy_static::lazy_static! {
    static ref SGR: Regex = Regex::new(r"\x1b\[([0-9;]*)m").expect("valid SGR pattern");
    static ref VARIABLE: Regex = Regex::new(r"\$\{([A-Z_]+)\}").expect("valid variable pattern");
}

/// Renders the simulated prompt of a theme.
///
/// Identity values are fixed: nothing is read from the environment, so the
/// same `(theme, mode)` pair always yields the same bytes.
pub struct ThemeRenderer {
    user: &'static str,
    host: &'static str,
    branch: &'static str,
}

impl Default for ThemeRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeRenderer {
    pub fn new() -> Self {
        Self {
            user: "user",
            host: "host",
            branch: "main",
        }
    }

    pub fn render_prompt(&self, theme_id: &str, dark_mode: bool) -> String {
        let theme = match LAYOUTS.get(theme_id) {
            Some(theme) => theme,
            None => {
                debug!(theme_id, "no prompt layout, rendering {}", DEFAULT_THEME);
                &LAYOUTS[DEFAULT_THEME]
            },
        };

        match theme.layout {
            Layout::Powerline(blocks) => self.render_powerline(theme, blocks, dark_mode),
            Layout::Inline(pieces) => self.render_inline(theme, pieces, dark_mode),
        }
    }

    fn render_powerline(&self, theme: &ThemeLayout, blocks: &[Block], dark_mode: bool) -> String {
        let mut out = String::new();

        for (index, block) in blocks.iter().enumerate() {
            let bg = block.bg.resolve(dark_mode);
            let fg = block.fg.resolve(dark_mode);
            let text = self.substitute(block.text, theme.path);
            out.push_str(&format!("{}{}{BOLD} {text} {RESET}", bg.bg(), fg.fg()));

            // The arrow takes the block it leaves as its foreground and
            // the block it enters (or the terminal itself) as background.
            let next_bg = blocks
                .get(index + 1)
                .map_or(Ink::TERMINAL_BG, |next| next.bg)
                .resolve(dark_mode);
            out.push_str(&format!(
                "{}{}{}{RESET}",
                next_bg.bg(),
                bg.fg(),
                ansi::POWERLINE_ARROW
            ));
        }

        out.push(' ');
        out
    }

    fn render_inline(&self, theme: &ThemeLayout, pieces: &[Piece], dark_mode: bool) -> String {
        let mut out = String::new();

        for piece in pieces {
            match *piece {
                Piece::Styled { text, fg, bold } => {
                    out.push_str(fg.resolve(dark_mode).fg());
                    if bold {
                        out.push_str(BOLD);
                    }
                    out.push_str(&self.substitute(text, theme.path));
                    out.push_str(RESET);
                },
                Piece::Text(text) => out.push_str(text),
            }
        }

        out
    }

    fn substitute(&self, template: &str, path: &str) -> String {
        template
            .replace("${USER}", self.user)
            .replace("${HOST}", self.host)
            .replace("${PWD}", path)
            .replace("${GIT_BRANCH}", self.branch)
            .replace("${GIT_SYMBOL}", ansi::GIT_SYMBOL)
    }

    /// Check that a rendered prompt leaves no style open and no variable
    /// unsubstituted.
    pub fn validate_prompt(prompt: &str) -> Result<(), ThemeError> {
        if let Some(caps) = VARIABLE.captures(prompt) {
            return Err(ThemeError::UnresolvedVariable(caps[1].to_string()));
        }

        let mut open_at = None;
        for caps in SGR.captures_iter(prompt) {
            let params = &caps[1];
            if params.is_empty() || params == "0" {
                open_at = None;
            } else if open_at.is_none() {
                open_at = caps.get(0).map(|m| m.start());
            }
        }

        match open_at {
            Some(position) => Err(ThemeError::UnclosedStyle(position)),
            None => Ok(()),
        }
    }
}

/// Render the simulated prompt for `theme_id`. Unknown ids render the
/// default theme.
pub fn render_prompt(theme_id: &str, dark_mode: bool) -> String {
    ThemeRenderer::new().render_prompt(theme_id, dark_mode)
}
