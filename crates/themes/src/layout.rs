//! Per-theme prompt layouts.
//!
//! Segment text may reference `${USER}`, `${HOST}`, `${PWD}`,
//! `${GIT_BRANCH}` and `${GIT_SYMBOL}`; the renderer fills them in.

use std::collections::HashMap;

use crate::ansi::{
    Ansi,
    Ink,
};

/// A filled powerline block: `<bg><fg><bold> text <reset>`.
#[derive(Debug, Clone, Copy)]
pub struct Block {
    pub text: &'static str,
    pub fg: Ink,
    pub bg: Ink,
}

/// One piece of an inline prompt.
#[derive(Debug, Clone, Copy)]
pub enum Piece {
    /// Colored text, closed by a reset.
    Styled { text: &'static str, fg: Ink, bold: bool },
    /// Uncolored literal text (separators, spacing, line breaks).
    Text(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub enum Layout {
    /// Blocks chained by arrows that blend adjacent backgrounds.
    Powerline(&'static [Block]),
    Inline(&'static [Piece]),
}

#[derive(Debug, Clone, Copy)]
pub struct ThemeLayout {
    /// Working directory shown by the simulated prompt.
    pub path: &'static str,
    pub layout: Layout,
}

const fn fixed(slot: Ansi) -> Ink {
    Ink::Fixed(slot)
}

const fn styled(text: &'static str, fg: Ink) -> Piece {
    Piece::Styled { text, fg, bold: false }
}

const fn bold(text: &'static str, fg: Ink) -> Piece {
    Piece::Styled { text, fg, bold: true }
}

const SPACE: Piece = Piece::Text(" ");

const AGNOSTER: &[Block] = &[
    Block {
        text: "${USER}@${HOST}",
        fg: fixed(Ansi::White),
        bg: fixed(Ansi::Blue),
    },
    Block {
        text: "${PWD}",
        fg: fixed(Ansi::BrightWhite),
        bg: Ink::Mode {
            dark: Ansi::BrightBlack,
            light: Ansi::White,
        },
    },
    Block {
        text: "${GIT_SYMBOL} ${GIT_BRANCH}",
        fg: fixed(Ansi::BrightBlack),
        bg: fixed(Ansi::Green),
    },
];

// The path renders blue on light backgrounds: the light palette's cyan
// override equals the base blue.
const ROBBYRUSSELL: &[Piece] = &[
    bold("${PWD}", Ink::Mode {
        dark: Ansi::Cyan,
        light: Ansi::Blue,
    }),
    SPACE,
    styled("${GIT_SYMBOL} git:(${GIT_BRANCH})", fixed(Ansi::Red)),
    SPACE,
    bold("❯", fixed(Ansi::Red)),
    SPACE,
];

const AVIT: &[Piece] = &[
    styled("${USER}@${HOST}", fixed(Ansi::Green)),
    Piece::Text(":"),
    styled("${PWD}", fixed(Ansi::Blue)),
    SPACE,
    styled("${GIT_SYMBOL} git:(${GIT_BRANCH})", fixed(Ansi::Cyan)),
    SPACE,
    styled(">", Ink::DEFAULT),
    SPACE,
];

const BIRA: &[Piece] = &[
    styled("${USER}@${HOST}", Ink::DEFAULT),
    Piece::Text(":"),
    styled("${PWD}", fixed(Ansi::Yellow)),
    Piece::Text("\r\n"),
    bold("➜", Ink::DEFAULT),
    SPACE,
];

const BUREAU: &[Piece] = &[
    bold("${USER}@${HOST}", fixed(Ansi::Green)),
    SPACE,
    bold("${PWD}", Ink::DEFAULT),
    SPACE,
    styled("[${GIT_BRANCH}]", fixed(Ansi::Yellow)),
    SPACE,
    bold("❯", fixed(Ansi::Green)),
    SPACE,
];

const CANDY: &[Piece] = &[
    bold("${PWD}", fixed(Ansi::Blue)),
    SPACE,
    styled("${GIT_BRANCH}", fixed(Ansi::Magenta)),
    SPACE,
    bold("❯", fixed(Ansi::Green)),
    SPACE,
];

const CLEAN: &[Piece] = &[
    styled("${USER}@${HOST}", Ink::DEFAULT),
    Piece::Text(":"),
    styled("${PWD}", fixed(Ansi::Cyan)),
    bold(">", Ink::DEFAULT),
    SPACE,
];

const DALLAS: &[Piece] = &[
    styled("${USER}@${HOST}", fixed(Ansi::Cyan)),
    Piece::Text(":"),
    styled("${PWD}", fixed(Ansi::Green)),
    SPACE,
    styled("(${GIT_BRANCH})", fixed(Ansi::Yellow)),
    SPACE,
    styled("$", Ink::DEFAULT),
    SPACE,
];

const FINO: &[Piece] = &[
    bold("${PWD}", fixed(Ansi::Green)),
    SPACE,
    styled("[${GIT_BRANCH}]", fixed(Ansi::Magenta)),
    SPACE,
    bold("∴", fixed(Ansi::Yellow)),
    SPACE,
];

const GNZH: &[Piece] = &[
    bold("${USER}@${HOST}", fixed(Ansi::Green)),
    SPACE,
    bold("${PWD}", fixed(Ansi::Blue)),
    SPACE,
    styled("(${GIT_BRANCH})", fixed(Ansi::Yellow)),
    SPACE,
    bold("❯", fixed(Ansi::Magenta)),
    SPACE,
];

const LONG_PATH: &str = "~/p/zsh-customizer";
const PROJECTS_PATH: &str = "~/projects";

lazy_static::lazy_static! {
    pub(crate) static ref LAYOUTS: HashMap<&'static str, ThemeLayout> = {
        let entries = [
            ("agnoster", "~", Layout::Powerline(AGNOSTER)),
            ("robbyrussell", "~", Layout::Inline(ROBBYRUSSELL)),
            ("avit", "~", Layout::Inline(AVIT)),
            ("bira", PROJECTS_PATH, Layout::Inline(BIRA)),
            ("bureau", LONG_PATH, Layout::Inline(BUREAU)),
            ("candy", LONG_PATH, Layout::Inline(CANDY)),
            ("clean", "~", Layout::Inline(CLEAN)),
            ("dallas", PROJECTS_PATH, Layout::Inline(DALLAS)),
            ("fino", LONG_PATH, Layout::Inline(FINO)),
            ("gnzh", LONG_PATH, Layout::Inline(GNZH)),
        ];

        entries
            .into_iter()
            .map(|(id, path, layout)| (id, ThemeLayout { path, layout }))
            .collect()
    };
}

/// Layout for a theme id, if the theme has one of its own.
pub fn layout_for(theme_id: &str) -> Option<&'static ThemeLayout> {
    LAYOUTS.get(theme_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::THEMES;

    #[test]
    fn test_every_catalog_theme_has_a_layout() {
        for theme in THEMES {
            assert!(layout_for(theme.id).is_some(), "no layout for {}", theme.id);
        }
    }

    #[test]
    fn test_default_theme_has_a_layout() {
        assert!(layout_for(crate::DEFAULT_THEME).is_some());
    }
}
