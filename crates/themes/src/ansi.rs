//! Literal SGR control codes used by the prompt renderer.
//!
//! The renderer never derives codes from palette hex values; each theme
//! layout names the slots it wants and these tables turn them into bytes.

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

// Foreground
pub const FG_BLACK: &str = "\x1b[30m";
pub const FG_RED: &str = "\x1b[31m";
pub const FG_GREEN: &str = "\x1b[32m";
pub const FG_YELLOW: &str = "\x1b[33m";
pub const FG_BLUE: &str = "\x1b[34m";
pub const FG_MAGENTA: &str = "\x1b[35m";
pub const FG_CYAN: &str = "\x1b[36m";
pub const FG_WHITE: &str = "\x1b[37m";
pub const FG_BRIGHT_BLACK: &str = "\x1b[90m";
pub const FG_BRIGHT_WHITE: &str = "\x1b[97m";

// Background
pub const BG_BLACK: &str = "\x1b[40m";
pub const BG_RED: &str = "\x1b[41m";
pub const BG_GREEN: &str = "\x1b[42m";
pub const BG_YELLOW: &str = "\x1b[43m";
pub const BG_BLUE: &str = "\x1b[44m";
pub const BG_MAGENTA: &str = "\x1b[45m";
pub const BG_CYAN: &str = "\x1b[46m";
pub const BG_WHITE: &str = "\x1b[47m";
pub const BG_BRIGHT_BLACK: &str = "\x1b[100m";
pub const BG_BRIGHT_WHITE: &str = "\x1b[107m";

// Glyphs (Nerd Font code points)
pub const GIT_SYMBOL: &str = "\u{e0a0}";
pub const POWERLINE_ARROW: &str = "\u{e0b0}";
pub const SIMPLE_ARROW: &str = "❯";

/// A terminal color slot the renderer can address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ansi {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightWhite,
}

impl Ansi {
    pub fn fg(self) -> &'static str {
        match self {
            Self::Black => FG_BLACK,
            Self::Red => FG_RED,
            Self::Green => FG_GREEN,
            Self::Yellow => FG_YELLOW,
            Self::Blue => FG_BLUE,
            Self::Magenta => FG_MAGENTA,
            Self::Cyan => FG_CYAN,
            Self::White => FG_WHITE,
            Self::BrightBlack => FG_BRIGHT_BLACK,
            Self::BrightWhite => FG_BRIGHT_WHITE,
        }
    }

    pub fn bg(self) -> &'static str {
        match self {
            Self::Black => BG_BLACK,
            Self::Red => BG_RED,
            Self::Green => BG_GREEN,
            Self::Yellow => BG_YELLOW,
            Self::Blue => BG_BLUE,
            Self::Magenta => BG_MAGENTA,
            Self::Cyan => BG_CYAN,
            Self::White => BG_WHITE,
            Self::BrightBlack => BG_BRIGHT_BLACK,
            Self::BrightWhite => BG_BRIGHT_WHITE,
        }
    }
}

/// A color choice that may depend on the color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ink {
    Fixed(Ansi),
    Mode { dark: Ansi, light: Ansi },
}

impl Ink {
    /// Text color of the terminal itself: bright white on dark, black on light.
    pub const DEFAULT: Ink = Ink::Mode {
        dark: Ansi::BrightWhite,
        light: Ansi::Black,
    };
    /// Base background of the terminal, where the last powerline arrow lands.
    pub const TERMINAL_BG: Ink = Ink::Mode {
        dark: Ansi::Black,
        light: Ansi::White,
    };

    pub fn resolve(self, dark_mode: bool) -> Ansi {
        match self {
            Self::Fixed(slot) => slot,
            Self::Mode { dark, light } => {
                if dark_mode {
                    dark
                } else {
                    light
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bright_variants_use_high_codes() {
        assert_eq!(Ansi::BrightBlack.fg(), "\x1b[90m");
        assert_eq!(Ansi::BrightBlack.bg(), "\x1b[100m");
        assert_eq!(Ansi::BrightWhite.fg(), "\x1b[97m");
        assert_eq!(Ansi::BrightWhite.bg(), "\x1b[107m");
    }

    #[test]
    fn test_default_ink_follows_mode() {
        assert_eq!(Ink::DEFAULT.resolve(true), Ansi::BrightWhite);
        assert_eq!(Ink::DEFAULT.resolve(false), Ansi::Black);
        assert_eq!(Ink::Fixed(Ansi::Red).resolve(false), Ansi::Red);
    }
}
