use serde::Serialize;

/// Static descriptor of an Oh My Zsh theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Plain-text sketch of the prompt, shown on a theme card.
    pub preview: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub powerline_symbol: Option<&'static str>,
}

impl Theme {
    const fn plain(id: &'static str, name: &'static str, description: &'static str, preview: &'static str) -> Self {
        Self {
            id,
            name,
            description,
            preview,
            bg_color: None,
            text_color: None,
            accent_color: None,
            powerline_symbol: None,
        }
    }
}

pub const THEMES: &[Theme] = &[
    Theme {
        id: "robbyrussell",
        name: "Robbyrussell (Default)",
        description: "The default theme - clean, simple, compatible",
        preview: "➜  ~ git:(main)",
        bg_color: Some("#1a1b26"),
        text_color: Some("#a9b1d6"),
        accent_color: Some("#7aa2f7"),
        powerline_symbol: None,
    },
    Theme {
        id: "agnoster",
        name: "Agnoster",
        description: "A popular powerline-based theme",
        preview: "user@host ~/p/zsh-customizer git:(main) ",
        bg_color: Some("#1a1b26"),
        text_color: Some("#c0caf5"),
        accent_color: Some("#bb9af7"),
        powerline_symbol: Some("\u{e0b0}"),
    },
    Theme::plain(
        "avit",
        "Avit",
        "Minimalist theme with git info",
        "user@host:~/p/zsh-customizer main ❯",
    ),
    Theme::plain(
        "bira",
        "Bira",
        "Two-line prompt with ruby version",
        "user@host:~/projects\n➜",
    ),
    Theme::plain(
        "bureau",
        "Bureau",
        "Modern and informative theme",
        "user@host ~/p/zsh-customizer [main] ❯",
    ),
    Theme::plain("candy", "Candy", "Sweet and colorful theme", "~/p/zsh-customizer main ❯"),
    Theme::plain("clean", "Clean", "Simple and uncluttered look", "user@host:~>"),
    Theme::plain("dallas", "Dallas", "Minimal with git branch", "user@host:~/projects (main) $"),
    Theme::plain("fino", "Fino", "Simple yet informative", "~/p/zsh-customizer [main] ∴"),
    Theme::plain(
        "gnzh",
        "Gnzh",
        "Fancy prompt with git info",
        "user@host ~/p/zsh-customizer (main) ❯",
    ),
];

pub fn find_theme(id: &str) -> Option<&'static Theme> {
    THEMES.iter().find(|theme| theme.id == id)
}
