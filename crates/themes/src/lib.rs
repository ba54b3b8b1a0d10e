pub mod ansi;
pub mod catalog;
pub mod error;
pub mod layout;
pub mod manager;
pub mod palette;
pub mod renderer;

pub use catalog::{
    THEMES,
    Theme,
    find_theme,
};
pub use error::ThemeError;
pub use manager::ThemeManager;
pub use palette::{
    Palette,
    Role,
    resolve_palette,
};
pub use renderer::{
    ThemeRenderer,
    render_prompt,
};

/// Theme used for fresh selections and for any unrecognized id.
pub const DEFAULT_THEME: &str = "robbyrussell";
