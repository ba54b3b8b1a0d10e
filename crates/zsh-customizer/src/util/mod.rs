pub mod directories;

use dialoguer::theme::ColorfulTheme;

pub fn dialoguer_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: dialoguer::console::style("?".to_string()).for_stderr().magenta(),
        ..ColorfulTheme::default()
    }
}
