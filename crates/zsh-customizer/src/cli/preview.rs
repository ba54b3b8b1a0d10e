use std::io::{
    Write,
    stderr,
    stdout,
};

use crossterm::queue;
use crossterm::style::{
    self,
    Color,
};
use eyre::Result;
use themes::resolve_palette;
use tracing::debug;

use super::{
    ModeArg,
    Session,
};
use crate::display::{
    TerminalOptions,
    TerminalPreview,
};

const FALLBACK_COLS: u16 = 80;

/// Parse a `#rrggbb` palette entry. Anything else (e.g. `rgba(...)`) has no
/// terminal equivalent.
fn hex_color(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |at: usize| u8::from_str_radix(&hex[at..at + 2], 16).ok();

    Some(Color::Rgb {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
    })
}

pub fn execute_preview(session: &Session, theme: Option<&str>, cols: Option<u16>) -> Result<()> {
    let state = session.state();
    let theme_id = theme.unwrap_or(&state.theme_id);
    let cols = cols.unwrap_or_else(|| crossterm::terminal::size().map_or(FALLBACK_COLS, |(cols, _)| cols));
    debug!(theme = theme_id, cols, "rendering preview");

    let mut preview = TerminalPreview::mount(TerminalOptions::default(), cols);
    preview.update(theme_id, &state.selected_plugin_ids, state.dark_mode);

    if let Some(error) = preview.error() {
        let mut err = stderr();
        queue!(
            err,
            style::SetForegroundColor(Color::Red),
            style::Print(format!("{error}\n")),
            style::SetForegroundColor(Color::Reset)
        )?;
        return Ok(err.flush()?);
    }

    let Some(surface) = preview.surface() else {
        return Ok(());
    };

    let mut out = stdout();
    if let Some(palette) = surface.palette() {
        let background = hex_color(&palette.background).unwrap_or(Color::Reset);
        let foreground = hex_color(&palette.foreground).unwrap_or(Color::Reset);
        let label = format!(" {theme_id} ({}) ", if state.dark_mode { "dark" } else { "light" });
        queue!(
            out,
            style::SetBackgroundColor(background),
            style::SetForegroundColor(foreground),
            style::Print(format!("{label:<width$}", width = usize::from(surface.cols()))),
            style::ResetColor,
            style::Print("\n"),
        )?;
    }

    for line in surface.lines() {
        queue!(out, style::Print(line), style::ResetColor, style::Print("\n"))?;
    }

    Ok(out.flush()?)
}

pub fn execute_palette(session: &Session, theme: Option<&str>, dark_mode: bool) -> Result<()> {
    let theme_id = theme.unwrap_or(&session.state().theme_id);
    let palette = resolve_palette(theme_id, dark_mode);

    let mut out = stdout();
    writeln!(out, "{}", serde_json::to_string_pretty(&palette)?)?;
    Ok(out.flush()?)
}

pub fn execute_mode(session: &mut Session, mode: Option<ModeArg>) -> Result<()> {
    match mode {
        Some(ModeArg::Dark) => session.apply(|state| state.set_dark_mode(true))?,
        Some(ModeArg::Light) => session.apply(|state| state.set_dark_mode(false))?,
        Some(ModeArg::Toggle) => session.apply(|state| {
            state.toggle_dark_mode();
        })?,
        None => {},
    }

    let mut out = stdout();
    let label = if session.state().dark_mode { "dark" } else { "light" };
    writeln!(out, "{label}")?;
    Ok(out.flush()?)
}
