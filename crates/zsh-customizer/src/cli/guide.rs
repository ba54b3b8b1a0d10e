use std::io::{
    IsTerminal,
    Write,
    stdin,
    stdout,
};

use crossterm::queue;
use crossterm::style::{
    self,
    Attribute,
    Color,
};
use dialoguer::Select;
use eyre::{
    Result,
    bail,
};

use super::Session;
use crate::storage::mark_guided;

const STEPS: &[(&str, &str)] = &[
    (
        "Welcome to Zsh Customizer",
        "Let's set up your preferred color mode. It decides how previews and palettes look.",
    ),
    (
        "Choose your preferred mode",
        "Pick light or dark mode. You can change it later with `zsh-customizer mode`.",
    ),
    (
        "Understanding the preview",
        "`zsh-customizer preview` renders your theme the way your terminal will show it, using the selected mode.",
    ),
];

fn print_step(out: &mut impl Write, index: usize) -> Result<()> {
    let (title, content) = STEPS[index];
    queue!(
        out,
        style::SetForegroundColor(Color::Blue),
        style::SetAttribute(Attribute::Bold),
        style::Print(format!("\n[{}/{}] {title}\n", index + 1, STEPS.len())),
        style::SetAttribute(Attribute::Reset),
        style::SetForegroundColor(Color::Reset),
        style::Print(format!("{content}\n")),
    )?;
    Ok(out.flush()?)
}

fn choose_mode(session: &mut Session) -> Result<()> {
    if !stdin().is_terminal() {
        return Ok(());
    }

    let current = if session.state().dark_mode { 1 } else { 0 };
    let selection = match Select::with_theme(&crate::util::dialoguer_theme())
        .with_prompt("Color mode")
        .items(&["Light mode", "Dark mode"])
        .default(current)
        .interact_on_opt(&dialoguer::console::Term::stdout())
    {
        Ok(selection) => selection,
        Err(dialoguer::Error::IO(ref err)) if err.kind() == std::io::ErrorKind::Interrupted => None,
        Err(err) => bail!("Failed to choose a color mode: {err}"),
    };

    match selection {
        Some(index) => session.apply(|state| state.set_dark_mode(index == 1)),
        None => Ok(()),
    }
}

/// Walk through the onboarding steps, then remember that the guide was seen.
pub fn execute_guide(session: &mut Session) -> Result<()> {
    let mut out = stdout();

    for index in 0..STEPS.len() {
        print_step(&mut out, index)?;
        if index == 1 {
            choose_mode(session)?;
        }
    }

    mark_guided(session.store_mut())?;

    let mode = if session.state().dark_mode { "dark" } else { "light" };
    queue!(
        out,
        style::SetForegroundColor(Color::Green),
        style::Print(format!("\n✓ All set, using {mode} mode. Try `zsh-customizer themes list` next.\n")),
        style::SetForegroundColor(Color::Reset)
    )?;
    Ok(out.flush()?)
}
