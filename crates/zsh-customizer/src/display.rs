use themes::{
    Palette,
    render_prompt,
    resolve_palette,
};
use thiserror::Error;
use tracing::debug;
use unicode_width::UnicodeWidthStr;

const MIN_COLS: u16 = 2;
const DEFAULT_COLS: u16 = 80;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DisplayError {
    #[error("invalid terminal options: {0}")]
    InvalidOptions(String),

    #[error("terminal has been disposed")]
    Disposed,
}

/// Construction-time settings of a [`DisplaySurface`].
#[derive(Debug, Clone, PartialEq)]
pub struct TerminalOptions {
    pub rows: u16,
    pub font_family: Vec<String>,
    pub font_size: f32,
    pub line_height: f32,
    /// Lines kept above the visible rows.
    pub scrollback: usize,
    pub allow_transparency: bool,
    pub cursor_blink: bool,
}

impl Default for TerminalOptions {
    fn default() -> Self {
        Self {
            rows: 15,
            font_family: ["JetBrainsMono Nerd Font", "JetBrains Mono", "Fira Code", "Menlo", "monospace"]
                .iter()
                .map(|&family| family.to_string())
                .collect(),
            font_size: 14.0,
            line_height: 1.2,
            scrollback: 100,
            allow_transparency: true,
            cursor_blink: true,
        }
    }
}

impl TerminalOptions {
    fn validate(&self) -> Result<(), DisplayError> {
        if self.rows == 0 {
            return Err(DisplayError::InvalidOptions("rows must be positive".to_string()));
        }
        if self.font_size.is_nan() || self.font_size <= 0.0 {
            return Err(DisplayError::InvalidOptions("font size must be positive".to_string()));
        }
        if self.font_family.is_empty() {
            return Err(DisplayError::InvalidOptions("at least one font family is required".to_string()));
        }
        Ok(())
    }
}

/// An in-memory terminal screen.
///
/// Text is stored line by line with its control codes intact; `\n` starts a
/// new line and a lone `\r` moves back to column 0, so following text
/// overwrites the line in place. Overwriting counts chars, control codes
/// included.
#[derive(Debug)]
pub struct DisplaySurface {
    options: TerminalOptions,
    palette: Option<Palette>,
    lines: Vec<String>,
    /// Char offset of the cursor in the last line.
    column: usize,
    cols: u16,
    disposed: bool,
}

impl DisplaySurface {
    pub fn new(options: TerminalOptions) -> Result<Self, DisplayError> {
        options.validate()?;

        Ok(Self {
            options,
            palette: None,
            lines: vec![String::new()],
            column: 0,
            cols: DEFAULT_COLS,
            disposed: false,
        })
    }

    fn ensure_live(&self) -> Result<(), DisplayError> {
        if self.disposed { Err(DisplayError::Disposed) } else { Ok(()) }
    }

    /// Replace the active color scheme.
    pub fn set_palette(&mut self, palette: Palette) -> Result<(), DisplayError> {
        self.ensure_live()?;
        self.palette = Some(palette);
        Ok(())
    }

    pub fn write(&mut self, data: &str) -> Result<(), DisplayError> {
        self.ensure_live()?;

        let mut chars = data.chars().peekable();
        while let Some(ch) = chars.next() {
            match ch {
                '\r' if chars.peek() == Some(&'\n') => {},
                '\r' => self.column = 0,
                '\n' => {
                    self.lines.push(String::new());
                    self.column = 0;
                },
                _ => self.put_char(ch),
            }
        }

        let capacity = usize::from(self.options.rows) + self.options.scrollback;
        if self.lines.len() > capacity {
            let excess = self.lines.len() - capacity;
            self.lines.drain(..excess);
        }
        Ok(())
    }

    fn put_char(&mut self, ch: char) {
        let column = self.column;
        let line = self.current_line();
        match line.char_indices().nth(column) {
            Some((at, old)) => line.replace_range(at..at + old.len_utf8(), ch.encode_utf8(&mut [0; 4])),
            None => line.push(ch),
        }
        self.column += 1;
    }

    fn current_line(&mut self) -> &mut String {
        if self.lines.is_empty() {
            self.lines.push(String::new());
        }
        let last = self.lines.len() - 1;
        &mut self.lines[last]
    }

    /// Wipe the buffer, keeping the surface usable.
    pub fn clear(&mut self) -> Result<(), DisplayError> {
        self.ensure_live()?;
        self.lines.clear();
        self.lines.push(String::new());
        self.column = 0;
        Ok(())
    }

    /// Match the surface width to a container `container_cols` cells wide.
    pub fn fit(&mut self, container_cols: u16) -> Result<u16, DisplayError> {
        self.ensure_live()?;
        self.cols = container_cols.max(MIN_COLS);
        Ok(self.cols)
    }

    pub fn dispose(&mut self) {
        self.lines = Vec::new();
        self.palette = None;
        self.disposed = true;
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn options(&self) -> &TerminalOptions {
        &self.options
    }

    pub fn palette(&self) -> Option<&Palette> {
        self.palette.as_ref()
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Screen rows the buffer occupies once wrapped at the current width.
    pub fn wrapped_rows(&self) -> usize {
        let cols = usize::from(self.cols);
        self.lines
            .iter()
            .map(|line| visible_width(line).div_ceil(cols).max(1))
            .sum()
    }

    /// The buffer with control codes removed.
    pub fn plain_text(&self) -> String {
        strip_ansi_escapes::strip_str(self.lines.join("\n"))
    }
}

/// Printed width of `line`, ignoring control codes.
pub fn visible_width(line: &str) -> usize {
    strip_ansi_escapes::strip_str(line).width()
}

/// A display surface showing the selected theme's prompt.
///
/// Failures never propagate: they are kept as a message for the caller to
/// show inline.
#[derive(Debug)]
pub struct TerminalPreview {
    surface: Option<DisplaySurface>,
    has_written: bool,
    container_cols: u16,
    error: Option<String>,
}

impl TerminalPreview {
    pub fn mount(options: TerminalOptions, container_cols: u16) -> Self {
        let (surface, error) = match DisplaySurface::new(options) {
            Ok(surface) => (Some(surface), None),
            Err(err) => (None, Some(format!("Terminal initialization error: {err}"))),
        };

        Self {
            surface,
            has_written: false,
            container_cols,
            error,
        }
    }

    /// Redraw for a new selection. Everything written by earlier updates is
    /// replaced.
    pub fn update(&mut self, theme_id: &str, plugin_ids: &[String], dark_mode: bool) {
        let Some(surface) = self.surface.as_mut() else {
            debug!("skipping preview update, terminal not mounted");
            return;
        };

        let result = Self::draw(surface, self.has_written, theme_id, plugin_ids, dark_mode)
            .and_then(|()| surface.fit(self.container_cols));

        match result {
            Ok(_) => self.has_written = true,
            Err(err) => self.error = Some(format!("Terminal update error: {err}")),
        }
    }

    fn draw(
        surface: &mut DisplaySurface,
        clear_first: bool,
        theme_id: &str,
        plugin_ids: &[String],
        dark_mode: bool,
    ) -> Result<(), DisplayError> {
        surface.set_palette(resolve_palette(theme_id, dark_mode))?;
        if clear_first {
            surface.clear()?;
        }

        let plugins = if plugin_ids.is_empty() {
            "(none)".to_string()
        } else {
            plugin_ids.join(", ")
        };

        surface.write("$ Welcome to Zsh Customizer!\r\n")?;
        surface.write(&format!("$ Theme: {theme_id}\r\n"))?;
        surface.write(&format!("$ Plugins: {plugins}\r\n"))?;
        surface.write("$ \r\n")?;
        surface.write(&render_prompt(theme_id, dark_mode))
    }

    pub fn resize(&mut self, container_cols: u16) {
        self.container_cols = container_cols;
        if let Some(surface) = self.surface.as_mut() {
            if let Err(err) = surface.fit(container_cols) {
                self.error = Some(format!("Terminal resize error: {err}"));
            }
        }
    }

    pub fn unmount(&mut self) {
        if let Some(mut surface) = self.surface.take() {
            surface.dispose();
        }
        self.has_written = false;
    }

    pub fn surface(&self) -> Option<&DisplaySurface> {
        self.surface.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl Drop for TerminalPreview {
    fn drop(&mut self) {
        self.unmount();
    }
}
