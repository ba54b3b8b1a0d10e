use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ThemeError {
    #[error("Theme '{0}' not found")]
    NotFound(String),

    #[error("Style opened at byte {0} is never reset")]
    UnclosedStyle(usize),

    #[error("Unknown variable: {0}")]
    UnresolvedVariable(String),
}
