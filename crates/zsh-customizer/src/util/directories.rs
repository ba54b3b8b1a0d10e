use std::path::PathBuf;

use thiserror::Error;

/// Environment override for the key/value store location.
pub const STORE_ENV: &str = "ZSH_CUSTOMIZER_STORE";

const APP_DIR: &str = "zsh-customizer";
const STORE_FILE: &str = "store.json";

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("no local data directory is available on this platform")]
    NoDataDir,
}

/// The directory holding this tool's persistent state.
pub fn app_data_dir() -> Result<PathBuf, DirectoryError> {
    dirs::data_local_dir()
        .map(|dir| dir.join(APP_DIR))
        .ok_or(DirectoryError::NoDataDir)
}

/// Location of the key/value store: `override_path`, then
/// `$ZSH_CUSTOMIZER_STORE`, then the platform data directory.
pub fn store_path(override_path: Option<PathBuf>) -> Result<PathBuf, DirectoryError> {
    if let Some(path) = override_path {
        return Ok(path);
    }

    match std::env::var_os(STORE_ENV) {
        Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
        _ => Ok(app_data_dir()?.join(STORE_FILE)),
    }
}
