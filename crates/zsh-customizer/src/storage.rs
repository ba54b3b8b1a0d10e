use std::collections::BTreeMap;
use std::path::{
    Path,
    PathBuf,
};

use thiserror::Error;
use tracing::{
    debug,
    warn,
};

use crate::state::SelectionState;

pub const THEME_KEY: &str = "zsh-theme";
pub const PLUGINS_KEY: &str = "zsh-plugins";
pub const DARK_MODE_KEY: &str = "darkMode";
pub const GUIDED_KEY: &str = "themeGuided";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Durable string key/value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// A JSON object on disk, rewritten on every change.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`. A missing file is an empty store; a file
    /// that isn't a JSON object of strings is logged and treated as empty.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(entries) => entries,
                Err(err) => {
                    warn!(path = %path.display(), %err, "ignoring unreadable store");
                    BTreeMap::new()
                },
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(StorageError::Io { path, source }),
        };

        debug!(path = %path.display(), keys = entries.len(), "opened store");
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StorageError> {
        let io_err = |source| StorageError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let text = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&self.path, text).map_err(io_err)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.entries.get(key).is_some_and(|current| current == value) {
            return Ok(());
        }
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

/// Restore the persisted part of the selection, keeping defaults for
/// anything missing or malformed.
pub fn load_selection(store: &mut dyn KeyValueStore) -> SelectionState {
    let mut state = SelectionState::default();

    if let Some(theme_id) = store.get(THEME_KEY).filter(|id| !id.is_empty()) {
        state.theme_id = theme_id;
    }

    if let Some(raw) = store.get(PLUGINS_KEY) {
        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(plugin_ids) => state.selected_plugin_ids = plugin_ids,
            Err(err) => {
                warn!(%err, value = %raw, "failed to parse saved plugins, using defaults");
                if let Err(err) = store.remove(PLUGINS_KEY) {
                    warn!(%err, "failed to clear saved plugins");
                }
            },
        }
    }

    if let Some(raw) = store.get(DARK_MODE_KEY) {
        match serde_json::from_str::<bool>(&raw) {
            Ok(dark_mode) => state.dark_mode = dark_mode,
            Err(err) => warn!(%err, value = %raw, "failed to parse saved color mode"),
        }
    }

    state
}

/// Mirror the persisted fields of `state` into the store.
pub fn persist_selection(store: &mut dyn KeyValueStore, state: &SelectionState) -> Result<(), StorageError> {
    store.set(THEME_KEY, &state.theme_id)?;
    store.set(PLUGINS_KEY, &serde_json::to_string(&state.selected_plugin_ids)?)?;
    store.set(DARK_MODE_KEY, &serde_json::to_string(&state.dark_mode)?)?;
    Ok(())
}

pub fn is_guided(store: &dyn KeyValueStore) -> bool {
    store.get(GUIDED_KEY).is_some()
}

pub fn mark_guided(store: &mut dyn KeyValueStore) -> Result<(), StorageError> {
    store.set(GUIDED_KEY, "true")
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use tracing_test::traced_test;

    use super::*;

    #[test]
    fn test_empty_store_yields_defaults() {
        let mut store = MemoryStore::new();
        assert_eq!(load_selection(&mut store), SelectionState::default());
    }

    #[test]
    fn test_persist_then_load() {
        let mut store = MemoryStore::new();
        let mut state = SelectionState::default();
        state.select_theme("avit");
        state.toggle_plugin("git");
        state.toggle_plugin("z");
        state.set_dark_mode(false);
        state.set_custom_prompt("session only");

        persist_selection(&mut store, &state).unwrap();
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("avit"));
        assert_eq!(store.get(PLUGINS_KEY).as_deref(), Some(r#"["docker","z"]"#));

        let loaded = load_selection(&mut store);
        assert_eq!(loaded.theme_id, "avit");
        assert_eq!(loaded.selected_plugin_ids, vec!["docker", "z"]);
        assert!(!loaded.dark_mode);
        assert!(loaded.custom_prompt.is_empty());
    }

    #[test]
    #[traced_test]
    fn test_malformed_plugins_fall_back_and_are_cleared() {
        let mut store = MemoryStore::new();
        store.set(THEME_KEY, "bira").unwrap();
        store.set(PLUGINS_KEY, "[\"git\",").unwrap();

        let state = load_selection(&mut store);
        assert_eq!(state.theme_id, "bira");
        assert_eq!(state.selected_plugin_ids, vec!["git", "docker"]);
        assert!(store.get(PLUGINS_KEY).is_none());
        assert!(logs_contain("failed to parse saved plugins"));
    }

    #[test]
    fn test_non_array_plugins_are_rejected() {
        let mut store = MemoryStore::new();
        store.set(PLUGINS_KEY, r#"{"git":true}"#).unwrap();
        assert_eq!(load_selection(&mut store).selected_plugin_ids, vec!["git", "docker"]);
    }

    #[test]
    fn test_guided_flag() {
        let mut store = MemoryStore::new();
        assert!(!is_guided(&store));
        mark_guided(&mut store).unwrap();
        assert!(is_guided(&store));
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state").join("store.json");

        let mut store = FileStore::open(&path).unwrap();
        assert!(store.get(THEME_KEY).is_none());
        store.set(THEME_KEY, "candy").unwrap();
        store.set(GUIDED_KEY, "true").unwrap();
        store.remove(GUIDED_KEY).unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get(THEME_KEY).as_deref(), Some("candy"));
        assert!(reopened.get(GUIDED_KEY).is_none());
        assert_eq!(reopened.path(), path.as_path());
    }

    #[test]
    #[traced_test]
    fn test_corrupt_store_file_is_treated_as_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");
        std::fs::write(&path, "not json").unwrap();

        let mut store = FileStore::open(&path).unwrap();
        assert!(store.get(THEME_KEY).is_none());
        assert!(logs_contain("ignoring unreadable store"));

        store.set(THEME_KEY, "fino").unwrap();
        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get(THEME_KEY).as_deref(), Some("fino"));
    }
}
