//! Persisted theme selection.

use std::path::PathBuf;

use anyhow::Result;
use log::warn;

use gradient_studio_types::Theme;

use super::StoreError;

/// On-disk file name under the config directory.
const THEME_FILE: &str = "theme.json";

/// Durable single-value store for the editor theme.
///
/// The file holds one JSON-encoded theme tag string (e.g. `"dark"`).
/// Reads fall back to [`Theme::Light`] when the file is missing or
/// unreadable; writes are best-effort.
#[derive(Debug)]
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    /// Store at the default per-user location.
    pub fn open_default() -> Result<Self> {
        Ok(Self::open(super::config_dir()?.join(THEME_FILE)))
    }

    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Current selection, defaulting to light when unset or unreadable.
    pub fn get(&self) -> Theme {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(_) => return Theme::default(),
        };
        match serde_json::from_str(&content) {
            Ok(theme) => theme,
            Err(e) => {
                warn!("Corrupt theme file {}: {e}; using light", self.path.display());
                Theme::default()
            }
        }
    }

    /// Persist a selection. Best-effort: callers may ignore the error.
    pub fn set(&self, theme: Theme) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string(&theme)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_light_when_unset() {
        let dir = tempfile::tempdir().unwrap();
        let store = ThemeStore::open(dir.path().join(THEME_FILE));
        assert_eq!(store.get(), Theme::Light);
    }

    #[test]
    fn test_set_then_get_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = ThemeStore::open(dir.path().join(THEME_FILE));

        store.set(Theme::Ocean).unwrap();
        assert_eq!(store.get(), Theme::Ocean);

        let raw = std::fs::read_to_string(dir.path().join(THEME_FILE)).unwrap();
        assert_eq!(raw, "\"ocean\"");
    }

    #[test]
    fn test_corrupt_file_degrades_to_light() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(THEME_FILE);
        std::fs::write(&path, "midnight?").unwrap();

        let store = ThemeStore::open(path);
        assert_eq!(store.get(), Theme::Light);
    }
}
