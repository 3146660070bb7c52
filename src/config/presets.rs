//! File-backed preset collection.

use std::path::{Path, PathBuf};

use anyhow::Result;
use log::warn;
use uuid::Uuid;

use gradient_studio_types::{GradientConfig, Preset};

use super::StoreError;

/// On-disk file name under the config directory.
const PRESETS_FILE: &str = "presets.json";

/// Durable collection of named gradient presets.
///
/// The on-disk format is a bare JSON array of presets. Every mutation
/// serializes the entire collection back to disk; there are no partial
/// writes. A corrupt or unreadable file degrades to an empty collection
/// on load rather than failing.
#[derive(Debug)]
pub struct PresetStore {
    path: PathBuf,
    presets: Vec<Preset>,
}

impl PresetStore {
    /// Open the store at the default per-user location.
    pub fn open_default() -> Result<Self> {
        Ok(Self::open(super::config_dir()?.join(PRESETS_FILE)))
    }

    /// Open the store backed by a specific file.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let presets = Self::read_collection(&path);
        Self { path, presets }
    }

    fn read_collection(path: &Path) -> Vec<Preset> {
        if !path.exists() {
            return Vec::new();
        }
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Could not read {}: {e}; starting with no presets", path.display());
                return Vec::new();
            }
        };
        match serde_json::from_str(&content) {
            Ok(presets) => presets,
            Err(e) => {
                warn!("Corrupt preset file {}: {e}; starting with no presets", path.display());
                Vec::new()
            }
        }
    }

    /// Save the current gradient under `name`.
    ///
    /// Rejects empty or whitespace-only names with no side effect.
    /// Otherwise appends a preset with a fresh id and persists the full
    /// collection.
    pub fn save(&mut self, name: &str, config: GradientConfig) -> Result<&Preset, StoreError> {
        if name.trim().is_empty() {
            return Err(StoreError::EmptyName);
        }
        self.presets.push(Preset::new(name.trim(), config));
        self.persist()?;
        Ok(self.presets.last().unwrap())
    }

    /// Look up a preset by id.
    pub fn load(&self, id: Uuid) -> Result<&Preset, StoreError> {
        self.presets
            .iter()
            .find(|p| p.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    /// Remove a preset by id. Returns `false` (no-op) when the id is
    /// absent; persists the collection when something was removed.
    pub fn delete(&mut self, id: Uuid) -> bool {
        let before = self.presets.len();
        self.presets.retain(|p| p.id != id);
        if self.presets.len() == before {
            return false;
        }
        if let Err(e) = self.persist() {
            warn!("Failed to persist preset deletion: {e}");
        }
        true
    }

    /// All presets, oldest first.
    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    /// Serialize the whole collection back to disk.
    fn persist(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.presets)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradient_studio_types::GradientType;

    fn store_in(dir: &tempfile::TempDir) -> PresetStore {
        PresetStore::open(dir.path().join(PRESETS_FILE))
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);

        let config = GradientConfig::default();
        let id = store.save("morning sky", config.clone()).unwrap().id;

        // Reopen from disk
        let store = store_in(&dir);
        let preset = store.load(id).unwrap();
        assert_eq!(preset.name, "morning sky");
        assert_eq!(preset.config, config);
    }

    #[test]
    fn test_save_rejects_blank_names() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);

        assert!(matches!(
            store.save("", GradientConfig::default()),
            Err(StoreError::EmptyName)
        ));
        assert!(matches!(
            store.save("   ", GradientConfig::default()),
            Err(StoreError::EmptyName)
        ));
        assert!(store.presets().is_empty());
        assert!(!dir.path().join(PRESETS_FILE).exists());
    }

    #[test]
    fn test_load_missing_id_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(matches!(
            store.load(Uuid::new_v4()),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn test_delete_missing_id_is_a_noop() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.save("keep me", GradientConfig::default()).unwrap();

        assert!(!store.delete(Uuid::new_v4()));
        assert_eq!(store.presets().len(), 1);
        assert_eq!(store.presets()[0].name, "keep me");
    }

    #[test]
    fn test_delete_persists() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        let id = store.save("ephemeral", GradientConfig::default()).unwrap().id;
        assert!(store.delete(id));

        let store = store_in(&dir);
        assert!(store.presets().is_empty());
    }

    #[test]
    fn test_list_keeps_insertion_order_and_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.save("dusk", GradientConfig::default()).unwrap();
        store
            .save("dawn", gradient_studio_core::random_gradient(GradientType::Conic))
            .unwrap();
        store.save("dusk", GradientConfig::default()).unwrap();

        let names: Vec<&str> = store.presets().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["dusk", "dawn", "dusk"]);
    }

    #[test]
    fn test_corrupt_file_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PRESETS_FILE);
        std::fs::write(&path, "{not json").unwrap();

        let store = PresetStore::open(&path);
        assert!(store.presets().is_empty());
    }
}
