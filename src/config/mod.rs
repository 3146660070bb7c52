//! Persistence layer: preset and theme stores.

mod presets;
mod theme;

pub use presets::PresetStore;
pub use theme::ThemeStore;

use std::path::PathBuf;

use anyhow::Result;
use thiserror::Error;

/// Errors surfaced by the stores.
///
/// Persistence failures are deliberately ignorable: mutations still apply
/// in memory, and callers that don't care about durability may drop the
/// error. Nothing here is fatal to a session.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("preset name cannot be empty")]
    EmptyName,
    #[error("no preset with id {0}")]
    NotFound(uuid::Uuid),
    #[error("failed to write store file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode store file: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Resolve the per-user config directory for Gradient Studio files.
pub(crate) fn config_dir() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("com", "gradient-studio", "gradient-studio")
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
    Ok(dirs.config_dir().to_path_buf())
}
