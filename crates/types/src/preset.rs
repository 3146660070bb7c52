//! Named gradient presets.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::gradient::GradientConfig;

/// A named, persisted snapshot of a full gradient configuration.
///
/// Presets are immutable once created; replacing one means deleting it
/// and saving a new preset under the same name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Preset {
    /// Unique ID for this preset
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub config: GradientConfig,
}

impl Preset {
    pub fn new(name: impl Into<String>, config: GradientConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            created_at: Utc::now(),
            config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_ids_are_unique() {
        let a = Preset::new("sunrise", GradientConfig::default());
        let b = Preset::new("sunrise", GradientConfig::default());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_preset_json_round_trip() {
        let preset = Preset::new("ocean glass", GradientConfig::default());
        let json = serde_json::to_string(&preset).unwrap();
        let back: Preset = serde_json::from_str(&json).unwrap();
        assert_eq!(back, preset);
    }
}
