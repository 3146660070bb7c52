//! Gradient Studio: compose multi-stop color gradients, export them as
//! styling code, and keep named presets and a theme choice across
//! sessions.
//!
//! This library provides the application layer over the workspace crates:
//! - Persistence stores for presets and the editor theme
//! - Re-exports of the gradient model and exporters

pub mod config;

// Re-export commonly used types
pub use config::{PresetStore, StoreError, ThemeStore};
pub use gradient_studio_core::{
    angle_to_direction, export_code, random_gradient, render, ExportFormat, StopStore,
};
pub use gradient_studio_types::{Color, ColorStop, GradientConfig, GradientType, Preset, Theme};
