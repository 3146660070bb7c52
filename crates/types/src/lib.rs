//! gradient-studio-types: Shared data types for Gradient Studio.
//!
//! This crate contains pure data types (colors, stops, gradient configs,
//! presets, themes) shared across all Gradient Studio crates. These types
//! have no I/O or CLI dependencies, making them suitable as a foundation
//! layer.

pub mod color;
pub mod gradient;
pub mod preset;
pub mod theme;

// Re-export commonly used types at the crate root for convenience
pub use color::{Color, ColorStop, ParseColorError};
pub use gradient::{GradientConfig, GradientType, ParseGradientTypeError};
pub use preset::Preset;
pub use theme::{ParseThemeError, Theme};
