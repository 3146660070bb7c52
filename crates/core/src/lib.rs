//! gradient-studio-core: Gradient model and export logic for Gradient Studio.
//!
//! This crate contains the stop-list store, the gradient expression
//! renderer, angle-to-direction mapping, and the code exporters. All
//! functions here are pure over the shared types; persistence and the CLI
//! live in the application crate.

pub mod export;
pub mod render;
pub mod stops;

pub use export::{export_code, ExportFormat, ParseExportFormatError};
pub use render::{angle_to_direction, normalize_angle, render, Direction};
pub use stops::{random_color, random_gradient, StopStore, MIN_STOPS};

// Re-export types used in public signatures for convenience
pub use gradient_studio_types::{Color, ColorStop, GradientConfig, GradientType};
