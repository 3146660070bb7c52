//! Code exporters: CSS, SCSS, and Tailwind.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use gradient_studio_types::{GradientConfig, GradientType};

use crate::render::{angle_to_direction, position_ordered, render};

/// Target format for [`export_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Css,
    Scss,
    Tailwind,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] =
        [ExportFormat::Css, ExportFormat::Scss, ExportFormat::Tailwind];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Scss => "scss",
            Self::Tailwind => "tailwind",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown export format '{input}': expected css, scss, or tailwind")]
pub struct ParseExportFormatError {
    pub input: String,
}

impl FromStr for ExportFormat {
    type Err = ParseExportFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "css" => Ok(Self::Css),
            "scss" => Ok(Self::Scss),
            "tailwind" => Ok(Self::Tailwind),
            _ => Err(ParseExportFormatError {
                input: s.to_string(),
            }),
        }
    }
}

/// Produce styling code for a gradient in the requested format.
///
/// Deterministic: the same config and format always yield the same string,
/// byte for byte.
pub fn export_code(config: &GradientConfig, format: ExportFormat) -> String {
    let expr = render(config);
    match format {
        ExportFormat::Css => format!("background: {expr};"),
        ExportFormat::Scss => format!(
            "background: {expr};\n@function gradient-bg() {{\n    @return {expr};\n}}"
        ),
        ExportFormat::Tailwind => tailwind(config, &expr),
    }
}

/// Linear gradients become a directional utility over the first and last
/// stop colors (by position order); radial and conic fall back to an
/// arbitrary-value utility wrapping the raw expression.
fn tailwind(config: &GradientConfig, expr: &str) -> String {
    if config.gradient_type == GradientType::Linear {
        let stops = position_ordered(&config.stops);
        if let (Some(first), Some(last)) = (stops.first(), stops.last()) {
            let dir = angle_to_direction(config.angle);
            return format!(
                "bg-gradient-to-{} from-[{}] to-[{}]",
                dir.as_str(),
                first.color,
                last.color
            );
        }
    }
    format!("bg-[{expr}]")
}
