//! Gradient configuration types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::{Color, ColorStop};

/// Shape family of a gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientType {
    /// Directional, controlled by an angle
    Linear,
    /// Circular from the center; the angle is ignored
    Radial,
    /// Angular sweep from the center
    Conic,
}

impl GradientType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Radial => "radial",
            Self::Conic => "conic",
        }
    }
}

impl fmt::Display for GradientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown gradient type '{input}': expected linear, radial, or conic")]
pub struct ParseGradientTypeError {
    pub input: String,
}

impl FromStr for GradientType {
    type Err = ParseGradientTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            "radial" => Ok(Self::Radial),
            "conic" => Ok(Self::Conic),
            _ => Err(ParseGradientTypeError {
                input: s.to_string(),
            }),
        }
    }
}

/// Full gradient configuration: type, angle, and stop list.
///
/// The stop list is kept in insertion order; rendering sorts it ascending
/// by position (stable on ties). A well-formed config holds at least two
/// stops.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GradientConfig {
    #[serde(rename = "type")]
    pub gradient_type: GradientType,
    /// Angle in degrees. 0 points right, 90 points down, matching the
    /// CSS linear-gradient convention used by the renderer.
    pub angle: f64,
    pub stops: Vec<ColorStop>,
}

impl GradientConfig {
    pub fn new(gradient_type: GradientType, angle: f64, stops: Vec<ColorStop>) -> Self {
        Self {
            gradient_type,
            angle,
            stops,
        }
    }

    /// The two stops every fresh editor session starts from.
    pub fn seed_stops() -> Vec<ColorStop> {
        vec![
            ColorStop::new(Color::from_rgb24(0x3b82f6), 0),
            ColorStop::new(Color::from_rgb24(0x10b981), 100),
        ]
    }
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self {
            gradient_type: GradientType::Linear,
            angle: 90.0,
            stops: Self::seed_stops(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_type_round_trip() {
        for (s, t) in [
            ("linear", GradientType::Linear),
            ("radial", GradientType::Radial),
            ("conic", GradientType::Conic),
        ] {
            assert_eq!(s.parse::<GradientType>().unwrap(), t);
            assert_eq!(t.to_string(), s);
        }
        assert!("ellipse".parse::<GradientType>().is_err());
    }

    #[test]
    fn test_config_json_shape() {
        let config = GradientConfig::default();
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["type"], "linear");
        assert_eq!(json["angle"], 90.0);
        assert_eq!(json["stops"][0]["color"], "#3b82f6");
        assert_eq!(json["stops"][1]["position"], 100);

        let back: GradientConfig = serde_json::from_value(json).unwrap();
        assert_eq!(back, config);
    }
}
