//! Gradient expression rendering and angle-to-direction mapping.

use gradient_studio_types::{ColorStop, GradientConfig, GradientType};

/// Normalize an angle in degrees into `[0,360)`.
pub fn normalize_angle(angle: f64) -> f64 {
    ((angle % 360.0) + 360.0) % 360.0
}

/// One of the eight compass directions used by Tailwind's directional
/// gradient utilities. 0° points right, angles grow clockwise, matching
/// the CSS linear-gradient convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
    TopLeft,
    Top,
    TopRight,
}

impl Direction {
    /// Suffix used in `bg-gradient-to-<dir>` utility names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Right => "r",
            Self::BottomRight => "br",
            Self::Bottom => "b",
            Self::BottomLeft => "bl",
            Self::Left => "l",
            Self::TopLeft => "tl",
            Self::Top => "t",
            Self::TopRight => "tr",
        }
    }
}

/// Map an angle onto the nearest compass direction.
///
/// The circle is split into eight 45°-wide sectors centered on the
/// compass points, so the sector around 0°/360° runs from 337.5°
/// (inclusive) to 22.5° (exclusive).
pub fn angle_to_direction(angle: f64) -> Direction {
    let a = normalize_angle(angle);
    if !(22.5..337.5).contains(&a) {
        Direction::Right
    } else if a < 67.5 {
        Direction::BottomRight
    } else if a < 112.5 {
        Direction::Bottom
    } else if a < 157.5 {
        Direction::BottomLeft
    } else if a < 202.5 {
        Direction::Left
    } else if a < 247.5 {
        Direction::TopLeft
    } else if a < 292.5 {
        Direction::Top
    } else {
        Direction::TopRight
    }
}

/// Stops sorted ascending by position, insertion order preserved on ties.
pub(crate) fn position_ordered(stops: &[ColorStop]) -> Vec<ColorStop> {
    let mut sorted = stops.to_vec();
    sorted.sort_by_key(|s| s.position);
    sorted
}

fn stop_list(stops: &[ColorStop]) -> String {
    position_ordered(stops)
        .iter()
        .map(ColorStop::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render a config into a CSS gradient expression.
///
/// Pure and total: any config renders, with stops serialized in ascending
/// position order regardless of insertion order. Integral angles print
/// without a fractional part (`90deg`).
pub fn render(config: &GradientConfig) -> String {
    let stops = stop_list(&config.stops);
    match config.gradient_type {
        GradientType::Linear => {
            format!("linear-gradient({}deg, {})", config.angle, stops)
        }
        GradientType::Radial => format!("radial-gradient(circle, {})", stops),
        GradientType::Conic => {
            format!("conic-gradient(from {}deg, {})", config.angle, stops)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradient_studio_types::Color;

    fn stop(rgb: u32, position: u8) -> ColorStop {
        ColorStop::new(Color::from_rgb24(rgb), position)
    }

    #[test]
    fn test_linear_expression() {
        let config = GradientConfig::default();
        assert_eq!(
            render(&config),
            "linear-gradient(90deg, #3b82f6 0%, #10b981 100%)"
        );
    }

    #[test]
    fn test_radial_ignores_angle() {
        let config = GradientConfig::new(
            GradientType::Radial,
            123.0,
            GradientConfig::seed_stops(),
        );
        assert_eq!(
            render(&config),
            "radial-gradient(circle, #3b82f6 0%, #10b981 100%)"
        );
    }

    #[test]
    fn test_conic_expression() {
        let config = GradientConfig::new(
            GradientType::Conic,
            45.0,
            GradientConfig::seed_stops(),
        );
        assert_eq!(
            render(&config),
            "conic-gradient(from 45deg, #3b82f6 0%, #10b981 100%)"
        );
    }

    #[test]
    fn test_fractional_angle_keeps_fraction() {
        let config = GradientConfig::new(
            GradientType::Linear,
            22.5,
            GradientConfig::seed_stops(),
        );
        assert!(render(&config).starts_with("linear-gradient(22.5deg,"));
    }

    #[test]
    fn test_stops_render_in_position_order() {
        let config = GradientConfig::new(
            GradientType::Linear,
            0.0,
            vec![stop(0x111111, 80), stop(0x222222, 10), stop(0x333333, 40)],
        );
        assert_eq!(
            render(&config),
            "linear-gradient(0deg, #222222 10%, #333333 40%, #111111 80%)"
        );
    }

    #[test]
    fn test_angle_to_direction_sectors() {
        assert_eq!(angle_to_direction(0.0), Direction::Right);
        assert_eq!(angle_to_direction(45.0), Direction::BottomRight);
        assert_eq!(angle_to_direction(90.0), Direction::Bottom);
        assert_eq!(angle_to_direction(135.0), Direction::BottomLeft);
        assert_eq!(angle_to_direction(180.0), Direction::Left);
        assert_eq!(angle_to_direction(225.0), Direction::TopLeft);
        assert_eq!(angle_to_direction(270.0), Direction::Top);
        assert_eq!(angle_to_direction(315.0), Direction::TopRight);
    }

    #[test]
    fn test_angle_to_direction_boundaries() {
        assert_eq!(angle_to_direction(359.0), Direction::Right);
        // 337.5 belongs to the right sector, just below it does not
        assert_eq!(angle_to_direction(337.5), Direction::Right);
        assert_eq!(angle_to_direction(337.49), Direction::TopRight);
        assert_eq!(angle_to_direction(22.5), Direction::BottomRight);
    }

    #[test]
    fn test_angle_normalization() {
        assert_eq!(normalize_angle(360.0), 0.0);
        assert_eq!(normalize_angle(-90.0), 270.0);
        assert_eq!(normalize_angle(450.0), 90.0);
        assert_eq!(angle_to_direction(-90.0), Direction::Top);
        assert_eq!(angle_to_direction(450.0), Direction::Bottom);
    }
}
