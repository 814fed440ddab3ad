use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ChartError, ChartResult};

/// CSS color with 8-bit RGB channels and a normalized alpha channel.
///
/// Serialized as the CSS functional notation the charting library consumes:
/// `rgb(r, g, b)` when fully opaque and `rgba(r, g, b, a)` otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: f64,
}

impl Color {
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0.0);

    #[must_use]
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub fn is_opaque(self) -> bool {
        self.alpha >= 1.0
    }

    #[must_use]
    pub fn is_transparent(self) -> bool {
        self.alpha <= 0.0
    }

    /// Channels as `(red, green, blue, alpha)` in `0..=1`, the form raster
    /// backends expect.
    #[must_use]
    pub fn normalized(self) -> (f64, f64, f64, f64) {
        (
            f64::from(self.red) / 255.0,
            f64::from(self.green) / 255.0,
            f64::from(self.blue) / 255.0,
            self.alpha,
        )
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.alpha.is_finite() || !(0.0..=1.0).contains(&self.alpha) {
            return Err(ChartError::InvalidData(format!(
                "color alpha must be finite and in [0, 1], got {}",
                self.alpha
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
        } else {
            write!(
                f,
                "rgba({}, {}, {}, {})",
                self.red, self.green, self.blue, self.alpha
            )
        }
    }
}

impl FromStr for Color {
    type Err = ChartError;

    fn from_str(input: &str) -> ChartResult<Self> {
        let trimmed = input.trim();
        let (body, expects_alpha) = if let Some(rest) = trimmed.strip_prefix("rgba(") {
            (rest, true)
        } else if let Some(rest) = trimmed.strip_prefix("rgb(") {
            (rest, false)
        } else {
            return Err(invalid_color(input));
        };
        let body = body.strip_suffix(')').ok_or_else(|| invalid_color(input))?;

        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        let expected_parts = if expects_alpha { 4 } else { 3 };
        if parts.len() != expected_parts {
            return Err(invalid_color(input));
        }

        let channel = |raw: &str| raw.parse::<u8>().map_err(|_| invalid_color(input));
        let alpha = if expects_alpha {
            parts[3].parse::<f64>().map_err(|_| invalid_color(input))?
        } else {
            1.0
        };

        let color = Self::rgba(channel(parts[0])?, channel(parts[1])?, channel(parts[2])?, alpha);
        color.validate()?;
        Ok(color)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

fn invalid_color(input: &str) -> ChartError {
    ChartError::InvalidData(format!("unsupported css color `{input}`"))
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn formats_opaque_and_translucent_colors_like_css() {
        assert_eq!(Color::rgb(30, 215, 96).to_string(), "rgb(30, 215, 96)");
        assert_eq!(
            Color::rgba(30, 215, 96, 0.2).to_string(),
            "rgba(30, 215, 96, 0.2)"
        );
        assert_eq!(Color::TRANSPARENT.to_string(), "rgba(0, 0, 0, 0)");
    }

    #[test]
    fn parses_both_functional_notations() {
        let translucent: Color = "rgba(30, 215, 96, 0.2)".parse().expect("rgba");
        assert_eq!(translucent, Color::rgba(30, 215, 96, 0.2));

        let opaque: Color = " rgb(1,2,3) ".parse().expect("rgb");
        assert_eq!(opaque, Color::rgb(1, 2, 3));
    }

    #[test]
    fn rejects_malformed_or_out_of_range_colors() {
        assert!("#1ed760".parse::<Color>().is_err());
        assert!("rgb(300, 0, 0)".parse::<Color>().is_err());
        assert!("rgba(0, 0, 0)".parse::<Color>().is_err());
        assert!("rgba(0, 0, 0, 1.5)".parse::<Color>().is_err());
        assert!(Color::rgba(0, 0, 0, f64::NAN).validate().is_err());
    }
}
