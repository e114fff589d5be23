//! Color handling for rendered drawings
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate. Colors come from the style configuration and are
//! written verbatim into SVG attributes.

use std::{fmt, str::FromStr};

use color::DynamicColor;

/// Wrapper around the `DynamicColor` type from the color crate
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Create a new `Color` from a CSS color string
    /// such as "#ff0000", "rgb(255, 0, 0)" or "white".
    ///
    /// # Examples
    ///
    /// ```
    /// use simpledraw_core::color::Color;
    ///
    /// let white = Color::new("white").unwrap();
    /// assert!(Color::new("not-a-color").is_err());
    /// # let _ = white;
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new() {
        assert!(Color::new("#ff0000").is_ok());
        assert!(Color::new("white").is_ok());

        let err = Color::new("not-a-color").unwrap_err();
        assert!(err.contains("not-a-color"));
    }

    #[test]
    fn test_color_default() {
        assert_eq!(Color::default(), Color::new("black").unwrap());
    }

    #[test]
    fn test_color_into_svg_value() {
        let color = Color::new("black").unwrap();
        let value: svg::node::Value = (&color).into();
        assert_eq!(value.to_string(), color.to_string());
    }
}
