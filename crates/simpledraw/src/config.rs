//! Configuration types for SimpleDraw compilation and rendering.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from
//! external sources; every field has a default, so partial files are valid.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the sections below.
//! - [`CanvasConfig`] - Canvas defaults used when a program omits `Paper` or `Pen`.
//! - [`StyleConfig`] - Colors of the rendered image.
//! - [`CompilerConfig`] - Pipeline switches such as the optimizer.
//!
//! # Example
//!
//! ```
//! # use simpledraw::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.canvas().default_paper_size(), 100);
//! assert!(config.style().stroke_color().is_ok());
//! ```

use serde::Deserialize;

use simpledraw_core::color::Color;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Canvas configuration section.
    #[serde(default)]
    canvas: CanvasConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// Compiler configuration section.
    #[serde(default)]
    compiler: CompilerConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(canvas: CanvasConfig, style: StyleConfig, compiler: CompilerConfig) -> Self {
        Self {
            canvas,
            style,
            compiler,
        }
    }

    /// Returns the canvas configuration.
    pub fn canvas(&self) -> &CanvasConfig {
        &self.canvas
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the compiler configuration.
    pub fn compiler(&self) -> &CompilerConfig {
        &self.compiler
    }
}

/// Canvas defaults for programs that do not declare them.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Width and height of the canvas when there is no `Paper` statement.
    default_paper_size: i64,

    /// Stroke width when there is no `Pen` statement.
    default_pen_width: i64,
}

impl CanvasConfig {
    pub fn new(default_paper_size: i64, default_pen_width: i64) -> Self {
        Self {
            default_paper_size,
            default_pen_width,
        }
    }

    pub fn default_paper_size(&self) -> i64 {
        self.default_paper_size
    }

    pub fn default_pen_width(&self) -> i64 {
        self.default_pen_width
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            default_paper_size: 100,
            default_pen_width: 1,
        }
    }
}

/// Visual styling configuration for rendered drawings.
///
/// Colors are kept as strings and only parsed into [`Color`] on use.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Canvas background [`Color`], as a CSS color string.
    background_color: String,

    /// Stroke [`Color`] of every shape, as a CSS color string.
    stroke_color: String,
}

impl StyleConfig {
    pub fn new(background_color: impl Into<String>, stroke_color: impl Into<String>) -> Self {
        Self {
            background_color: background_color.into(),
            stroke_color: stroke_color.into(),
        }
    }

    /// Returns the parsed background [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string is not a valid CSS color.
    pub fn background_color(&self) -> Result<Color, String> {
        Color::new(&self.background_color)
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    /// Returns the parsed stroke [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string is not a valid CSS color.
    pub fn stroke_color(&self) -> Result<Color, String> {
        Color::new(&self.stroke_color)
            .map_err(|err| format!("Invalid stroke color in config: {err}"))
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self::new("white", "black")
    }
}

/// Switches for the compilation pipeline.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CompilerConfig {
    /// Run the adjacent-duplicate optimizer on the generated code.
    optimize: bool,
}

impl CompilerConfig {
    pub fn new(optimize: bool) -> Self {
        Self { optimize }
    }

    pub fn optimize(&self) -> bool {
        self.optimize
    }
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self { optimize: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.canvas().default_paper_size(), 100);
        assert_eq!(config.canvas().default_pen_width(), 1);
        assert!(config.compiler().optimize());
        assert_eq!(
            config.style().background_color().unwrap(),
            Color::new("white").unwrap()
        );
        assert_eq!(config.style().stroke_color().unwrap(), Color::default());
    }

    #[test]
    fn test_partial_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [canvas]
            default_paper_size = 300

            [compiler]
            optimize = false
            "#,
        )
        .unwrap();

        assert_eq!(config.canvas().default_paper_size(), 300);
        assert_eq!(config.canvas().default_pen_width(), 1);
        assert!(!config.compiler().optimize());
        assert!(config.style().background_color().is_ok());
    }

    #[test]
    fn test_empty_toml() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.canvas().default_paper_size(), 100);
        assert!(config.compiler().optimize());
    }

    #[test]
    fn test_invalid_color() {
        let style = StyleConfig::new("not-a-color", "black");
        let err = style.background_color().unwrap_err();
        assert!(err.starts_with("Invalid background color in config"));
        assert!(style.stroke_color().is_ok());
    }
}
