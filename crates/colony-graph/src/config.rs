//! Configuration types for colony graph construction.
//!
//! This module provides configuration structures that control how colony
//! graphs are laid out and styled. All types implement [`serde::Deserialize`]
//! for flexible loading from external sources; every field is optional and
//! falls back to the defaults documented on it.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - Position scaling and alignment edge strength.
//! - [`StyleConfig`] - Colors, font, and pen width attached to graph elements.
//!
//! # Example
//!
//! ```
//! # use colony_graph::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.layout().position_scale(), 300.0);
//! assert!(config.style().resolve().is_ok());
//! ```

use serde::Deserialize;

use colony_graph_core::color::Color;

/// Top-level configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Layout hints written into the graphs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Factor applied to pin latitude and longitude to obtain display
    /// coordinates. Defaults to `300.0`.
    position_scale: f64,

    /// Weight of the invisible edges that pull rank groups together.
    /// Defaults to `9999`.
    alignment_weight: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            position_scale: 300.0,
            alignment_weight: 9999,
        }
    }
}

impl LayoutConfig {
    /// Creates a new [`LayoutConfig`].
    pub fn new(position_scale: f64, alignment_weight: u32) -> Self {
        Self {
            position_scale,
            alignment_weight,
        }
    }

    /// Returns the display scale for pin positions.
    pub fn position_scale(&self) -> f64 {
        self.position_scale
    }

    /// Returns the weight of alignment edges.
    pub fn alignment_weight(&self) -> u32 {
        self.alignment_weight
    }
}

/// Visual styling configuration for colony graphs.
///
/// Colors are CSS color strings and are validated by [`StyleConfig::resolve`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Canvas background. Defaults to `#404040`.
    background_color: String,

    /// Node fill color. Defaults to `white`.
    node_color: String,

    /// Color of physical link edges. Defaults to `white`.
    link_color: String,

    /// Font used for node and legend labels. Defaults to `monospace`.
    font_name: String,

    /// Stroke width of visible edges. Defaults to `2.0`.
    pen_width: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: "#404040".to_string(),
            node_color: "white".to_string(),
            link_color: "white".to_string(),
            font_name: "monospace".to_string(),
            pen_width: 2.0,
        }
    }
}

impl StyleConfig {
    /// Parses the configured colors into a [`GraphStyle`].
    ///
    /// # Errors
    ///
    /// Returns an error if a configured color string cannot be parsed or the
    /// pen width is not a positive finite number.
    pub fn resolve(&self) -> Result<GraphStyle, String> {
        let parse = |field: &str, value: &str| {
            Color::new(value).map_err(|err| format!("Invalid {field} in config: {err}"))
        };

        if !(self.pen_width.is_finite() && self.pen_width > 0.0) {
            return Err(format!(
                "Invalid pen_width in config: {} is not a positive number",
                self.pen_width
            ));
        }

        Ok(GraphStyle {
            background_color: parse("background_color", &self.background_color)?,
            node_color: parse("node_color", &self.node_color)?,
            link_color: parse("link_color", &self.link_color)?,
            font_name: self.font_name.clone(),
            pen_width: self.pen_width,
        })
    }
}

/// Validated style values attached to graph elements.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphStyle {
    background_color: Color,
    node_color: Color,
    link_color: Color,
    font_name: String,
    pen_width: f32,
}

impl GraphStyle {
    pub fn background_color(&self) -> Color {
        self.background_color
    }

    pub fn node_color(&self) -> Color {
        self.node_color
    }

    pub fn link_color(&self) -> Color {
        self.link_color
    }

    pub fn font_name(&self) -> &str {
        &self.font_name
    }

    pub fn pen_width(&self) -> f32 {
        self.pen_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style_resolves() {
        let style = StyleConfig::default().resolve().unwrap();
        assert_eq!(style.background_color().to_hex(), "#404040");
        assert_eq!(style.node_color().to_hex(), "#ffffff");
        assert_eq!(style.link_color().to_hex(), "#ffffff");
        assert_eq!(style.font_name(), "monospace");
        assert_eq!(style.pen_width(), 2.0);
    }

    #[test]
    fn test_invalid_color_is_reported_with_field() {
        let style = StyleConfig {
            link_color: "sparkly".to_string(),
            ..StyleConfig::default()
        };
        let err = style.resolve().unwrap_err();
        assert!(err.contains("link_color"), "unexpected message: {err}");
    }

    #[test]
    fn test_non_positive_pen_width_is_rejected() {
        let style = StyleConfig {
            pen_width: 0.0,
            ..StyleConfig::default()
        };
        assert!(style.resolve().is_err());
    }

    #[test]
    fn test_layout_defaults() {
        let layout = LayoutConfig::default();
        assert_eq!(layout.position_scale(), 300.0);
        assert_eq!(layout.alignment_weight(), 9999);
    }
}
