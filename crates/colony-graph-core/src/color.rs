//! Color handling for graph attributes.
//!
//! [`Color`] wraps the `DynamicColor` type from the color crate so that CSS
//! color strings from configuration and fixed palette entries share one
//! representation. Colors always display as lowercase hex (`#rrggbb`, or
//! `#rrggbbaa` when translucent), the form graph renderers expect.

use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::{AlphaColor, DynamicColor, Srgb};

/// Wrapper around the `DynamicColor` type from the color crate.
///
/// Equality and hashing compare the 8-bit sRGB channels, so `"white"` and
/// `"#ffffff"` are the same color.
#[derive(Clone, Copy, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.to_rgba8() == other.to_rgba8()
    }
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_rgba8().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a string.
    ///
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Errors
    ///
    /// Returns a message naming the offending string when it is not a valid CSS color.
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Color { color }),
            Err(err) => Err(format!("Invalid color '{color_str}': {err}")),
        }
    }

    /// Create an opaque sRGB color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Color {
            color: DynamicColor::from_alpha_color(AlphaColor::<Srgb>::from_rgb8(r, g, b)),
        }
    }

    /// Returns the 8-bit sRGB channels as `[r, g, b, a]`.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let rgba = self.color.to_alpha_color::<Srgb>().to_rgba8();
        [rgba.r, rgba.g, rgba.b, rgba.a]
    }

    /// Returns the hex form of this color.
    ///
    /// # Examples
    ///
    /// ```
    /// use colony_graph_core::color::Color;
    ///
    /// assert_eq!(Color::new("white").unwrap().to_hex(), "#ffffff");
    /// assert_eq!(Color::from_rgb8(31, 119, 180).to_hex(), "#1f77b4");
    /// ```
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == u8::MAX {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
