//! Key ids and colors.

use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;

/// Opaque identifier of one physical key position on a layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyId(pub u32);

impl Display for KeyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// 8-bit rgb color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels in red, green, blue order
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Self { r, g, b } = self;
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

impl FromStr for Color {
    type Err = String;
    fn from_str(code: &str) -> Result<Self, Self::Err> {
        // parse hex string into rgb
        let mut hex = code.trim_start_matches('#').to_string();
        match hex.len() {
            3 => {
                // Extend 3 character hex colors
                hex = hex.chars().flat_map(|a| [a, a]).collect();
            },
            6 => {},
            l => return Err(format!("invalid hex length for {code}: {l}")),
        }
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("invalid hex color: {code}"));
        }
        let channel_bytes =
            u32::from_str_radix(&hex, 16).map_err(|_| format!("invalid hex color: {code}"))?;
        Ok(Self {
            r: ((channel_bytes >> 16) & 0xFF) as u8,
            g: ((channel_bytes >> 8) & 0xFF) as u8,
            b: (channel_bytes & 0xFF) as u8,
        })
    }
}

/// Requested color per key. Keys missing from the map are drawn with a default color.
pub type ColorMap = HashMap<KeyId, Color>;

/// How a source image is placed onto a keyboard canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FitMode {
    /// Letterbox the image so all of it is visible without distortion
    Fit,
    /// Cover the whole keyboard without distortion, cropping the overflow
    #[default]
    Fill,
    /// Stretch the image to exactly the keyboard dimensions
    Stretch,
}

impl FromStr for FitMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fit" => Ok(Self::Fit),
            "fill" => Ok(Self::Fill),
            "stretch" => Ok(Self::Stretch),
            _ => Err(format!("unknown fit mode: {s}. Available: fit, fill, stretch")),
        }
    }
}

impl Display for FitMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fit => write!(f, "fit"),
            Self::Fill => write!(f, "fill"),
            Self::Stretch => write!(f, "stretch"),
        }
    }
}
