//! Core Keyboard trait and related types.

use image::DynamicImage;

use crate::{sampler, Color, ColorMap, FitMode, Layout, Result};

/// Static information about a keyboard model for detection and CLI
#[derive(Debug, Clone, Copy)]
pub struct KeyboardInfo {
    pub name: &'static str,
    pub cli_name: &'static str,
    pub vendor_id: u16,
    pub product_id: u16,
    /// HID interface carrying the lighting endpoint, `None` for the last one
    pub interface: Option<i32>,
    /// Output report length including the report id
    pub report_len: usize,
}

/// Per-key lighting capability - object-safe for `dyn Keyboard`
///
/// Models provide a static `INFO` and `LAYOUT` and an `open()` constructor
/// separately.
pub trait Keyboard: Send {
    /// Get keyboard info (instance method for object safety)
    fn info(&self) -> &'static KeyboardInfo;

    /// Key geometry of this model
    fn layout(&self) -> &'static Layout;

    /// Light each key with its color from the map, and every other key with
    /// `default`.
    fn draw_colors(&mut self, colors: &ColorMap, default: Color) -> Result<()>;

    /// Sample an image onto the keys and draw it
    fn draw_image(&mut self, image: &DynamicImage, fit: FitMode) -> Result<()> {
        let colors = sampler::sample(self.layout(), image, fit)?;
        self.draw_colors(&colors, Color::WHITE)
    }
}
