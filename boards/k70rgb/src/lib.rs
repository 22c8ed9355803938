//! High level hidapi abstraction for per-key lighting on Corsair K70 RGB keyboards

use corsair_protocol::HidTransport;
use keylight_core::{Color, ColorMap, Keyboard, KeyboardInfo, Layout, Result, Transport};
use tracing::debug;

pub mod keys;
pub mod layout;

pub use layout::LAYOUT;

pub mod consts {
    pub const CORSAIR_VENDOR_ID: u16 = 0x1B1C;
    pub const K70_RGB_PRODUCT_ID: u16 = 0x1B13;
    /// 64 byte frame plus the report id
    pub const K70_RGB_REPORT_LEN: usize = 65;
}

/// Static keyboard info for detection
pub static INFO: KeyboardInfo = KeyboardInfo {
    name: "Corsair K70 RGB",
    cli_name: "k70rgb",
    vendor_id: consts::CORSAIR_VENDOR_ID,
    product_id: consts::K70_RGB_PRODUCT_ID,
    interface: None,
    report_len: consts::K70_RGB_REPORT_LEN,
};

/// High level abstraction for drawing on a K70 RGB
pub struct K70Rgb<T = HidTransport> {
    transport: T,
}

impl K70Rgb {
    /// Find the keyboard, optionally on a specific HID interface
    pub fn open(interface: Option<i32>) -> Result<Self> {
        Self::with_transport(HidTransport::find(&INFO, interface)?)
    }
}

impl<T: Transport> K70Rgb<T> {
    /// Drive the keyboard over any transport
    pub fn with_transport(transport: T) -> Result<Self> {
        LAYOUT.validate()?;
        Ok(Self { transport })
    }

    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Light the given keys, and every other key with `default`
    pub fn draw_keys(&mut self, colors: &ColorMap, default: Color) -> Result<()> {
        debug!(keyboard = INFO.name, "drawing {} keys", colors.len());
        corsair_protocol::draw(&mut self.transport, &LAYOUT, colors, default)
    }
}

// === Trait Implementations ===

impl<T: Transport + Send> Keyboard for K70Rgb<T> {
    fn info(&self) -> &'static KeyboardInfo {
        &INFO
    }

    fn layout(&self) -> &'static Layout {
        &LAYOUT
    }

    fn draw_colors(&mut self, colors: &ColorMap, default: Color) -> Result<()> {
        K70Rgb::draw_keys(self, colors, default)
    }
}
