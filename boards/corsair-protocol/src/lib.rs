//! Shared HID color protocol for Corsair RGB keyboards.
//!
//! This crate provides the protocol primitives used by per-key lit boards of
//! the K70 RGB family:
//! - packing key colors into 3-bit inverted intensity codes
//! - framing the packed buffers into sequenced 64 byte output reports
//! - a hidapi transport and the draw session tying them together
//!
//! ## Protocol Overview
//!
//! A draw sends 216 packed bytes (red, green, blue) in four data frames,
//! followed by a flush frame that makes the new colors visible.

pub mod hid;
pub mod pack;
pub mod packet;

pub use hid::*;
pub use pack::*;
pub use packet::*;

use keylight_core::{Color, ColorMap, Layout, Result, Transport};
use tracing::debug;

/// Write frames in one open, write, close session.
///
/// A failed write aborts the session; frames already written stay unflushed.
pub fn send<T: Transport + ?Sized>(transport: &mut T, frames: &[Frame]) -> Result<()> {
    transport.open()?;
    for frame in frames {
        debug!(
            sequence = frame.sequence(),
            len = frame.len(),
            flush = frame.is_flush(),
            "writing frame"
        );
        transport.write(frame.as_bytes())?;
    }
    transport.close()
}

/// Pack, frame and send a color map
pub fn draw<T: Transport + ?Sized>(
    transport: &mut T,
    layout: &Layout,
    colors: &ColorMap,
    default: Color,
) -> Result<()> {
    let frames = pack(layout, colors, default)?.packets();
    debug!(keys = colors.len(), %default, "drawing colors");
    send(transport, &frames)
}
