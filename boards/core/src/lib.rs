//! Core traits and types for keylight keyboards.
//!
//! This crate provides:
//! - The `Keyboard` trait implemented by each supported model
//! - `Layout`, the static key geometry table of a model
//! - The image sampler turning pictures into per-key colors
//! - The `Transport` seam used to send protocol frames

mod board;
mod color;
mod error;
pub mod layout;
pub mod sampler;
mod transport;

pub use board::{Keyboard, KeyboardInfo};
pub use color::{Color, ColorMap, FitMode, KeyId};
pub use error::{KeyboardError, Result};
pub use layout::{KeyDef, KeyGeometryEntry, Layout};
pub use transport::{Transport, FRAME_LEN};
