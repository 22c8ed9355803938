//! Board detection and selection logic.

use std::str::FromStr;

use bpaf::Bpaf;
use hidapi::HidApi;
use k70rgb::{K70Rgb, INFO as K70RGB_INFO};
use keylight_core::{Keyboard, KeyboardError, KeyboardInfo, Layout};

use crate::dump::PrintTransport;

/// Supported board types
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Bpaf)]
#[bpaf(group_help("Board selection:"))]
pub enum BoardKind {
    /// Auto-detect connected board (default)
    #[default]
    Auto,
    /// Corsair K70 RGB
    K70rgb,
}

impl FromStr for BoardKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "k70rgb" => Ok(Self::K70rgb),
            _ => Err(format!("unknown board: {s}. Available: auto, k70rgb")),
        }
    }
}

impl std::fmt::Display for BoardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::K70rgb => write!(f, "k70rgb"),
        }
    }
}

type Open = fn(Option<i32>) -> Result<Box<dyn Keyboard>, KeyboardError>;

/// Known models by identity, with their constructors
static REGISTRY: &[(&KeyboardInfo, Open)] = &[(&K70RGB_INFO, open_k70rgb)];

fn open_k70rgb(interface: Option<i32>) -> Result<Box<dyn Keyboard>, KeyboardError> {
    Ok(Box::new(K70Rgb::open(interface)?))
}

/// Constructor of the registered model with this USB identity
fn registered(vendor_id: u16, product_id: u16) -> Option<Open> {
    REGISTRY
        .iter()
        .find(|(info, _)| info.vendor_id == vendor_id && info.product_id == product_id)
        .map(|(_, open)| *open)
}

impl BoardKind {
    /// Open the specified board, or auto-detect if Auto
    pub fn as_board(&self, interface: Option<i32>) -> Result<Box<dyn Keyboard>, KeyboardError> {
        match self {
            BoardKind::Auto => {
                // Single HID iteration, check each board's INFO
                let api = HidApi::new()?;
                let open = api
                    .device_list()
                    .find_map(|device| registered(device.vendor_id(), device.product_id()))
                    .ok_or(KeyboardError::DeviceNotFound)?;
                drop(api);
                open(interface)
            },
            BoardKind::K70rgb => open_k70rgb(interface),
        }
    }

    /// Board that prints its frames instead of sending them
    pub fn dry_run(&self) -> Result<Box<dyn Keyboard>, KeyboardError> {
        match self {
            BoardKind::Auto | BoardKind::K70rgb => {
                Ok(Box::new(K70Rgb::with_transport(PrintTransport)?))
            },
        }
    }

    /// Key geometry of the board, without opening it
    pub fn layout(&self) -> &'static Layout {
        match self {
            BoardKind::Auto | BoardKind::K70rgb => &k70rgb::LAYOUT,
        }
    }
}
