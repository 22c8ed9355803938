use crate::KeyId;

/// Errors that can occur while drawing to a keyboard
#[derive(Debug, thiserror::Error)]
pub enum KeyboardError {
    /// Device was not found
    #[error("device not found")]
    DeviceNotFound,

    /// A packed channel buffer had the wrong length
    #[error("{channel} channel must be {expected} bytes, got {actual}")]
    InvalidInputShape {
        channel: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Output report cannot carry a whole frame
    #[error("report length must be at least {expected} bytes, got {actual}")]
    ReportTooShort { expected: usize, actual: usize },

    /// Key id is not part of the keyboard layout
    #[error("unknown key: {0}")]
    UnknownKey(KeyId),

    /// Source image cannot be sampled
    #[error("unsupported image: {0}")]
    UnsupportedImage(String),

    /// Static key geometry is inconsistent
    #[error("invalid layout: {0}")]
    InvalidLayout(&'static str),

    /// Frame written before the transport was opened
    #[error("transport is not open")]
    NotOpen,

    /// Device accepted fewer bytes than the report length
    #[error("short write: {written} of {expected} bytes")]
    ShortWrite { expected: usize, written: usize },

    /// HID communication error
    #[error("hid error: {0}")]
    Hid(#[from] hidapi::HidError),

    /// Generic IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, KeyboardError>;
