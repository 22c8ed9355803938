//! Raw report transport seam.

use crate::Result;

/// Length of one frame of the color protocol, without the report id
pub const FRAME_LEN: usize = 64;

/// A session based link to the device.
///
/// One draw is one `open`, several `write`s in order, then one `close`.
/// Implementations are not required to be reentrant.
pub trait Transport {
    fn open(&mut self) -> Result<()>;
    /// Write one frame. The report id is added by the transport.
    fn write(&mut self, frame: &[u8; FRAME_LEN]) -> Result<()>;
    fn close(&mut self) -> Result<()>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn open(&mut self) -> Result<()> {
        (**self).open()
    }

    fn write(&mut self, frame: &[u8; FRAME_LEN]) -> Result<()> {
        (**self).write(frame)
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }
}
