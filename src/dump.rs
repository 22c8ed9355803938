//! Transport printing frames to stdout, for trying commands without a keyboard.

use keylight_core::{Result, Transport, FRAME_LEN};

pub struct PrintTransport;

impl Transport for PrintTransport {
    fn open(&mut self) -> Result<()> {
        println!("open");
        Ok(())
    }

    fn write(&mut self, frame: &[u8; FRAME_LEN]) -> Result<()> {
        // report id first, as sent over hid
        let hex = std::iter::once(&0u8)
            .chain(frame)
            .map(|b| format!("{b:02x}"))
            .collect::<Vec<_>>()
            .join(" ");
        println!("write {hex}");
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        println!("close");
        Ok(())
    }
}
