//! hidapi backed transport.

use std::ffi::CString;

use hidapi::{HidApi, HidDevice};
use keylight_core::{KeyboardError, KeyboardInfo, Result, Transport, FRAME_LEN};
use tracing::{debug, info};

/// Report id prepended to every frame
const REPORT_ID: u8 = 0x00;

/// Output report transport to one HID interface of a keyboard
pub struct HidTransport {
    api: HidApi,
    path: CString,
    report_len: usize,
    device: Option<HidDevice>,
}

impl HidTransport {
    /// Find the lighting interface of a connected keyboard.
    ///
    /// `interface` overrides the interface number from `info`. Without either,
    /// the highest numbered interface of the device is used.
    pub fn find(info: &KeyboardInfo, interface: Option<i32>) -> Result<Self> {
        if info.report_len < FRAME_LEN + 1 {
            return Err(KeyboardError::ReportTooShort {
                expected: FRAME_LEN + 1,
                actual: info.report_len,
            });
        }

        let api = HidApi::new()?;
        let interface = interface.or(info.interface);
        let path = api
            .device_list()
            .filter(|d| d.vendor_id() == info.vendor_id && d.product_id() == info.product_id)
            .filter(|d| interface.is_none_or(|i| d.interface_number() == i))
            .max_by_key(|d| d.interface_number())
            .map(|d| d.path().to_owned())
            .ok_or(KeyboardError::DeviceNotFound)?;
        info!(keyboard = info.name, ?path, "found keyboard");

        Ok(Self {
            api,
            path,
            report_len: info.report_len,
            device: None,
        })
    }
}

impl Transport for HidTransport {
    fn open(&mut self) -> Result<()> {
        self.device = Some(self.api.open_path(&self.path)?);
        debug!(path = ?self.path, "opened device");
        Ok(())
    }

    fn write(&mut self, frame: &[u8; FRAME_LEN]) -> Result<()> {
        let device = self.device.as_ref().ok_or(KeyboardError::NotOpen)?;

        let mut report = vec![0u8; self.report_len];
        report[0] = REPORT_ID;
        report[1..=FRAME_LEN].copy_from_slice(frame);

        let written = device.write(&report)?;
        if written < report.len() {
            return Err(KeyboardError::ShortWrite {
                expected: report.len(),
                written,
            });
        }
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.device.take().ok_or(KeyboardError::NotOpen)?;
        debug!(path = ?self.path, "closed device");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_reports_are_rejected_before_discovery() {
        let info = KeyboardInfo {
            name: "short",
            cli_name: "short",
            vendor_id: 0,
            product_id: 0,
            interface: None,
            report_len: FRAME_LEN,
        };
        assert!(matches!(
            HidTransport::find(&info, None),
            Err(KeyboardError::ReportTooShort { expected: 65, actual: 64 })
        ));
    }
}
