//! Framing of packed color buffers into output reports.

use keylight_core::{KeyboardError, Result, FRAME_LEN};

/// Bytes per packed color channel
pub const CHANNEL_LEN: usize = 72;
/// Maximum payload carried by one data frame
pub const PAYLOAD_LEN: usize = 60;
/// Frames per draw: four data frames and the flush frame
pub const FRAME_COUNT: usize = 5;

const HEADER_LEN: usize = 4;

const DATA_PREFIX: u8 = 0x7f;
const FLUSH_PREFIX: u8 = 0x07;
const FLUSH_SEQUENCE: u8 = 0x27;
const FLUSH_PAYLOAD: [u8; 2] = [0x00, 0xd8];

/// One 64 byte frame: prefix, sequence, payload length, reserved zero, payload
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame([u8; FRAME_LEN]);

impl Frame {
    fn new(prefix: u8, sequence: u8, payload: &[u8]) -> Self {
        debug_assert!(payload.len() <= PAYLOAD_LEN);
        let mut buf = [0u8; FRAME_LEN];
        buf[0] = prefix;
        buf[1] = sequence;
        buf[2] = payload.len() as u8;
        buf[HEADER_LEN..HEADER_LEN + payload.len()].copy_from_slice(payload);
        Self(buf)
    }

    /// Frame applying all previously sent data
    pub fn flush() -> Self {
        Self::new(FLUSH_PREFIX, FLUSH_SEQUENCE, &FLUSH_PAYLOAD)
    }

    pub fn is_flush(&self) -> bool {
        self.0[0] == FLUSH_PREFIX
    }

    pub fn prefix(&self) -> u8 {
        self.0[0]
    }

    pub fn sequence(&self) -> u8 {
        self.0[1]
    }

    pub fn len(&self) -> usize {
        self.0[2] as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn payload(&self) -> &[u8] {
        &self.0[HEADER_LEN..HEADER_LEN + self.len()]
    }

    pub fn as_bytes(&self) -> &[u8; FRAME_LEN] {
        &self.0
    }
}

/// Split the three packed channels into the ordered frame sequence.
/// Every channel must be exactly [`CHANNEL_LEN`] bytes.
pub fn packets(red: &[u8], green: &[u8], blue: &[u8]) -> Result<[Frame; FRAME_COUNT]> {
    Ok(frames(
        channel("red", red)?,
        channel("green", green)?,
        channel("blue", blue)?,
    ))
}

fn channel<'a>(name: &'static str, buf: &'a [u8]) -> Result<&'a [u8; CHANNEL_LEN]> {
    buf.try_into()
        .map_err(|_| KeyboardError::InvalidInputShape {
            channel: name,
            expected: CHANNEL_LEN,
            actual: buf.len(),
        })
}

/// Frame three channels that are known to have the protocol length
pub fn frames(
    red: &[u8; CHANNEL_LEN],
    green: &[u8; CHANNEL_LEN],
    blue: &[u8; CHANNEL_LEN],
) -> [Frame; FRAME_COUNT] {
    let payload = [&red[..], &green[..], &blue[..]].concat();
    let mut frames = [Frame::flush(); FRAME_COUNT];
    // 60, 60, 60 and 36 bytes, the flush frame stays last
    for (i, chunk) in payload.chunks(PAYLOAD_LEN).enumerate() {
        frames[i] = Frame::new(DATA_PREFIX, i as u8 + 1, chunk);
    }
    frames
}
