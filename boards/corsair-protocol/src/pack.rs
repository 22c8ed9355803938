//! Packing of key colors into the device's 3-bit inverted intensity format.
//!
//! Each channel is 72 bytes holding two keys per byte. The key at an even
//! nibble offset lives in bits 4-6, the key at the odd offset in bits 0-2, and
//! bits 3 and 7 are reserved. Codes are inverted: 0 is full brightness, 7 is
//! off.

use keylight_core::{Color, ColorMap, KeyboardError, Layout, Result};

use crate::packet::{self, Frame, CHANNEL_LEN, FRAME_COUNT};

/// Packed red, green and blue channel buffers
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackedColors {
    pub red: [u8; CHANNEL_LEN],
    pub green: [u8; CHANNEL_LEN],
    pub blue: [u8; CHANNEL_LEN],
}

impl PackedColors {
    /// Read back the red, green and blue codes stored at a nibble offset
    pub fn codes_at(&self, offset: u8) -> Option<[u8; 3]> {
        let slot = offset as usize / 2;
        let shift = if offset % 2 == 0 { 4 } else { 0 };
        Some([
            (self.red.get(slot)? >> shift) & 0x07,
            (self.green.get(slot)? >> shift) & 0x07,
            (self.blue.get(slot)? >> shift) & 0x07,
        ])
    }

    /// Frame the buffers for sending
    pub fn packets(&self) -> [Frame; FRAME_COUNT] {
        packet::frames(&self.red, &self.green, &self.blue)
    }
}

/// Device code for an 8-bit channel value: the top 3 bits of its complement
#[inline(always)]
pub const fn intensity_code(value: u8) -> u8 {
    !value >> 5
}

/// Brightest channel value that packs to `code`
#[inline(always)]
pub const fn code_intensity(code: u8) -> u8 {
    !((code & 0x07) << 5)
}

#[inline(always)]
const fn pack_pair(even: u8, odd: u8) -> u8 {
    (intensity_code(even) << 4) | intensity_code(odd)
}

/// Pack a color map for a layout. Keys missing from the map use `default`.
pub fn pack(layout: &Layout, colors: &ColorMap, default: Color) -> Result<PackedColors> {
    if layout.slots != CHANNEL_LEN {
        return Err(KeyboardError::InvalidLayout(
            "layout slot count does not match the protocol",
        ));
    }

    let mut nibbles = [default; CHANNEL_LEN * 2];
    for (&key, &color) in colors {
        let offset = layout.offset_of(key)?;
        *nibbles
            .get_mut(offset as usize)
            .ok_or(KeyboardError::InvalidLayout("key offset out of range"))? = color;
    }

    let mut packed = PackedColors {
        red: [0; CHANNEL_LEN],
        green: [0; CHANNEL_LEN],
        blue: [0; CHANNEL_LEN],
    };
    for (slot, pair) in nibbles.chunks_exact(2).enumerate() {
        let (even, odd) = (pair[0], pair[1]);
        packed.red[slot] = pack_pair(even.r, odd.r);
        packed.green[slot] = pack_pair(even.g, odd.g);
        packed.blue[slot] = pack_pair(even.b, odd.b);
    }
    Ok(packed)
}

#[cfg(test)]
mod tests {
    use keylight_core::{KeyDef, KeyId};

    use super::*;

    const EVEN: KeyId = KeyId(500);
    const ODD: KeyId = KeyId(501);
    const LAST: KeyId = KeyId(9);

    static LAYOUT: Layout = Layout {
        name: "test",
        width: 3,
        height: 3,
        slots: CHANNEL_LEN,
        keys: &[
            KeyDef {
                name: "even",
                id: EVEN,
                offset: 0,
            },
            KeyDef {
                name: "odd",
                id: ODD,
                offset: 1,
            },
            KeyDef {
                name: "last",
                id: LAST,
                offset: 143,
            },
        ],
        key_rows: &[],
        pixel_columns: &[],
        pixel_rows: &[],
        indicators: &[],
    };

    fn all_bytes(packed: &PackedColors) -> impl Iterator<Item = u8> + '_ {
        packed
            .red
            .iter()
            .chain(&packed.green)
            .chain(&packed.blue)
            .copied()
    }

    #[test]
    fn white_default_is_full_brightness() {
        let packed = pack(&LAYOUT, &ColorMap::new(), Color::WHITE).unwrap();
        assert!(all_bytes(&packed).all(|b| b == 0x00));
    }

    #[test]
    fn black_default_is_off() {
        let packed = pack(&LAYOUT, &ColorMap::new(), Color::BLACK).unwrap();
        assert!(all_bytes(&packed).all(|b| b == 0x77));
    }

    #[test]
    fn keys_land_in_their_nibbles() {
        let colors = ColorMap::from([
            (ODD, Color::new(255, 0, 0)),
            (LAST, Color::new(0, 255, 96)),
        ]);
        let packed = pack(&LAYOUT, &colors, Color::BLACK).unwrap();

        assert_eq!(packed.red[0], 0x70);
        assert_eq!(packed.green[0], 0x77);
        assert_eq!(packed.blue[0], 0x77);

        // 96 = 0b0110_0000, complement 0b1001_1111 -> code 4
        assert_eq!(packed.red[71], 0x77);
        assert_eq!(packed.green[71], 0x70);
        assert_eq!(packed.blue[71], 0x74);

        assert!(packed.red[1..71].iter().all(|&b| b == 0x77));
    }

    #[test]
    fn nibble_formulas_agree() {
        for v in 0..=255u8 {
            assert_eq!((!v >> 1) & 0x70, intensity_code(v) << 4);
            assert_eq!(pack_pair(v, v) & 0x88, 0, "reserved bits must stay clear");
        }
        assert_eq!(intensity_code(255), 0);
        assert_eq!(intensity_code(0), 7);
    }

    #[test]
    fn codes_read_back_within_quantization() {
        for v in 0..=255u8 {
            let color = Color::new(v, v / 2, 255 - v);
            for key in [EVEN, ODD] {
                let colors = ColorMap::from([(key, color)]);
                let packed = pack(&LAYOUT, &colors, Color::WHITE).unwrap();
                let offset = LAYOUT.offset_of(key).unwrap();
                let codes = packed.codes_at(offset).unwrap();
                assert_eq!(codes, color.channels().map(intensity_code));

                for (code, channel) in codes.into_iter().zip(color.channels()) {
                    let top = code_intensity(code);
                    assert!(top >= channel && top - channel < 32);
                }
            }
        }
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let colors = ColorMap::from([(KeyId(42), Color::WHITE)]);
        assert!(matches!(
            pack(&LAYOUT, &colors, Color::WHITE),
            Err(KeyboardError::UnknownKey(KeyId(42)))
        ));
    }

    #[test]
    fn frames_carry_channels_in_order() {
        let colors = ColorMap::from([(EVEN, Color::new(0, 255, 255))]);
        let frames = pack(&LAYOUT, &colors, Color::WHITE).unwrap().packets();
        // red of the first key is off, everything else lit
        assert_eq!(frames[0].payload()[0], 0x70);
        assert!(frames[0].payload()[1..].iter().all(|&b| b == 0));
        assert!(frames[1..4].iter().all(|f| f.payload().iter().all(|&b| b == 0)));
    }
}
