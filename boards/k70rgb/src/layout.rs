//! Key geometry of the K70 RGB.
//!
//! Images are resampled onto a 68x19 canvas. Each key averages the 3x3 block
//! starting at its column in `PIXEL_COLUMNS` and its row's `PIXEL_ROWS` entry.

use keylight_core::{KeyId, Layout};

use crate::keys::*;

/// Canvas width in pixels
pub const WIDTH: u32 = 68;
/// Canvas height in pixels
pub const HEIGHT: u32 = 19;

#[rustfmt::skip]
const KEY_ROWS: &[&[KeyId]] = &[
    &[ESCAPE, F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12, PRINT_SCREEN, SCROLL_LOCK, PAUSE, MEDIA_STOP, MEDIA_PREVIOUS, MEDIA_PLAY_PAUSE, MEDIA_NEXT],
    &[GRAVE, D1, D2, D3, D4, D5, D6, D7, D8, D9, D0, MINUS, EQUALS, BACKSPACE, INSERT, HOME, PAGE_UP, NUM_LOCK, NUM_DIVIDE, NUM_MULTIPLY, NUM_SUBTRACT],
    &[TAB, Q, W, E, R, T, Y, U, I, O, P, LEFT_BRACKET, RIGHT_BRACKET, BACKSLASH, DELETE, END, PAGE_DOWN, NUM_7, NUM_8, NUM_9, NUM_ADD],
    &[CAPS_LOCK, A, S, D, F, G, H, J, K, L, SEMICOLON, QUOTE, ENTER, NUM_4, NUM_5, NUM_6],
    &[LEFT_SHIFT, Z, X, C, V, B, N, M, COMMA, PERIOD, SLASH, RIGHT_SHIFT, UP, NUM_1, NUM_2, NUM_3, NUM_ENTER],
    &[LEFT_CTRL, LEFT_WIN, LEFT_ALT, SPACE, RIGHT_ALT, RIGHT_WIN, MENU, RIGHT_CTRL, LEFT, DOWN, RIGHT, NUM_0, NUM_DECIMAL],
];

// backspace, enter and the right half of the bottom row sit on half pixels,
// rounded down
#[rustfmt::skip]
const PIXEL_COLUMNS: &[&[u32]] = &[
    &[0, 5, 8, 11, 14, 19, 22, 25, 28, 33, 36, 39, 42, 46, 49, 52, 56, 59, 62, 65],
    &[0, 3, 6, 9, 12, 15, 18, 21, 24, 27, 30, 33, 36, 40, 46, 49, 52, 56, 59, 62, 65],
    &[1, 4, 7, 10, 13, 16, 19, 22, 25, 28, 31, 34, 37, 41, 46, 49, 52, 56, 59, 62, 65],
    &[1, 5, 8, 11, 14, 17, 20, 23, 26, 29, 32, 35, 40, 56, 59, 62],
    &[2, 6, 9, 12, 15, 18, 21, 24, 27, 30, 33, 39, 49, 56, 59, 62, 65],
    &[1, 4, 8, 19, 30, 34, 37, 41, 46, 49, 52, 57, 62],
];

const PIXEL_ROWS: &[u32] = &[0, 4, 7, 10, 13, 16];

/// Status keys outside of the drawable grid
pub const INDICATORS: &[KeyId] = &[
    BRIGHTNESS,
    GAMING,
    MUTE,
    MEDIA_PREVIOUS,
    MEDIA_PLAY_PAUSE,
    MEDIA_NEXT,
];

pub static LAYOUT: Layout = Layout {
    name: "K70 RGB",
    width: WIDTH,
    height: HEIGHT,
    slots: 72,
    keys: KEYS,
    key_rows: KEY_ROWS,
    pixel_columns: PIXEL_COLUMNS,
    pixel_rows: PIXEL_ROWS,
    indicators: INDICATORS,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_have_matching_shapes() {
        assert_eq!(KEY_ROWS.len(), PIXEL_COLUMNS.len());
        assert_eq!(KEY_ROWS.len(), PIXEL_ROWS.len());
        for (keys, columns) in KEY_ROWS.iter().zip(PIXEL_COLUMNS) {
            assert_eq!(keys.len(), columns.len());
        }
    }

    #[test]
    fn layout_is_valid() {
        LAYOUT.validate().unwrap();
    }

    #[test]
    fn every_key_has_a_window_except_status_keys() {
        let unsampled: Vec<_> = KEYS
            .iter()
            .filter(|k| LAYOUT.sampling_window(k.id).is_err())
            .map(|k| k.id)
            .collect();
        assert_eq!(unsampled, [BRIGHTNESS, GAMING, MUTE]);
        assert_eq!(LAYOUT.entries().count(), KEYS.len() - 3);
    }

    #[test]
    fn lookups() {
        assert_eq!(LAYOUT.offset_of(ESCAPE).unwrap(), 1);
        assert_eq!(LAYOUT.slot_of(NUM_ENTER).unwrap(), 70);
        assert_eq!(LAYOUT.sampling_window(SPACE).unwrap(), (19, 16));
        assert_eq!(LAYOUT.sampling_window(NUM_ADD).unwrap(), (65, 7));
        assert_eq!(LAYOUT.key_by_name("Space"), Some(SPACE));
        assert_eq!(LAYOUT.key_by_name("hyper"), None);
    }
}
