//! Key ids of the K70 RGB. A key's id is its nibble offset in the packed
//! color buffers.

use keylight_core::{KeyDef, KeyId};

macro_rules! define_keys {
    [$(
        $( #[doc = $doc:tt] )*
        $name:ident = $offset:literal, $cli:literal;
    )+] => {
        $(
            $( #[doc = $doc] )*
            pub const $name: KeyId = KeyId($offset);
        )+

        /// Every key with an LED
        pub const KEYS: &[KeyDef] = &[$(
            KeyDef {
                name: $cli,
                id: $name,
                offset: $offset,
            },
        )+];
    };
}

define_keys![
    /* INDICATORS */

    /// Backlight brightness button
    BRIGHTNESS = 136, "brightness";
    /// Windows key lock toggle
    GAMING = 9, "gaming";
    MUTE = 21, "mute";

    /* FUNCTION ROW */

    ESCAPE = 1, "escape";
    F1 = 13, "f1";
    F2 = 25, "f2";
    F3 = 37, "f3";
    F4 = 49, "f4";
    F5 = 61, "f5";
    F6 = 73, "f6";
    F7 = 85, "f7";
    F8 = 97, "f8";
    F9 = 109, "f9";
    F10 = 121, "f10";
    F11 = 133, "f11";
    F12 = 7, "f12";
    PRINT_SCREEN = 19, "printscreen";
    SCROLL_LOCK = 31, "scrolllock";
    PAUSE = 43, "pause";
    MEDIA_STOP = 33, "stop";
    MEDIA_PREVIOUS = 45, "previous";
    MEDIA_PLAY_PAUSE = 57, "playpause";
    MEDIA_NEXT = 69, "next";

    /* NUMBER ROW */

    GRAVE = 0, "grave";
    D1 = 12, "1";
    D2 = 24, "2";
    D3 = 36, "3";
    D4 = 48, "4";
    D5 = 60, "5";
    D6 = 72, "6";
    D7 = 84, "7";
    D8 = 96, "8";
    D9 = 108, "9";
    D0 = 120, "0";
    MINUS = 132, "minus";
    EQUALS = 6, "equals";
    BACKSPACE = 30, "backspace";
    INSERT = 55, "insert";
    HOME = 67, "home";
    PAGE_UP = 79, "pageup";
    NUM_LOCK = 81, "numlock";
    NUM_DIVIDE = 93, "numdivide";
    NUM_MULTIPLY = 105, "nummultiply";
    NUM_SUBTRACT = 117, "numsubtract";

    /* QWERTY ROW */

    TAB = 3, "tab";
    Q = 15, "q";
    W = 27, "w";
    E = 39, "e";
    R = 51, "r";
    T = 63, "t";
    Y = 75, "y";
    U = 87, "u";
    I = 99, "i";
    O = 111, "o";
    P = 123, "p";
    LEFT_BRACKET = 135, "leftbracket";
    RIGHT_BRACKET = 91, "rightbracket";
    BACKSLASH = 103, "backslash";
    DELETE = 42, "delete";
    END = 54, "end";
    PAGE_DOWN = 66, "pagedown";
    NUM_7 = 8, "num7";
    NUM_8 = 20, "num8";
    NUM_9 = 32, "num9";
    NUM_ADD = 129, "numadd";

    /* HOME ROW */

    CAPS_LOCK = 2, "capslock";
    A = 14, "a";
    S = 26, "s";
    D = 38, "d";
    F = 50, "f";
    G = 62, "g";
    H = 74, "h";
    J = 86, "j";
    K = 98, "k";
    L = 110, "l";
    SEMICOLON = 122, "semicolon";
    QUOTE = 134, "quote";
    ENTER = 127, "enter";
    NUM_4 = 56, "num4";
    NUM_5 = 68, "num5";
    NUM_6 = 80, "num6";

    /* SHIFT ROW */

    LEFT_SHIFT = 5, "leftshift";
    Z = 29, "z";
    X = 41, "x";
    C = 53, "c";
    V = 65, "v";
    B = 77, "b";
    N = 89, "n";
    M = 101, "m";
    COMMA = 113, "comma";
    PERIOD = 125, "period";
    SLASH = 137, "slash";
    RIGHT_SHIFT = 78, "rightshift";
    UP = 102, "up";
    NUM_1 = 92, "num1";
    NUM_2 = 104, "num2";
    NUM_3 = 116, "num3";
    NUM_ENTER = 141, "numenter";

    /* BOTTOM ROW */

    LEFT_CTRL = 4, "leftctrl";
    LEFT_WIN = 16, "leftwin";
    LEFT_ALT = 28, "leftalt";
    SPACE = 52, "space";
    RIGHT_ALT = 88, "rightalt";
    RIGHT_WIN = 100, "rightwin";
    MENU = 112, "menu";
    RIGHT_CTRL = 90, "rightctrl";
    LEFT = 114, "left";
    DOWN = 126, "down";
    RIGHT = 138, "right";
    NUM_0 = 128, "num0";
    NUM_DECIMAL = 140, "numdecimal";
];
