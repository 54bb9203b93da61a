//! Named key → legacy Windows virtual key code table.
//!
//! Reference: Windows Virtual-Key Codes (winuser.h) and the DOM
//! `KeyboardEvent.key` key-name vocabulary.
//!
//! The table covers named keys (`"Enter"`, `"ArrowLeft"`, `"F1"`) and the
//! shifted punctuation characters whose code belongs to the *physical* key
//! rather than the character: pressing Shift+1 produces `'!'`, but the wire
//! code is still 49 (the digit-1 key). Unshifted/shifted pairs on the same
//! physical key therefore share one code (`';'` and `':'` are both 186).
//!
//! Letters and digits are intentionally absent: they resolve through the
//! uppercase single-character fallback in [`super::virtual_key_for`], which
//! keeps the table small without losing any mappings.
//!
//! The table is a compile-time `match`, so it is immutable process-wide data
//! with no initialization step and no mutation path.

/// Looks up the virtual key code for a named key.
///
/// Returns `None` for key names without a table entry; the caller then
/// applies the single-character fallback.
pub fn named_key_code(key: &str) -> Option<u16> {
    let code = match key {
        "Cancel" => 3,
        "Help" => 6,
        "Backspace" => 8,
        "Tab" => 9,
        "Clear" => 12,
        "Enter" => 13,
        "Shift" => 16,
        "Control" => 17,
        "Alt" => 18,
        "Pause" => 19,
        "CapsLock" => 20,
        "Escape" => 27,
        "Convert" => 28,
        "NonConvert" => 29,
        "Accept" => 30,
        "ModeChange" => 31,
        "PageUp" => 33,
        "PageDown" => 34,
        "End" => 35,
        "Home" => 36,
        "ArrowLeft" => 37,
        "ArrowUp" => 38,
        "ArrowRight" => 39,
        "ArrowDown" => 40,
        "Select" => 41,
        "Print" => 42,
        "Execute" => 43,
        "PrintScreen" => 44,
        "Insert" => 45,
        "Delete" => 46,
        ")" => 48,
        "!" => 49,
        "@" => 50,
        "#" => 51,
        "$" => 52,
        "%" => 53,
        "^" => 54,
        "&" => 55,
        "*" => 56,
        "(" => 57,
        "Meta" => 91,
        "ContextMenu" => 93,
        "F1" => 112,
        "F2" => 113,
        "F3" => 114,
        "F4" => 115,
        "F5" => 116,
        "F6" => 117,
        "F7" => 118,
        "F8" => 119,
        "F9" => 120,
        "F10" => 121,
        "F11" => 122,
        "F12" => 123,
        "F13" => 124,
        "F14" => 125,
        "F15" => 126,
        "F16" => 127,
        "F17" => 128,
        "F18" => 129,
        "F19" => 130,
        "F20" => 131,
        "F21" => 132,
        "F22" => 133,
        "F23" => 134,
        "F24" => 135,
        "NumLock" => 144,
        "ScrollLock" => 145,
        "VolumeMute" => 181,
        "VolumeDown" => 182,
        "VolumeUp" => 183,
        ";" | ":" => 186,
        "=" | "+" => 187,
        "," | "<" => 188,
        "-" | "_" => 189,
        "." | ">" => 190,
        "/" | "?" => 191,
        "`" | "~" => 192,
        "[" | "{" => 219,
        "\\" | "|" => 220,
        "]" | "}" => 221,
        "'" | "\"" => 222,
        "AltGraph" => 225,
        "Attn" => 246,
        "CrSel" => 247,
        "ExSel" => 248,
        "EraseEof" => 249,
        "Play" => 250,
        "ZoomOut" => 251,
        _ => return None,
    };
    Some(code)
}
