//! The `Input.dispatchKeyEvent` command and its parameter object.

use serde::{Deserialize, Serialize};

use super::modifiers::Modifiers;

/// Command name for dispatching a synthetic key event to the remote target.
pub const DISPATCH_KEY_EVENT: &str = "Input.dispatchKeyEvent";

/// Event subtype carried in the `type` field.
///
/// `KeyDown` is a textual key-down (the key produces visible character
/// input); `RawKeyDown` is a non-textual one. Which of the two a press uses
/// is decided by whether the caller supplied character text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KeyEventType {
    KeyDown,
    RawKeyDown,
    KeyUp,
    Char,
}

impl KeyEventType {
    /// Returns the wire spelling of this subtype.
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyEventType::KeyDown => "keyDown",
            KeyEventType::RawKeyDown => "rawKeyDown",
            KeyEventType::KeyUp => "keyUp",
            KeyEventType::Char => "char",
        }
    }
}

/// Parameter object for [`DISPATCH_KEY_EVENT`].
///
/// Serializes to a JSON object with camelCase keys. Optional fields are
/// omitted entirely when `None` — the remote side distinguishes "absent"
/// from "null", so they must not serialize as null.
///
/// Down and up events always carry `windows_virtual_key_code` (0 when the
/// key name is unresolvable); `char` events omit it. `text` and
/// `unmodified_text` are present together on textual events and always
/// equal — this dispatcher does not model modifier-transformed text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyEventParams {
    /// Event subtype.
    #[serde(rename = "type")]
    pub event_type: KeyEventType,
    /// Modifier bitmask at the instant of dispatch.
    pub modifiers: Modifiers,
    /// Legacy virtual key code; absent on `char` events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub windows_virtual_key_code: Option<u16>,
    /// Logical key name as supplied by the caller.
    pub key: String,
    /// Character payload for textual events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Character payload ignoring modifier transforms; equals `text`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unmodified_text: Option<String>,
}
