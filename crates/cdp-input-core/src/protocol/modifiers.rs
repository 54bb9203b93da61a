//! Modifier key bitmask and the derived four-flag snapshot.
//!
//! The bitmask layout is fixed by the remote input-dispatch wire format and
//! must never change:
//!
//! - Bit 0: Alt
//! - Bit 1: Control
//! - Bit 2: Meta (Windows/Command/Super)
//! - Bit 3: Shift
//!
//! Note the order differs from the reading order of most keyboard shortcut
//! notations (Ctrl first); it is the remote protocol's order, not ours.

use serde::{Deserialize, Serialize};

/// Modifier bitmask carried in the `modifiers` field of every dispatched
/// key event.
///
/// Serializes transparently as the integer value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Modifiers(pub u8);

impl Modifiers {
    pub const ALT: u8 = 1 << 0;
    pub const CONTROL: u8 = 1 << 1;
    pub const META: u8 = 1 << 2;
    pub const SHIFT: u8 = 1 << 3;

    /// An empty mask (no modifiers held).
    pub const NONE: Modifiers = Modifiers(0);

    /// Returns `true` if the Alt bit is set.
    pub fn alt(&self) -> bool {
        self.0 & Self::ALT != 0
    }

    /// Returns `true` if the Control bit is set.
    pub fn control(&self) -> bool {
        self.0 & Self::CONTROL != 0
    }

    /// Returns `true` if the Meta (Win/Cmd/Super) bit is set.
    pub fn meta(&self) -> bool {
        self.0 & Self::META != 0
    }

    /// Returns `true` if the Shift bit is set.
    pub fn shift(&self) -> bool {
        self.0 & Self::SHIFT != 0
    }

    /// Returns the raw bitmask value.
    pub fn bits(&self) -> u8 {
        self.0
    }
}

impl From<ModifierState> for Modifiers {
    /// Packs a four-flag snapshot into the wire bitmask.
    fn from(state: ModifierState) -> Self {
        let mut mask = 0;
        if state.alt {
            mask |= Modifiers::ALT;
        }
        if state.control {
            mask |= Modifiers::CONTROL;
        }
        if state.meta {
            mask |= Modifiers::META;
        }
        if state.shift {
            mask |= Modifiers::SHIFT;
        }
        Modifiers(mask)
    }
}

/// Read-only snapshot of which modifier keys are currently held.
///
/// Derived from the controller's held-key set on demand; never stored or
/// cached, so it always reflects the set at the instant it was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModifierState {
    pub shift: bool,
    pub alt: bool,
    pub meta: bool,
    pub control: bool,
}
