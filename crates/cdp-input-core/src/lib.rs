//! # cdp-input-core
//!
//! Shared wire-level types for driving keyboard input in a remotely
//! controlled browser: the `Input.dispatchKeyEvent` parameter object, the
//! modifier bitmask, and the key-name → legacy virtual key code table.
//!
//! This crate is used by the `cdp-input-client` controller. It has zero
//! dependencies on async runtimes, network sockets, or OS APIs — everything
//! here is immutable data and pure functions, so it can be unit-tested and
//! benchmarked in isolation.
//!
//! # Why a "virtual key code"? (for beginners)
//!
//! The DevTools input-dispatch wire format identifies keys two ways at once:
//! a symbolic key name (`"Enter"`, `"ArrowLeft"`, `"a"`) and a legacy numeric
//! "Windows virtual key code" (`13`, `37`, `65`). Browsers inherited the
//! numeric codes from the Windows `VK_*` constants and still expect them on
//! synthetic events, so the dispatcher must send both. The [`keymap`] module
//! owns that translation, including the fallback rule that lets single
//! printable characters not in the table (e.g. lowercase letters) resolve
//! through uppercasing.

pub mod keymap;
pub mod protocol;

// Re-export the most-used items at the crate root so callers can write
// `cdp_input_core::KeyEventParams` instead of the full module path.
pub use keymap::virtual_key_for;
pub use protocol::events::{KeyEventParams, KeyEventType, DISPATCH_KEY_EVENT};
pub use protocol::modifiers::{ModifierState, Modifiers};
