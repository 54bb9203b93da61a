//! Wire-level types for the remote input-dispatch protocol.
//!
//! Field names and value semantics here are a wire contract consumed
//! verbatim by the remote browser target, not internal convenience. The
//! parameter object serializes to JSON with camelCase keys and optional
//! fields omitted entirely when absent.

pub mod events;
pub mod modifiers;

pub use events::{KeyEventParams, KeyEventType, DISPATCH_KEY_EVENT};
pub use modifiers::{ModifierState, Modifiers};
