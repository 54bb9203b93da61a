//! # cdp-input-client
//!
//! Keyboard input controller for a remotely controlled browser session.
//!
//! The [`Keyboard`] controller translates high-level key semantics (key
//! name, modifier state, character text) into discrete low-level
//! `Input.dispatchKeyEvent` commands and tracks which keys are currently
//! held so every event carries the correct modifier bitmask.
//!
//! This crate owns no network transport and no event loop. Commands leave
//! through the [`channel::CommandChannel`] trait, a single-method async
//! boundary the embedding application implements over its own protocol
//! connection. For in-process wiring, [`channel::QueuedChannel`] forwards
//! commands to a transport task over a bounded queue.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use cdp_input_client::{Keyboard, KeyDownOptions};
//! use cdp_input_client::channel::QueuedChannel;
//!
//! # async fn example() -> Result<(), cdp_input_client::InputError> {
//! let (channel, mut requests) = QueuedChannel::new(32);
//! // A transport task would consume `requests` and ack each one.
//! # tokio::spawn(async move { while let Some(r) = requests.recv().await { let _ = r.ack.send(Ok(())); } });
//! let mut keyboard = Keyboard::new(Arc::new(channel));
//!
//! keyboard.down("Shift", KeyDownOptions::default()).await?;
//! keyboard.type_text("hello").await?;
//! keyboard.up("Shift").await?;
//! # Ok(())
//! # }
//! ```

pub mod channel;
pub mod keyboard;

pub use channel::{ChannelError, CommandChannel, QueuedChannel};
pub use keyboard::{InputError, KeyDownOptions, Keyboard};

// Re-export the shared wire types so callers need only one crate.
pub use cdp_input_core::{KeyEventParams, KeyEventType, ModifierState, Modifiers};
