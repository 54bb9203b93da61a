//! The keyboard input controller.
//!
//! [`Keyboard`] tracks which keys are currently held and translates
//! key-level operations (press, release, type a string, inject a raw
//! character) into `Input.dispatchKeyEvent` commands on the
//! [`CommandChannel`].
//!
//! # Held keys and modifier bits
//!
//! The held set contains a key name exactly when a down event for it has
//! been dispatched without a matching up event. The modifier bitmask of
//! every outgoing event is recomputed from the held set immediately before
//! dispatch — after inserting the key for a down event, after removing it
//! for an up event — never cached.
//!
//! # Failure semantics
//!
//! Channel failures propagate unchanged and abort the operation that
//! triggered them; no retries. The held-set mutation made before the
//! dispatch is NOT rolled back: after a failed down, the key counts as
//! held from the caller's perspective until an explicit release corrects
//! it. Callers that care should release the key on error.
//!
//! # Ordering
//!
//! [`Keyboard::press`] fully awaits the down acknowledgement before
//! issuing the up event, and [`Keyboard::type_text`] fully awaits each
//! character's release before starting the next. The remote channel is not
//! assumed to preserve the order of concurrently in-flight commands, so
//! strict sequencing is the only way to guarantee the target observes
//! events in typing order.
//!
//! Mutating operations take `&mut self`: one logical actor drives one
//! keyboard, and the borrow checker enforces what would otherwise be an
//! unsynchronized-interleaving hazard.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use cdp_input_core::{
    virtual_key_for, KeyEventParams, KeyEventType, ModifierState, Modifiers, DISPATCH_KEY_EVENT,
};
use thiserror::Error;
use tracing::trace;

use crate::channel::{ChannelError, CommandChannel};

/// Errors returned by keyboard operations.
#[derive(Debug, Error)]
pub enum InputError {
    /// The command channel failed to deliver or the target rejected the
    /// command.
    #[error("command dispatch failed: {0}")]
    Channel(#[from] ChannelError),

    /// The event parameters could not be encoded as JSON.
    #[error("failed to encode command parameters: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Options for a key-down event.
///
/// When `text` is set, the down event is textual (`keyDown`) and carries
/// the character payload in both `text` and `unmodifiedText`; otherwise it
/// is a raw, non-textual down (`rawKeyDown`).
#[derive(Debug, Clone, Default)]
pub struct KeyDownOptions {
    /// Character input the key produces, if any.
    pub text: Option<String>,
}

impl KeyDownOptions {
    /// Convenience constructor for a textual down event.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

/// Keyboard input controller for one remote target.
pub struct Keyboard {
    channel: Arc<dyn CommandChannel>,
    /// Key names currently in the down state.
    held: HashSet<String>,
}

impl Keyboard {
    /// Creates a controller with no keys held, dispatching through
    /// `channel`.
    pub fn new(channel: Arc<dyn CommandChannel>) -> Self {
        Self {
            channel,
            held: HashSet::new(),
        }
    }

    /// Dispatches a key-down event and marks the key as held.
    ///
    /// The modifier mask is computed after the key is added, so a modifier
    /// key's own down event already carries its bit.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] if the channel call fails. The key stays
    /// marked as held even then.
    pub async fn down(&mut self, key: &str, options: KeyDownOptions) -> Result<(), InputError> {
        self.held.insert(key.to_owned());

        let event_type = if options.text.is_some() {
            KeyEventType::KeyDown
        } else {
            KeyEventType::RawKeyDown
        };
        let params = KeyEventParams {
            event_type,
            modifiers: self.modifier_mask(),
            windows_virtual_key_code: Some(virtual_key_for(key)),
            key: key.to_owned(),
            text: options.text.clone(),
            unmodified_text: options.text,
        };
        self.dispatch(params).await
    }

    /// Dispatches a key-up event and clears the key from the held set.
    ///
    /// Releasing a key that is not held is not an error; the up event is
    /// dispatched regardless.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] if the channel call fails.
    pub async fn up(&mut self, key: &str) -> Result<(), InputError> {
        self.held.remove(key);

        let params = KeyEventParams {
            event_type: KeyEventType::KeyUp,
            modifiers: self.modifier_mask(),
            windows_virtual_key_code: Some(virtual_key_for(key)),
            key: key.to_owned(),
            text: None,
            unmodified_text: None,
        };
        self.dispatch(params).await
    }

    /// Presses and releases a key: down, await the acknowledgement, then
    /// up.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] if either dispatch fails. A failed down
    /// leaves the key held and the up event unsent.
    pub async fn press(&mut self, key: &str, options: KeyDownOptions) -> Result<(), InputError> {
        self.down(key, options).await?;
        self.up(key).await
    }

    /// Types a string by pressing and releasing each character in order.
    ///
    /// Iterates by Unicode code point; each character generates a textual
    /// down and an up, fully acknowledged before the next character
    /// starts. Resolves after the final release completes.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] on the first failed dispatch; later
    /// characters are not attempted.
    pub async fn type_text(&mut self, text: &str) -> Result<(), InputError> {
        for ch in text.chars() {
            let key = ch.to_string();
            self.press(&key, KeyDownOptions::with_text(key.clone())).await?;
        }
        Ok(())
    }

    /// Like [`type_text`](Keyboard::type_text), pausing between characters.
    ///
    /// Useful against pages that debounce or rate-limit input handlers.
    /// The delay is inserted after each character's release, not after the
    /// last one.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] on the first failed dispatch.
    pub async fn type_text_with_delay(
        &mut self,
        text: &str,
        delay: Duration,
    ) -> Result<(), InputError> {
        let mut chars = text.chars().peekable();
        while let Some(ch) = chars.next() {
            let key = ch.to_string();
            self.press(&key, KeyDownOptions::with_text(key.clone())).await?;
            if chars.peek().is_some() {
                tokio::time::sleep(delay).await;
            }
        }
        Ok(())
    }

    /// Injects a single character without a down/up pair.
    ///
    /// Dispatches one `char` event carrying the character as `text`,
    /// `unmodifiedText`, and `key`, with the current modifier mask. Used
    /// for character insertion that has no discrete key (autocompleted or
    /// IME-composed input).
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] if the channel call fails.
    pub async fn send_character(&self, ch: &str) -> Result<(), InputError> {
        let params = KeyEventParams {
            event_type: KeyEventType::Char,
            modifiers: self.modifier_mask(),
            windows_virtual_key_code: None,
            key: ch.to_owned(),
            text: Some(ch.to_owned()),
            unmodified_text: Some(ch.to_owned()),
        };
        self.dispatch(params).await
    }

    /// Snapshot of which modifier keys are held right now.
    pub fn modifiers(&self) -> ModifierState {
        ModifierState {
            shift: self.held.contains("Shift"),
            alt: self.held.contains("Alt"),
            meta: self.held.contains("Meta"),
            control: self.held.contains("Control"),
        }
    }

    /// Wire bitmask for the current held set.
    fn modifier_mask(&self) -> Modifiers {
        Modifiers::from(self.modifiers())
    }

    /// Serializes the params and sends one dispatch command.
    async fn dispatch(&self, params: KeyEventParams) -> Result<(), InputError> {
        trace!(
            event_type = params.event_type.as_str(),
            key = %params.key,
            modifiers = params.modifiers.bits(),
            "dispatching key event"
        );
        let value = serde_json::to_value(&params)?;
        self.channel.send(DISPATCH_KEY_EVENT, value).await?;
        Ok(())
    }
}
