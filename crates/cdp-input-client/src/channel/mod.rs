//! The async command-channel boundary between the controller and the
//! transport.
//!
//! The controller never touches a socket. Everything it dispatches goes
//! through [`CommandChannel::send`]: one named command, one JSON parameter
//! object, one ack-or-failure result. The embedding application implements
//! this trait over its real protocol connection; tests implement it with
//! recording or failing doubles.
//!
//! Timeout and retry semantics belong entirely to the implementation. The
//! controller performs no retries and no recovery: a failed send aborts the
//! operation that issued it.

pub mod queue;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

pub use queue::{CommandRequest, QueuedChannel};

/// Errors surfaced by a command channel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChannelError {
    /// The underlying transport failed to deliver the command.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The remote target received the command but rejected it.
    #[error("remote target rejected {method}: {message}")]
    Rejected { method: String, message: String },

    /// The channel is closed; no further commands can be delivered.
    #[error("command channel closed")]
    Closed,
}

/// Single-method async boundary for delivering protocol commands.
///
/// Implementations must be usable from behind an `Arc<dyn CommandChannel>`;
/// the controller holds one and calls [`send`](CommandChannel::send) once
/// per dispatched event, awaiting the acknowledgement before continuing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommandChannel: Send + Sync {
    /// Sends one named command with its parameter object and waits for the
    /// remote acknowledgement.
    ///
    /// # Errors
    ///
    /// Returns [`ChannelError`] if delivery fails or the remote side
    /// rejects the command.
    async fn send(&self, method: &str, params: Value) -> Result<(), ChannelError>;
}
