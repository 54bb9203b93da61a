//! In-process queued channel adapter.
//!
//! [`QueuedChannel`] implements [`CommandChannel`] by forwarding each
//! command to a bounded `tokio::sync::mpsc` queue. The embedding
//! application owns the receiving end: a transport task pops
//! [`CommandRequest`]s, performs the real protocol send, and resolves the
//! per-request `oneshot` ack. The controller's await on `send` completes
//! only when the transport task acks, so ordering guarantees survive the
//! indirection.
//!
//! Dropping the receiver closes the queue; senders then observe
//! [`ChannelError::Closed`]. A dropped ack sender (transport task died
//! mid-request) surfaces the same way.

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::{mpsc, oneshot};
use tracing::trace;

use super::{ChannelError, CommandChannel};

/// One queued command awaiting transport: the method name, its parameter
/// object, and the ack sender the transport task must resolve.
#[derive(Debug)]
pub struct CommandRequest {
    /// Protocol command name (e.g. `Input.dispatchKeyEvent`).
    pub method: String,
    /// JSON parameter object, consumed verbatim by the remote side.
    pub params: Value,
    /// Resolve with the delivery outcome; dropping it signals `Closed`.
    pub ack: oneshot::Sender<Result<(), ChannelError>>,
}

/// [`CommandChannel`] implementation backed by a bounded in-process queue.
#[derive(Debug, Clone)]
pub struct QueuedChannel {
    tx: mpsc::Sender<CommandRequest>,
}

impl QueuedChannel {
    /// Creates a channel with the given queue capacity, returning the
    /// channel and the receiver the transport task must consume.
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<CommandRequest>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self { tx }, rx)
    }
}

#[async_trait]
impl CommandChannel for QueuedChannel {
    async fn send(&self, method: &str, params: Value) -> Result<(), ChannelError> {
        let (ack_tx, ack_rx) = oneshot::channel();
        trace!(method, "queueing command");

        self.tx
            .send(CommandRequest {
                method: method.to_owned(),
                params,
                ack: ack_tx,
            })
            .await
            .map_err(|_| ChannelError::Closed)?;

        // Ack sender dropped without a verdict means the transport task
        // went away between dequeue and send.
        ack_rx.await.map_err(|_| ChannelError::Closed)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_send_delivers_method_and_params_to_receiver() {
        // Arrange
        let (channel, mut rx) = QueuedChannel::new(4);

        // Act: consume and ack from a transport stand-in
        let consumer = tokio::spawn(async move {
            let req = rx.recv().await.expect("request should arrive");
            let captured = (req.method.clone(), req.params.clone());
            req.ack.send(Ok(())).unwrap();
            captured
        });
        channel
            .send("Input.dispatchKeyEvent", json!({"type": "keyUp"}))
            .await
            .unwrap();

        // Assert
        let (method, params) = consumer.await.unwrap();
        assert_eq!(method, "Input.dispatchKeyEvent");
        assert_eq!(params, json!({"type": "keyUp"}));
    }

    #[tokio::test]
    async fn test_send_resolves_only_after_ack() {
        // Arrange
        let (channel, mut rx) = QueuedChannel::new(1);
        let consumer = tokio::spawn(async move {
            let req = rx.recv().await.expect("request should arrive");
            // Hold the ack briefly so the sender must actually wait.
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
            req.ack.send(Ok(())).unwrap();
        });

        // Act / Assert: send completes (it would hang forever without the ack)
        channel.send("Input.dispatchKeyEvent", json!({})).await.unwrap();
        consumer.await.unwrap();
    }

    #[tokio::test]
    async fn test_transport_failure_propagates_through_ack() {
        // Arrange
        let (channel, mut rx) = QueuedChannel::new(1);
        tokio::spawn(async move {
            let req = rx.recv().await.expect("request should arrive");
            req.ack
                .send(Err(ChannelError::Transport("socket reset".to_owned())))
                .unwrap();
        });

        // Act
        let result = channel.send("Input.dispatchKeyEvent", json!({})).await;

        // Assert
        assert_eq!(
            result,
            Err(ChannelError::Transport("socket reset".to_owned()))
        );
    }

    #[tokio::test]
    async fn test_dropped_receiver_surfaces_closed() {
        // Arrange
        let (channel, rx) = QueuedChannel::new(1);
        drop(rx);

        // Act
        let result = channel.send("Input.dispatchKeyEvent", json!({})).await;

        // Assert
        assert_eq!(result, Err(ChannelError::Closed));
    }

    #[tokio::test]
    async fn test_dropped_ack_sender_surfaces_closed() {
        // Arrange: transport dequeues the request but dies before acking
        let (channel, mut rx) = QueuedChannel::new(1);
        tokio::spawn(async move {
            let req = rx.recv().await.expect("request should arrive");
            drop(req.ack);
        });

        // Act
        let result = channel.send("Input.dispatchKeyEvent", json!({})).await;

        // Assert
        assert_eq!(result, Err(ChannelError::Closed));
    }
}
