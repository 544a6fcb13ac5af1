use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::mpsc;

/// Wire event names shared with the server side.
pub mod events {
    /// Inbound request envelopes from the server
    pub const CLIENT_REQUEST: &str = "client:request";

    /// Outbound response envelopes to the server
    pub const CLIENT_RESPONSE: &str = "client:response";

    /// Mount-time announce carrying the miniapp context
    pub const MINIAPP_CONNECT: &str = "miniapp:connect";
}

/// One named event pushed toward the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelEvent {
    pub name: String,
    pub payload: Value,
}

/// Push side of the host messaging channel.
///
/// Implementations wrap whatever the host page provides (a live-view hook,
/// a test harness). A push failure is unrecoverable for the event being
/// sent; the caller logs it and moves on.
pub trait ChannelHandle: Send + Sync {
    /// Push one named event with a JSON payload.
    fn push_event(&self, event: &str, payload: Value) -> Result<(), String>;
}

/// In-memory channel backed by an unbounded mpsc pair.
///
/// Used by tests and local harnesses; production mounts wrap the real host
/// channel instead.
#[derive(Clone)]
pub struct EventChannel {
    sender: mpsc::UnboundedSender<ChannelEvent>,
}

impl EventChannel {
    /// Create a channel plus the receiving end for the consumer.
    pub fn pair() -> (Self, mpsc::UnboundedReceiver<ChannelEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl ChannelHandle for EventChannel {
    fn push_event(&self, event: &str, payload: Value) -> Result<(), String> {
        self.sender
            .send(ChannelEvent {
                name: event.to_string(),
                payload,
            })
            .map_err(|_| "Channel receiver has gone away".to_string())
    }
}
