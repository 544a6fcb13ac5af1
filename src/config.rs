/// Wire configuration for a bridge mount.
///
/// The bridge itself keeps no persistent state; this struct only names the
/// channel events shared with the server-side counterpart, so a host
/// application can embed it in its own configuration file.
use serde::{Deserialize, Serialize};

use crate::bridge::channel::events;

/// Event names used on the channel between bridge and server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Event the server pushes request envelopes on
    #[serde(default = "default_request_event")]
    pub request_event: String,

    /// Event response envelopes are pushed back on
    #[serde(default = "default_response_event")]
    pub response_event: String,

    /// Event for the mount-time miniapp context announce
    #[serde(default = "default_connect_event")]
    pub connect_event: String,
}

fn default_request_event() -> String {
    events::CLIENT_REQUEST.to_string()
}

fn default_response_event() -> String {
    events::CLIENT_RESPONSE.to_string()
}

fn default_connect_event() -> String {
    events::MINIAPP_CONNECT.to_string()
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            request_event: default_request_event(),
            response_event: default_response_event(),
            connect_event: default_connect_event(),
        }
    }
}
