use serde::{Deserialize, Serialize};

// NOTE: Custom actions define their payloads next to their handlers.
// This file contains only the payloads of the builtin wallet actions.

/// One call inside a send_calls bundle.
///
/// All fields are 0x-prefixed hex strings as the wallet expects them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletCall {
    /// Target address; absent for contract creation
    #[serde(default)]
    pub to: Option<String>,
    /// Call data
    #[serde(default)]
    pub data: Option<String>,
    /// Value to transfer, in wei
    #[serde(default)]
    pub value: Option<String>,
}

/// Payload for the send_calls action.
///
/// Submits a batch of calls to the wallet as one bundle. The wallet answers
/// with a bundle id that get_calls_status / wait_for_calls_status accept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendCallsPayload {
    /// The calls to submit, executed in order
    pub calls: Vec<WalletCall>,
    /// Sending account; defaults to the connected account
    #[serde(default)]
    pub from: Option<String>,
    /// Chain to submit on (e.g. "0x2105"); defaults to the active chain
    #[serde(default)]
    pub chain_id: Option<String>,
    /// Capability-specific extras, passed to the wallet verbatim
    /// Example: { "paymasterService": { "url": "https://..." } }
    #[serde(default)]
    pub capabilities: Option<serde_json::Value>,
}

/// Payload for the get_calls_status and wait_for_calls_status actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallsStatusPayload {
    /// Bundle id returned by send_calls
    pub id: String,
}

/// Payload for the get_capabilities action.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetCapabilitiesPayload {
    /// Account to query; defaults to the connected account
    #[serde(default)]
    pub account: Option<String>,
}
