use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Correlation token echoed from request to response.
///
/// The server side allocates ids; the bridge treats them as opaque and
/// carries either wire form (JSON number or string) back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CorrelationId {
    Number(serde_json::Number),
    Text(String),
}

/// One inbound action request from the server.
///
/// `id` is None when the caller does not need correlation. `params` defaults
/// to `null` when absent on the wire; handlers decide what that means.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestEnvelope {
    #[serde(default)]
    pub id: Option<CorrelationId>,

    /// Name of the action to execute (e.g. "get_account")
    pub action: String,

    /// Action parameters
    #[serde(default)]
    pub params: Value,
}

impl RequestEnvelope {
    pub fn new(id: Option<CorrelationId>, action: impl Into<String>, params: Value) -> Self {
        Self {
            id,
            action: action.into(),
            params,
        }
    }
}

/// The single response emitted for a request envelope.
///
/// `result` is present iff `ok`; `error` is present iff not. `id` and
/// `action` always echo the triggering request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub id: Option<CorrelationId>,

    pub action: String,

    /// Whether the action settled successfully
    pub ok: bool,

    /// Sanitized handler output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,

    /// Human-readable failure message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResponseEnvelope {
    /// Create a success response
    pub fn success(id: Option<CorrelationId>, action: impl Into<String>, result: Value) -> Self {
        Self {
            id,
            action: action.into(),
            ok: true,
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response
    pub fn error(
        id: Option<CorrelationId>,
        action: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id,
            action: action.into(),
            ok: false,
            result: None,
            error: Some(message.into()),
        }
    }
}
