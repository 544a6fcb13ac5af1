/// Integration tests: full bridge flow over an in-memory channel.
///
/// Covers the request/response contract end to end:
/// - mount announce followed by correlated responses
/// - unknown action and wallet failure envelopes
/// - concurrent requests correlating by id
/// - big-integer receipt fields arriving as decimal strings
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::mpsc;

use minibridge::bridge::channel::ChannelEvent;
use minibridge::wallet::{Account, CallsStatus, WalletProvider};
use minibridge::{
    ActionHandler, ActionRegistry, ActionResult, Bridge, BridgeConfig, CapabilityContext,
    CorrelationId, EventChannel, RequestEnvelope, SessionRegistry,
};
use minibridge::models::SendCallsPayload;
use minibridge::sdk::SdkHandle;

/// Wallet double answering from fixed values.
struct ScriptedWallet {
    address: String,
    status: CallsStatus,
}

impl ScriptedWallet {
    fn new(address: &str) -> Self {
        Self {
            address: address.to_string(),
            status: CallsStatus {
                id: "0xbundle".to_string(),
                status: "success".to_string(),
                receipts: None,
            },
        }
    }

    fn with_status(mut self, status: CallsStatus) -> Self {
        self.status = status;
        self
    }
}

#[async_trait]
impl WalletProvider for ScriptedWallet {
    async fn account(&self) -> Result<Account, String> {
        Ok(Account::connected(self.address.clone()))
    }

    async fn connect(&self) -> Result<Account, String> {
        Ok(Account::connected(self.address.clone()))
    }

    async fn send_calls(&self, _request: SendCallsPayload) -> Result<String, String> {
        Ok(self.status.id.clone())
    }

    async fn capabilities(&self, _account: Option<String>) -> Result<Value, String> {
        Ok(serde_json::json!({}))
    }

    async fn calls_status(&self, id: &str) -> Result<CallsStatus, String> {
        if id != self.status.id {
            return Err(format!("Unknown bundle: {}", id));
        }
        Ok(self.status.clone())
    }

    async fn wait_for_calls_status(&self, id: &str) -> Result<CallsStatus, String> {
        self.calls_status(id).await
    }
}

/// SDK double with a fixed launch context.
struct ScriptedSdk {
    context: Option<Value>,
}

#[async_trait]
impl SdkHandle for ScriptedSdk {
    async fn ready(&self) -> Result<(), String> {
        Ok(())
    }

    async fn context(&self) -> Result<Option<Value>, String> {
        Ok(self.context.clone())
    }
}

async fn mount_bridge(
    wallet: ScriptedWallet,
    context: Option<Value>,
) -> (Bridge, mpsc::UnboundedReceiver<ChannelEvent>) {
    let (channel, events) = EventChannel::pair();
    let bridge = Bridge::mount(
        Arc::new(wallet),
        Arc::new(ScriptedSdk { context }),
        Arc::new(channel),
        BridgeConfig::default(),
    )
    .await;
    (bridge, events)
}

fn request(id: i64, action: &str, params: Value) -> RequestEnvelope {
    RequestEnvelope::new(
        Some(CorrelationId::Number(serde_json::Number::from(id))),
        action,
        params,
    )
}

#[tokio::test]
async fn test_mount_then_request_flow() {
    let context = serde_json::json!({ "user": { "fid": 42 } });
    let (bridge, mut events) =
        mount_bridge(ScriptedWallet::new("0xABC"), Some(context.clone())).await;

    // Mount announce arrives first
    let connect = events.recv().await.unwrap();
    assert_eq!(connect.name, "miniapp:connect");
    assert_eq!(connect.payload["context"], context);

    // Then the request/response cycle
    bridge.handle_request(request(1, "get_account", Value::Null));

    let response = events.recv().await.unwrap();
    assert_eq!(response.name, "client:response");
    assert_eq!(
        response.payload,
        serde_json::json!({
            "id": 1,
            "action": "get_account",
            "ok": true,
            "result": { "address": "0xABC" }
        })
    );
}

#[tokio::test]
async fn test_unknown_action_envelope() {
    let (bridge, mut events) = mount_bridge(ScriptedWallet::new("0xABC"), None).await;

    bridge.handle_request(request(2, "nonexistent", Value::Null));

    let response = events.recv().await.unwrap();
    assert_eq!(
        response.payload,
        serde_json::json!({
            "id": 2,
            "action": "nonexistent",
            "ok": false,
            "error": "Unknown action: nonexistent"
        })
    );
}

#[tokio::test]
async fn test_wallet_error_travels_back_verbatim() {
    let (bridge, mut events) = mount_bridge(ScriptedWallet::new("0xABC"), None).await;

    bridge.handle_request(request(
        3,
        "get_calls_status",
        serde_json::json!({ "id": "0xmissing" }),
    ));

    let response = events.recv().await.unwrap();
    assert_eq!(response.payload["ok"], false);
    assert_eq!(response.payload["error"], "Unknown bundle: 0xmissing");
}

#[tokio::test]
async fn test_receipt_big_integers_become_strings() {
    let status = CallsStatus {
        id: "0xbundle".to_string(),
        status: "success".to_string(),
        receipts: Some(vec![serde_json::json!({
            "gasUsed": 21000,
            "blockNumber": 9007199254740993u64,
            "value": 18446744073709551615u64
        })]),
    };
    let (bridge, mut events) =
        mount_bridge(ScriptedWallet::new("0xABC").with_status(status), None).await;

    bridge.handle_request(request(
        4,
        "wait_for_calls_status",
        serde_json::json!({ "id": "0xbundle" }),
    ));

    let response = events.recv().await.unwrap();
    let receipt = &response.payload["result"]["receipts"][0];
    assert_eq!(receipt["gasUsed"], 21000);
    assert_eq!(receipt["blockNumber"], "9007199254740993");
    assert_eq!(receipt["value"], "18446744073709551615");
}

struct DelayedEchoAction;

#[async_trait]
impl ActionHandler for DelayedEchoAction {
    fn name(&self) -> &str {
        "delayed_echo"
    }

    async fn handle(&self, _ctx: &CapabilityContext, params: Value) -> ActionResult<Value> {
        tokio::time::sleep(std::time::Duration::from_millis(40)).await;
        Ok(params)
    }
}

#[tokio::test]
async fn test_concurrent_requests_each_answered_once() {
    let mut registry = ActionRegistry::new();
    registry.register(Arc::new(DelayedEchoAction));

    let (channel, mut events) = EventChannel::pair();
    let bridge = Bridge::mount_with(
        Arc::new(ScriptedWallet::new("0xABC")),
        Arc::new(ScriptedSdk { context: None }),
        Arc::new(channel),
        BridgeConfig::default(),
        Arc::new(registry),
        Arc::new(SessionRegistry::new()),
    )
    .await;

    // Slow request first; the fast builtin overtakes it
    bridge.handle_request(request(10, "delayed_echo", serde_json::json!("late")));
    bridge.handle_request(request(11, "get_account", Value::Null));

    let first = events.recv().await.unwrap();
    let second = events.recv().await.unwrap();

    assert_eq!(first.payload["id"], 11);
    assert_eq!(second.payload["id"], 10);
    assert_eq!(second.payload["result"], "late");

    // Exactly one response per request
    assert!(events.try_recv().is_err());
}

#[tokio::test]
async fn test_duplicate_ids_are_independent_requests() {
    let (bridge, mut events) = mount_bridge(ScriptedWallet::new("0xABC"), None).await;

    bridge.handle_request(request(7, "get_account", Value::Null));
    bridge.handle_request(request(7, "get_account", Value::Null));

    let first = events.recv().await.unwrap();
    let second = events.recv().await.unwrap();

    assert_eq!(first.payload["id"], 7);
    assert_eq!(second.payload["id"], 7);
    assert_eq!(bridge.sessions().get_or_create(bridge.session_id()).request_count, 2);
}
