use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

use crate::bridge::channel::ChannelHandle;
use crate::sdk::SdkHandle;
use crate::wallet::WalletProvider;

/// Result type for action execution
pub type ActionResult<T> = Result<T, String>;

/// Client-side facilities an action needs to do its work.
///
/// Built once by the orchestrator at mount time and shared read-only across
/// every invocation for the bridge's lifetime. Handlers that mutate wallet
/// state (e.g. establishing a connection) do so through the wallet library,
/// which owns the concurrency-safety of those operations.
#[derive(Clone)]
pub struct CapabilityContext {
    /// Wallet library backing the builtin actions
    pub wallet: Arc<dyn WalletProvider>,

    /// Miniapp SDK handle, passed through for actions that need it
    pub sdk: Arc<dyn SdkHandle>,

    /// Channel back to the server, for actions that push their own events
    pub channel: Arc<dyn ChannelHandle>,
}

impl CapabilityContext {
    pub fn new(
        wallet: Arc<dyn WalletProvider>,
        sdk: Arc<dyn SdkHandle>,
        channel: Arc<dyn ChannelHandle>,
    ) -> Self {
        Self {
            wallet,
            sdk,
            channel,
        }
    }
}

/// Core trait for action handlers.
///
/// All actions must implement this trait. Use the `#[action]` macro
/// to avoid boilerplate code.
#[async_trait]
pub trait ActionHandler: Send + Sync {
    /// Unique action name (e.g. "get_account", "send_calls")
    fn name(&self) -> &str;

    /// Execute the action against the capability context.
    ///
    /// `params` is the request envelope's params value, `Null` when the
    /// wire carried none. Failures become the response's `error` string.
    async fn handle(&self, ctx: &CapabilityContext, params: Value) -> ActionResult<Value>;
}

/// Deserialize params for an action that requires them.
pub fn required_params<T: DeserializeOwned>(action: &str, params: Value) -> ActionResult<T> {
    serde_json::from_value(params).map_err(|e| format!("Invalid params for {}: {}", action, e))
}

/// Deserialize params for an action whose fields are all optional,
/// treating an absent (`null`) payload as empty.
pub fn optional_params<T: DeserializeOwned + Default>(
    action: &str,
    params: Value,
) -> ActionResult<T> {
    if params.is_null() {
        return Ok(T::default());
    }
    required_params(action, params)
}
