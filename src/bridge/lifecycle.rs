use serde_json::json;
use std::sync::Arc;

use crate::actions::core::CapabilityContext;
use crate::actions::registry::ActionRegistry;
use crate::bridge::channel::ChannelHandle;
use crate::bridge::dispatcher::RequestDispatcher;
use crate::bridge::session::SessionRegistry;
use crate::config::BridgeConfig;
use crate::models::RequestEnvelope;
use crate::sdk::SdkHandle;
use crate::wallet::WalletProvider;

/// A mounted bridge: the dispatcher plus its session bookkeeping.
///
/// `mount` mirrors the page lifecycle: the SDK is told the frame is ready
/// and the miniapp context, when available, is announced to the server
/// before any request is handled. The orchestrator then binds
/// `handle_request` as the consumer of the configured request event.
pub struct Bridge {
    dispatcher: Arc<RequestDispatcher>,
    sessions: Arc<SessionRegistry>,
    session_id: String,
}

impl Bridge {
    /// Mount a bridge over the default builtin action set.
    pub async fn mount(
        wallet: Arc<dyn WalletProvider>,
        sdk: Arc<dyn SdkHandle>,
        channel: Arc<dyn ChannelHandle>,
        config: BridgeConfig,
    ) -> Self {
        Self::mount_with(
            wallet,
            sdk,
            channel,
            config,
            Arc::new(ActionRegistry::new()),
            Arc::new(SessionRegistry::new()),
        )
        .await
    }

    /// Mount a bridge with a custom registry and shared session bookkeeping.
    pub async fn mount_with(
        wallet: Arc<dyn WalletProvider>,
        sdk: Arc<dyn SdkHandle>,
        channel: Arc<dyn ChannelHandle>,
        config: BridgeConfig,
        registry: Arc<ActionRegistry>,
        sessions: Arc<SessionRegistry>,
    ) -> Self {
        // SDK failure means the server never sees a connect event, but the
        // bridge still mounts and serves requests (matching page behavior
        // when opened outside a miniapp host).
        if let Err(e) = announce_context(sdk.as_ref(), channel.as_ref(), &config.connect_event).await
        {
            log::error!("Miniapp SDK initialization failed: {}", e);
        }

        let context = CapabilityContext::new(wallet, sdk, channel);
        let dispatcher = Arc::new(RequestDispatcher::with_registry(context, &config, registry));

        let session_id = uuid::Uuid::new_v4().to_string();
        sessions.get_or_create(&session_id);

        Self {
            dispatcher,
            sessions,
            session_id,
        }
    }

    /// Entry point to bind as the consumer of request events.
    ///
    /// Records session activity and dispatches concurrently; each envelope
    /// produces exactly one response on the channel, in no particular order.
    pub fn handle_request(&self, envelope: RequestEnvelope) {
        self.sessions.record_activity(&self.session_id);
        self.dispatcher.dispatch(envelope);
    }

    pub fn dispatcher(&self) -> &Arc<RequestDispatcher> {
        &self.dispatcher
    }

    pub fn sessions(&self) -> &Arc<SessionRegistry> {
        &self.sessions
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }
}

/// Signal readiness and announce the miniapp context when there is one.
async fn announce_context(
    sdk: &dyn SdkHandle,
    channel: &dyn ChannelHandle,
    connect_event: &str,
) -> Result<(), String> {
    sdk.ready().await?;

    if let Some(context) = sdk.context().await? {
        channel.push_event(connect_event, json!({ "context": context }))?;
    }

    Ok(())
}
