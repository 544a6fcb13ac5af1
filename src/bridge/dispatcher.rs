use serde_json::Value;
use std::sync::Arc;

use crate::actions::core::CapabilityContext;
use crate::actions::registry::ActionRegistry;
use crate::bridge::sanitize::sanitize_value;
use crate::config::BridgeConfig;
use crate::models::{RequestEnvelope, ResponseEnvelope};

/// Executes inbound request envelopes and emits exactly one response each.
///
/// The dispatcher is the boundary where every failure becomes data: unknown
/// action names, handler errors, and parameter validation all travel back as
/// `ok=false` envelopes. Nothing propagates past `handle` except a failing
/// channel push, which is fatal for that one request and logged.
pub struct RequestDispatcher {
    context: CapabilityContext,
    registry: Arc<ActionRegistry>,
    response_event: String,
}

impl RequestDispatcher {
    /// Create a dispatcher over the default builtin action set.
    pub fn new(context: CapabilityContext, config: &BridgeConfig) -> Self {
        Self::with_registry(context, config, Arc::new(ActionRegistry::new()))
    }

    /// Create a dispatcher over a custom registry.
    pub fn with_registry(
        context: CapabilityContext,
        config: &BridgeConfig,
        registry: Arc<ActionRegistry>,
    ) -> Self {
        Self {
            context,
            registry,
            response_event: config.response_event.clone(),
        }
    }

    /// Handle one request envelope, emitting exactly one response.
    pub async fn handle(&self, envelope: RequestEnvelope) {
        let RequestEnvelope { id, action, params } = envelope;

        let response = match self.execute(&action, params).await {
            Ok(result) => ResponseEnvelope::success(id, action, sanitize_value(result)),
            Err(message) => ResponseEnvelope::error(id, action, message),
        };

        self.emit(response);
    }

    /// Spawn `handle` as its own task so requests interleave.
    ///
    /// Completion order between concurrent requests is unspecified; callers
    /// correlate responses by id, never by arrival order.
    pub fn dispatch(self: &Arc<Self>, envelope: RequestEnvelope) {
        let dispatcher = Arc::clone(self);
        tokio::spawn(async move {
            dispatcher.handle(envelope).await;
        });
    }

    async fn execute(&self, action: &str, params: Value) -> Result<Value, String> {
        let handler = self
            .registry
            .get(action)
            .ok_or_else(|| format!("Unknown action: {}", action))?;

        handler.handle(&self.context, params).await
    }

    fn emit(&self, response: ResponseEnvelope) {
        let payload = match serde_json::to_value(&response) {
            Ok(payload) => payload,
            Err(e) => {
                log::error!(
                    "Failed to serialize response for action {}: {}",
                    response.action,
                    e
                );
                return;
            }
        };

        if let Err(e) = self.context.channel.push_event(&self.response_event, payload) {
            log::error!(
                "Failed to push response for action {}: {}",
                response.action,
                e
            );
        }
    }
}
