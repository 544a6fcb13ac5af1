use crate::actions::core::{required_params, ActionResult, CapabilityContext};
use crate::models::CallsStatusPayload;
use action_macros::action;
use serde_json::Value;

/// Handler for the wait_for_calls_status action.
///
/// Resolves once the wallet reports a final status for the bundle. Any
/// polling interval or timeout belongs to the wallet library; a bundle the
/// wallet never settles leaves this request permanently unanswered.
#[action(name = "wait_for_calls_status")]
async fn handle_wait_for_calls_status(
    ctx: &CapabilityContext,
    params: Value,
) -> ActionResult<Value> {
    let payload: CallsStatusPayload = required_params("wait_for_calls_status", params)?;
    let status = ctx.wallet.wait_for_calls_status(&payload.id).await?;
    serde_json::to_value(status).map_err(|e| format!("Failed to serialize status: {}", e))
}
