use crate::actions::core::{required_params, ActionResult, CapabilityContext};
use crate::models::CallsStatusPayload;
use action_macros::action;
use serde_json::Value;

/// Handler for the get_calls_status action.
///
/// One-shot status poll for a bundle submitted via send_calls.
#[action(name = "get_calls_status")]
async fn handle_get_calls_status(ctx: &CapabilityContext, params: Value) -> ActionResult<Value> {
    let payload: CallsStatusPayload = required_params("get_calls_status", params)?;
    let status = ctx.wallet.calls_status(&payload.id).await?;
    serde_json::to_value(status).map_err(|e| format!("Failed to serialize status: {}", e))
}
