use crate::actions::core::{required_params, ActionResult, CapabilityContext};
use crate::models::SendCallsPayload;
use action_macros::action;
use serde_json::Value;

/// Handler for the send_calls action.
///
/// Submits a batch of calls to the wallet as one bundle and returns its id.
/// The server polls the bundle with get_calls_status or blocks on
/// wait_for_calls_status.
#[action(name = "send_calls")]
async fn handle_send_calls(ctx: &CapabilityContext, params: Value) -> ActionResult<Value> {
    let payload: SendCallsPayload = required_params("send_calls", params)?;
    let id = ctx.wallet.send_calls(payload).await?;
    Ok(serde_json::json!({ "id": id }))
}
