use crate::actions::core::{ActionResult, CapabilityContext};
use action_macros::action;
use serde_json::Value;

/// Handler for the connect_account action.
///
/// Triggers the wallet's connection prompt. The user can reject it, in
/// which case the wallet's error message travels back to the server.
#[action(name = "connect_account")]
async fn handle_connect_account(ctx: &CapabilityContext, _params: Value) -> ActionResult<Value> {
    let account = ctx.wallet.connect().await?;
    serde_json::to_value(account).map_err(|e| format!("Failed to serialize account: {}", e))
}
