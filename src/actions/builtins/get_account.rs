use crate::actions::core::{ActionResult, CapabilityContext};
use action_macros::action;
use serde_json::Value;

/// Handler for the get_account action.
///
/// Reads the currently selected account from the wallet library without
/// prompting. A disconnected wallet yields a result with no address.
#[action(name = "get_account")]
async fn handle_get_account(ctx: &CapabilityContext, _params: Value) -> ActionResult<Value> {
    let account = ctx.wallet.account().await?;
    serde_json::to_value(account).map_err(|e| format!("Failed to serialize account: {}", e))
}
