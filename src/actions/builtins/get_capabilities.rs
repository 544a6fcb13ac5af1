use crate::actions::core::{optional_params, ActionResult, CapabilityContext};
use crate::models::GetCapabilitiesPayload;
use action_macros::action;
use serde_json::Value;

/// Handler for the get_capabilities action.
///
/// Returns the wallet's capability map (per-chain feature support such as
/// paymaster or atomic batching), passed through verbatim. Params are
/// optional; without them the wallet answers for the connected account.
#[action(name = "get_capabilities")]
async fn handle_get_capabilities(ctx: &CapabilityContext, params: Value) -> ActionResult<Value> {
    let payload: GetCapabilitiesPayload = optional_params("get_capabilities", params)?;
    ctx.wallet.capabilities(payload.account).await
}
