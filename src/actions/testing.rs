use std::sync::Arc;

use tokio::sync::mpsc;

use super::core::CapabilityContext;
use crate::bridge::channel::{ChannelEvent, EventChannel};
use crate::sdk::testing::StaticSdk;
use crate::wallet::testing::FakeWallet;

/// Build a capability context around a scripted wallet, returning the
/// receiving end of the channel so tests can observe pushed events.
pub(crate) fn wallet_context(
    wallet: FakeWallet,
) -> (CapabilityContext, mpsc::UnboundedReceiver<ChannelEvent>) {
    let (channel, events) = EventChannel::pair();
    let ctx = CapabilityContext::new(
        Arc::new(wallet),
        Arc::new(StaticSdk::without_context()),
        Arc::new(channel),
    );
    (ctx, events)
}
