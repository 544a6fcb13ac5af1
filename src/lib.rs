pub mod models;
pub mod wallet;
pub mod sdk;
pub mod actions;
pub mod bridge;
pub mod config;

pub use actions::core::{ActionHandler, ActionResult, CapabilityContext};
pub use actions::registry::ActionRegistry;
pub use bridge::channel::{ChannelEvent, ChannelHandle, EventChannel};
pub use bridge::dispatcher::RequestDispatcher;
pub use bridge::lifecycle::Bridge;
pub use bridge::session::{BridgeSession, SessionRegistry};
pub use config::BridgeConfig;
pub use models::{CorrelationId, RequestEnvelope, ResponseEnvelope};
