pub mod envelope;
pub mod payloads;

pub use envelope::{CorrelationId, RequestEnvelope, ResponseEnvelope};
pub use payloads::{CallsStatusPayload, GetCapabilitiesPayload, SendCallsPayload, WalletCall};
