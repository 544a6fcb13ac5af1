mod get_account;
mod connect_account;
mod send_calls;
mod get_capabilities;
mod get_calls_status;
mod wait_for_calls_status;

pub use get_account::GetAccountAction;
pub use connect_account::ConnectAccountAction;
pub use send_calls::SendCallsAction;
pub use get_capabilities::GetCapabilitiesAction;
pub use get_calls_status::GetCallsStatusAction;
pub use wait_for_calls_status::WaitForCallsStatusAction;
