pub mod channel;
pub mod dispatcher;
pub mod lifecycle;
pub mod sanitize;
pub mod session;
