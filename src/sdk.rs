use async_trait::async_trait;
use serde_json::Value;

/// Client-side miniapp SDK as seen by the mount lifecycle.
///
/// `ready` tells the host frame the page can be revealed. `context` returns
/// the launch context when the page is running inside a miniapp host, or
/// `None` when it was opened as a plain web page.
#[async_trait]
pub trait SdkHandle: Send + Sync {
    /// Signal the host frame that the page is ready to be shown.
    async fn ready(&self) -> Result<(), String>;

    /// Fetch the miniapp launch context, if any.
    async fn context(&self) -> Result<Option<Value>, String>;
}
