use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::SendCallsPayload;

/// Bundle status reported while calls are still in flight
pub const STATUS_PENDING: &str = "pending";
/// Final status for a bundle whose calls all landed
pub const STATUS_SUCCESS: &str = "success";
/// Final status for a bundle that failed or was reverted
pub const STATUS_FAILURE: &str = "failure";

/// Snapshot of the currently selected wallet account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Connected address; absent when no wallet is connected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Account {
    pub fn connected(address: impl Into<String>) -> Self {
        Self {
            address: Some(address.into()),
        }
    }

    pub fn disconnected() -> Self {
        Self { address: None }
    }
}

/// Status of a submitted call bundle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallsStatus {
    /// Bundle id the status belongs to
    pub id: String,

    /// One of "pending", "success", "failure"
    pub status: String,

    /// Per-call receipts once the bundle landed, as the wallet reports them.
    /// Receipt fields like gasUsed and blockNumber arrive as raw integers
    /// that may exceed the JSON safe range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipts: Option<Vec<Value>>,
}

impl CallsStatus {
    pub fn is_final(&self) -> bool {
        self.status != STATUS_PENDING
    }
}

/// Wallet capability library as seen by the builtin actions.
///
/// Implementations wrap whatever provider the host page injects. All
/// prompting, waiting, and timeout behavior lives behind this trait; the
/// bridge core never imposes its own.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Current account without prompting the user.
    async fn account(&self) -> Result<Account, String>;

    /// Prompt for a wallet connection and return the connected account.
    async fn connect(&self) -> Result<Account, String>;

    /// Submit a call bundle, returning its id.
    async fn send_calls(&self, request: SendCallsPayload) -> Result<String, String>;

    /// Capability map of the wallet, optionally scoped to one account.
    async fn capabilities(&self, account: Option<String>) -> Result<Value, String>;

    /// One-shot status poll for a submitted bundle.
    async fn calls_status(&self, id: &str) -> Result<CallsStatus, String>;

    /// Resolve once the bundle reaches a final status.
    async fn wait_for_calls_status(&self, id: &str) -> Result<CallsStatus, String>;
}
