use async_trait::async_trait;
use serde_json::Value;

use super::provider::{Account, CallsStatus, WalletProvider, STATUS_SUCCESS};
use crate::models::SendCallsPayload;

/// Scripted wallet for tests.
///
/// Every method answers from fixed fields; `failing` makes all of them fail
/// with the same message, mimicking a user rejection or provider error.
pub struct FakeWallet {
    address: Option<String>,
    bundle_id: String,
    capabilities: Value,
    status: CallsStatus,
    failure: Option<String>,
}

impl FakeWallet {
    pub fn connected(address: &str) -> Self {
        Self {
            address: Some(address.to_string()),
            bundle_id: "0xbundle".to_string(),
            capabilities: serde_json::json!({}),
            status: CallsStatus {
                id: "0xbundle".to_string(),
                status: STATUS_SUCCESS.to_string(),
                receipts: None,
            },
            failure: None,
        }
    }

    pub fn disconnected() -> Self {
        let mut wallet = Self::connected("");
        wallet.address = None;
        wallet
    }

    pub fn failing(message: &str) -> Self {
        let mut wallet = Self::connected("");
        wallet.address = None;
        wallet.failure = Some(message.to_string());
        wallet
    }

    pub fn with_capabilities(mut self, capabilities: Value) -> Self {
        self.capabilities = capabilities;
        self
    }

    pub fn with_status(mut self, status: CallsStatus) -> Self {
        self.status = status;
        self
    }

    fn check_failure(&self) -> Result<(), String> {
        match &self.failure {
            Some(message) => Err(message.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl WalletProvider for FakeWallet {
    async fn account(&self) -> Result<Account, String> {
        self.check_failure()?;
        Ok(Account {
            address: self.address.clone(),
        })
    }

    async fn connect(&self) -> Result<Account, String> {
        self.check_failure()?;
        match &self.address {
            Some(address) => Ok(Account::connected(address.clone())),
            None => Err("No connector available".to_string()),
        }
    }

    async fn send_calls(&self, request: SendCallsPayload) -> Result<String, String> {
        self.check_failure()?;
        if request.calls.is_empty() {
            return Err("Empty call bundle".to_string());
        }
        Ok(self.bundle_id.clone())
    }

    async fn capabilities(&self, _account: Option<String>) -> Result<Value, String> {
        self.check_failure()?;
        Ok(self.capabilities.clone())
    }

    async fn calls_status(&self, id: &str) -> Result<CallsStatus, String> {
        self.check_failure()?;
        if id != self.status.id {
            return Err(format!("Unknown bundle: {}", id));
        }
        Ok(self.status.clone())
    }

    async fn wait_for_calls_status(&self, id: &str) -> Result<CallsStatus, String> {
        self.calls_status(id).await
    }
}
