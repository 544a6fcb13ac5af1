use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};

/// One mounted bridge instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeSession {
    /// Session ID
    pub session_id: String,

    /// Mount time
    pub mounted_at: DateTime<Utc>,

    /// Last request time
    pub last_activity: DateTime<Utc>,

    /// Handled request count
    pub request_count: u64,
}

impl BridgeSession {
    pub fn new(session_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            session_id: session_id.into(),
            mounted_at: now,
            last_activity: now,
            request_count: 0,
        }
    }

    /// Record one handled request.
    pub fn record_activity(&mut self) {
        self.last_activity = Utc::now();
        self.request_count += 1;
    }
}

/// Registry of mounted bridge sessions.
///
/// Lets a host embedding several bridges (one per page) observe what is
/// mounted and how busy each mount is. Purely in-memory.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: DashMap<String, BridgeSession>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Get or create a session.
    pub fn get_or_create(&self, session_id: &str) -> BridgeSession {
        self.sessions
            .entry(session_id.to_string())
            .or_insert_with(|| BridgeSession::new(session_id))
            .clone()
    }

    /// Record activity on a session.
    pub fn record_activity(&self, session_id: &str) {
        if let Some(mut session) = self.sessions.get_mut(session_id) {
            session.record_activity();
        }
    }

    /// List all known sessions.
    pub fn list_sessions(&self) -> Vec<BridgeSession> {
        self.sessions.iter().map(|r| r.value().clone()).collect()
    }

    /// Number of known sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Remove a session (page unmounted).
    pub fn remove(&self, session_id: &str) -> Option<BridgeSession> {
        self.sessions.remove(session_id).map(|(_, v)| v)
    }

    /// Drop sessions inactive for more than the given number of minutes.
    pub fn cleanup_inactive(&self, inactive_minutes: i64) {
        let cutoff = Utc::now() - chrono::Duration::minutes(inactive_minutes);
        self.sessions
            .retain(|_, session| session.last_activity > cutoff);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bridge_session_new() {
        let session = BridgeSession::new("test-session");
        assert_eq!(session.session_id, "test-session");
        assert_eq!(session.request_count, 0);
    }

    #[test]
    fn test_bridge_session_record_activity() {
        let mut session = BridgeSession::new("test-session");
        let initial_time = session.last_activity;

        std::thread::sleep(std::time::Duration::from_millis(10));
        session.record_activity();

        assert_eq!(session.request_count, 1);
        assert!(session.last_activity >= initial_time);
    }

    #[test]
    fn test_registry_get_or_create() {
        let registry = SessionRegistry::new();

        let session = registry.get_or_create("session-1");
        assert_eq!(session.session_id, "session-1");

        // Fetching again returns the same session
        let again = registry.get_or_create("session-1");
        assert_eq!(again.session_id, "session-1");

        assert_eq!(registry.session_count(), 1);
    }

    #[test]
    fn test_registry_record_activity() {
        let registry = SessionRegistry::new();
        registry.get_or_create("session-1");

        registry.record_activity("session-1");
        registry.record_activity("session-1");

        let session = registry.get_or_create("session-1");
        assert_eq!(session.request_count, 2);
    }

    #[test]
    fn test_registry_remove() {
        let registry = SessionRegistry::new();
        registry.get_or_create("session-1");

        let removed = registry.remove("session-1");
        assert!(removed.is_some());
        assert_eq!(registry.session_count(), 0);
    }

    #[test]
    fn test_registry_cleanup_keeps_active_sessions() {
        let registry = SessionRegistry::new();
        registry.get_or_create("session-1");

        registry.cleanup_inactive(5);
        assert_eq!(registry.session_count(), 1);
    }
}
