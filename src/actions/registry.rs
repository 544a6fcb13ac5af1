use super::core::ActionHandler;
use std::collections::HashMap;
use std::sync::Arc;

/// Registry for managing action handlers.
///
/// Actions are registered at initialization and looked up by name while
/// requests are dispatched. Registration never invokes a handler.
pub struct ActionRegistry {
    handlers: HashMap<String, Arc<dyn ActionHandler>>,
}

impl ActionRegistry {
    /// Create a new registry with all builtin actions registered.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register_builtins();
        registry
    }

    /// Create an empty registry for a fully custom action set.
    pub fn empty() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register an action handler, overwriting any previous one of the same name.
    pub fn register(&mut self, handler: Arc<dyn ActionHandler>) {
        self.handlers.insert(handler.name().to_string(), handler);
    }

    /// Get an action handler by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn ActionHandler>> {
        self.handlers.get(name).cloned()
    }

    /// Register all builtin actions.
    fn register_builtins(&mut self) {
        use super::builtins::*;

        self.register(Arc::new(GetAccountAction));
        self.register(Arc::new(ConnectAccountAction));
        self.register(Arc::new(SendCallsAction));
        self.register(Arc::new(GetCapabilitiesAction));
        self.register(Arc::new(GetCallsStatusAction));
        self.register(Arc::new(WaitForCallsStatusAction));
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
