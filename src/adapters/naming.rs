//! # In-Memory Naming Service
//!
//! A naming service held entirely in process memory, with the same atomic
//! bind contract a ledger-backed client provides. Used for tests and local
//! development wiring; clones share one binding table, so several registry
//! instances can race against the same namespace.

use crate::config::NamingConfig;
use crate::ports::outbound::{NamingError, NamingService};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
struct NameBinding {
    address: String,
    public_key: String,
}

/// In-memory naming service with atomic binds.
#[derive(Clone)]
pub struct InMemoryNamingService {
    config: NamingConfig,
    bindings: Arc<Mutex<HashMap<String, NameBinding>>>,
}

impl InMemoryNamingService {
    /// Create an empty namespace from explicit configuration.
    pub fn new(config: NamingConfig) -> Self {
        tracing::debug!(
            "[mailbox] in-memory naming service up (gateway {})",
            config.gateway_url
        );
        Self {
            config,
            bindings: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// The configuration this client was wired with.
    pub fn config(&self) -> &NamingConfig {
        &self.config
    }

    /// Number of names currently bound.
    pub fn bound_count(&self) -> usize {
        self.bindings.lock().unwrap().len()
    }

    /// The ledger address bound to `name`, if any.
    pub fn address(&self, name: &str) -> Option<String> {
        self.bindings
            .lock()
            .unwrap()
            .get(name)
            .map(|binding| binding.address.clone())
    }
}

impl Default for InMemoryNamingService {
    fn default() -> Self {
        Self::new(NamingConfig::default())
    }
}

#[async_trait::async_trait]
impl NamingService for InMemoryNamingService {
    async fn is_available(&self, name: &str) -> Result<bool, NamingError> {
        Ok(!self.bindings.lock().unwrap().contains_key(name))
    }

    async fn bind(&self, name: &str, address: &str, public_key: &str) -> Result<(), NamingError> {
        // Check-and-insert under one lock: this is the atomicity the
        // registry relies on to lose races loudly instead of silently.
        let mut bindings = self.bindings.lock().unwrap();
        if bindings.contains_key(name) {
            return Err(NamingError::AlreadyBound {
                name: name.to_string(),
            });
        }
        bindings.insert(
            name.to_string(),
            NameBinding {
                address: address.to_string(),
                public_key: public_key.to_string(),
            },
        );
        Ok(())
    }

    async fn public_key(&self, name: &str) -> Result<String, NamingError> {
        self.bindings
            .lock()
            .unwrap()
            .get(name)
            .map(|binding| binding.public_key.clone())
            .ok_or_else(|| NamingError::NotBound {
                name: name.to_string(),
            })
    }
}
