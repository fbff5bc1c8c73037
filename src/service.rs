//! # Mailbox Registry Service
//!
//! Application service that implements [`MailboxRegistryApi`], coordinating
//! the multi-step registration protocol across the outbound ports and
//! owning the local mailbox list.
//!
//! ## Architecture
//!
//! - Implements the inbound port (`MailboxRegistryApi`)
//! - Uses the outbound ports (`NamingService`, `IdentityGenerator`,
//!   `KeyValueStore`)
//! - Delegates name validation and ECDH math to the domain layer
//!
//! ## Concurrency
//!
//! Local state sits behind one mutex held only across synchronous sections,
//! never across an await. Two concurrent creates for the same name may both
//! pass the availability check; the naming service's atomic bind decides the
//! winner and the loser gets `BindConflict`.

use crate::domain::ecdh;
use crate::domain::entities::{
    Mailbox, MailboxRecord, Message, MessageDirection, SharedSecret,
};
use crate::domain::errors::MailboxError;
use crate::domain::name;
use crate::ports::inbound::MailboxRegistryApi;
use crate::ports::outbound::{IdentityGenerator, KeyValueStore, NamingError, NamingService};
use std::sync::Mutex;

/// Store key for the serialized mailbox list.
const MAILBOXES_KEY: &str = "mailboxes";
/// Store key for the serialized message list.
const MESSAGES_KEY: &str = "messages";

/// The mailbox registry.
///
/// Construction loads the persisted mailbox list; every mutation rewrites
/// the full list. The persisted records carry public fields only — private
/// keys live in memory on the mailboxes created by this instance and
/// nowhere else.
pub struct MailboxService<N, G, S>
where
    N: NamingService,
    G: IdentityGenerator,
    S: KeyValueStore,
{
    naming: N,
    identity: G,
    state: Mutex<RegistryState<S>>,
}

struct RegistryState<S> {
    mailboxes: Vec<Mailbox>,
    store: S,
}

impl<N, G, S> MailboxService<N, G, S>
where
    N: NamingService,
    G: IdentityGenerator,
    S: KeyValueStore,
{
    /// Create a registry over the given collaborators, loading the persisted
    /// mailbox list from the store.
    ///
    /// # Errors
    /// * `MailboxError::Persistence` - the store failed or held undecodable
    ///   data
    pub fn new(naming: N, identity: G, store: S) -> Result<Self, MailboxError> {
        let mailboxes = match store.get(MAILBOXES_KEY).map_err(persistence)? {
            Some(json) => {
                let records: Vec<MailboxRecord> =
                    serde_json::from_str(&json).map_err(persistence)?;
                records.into_iter().map(MailboxRecord::into_mailbox).collect()
            }
            None => Vec::new(),
        };

        tracing::debug!("[mailbox] registry up with {} mailbox(es)", mailboxes.len());

        Ok(Self {
            naming,
            identity,
            state: Mutex::new(RegistryState { mailboxes, store }),
        })
    }

    fn persist_mailboxes(state: &mut RegistryState<S>) -> Result<(), MailboxError> {
        let records: Vec<MailboxRecord> = state.mailboxes.iter().map(Mailbox::record).collect();
        let json = serde_json::to_string(&records).map_err(persistence)?;
        state.store.put(MAILBOXES_KEY, &json).map_err(persistence)
    }

    fn load_messages(state: &RegistryState<S>) -> Result<Vec<Message>, MailboxError> {
        match state.store.get(MESSAGES_KEY).map_err(persistence)? {
            Some(json) => serde_json::from_str(&json).map_err(persistence),
            None => Ok(Vec::new()),
        }
    }
}

/// Map a store or serialization failure into the registry error space.
fn persistence(e: impl std::fmt::Display) -> MailboxError {
    MailboxError::Persistence(e.to_string())
}

/// Map a naming failure from a call where only transport errors are
/// expected (availability check, resolution round-trip).
fn naming_transport(e: NamingError) -> MailboxError {
    MailboxError::Network(e.to_string())
}

#[async_trait::async_trait]
impl<N, G, S> MailboxRegistryApi for MailboxService<N, G, S>
where
    N: NamingService,
    G: IdentityGenerator,
    S: KeyValueStore,
{
    async fn create_mailbox(
        &self,
        name: &str,
        passphrase: &str,
    ) -> Result<Mailbox, MailboxError> {
        // 1. Syntax first: a malformed name never costs a round-trip
        if !name::is_valid_name(name) {
            return Err(MailboxError::InvalidName {
                name: name.to_string(),
            });
        }

        // 2. Availability check (advisory: the bind below is authoritative)
        let available = self
            .naming
            .is_available(name)
            .await
            .map_err(naming_transport)?;
        if !available {
            return Err(MailboxError::NameUnavailable {
                name: name.to_string(),
            });
        }

        // 3. Fresh identity for the mailbox
        let identity = self
            .identity
            .generate(passphrase)
            .map_err(|e| MailboxError::IdentityGeneration(e.to_string()))?;

        // 4. Atomic bind; a lost race must fail loudly here
        match self
            .naming
            .bind(name, &identity.address, &identity.public_key)
            .await
        {
            Ok(()) => {}
            Err(NamingError::AlreadyBound { .. }) => {
                tracing::warn!("[mailbox] lost registration race for {name:?}");
                return Err(MailboxError::BindConflict {
                    name: name.to_string(),
                });
            }
            Err(e) => return Err(MailboxError::Network(e.to_string())),
        }

        // 5. Record locally and persist the full list
        let mailbox = Mailbox {
            name: name.to_string(),
            identity,
        };
        let mut state = self.state.lock().unwrap();
        state.mailboxes.push(mailbox.clone());
        if let Err(e) = Self::persist_mailboxes(&mut state) {
            // Keep memory and store consistent: drop the entry we failed to
            // write before surfacing the error.
            state.mailboxes.pop();
            return Err(e);
        }

        tracing::info!(
            "[mailbox] 📬 registered {name:?} at {}",
            mailbox.identity.address
        );
        Ok(mailbox)
    }

    fn mailbox(&self, name: &str) -> Result<Option<Mailbox>, MailboxError> {
        let state = self.state.lock().unwrap();
        let mut matches = state.mailboxes.iter().filter(|m| m.name == name);

        match (matches.next(), matches.count()) {
            (None, _) => Ok(None),
            (Some(mailbox), 0) => Ok(Some(mailbox.clone())),
            (Some(_), rest) => Err(MailboxError::DuplicateName {
                name: name.to_string(),
                count: rest + 1,
            }),
        }
    }

    fn mailboxes(&self) -> Vec<Mailbox> {
        self.state.lock().unwrap().mailboxes.clone()
    }

    async fn derive_shared_secret(
        &self,
        own_private_key_hex: &str,
        counterparty_name: &str,
    ) -> Result<SharedSecret, MailboxError> {
        let counterparty_public_key = match self.naming.public_key(counterparty_name).await {
            Ok(key) => key,
            Err(NamingError::NotBound { .. }) => {
                return Err(MailboxError::Resolution {
                    name: counterparty_name.to_string(),
                })
            }
            Err(e) => return Err(naming_transport(e)),
        };

        tracing::debug!("[mailbox] deriving shared secret with {counterparty_name:?}");
        ecdh::derive_shared_secret(own_private_key_hex, &counterparty_public_key)
    }

    fn is_name_valid(&self, name: &str) -> bool {
        name::is_valid_name(name)
    }

    fn save_message(&self, message: Message) -> Result<(), MailboxError> {
        let mut state = self.state.lock().unwrap();
        let mut messages = Self::load_messages(&state)?;
        messages.push(message);
        let json = serde_json::to_string(&messages).map_err(persistence)?;
        state.store.put(MESSAGES_KEY, &json).map_err(persistence)
    }

    fn messages(
        &self,
        direction: MessageDirection,
        name: &str,
    ) -> Result<Vec<Message>, MailboxError> {
        let state = self.state.lock().unwrap();
        let messages = Self::load_messages(&state)?;
        Ok(messages
            .into_iter()
            .filter(|m| m.matches(direction, name))
            .collect())
    }
}

// =============================================================================
// TESTS
// =============================================================================
