//! # Inbound Ports (Driving Ports)
//!
//! The public API of the mailbox registry.

use crate::domain::entities::{Mailbox, Message, MessageDirection, SharedSecret};
use crate::domain::errors::MailboxError;

/// Primary mailbox-registry API.
///
/// Implementations must be thread-safe (`Send + Sync`). Operations that
/// touch the naming service are asynchronous and suspend the caller until
/// the round-trip settles; none of them support mid-flight cancellation or
/// roll back partial work when a future is abandoned.
#[async_trait::async_trait]
pub trait MailboxRegistryApi: Send + Sync {
    /// Register a new mailbox under `name`.
    ///
    /// Runs the strictly ordered pipeline
    /// validate -> check-availability -> generate-identity -> bind -> persist,
    /// short-circuiting on the first failure. No partial mailbox is ever
    /// persisted.
    ///
    /// # Errors
    /// * `MailboxError::InvalidName` - syntax rejected, no network call made
    /// * `MailboxError::NameUnavailable` - the name is already bound
    /// * `MailboxError::BindConflict` - another actor bound the name between
    ///   the availability check and the bind
    /// * `MailboxError::Network` / `Persistence` / `IdentityGeneration` -
    ///   the corresponding step failed; local state is unchanged
    async fn create_mailbox(&self, name: &str, passphrase: &str)
        -> Result<Mailbox, MailboxError>;

    /// Look up the single local mailbox registered under `name`.
    ///
    /// # Errors
    /// * `MailboxError::DuplicateName` - more than one record shares the
    ///   name; corrupted state, not a normal miss
    fn mailbox(&self, name: &str) -> Result<Option<Mailbox>, MailboxError>;

    /// All mailboxes known to this local instance.
    fn mailboxes(&self) -> Vec<Mailbox>;

    /// Derive the Diffie-Hellman shared secret between one's own private key
    /// and the public key bound to `counterparty_name`.
    ///
    /// The secret is returned, never cached or stored.
    ///
    /// # Errors
    /// * `MailboxError::Resolution` - the counterparty name is unbound
    /// * `MailboxError::MalformedKey` - bad key material (distinct from
    ///   resolution failure)
    /// * `MailboxError::Network` - the resolution round-trip failed
    async fn derive_shared_secret(
        &self,
        own_private_key_hex: &str,
        counterparty_name: &str,
    ) -> Result<SharedSecret, MailboxError>;

    /// Validate a candidate name without any network access.
    fn is_name_valid(&self, name: &str) -> bool;

    /// Append a message record to the persisted message list.
    fn save_message(&self, message: Message) -> Result<(), MailboxError>;

    /// Messages filtered by direction relative to `name`.
    fn messages(
        &self,
        direction: MessageDirection,
        name: &str,
    ) -> Result<Vec<Message>, MailboxError>;
}
