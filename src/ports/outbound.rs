//! # Outbound Ports (Driven Ports)
//!
//! Dependencies the mailbox registry requires the host application to
//! provide: the naming service, the identity generator, and the key-value
//! persistence store.

use crate::domain::entities::Identity;
use thiserror::Error;

/// Error from naming-service operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NamingError {
    /// The name is already bound. `bind` must fail with this (never silently
    /// succeed) when another actor claimed the name first.
    #[error("name {name:?} is already bound")]
    AlreadyBound { name: String },

    /// The name has no binding to resolve.
    #[error("name {name:?} is not bound")]
    NotBound { name: String },

    /// The network or ledger round-trip failed.
    #[error("naming service unreachable: {0}")]
    Network(String),
}

/// Client for the decentralized naming service.
///
/// Maps human-readable names to (address, public key) bindings on a
/// distributed ledger. All operations are asynchronous and may fail on
/// network or ledger errors.
///
/// # Atomicity
///
/// `bind` is the registry's uniqueness safety net: implementations must
/// guarantee that of two concurrent binds for one name exactly one succeeds
/// and the other fails with [`NamingError::AlreadyBound`].
#[async_trait::async_trait]
pub trait NamingService: Send + Sync {
    /// Whether `name` is currently unbound.
    async fn is_available(&self, name: &str) -> Result<bool, NamingError>;

    /// Atomically bind `name` to an address and public key.
    ///
    /// # Errors
    /// * `NamingError::AlreadyBound` - the name was claimed first
    /// * `NamingError::Network` - the round-trip failed
    async fn bind(&self, name: &str, address: &str, public_key: &str) -> Result<(), NamingError>;

    /// Resolve the hex public key bound to `name`.
    ///
    /// # Errors
    /// * `NamingError::NotBound` - no binding exists
    async fn public_key(&self, name: &str) -> Result<String, NamingError>;
}

/// Error from identity generation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdentityError {
    /// Keypair generation failed.
    #[error("key generation failed: {0}")]
    KeyGeneration(String),
}

/// Produces the asymmetric keypair and derived address for a new mailbox.
///
/// The passphrase is the caller's wallet secret; implementations that
/// maintain an encrypted keystore derive the keystore key from it. The
/// generated private key is returned to the caller and never leaves the
/// process.
pub trait IdentityGenerator: Send + Sync {
    /// Generate a fresh identity for a mailbox.
    fn generate(&self, passphrase: &str) -> Result<Identity, IdentityError>;
}

/// Error from key-value store operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KVStoreError {
    /// Underlying I/O failure.
    #[error("store I/O error: {message}")]
    Io { message: String },
}

/// Durable key-value store for serialized mailbox and message records.
///
/// The registry uses fixed keys (`"mailboxes"`, `"messages"`) and always
/// rewrites the full serialized list; there are no partial writes for an
/// implementation to worry about.
pub trait KeyValueStore: Send + Sync {
    /// Get the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, KVStoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn put(&mut self, key: &str, value: &str) -> Result<(), KVStoreError>;
}
