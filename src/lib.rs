//! # Mailbox Registry
//!
//! Pseudonymous mailbox identities addressed by human-readable names in a
//! decentralized naming service, with pairwise secp256k1 Diffie-Hellman key
//! exchange between mailbox owners.
//!
//! ## Architecture
//!
//! This crate follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Pure logic — name validation, ECDH math,
//!   entities, errors. No I/O.
//! - **Ports Layer** (`ports/`): Trait definitions for the registry API
//!   (inbound) and its collaborators (outbound): naming service, identity
//!   generator, key-value store.
//! - **Adapters Layer** (`adapters/`): Reference implementations of the
//!   outbound ports — secp256k1 wallet generation, an in-memory naming
//!   service with atomic bind semantics, in-memory and file-backed stores.
//! - **Service Layer** (`service.rs`): `MailboxService`, the orchestrator
//!   that wires domain logic to the ports.
//!
//! ## Security Notes
//!
//! - Private keys are held only in memory, zeroized on drop, and never
//!   written to the persisted mailbox records.
//! - Name uniqueness is ultimately guaranteed by the naming service's atomic
//!   bind, not by the local availability check; a lost race surfaces as
//!   [`MailboxError::BindConflict`].
//! - Shared secrets are recomputed on demand and never cached or logged.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use config::{ConfigError, NamingConfig, RegistryConfig, StorageConfig};
pub use domain::ecdh::derive_shared_secret;
pub use domain::entities::{
    Identity, Mailbox, MailboxRecord, Message, MessageDirection, PrivateKey, SharedSecret,
};
pub use domain::errors::MailboxError;
pub use domain::name::is_valid_name;
pub use ports::inbound::MailboxRegistryApi;
pub use ports::outbound::{
    IdentityError, IdentityGenerator, KVStoreError, KeyValueStore, NamingError, NamingService,
};
pub use service::MailboxService;
