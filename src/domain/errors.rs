//! # Registry Errors
//!
//! Error types for mailbox registration and shared-secret derivation.

use thiserror::Error;

/// Errors surfaced by the mailbox registry.
///
/// `NameUnavailable` is the only "normal" rejection of a create request;
/// every other variant is a distinct system, protocol, or integrity failure
/// so callers can tell "name taken" apart from "something broke".
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MailboxError {
    /// The candidate name failed syntactic validation (no network call made).
    #[error("invalid mailbox name: {name:?}")]
    InvalidName { name: String },

    /// The name is already bound in the naming service.
    #[error("mailbox name {name:?} is not available")]
    NameUnavailable { name: String },

    /// The name was claimed between the availability check and the bind.
    ///
    /// The naming service's atomic bind is the safety net for this race;
    /// the local availability check alone proves nothing.
    #[error("lost registration race for {name:?}: name was bound after the availability check")]
    BindConflict { name: String },

    /// A naming-service or ledger round-trip failed. Not retried.
    #[error("naming service error: {0}")]
    Network(String),

    /// The counterparty name has no binding to resolve a public key from.
    #[error("no public key bound for {name:?}")]
    Resolution { name: String },

    /// Key material had the wrong length or encoding.
    #[error("malformed key material: {0}")]
    MalformedKey(String),

    /// More than one local mailbox shares a name. Corrupted state, not a
    /// recoverable miss.
    #[error("data integrity violation: {count} mailboxes registered for {name:?}")]
    DuplicateName { name: String, count: usize },

    /// The persistence store failed or held undecodable data.
    #[error("persistence error: {0}")]
    Persistence(String),

    /// The identity generator failed to produce a keypair.
    #[error("identity generation failed: {0}")]
    IdentityGeneration(String),
}
