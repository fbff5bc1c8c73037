//! # Domain Entities
//!
//! Core types of the mailbox registry: identities, mailboxes, the persisted
//! record shapes, messages, and the derived shared secret.

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Hex-encoded secp256k1 private key that zeroizes on drop.
///
/// # Security
///
/// The scalar never appears in `Debug` output and the type is deliberately
/// not `Serialize`: private-key material must not reach the persisted
/// mailbox records.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey {
    inner: String,
}

impl PrivateKey {
    /// Wrap a hex-encoded private-key scalar (0x-prefixed or bare).
    pub fn new(hex: impl Into<String>) -> Self {
        Self { inner: hex.into() }
    }

    /// Expose the hex scalar (use immediately, avoid keeping references).
    pub fn expose(&self) -> &str {
        &self.inner
    }
}

impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the actual key
        f.write_str("PrivateKey(***)")
    }
}

/// An asymmetric keypair plus derived address: a mailbox's cryptographic
/// presence.
///
/// The private key is present only on identities generated in this process;
/// identities rehydrated from the store carry public fields only.
#[derive(Debug, Clone)]
pub struct Identity {
    private_key: Option<PrivateKey>,
    /// 0x-prefixed hex public key (uncompressed SEC1).
    pub public_key: String,
    /// 0x-prefixed 20-byte ledger-facing address.
    pub address: String,
}

impl Identity {
    /// Create a full identity as produced by an identity generator.
    pub fn new(private_key: PrivateKey, public_key: String, address: String) -> Self {
        Self {
            private_key: Some(private_key),
            public_key,
            address,
        }
    }

    /// Create an identity holding only the shareable fields (as loaded from
    /// the persisted record, which never contains the private key).
    pub fn public_only(public_key: String, address: String) -> Self {
        Self {
            private_key: None,
            public_key,
            address,
        }
    }

    /// The private key, if this identity was generated in this process.
    pub fn private_key(&self) -> Option<&PrivateKey> {
        self.private_key.as_ref()
    }
}

/// The binding of a name to an identity. Immutable after creation.
#[derive(Debug, Clone)]
pub struct Mailbox {
    /// The registered subdomain name.
    pub name: String,
    /// The identity bound to the name.
    pub identity: Identity,
}

impl Mailbox {
    /// The persisted shape of this mailbox (public fields only).
    pub fn record(&self) -> MailboxRecord {
        MailboxRecord {
            name: self.name.clone(),
            address: self.identity.address.clone(),
            public_key: self.identity.public_key.clone(),
        }
    }
}

/// Persisted mailbox record: `{name, address, public_key}`.
///
/// Private-key material is excluded by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailboxRecord {
    pub name: String,
    pub address: String,
    pub public_key: String,
}

impl MailboxRecord {
    /// Rehydrate a mailbox from its persisted record.
    pub fn into_mailbox(self) -> Mailbox {
        Mailbox {
            name: self.name,
            identity: Identity::public_only(self.public_key, self.address),
        }
    }
}

/// A stored message record. Bookkeeping only: the registry stores and
/// filters these, it never interprets the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Sender mailbox name.
    pub from: String,
    /// Recipient mailbox name.
    pub to: String,
    /// Opaque payload.
    pub payload: String,
}

/// Direction of a message relative to a given mailbox name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageDirection {
    /// Messages addressed to the name.
    Received,
    /// Messages sent by the name.
    Sent,
    /// Self-addressed messages (saved drafts/notes).
    Saved,
}

impl Message {
    /// Whether this message matches `direction` relative to `name`.
    pub fn matches(&self, direction: MessageDirection, name: &str) -> bool {
        match direction {
            MessageDirection::Received => self.to == name,
            MessageDirection::Sent => self.from == name,
            MessageDirection::Saved => self.from == name && self.to == name,
        }
    }
}

/// A derived Diffie-Hellman shared secret (x-coordinate of the shared
/// point) that zeroizes on drop.
///
/// # Security
///
/// Never cached, stored, or logged by the registry; `Debug` masks the value.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret {
    inner: [u8; 32],
}

impl SharedSecret {
    /// Wrap the raw 32-byte secret.
    pub fn new(bytes: [u8; 32]) -> Self {
        Self { inner: bytes }
    }

    /// Create from a slice (must be exactly 32 bytes).
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        if slice.len() != 32 {
            return None;
        }
        let mut inner = [0u8; 32];
        inner.copy_from_slice(slice);
        Some(Self { inner })
    }

    /// The raw secret bytes (use immediately and let go).
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.inner
    }

    /// Hex encoding of the secret, as handed to encryption layers.
    pub fn to_hex(&self) -> String {
        hex::encode(self.inner)
    }
}

impl std::fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SharedSecret(***)")
    }
}
