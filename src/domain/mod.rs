//! # Domain Layer
//!
//! Pure mailbox-registry logic: entities, errors, name validation, and the
//! secp256k1 Diffie-Hellman derivation. No I/O in this layer.

pub mod ecdh;
pub mod entities;
pub mod errors;
pub mod name;
