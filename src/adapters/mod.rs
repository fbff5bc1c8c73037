//! # Adapters Layer
//!
//! Reference implementations of the outbound ports: secp256k1 identity
//! generation, an in-memory naming service with atomic bind semantics, and
//! in-memory / file-backed key-value stores.

pub mod identity;
pub mod naming;
pub mod storage;

pub use identity::Secp256k1IdentityGenerator;
pub use naming::InMemoryNamingService;
pub use storage::{FileBackedKVStore, InMemoryKVStore};
