//! # Ports Layer
//!
//! Trait definitions for the registry's public API (inbound) and the
//! collaborators it depends on (outbound).

pub mod inbound;
pub mod outbound;
