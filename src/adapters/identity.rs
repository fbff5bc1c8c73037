//! # secp256k1 Identity Generation
//!
//! Wallet-style identity generation: a random secp256k1 keypair plus an
//! Ethereum-style address derived from the keccak256 hash of the
//! uncompressed public key.

use crate::domain::entities::{Identity, PrivateKey};
use crate::ports::outbound::{IdentityError, IdentityGenerator};
use k256::ecdsa::SigningKey;
use k256::elliptic_curve::sec1::ToEncodedPoint;
use sha3::{Digest, Keccak256};
use zeroize::Zeroize;

/// Generates mailbox identities on secp256k1.
///
/// The keypair is random per call; the passphrase is accepted for
/// keystore-encrypting generators and is not consumed here, since this
/// adapter keeps nothing on disk.
#[derive(Default)]
pub struct Secp256k1IdentityGenerator;

impl Secp256k1IdentityGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl IdentityGenerator for Secp256k1IdentityGenerator {
    fn generate(&self, _passphrase: &str) -> Result<Identity, IdentityError> {
        let signing_key = SigningKey::random(&mut rand::thread_rng());
        let verifying_key = signing_key.verifying_key();

        // Uncompressed SEC1: 0x04 || x || y (65 bytes)
        let point = verifying_key.to_encoded_point(false);
        let public_key = format!("0x{}", hex::encode(point.as_bytes()));
        let address = format!("0x{}", hex::encode(address_digest(point.as_bytes())));

        let mut scalar: [u8; 32] = signing_key.to_bytes().into();
        let private_key = PrivateKey::new(format!("0x{}", hex::encode(scalar)));
        scalar.zeroize();

        Ok(Identity::new(private_key, public_key, address))
    }
}

/// Last 20 bytes of keccak256 over the public key's coordinates (the SEC1
/// tag byte is excluded).
fn address_digest(uncompressed_sec1: &[u8]) -> [u8; 20] {
    let mut hasher = Keccak256::new();
    hasher.update(&uncompressed_sec1[1..]);
    let digest = hasher.finalize();

    let mut address = [0u8; 20];
    address.copy_from_slice(&digest[12..]);
    address
}
