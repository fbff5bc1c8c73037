//! # Shared-Secret Derivation (secp256k1 ECDH)
//!
//! Elliptic-curve Diffie-Hellman over secp256k1 on hex-encoded key
//! material. The secret is the x-coordinate of the shared point, matching
//! what the counterparty derives from the mirrored key pair.
//!
//! ## Accepted encodings
//!
//! - Private key: hex scalar, `0x` prefix optional, exactly 32 bytes.
//! - Public key: hex, `0x` prefix optional, as 33-byte compressed SEC1,
//!   65-byte uncompressed SEC1, or 64 raw coordinate bytes (the form some
//!   wallet libraries publish to the naming service).

use crate::domain::entities::SharedSecret;
use crate::domain::errors::MailboxError;
use k256::{PublicKey, SecretKey};
use zeroize::Zeroize;

/// Compute the Diffie-Hellman shared secret between one party's private key
/// and the other's public key.
///
/// Deterministic for fixed inputs and symmetric across the two participants:
/// `derive(sk_a, pk_b) == derive(sk_b, pk_a)`.
///
/// # Errors
///
/// `MailboxError::MalformedKey` when either key has the wrong length,
/// encoding, or is not a valid curve element.
pub fn derive_shared_secret(
    own_private_key_hex: &str,
    counterparty_public_key_hex: &str,
) -> Result<SharedSecret, MailboxError> {
    let secret_key = decode_private_key(own_private_key_hex)?;
    let public_key = decode_public_key(counterparty_public_key_hex)?;

    let shared = k256::ecdh::diffie_hellman(secret_key.to_nonzero_scalar(), public_key.as_affine());

    // raw_secret_bytes is the 32-byte x-coordinate of the shared point
    SharedSecret::from_slice(shared.raw_secret_bytes().as_slice())
        .ok_or_else(|| MailboxError::MalformedKey("shared point had unexpected size".to_string()))
}

/// Decode a hex private-key scalar into a secp256k1 secret key.
fn decode_private_key(hex_scalar: &str) -> Result<SecretKey, MailboxError> {
    let bare = hex_scalar.strip_prefix("0x").unwrap_or(hex_scalar);
    let mut bytes = hex::decode(bare)
        .map_err(|_| MailboxError::MalformedKey("private key is not valid hex".to_string()))?;

    if bytes.len() != 32 {
        let got = bytes.len();
        bytes.zeroize();
        return Err(MailboxError::MalformedKey(format!(
            "private key must be 32 bytes, got {got}"
        )));
    }

    let secret_key = SecretKey::from_slice(&bytes);
    bytes.zeroize();
    secret_key
        .map_err(|_| MailboxError::MalformedKey("private key is not a valid scalar".to_string()))
}

/// Decode a hex public key in any of the accepted encodings.
fn decode_public_key(hex_key: &str) -> Result<PublicKey, MailboxError> {
    let bare = hex_key.strip_prefix("0x").unwrap_or(hex_key);
    let bytes = hex::decode(bare)
        .map_err(|_| MailboxError::MalformedKey("public key is not valid hex".to_string()))?;

    let sec1 = match bytes.len() {
        33 | 65 => bytes,
        // Raw x||y coordinates: prepend the uncompressed SEC1 tag
        64 => {
            let mut tagged = Vec::with_capacity(65);
            tagged.push(0x04);
            tagged.extend_from_slice(&bytes);
            tagged
        }
        other => {
            return Err(MailboxError::MalformedKey(format!(
                "public key must be 33, 64, or 65 bytes, got {other}"
            )))
        }
    };

    PublicKey::from_sec1_bytes(&sec1)
        .map_err(|_| MailboxError::MalformedKey("public key is not a point on secp256k1".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use k256::elliptic_curve::sec1::ToEncodedPoint;

    fn hex_keypair() -> (String, String) {
        let secret_key = SecretKey::random(&mut rand::thread_rng());
        let public_key = secret_key.public_key();
        (
            format!("0x{}", hex::encode(secret_key.to_bytes())),
            format!(
                "0x{}",
                hex::encode(public_key.to_encoded_point(false).as_bytes())
            ),
        )
    }

    #[test]
    fn test_shared_secret_is_symmetric() {
        let (sk_a, pk_a) = hex_keypair();
        let (sk_b, pk_b) = hex_keypair();

        let ab = derive_shared_secret(&sk_a, &pk_b).unwrap();
        let ba = derive_shared_secret(&sk_b, &pk_a).unwrap();

        assert_eq!(ab.to_hex(), ba.to_hex());
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let (sk_a, _) = hex_keypair();
        let (_, pk_b) = hex_keypair();

        let first = derive_shared_secret(&sk_a, &pk_b).unwrap();
        let second = derive_shared_secret(&sk_a, &pk_b).unwrap();

        assert_eq!(first.to_hex(), second.to_hex());
    }

    #[test]
    fn test_distinct_counterparties_yield_distinct_secrets() {
        let (sk_a, _) = hex_keypair();
        let (_, pk_b) = hex_keypair();
        let (_, pk_c) = hex_keypair();

        let ab = derive_shared_secret(&sk_a, &pk_b).unwrap();
        let ac = derive_shared_secret(&sk_a, &pk_c).unwrap();

        assert_ne!(ab.to_hex(), ac.to_hex());
    }

    #[test]
    fn test_accepts_all_public_key_encodings() {
        let (sk_a, _) = hex_keypair();
        let secret_key = SecretKey::random(&mut rand::thread_rng());
        let point = secret_key.public_key().to_encoded_point(false);
        let uncompressed = hex::encode(point.as_bytes());
        let raw64 = hex::encode(&point.as_bytes()[1..]);
        let compressed = hex::encode(secret_key.public_key().to_encoded_point(true).as_bytes());

        let via_uncompressed = derive_shared_secret(&sk_a, &uncompressed).unwrap();
        let via_raw = derive_shared_secret(&sk_a, &raw64).unwrap();
        let via_compressed = derive_shared_secret(&sk_a, &compressed).unwrap();

        assert_eq!(via_uncompressed.to_hex(), via_raw.to_hex());
        assert_eq!(via_uncompressed.to_hex(), via_compressed.to_hex());
    }

    #[test]
    fn test_prefix_is_optional() {
        let (sk_a, _) = hex_keypair();
        let (_, pk_b) = hex_keypair();

        let with_prefix = derive_shared_secret(&sk_a, &pk_b).unwrap();
        let without = derive_shared_secret(
            sk_a.strip_prefix("0x").unwrap(),
            pk_b.strip_prefix("0x").unwrap(),
        )
        .unwrap();

        assert_eq!(with_prefix.to_hex(), without.to_hex());
    }

    #[test]
    fn test_malformed_private_key_rejected() {
        let (_, pk_b) = hex_keypair();

        // wrong length
        let short = derive_shared_secret("0xdeadbeef", &pk_b);
        assert!(matches!(short, Err(MailboxError::MalformedKey(_))));

        // not hex at all
        let junk = derive_shared_secret("not-hex-material", &pk_b);
        assert!(matches!(junk, Err(MailboxError::MalformedKey(_))));

        // zero scalar is outside the valid range
        let zero = derive_shared_secret(&format!("0x{}", "00".repeat(32)), &pk_b);
        assert!(matches!(zero, Err(MailboxError::MalformedKey(_))));
    }

    #[test]
    fn test_malformed_public_key_rejected() {
        let (sk_a, _) = hex_keypair();

        let short = derive_shared_secret(&sk_a, "0xdeadbeef");
        assert!(matches!(short, Err(MailboxError::MalformedKey(_))));

        // right length, not a curve point
        let off_curve = format!("0x04{}", "00".repeat(64));
        let result = derive_shared_secret(&sk_a, &off_curve);
        assert!(matches!(result, Err(MailboxError::MalformedKey(_))));
    }
}
