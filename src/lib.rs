//! Convert a WIF-encoded Bitcoin private key into its compressed public key.
//!
//! The pipeline is Base58 decode -> Base58Check checksum -> WIF payload
//! checks -> `k * G` on secp256k1 -> SEC compressed encoding. Every stage is
//! pure and stateless; the first failing stage decides the returned error.

pub mod base58;
pub mod error;
pub mod keys;
pub mod sha256;
pub mod wif;

pub use error::{Result, WifError};

pub use keys::CompressedPublicKey;
pub use wif::{Network, PrivateKey};

/// Derive the compressed public key for a WIF string
pub fn wif_to_public_key(wif: &str) -> Result<CompressedPublicKey> {
    PrivateKey::from_wif(wif)?.public_key()
}

/// Derive the compressed public key for a WIF string, as 66 lowercase hex
/// characters
pub fn wif_to_public_key_hex(wif: &str) -> Result<String> {
    Ok(wif_to_public_key(wif)?.to_hex())
}
