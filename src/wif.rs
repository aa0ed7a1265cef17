//! Wallet Import Format (WIF) private keys
//!
//! A WIF string is the Base58Check encoding of
//! `version (1) || secret (32) [|| compression flag (1)]`.

use crate::base58::{decode_check, encode_check};
use crate::error::{Result, WifError};
use crate::keys::CompressedPublicKey;
use std::fmt;
use std::str::FromStr;
use tracing::debug;
use zeroize::Zeroizing;

/// Length of a raw secp256k1 private key
pub const SECRET_KEY_LEN: usize = 32;

/// Trailing byte marking a key whose public key is used in compressed form
pub const COMPRESSION_FLAG: u8 = 0x01;

const UNCOMPRESSED_PAYLOAD_LEN: usize = 1 + SECRET_KEY_LEN;
const COMPRESSED_PAYLOAD_LEN: usize = UNCOMPRESSED_PAYLOAD_LEN + 1;

/// Bitcoin network a WIF key belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    Main,
    Test,
}

impl Network {
    /// Get WIF version byte
    #[inline]
    pub const fn wif_version(self) -> u8 {
        match self {
            Network::Main => 0x80,
            Network::Test => 0xef,
        }
    }

    /// Get network name
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Network::Main => "main",
            Network::Test => "test",
        }
    }
}

impl TryFrom<u8> for Network {
    type Error = WifError;

    fn try_from(version: u8) -> Result<Self> {
        match version {
            0x80 => Ok(Network::Main),
            0xef => Ok(Network::Test),
            _ => Err(WifError::InvalidVersionByte { version }),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A private key decoded from (or encodable to) WIF.
///
/// The secret is wiped from memory when the key is dropped.
#[derive(Clone)]
pub struct PrivateKey {
    pub network: Network,
    /// Whether the WIF carried a 34th (compression flag) byte
    pub compressed: bool,
    secret: Zeroizing<[u8; SECRET_KEY_LEN]>,
}

impl PrivateKey {
    pub fn new(secret: [u8; SECRET_KEY_LEN], network: Network, compressed: bool) -> Self {
        PrivateKey {
            network,
            compressed,
            secret: Zeroizing::new(secret),
        }
    }

    /// Parse a WIF string.
    ///
    /// The version byte is checked before the length, so any Base58Check
    /// string with a foreign version byte is reported as such. The value of
    /// the compression flag byte is not checked.
    pub fn from_wif(wif: &str) -> Result<Self> {
        let payload = decode_check(wif)?;

        let Some(&version) = payload.first() else {
            debug!("empty WIF payload");
            return Err(WifError::InvalidLength { length: 0 });
        };
        let network = Network::try_from(version).inspect_err(|_| {
            debug!(version, "unknown WIF version byte");
        })?;

        let compressed = match payload.len() {
            UNCOMPRESSED_PAYLOAD_LEN => false,
            COMPRESSED_PAYLOAD_LEN => true,
            length => {
                debug!(length, "unexpected WIF payload length");
                return Err(WifError::InvalidLength { length });
            }
        };

        let mut secret = Zeroizing::new([0u8; SECRET_KEY_LEN]);
        secret.copy_from_slice(&payload[1..UNCOMPRESSED_PAYLOAD_LEN]);

        debug!(network = network.name(), compressed, "parsed WIF private key");
        Ok(PrivateKey {
            network,
            compressed,
            secret,
        })
    }

    /// Encode as WIF, appending the compression flag for compressed keys.
    pub fn to_wif(&self) -> String {
        let mut payload = Zeroizing::new(Vec::with_capacity(COMPRESSED_PAYLOAD_LEN));
        payload.push(self.network.wif_version());
        payload.extend_from_slice(&self.secret[..]);
        if self.compressed {
            payload.push(COMPRESSION_FLAG);
        }
        encode_check(&payload)
    }

    /// Raw big-endian scalar
    pub fn secret_bytes(&self) -> &[u8; SECRET_KEY_LEN] {
        &self.secret
    }

    /// Derive the compressed SEC public key for this secret
    pub fn public_key(&self) -> Result<CompressedPublicKey> {
        CompressedPublicKey::derive(&self.secret)
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("network", &self.network)
            .field("compressed", &self.compressed)
            .field("secret", &"[redacted]")
            .finish()
    }
}

impl FromStr for PrivateKey {
    type Err = WifError;

    fn from_str(s: &str) -> Result<Self> {
        PrivateKey::from_wif(s)
    }
}
