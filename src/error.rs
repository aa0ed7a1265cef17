//! Unified error type for WIF decoding and public key derivation

use thiserror::Error;

/// Every way a WIF-to-public-key conversion can be rejected.
///
/// None of the variants carry private key material, so they are safe to
/// display to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WifError {
    #[error("Invalid base58 character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    #[error("Base58Check data too short: {length} bytes, need at least 4")]
    TooShort { length: usize },

    /// Only the checksum embedded in the input is kept. The recomputed one is a
    /// hash of the secret and must not reach the user.
    #[error("Invalid checksum {}: the key is mistyped or corrupted", hex::encode(.found))]
    InvalidChecksum { found: [u8; 4] },

    #[error("Invalid WIF payload length: {length} bytes, expected 33 or 34")]
    InvalidLength { length: usize },

    #[error("Invalid WIF version byte 0x{version:02x}, expected 0x80 (mainnet) or 0xef (testnet)")]
    InvalidVersionByte { version: u8 },

    #[error("Invalid private key: scalar is zero or not below the secp256k1 group order")]
    InvalidScalar,
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, WifError>;
