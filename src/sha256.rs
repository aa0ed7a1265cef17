//! Checksum hashing for Base58Check: `HASH256(payload)[..4]`.

use sha2::{Digest, Sha256};

/// Length of a Base58Check checksum in bytes
pub const CHECKSUM_LEN: usize = 4;

pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// SHA-256 applied twice
pub fn hash256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(Sha256::digest(data)).into()
}

/// First four bytes of HASH256, appended to every Base58Check payload
pub fn checksum(data: &[u8]) -> [u8; CHECKSUM_LEN] {
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&hash256(data)[..CHECKSUM_LEN]);
    out
}
