//! Public key derivation on secp256k1 and SEC compressed encoding

use crate::error::{Result, WifError};
use crate::wif::SECRET_KEY_LEN;
use k256::elliptic_curve::point::AffineCoordinates;
use k256::{FieldBytes, SecretKey};
use std::fmt;
use tracing::{debug, trace};

/// Length of a SEC compressed public key
pub const COMPRESSED_PUBLIC_KEY_LEN: usize = 33;

const EVEN_Y_PREFIX: u8 = 0x02;
const ODD_Y_PREFIX: u8 = 0x03;

/// Public key in SEC compressed form: `0x02 | 0x03` (parity of y) followed by
/// the 32-byte big-endian x coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompressedPublicKey([u8; COMPRESSED_PUBLIC_KEY_LEN]);

impl CompressedPublicKey {
    /// Compute `k * G` for the big-endian scalar `k` and compress the result.
    ///
    /// `k` must lie in `[1, n)` where `n` is the group order; anything else is
    /// rejected rather than reduced.
    pub fn derive(secret: &[u8; SECRET_KEY_LEN]) -> Result<Self> {
        let secret_key = SecretKey::from_bytes(FieldBytes::from_slice(secret)).map_err(|_| {
            debug!("private key scalar out of range");
            WifError::InvalidScalar
        })?;

        let public_key = secret_key.public_key();
        let point = public_key.as_affine();

        let mut bytes = [0u8; COMPRESSED_PUBLIC_KEY_LEN];
        bytes[0] = if bool::from(point.y_is_odd()) {
            ODD_Y_PREFIX
        } else {
            EVEN_Y_PREFIX
        };
        bytes[1..].copy_from_slice(&point.x());

        trace!(prefix = bytes[0], "derived compressed public key");
        Ok(CompressedPublicKey(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; COMPRESSED_PUBLIC_KEY_LEN] {
        &self.0
    }

    /// `0x02` for even y, `0x03` for odd y
    pub fn prefix(&self) -> u8 {
        self.0[0]
    }

    /// The x coordinate, big-endian
    pub fn x_only(&self) -> [u8; 32] {
        let mut x = [0u8; 32];
        x.copy_from_slice(&self.0[1..]);
        x
    }

    /// Lowercase hex, 66 characters
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl AsRef<[u8]> for CompressedPublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for CompressedPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;

    /// Left-pad a hex scalar to 32 bytes
    fn scalar(hex_str: &str) -> [u8; SECRET_KEY_LEN] {
        let padded = format!("{hex_str:0>64}");
        let mut out = [0u8; SECRET_KEY_LEN];
        hex::decode_to_slice(padded, &mut out).unwrap();
        out
    }

    const ORDER: &str = "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141";

    #[test]
    fn test_compressed_sec_vectors() {
        let tests = [
            (
                "1",
                "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
            ),
            (
                "2",
                "02c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5",
            ),
            (
                "3",
                "02f9308a019258c31049344f85f89d5229b531c845836f99b08601f113bce036f9",
            ),
            // Programming Bitcoin, chapter 4
            (
                "1389",
                "0357a4f368868a8a6d572991e484e664810ff14c05c0fa023275251151fe0e53d1",
            ),
            (
                "deadbeef54321",
                "0296be5b1292f6c856b3c5654e886fc13511462059089cdf9c479623bfcbe77690",
            ),
            // Mastering Bitcoin, chapter 4
            (
                "1e99423a4ed27608a15a2616a2b0e9e52ced330ac530edcc32c8ffc6a526aedd",
                "03f028892bad7ed57d2fb57bf33081d5cfcf6f9ed3d3d7f159c2e2fff579dc341a",
            ),
            // n - 1 is -1, i.e. the generator with y negated
            (
                "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364140",
                "0379be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
            ),
        ];

        for (k, expected) in tests {
            let pk = CompressedPublicKey::derive(&scalar(k)).unwrap();
            assert_eq!(pk.to_hex(), expected, "k = {k}");
            assert_eq!(pk.to_string(), expected);
        }
    }

    #[test]
    fn test_rejects_out_of_range_scalars() {
        let order_plus_one = "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364142";
        let all_ones = "f".repeat(64);
        for k in ["0", ORDER, order_plus_one, all_ones.as_str()] {
            assert_eq!(
                CompressedPublicKey::derive(&scalar(k)),
                Err(WifError::InvalidScalar),
                "k = {k}"
            );
        }
    }

    #[test]
    fn test_random_keys_are_well_formed() {
        let mut rng = rand::rng();
        for _ in 0..32 {
            let mut secret = [0u8; SECRET_KEY_LEN];
            rng.fill_bytes(&mut secret);
            // Drop the top bit so the scalar is always below the order
            secret[0] &= 0x7f;
            let pk = CompressedPublicKey::derive(&secret).unwrap();
            assert!(pk.prefix() == EVEN_Y_PREFIX || pk.prefix() == ODD_Y_PREFIX);
            assert_eq!(pk.as_bytes().len(), COMPRESSED_PUBLIC_KEY_LEN);
            assert_eq!(pk.to_hex().len(), 66);
            assert_eq!(&pk.as_ref()[1..], pk.x_only());
        }
    }

    #[test]
    fn test_derive_is_deterministic() {
        let k = scalar("0c28fca386c7a227600b2fe50b7cae11ec86d3bf1fbe471be89827e19d72aa1d");
        let a = CompressedPublicKey::derive(&k).unwrap();
        let b = CompressedPublicKey::derive(&k).unwrap();
        assert_eq!(a, b);
        assert_eq!(
            a.to_hex(),
            "02d0de0aaeaefad02b8bdc8a01a1b8b11c696bd3d66a2c5f10780d95b7df42645c"
        );
    }
}
