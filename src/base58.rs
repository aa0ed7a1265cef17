//! Base58 and Base58Check encoding/decoding

use crate::error::{Result, WifError};
use crate::sha256::{CHECKSUM_LEN, checksum};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;
use tracing::{debug, trace};
use zeroize::Zeroizing;

const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

const NO_DIGIT: u8 = 0xff;

/// ASCII byte -> base58 digit, `NO_DIGIT` for anything outside the alphabet
const DIGITS: [u8; 128] = {
    let mut table = [NO_DIGIT; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

#[inline]
fn digit(c: char) -> Option<u8> {
    match DIGITS.get(u32::from(c) as usize) {
        Some(&d) if d != NO_DIGIT => Some(d),
        _ => None,
    }
}

/// Base58 encode bytes. Each leading zero byte becomes a leading '1'.
pub fn encode(bytes: &[u8]) -> String {
    let mut n = BigUint::from_bytes_be(bytes);
    let fifty_eight = BigUint::from(58u8);
    let mut chars = Vec::new();

    while !n.is_zero() {
        let (quotient, remainder) = n.div_rem(&fifty_eight);
        let idx = remainder.to_u32_digits().first().copied().unwrap_or(0) as usize;
        chars.push(ALPHABET[idx] as char);
        n = quotient;
    }

    let num_leading_zeros = bytes.iter().take_while(|&&b| b == 0).count();
    chars.extend(std::iter::repeat_n(ALPHABET[0] as char, num_leading_zeros));

    chars.iter().rev().collect()
}

/// Base58 decode to bytes.
///
/// The string is read as one big-endian base-58 integer which is then written
/// out as its minimal big-endian byte sequence. Leading '1's are not
/// representable in that integer, so each one is prepended as a zero byte.
/// An empty string decodes to a single zero byte.
pub fn decode(s: &str) -> Result<Vec<u8>> {
    let fifty_eight = BigUint::from(58u8);
    let mut n = BigUint::zero();

    for (position, character) in s.chars().enumerate() {
        let d = digit(character).ok_or(WifError::InvalidCharacter {
            character,
            position,
        })?;
        n = n * &fifty_eight + BigUint::from(d);
    }

    let num_leading_ones = s.bytes().take_while(|&c| c == b'1').count();
    let mut result = vec![0u8; num_leading_ones];
    // An all-'1' string is fully described by its zero bytes.
    if !(n.is_zero() && num_leading_ones > 0) {
        result.extend(n.to_bytes_be());
    }

    trace!(chars = s.len(), bytes = result.len(), "base58 decoded");
    Ok(result)
}

/// Base58Check encode: `data || HASH256(data)[..4]`
pub fn encode_check(data: &[u8]) -> String {
    let mut buf = Zeroizing::new(Vec::with_capacity(data.len() + CHECKSUM_LEN));
    buf.extend_from_slice(data);
    buf.extend_from_slice(&checksum(data));
    encode(&buf)
}

/// Base58Check decode: strips and verifies the trailing 4-byte checksum,
/// returning the payload in front of it.
pub fn decode_check(s: &str) -> Result<Zeroizing<Vec<u8>>> {
    let mut data = Zeroizing::new(decode(s)?);

    if data.len() < CHECKSUM_LEN {
        debug!(length = data.len(), "base58check data too short");
        return Err(WifError::TooShort { length: data.len() });
    }

    let split = data.len() - CHECKSUM_LEN;
    let mut found = [0u8; CHECKSUM_LEN];
    found.copy_from_slice(&data[split..]);
    data.truncate(split);

    if checksum(&data) != found {
        debug!("base58check checksum mismatch");
        return Err(WifError::InvalidChecksum { found });
    }

    trace!(payload_len = data.len(), "base58check checksum verified");
    Ok(data)
}
