//! Integer codec module
//!
//! Conversions between text, arbitrary-precision integers, and bit strings.
//! A message is interpreted as a big-endian unsigned integer over its UTF-8
//! bytes; this is the numeric domain the one-time pad operates in.

use crate::error::{DecodeError, Result};
use num_bigint::BigUint;

/// Interpret a text's UTF-8 bytes as a big-endian unsigned integer
///
/// The empty string maps to zero.
pub fn text_to_integer(text: &str) -> BigUint {
    BigUint::from_bytes_be(text.as_bytes())
}

/// Recover text from its big-endian integer representation
///
/// Inverse of [`text_to_integer`]. The byte representation is minimal-length
/// (zero maps back to the empty string). Fails with `DecodeError::InvalidUtf8`
/// if the bytes do not form valid UTF-8, e.g. after an OTP decode with a
/// mismatched key.
pub fn integer_to_text(n: &BigUint) -> Result<String> {
    if n.bits() == 0 {
        return Ok(String::new());
    }
    let bytes = n.to_bytes_be();
    String::from_utf8(bytes).map_err(|_| DecodeError::InvalidUtf8.into())
}

/// Minimal binary representation of an integer ("0" for zero)
///
/// No leading-zero padding beyond what the value requires.
pub fn integer_to_bits(n: &BigUint) -> String {
    format!("{:b}", n)
}

/// Parse a string of '0'/'1' characters as a base-2 integer
pub fn bits_to_integer(bits: &str) -> Result<BigUint> {
    if bits.is_empty() {
        return Err(DecodeError::EmptyBitString.into());
    }
    if let Some(bad) = bits.chars().find(|c| *c != '0' && *c != '1') {
        return Err(DecodeError::InvalidBit(bad).into());
    }
    // parse_bytes cannot fail after the character check above
    BigUint::parse_bytes(bits.as_bytes(), 2)
        .ok_or_else(|| DecodeError::InvalidBit('?').into())
}
