//! One-time pad module
//!
//! XOR cipher over the integer encoding of a message. The key is drawn from
//! the operating system's secure random source with one independent unbiased
//! bit per message bit, so the pad is exactly as long as the message integer.
//! Key reuse destroys the one-time property; that discipline is the caller's
//! obligation, not enforced here.

use crate::codec;
use crate::error::Result;
use num_bigint::BigUint;
use rand::{rngs::OsRng, CryptoRng, Rng, RngCore};

/// A ciphertext together with the pad that produced it
///
/// The two are meaningless apart: the key decodes exactly this ciphertext
/// and must never be reused for another message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpEncryption {
    /// Message integer XOR key
    pub ciphertext: BigUint,
    /// The one-time pad drawn for this message
    pub key: BigUint,
}

/// One-time pad encoder/decoder
#[derive(Debug, Clone, Copy, Default)]
pub struct OtpCipher;

impl OtpCipher {
    /// Create a new OTP cipher
    pub fn new() -> Self {
        Self
    }

    /// Encrypt a message under a fresh random pad from `OsRng`
    pub fn encode(&self, message: &str) -> OtpEncryption {
        self.encode_with_rng(message, &mut OsRng)
    }

    /// Encrypt a message drawing the pad from the given RNG
    ///
    /// The RNG must be cryptographically secure for the one-time-pad
    /// security property to hold; the bound enforces that. Useful for
    /// deterministic tests with a seeded CSPRNG.
    pub fn encode_with_rng<R: RngCore + CryptoRng>(
        &self,
        message: &str,
        rng: &mut R,
    ) -> OtpEncryption {
        let message_int = codec::text_to_integer(message);
        let key = random_pad(rng, message_int.bits());
        OtpEncryption {
            ciphertext: &message_int ^ &key,
            key,
        }
    }

    /// Decrypt a ciphertext with its pad
    ///
    /// XOR is self-inverse, so applying the pad again recovers the message
    /// integer. Fails with `DecodeError` if the result is not a valid text
    /// encoding (a wrong or reused key corrupts the byte content).
    pub fn decode(&self, ciphertext: &BigUint, key: &BigUint) -> Result<String> {
        codec::integer_to_text(&(ciphertext ^ key))
    }
}

/// Draw `bits` independent unbiased bits as a big integer
///
/// Leading zero draws collapse, so the pad's bit length may be shorter than
/// `bits`; the XOR round-trip is unaffected.
fn random_pad<R: RngCore + CryptoRng>(rng: &mut R, bits: u64) -> BigUint {
    let mut pad = BigUint::from(0u8);
    for _ in 0..bits {
        pad <<= 1u32;
        if rng.gen::<bool>() {
            pad |= BigUint::from(1u8);
        }
    }
    pad
}
