//! Rotation cipher module
//!
//! Caesar (fixed rotation) and Vigenere (cyclic keyed rotation) over an
//! injected [`Alphabet`]. Both ciphers are length-preserving and operate
//! symbol by symbol with no cross-position state.

use crate::alphabet::Alphabet;
use crate::error::{CipherError, Result};

/// Caesar and Vigenere encoder/decoder over a fixed alphabet
#[derive(Debug, Clone)]
pub struct RotationCipher {
    alphabet: Alphabet,
}

impl RotationCipher {
    /// Create a cipher over the given alphabet
    pub fn new(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }

    /// The alphabet this cipher operates over
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Encode a message by rotating every symbol by `n`
    pub fn encode_caesar(&self, message: &str, n: i64) -> Result<String> {
        message
            .chars()
            .map(|sym| self.alphabet.rotate(sym, n))
            .collect()
    }

    /// Decode a Caesar ciphertext by rotating every symbol by `-n`
    pub fn decode_caesar(&self, ciphertext: &str, n: i64) -> Result<String> {
        self.encode_caesar(ciphertext, -n)
    }

    /// Encode a message with a Vigenere key applied cyclically
    ///
    /// Symbol `i` is rotated by the rank of `key[i % key.len()]`. Fails with
    /// `InvalidKey` if the key is empty, or `UnknownSymbol` if the message or
    /// key contains a symbol outside the alphabet.
    pub fn encode_vigenere(&self, message: &str, key: &str) -> Result<String> {
        self.apply_vigenere(message, key, 1)
    }

    /// Decode a Vigenere ciphertext with the key it was encoded under
    pub fn decode_vigenere(&self, ciphertext: &str, key: &str) -> Result<String> {
        self.apply_vigenere(ciphertext, key, -1)
    }

    fn apply_vigenere(&self, text: &str, key: &str, direction: i64) -> Result<String> {
        let key_ranks: Vec<i64> = key
            .chars()
            .map(|sym| self.alphabet.rank(sym).map(i64::from))
            .collect::<Result<_>>()?;
        if key_ranks.is_empty() {
            return Err(CipherError::InvalidKey {
                reason: "key is empty".to_string(),
            });
        }

        text.chars()
            .enumerate()
            .map(|(i, sym)| {
                let shift = key_ranks[i % key_ranks.len()];
                self.alphabet.rotate(sym, direction * shift)
            })
            .collect()
    }
}

impl Default for RotationCipher {
    fn default() -> Self {
        Self::new(Alphabet::standard())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caesar_known_shift() {
        let cipher = RotationCipher::default();
        let encoded = cipher.encode_caesar("abc", 1).unwrap();
        assert_eq!(encoded, "bcd");
        // 'z' wraps to space, space wraps to 'a'
        let encoded = cipher.encode_caesar("xyz ", 2).unwrap();
        assert_eq!(encoded, "z ab");
    }

    #[test]
    fn test_caesar_roundtrip() {
        let cipher = RotationCipher::default();
        let message = "the quick brown fox jumps over the lazy dog";
        for n in [-100i64, -27, -1, 0, 5, 13, 26, 27, 54, 1000] {
            let encoded = cipher.encode_caesar(message, n).unwrap();
            assert_eq!(encoded.chars().count(), message.chars().count());
            assert_eq!(cipher.decode_caesar(&encoded, n).unwrap(), message);
        }
    }

    #[test]
    fn test_caesar_spec_scenario() {
        let cipher = RotationCipher::default();
        let message = "the quick brown fox";
        let encoded = cipher.encode_caesar(message, 5).unwrap();
        assert_ne!(encoded, message);
        assert_eq!(cipher.decode_caesar(&encoded, 5).unwrap(), message);
    }

    #[test]
    fn test_caesar_rejects_unknown_symbol() {
        let cipher = RotationCipher::default();
        let err = cipher.encode_caesar("Hello", 3).unwrap_err();
        assert_eq!(err, CipherError::UnknownSymbol { symbol: 'H' });
    }

    #[test]
    fn test_vigenere_known_encoding() {
        let cipher = RotationCipher::default();
        // key "ab" = ranks [0, 1]: even positions unchanged, odd shifted by 1
        let encoded = cipher.encode_vigenere("aaaa", "ab").unwrap();
        assert_eq!(encoded, "abab");
    }

    #[test]
    fn test_vigenere_roundtrip() {
        let cipher = RotationCipher::default();
        let message = "meet me at the usual place at noon";
        for key in ["a", "dog", "secret", "zz z"] {
            let encoded = cipher.encode_vigenere(message, key).unwrap();
            assert_eq!(cipher.decode_vigenere(&encoded, key).unwrap(), message);
        }
    }

    #[test]
    fn test_vigenere_empty_key() {
        let cipher = RotationCipher::default();
        let err = cipher.encode_vigenere("hello", "").unwrap_err();
        assert!(matches!(err, CipherError::InvalidKey { .. }));
        let err = cipher.decode_vigenere("hello", "").unwrap_err();
        assert!(matches!(err, CipherError::InvalidKey { .. }));
    }

    #[test]
    fn test_vigenere_key_outside_alphabet() {
        let cipher = RotationCipher::default();
        let err = cipher.encode_vigenere("hello", "K3y").unwrap_err();
        assert_eq!(err, CipherError::UnknownSymbol { symbol: 'K' });
    }

    #[test]
    fn test_vigenere_key_longer_than_message() {
        let cipher = RotationCipher::default();
        let encoded = cipher.encode_vigenere("hi", "longkey").unwrap();
        assert_eq!(cipher.decode_vigenere(&encoded, "longkey").unwrap(), "hi");
    }

    #[test]
    fn test_empty_message_is_fine() {
        let cipher = RotationCipher::default();
        assert_eq!(cipher.encode_caesar("", 5).unwrap(), "");
        assert_eq!(cipher.encode_vigenere("", "dog").unwrap(), "");
    }
}
