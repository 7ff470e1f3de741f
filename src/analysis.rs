//! Cryptanalysis module
//!
//! Breaks rotation ciphers without the key: an exhaustive scan over all 27
//! Caesar rotations, and a dictionary-driven search over candidate Vigenere
//! keys. Both rank candidate decodings with the frequency scorer and pick
//! the strict maximum, breaking ties toward the earliest candidate.

use crate::alphabet::ALPHABET_LEN;
use crate::error::{CipherError, Result};
use crate::frequency::FrequencyModel;
use crate::rotation::RotationCipher;

/// Result of a successful Vigenere break
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VigenereBreak {
    /// The best-scoring decoded message
    pub plaintext: String,
    /// The wordlist key that produced it
    pub key: String,
}

/// Cipher breaker built from a rotation cipher and a frequency model
///
/// The model should be defined over the same alphabet the cipher uses;
/// a mismatch surfaces as `UnknownSymbol` when scoring.
#[derive(Debug, Clone)]
pub struct Cryptanalyzer {
    cipher: RotationCipher,
    model: FrequencyModel,
}

impl Cryptanalyzer {
    /// Create an analyzer from its two collaborators
    pub fn new(cipher: RotationCipher, model: FrequencyModel) -> Self {
        Self { cipher, model }
    }

    /// Convenience constructor: standard alphabet, English frequency model
    pub fn english() -> Result<Self> {
        let cipher = RotationCipher::default();
        let model = FrequencyModel::english(cipher.alphabet().clone())?;
        Ok(Self::new(cipher, model))
    }

    /// The rotation cipher used to generate candidate decodings
    pub fn cipher(&self) -> &RotationCipher {
        &self.cipher
    }

    /// The frequency model used to rank candidates
    pub fn model(&self) -> &FrequencyModel {
        &self.model
    }

    /// Break a Caesar ciphertext by exhaustive rotation search
    ///
    /// Decodes under every rotation 0..=26, scores each candidate, and
    /// returns the decoding with the strictly maximum score (the lowest
    /// rotation wins ties). Fails with `EmptyInput` on empty ciphertext.
    pub fn crack_caesar(&self, ciphertext: &str) -> Result<String> {
        let mut best: Option<(f64, String)> = None;
        for n in 0..ALPHABET_LEN as i64 {
            let candidate = self.cipher.decode_caesar(ciphertext, n)?;
            let score = self.model.score(&candidate)?;
            #[cfg(feature = "logging")]
            log::debug!("caesar candidate n={} score={:.4}", n, score);
            if best.as_ref().map_or(true, |(top, _)| score > *top) {
                best = Some((score, candidate));
            }
        }
        // 27 candidates were scored, so best is always set here
        let (_, plaintext) = best.ok_or(CipherError::EmptyInput)?;
        Ok(plaintext)
    }

    /// Break a Vigenere ciphertext by trying every wordlist key
    ///
    /// Decodes under each candidate key in wordlist order, scores the
    /// result, and returns the best-scoring message together with its key
    /// (the earliest candidate wins ties). Exhaustive by design: no early
    /// termination or key-length inference. Fails with `EmptyWordlist` if
    /// there are no candidates and `EmptyInput` on empty ciphertext.
    pub fn crack_vigenere<S: AsRef<str>>(
        &self,
        ciphertext: &str,
        wordlist: &[S],
    ) -> Result<VigenereBreak> {
        if wordlist.is_empty() {
            return Err(CipherError::EmptyWordlist);
        }

        let mut best: Option<(f64, VigenereBreak)> = None;
        for word in wordlist {
            let key = word.as_ref();
            let candidate = self.cipher.decode_vigenere(ciphertext, key)?;
            let score = self.model.score(&candidate)?;
            #[cfg(feature = "logging")]
            log::debug!("vigenere candidate key={:?} score={:.4}", key, score);
            if best.as_ref().map_or(true, |(top, _)| score > *top) {
                best = Some((
                    score,
                    VigenereBreak {
                        plaintext: candidate,
                        key: key.to_string(),
                    },
                ));
            }
        }
        // The wordlist was non-empty, so best is always set here
        let (_, broken) = best.ok_or(CipherError::EmptyWordlist)?;
        Ok(broken)
    }
}
