//! Symbol alphabet module
//!
//! This module defines the fixed 27-symbol alphabet (lowercase letters plus
//! space) that all rotation ciphers operate over. The alphabet is an
//! immutable bijection between symbols and integer ranks 0..=26; rotation
//! arithmetic is always performed modulo 27.

use crate::error::{CipherError, Result};
use std::collections::HashMap;

/// Number of symbols in the alphabet
pub const ALPHABET_LEN: usize = 27;

/// Immutable 27-symbol alphabet with a total symbol <-> rank bijection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    /// Symbols in rank order
    symbols: [char; ALPHABET_LEN],
    /// Inverse mapping: symbol -> rank
    ranks: HashMap<char, u8>,
}

impl Alphabet {
    /// Create the standard alphabet: 'a'..='z' at ranks 0..=25, space at 26
    pub fn standard() -> Self {
        let mut symbols = [' '; ALPHABET_LEN];
        for (i, slot) in symbols.iter_mut().enumerate().take(26) {
            *slot = (b'a' + i as u8) as char;
        }
        symbols[26] = ' ';
        // Infallible: the 27 symbols above are distinct by construction
        Self::build(symbols)
    }

    /// Create an alphabet from an arbitrary ordering of 27 distinct symbols
    ///
    /// Useful for testing with synthetic alphabets. Fails with
    /// `InvalidAlphabet` if any symbol appears twice.
    pub fn from_symbols(symbols: [char; ALPHABET_LEN]) -> Result<Self> {
        let mut seen = HashMap::with_capacity(ALPHABET_LEN);
        for (rank, &sym) in symbols.iter().enumerate() {
            if let Some(first) = seen.insert(sym, rank) {
                return Err(CipherError::InvalidAlphabet {
                    reason: format!("symbol {:?} appears at ranks {} and {}", sym, first, rank),
                });
            }
        }
        Ok(Self::build(symbols))
    }

    fn build(symbols: [char; ALPHABET_LEN]) -> Self {
        let ranks = symbols
            .iter()
            .enumerate()
            .map(|(i, &s)| (s, i as u8))
            .collect();
        Self { symbols, ranks }
    }

    /// Get the rank (0..=26) of a symbol
    pub fn rank(&self, symbol: char) -> Result<u8> {
        self.ranks
            .get(&symbol)
            .copied()
            .ok_or(CipherError::UnknownSymbol { symbol })
    }

    /// Get the symbol at a rank, or `None` if the rank is out of range
    pub fn symbol(&self, rank: u8) -> Option<char> {
        self.symbols.get(rank as usize).copied()
    }

    /// Check whether a symbol belongs to the alphabet
    pub fn contains(&self, symbol: char) -> bool {
        self.ranks.contains_key(&symbol)
    }

    /// Number of symbols (always 27)
    pub fn len(&self) -> usize {
        ALPHABET_LEN
    }

    /// Always false; present for clippy's len/is_empty convention
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate over symbols in rank order
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.iter().copied()
    }

    /// Rotate a symbol by `n` positions, wrapping modulo 27
    ///
    /// Defined for any `n`, including negative offsets. Fails with
    /// `UnknownSymbol` if the symbol is outside the alphabet.
    pub fn rotate(&self, symbol: char, n: i64) -> Result<char> {
        let rank = self.rank(symbol)? as i64;
        let rotated = (rank + n).rem_euclid(ALPHABET_LEN as i64) as usize;
        Ok(self.symbols[rotated])
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::standard()
    }
}
