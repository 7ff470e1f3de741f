//! Error types for rotor27
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Result type alias for cipher operations
pub type Result<T> = std::result::Result<T, CipherError>;

/// Main error type for cipher and cryptanalysis operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CipherError {
    /// Symbol outside the 27-symbol alphabet
    #[error("Unknown symbol {symbol:?}: not in the alphabet")]
    UnknownSymbol { symbol: char },

    /// Vigenere key is unusable
    #[error("Invalid key: {reason}")]
    InvalidKey { reason: String },

    /// Zero-length text passed to scoring or cracking
    #[error("Empty input: at least one symbol is required")]
    EmptyInput,

    /// No candidate keys to search
    #[error("Empty wordlist: no candidate keys to try")]
    EmptyWordlist,

    /// Alphabet construction failed
    #[error("Invalid alphabet: {reason}")]
    InvalidAlphabet { reason: String },

    /// Frequency model construction failed
    #[error("Invalid frequency model: {reason}")]
    InvalidModel { reason: String },

    /// Decoding error
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),
}

/// Errors during integer-to-text or bit-string decoding
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    /// The integer's byte representation is not valid UTF-8 text
    #[error("Decoded bytes are not valid UTF-8")]
    InvalidUtf8,

    /// The bit string contains something other than '0' and '1'
    #[error("Invalid bit string: unexpected character {0:?}")]
    InvalidBit(char),

    /// The bit string is empty
    #[error("Invalid bit string: empty")]
    EmptyBitString,
}
