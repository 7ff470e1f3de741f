//! # rotor27 - Classical Cipher & Cryptanalysis Toolkit
//!
//! A small classical-cryptography toy suite over a fixed 27-symbol alphabet
//! (lowercase letters plus space): Caesar and Vigenere rotation ciphers, a
//! one-time pad over big integers, and frequency-based cryptanalysis that
//! breaks both rotation ciphers without the key.
//!
//! ## Quick Start
//!
//! ```rust
//! use rotor27::{Cryptanalyzer, RotationCipher};
//!
//! let cipher = RotationCipher::default();
//! let analyzer = Cryptanalyzer::english().unwrap();
//!
//! // Encode and break a Caesar cipher
//! let message = "it was the best of times it was the worst of times \
//!                it was the age of wisdom it was the age of foolishness";
//! let ciphertext = cipher.encode_caesar(message, 5).unwrap();
//! assert_eq!(cipher.decode_caesar(&ciphertext, 5).unwrap(), message);
//! assert_eq!(analyzer.crack_caesar(&ciphertext).unwrap(), message);
//! ```
//!
//! Inputs are expected pre-folded to lowercase with no symbols outside
//! `{a-z, space}`; out-of-alphabet symbols fail with
//! [`CipherError::UnknownSymbol`]. The library owns no I/O: frequency
//! tables and wordlists arrive already parsed from the caller.
//!
//! ## Modules
//!
//! - [`alphabet`]: the 27-symbol alphabet and modular rotation
//! - [`codec`]: text <-> big integer <-> bit string conversions
//! - [`rotation`]: Caesar and Vigenere encode/decode
//! - [`frequency`]: reference distribution + similarity scorer
//! - [`analysis`]: exhaustive Caesar break, dictionary Vigenere break
//! - [`otp`]: one-time pad XOR cipher

// Modules
pub mod alphabet;
pub mod analysis;
pub mod codec;
pub mod error;
pub mod frequency;
pub mod otp;
pub mod rotation;

// Re-exports for convenient access
pub use alphabet::{Alphabet, ALPHABET_LEN};
pub use analysis::{Cryptanalyzer, VigenereBreak};
pub use error::{CipherError, DecodeError, Result};
pub use frequency::FrequencyModel;
pub use otp::{OtpCipher, OtpEncryption};
pub use rotation::RotationCipher;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
