//! Frequency model module
//!
//! A normalized reference distribution over the alphabet's symbols, and the
//! similarity scorer used to rank candidate plaintexts during cryptanalysis.
//! The score is an ad-hoc similarity (not chi-squared or log-likelihood):
//! it is only meaningful for relative ranking among candidates of the same
//! length, never as an absolute probability.

use crate::alphabet::Alphabet;
use crate::error::{CipherError, Result};
use std::collections::{HashMap, HashSet};

/// English letter frequencies a-z (relative, un-normalized)
///
/// Standard corpus table; the model normalizes on construction.
const ENGLISH_LETTER_FREQ: [f64; 26] = [
    0.08167, 0.01492, 0.02782, 0.04253, 0.12702, 0.02228, 0.02015, 0.06094, 0.06966, 0.00153,
    0.00772, 0.04025, 0.02406, 0.06749, 0.07507, 0.01929, 0.00095, 0.05987, 0.06327, 0.09056,
    0.02758, 0.00978, 0.02360, 0.00150, 0.01974, 0.00074,
];

/// Relative frequency of the space symbol in running English text
const ENGLISH_SPACE_FREQ: f64 = 0.19181;

/// Normalized reference distribution with a similarity scorer
#[derive(Debug, Clone)]
pub struct FrequencyModel {
    alphabet: Alphabet,
    /// Normalized (symbol, weight) pairs in insertion order
    weights: Vec<(char, f64)>,
    /// Symbol whose similarity term is dropped from the score, if any
    excluded: Option<char>,
}

impl FrequencyModel {
    /// Build a model from (symbol, weight) pairs over the given alphabet
    ///
    /// Weights are normalized internally to sum to 1.0; insertion order is
    /// preserved as the model's domain order. Fails with `UnknownSymbol` for
    /// a symbol outside the alphabet, and `InvalidModel` for an empty pair
    /// list, a duplicate symbol, a negative or non-finite weight, or a zero
    /// weight sum.
    pub fn new(alphabet: Alphabet, pairs: &[(char, f64)]) -> Result<Self> {
        if pairs.is_empty() {
            return Err(CipherError::InvalidModel {
                reason: "no (symbol, weight) pairs given".to_string(),
            });
        }

        let mut seen = HashSet::with_capacity(pairs.len());
        let mut sum = 0.0;
        for &(symbol, weight) in pairs {
            if !alphabet.contains(symbol) {
                return Err(CipherError::UnknownSymbol { symbol });
            }
            if !seen.insert(symbol) {
                return Err(CipherError::InvalidModel {
                    reason: format!("duplicate symbol {:?}", symbol),
                });
            }
            if !weight.is_finite() || weight < 0.0 {
                return Err(CipherError::InvalidModel {
                    reason: format!("weight {} for symbol {:?} is not a non-negative real", weight, symbol),
                });
            }
            sum += weight;
        }
        if sum <= 0.0 {
            return Err(CipherError::InvalidModel {
                reason: "weights sum to zero".to_string(),
            });
        }

        let weights = pairs.iter().map(|&(s, w)| (s, w / sum)).collect();
        Ok(Self {
            alphabet,
            weights,
            excluded: None,
        })
    }

    /// Build the standard English model over the given alphabet
    ///
    /// Letters a-z use corpus frequencies, the space symbol gets its running-
    /// text frequency, and the space term is excluded from scoring (its
    /// weight dominates every candidate equally and carries no signal for
    /// ranking rotations).
    pub fn english(alphabet: Alphabet) -> Result<Self> {
        let mut pairs: Vec<(char, f64)> = ENGLISH_LETTER_FREQ
            .iter()
            .enumerate()
            .map(|(i, &w)| ((b'a' + i as u8) as char, w))
            .collect();
        pairs.push((' ', ENGLISH_SPACE_FREQ));
        Self::new(alphabet, &pairs)?.exclude_symbol(' ')
    }

    /// Drop one domain symbol's similarity term from the score sum
    ///
    /// The excluded symbol is an explicit choice, never an artifact of load
    /// order. Fails with `UnknownSymbol` if the symbol is not in the model's
    /// domain.
    pub fn exclude_symbol(mut self, symbol: char) -> Result<Self> {
        if !self.weights.iter().any(|&(s, _)| s == symbol) {
            return Err(CipherError::UnknownSymbol { symbol });
        }
        self.excluded = Some(symbol);
        Ok(self)
    }

    /// The alphabet this model is defined over
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The symbol excluded from scoring, if any
    pub fn excluded(&self) -> Option<char> {
        self.excluded
    }

    /// Normalized weight of a symbol, or `None` if outside the domain
    pub fn weight(&self, symbol: char) -> Option<f64> {
        self.weights
            .iter()
            .find(|&&(s, _)| s == symbol)
            .map(|&(_, w)| w)
    }

    /// Number of similarity terms the score sums (domain minus exclusions)
    pub fn score_terms(&self) -> usize {
        self.weights.len() - usize::from(self.excluded.is_some())
    }

    /// Score a text's similarity to the reference distribution
    ///
    /// Computes the text's empirical symbol distribution, then sums
    /// `1 - |reference - empirical|` over every domain symbol except the
    /// excluded one. Higher is more English-like; the range is
    /// `[0, score_terms()]`. Fails with `EmptyInput` on zero-length text and
    /// `UnknownSymbol` if the text strays outside the alphabet.
    pub fn score(&self, text: &str) -> Result<f64> {
        let mut counts: HashMap<char, usize> = HashMap::with_capacity(self.alphabet.len());
        let mut len = 0usize;
        for sym in text.chars() {
            if !self.alphabet.contains(sym) {
                return Err(CipherError::UnknownSymbol { symbol: sym });
            }
            *counts.entry(sym).or_insert(0) += 1;
            len += 1;
        }
        if len == 0 {
            return Err(CipherError::EmptyInput);
        }

        let total = len as f64;
        let score = self
            .weights
            .iter()
            .filter(|&&(symbol, _)| Some(symbol) != self.excluded)
            .map(|&(symbol, reference)| {
                let empirical = counts.get(&symbol).copied().unwrap_or(0) as f64 / total;
                1.0 - (reference - empirical).abs()
            })
            .sum();
        Ok(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn english() -> FrequencyModel {
        FrequencyModel::english(Alphabet::standard()).unwrap()
    }

    #[test]
    fn test_weights_normalized() {
        let model = english();
        let sum: f64 = Alphabet::standard()
            .symbols()
            .filter_map(|s| model.weight(s))
            .sum();
        assert_relative_eq!(sum, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_english_excludes_space() {
        let model = english();
        assert_eq!(model.excluded(), Some(' '));
        assert_eq!(model.score_terms(), 26);
    }

    #[test]
    fn test_score_empty_input() {
        let err = english().score("").unwrap_err();
        assert_eq!(err, CipherError::EmptyInput);
    }

    #[test]
    fn test_score_unknown_symbol() {
        let err = english().score("caf9").unwrap_err();
        assert_eq!(err, CipherError::UnknownSymbol { symbol: '9' });
    }

    #[test]
    fn test_score_range() {
        let model = english();
        let score = model.score("hello world").unwrap();
        assert!(score > 0.0);
        assert!(score <= model.score_terms() as f64);
    }

    #[test]
    fn test_english_text_beats_uniform_junk() {
        let model = english();
        let natural = "it was a bright cold day in april and the clocks were striking";
        let junk = "zzqqxxjjzzqqxxjjzzqqxxjjzzqqxxjjzzqqxxjjzzqqxxjjzzqqxxjjzzqqxx";
        assert!(model.score(natural).unwrap() > model.score(junk).unwrap());
    }

    #[test]
    fn test_self_similarity_is_maximal() {
        // A text whose empirical distribution equals the reference scores
        // exactly score_terms(). Build a tiny two-symbol-dominant model to
        // make an exact match constructible.
        let alphabet = Alphabet::standard();
        let model = FrequencyModel::new(alphabet, &[('a', 3.0), ('b', 1.0)]).unwrap();
        // "aaab" matches the normalized reference (0.75, 0.25) exactly
        let score = model.score("aaab").unwrap();
        assert_relative_eq!(score, 2.0, epsilon = 1e-12);
        // Any other mix scores strictly less
        assert!(model.score("aabb").unwrap() < 2.0);
    }

    #[test]
    fn test_exclusion_drops_one_term() {
        let alphabet = Alphabet::standard();
        let base = FrequencyModel::new(alphabet, &[('a', 3.0), ('b', 1.0)]).unwrap();
        let excluded = base.clone().exclude_symbol('b').unwrap();
        let full = base.score("aaab").unwrap();
        let partial = excluded.score("aaab").unwrap();
        assert_relative_eq!(full - partial, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_exclude_unknown_symbol() {
        let model = english();
        let err = model.exclude_symbol('!').unwrap_err();
        assert_eq!(err, CipherError::UnknownSymbol { symbol: '!' });
    }

    #[test]
    fn test_invalid_models() {
        let alphabet = Alphabet::standard();
        assert!(matches!(
            FrequencyModel::new(alphabet.clone(), &[]).unwrap_err(),
            CipherError::InvalidModel { .. }
        ));
        assert!(matches!(
            FrequencyModel::new(alphabet.clone(), &[('a', -1.0)]).unwrap_err(),
            CipherError::InvalidModel { .. }
        ));
        assert!(matches!(
            FrequencyModel::new(alphabet.clone(), &[('a', 0.0)]).unwrap_err(),
            CipherError::InvalidModel { .. }
        ));
        assert!(matches!(
            FrequencyModel::new(alphabet.clone(), &[('a', 1.0), ('a', 2.0)]).unwrap_err(),
            CipherError::InvalidModel { .. }
        ));
        assert_eq!(
            FrequencyModel::new(alphabet, &[('?', 1.0)]).unwrap_err(),
            CipherError::UnknownSymbol { symbol: '?' }
        );
    }
}
