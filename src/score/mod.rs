//! Word scoring core
//!
//! Pure, synchronous pipeline: a raw path parameter is validated into a
//! [`Word`], then each letter's frequency weight is looked up and summed.
//! No I/O, no shared mutable state.

pub mod freq;
pub mod word;

// Re-export the main entry types
pub use word::Word;

use thiserror::Error;

/// Errors produced by word validation and scoring.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoreError {
    /// Input is not exactly five characters (and five bytes).
    #[error("word length ({0}) is not 5")]
    Length(usize),

    /// Input contains a character outside `a-z` / `A-Z`.
    #[error("word contains illegal character ({0})")]
    IllegalCharacter(char),

    /// A letter has no frequency-table entry. The table is total over A-Z,
    /// so this cannot fire for any constructed `Word`.
    #[error("no such character ({0}) in frequency table")]
    UnknownLetter(char),
}

/// Sum the frequency weights of the word's five letters.
///
/// Fails with [`ScoreError::UnknownLetter`] if a letter is missing from the
/// table; the partial sum is discarded.
pub fn score(word: Word) -> Result<f32, ScoreError> {
    let mut total = 0.0_f32;
    for letter in word.letters() {
        match freq::weight(letter) {
            Some(weight) => total += weight,
            None => return Err(ScoreError::UnknownLetter(char::from(letter))),
        }
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-4,
            "score {actual} not close to {expected}"
        );
    }

    #[test]
    fn test_score_hello() {
        let word = Word::parse("HELLO").unwrap();
        // H + E + L + L + O = 5.92 + 12.0 + 3.98 + 3.98 + 7.68
        assert_close(score(word).unwrap(), 33.56);
    }

    #[test]
    fn test_score_rarest_letters() {
        let word = Word::parse("zzzzz").unwrap();
        assert_close(score(word).unwrap(), 0.35);
    }

    #[test]
    fn test_score_matches_manual_sum() {
        let word = Word::parse("crane").unwrap();
        let expected: f32 = word
            .letters()
            .iter()
            .map(|&l| freq::weight(l).unwrap())
            .sum();
        assert_close(score(word).unwrap(), expected);
    }

    #[test]
    fn test_score_order_independent() {
        let forward = score(Word::parse("angle").unwrap()).unwrap();
        let backward = score(Word::parse("elgna").unwrap()).unwrap();
        assert_close(forward, backward);
    }

    #[test]
    fn test_unknown_letter_is_rejected() {
        // Only reachable through the test-only constructor; parse() never
        // produces a word with a non-letter byte.
        let word = Word::raw(*b"HELL0");
        assert_eq!(score(word), Err(ScoreError::UnknownLetter('0')));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ScoreError::Length(4).to_string(), "word length (4) is not 5");
        assert_eq!(
            ScoreError::IllegalCharacter('3').to_string(),
            "word contains illegal character (3)"
        );
        assert_eq!(
            ScoreError::UnknownLetter('0').to_string(),
            "no such character (0) in frequency table"
        );
    }
}
