//! Letter frequency table
//!
//! Relative occurrence of each letter in typical English text, in percent.
//! Process-wide constant, total over A-Z.

/// Frequency weights indexed by letter offset (`b'A'` is index 0).
const FREQUENCY: [f32; 26] = [
    8.12, // A
    1.49, // B
    2.71, // C
    4.32, // D
    12.0, // E
    2.30, // F
    2.03, // G
    5.92, // H
    7.31, // I
    0.10, // J
    0.69, // K
    3.98, // L
    2.61, // M
    6.95, // N
    7.68, // O
    1.82, // P
    0.11, // Q
    6.02, // R
    6.28, // S
    9.10, // T
    2.88, // U
    1.11, // V
    2.09, // W
    0.17, // X
    2.11, // Y
    0.07, // Z
];

/// Look up the frequency weight for an uppercase ASCII letter.
///
/// Returns `None` for any byte outside `A-Z`.
pub fn weight(letter: u8) -> Option<f32> {
    if letter.is_ascii_uppercase() {
        Some(FREQUENCY[usize::from(letter - b'A')])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_letters() {
        assert_eq!(weight(b'E'), Some(12.0));
        assert_eq!(weight(b'T'), Some(9.10));
        assert_eq!(weight(b'A'), Some(8.12));
    }

    #[test]
    fn test_rare_letters() {
        assert_eq!(weight(b'Q'), Some(0.11));
        assert_eq!(weight(b'Z'), Some(0.07));
    }

    #[test]
    fn test_table_is_total_and_non_negative() {
        for letter in b'A'..=b'Z' {
            let w = weight(letter).expect("every letter has a weight");
            assert!(w >= 0.0);
        }
    }

    #[test]
    fn test_non_uppercase_has_no_weight() {
        assert_eq!(weight(b'e'), None);
        assert_eq!(weight(b'3'), None);
        assert_eq!(weight(b'@'), None);
    }
}
