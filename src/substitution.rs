//! Monoalphabetic substitution cipher - a full 26-letter permutation.
//!
//! The key is a permutation of the alphabet written positionally: its i-th
//! letter is the substitute for the i-th letter of `ABC..Z`. Keys are
//! validated strictly on parse (length, letters only, no duplicates), so a
//! parsed [`SubstitutionKey`] is always a bijection and encrypt/decrypt are
//! guaranteed mutual inverses.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::ALPHABET;

/// Errors that can occur when parsing a substitution key.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SubstitutionError {
    #[error("Key must be exactly 26 letters, got {0}")]
    WrongLength(usize),

    #[error("Key must contain only letters, found '{0}'")]
    NotALetter(char),

    #[error("Key must use each letter once, '{0}' repeats")]
    DuplicateLetter(char),
}

/// A validated permutation of the 26 uppercase letters.
///
/// Position i holds the substitute for the i-th alphabet letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubstitutionKey {
    letters: [u8; 26],
}

impl SubstitutionKey {
    /// Parses and validates a 26-letter key string.
    ///
    /// Case is ignored. Rejects wrong lengths, non-letters, and repeated
    /// letters — anything that would make the key a non-bijection.
    pub fn parse(key: &str) -> Result<Self, SubstitutionError> {
        let chars: Vec<char> = key.chars().collect();
        if chars.len() != 26 {
            return Err(SubstitutionError::WrongLength(chars.len()));
        }

        let mut letters = [0u8; 26];
        let mut seen = [false; 26];
        for (i, &c) in chars.iter().enumerate() {
            if !c.is_ascii_alphabetic() {
                return Err(SubstitutionError::NotALetter(c));
            }
            let upper = c.to_ascii_uppercase() as u8;
            let slot = (upper - b'A') as usize;
            if seen[slot] {
                return Err(SubstitutionError::DuplicateLetter(upper as char));
            }
            seen[slot] = true;
            letters[i] = upper;
        }

        Ok(SubstitutionKey { letters })
    }

    /// The identity key `ABC..Z` (encrypts every text to itself).
    pub fn identity() -> Self {
        SubstitutionKey { letters: *ALPHABET }
    }

    /// Generates a random permutation key.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let mut letters = *ALPHABET;
        letters.shuffle(rng);
        SubstitutionKey { letters }
    }

    /// Builds a key directly from a permutation of the alphabet bytes.
    ///
    /// Used by the brute-force enumerator, which maintains the permutation
    /// invariant itself.
    pub(crate) fn from_letters(letters: [u8; 26]) -> Self {
        debug_assert!({
            let mut seen = [false; 26];
            letters.iter().all(|&b| {
                let slot = (b - b'A') as usize;
                !std::mem::replace(&mut seen[slot], true)
            })
        });
        SubstitutionKey { letters }
    }

    /// The substitute for an uppercase letter.
    fn forward(&self, upper: u8) -> u8 {
        self.letters[(upper - b'A') as usize]
    }

    /// The alphabet letter that maps to an uppercase letter of the key.
    fn backward(&self, upper: u8) -> u8 {
        // A parsed key is a bijection, so the position always exists
        let pos = self.letters.iter().position(|&b| b == upper);
        b'A' + pos.unwrap_or((upper - b'A') as usize) as u8
    }
}

impl fmt::Display for SubstitutionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.letters {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

/// Encrypts text by substituting each letter through the key.
///
/// Case is re-applied from the input character; non-letters pass through
/// unchanged.
pub fn encrypt(text: &str, key: &SubstitutionKey) -> String {
    map_letters(text, |upper| key.forward(upper))
}

/// Decrypts text by substituting each letter through the inverse key.
pub fn decrypt(text: &str, key: &SubstitutionKey) -> String {
    map_letters(text, |upper| key.backward(upper))
}

/// Applies a letter map to the uppercase form of each letter, restoring
/// the original case and passing everything else through.
fn map_letters(text: &str, map: impl Fn(u8) -> u8) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_uppercase() {
                map(c as u8) as char
            } else if c.is_ascii_lowercase() {
                map(c.to_ascii_uppercase() as u8).to_ascii_lowercase() as char
            } else {
                c
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    // A reversed-alphabet (Atbash) key
    const REVERSED: &str = "ZYXWVUTSRQPONMLKJIHGFEDCBA";

    #[test]
    fn test_parse_accepts_valid_key() {
        let key = SubstitutionKey::parse(REVERSED).unwrap();
        assert_eq!(key.to_string(), REVERSED);
    }

    #[test]
    fn test_parse_uppercases_key() {
        let key = SubstitutionKey::parse(&REVERSED.to_lowercase()).unwrap();
        assert_eq!(key.to_string(), REVERSED);
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert_eq!(
            SubstitutionKey::parse("ABC"),
            Err(SubstitutionError::WrongLength(3))
        );
    }

    #[test]
    fn test_parse_rejects_non_letters() {
        assert_eq!(
            SubstitutionKey::parse("ZYXWVUTSRQPONMLKJIHGFEDCB4"),
            Err(SubstitutionError::NotALetter('4'))
        );
    }

    #[test]
    fn test_parse_rejects_duplicates() {
        assert_eq!(
            SubstitutionKey::parse("AACDEFGHIJKLMNOPQRSTUVWXYZ"),
            Err(SubstitutionError::DuplicateLetter('A'))
        );
    }

    #[test]
    fn test_encrypt_reversed_alphabet() {
        let key = SubstitutionKey::parse(REVERSED).unwrap();
        assert_eq!(encrypt("ABZ", &key), "ZYA");
    }

    #[test]
    fn test_encrypt_preserves_case_and_punctuation() {
        let key = SubstitutionKey::parse(REVERSED).unwrap();
        assert_eq!(encrypt("Hello, World!", &key), "Svool, Dliow!");
    }

    #[test]
    fn test_roundtrip_with_random_keys() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let plain = "The five boxing wizards jump quickly.";
        for _ in 0..20 {
            let key = SubstitutionKey::random(&mut rng);
            let cipher = encrypt(plain, &key);
            assert_eq!(decrypt(&cipher, &key), plain);
        }
    }

    #[test]
    fn test_identity_key_is_a_no_op() {
        let key = SubstitutionKey::identity();
        assert_eq!(encrypt("Plain Text 99", &key), "Plain Text 99");
    }

    #[test]
    fn test_random_keys_are_permutations() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let key = SubstitutionKey::random(&mut rng);
        let mut letters: Vec<char> = key.to_string().chars().collect();
        letters.sort_unstable();
        let sorted: String = letters.into_iter().collect();
        assert_eq!(sorted, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    }
}
