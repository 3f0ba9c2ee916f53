//! Bounded brute-force attacks on the toolkit's ciphers.
//!
//! Each attack is a lazy iterator: candidates are produced one at a time,
//! nothing is precomputed, and re-creating the iterator restarts the same
//! search (pure function of its inputs). The search spaces differ wildly —
//! Caesar has 25 keys, Vigenère 26^n, substitution 26! — so every
//! constructor validates its bound up front and refuses searches that
//! could not finish. Termination comes from the attempt counter alone; no
//! external cancellation is needed.

use serde::Serialize;
use thiserror::Error;

use crate::substitution::{self, SubstitutionKey};
use crate::{caesar, vigenere, ALPHABET};

/// Longest Vigenère key the exhaustive search accepts (26^8 keys).
pub const MAX_VIGENERE_KEY_LENGTH: usize = 8;

/// Most Vigenère candidates a single search may request.
pub const MAX_VIGENERE_CANDIDATES: u64 = 10_000;

/// Most substitution keys a single search may request.
pub const MAX_SUBSTITUTION_ATTEMPTS: u64 = 1_000_000;

/// Errors raised when a requested search cannot complete in bounded time.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AttackError {
    #[error("Key length must be at least 1")]
    ZeroKeyLength,

    #[error("Key length {0} exceeds the search maximum of {MAX_VIGENERE_KEY_LENGTH}")]
    KeyLengthTooLarge(usize),

    #[error("Candidate limit {0} exceeds the search maximum of {MAX_VIGENERE_CANDIDATES}")]
    LimitTooLarge(u64),

    #[error("Attempt count must be at least 1")]
    ZeroAttempts,

    #[error("Attempt count {0} exceeds the search maximum of {MAX_SUBSTITUTION_ATTEMPTS}")]
    AttemptCapTooLarge(u64),
}

/// One Caesar decryption attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaesarCandidate {
    pub shift: i32,
    pub text: String,
}

/// Exhaustive Caesar search: every shift from 1 through 25.
///
/// Shift 0 is excluded — it would only echo the ciphertext back.
#[derive(Debug, Clone)]
pub struct CaesarBruteForce {
    ciphertext: String,
    shift: i32,
}

impl CaesarBruteForce {
    pub fn new(ciphertext: &str) -> Self {
        CaesarBruteForce {
            ciphertext: ciphertext.to_string(),
            shift: 1,
        }
    }
}

impl Iterator for CaesarBruteForce {
    type Item = CaesarCandidate;

    fn next(&mut self) -> Option<CaesarCandidate> {
        if self.shift > 25 {
            return None;
        }
        let shift = self.shift;
        self.shift += 1;
        Some(CaesarCandidate {
            shift,
            text: caesar::decrypt(&self.ciphertext, shift),
        })
    }
}

/// One Vigenère decryption attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VigenereCandidate {
    pub key: String,
    pub text: String,
}

/// Bounded Vigenère search over all lowercase keys of a fixed length.
///
/// Keys are enumerated in lexicographic order (`aaa`, `aab`, ...) by a
/// base-26 odometer; the search stops after `limit` candidates or when the
/// key space is exhausted, whichever comes first.
#[derive(Debug, Clone)]
pub struct VigenereBruteForce {
    ciphertext: String,
    digits: Vec<u8>,
    remaining: u64,
}

impl VigenereBruteForce {
    /// Starts a search over keys of `key_length` letters, yielding at most
    /// `limit` candidates.
    ///
    /// Rejects zero or oversized key lengths and limits beyond
    /// [`MAX_VIGENERE_CANDIDATES`].
    pub fn new(ciphertext: &str, key_length: usize, limit: u64) -> Result<Self, AttackError> {
        if key_length == 0 {
            return Err(AttackError::ZeroKeyLength);
        }
        if key_length > MAX_VIGENERE_KEY_LENGTH {
            return Err(AttackError::KeyLengthTooLarge(key_length));
        }
        if limit > MAX_VIGENERE_CANDIDATES {
            return Err(AttackError::LimitTooLarge(limit));
        }

        let key_space = 26u64.pow(key_length as u32);
        Ok(VigenereBruteForce {
            ciphertext: ciphertext.to_string(),
            digits: vec![0; key_length],
            remaining: limit.min(key_space),
        })
    }

    fn current_key(&self) -> String {
        self.digits.iter().map(|&d| (b'a' + d) as char).collect()
    }

    /// Advances the odometer to the next key, rightmost digit fastest.
    fn advance(&mut self) {
        for digit in self.digits.iter_mut().rev() {
            if *digit < 25 {
                *digit += 1;
                return;
            }
            *digit = 0;
        }
    }
}

impl Iterator for VigenereBruteForce {
    type Item = VigenereCandidate;

    fn next(&mut self) -> Option<VigenereCandidate> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let key = self.current_key();
        let text = vigenere::decrypt(&self.ciphertext, &key)
            .expect("enumerated keys are never empty");
        self.advance();

        Some(VigenereCandidate { key, text })
    }
}

/// One substitution decryption attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubstitutionCandidate {
    pub key: String,
    pub text: String,
}

/// Bounded substitution search over alphabet permutations.
///
/// Permutations are enumerated lexicographically from the identity key
/// `ABC..Z`, one at a time — the 26! key space makes any eager
/// materialization impossible, so the cap is what guarantees termination.
#[derive(Debug, Clone)]
pub struct SubstitutionBruteForce {
    ciphertext: String,
    letters: [u8; 26],
    remaining: u64,
}

impl SubstitutionBruteForce {
    /// Starts a search yielding at most `max_attempts` candidates.
    ///
    /// Rejects zero attempts and caps beyond
    /// [`MAX_SUBSTITUTION_ATTEMPTS`].
    pub fn new(ciphertext: &str, max_attempts: u64) -> Result<Self, AttackError> {
        if max_attempts == 0 {
            return Err(AttackError::ZeroAttempts);
        }
        if max_attempts > MAX_SUBSTITUTION_ATTEMPTS {
            return Err(AttackError::AttemptCapTooLarge(max_attempts));
        }

        Ok(SubstitutionBruteForce {
            ciphertext: ciphertext.to_string(),
            letters: *ALPHABET,
            remaining: max_attempts,
        })
    }
}

impl Iterator for SubstitutionBruteForce {
    type Item = SubstitutionCandidate;

    fn next(&mut self) -> Option<SubstitutionCandidate> {
        if self.remaining == 0 {
            return None;
        }

        let key = SubstitutionKey::from_letters(self.letters);
        let candidate = SubstitutionCandidate {
            key: key.to_string(),
            text: substitution::decrypt(&self.ciphertext, &key),
        };

        // Exhaustion of 26! is unreachable in practice, but the enumerator
        // still terminates cleanly at the last permutation
        self.remaining = if next_permutation(&mut self.letters) {
            self.remaining - 1
        } else {
            0
        };

        Some(candidate)
    }
}

/// Rearranges `items` into the next lexicographic permutation in place.
///
/// Returns false when `items` is already the final (descending)
/// permutation, leaving it unchanged.
fn next_permutation(items: &mut [u8; 26]) -> bool {
    let Some(pivot) = items.windows(2).rposition(|w| w[0] < w[1]) else {
        return false;
    };
    let successor = items
        .iter()
        .rposition(|&b| b > items[pivot])
        .expect("pivot guarantees a larger element to its right");
    items.swap(pivot, successor);
    items[pivot + 1..].reverse();
    true
}
