//! # Cipherlab - classical ciphers and the attacks that break them
//!
//! Cipherlab is an educational toolkit implementing five classical
//! substitution/transposition ciphers, each with forward and inverse
//! transforms, plus brute-force and statistical attacks against them.
//!
//! None of these ciphers is secure. They are implemented for studying how
//! substitution ciphers work and how cryptanalysis defeats them.
//!
//! ## Overview
//!
//! - **Caesar**: fixed shift over letters, digits, and printable ASCII
//! - **Vigenère**: repeating key stream of per-character shifts
//! - **Monoalphabetic substitution**: full 26-letter permutation
//! - **Playfair**: digraph substitution over a keyword-derived 5×5 matrix
//! - **Frequency analysis**: statistical attack on monoalphabetic ciphertext
//! - **Brute force**: bounded exhaustive search for Caesar, Vigenère, and
//!   substitution keys
//!
//! Every transform is a pure function: inputs are never mutated, no state
//! survives a call, and unrecognized characters pass through unchanged
//! rather than causing errors (Playfair is the documented exception — it
//! strips everything outside A–Z).
//!
//! ## Example
//!
//! ```rust
//! use cipherlab::{caesar, vigenere, playfair};
//!
//! let secret = caesar::encrypt("Attack at dawn", 3).unwrap();
//! assert_eq!(caesar::decrypt(&secret, 3), "Attack at dawn");
//!
//! let secret = vigenere::encrypt("HELLO WORLD", "key").unwrap();
//! assert_eq!(vigenere::decrypt(&secret, "key").unwrap(), "HELLO WORLD");
//!
//! assert_eq!(playfair::encrypt("INSTRUMENTS", "MONARCHY"), "GATLMZCLRQXA");
//! ```
//!
//! ## Modules
//!
//! - [`alphabet`]: character classification and wraparound shifting
//! - [`caesar`]: fixed-shift cipher
//! - [`vigenere`]: key-stream shift cipher
//! - [`substitution`]: monoalphabetic permutation cipher
//! - [`frequency`]: frequency-analysis attack
//! - [`playfair`]: 5×5 digraph cipher
//! - [`attacks`]: bounded brute-force search iterators

/// The 26 uppercase letters, in order. Substitution keys align to this.
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// English letters by descending relative frequency, most common first.
pub const ENGLISH_FREQ_ORDER: &[u8; 26] = b"ETAOINSHRDLCUMWFGYPBVKJXQZ";

pub mod alphabet;
pub mod attacks;
pub mod caesar;
pub mod frequency;
pub mod playfair;
pub mod substitution;
pub mod vigenere;

// Re-export commonly used types at the crate root
pub use alphabet::{shift_char, CharClass};
pub use attacks::{
    AttackError, CaesarBruteForce, CaesarCandidate, SubstitutionBruteForce,
    SubstitutionCandidate, VigenereBruteForce, VigenereCandidate,
};
pub use caesar::CaesarError;
pub use frequency::frequency_decrypt;
pub use playfair::Matrix;
pub use substitution::{SubstitutionError, SubstitutionKey};
pub use vigenere::VigenereError;
