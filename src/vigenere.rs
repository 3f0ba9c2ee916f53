//! Vigenère cipher - a repeating key stream of per-character shifts.
//!
//! Each key letter contributes a shift (`a` = 0 .. `z` = 25) and the key
//! cycles over the text. One asymmetry is load-bearing: spaces pass through
//! WITHOUT advancing the key cursor, so the key stream resynchronizes
//! around word boundaries. Every other character consumes a key position,
//! including characters that end up passed through unchanged.

use thiserror::Error;

use crate::alphabet::shift_char;

/// Errors that can occur when applying the Vigenère cipher.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum VigenereError {
    #[error("Key must not be empty")]
    EmptyKey,
}

/// Encrypts text with the given key.
pub fn encrypt(text: &str, key: &str) -> Result<String, VigenereError> {
    apply(text, key, 1)
}

/// Decrypts text with the given key.
pub fn decrypt(text: &str, key: &str) -> Result<String, VigenereError> {
    apply(text, key, -1)
}

/// Applies the key stream in the given direction (+1 encrypt, -1 decrypt).
///
/// The key is lowercased internally; its letters are taken as offsets from
/// `'a'`. Returns [`VigenereError::EmptyKey`] for a zero-length key, the
/// one input that cannot produce a key stream.
fn apply(text: &str, key: &str, direction: i32) -> Result<String, VigenereError> {
    if key.is_empty() {
        return Err(VigenereError::EmptyKey);
    }

    let key: Vec<i32> = key
        .to_lowercase()
        .bytes()
        .map(|b| (b as i32 - 'a' as i32))
        .collect();

    let mut result = String::with_capacity(text.len());
    let mut cursor = 0usize;

    for c in text.chars() {
        if c == ' ' {
            // Spaces do not consume a key position
            result.push(' ');
            continue;
        }

        let shift = key[cursor % key.len()] * direction;
        result.push(shift_char(c, shift));
        cursor += 1;
    }

    Ok(result)
}
