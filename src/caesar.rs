//! Caesar cipher - a single fixed shift applied to every character.
//!
//! Letters rotate within their case, digits rotate mod 10, other printable
//! ASCII rotates mod 95, and spaces plus non-ASCII characters are left
//! alone. Encryption rejects shifts above 26 as a hard input-validation
//! rule, not a mathematical necessity (a shift of 27 would reduce to 1).

use thiserror::Error;

use crate::alphabet::shift_char;

/// Errors that can occur when applying the Caesar cipher.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CaesarError {
    #[error("Shift {0} is too large: must not exceed 26")]
    ShiftTooLarge(i32),
}

/// Encrypts text by shifting every character forward by `shift`.
///
/// Returns [`CaesarError::ShiftTooLarge`] when `shift > 26`. The operation
/// aborts with no partial result.
pub fn encrypt(text: &str, shift: i32) -> Result<String, CaesarError> {
    if shift > 26 {
        return Err(CaesarError::ShiftTooLarge(shift));
    }
    Ok(apply(text, shift))
}

/// Decrypts text encrypted with the given shift.
///
/// Equivalent to encrypting with the negated shift. Decryption never fails:
/// any shift magnitude simply wraps within each character class.
pub fn decrypt(text: &str, shift: i32) -> String {
    apply(text, -shift)
}

/// Applies the shift to every character, preserving each one's class.
fn apply(text: &str, shift: i32) -> String {
    text.chars().map(|c| shift_char(c, shift)).collect()
}
