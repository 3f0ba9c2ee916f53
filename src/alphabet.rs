//! Character classification and wraparound shifting.
//!
//! This is the primitive every linear-alphabet cipher (Caesar, Vigenère)
//! builds on: classify a character into the class it shifts within, then
//! rotate it inside that class. Characters outside all shiftable classes
//! pass through untouched — classification is total and never fails.

/// The shift class of a single character.
///
/// Each class wraps within its own range; `Space` and `Passthrough` do not
/// shift at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// `A`–`Z`, shifts mod 26.
    Upper,
    /// `a`–`z`, shifts mod 26.
    Lower,
    /// `0`–`9`, shifts mod 10.
    Digit,
    /// The space character, always preserved as-is.
    Space,
    /// Any other printable ASCII (32..=126), shifts mod 95.
    OtherPrintable,
    /// Control characters and non-ASCII, always preserved as-is.
    Passthrough,
}

/// Classifies a character. Total over all of `char`.
pub fn classify(c: char) -> CharClass {
    match c {
        'A'..='Z' => CharClass::Upper,
        'a'..='z' => CharClass::Lower,
        '0'..='9' => CharClass::Digit,
        ' ' => CharClass::Space,
        c if (c as u32) >= 32 && (c as u32) <= 126 => CharClass::OtherPrintable,
        _ => CharClass::Passthrough,
    }
}

/// Shifts a character within its class, wrapping around.
///
/// Negative shifts rotate backwards. Spaces, control characters, and
/// non-ASCII characters are returned unchanged, so the function is safe to
/// apply to arbitrary text.
pub fn shift_char(c: char, shift: i32) -> char {
    match classify(c) {
        CharClass::Upper => rotate(c, b'A', 26, shift),
        CharClass::Lower => rotate(c, b'a', 26, shift),
        CharClass::Digit => rotate(c, b'0', 10, shift),
        CharClass::OtherPrintable => rotate(c, 32, 95, shift),
        CharClass::Space | CharClass::Passthrough => c,
    }
}

/// Rotates an ASCII character within the range starting at `base` of the
/// given `size`, wrapping in both directions.
fn rotate(c: char, base: u8, size: i32, shift: i32) -> char {
    let offset = c as i32 - base as i32;
    let wrapped = (offset + shift).rem_euclid(size);
    (base + wrapped as u8) as char
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_covers_all_classes() {
        assert_eq!(classify('Q'), CharClass::Upper);
        assert_eq!(classify('q'), CharClass::Lower);
        assert_eq!(classify('7'), CharClass::Digit);
        assert_eq!(classify(' '), CharClass::Space);
        assert_eq!(classify('!'), CharClass::OtherPrintable);
        assert_eq!(classify('~'), CharClass::OtherPrintable);
        assert_eq!(classify('\n'), CharClass::Passthrough);
        assert_eq!(classify('é'), CharClass::Passthrough);
        assert_eq!(classify('🔒'), CharClass::Passthrough);
    }

    #[test]
    fn test_shift_uppercase_wraps() {
        assert_eq!(shift_char('A', 3), 'D');
        assert_eq!(shift_char('Z', 1), 'A');
        assert_eq!(shift_char('A', -1), 'Z');
        assert_eq!(shift_char('M', 26), 'M');
    }

    #[test]
    fn test_shift_lowercase_wraps() {
        assert_eq!(shift_char('a', 3), 'd');
        assert_eq!(shift_char('z', 2), 'b');
        assert_eq!(shift_char('c', -5), 'x');
    }

    #[test]
    fn test_shift_digit_wraps_mod_10() {
        assert_eq!(shift_char('0', 3), '3');
        assert_eq!(shift_char('9', 1), '0');
        assert_eq!(shift_char('2', -3), '9');
        // Letter shifts larger than 10 still wrap digits correctly
        assert_eq!(shift_char('5', 13), '8');
    }

    #[test]
    fn test_shift_printable_wraps_mod_95() {
        assert_eq!(shift_char('!', 1), '"');
        assert_eq!(shift_char('#', -2), '!');
        // The wrap passes through the space slot: space itself never
        // shifts, so a character landing there cannot shift back.
        assert_eq!(shift_char('~', 1), ' ');
        assert_eq!(shift_char('!', -1), '~');
    }

    #[test]
    fn test_space_and_passthrough_never_shift() {
        assert_eq!(shift_char(' ', 13), ' ');
        assert_eq!(shift_char('\t', 13), '\t');
        assert_eq!(shift_char('ñ', 13), 'ñ');
        assert_eq!(shift_char('🔒', 13), '🔒');
    }

    #[test]
    fn test_shift_roundtrip_all_printable() {
        for b in 32u8..=126 {
            let c = b as char;
            for shift in -94..=94 {
                let there = shift_char(c, shift);
                if there == ' ' && c != ' ' {
                    // landed on the non-shifting space slot, cannot return
                    continue;
                }
                let back = shift_char(there, -shift);
                assert_eq!(back, c, "char {c:?} shift {shift}");
            }
        }
    }
}
