//! Frequency analysis - the statistical attack on monoalphabetic text.
//!
//! English letter frequencies are uneven enough that ranking ciphertext
//! letters by count and pairing them with the known frequency order
//! recovers most of a substitution key, given enough text. This is a
//! heuristic: short or unusual ciphertext produces garbage, not errors.

use crate::ENGLISH_FREQ_ORDER;

/// Decrypts ciphertext by guessing a substitution key from letter counts.
///
/// Counts case-folded A–Z occurrences, ranks distinct letters by
/// descending count (ties keep first-encounter order), and maps the i-th
/// ranked ciphertext letter to the i-th letter of
/// [`ENGLISH_FREQ_ORDER`]. Unseen letters and non-alphabetic characters
/// pass through unchanged; case is preserved.
pub fn frequency_decrypt(ciphertext: &str) -> String {
    let ranked = rank_letters(ciphertext);

    // guessed_key[c - 'A'] = plaintext guess for ciphertext letter c
    let mut guessed_key: [Option<u8>; 26] = [None; 26];
    for (i, &letter) in ranked.iter().enumerate() {
        guessed_key[(letter - b'A') as usize] = Some(ENGLISH_FREQ_ORDER[i]);
    }

    ciphertext
        .chars()
        .map(|c| {
            if !c.is_ascii_alphabetic() {
                return c;
            }
            let upper = c.to_ascii_uppercase() as u8;
            match guessed_key[(upper - b'A') as usize] {
                Some(guess) if c.is_ascii_lowercase() => guess.to_ascii_lowercase() as char,
                Some(guess) => guess as char,
                None => c,
            }
        })
        .collect()
}

/// Ranks the distinct letters of the text by descending occurrence count.
///
/// Letters are recorded in first-encounter order and the sort is stable,
/// so equal counts keep that order.
fn rank_letters(text: &str) -> Vec<u8> {
    let mut counts: Vec<(u8, usize)> = Vec::new();

    for c in text.chars() {
        if !c.is_ascii_alphabetic() {
            continue;
        }
        let upper = c.to_ascii_uppercase() as u8;
        match counts.iter_mut().find(|(letter, _)| *letter == upper) {
            Some((_, count)) => *count += 1,
            None => counts.push((upper, 1)),
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.into_iter().map(|(letter, _)| letter).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::substitution::{self, SubstitutionKey};

    #[test]
    fn test_rank_orders_by_descending_count() {
        // e:3, a:2, b:1
        assert_eq!(rank_letters("eaebea"), vec![b'E', b'A', b'B']);
    }

    #[test]
    fn test_rank_breaks_ties_by_first_encounter() {
        // z and q both appear once; z came first
        assert_eq!(rank_letters("zq"), vec![b'Z', b'Q']);
        assert_eq!(rank_letters("qz"), vec![b'Q', b'Z']);
    }

    #[test]
    fn test_most_frequent_letter_maps_to_e() {
        // 'x' dominates, so every x should decode as e
        let decrypted = frequency_decrypt("xxxxx");
        assert_eq!(decrypted, "eeeee");
    }

    #[test]
    fn test_preserves_case_and_non_letters() {
        let decrypted = frequency_decrypt("Xx, x!");
        assert_eq!(decrypted, "Ee, e!");
    }

    #[test]
    fn test_recovers_majority_of_english_corpus() {
        // Long English-ish text: repeated pangram-free prose keeps letter
        // statistics close to the reference order
        let plain = "It was a bright cold day in April and the clocks were \
                     striking thirteen Winston Smith his chin nuzzled into \
                     his breast in an effort to escape the vile wind slipped \
                     quickly through the glass doors though not quickly \
                     enough to prevent a swirl of gritty dust from entering \
                     along with him the hallway smelt of boiled cabbage and \
                     old rag mats at one end of it a coloured poster too \
                     large for indoor display had been tacked to the wall it \
                     depicted simply an enormous face more than a metre wide \
                     the face of a man of about forty five with a heavy black \
                     moustache and ruggedly handsome features winston made \
                     for the stairs it was no use trying the lift even at the \
                     best of times it was seldom working and at present the \
                     electric current was cut off during daylight hours it \
                     was part of the economy drive in preparation for hate \
                     week the flat was seven flights up and winston who was \
                     thirty nine and had a varicose ulcer above his right \
                     ankle went slowly resting several times on the way";

        let key = SubstitutionKey::parse("QWERTYUIOPASDFGHJKLZXCVBNM").unwrap();
        let cipher = substitution::encrypt(plain, &key);
        let guessed = frequency_decrypt(&cipher);

        let total = plain.chars().filter(|c| c.is_ascii_alphabetic()).count();
        let correct = plain
            .chars()
            .zip(guessed.chars())
            .filter(|(p, g)| p.is_ascii_alphabetic() && p == g)
            .count();

        // Heuristic quality bar: more than half the letters recovered
        assert!(
            correct * 2 > total,
            "only {correct}/{total} letters recovered"
        );
    }
}
