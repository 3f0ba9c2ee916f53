//! Playfair cipher - digraph substitution over a keyword-derived 5×5 matrix.
//!
//! Playfair has its own alphabet rules and does not share the linear
//! shifting machinery of the other ciphers: J merges into I to fit 25
//! letters into the grid, everything outside A–Z is stripped (not passed
//! through), and letters are substituted two at a time.
//!
//! Encryption is a pure three-step pipeline: build the matrix from the
//! keyword, split the cleaned text into digraphs, transform each digraph
//! by the row/column/rectangle rules.

/// Ordered pair of letters consumed atomically by the transform.
type Digraph = (u8, u8);

/// The 25-letter Playfair alphabet (J merged into I).
const PLAYFAIR_ALPHABET: &[u8; 25] = b"ABCDEFGHIKLMNOPQRSTUVWXYZ";

/// Filler letter for doubled pairs and odd-length text.
const FILLER: u8 = b'X';

/// A 5×5 Playfair matrix with a reverse-lookup table.
///
/// The grid holds each of the 25 letters exactly once. `positions` maps a
/// letter (index `letter - 'A'`, J sharing I's entry) to its (row, col),
/// built once so digraph transforms avoid scanning the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    grid: [[u8; 5]; 5],
    positions: [(usize, usize); 26],
}

impl Matrix {
    /// Builds the matrix for a keyword.
    ///
    /// The keyword is uppercased with J mapped to I; duplicate letters are
    /// dropped keeping the first occurrence; the remaining alphabet fills
    /// the grid in order. A keyword with no letters at all degenerates to
    /// the plain alphabet matrix, which is accepted.
    pub fn build(keyword: &str) -> Self {
        let mut order: Vec<u8> = Vec::with_capacity(25);
        let mut used = [false; 26];

        let keyword_letters = keyword
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .map(|c| merge_j(c.to_ascii_uppercase() as u8));
        for letter in keyword_letters.chain(PLAYFAIR_ALPHABET.iter().copied()) {
            let slot = (letter - b'A') as usize;
            if !used[slot] {
                used[slot] = true;
                order.push(letter);
            }
        }

        let mut grid = [[0u8; 5]; 5];
        let mut positions = [(0usize, 0usize); 26];
        for (i, &letter) in order.iter().enumerate() {
            let (row, col) = (i / 5, i % 5);
            grid[row][col] = letter;
            positions[(letter - b'A') as usize] = (row, col);
        }
        // J is looked up through I's cell
        positions[(b'J' - b'A') as usize] = positions[(b'I' - b'A') as usize];

        Matrix { grid, positions }
    }

    /// The letters of one row, in grid order.
    pub fn row(&self, row: usize) -> [u8; 5] {
        self.grid[row]
    }

    /// The (row, col) of a letter. Callers pass uppercase A–Z only.
    fn position(&self, letter: u8) -> (usize, usize) {
        self.positions[(letter - b'A') as usize]
    }

    fn at(&self, row: usize, col: usize) -> u8 {
        self.grid[row][col]
    }
}

/// Maps J to I; every other letter is unchanged.
fn merge_j(letter: u8) -> u8 {
    if letter == b'J' {
        b'I'
    } else {
        letter
    }
}

/// Splits text into Playfair digraphs.
///
/// Uppercases, merges J into I, strips everything that is not a letter,
/// then pairs left to right. A doubled letter is split with the filler
/// `X`, re-using the second letter to start the next pair; a trailing
/// singleton is padded with `X`.
pub fn prepare(text: &str) -> Vec<Digraph> {
    let letters: Vec<u8> = text
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| merge_j(c.to_ascii_uppercase() as u8))
        .collect();

    let mut digraphs = Vec::with_capacity(letters.len() / 2 + 1);
    let mut i = 0;
    while i < letters.len() {
        let a = letters[i];
        let b = letters.get(i + 1).copied().unwrap_or(FILLER);
        if a == b {
            digraphs.push((a, FILLER));
            i += 1;
        } else {
            digraphs.push((a, b));
            i += 2;
        }
    }
    digraphs
}

/// Transforms digraphs through the matrix; `mode` is +1 to encrypt and
/// -1 to decrypt.
///
/// Same row: take the letter `mode` columns over, wrapping. Same column:
/// the letter `mode` rows down, wrapping. Otherwise each letter takes the
/// other's column and keeps its own row — the rectangle rule is its own
/// inverse, so `mode` plays no part in it.
fn transform(digraphs: &[Digraph], matrix: &Matrix, mode: i32) -> String {
    let mut out = String::with_capacity(digraphs.len() * 2);

    for &(a, b) in digraphs {
        let (row_a, col_a) = matrix.position(a);
        let (row_b, col_b) = matrix.position(b);

        let (x, y) = if row_a == row_b {
            (
                matrix.at(row_a, step(col_a, mode)),
                matrix.at(row_b, step(col_b, mode)),
            )
        } else if col_a == col_b {
            (
                matrix.at(step(row_a, mode), col_a),
                matrix.at(step(row_b, mode), col_b),
            )
        } else {
            (matrix.at(row_a, col_b), matrix.at(row_b, col_a))
        };

        out.push(x as char);
        out.push(y as char);
    }
    out
}

/// Moves an index by `mode` positions, wrapping mod 5.
fn step(index: usize, mode: i32) -> usize {
    (index as i32 + mode).rem_euclid(5) as usize
}

/// Encrypts text with the matrix derived from the keyword.
///
/// Non-letters are stripped, not preserved — Playfair output is always a
/// run of uppercase letters of even length.
pub fn encrypt(text: &str, keyword: &str) -> String {
    let matrix = Matrix::build(keyword);
    transform(&prepare(text), &matrix, 1)
}

/// Decrypts text with the matrix derived from the keyword.
///
/// The output is the canonical digraph form of the plaintext: uppercase,
/// J as I, with any filler `X` letters still in place.
pub fn decrypt(text: &str, keyword: &str) -> String {
    let matrix = Matrix::build(keyword);
    transform(&prepare(text), &matrix, -1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_from_textbook_keyword() {
        let matrix = Matrix::build("PLAYFAIREXAMPLE");
        assert_eq!(&matrix.row(0), b"PLAYF");
        assert_eq!(&matrix.row(1), b"IREXM");
        assert_eq!(&matrix.row(2), b"BCDGH");
        assert_eq!(&matrix.row(3), b"KNOQS");
        assert_eq!(&matrix.row(4), b"TUVWZ");
    }

    #[test]
    fn test_matrix_without_keyword_is_plain_alphabet() {
        let matrix = Matrix::build("");
        assert_eq!(&matrix.row(0), b"ABCDE");
        assert_eq!(&matrix.row(4), b"VWXYZ");
        // Symbols-only keyword degenerates the same way
        assert_eq!(Matrix::build("123 !?"), matrix);
    }

    #[test]
    fn test_matrix_merges_j_into_i() {
        let matrix = Matrix::build("JUICE");
        // J becomes I, so the first row starts I U C E ...
        assert_eq!(matrix.row(0)[0], b'I');
        assert!(matrix.grid.iter().flatten().all(|&b| b != b'J'));
    }

    #[test]
    fn test_prepare_pairs_plain_text() {
        assert_eq!(prepare("HIDE"), vec![(b'H', b'I'), (b'D', b'E')]);
    }

    #[test]
    fn test_prepare_splits_double_letters() {
        // HELLO: LL splits on the filler, second L starts the next pair
        assert_eq!(
            prepare("HELLO"),
            vec![(b'H', b'E'), (b'L', b'X'), (b'L', b'O')]
        );
    }

    #[test]
    fn test_prepare_pads_odd_length() {
        assert_eq!(prepare("CAT"), vec![(b'C', b'A'), (b'T', b'X')]);
    }

    #[test]
    fn test_prepare_strips_non_letters_and_merges_j() {
        assert_eq!(
            prepare("jam 2 jars!"),
            vec![(b'I', b'A'), (b'M', b'I'), (b'A', b'R'), (b'S', b'X')]
        );
    }

    #[test]
    fn test_encrypt_textbook_vector() {
        // Classic MONARCHY example; the odd trailing S pairs with the
        // filler X, hence the final XA digraph
        assert_eq!(encrypt("INSTRUMENTS", "MONARCHY"), "GATLMZCLRQXA");
    }

    #[test]
    fn test_decrypt_textbook_vector() {
        assert_eq!(decrypt("GATLMZCLRQXA", "MONARCHY"), "INSTRUMENTSX");
    }

    #[test]
    fn test_roundtrip_keeps_filler() {
        let cipher = encrypt("HELLO", "KEYWORD");
        assert_eq!(decrypt(&cipher, "KEYWORD"), "HELXLO");
    }

    #[test]
    fn test_same_row_rule_wraps() {
        // Row 0 of the empty-keyword matrix is ABCDE; A and B sit in the
        // same row so each steps right, E wraps back to A
        assert_eq!(encrypt("AB", ""), "BC");
        assert_eq!(encrypt("DE", ""), "EA");
    }

    #[test]
    fn test_same_column_rule_wraps() {
        // Column 0 of the empty-keyword matrix is A F L Q V
        assert_eq!(encrypt("AF", ""), "FL");
        assert_eq!(encrypt("QV", ""), "VA");
    }

    #[test]
    fn test_rectangle_rule_is_reciprocal() {
        // B (0,1) and F (1,0) form a rectangle: swap columns
        assert_eq!(encrypt("BF", ""), "AG");
        assert_eq!(decrypt("AG", ""), "BF");
    }

    #[test]
    fn test_strips_everything_outside_letters() {
        let with_noise = encrypt("IN-STRU MENTS! 🔒", "PLAYFAIREXAMPLE");
        let clean = encrypt("INSTRUMENTS", "PLAYFAIREXAMPLE");
        assert_eq!(with_noise, clean);
    }
}
