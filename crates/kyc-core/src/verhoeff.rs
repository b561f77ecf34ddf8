//! # Verhoeff Checksum
//!
//! Dihedral-group D5 check digit scheme used by Aadhaar numbers. Detects
//! every single-digit substitution and every adjacent transposition.
//! It is a typo check, not an authenticity check.
//!
//! The tables are the standard ones: `D` is the D5 multiplication table,
//! `P` the position-dependent permutation (row `i mod 8`), and `INV` the
//! multiplicative inverse used to compute a check digit.

/// D5 multiplication table.
const D: [[u8; 10]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 2, 3, 4, 0, 6, 7, 8, 9, 5],
    [2, 3, 4, 0, 1, 7, 8, 9, 5, 6],
    [3, 4, 0, 1, 2, 8, 9, 5, 6, 7],
    [4, 0, 1, 2, 3, 9, 5, 6, 7, 8],
    [5, 9, 8, 7, 6, 0, 4, 3, 2, 1],
    [6, 5, 9, 8, 7, 1, 0, 4, 3, 2],
    [7, 6, 5, 9, 8, 2, 1, 0, 4, 3],
    [8, 7, 6, 5, 9, 3, 2, 1, 0, 4],
    [9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
];

/// Position permutation table.
const P: [[u8; 10]; 8] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 5, 7, 6, 2, 8, 3, 0, 9, 4],
    [5, 8, 0, 3, 7, 9, 6, 1, 4, 2],
    [8, 9, 1, 6, 0, 4, 3, 5, 2, 7],
    [9, 4, 5, 3, 1, 2, 6, 8, 7, 0],
    [4, 2, 8, 6, 5, 7, 3, 9, 0, 1],
    [2, 7, 9, 3, 8, 0, 6, 4, 1, 5],
    [7, 0, 4, 6, 9, 1, 3, 2, 5, 8],
];

/// Inverse table.
const INV: [u8; 10] = [0, 4, 3, 2, 1, 5, 6, 7, 8, 9];

/// Map an ASCII string to its digit values, or `None` if any byte is not
/// `0`-`9`. Empty input is `None`.
fn digits(s: &str) -> Option<Vec<u8>> {
    if s.is_empty() {
        return None;
    }
    s.bytes()
        .map(|b| b.is_ascii_digit().then(|| b - b'0'))
        .collect()
}

/// Run the Verhoeff accumulator over `digits` (most significant first),
/// starting the position counter at `offset`.
fn accumulate(digits: &[u8], offset: usize) -> u8 {
    digits
        .iter()
        .rev()
        .enumerate()
        .fold(0u8, |c, (i, &v)| {
            D[c as usize][P[(i + offset) % 8][v as usize] as usize]
        })
}

/// Whether `s` (ASCII digits, check digit last) carries a valid Verhoeff
/// check digit.
///
/// Returns `false` for empty input or any non-digit character; callers that
/// accept separators must strip them first.
pub fn is_valid(s: &str) -> bool {
    match digits(s) {
        Some(d) => accumulate(&d, 0) == 0,
        None => false,
    }
}

/// Compute the check digit that makes `payload ++ digit` valid.
///
/// Returns `None` if `payload` is empty or contains a non-digit.
pub fn check_digit(payload: &str) -> Option<u8> {
    let d = digits(payload)?;
    Some(INV[accumulate(&d, 1) as usize])
}
