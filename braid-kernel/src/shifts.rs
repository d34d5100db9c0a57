use crate::word::BraidWord;

/// Cyclically shifts the crossings of the word left.
///
/// `result[i] = word[(i + amount) % len]`, so numbering the original
/// crossings `[0, 1, ..., n - 1]` produces
/// `[amount, amount + 1, ..., n - 1, 0, 1, ..., amount - 1]`.
/// The amount is taken modulo the length; the empty word shifts to itself.
///
/// # Example
/// ```
/// use braid_kernel::{shift_left, BraidWord};
///
/// let word = BraidWord::new(vec![1, 2, 3, 4, 5]).unwrap();
/// assert_eq!(shift_left(&word, 2).as_slice(), &[3, 4, 5, 1, 2]);
/// ```
pub fn shift_left(word: &BraidWord, amount: usize) -> BraidWord {
    let n = word.len();
    if n == 0 {
        return BraidWord::empty();
    }
    let sigmas = word.as_slice();
    BraidWord::from_vec_unchecked((0..n).map(|i| sigmas[(i + amount) % n]).collect())
}

/// Cyclically shifts the crossings of the word right.
///
/// Inverse of [`shift_left`] for equal amounts.
pub fn shift_right(word: &BraidWord, amount: usize) -> BraidWord {
    let n = word.len();
    if n == 0 {
        return BraidWord::empty();
    }
    let sigmas = word.as_slice();
    let back = n - amount % n;
    BraidWord::from_vec_unchecked((0..n).map(|i| sigmas[(i + back) % n]).collect())
}
