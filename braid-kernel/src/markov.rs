use crate::error::{BraidError, MoveKind, Result};
use crate::word::{sign_of_non_zero, BraidWord};

/// Checks whether [`conjugation`] accepts `value` and `index`.
///
/// Any non-zero `value` may be inserted at any index up to one past the end
/// (`len + 1`, the wrap-around position). No strand-range restriction is
/// placed on `value`: conjugating by a generator the word has not used yet
/// is a well-defined word with a larger strand count.
pub fn is_conjugation_performable(word: &BraidWord, value: i32, index: usize) -> bool {
    value != 0 && index <= word.len() + 1
}

/// Inserts the cancelling pair `value, -value`, conjugating the closure of
/// the word by that generator. The result is two crossings longer.
///
/// For `index <= len` the pair lands at positions `index` and `index + 1`,
/// with the original elements from `index` onward shifted right by two. The
/// special index `len + 1` wraps the pair around the word instead:
/// `-value` is prepended and `value` appended.
pub fn conjugation(word: &BraidWord, value: i32, index: usize) -> Result<BraidWord> {
    if !is_conjugation_performable(word, value, index) {
        return Err(BraidError::IllegalTransformation {
            kind: MoveKind::Conjugation,
            index,
        });
    }
    let sigmas = word.as_slice();
    let n = sigmas.len();
    let mut out = Vec::with_capacity(n + 2);
    if index == n + 1 {
        out.push(-value);
        out.extend_from_slice(sigmas);
        out.push(value);
    } else {
        out.extend_from_slice(&sigmas[..index]);
        out.push(value);
        out.push(-value);
        out.extend_from_slice(&sigmas[index..]);
    }
    Ok(BraidWord::from_vec_unchecked(out))
}

/// Adds one trivial strand, inserting a single new crossing before `index`.
/// The result is one crossing longer.
///
/// With `on_top` the strand is added above the braid: every existing
/// element moves one generator up (its magnitude grows by one, keeping its
/// sign) and the new crossing is `±1`. Otherwise the strand is added at the
/// bottom: existing elements are untouched and the new crossing is
/// `±strand_count`, where `strand_count` is the word's current strand count
/// as asserted by the caller. `inverse` selects the negative crossing.
pub fn stabilization(
    word: &BraidWord,
    index: usize,
    on_top: bool,
    inverse: bool,
    strand_count: i32,
) -> Result<BraidWord> {
    if index > word.len() {
        return Err(BraidError::IllegalTransformation {
            kind: MoveKind::Stabilization,
            index,
        });
    }
    let sigmas = word.as_slice();
    let orientation = if inverse { -1 } else { 1 };
    let (mut out, new_sigma) = if on_top {
        let renumbered: Vec<i32> = sigmas.iter().map(|&s| s + sign_of_non_zero(s)).collect();
        (renumbered, orientation)
    } else {
        (sigmas.to_vec(), orientation * strand_count)
    };
    out.insert(index, new_sigma);
    Ok(BraidWord::from_vec_unchecked(out))
}

/// Checks whether [`destabilization`] applies at `index`.
///
/// True when the crossing at `index` is the only one touching the bottom
/// strand pair (magnitude `strand_count - 1`) or the only one touching the
/// top strand pair (magnitude `1`). `strand_count` is the word's current
/// strand count as asserted by the caller.
pub fn is_destabilization_performable(word: &BraidWord, index: usize, strand_count: i32) -> bool {
    let sigmas = word.as_slice();
    if index >= sigmas.len() {
        return false;
    }
    unique_magnitude_at(sigmas, strand_count - 1, index) || unique_magnitude_at(sigmas, 1, index)
}

/// True when `magnitude` occurs at `index` and nowhere else.
fn unique_magnitude_at(sigmas: &[i32], magnitude: i32, index: usize) -> bool {
    let mut at_index = false;
    for (i, &s) in sigmas.iter().enumerate() {
        if s.abs() == magnitude {
            if i == index {
                at_index = true;
            } else {
                return false;
            }
        }
    }
    at_index
}

/// Removes the crossing at `index`, undoing a stabilization. The result is
/// one crossing shorter.
///
/// When the removed crossing touched the top strand pair (magnitude `1`),
/// every remaining element moves one generator down (its magnitude shrinks
/// by one, keeping its sign); removing a bottom crossing leaves the rest
/// unchanged.
pub fn destabilization(word: &BraidWord, index: usize, strand_count: i32) -> Result<BraidWord> {
    if !is_destabilization_performable(word, index, strand_count) {
        return Err(BraidError::IllegalTransformation {
            kind: MoveKind::Destabilization,
            index,
        });
    }
    let sigmas = word.as_slice();
    let on_top = sigmas[index].abs() == 1;
    let mut out = Vec::with_capacity(sigmas.len() - 1);
    for (i, &s) in sigmas.iter().enumerate() {
        if i == index {
            continue;
        }
        out.push(if on_top { s - sign_of_non_zero(s) } else { s });
    }
    Ok(BraidWord::from_vec_unchecked(out))
}

/// Checks whether the crossings at `index` and `index + 1` (modulo the
/// length) are a generator and its inverse.
pub fn is_remove_sigma_inverse_pair_performable(word: &BraidWord, index: usize) -> bool {
    let sigmas = word.as_slice();
    let n = sigmas.len();
    n != 0 && index < n && sigmas[(index + 1) % n] == -sigmas[index]
}

/// Removes an adjacent generator/inverse pair. The result is two crossings
/// shorter; the pair may wrap from the last position to the first.
///
/// # Example
/// ```
/// use braid_kernel::{remove_sigma_inverse_pair, BraidWord};
///
/// let word = BraidWord::new(vec![2, 1, -1, 3]).unwrap();
/// let reduced = remove_sigma_inverse_pair(&word, 1).unwrap();
/// assert_eq!(reduced.as_slice(), &[2, 3]);
/// ```
pub fn remove_sigma_inverse_pair(word: &BraidWord, index: usize) -> Result<BraidWord> {
    if !is_remove_sigma_inverse_pair_performable(word, index) {
        return Err(BraidError::IllegalTransformation {
            kind: MoveKind::RemoveSigmaInversePair,
            index,
        });
    }
    let sigmas = word.as_slice();
    let partner = (index + 1) % sigmas.len();
    let out = sigmas
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != index && i != partner)
        .map(|(_, &s)| s)
        .collect();
    Ok(BraidWord::from_vec_unchecked(out))
}

/// Evaluates [`is_remove_sigma_inverse_pair_performable`] at every position.
pub fn remove_sigma_inverse_pair_performable_indices(word: &BraidWord) -> Vec<bool> {
    (0..word.len())
        .map(|index| is_remove_sigma_inverse_pair_performable(word, index))
        .collect()
}
