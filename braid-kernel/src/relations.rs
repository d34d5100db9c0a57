use crate::error::{BraidError, MoveKind, Result};
use crate::word::{sign_of_non_zero, BraidWord};

/// Checks whether the first braid relation applies at `index`.
///
/// The window is the three cyclically adjacent crossings starting at
/// `index` (indices taken modulo the length): call them `a, b, c`. The
/// relation applies when `|a| = |c|`, the middle generator is a neighbour
/// (`||b| - |a|| = 1`), and the sign of `b` agrees with the sign of `a` or
/// with the sign of `c`. The fully alternating window, where `b` disagrees
/// with both ends, is not a relation instance. Words shorter than three
/// crossings have no window.
pub fn is_braid_relation1_performable(word: &BraidWord, index: usize) -> bool {
    let n = word.len();
    if n < 3 {
        return false;
    }
    let sigmas = word.as_slice();
    let a = sigmas[index % n];
    let b = sigmas[(index + 1) % n];
    let c = sigmas[(index + 2) % n];
    a.abs() == c.abs()
        && (b.abs() - a.abs()).abs() == 1
        && !(sign_of_non_zero(b) != sign_of_non_zero(a)
            && sign_of_non_zero(b) != sign_of_non_zero(c))
}

/// Performs the first braid relation at `index`.
///
/// Rewrites the window `a, b, c` so that the outer positions take the old
/// middle magnitude and the middle takes the old outer magnitude, with the
/// original signs re-applied in reverse window order. All other positions
/// are copied unchanged.
///
/// # Example
/// ```
/// use braid_kernel::{braid_relation1, BraidWord};
///
/// let word = BraidWord::new(vec![1, 2, 1]).unwrap();
/// assert_eq!(braid_relation1(&word, 0).unwrap().as_slice(), &[2, 1, 2]);
/// ```
pub fn braid_relation1(word: &BraidWord, index: usize) -> Result<BraidWord> {
    if !is_braid_relation1_performable(word, index) {
        return Err(BraidError::IllegalTransformation {
            kind: MoveKind::BraidRelation1,
            index,
        });
    }
    let n = word.len();
    let sigmas = word.as_slice();
    let signs = [
        sign_of_non_zero(sigmas[index % n]),
        sign_of_non_zero(sigmas[(index + 1) % n]),
        sign_of_non_zero(sigmas[(index + 2) % n]),
    ];
    let mut out = sigmas.to_vec();
    for i in 0..3 {
        // Outer positions draw their magnitude from the old middle, the
        // middle from the window start.
        let source = (index + usize::from(i != 1)) % n;
        out[(index + i) % n] = signs[2 - i] * sigmas[source].abs();
    }
    Ok(BraidWord::from_vec_unchecked(out))
}

/// Evaluates [`is_braid_relation1_performable`] at every position.
pub fn braid_relation1_performable_indices(word: &BraidWord) -> Vec<bool> {
    (0..word.len())
        .map(|index| is_braid_relation1_performable(word, index))
        .collect()
}

/// Checks whether the second braid relation applies at `index`.
///
/// The crossings at `index` and `index + 1` (modulo the length) commute
/// when their generator indices are at least two apart.
pub fn is_braid_relation2_performable(word: &BraidWord, index: usize) -> bool {
    let n = word.len();
    if n == 0 {
        return false;
    }
    let sigmas = word.as_slice();
    (sigmas[index % n].abs() - sigmas[(index + 1) % n].abs()).abs() >= 2
}

/// Performs the second braid relation at `index`, swapping the two
/// cyclically adjacent commuting crossings. Applying the move twice at the
/// same index restores the original word.
pub fn braid_relation2(word: &BraidWord, index: usize) -> Result<BraidWord> {
    if !is_braid_relation2_performable(word, index) {
        return Err(BraidError::IllegalTransformation {
            kind: MoveKind::BraidRelation2,
            index,
        });
    }
    let n = word.len();
    let mut out = word.as_slice().to_vec();
    out.swap(index % n, (index + 1) % n);
    Ok(BraidWord::from_vec_unchecked(out))
}

/// Evaluates [`is_braid_relation2_performable`] at every position.
pub fn braid_relation2_performable_indices(word: &BraidWord) -> Vec<bool> {
    (0..word.len())
        .map(|index| is_braid_relation2_performable(word, index))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(sigmas: &[i32]) -> BraidWord {
        BraidWord::new(sigmas.to_vec()).unwrap()
    }

    fn mask_indices(mask: &[bool]) -> Vec<usize> {
        mask.iter()
            .enumerate()
            .filter(|(_, &ok)| ok)
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_relation1_performable_short_words() {
        assert!(!is_braid_relation1_performable(&BraidWord::empty(), 0));
        assert!(!is_braid_relation1_performable(&word(&[1, 2]), 0));
        assert!(!is_braid_relation1_performable(&word(&[1, 2]), 5));
    }

    #[test]
    fn test_relation1_performable_basic() {
        assert!(is_braid_relation1_performable(&word(&[1, 2, 1]), 0));
        assert!(is_braid_relation1_performable(&word(&[9, 3, 4, 3, 3, 5]), 1));
        assert!(is_braid_relation1_performable(
            &word(&[1, -2, -1, 3, 3, 5]),
            0
        ));
    }

    #[test]
    fn test_relation1_performable_wraps_around_the_end() {
        let w = word(&[9, 3, 3, 5, 4, 3, 4]);
        assert!(is_braid_relation1_performable(&w, 4));
        assert!(is_braid_relation1_performable(&word(&[-5, -4, -5, 1, 2]), 0));
    }

    #[test]
    fn test_relation1_performable_false_cases() {
        assert!(!is_braid_relation1_performable(&word(&[9, 3, 3, 1, 1, 1]), 3));
        assert!(!is_braid_relation1_performable(&word(&[9, 3, 3, 5, 3, 1]), 0));
        // Middle sign disagreeing with both ends is not a relation instance.
        let alternating = word(&[9, 3, 3, -5, 4, -5, 1, 2]);
        assert!(!is_braid_relation1_performable(&alternating, 3));
    }

    #[test]
    fn test_relation1_performable_mixed_signs() {
        let w = word(&[2, 2, 1, -2, 1]);
        for i in 0..w.len() {
            assert_eq!(
                is_braid_relation1_performable(&w, i),
                i == 1 || i == 3,
                "index {}",
                i
            );
        }
    }

    #[test]
    fn test_relation1_all_same_sign() {
        let w = word(&[3, 2, 1, 2]);
        assert_eq!(braid_relation1(&w, 1).unwrap().as_slice(), &[3, 1, 2, 1]);
    }

    #[test]
    fn test_relation1_last_sign_different() {
        let w = word(&[3, 2, 1, -2]);
        assert_eq!(braid_relation1(&w, 1).unwrap().as_slice(), &[3, -1, 2, 1]);
    }

    #[test]
    fn test_relation1_circular_window() {
        let w = word(&[1, -2, 3, 2]);
        assert_eq!(braid_relation1(&w, 3).unwrap().as_slice(), &[2, 1, 3, -1]);
    }

    #[test]
    fn test_relation1_is_an_involution() {
        let w = word(&[3, 2, 1, -2]);
        let once = braid_relation1(&w, 1).unwrap();
        assert!(is_braid_relation1_performable(&once, 1));
        assert_eq!(braid_relation1(&once, 1).unwrap(), w);
    }

    #[test]
    fn test_relation1_not_performable_errors() {
        let err = braid_relation1(&word(&[1, 2]), 0).unwrap_err();
        assert_eq!(
            err,
            BraidError::IllegalTransformation {
                kind: MoveKind::BraidRelation1,
                index: 0,
            }
        );
        assert!(braid_relation1(&BraidWord::empty(), 0).is_err());
        assert!(braid_relation1(&word(&[1, 2]), 5).is_err());
    }

    #[test]
    fn test_relation1_mask() {
        assert!(braid_relation1_performable_indices(&BraidWord::empty()).is_empty());
        assert_eq!(
            mask_indices(&braid_relation1_performable_indices(&word(&[1, 2, 1]))),
            vec![0]
        );
        let w = word(&[-5, -4, -5, 1, 2, 1, -2, -1]);
        assert_eq!(
            mask_indices(&braid_relation1_performable_indices(&w)),
            vec![0, 3, 4, 5]
        );
        assert!(
            mask_indices(&braid_relation1_performable_indices(&word(&[9, 3, 3, 1, 1, 1])))
                .is_empty()
        );
    }

    #[test]
    fn test_relation2_performable() {
        let w = word(&[3, 1, 2, 1]);
        for i in 0..w.len() {
            assert_eq!(
                is_braid_relation2_performable(&w, i),
                i == 0 || i == 3,
                "index {}",
                i
            );
        }
        assert!(!is_braid_relation2_performable(&BraidWord::empty(), 0));
        assert!(!is_braid_relation2_performable(&word(&[10]), 0));
    }

    #[test]
    fn test_relation2_swap_and_involution() {
        let w = word(&[1, 3]);
        let swapped = braid_relation2(&w, 0).unwrap();
        assert_eq!(swapped.as_slice(), &[3, 1]);
        assert_eq!(braid_relation2(&swapped, 0).unwrap(), w);
    }

    #[test]
    fn test_relation2_loop_around() {
        let w = word(&[3, 2, 1]);
        assert_eq!(braid_relation2(&w, 2).unwrap().as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_relation2_not_performable_errors() {
        let err = braid_relation2(&word(&[1, 2]), 0).unwrap_err();
        assert_eq!(
            err,
            BraidError::IllegalTransformation {
                kind: MoveKind::BraidRelation2,
                index: 0,
            }
        );
    }

    #[test]
    fn test_relation2_mask() {
        assert_eq!(
            mask_indices(&braid_relation2_performable_indices(&word(&[1, 3, -3, 1]))),
            vec![0, 2]
        );
        assert_eq!(
            mask_indices(&braid_relation2_performable_indices(&word(&[
                1, 3, -1, -2, 4
            ]))),
            vec![0, 1, 3, 4]
        );
        assert!(braid_relation2_performable_indices(&BraidWord::empty()).is_empty());
    }
}
