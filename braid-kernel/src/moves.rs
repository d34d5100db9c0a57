use std::fmt;

use crate::error::Result;
use crate::markov::{
    conjugation, destabilization, is_conjugation_performable, is_destabilization_performable,
    remove_sigma_inverse_pair, remove_sigma_inverse_pair_performable_indices, stabilization,
};
use crate::relations::{
    braid_relation1, braid_relation1_performable_indices, braid_relation2,
    braid_relation2_performable_indices,
};
use crate::shifts::{shift_left, shift_right};
use crate::word::BraidWord;

/// A single move, described as data.
///
/// `Stabilization` and `Destabilization` do not carry a strand count:
/// [`BraidMove::apply`] derives it from the word itself, which is what a
/// caller working with whole words wants. The underlying kernel functions
/// keep the explicit parameter for callers that track the count themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BraidMove {
    ShiftLeft {
        amount: usize,
    },
    ShiftRight {
        amount: usize,
    },
    BraidRelation1 {
        index: usize,
    },
    BraidRelation2 {
        index: usize,
    },
    Conjugation {
        value: i32,
        index: usize,
    },
    Stabilization {
        index: usize,
        on_top: bool,
        inverse: bool,
    },
    Destabilization {
        index: usize,
    },
    RemoveSigmaInversePair {
        index: usize,
    },
}

impl BraidMove {
    /// Applies the move to `word`, producing a fresh word.
    pub fn apply(&self, word: &BraidWord) -> Result<BraidWord> {
        match *self {
            BraidMove::ShiftLeft { amount } => Ok(shift_left(word, amount)),
            BraidMove::ShiftRight { amount } => Ok(shift_right(word, amount)),
            BraidMove::BraidRelation1 { index } => braid_relation1(word, index),
            BraidMove::BraidRelation2 { index } => braid_relation2(word, index),
            BraidMove::Conjugation { value, index } => conjugation(word, value, index),
            BraidMove::Stabilization {
                index,
                on_top,
                inverse,
            } => stabilization(word, index, on_top, inverse, word.strand_count()),
            BraidMove::Destabilization { index } => {
                destabilization(word, index, word.strand_count())
            }
            BraidMove::RemoveSigmaInversePair { index } => remove_sigma_inverse_pair(word, index),
        }
    }
}

impl fmt::Display for BraidMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            BraidMove::ShiftLeft { amount } => write!(f, "shift_left(amount={})", amount),
            BraidMove::ShiftRight { amount } => write!(f, "shift_right(amount={})", amount),
            BraidMove::BraidRelation1 { index } => write!(f, "braid_relation1(index={})", index),
            BraidMove::BraidRelation2 { index } => write!(f, "braid_relation2(index={})", index),
            BraidMove::Conjugation { value, index } => {
                write!(f, "conjugation(value={}, index={})", value, index)
            }
            BraidMove::Stabilization {
                index,
                on_top,
                inverse,
            } => write!(
                f,
                "stabilization(index={}, on_top={}, inverse={})",
                index, on_top, inverse
            ),
            BraidMove::Destabilization { index } => write!(f, "destabilization(index={})", index),
            BraidMove::RemoveSigmaInversePair { index } => {
                write!(f, "remove_sigma_inverse_pair(index={})", index)
            }
        }
    }
}

/// Enumerates every move performable on `word` in a single step.
///
/// Shifts are not part of the enumeration. The enumeration order is
/// destabilizations, stabilizations (all four variants
/// per insertion point), conjugations over every generator of the current
/// strand count and every insertion index, then relation 1, relation 2 and
/// free cancellations at their performable indices.
pub fn performable_moves(word: &BraidWord) -> Vec<BraidMove> {
    let n = word.len();
    let strands = word.strand_count();
    let mut moves = Vec::new();

    for index in 0..n {
        if is_destabilization_performable(word, index, strands) {
            moves.push(BraidMove::Destabilization { index });
        }
    }

    for index in 0..=n {
        for (on_top, inverse) in [(false, false), (false, true), (true, false), (true, true)] {
            moves.push(BraidMove::Stabilization {
                index,
                on_top,
                inverse,
            });
        }
    }

    for value in (1 - strands)..strands {
        if value == 0 {
            continue;
        }
        for index in 0..=(n + 1) {
            if is_conjugation_performable(word, value, index) {
                moves.push(BraidMove::Conjugation { value, index });
            }
        }
    }

    let relation1 = braid_relation1_performable_indices(word);
    moves.extend(
        relation1
            .iter()
            .enumerate()
            .filter(|(_, &ok)| ok)
            .map(|(index, _)| BraidMove::BraidRelation1 { index }),
    );

    let relation2 = braid_relation2_performable_indices(word);
    moves.extend(
        relation2
            .iter()
            .enumerate()
            .filter(|(_, &ok)| ok)
            .map(|(index, _)| BraidMove::BraidRelation2 { index }),
    );

    let pairs = remove_sigma_inverse_pair_performable_indices(word);
    moves.extend(
        pairs
            .iter()
            .enumerate()
            .filter(|(_, &ok)| ok)
            .map(|(index, _)| BraidMove::RemoveSigmaInversePair { index }),
    );

    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(sigmas: &[i32]) -> BraidWord {
        BraidWord::new(sigmas.to_vec()).unwrap()
    }

    /// Every candidate move, performable or not.
    fn all_candidate_moves(word: &BraidWord) -> Vec<BraidMove> {
        let n = word.len();
        let strands = word.strand_count();
        let mut moves = Vec::new();
        for index in 0..n {
            moves.push(BraidMove::Destabilization { index });
        }
        for index in 0..=n {
            for (on_top, inverse) in [(false, false), (false, true), (true, false), (true, true)] {
                moves.push(BraidMove::Stabilization {
                    index,
                    on_top,
                    inverse,
                });
            }
        }
        for value in (1 - strands)..strands {
            if value == 0 {
                continue;
            }
            for index in 0..=(n + 1) {
                moves.push(BraidMove::Conjugation { value, index });
            }
        }
        for index in 0..n {
            moves.push(BraidMove::BraidRelation1 { index });
            moves.push(BraidMove::BraidRelation2 { index });
            moves.push(BraidMove::RemoveSigmaInversePair { index });
        }
        moves
    }

    #[test]
    fn test_performable_moves_all_apply() {
        for sigmas in [&[1, 2, 3, 4, 5][..], &[-2, 4, 8, -5, 3, 1, 2][..]] {
            let w = word(sigmas);
            for mv in performable_moves(&w) {
                assert!(mv.apply(&w).is_ok(), "{} failed on {:?}", mv, sigmas);
            }
        }
    }

    #[test]
    fn test_performable_moves_match_brute_force() {
        for sigmas in [&[1, 2, 3, 4, 5][..], &[-2, 4, 8, -5, 3, 1, 2][..]] {
            let w = word(sigmas);
            let listed: Vec<BraidWord> = performable_moves(&w)
                .iter()
                .map(|mv| mv.apply(&w).unwrap())
                .collect();
            let reachable: Vec<BraidWord> = all_candidate_moves(&w)
                .iter()
                .filter_map(|mv| mv.apply(&w).ok())
                .collect();
            for state in &listed {
                assert!(reachable.contains(state));
            }
            for state in &reachable {
                assert!(listed.contains(state));
            }
        }
    }

    #[test]
    fn test_performable_moves_counts() {
        // Trefoil: no relation moves, no cancellations, no destabilizations.
        // 4 stabilizations per insertion point and conjugations by ±1.
        let trefoil = word(&[1, 1, 1]);
        let moves = performable_moves(&trefoil);
        assert_eq!(moves.len(), 4 * 4 + 2 * 5);

        // Figure-eight: the alternating word admits no relation-1 window.
        let figure_eight = word(&[1, -2, 1, -2]);
        let moves = performable_moves(&figure_eight);
        assert_eq!(moves.len(), 4 * 5 + 4 * 6);
        assert!(moves
            .iter()
            .all(|mv| !matches!(mv, BraidMove::BraidRelation1 { .. })));
    }

    #[test]
    fn test_performable_moves_empty_word() {
        let moves = performable_moves(&BraidWord::empty());
        // Only the four stabilizations at index 0: one strand means no
        // conjugation values.
        assert_eq!(moves.len(), 4);
        assert!(moves
            .iter()
            .all(|mv| matches!(mv, BraidMove::Stabilization { .. })));
    }

    #[test]
    fn test_display_names() {
        assert_eq!(
            BraidMove::Conjugation { value: -3, index: 2 }.to_string(),
            "conjugation(value=-3, index=2)"
        );
        assert_eq!(
            BraidMove::Stabilization {
                index: 1,
                on_top: true,
                inverse: false
            }
            .to_string(),
            "stabilization(index=1, on_top=true, inverse=false)"
        );
        assert_eq!(
            BraidMove::ShiftLeft { amount: 2 }.to_string(),
            "shift_left(amount=2)"
        );
    }
}
