use crate::error::{BraidError, Result};

/// Returns `+1` for positive values and `-1` for negative ones.
///
/// Zero has no sign. Words reject zero elements at construction, so inside
/// the kernel this is only ever called on non-zero values; the debug
/// assertion documents that contract.
pub(crate) fn sign_of_non_zero(x: i32) -> i32 {
    debug_assert!(x != 0, "braid generators are never zero");
    if x > 0 {
        1
    } else {
        -1
    }
}

/// A braid word: an ordered, finite sequence of non-zero signed generator
/// indices.
///
/// The element at position `i` encodes a crossing between two adjacent
/// strands: its magnitude names the generator (which strand pair crosses)
/// and its sign the crossing orientation. Position 0 is the topmost
/// crossing in emission order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct BraidWord {
    sigmas: Vec<i32>,
}

impl BraidWord {
    /// Creates a braid word, rejecting zero elements.
    pub fn new(sigmas: Vec<i32>) -> Result<Self> {
        if let Some(position) = sigmas.iter().position(|&s| s == 0) {
            return Err(BraidError::ZeroGenerator { position });
        }
        Ok(BraidWord { sigmas })
    }

    /// The empty word (the trivial braid on one strand).
    pub fn empty() -> Self {
        BraidWord { sigmas: Vec::new() }
    }

    /// Wraps a vector already known to contain no zeros.
    ///
    /// The move implementations only ever produce valid words, so they skip
    /// the re-validation scan.
    pub(crate) fn from_vec_unchecked(sigmas: Vec<i32>) -> Self {
        debug_assert!(sigmas.iter().all(|&s| s != 0));
        BraidWord { sigmas }
    }

    /// Returns the number of crossings in the word.
    pub fn len(&self) -> usize {
        self.sigmas.len()
    }

    /// Returns true if the word has no crossings.
    pub fn is_empty(&self) -> bool {
        self.sigmas.is_empty()
    }

    /// Borrows the underlying sigmas.
    pub fn as_slice(&self) -> &[i32] {
        &self.sigmas
    }

    /// Copies the sigmas into a fresh vector.
    pub fn to_vec(&self) -> Vec<i32> {
        self.sigmas.clone()
    }

    /// Returns an iterator over the sigmas.
    pub fn iter(&self) -> impl Iterator<Item = &i32> {
        self.sigmas.iter()
    }

    /// Number of strands the word is drawn on: one more than the largest
    /// generator magnitude, and 1 for the empty word.
    pub fn strand_count(&self) -> i32 {
        self.sigmas.iter().map(|s| s.abs()).max().unwrap_or(0) + 1
    }
}

impl TryFrom<Vec<i32>> for BraidWord {
    type Error = BraidError;

    fn try_from(sigmas: Vec<i32>) -> Result<Self> {
        BraidWord::new(sigmas)
    }
}

impl TryFrom<&[i32]> for BraidWord {
    type Error = BraidError;

    fn try_from(sigmas: &[i32]) -> Result<Self> {
        BraidWord::new(sigmas.to_vec())
    }
}
