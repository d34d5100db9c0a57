use std::fmt;

use thiserror::Error;

/// Result type alias using BraidError.
pub type Result<T> = std::result::Result<T, BraidError>;

/// Identifies the move whose precondition failed.
///
/// Carried in [`BraidError::IllegalTransformation`] so callers can branch on
/// the operation without parsing the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    BraidRelation1,
    BraidRelation2,
    Conjugation,
    Stabilization,
    Destabilization,
    RemoveSigmaInversePair,
}

impl MoveKind {
    /// Stable snake_case operation name, used in diagnostics and by the CLI
    /// move-spec grammar.
    pub fn name(self) -> &'static str {
        match self {
            MoveKind::BraidRelation1 => "braid_relation1",
            MoveKind::BraidRelation2 => "braid_relation2",
            MoveKind::Conjugation => "conjugation",
            MoveKind::Stabilization => "stabilization",
            MoveKind::Destabilization => "destabilization",
            MoveKind::RemoveSigmaInversePair => "remove_sigma_inverse_pair",
        }
    }
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors produced by the kernel.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BraidError {
    /// The move's precondition does not hold at the supplied index.
    #[error("{kind} is not performable at index {index}")]
    IllegalTransformation { kind: MoveKind, index: usize },

    /// Braid words must not contain zero: zero names no generator and has no
    /// crossing orientation.
    #[error("invalid braid word: element at position {position} is zero")]
    ZeroGenerator { position: usize },
}
