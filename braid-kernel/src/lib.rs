//! Braid move engine: braid-relation rewrites and Markov moves over words
//! of signed generator indices. Every operation takes an immutable word and
//! produces a freshly allocated result or a typed failure.

pub mod error;
pub mod markov;
pub mod moves;
pub mod relations;
pub mod shifts;
pub mod word;

pub use error::{BraidError, MoveKind, Result};
pub use markov::{
    conjugation, destabilization, is_conjugation_performable, is_destabilization_performable,
    is_remove_sigma_inverse_pair_performable, remove_sigma_inverse_pair,
    remove_sigma_inverse_pair_performable_indices, stabilization,
};
pub use moves::{performable_moves, BraidMove};
pub use relations::{
    braid_relation1, braid_relation1_performable_indices, braid_relation2,
    braid_relation2_performable_indices, is_braid_relation1_performable,
    is_braid_relation2_performable,
};
pub use shifts::{shift_left, shift_right};
pub use word::BraidWord;
