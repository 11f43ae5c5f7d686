//! Error types.

use num_bigint::BigInt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while building a lattice or extracting
/// generators of its discriminant group.
///
/// The first four variants are input problems and are reported by the
/// lattice constructors. [`Error::NoProgress`] is reported by the generator
/// search when a round fails to shrink the remaining coset list; it carries
/// the partial generator list for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The intersection form has no entries.
    #[error("the intersection form is empty")]
    EmptyForm,
    /// The input rows do not form a square matrix.
    #[error("the intersection form is not square: {rows} rows, {cols} columns")]
    NonSquareForm { rows: usize, cols: usize },
    /// The determinant of the form is zero, so there is no modulus to
    /// enumerate residues in.
    #[error("the intersection form is degenerate: its determinant is zero")]
    ZeroDiscriminant,
    /// The determinant does not fit the enumeration scalar. The exhaustive
    /// search is infeasible long before this bound, so treat it as an input
    /// problem rather than a limitation to work around.
    #[error("the discriminant {0} is outside the enumerable range")]
    DiscriminantOverflow(BigInt),
    /// The generator search stopped shrinking the remaining coset list.
    #[error("no progress after {} generators, {remaining} cosets remain", .generators.len())]
    NoProgress {
        /// The generators found before the search stalled.
        generators: Vec<Vec<i64>>,
        /// The size of the remaining list when the search stalled.
        remaining: usize,
    },
}
