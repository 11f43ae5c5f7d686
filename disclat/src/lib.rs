//! Discriminant groups of integral lattices.
//!
//! An integral lattice is given by its intersection form, a square integer
//! matrix. The quotient of the dual lattice by the lattice itself is a
//! finite abelian group of order `|det|`; this crate enumerates that group
//! by exhaustive search and extracts a small generating set, reported as
//! rational coset vectors together with their additive orders.
//!
//! ```
//! use disclat::lattice::IntegralLattice;
//! use disclat::matrix::SquareMatrix;
//!
//! let lattice = IntegralLattice::new(SquareMatrix::from_array([
//!     [2, 0],
//!     [0, 4],
//! ]))?;
//! assert_eq!(lattice.discriminant(), 8);
//!
//! let group = lattice.dual_group();
//! let generators = group.generators()?;
//! assert_eq!(generators.orders(), &[4, 2]);
//! print!("{generators}"); // [0 1/4] of order 4
//!                         // [1/2 0] of order 2
//! # Ok::<(), disclat::error::Error>(())
//! ```
//!
//! Everything here is brute force on purpose: the enumeration visits
//! `disc^rank` vectors and the span tests walk every coefficient tuple, so
//! the crate is only usable for small discriminants and ranks, which is the
//! regime the construction is meant for. The payoff is that every scan
//! order and tie-break is completely predictable.

pub mod error;
pub mod group;
pub mod lattice;
pub mod matrix;
pub mod rational;
pub mod solver;
