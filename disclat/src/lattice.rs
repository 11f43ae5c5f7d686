//! Integral lattices, given by their intersection form.

use itertools::{Itertools as _, repeat_n};
use num_traits::{ToPrimitive, Zero};

use crate::error::{Error, Result};
use crate::group::DualGroup;
use crate::matrix::SquareMatrix;

/// An integral lattice, described by the Gram matrix of its bilinear form.
///
/// The invariant this crate is after is the discriminant group: the finite
/// abelian quotient of the dual lattice by the lattice itself, realized as
/// the residue vectors `v` with `v·form ≡ 0 (mod disc)`. [`Self::dual_group`]
/// enumerates it exhaustively.
///
/// The constructors only reject shapes that make the enumeration meaningless
/// (empty or non-square forms, zero discriminant). Symmetry and definiteness
/// are deliberately not enforced; query them with
/// [`SquareMatrix::is_symmetric`], [`SquareMatrix::is_positive_definite`] and
/// friends when they matter.
#[derive(Debug)]
pub struct IntegralLattice {
    form: SquareMatrix,
    disc: i64,
}

impl IntegralLattice {
    /// Creates a lattice from its intersection form.
    pub fn new(form: SquareMatrix) -> Result<Self> {
        if form.is_empty() {
            return Err(Error::EmptyForm);
        }
        let det = form.determinant();
        if det.is_zero() {
            return Err(Error::ZeroDiscriminant);
        }
        let disc = det.to_i64().ok_or(Error::DiscriminantOverflow(det))?;
        Ok(Self { form, disc })
    }

    /// Creates a lattice from a slice of matrix rows, checking the shape.
    pub fn from_rows<U: AsRef<[i64]>>(rows: &[U]) -> Result<Self> {
        let n = rows.len();
        if let Some(bad) = rows.iter().find(|r| r.as_ref().len() != n) {
            return Err(Error::NonSquareForm {
                rows: n,
                cols: bad.as_ref().len(),
            });
        }
        Self::new(SquareMatrix::from_rows(rows))
    }

    /// The rank of the lattice, i.e. the side length of the form.
    pub fn rank(&self) -> usize {
        self.form.size()
    }

    /// The discriminant: the exact determinant of the form. Doubles as the
    /// modulus of all residue arithmetic and as the order of the
    /// discriminant group.
    pub fn discriminant(&self) -> i64 {
        self.disc
    }

    /// The intersection form.
    pub fn form(&self) -> &SquareMatrix {
        &self.form
    }

    /// The value of the quadratic form at `v`, i.e. `v·form·v`.
    pub fn quadratic_product(&self, v: &[i64]) -> i64 {
        self.form
            .mul_row_vec(v)
            .iter()
            .zip(v)
            .map(|(a, b)| a * b)
            .sum()
    }

    /// Does the lattice contain a root, i.e. a vector whose quadratic
    /// product is exactly 2?
    ///
    /// Only positive definite forms are searched; anything else returns
    /// `false`. The search box is bounded by the largest diagonal entry in
    /// every coordinate.
    pub fn has_root(&self) -> bool {
        if !self.form.is_positive_definite() {
            return false;
        }
        let bound = (0..self.rank())
            .map(|i| self.form[(i, i)].abs())
            .max()
            .unwrap_or(0);
        repeat_n(-bound..=bound, self.rank())
            .multi_cartesian_product()
            .any(|v| self.quadratic_product(&v) == 2)
    }

    /// The prime factorization of `|disc|`, with multiplicity, smallest
    /// factor first. Empty for unimodular lattices.
    pub fn prime_factors(&self) -> Vec<i64> {
        let mut n = self.disc.abs();
        let mut factors = Vec::new();
        let mut p = 2;
        while p <= n {
            while n % p == 0 {
                factors.push(p);
                n /= p;
            }
            p += 1;
        }
        factors
    }

    /// Enumerates the discriminant group.
    ///
    /// This visits `disc^rank` candidate vectors and is the expensive step;
    /// keep the discriminant and the rank small.
    pub fn dual_group(&self) -> DualGroup {
        DualGroup::enumerate(self)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rejects_bad_forms() {
        assert_eq!(
            IntegralLattice::new(SquareMatrix::zero(0)).unwrap_err(),
            Error::EmptyForm
        );
        assert_eq!(
            IntegralLattice::from_rows(&[vec![1, 2], vec![3]]).unwrap_err(),
            Error::NonSquareForm { rows: 2, cols: 1 }
        );
        assert_eq!(
            IntegralLattice::new(SquareMatrix::from_array([[1, 1], [1, 1]]))
                .unwrap_err(),
            Error::ZeroDiscriminant
        );
    }

    #[test]
    fn discriminants() {
        let disc = |m| IntegralLattice::new(m).unwrap().discriminant();
        assert_eq!(disc(SquareMatrix::from_array([[2, 0], [0, 4]])), 8);
        assert_eq!(disc(SquareMatrix::from_array([[1]])), 1);
        // Indefinite forms have negative discriminants and are accepted.
        assert_eq!(disc(SquareMatrix::from_array([[0, 1], [1, 0]])), -1);
        assert_eq!(
            disc(SquareMatrix::from_array([[3, 1, 1], [1, 7, 8], [1, 8, 13]])),
            77
        );
    }

    #[test]
    fn quadratic_products() {
        let l = IntegralLattice::new(SquareMatrix::from_array([[2, -1], [-1, 2]]))
            .unwrap();
        assert_eq!(l.quadratic_product(&[1, 0]), 2);
        assert_eq!(l.quadratic_product(&[1, 1]), 2);
        assert_eq!(l.quadratic_product(&[1, -1]), 6);
    }

    #[test]
    fn root_search() {
        let lattice = |m| IntegralLattice::new(m).unwrap();
        assert!(lattice(SquareMatrix::from_array([[2]])).has_root());
        assert!(!lattice(SquareMatrix::from_array([[4]])).has_root());
        // Indefinite, so not searched at all.
        assert!(!lattice(SquareMatrix::from_array([[0, 1], [1, 0]])).has_root());
        // A2 has six roots.
        assert!(lattice(SquareMatrix::from_array([[2, -1], [-1, 2]])).has_root());
    }

    #[test]
    fn discriminant_prime_factors() {
        let factors = |m| IntegralLattice::new(m).unwrap().prime_factors();
        assert_eq!(factors(SquareMatrix::from_array([[2, 0], [0, 4]])), vec![2, 2, 2]);
        assert_eq!(factors(SquareMatrix::from_array([[3, 0], [0, 4]])), vec![2, 2, 3]);
        assert_eq!(factors(SquareMatrix::from_array([[1]])), Vec::<i64>::new());
        assert_eq!(
            factors(SquareMatrix::from_array([[0, 1], [1, 0]])),
            Vec::<i64>::new()
        );
    }
}
