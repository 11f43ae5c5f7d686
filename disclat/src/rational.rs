//! Rational coordinates for the extracted generators.
//!
//! A residue vector `v` stands for the coset `v/disc + L` in the dual
//! quotient. Dividing by the discriminant and reducing each fraction gives
//! the conventional rational glue-vector form.

use std::fmt;

use num_rational::Rational64;

use crate::group::DualGroup;

/// The generators of a discriminant group: the residue vectors in the order
/// the solver produced them, their additive orders, and the modulus they
/// live in. Trivial groups have an empty set.
pub struct GeneratorSet {
    vectors: Vec<Vec<i64>>,
    orders: Vec<i64>,
    modulus: i64,
}

impl GeneratorSet {
    /// Bundles solver output with the orders looked up in the group.
    pub fn new(group: &DualGroup, vectors: Vec<Vec<i64>>) -> Self {
        let orders = group.orders(&vectors);
        Self { vectors, orders, modulus: group.modulus() }
    }

    /// The number of generators.
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Is the set empty, i.e. was the group trivial?
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// The residue vectors, in extraction order.
    pub fn residues(&self) -> &[Vec<i64>] {
        &self.vectors
    }

    /// The additive orders, parallel to [`Self::residues`].
    pub fn orders(&self) -> &[i64] {
        &self.orders
    }

    /// The generators as rational vectors, every coordinate in lowest terms
    /// with a positive denominator.
    pub fn rationals(&self) -> Vec<Vec<Rational64>> {
        self.vectors
            .iter()
            .map(|v| {
                v.iter().map(|&c| Rational64::new(c, self.modulus)).collect()
            })
            .collect()
    }
}

/// One line per generator. Whole coordinates print as integers, the rest as
/// reduced fractions, so `Z/4 ⊕ Z/2` comes out as
///
/// ```text
/// [0 1/4] of order 4
/// [1/2 0] of order 2
/// ```
impl fmt::Display for GeneratorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (v, order) in self.rationals().iter().zip(&self.orders) {
            write!(f, "[")?;
            for (j, c) in v.iter().enumerate() {
                if j != 0 {
                    write!(f, " ")?;
                }
                write!(f, "{c}")?;
            }
            writeln!(f, "] of order {order}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::lattice::IntegralLattice;
    use crate::matrix::SquareMatrix;

    fn reference_set() -> GeneratorSet {
        IntegralLattice::new(SquareMatrix::from_array([[2, 0], [0, 4]]))
            .unwrap()
            .dual_group()
            .generators()
            .unwrap()
    }

    #[test]
    fn coordinates_are_reduced() {
        let set = reference_set();
        assert_eq!(set.len(), 2);
        assert_eq!(set.residues(), &[vec![0, 2], vec![4, 0]]);
        assert_eq!(set.orders(), &[4, 2]);
        let rationals = set.rationals();
        assert_eq!(
            rationals[0],
            [Rational64::new(0, 1), Rational64::new(1, 4)]
        );
        assert_eq!(
            rationals[1],
            [Rational64::new(1, 2), Rational64::new(0, 1)]
        );
    }

    #[test]
    fn display_renders_integers_and_fractions() {
        let set = reference_set();
        assert_eq!(
            set.to_string(),
            "[0 1/4] of order 4\n[1/2 0] of order 2\n"
        );
    }

    #[test]
    fn trivial_groups_render_nothing() {
        let set = IntegralLattice::new(SquareMatrix::from_array([[1]]))
            .unwrap()
            .dual_group()
            .generators()
            .unwrap();
        assert!(set.is_empty());
        assert_eq!(set.to_string(), "");
    }
}
