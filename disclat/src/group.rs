//! The discriminant group of a lattice.
//!
//! The group is enumerated once, eagerly, and shared by reference with every
//! algorithm that needs it. All residue arithmetic happens modulo the single
//! discriminant, in every coordinate; there are no per-coordinate moduli.

use itertools::{Itertools as _, repeat_n};
use rand::Rng;

use crate::error::Result;
use crate::lattice::IntegralLattice;
use crate::rational::GeneratorSet;
use crate::solver;

/// The discriminant group of a lattice: every residue vector `v` in
/// `{0, …, disc-1}^rank` with `v·form ≡ 0 (mod disc)`, in lexicographic
/// order with the first coordinate varying slowest.
///
/// The order is part of the contract. The solver breaks ties by taking the
/// first element of maximal order, so a different enumeration order can
/// produce a different (equally valid) generating set.
pub struct DualGroup {
    rank: usize,
    modulus: i64,
    elements: Vec<Vec<i64>>,
}

impl DualGroup {
    /// Enumerates the discriminant group of a lattice.
    ///
    /// Exhaustive over `disc^rank` candidates. A negative discriminant makes
    /// the residue range empty, so the resulting group has no elements; the
    /// solver reports that instead of looping on it.
    pub fn enumerate(lattice: &IntegralLattice) -> Self {
        let rank = lattice.rank();
        let modulus = lattice.discriminant();
        let elements = repeat_n(0..modulus, rank)
            .multi_cartesian_product()
            .filter(|v| {
                lattice
                    .form()
                    .mul_row_vec(v)
                    .iter()
                    .all(|c| c.rem_euclid(modulus) == 0)
            })
            .collect();
        Self { rank, modulus, elements }
    }

    /// The number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// A group with a positive modulus always contains at least the zero
    /// vector; only negative discriminants get here.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The modulus shared by all coordinates, i.e. the discriminant.
    pub fn modulus(&self) -> i64 {
        self.modulus
    }

    /// The rank of the underlying lattice.
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// The elements in enumeration order.
    pub fn elements(&self) -> &[Vec<i64>] {
        &self.elements
    }

    /// Is `v` an element of the group?
    ///
    /// Literal comparison against the enumerated list: a vector congruent to
    /// an element but not reduced into `[0, disc)` does not count.
    pub fn contains(&self, v: &[i64]) -> bool {
        self.elements.iter().any(|e| e.as_slice() == v)
    }

    /// The additive order of `v`: the smallest `i >= 1` with
    /// `i·v ≡ 0 (mod disc)` in every coordinate.
    ///
    /// Returns the sentinel 0 for vectors outside the group. For elements
    /// the scan terminates at `i = disc` at the latest.
    pub fn order_of(&self, v: &[i64]) -> i64 {
        if !self.contains(v) {
            return 0;
        }
        (1..=self.modulus)
            .find(|&i| {
                v.iter().all(|&c| (i * c).rem_euclid(self.modulus) == 0)
            })
            .unwrap_or(0)
    }

    /// The largest order among `list`, 0 for an empty list.
    ///
    /// Ties are not reported; callers wanting the first maximal element scan
    /// the list again.
    pub fn max_order(&self, list: &[Vec<i64>]) -> i64 {
        list.iter().map(|v| self.order_of(v)).max().unwrap_or(0)
    }

    /// The product of the orders of `list`, 1 for an empty list.
    ///
    /// Saturates instead of overflowing. A saturated product is already far
    /// beyond the modulus, and the only consumer divides the modulus by it,
    /// which gives 0 either way.
    pub fn order_product(&self, list: &[Vec<i64>]) -> i64 {
        list.iter()
            .fold(1i64, |acc, v| acc.saturating_mul(self.order_of(v)))
    }

    /// The orders of `list`, in the same order as `list`.
    pub fn orders(&self, list: &[Vec<i64>]) -> Vec<i64> {
        list.iter().map(|v| self.order_of(v)).collect()
    }

    /// Returns a uniformly random element.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> &[i64] {
        assert!(!self.is_empty(), "The group has no elements.");
        &self.elements[rng.random_range(0..self.elements.len())]
    }

    /// Is `target` an integer combination of `generators` modulo the
    /// discriminant?
    ///
    /// Exhaustive over all coefficient tuples in `{0, …, disc-1}^k`, in
    /// lexicographic order with the first coefficient varying slowest,
    /// returning on the first match. The weighted sum is reduced modulo
    /// `disc` only after summation, and the target is compared exactly as
    /// given: a target with a coordinate outside `[0, disc)` (a raw
    /// difference of elements, say) never matches anything. The quotient
    /// construction in [`crate::solver`] relies on that.
    ///
    /// An empty generator list and a zero-length target span nothing.
    pub fn spanned_by(&self, target: &[i64], generators: &[Vec<i64>]) -> bool {
        if generators.is_empty() || target.is_empty() {
            return false;
        }
        repeat_n(0..self.modulus, generators.len())
            .multi_cartesian_product()
            .any(|coefficients| {
                let mut sum = vec![0i64; self.rank];
                for (c, g) in coefficients.iter().zip(generators) {
                    for (s, e) in sum.iter_mut().zip(g) {
                        *s += c * e;
                    }
                }
                for s in &mut sum {
                    *s = s.rem_euclid(self.modulus);
                }
                sum.as_slice() == target
            })
    }

    /// Extracts a minimal generating set and bundles it with the orders and
    /// the rational coordinates.
    pub fn generators(&self) -> Result<GeneratorSet> {
        let vectors = solver::extract_generators(self)?;
        Ok(GeneratorSet::new(self, vectors))
    }
}
