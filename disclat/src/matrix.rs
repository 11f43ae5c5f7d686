//! Square integer matrices.
//!
//! An intersection form never leaves `i64`, but determinants are accumulated
//! in [`BigInt`] so they are exact no matter how the cofactor products grow.

use std::fmt::Debug;
use std::ops::{Index, IndexMut};

use itertools::{Itertools as _, iproduct};
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

/// A square matrix with integer entries in row-major order.
#[derive(Clone, PartialEq, Eq)]
pub struct SquareMatrix {
    entries: Vec<i64>,
    size: usize,
}

impl SquareMatrix {
    /// Creates a matrix from an array of rows.
    pub fn from_array<const N: usize>(a: [[i64; N]; N]) -> Self {
        let mut entries = Vec::with_capacity(N * N);
        for row in a {
            entries.extend_from_slice(&row);
        }
        Self { entries, size: N }
    }

    /// Creates a matrix from a slice of rows.
    pub fn from_rows<U: AsRef<[i64]>>(rows: &[U]) -> Self {
        let size = rows.len();
        assert!(
            rows.iter().all(|r| r.as_ref().len() == size),
            "The rows have to form a square matrix."
        );
        let entries =
            rows.iter().flat_map(|r| r.as_ref().iter().copied()).collect();
        Self { entries, size }
    }

    /// Returns an n×n zero matrix.
    pub fn zero(n: usize) -> Self {
        Self { entries: vec![0; n * n], size: n }
    }

    /// Returns an n×n identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zero(n);
        for i in 0..n {
            m[(i, i)] = 1;
        }
        m
    }

    /// The side length of the matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Is the matrix 0×0?
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the row `r` as a slice.
    pub fn row(&self, r: usize) -> &[i64] {
        &self.entries[r * self.size..(r + 1) * self.size]
    }

    /// Returns an iterator over the rows.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[i64]> {
        // `chunks_exact` rejects a chunk size of 0; an empty matrix has no
        // rows either way.
        self.entries.chunks_exact(self.size.max(1))
    }

    /// Prints each row of the matrix in its own line using the debug
    /// formatter.
    pub fn print_rows(&self) {
        for r in self.rows() {
            println!("{r:?}");
        }
    }

    /// Is the matrix equal to its transpose?
    pub fn is_symmetric(&self) -> bool {
        iproduct!(0..self.size, 0..self.size)
            .all(|(r, c)| self[(r, c)] == self[(c, r)])
    }

    /// Pre-multiplies the matrix with a row vector, i.e. returns `v * self`.
    pub fn mul_row_vec(&self, v: &[i64]) -> Vec<i64> {
        assert_eq!(
            v.len(),
            self.size,
            "The vector length has to match the matrix size."
        );
        (0..self.size)
            .map(|c| (0..self.size).map(|r| v[r] * self[(r, c)]).sum::<i64>())
            .collect()
    }

    /// Returns the principal submatrix on the given row/column indices.
    pub fn principal_submatrix(&self, indices: &[usize]) -> SquareMatrix {
        let entries = indices
            .iter()
            .flat_map(|&r| indices.iter().map(move |&c| self[(r, c)]))
            .collect();
        SquareMatrix { entries, size: indices.len() }
    }

    /// The matrix with row 0 and column `col` removed.
    fn minor(&self, col: usize) -> SquareMatrix {
        let entries = (1..self.size)
            .flat_map(|r| {
                (0..self.size)
                    .filter(move |&c| c != col)
                    .map(move |c| self[(r, c)])
            })
            .collect();
        SquareMatrix { entries, size: self.size - 1 }
    }

    /// Computes the determinant exactly, by cofactor expansion along the
    /// first row.
    ///
    /// The factorial cost is irrelevant next to the exhaustive searches done
    /// on these matrices, and exactness is what matters: the discriminant is
    /// a modulus, so it can not be off by one.
    pub fn determinant(&self) -> BigInt {
        match self.size {
            0 => BigInt::one(),
            1 => BigInt::from(self[(0, 0)]),
            2 => {
                BigInt::from(self[(0, 0)]) * self[(1, 1)]
                    - BigInt::from(self[(0, 1)]) * self[(1, 0)]
            }
            _ => {
                let mut det = BigInt::zero();
                for c in 0..self.size {
                    let cofactor =
                        self.minor(c).determinant() * self[(0, c)];
                    if c % 2 == 0 {
                        det += cofactor;
                    } else {
                        det -= cofactor;
                    }
                }
                det
            }
        }
    }

    /// Is the matrix positive definite?
    ///
    /// Sylvester's criterion: every leading principal minor has a positive
    /// determinant.
    pub fn is_positive_definite(&self) -> bool {
        (1..=self.size).all(|k| {
            let indices = (0..k).collect::<Vec<_>>();
            self.principal_submatrix(&indices).determinant().is_positive()
        })
    }

    /// Is the matrix positive semidefinite?
    ///
    /// Unlike the definite case, the leading minors are not enough here;
    /// every principal minor has to have a non-negative determinant.
    pub fn is_positive_semidefinite(&self) -> bool {
        (0..self.size).powerset().all(|indices| {
            indices.is_empty()
                || !self.principal_submatrix(&indices).determinant().is_negative()
        })
    }
}

impl Index<usize> for SquareMatrix {
    type Output = [i64];

    fn index(&self, r: usize) -> &Self::Output {
        self.row(r)
    }
}

impl Index<(usize, usize)> for SquareMatrix {
    type Output = i64;

    fn index(&self, (r, c): (usize, usize)) -> &Self::Output {
        &self.entries[r * self.size + c]
    }
}

impl IndexMut<(usize, usize)> for SquareMatrix {
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut Self::Output {
        &mut self.entries[r * self.size + c]
    }
}

impl Debug for SquareMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.rows()).finish()
    }
}
