//! Small dense matrices over a scalar subgroup
//!
//! Exists for two jobs: integer matrices acting as toral homomorphisms
//! and `f64` grids accumulating computed densities. Dimensions are fixed
//! at construction; nothing here resizes.

use ndarray::Array2;
use std::ops::{Index, IndexMut};

use super::scalar::ScalarGroup;
use crate::error::{GaussError, Result};

/// Dense `rows × cols` matrix
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<G: ScalarGroup> {
    entries: Array2<G>,
}

impl<G: ScalarGroup> Matrix<G> {
    /// Zero matrix
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            entries: Array2::from_elem((rows, cols), G::zero()),
        }
    }

    /// `n × n` identity
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.entries[[i, i]] = G::one();
        }
        m
    }

    /// Build from row vectors; all rows must have the same length
    pub fn from_rows(rows: Vec<Vec<G>>) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);

        if let Some((row, values)) = rows.iter().enumerate().find(|(_, r)| r.len() != n_cols) {
            return Err(GaussError::RaggedRows {
                row,
                expected: n_cols,
                actual: values.len(),
            });
        }

        let entries = Array2::from_shape_fn((n_rows, n_cols), |(i, j)| rows[i][j]);

        Ok(Self { entries })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.entries.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.entries.ncols()
    }

    /// Underlying array (row-major view for plotting collaborators)
    pub fn as_array(&self) -> &Array2<G> {
        &self.entries
    }

    /// Matrix × column vector
    pub fn mul_vector(&self, vector: &[G]) -> Result<Vec<G>> {
        if vector.len() != self.cols() {
            return Err(GaussError::DimensionMismatch {
                expected: self.cols(),
                actual: vector.len(),
            });
        }

        Ok(self
            .entries
            .rows()
            .into_iter()
            .map(|row| {
                row.iter()
                    .zip(vector.iter())
                    .fold(G::zero(), |acc, (&a, &b)| acc + a * b)
            })
            .collect())
    }

    /// Matrix × matrix
    pub fn matmul(&self, other: &Matrix<G>) -> Result<Matrix<G>> {
        if self.cols() != other.rows() {
            return Err(GaussError::DimensionMismatch {
                expected: self.cols(),
                actual: other.rows(),
            });
        }

        let mut product = Matrix::zeros(self.rows(), other.cols());
        for a in 0..self.rows() {
            for b in 0..other.cols() {
                let mut sum = G::zero();
                for c in 0..self.cols() {
                    sum = sum + self.entries[[a, c]] * other.entries[[c, b]];
                }
                product.entries[[a, b]] = sum;
            }
        }

        Ok(product)
    }

    /// Transposed copy
    pub fn transpose(&self) -> Matrix<G> {
        Self {
            entries: self.entries.t().to_owned(),
        }
    }

    /// Element-wise `self += other`
    pub fn accumulate(&mut self, other: &Matrix<G>) -> Result<()> {
        if self.entries.dim() != other.entries.dim() {
            return Err(GaussError::DimensionMismatch {
                expected: self.rows() * self.cols(),
                actual: other.rows() * other.cols(),
            });
        }
        self.entries.zip_mut_with(&other.entries, |a, &b| *a = *a + b);
        Ok(())
    }

    /// Divide every entry by `divisor`
    pub fn divide_by(&mut self, divisor: G) {
        self.entries.mapv_inplace(|x| x / divisor);
    }
}

impl<G: ScalarGroup> Index<(usize, usize)> for Matrix<G> {
    type Output = G;

    fn index(&self, (i, j): (usize, usize)) -> &G {
        &self.entries[[i, j]]
    }
}

impl<G: ScalarGroup> IndexMut<(usize, usize)> for Matrix<G> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut G {
        &mut self.entries[[i, j]]
    }
}
