use rand::prelude::*;
use serde::{Serialize, Deserialize};
use std::f64::consts::PI;

use crate::error::{Result, SvmError};

/// Dense row-major matrix of `f64`.
///
/// All binary operations check shapes up front and return
/// `SvmError::DimensionMismatch` rather than panicking.
/// Deserialization rejects data that disagrees with `rows`/`cols`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix")]
pub struct Matrix{
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>
}

/// Wire form of `Matrix`, checked before it becomes one.
#[derive(Deserialize)]
struct RawMatrix {
    rows: usize,
    cols: usize,
    data: Vec<Vec<f64>>,
}

impl TryFrom<RawMatrix> for Matrix {
    type Error = SvmError;

    fn try_from(raw: RawMatrix) -> Result<Matrix> {
        let res = Matrix { rows: raw.rows, cols: raw.cols, data: raw.data };
        res.check_consistent()?;
        Ok(res)
    }
}

impl Matrix{
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix{
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows]
        }
    }

    /// Uniform samples in [-1, 1) from the thread-local RNG.
    pub fn random(rows: usize, cols: usize) -> Matrix {
        let mut rng = rand::thread_rng();
        let mut res = Matrix::zeros(rows, cols);

        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = rng.gen::<f64>() * 2.0 - 1.0;
            }
        }

        res
    }

    /// Samples a single value from N(0, 1) using the Box-Muller transform.
    fn sample_standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
        // Both uniforms lie in (0, 1] so ln() never sees 0.
        let u1: f64 = 1.0 - rng.gen::<f64>();
        let u2: f64 = 1.0 - rng.gen::<f64>();
        (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
    }

    /// Samples every entry from N(0, std_dev²) using the caller's RNG.
    ///
    /// Weight matrices are usually drawn with a small `std_dev` (e.g. 1e-3 or
    /// 1e-4) so the initial scores sit close to zero.
    pub fn gaussian<R: Rng + ?Sized>(rows: usize, cols: usize, std_dev: f64, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);
        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = Matrix::sample_standard_normal(rng) * std_dev;
            }
        }
        res
    }

    /// Builds a matrix from row vectors. Fails if the rows differ in length.
    ///
    /// An empty `data` gives a 0×0 matrix.
    pub fn from_data(data: Vec<Vec<f64>>) -> Result<Matrix> {
        let cols = data.first().map_or(0, |row| row.len());
        if let Some((row, bad)) = data.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(SvmError::RaggedRows { row, expected: cols, got: bad.len() });
        }
        Ok(Matrix {
            rows: data.len(),
            cols,
            data
        })
    }

    /// Verifies that `data` really is `rows` × `cols`.
    ///
    /// The fields are public, so a struct literal can claim any shape.
    pub fn check_consistent(&self) -> Result<()> {
        if self.data.len() != self.rows {
            return Err(SvmError::dimension_mismatch("matrix rows", &[self.rows], &[self.data.len()]));
        }
        if let Some((row, bad)) = self.data.iter().enumerate().find(|(_, r)| r.len() != self.cols) {
            return Err(SvmError::RaggedRows { row, expected: self.cols, got: bad.len() });
        }
        Ok(())
    }

    pub fn shape(&self) -> [usize; 2] {
        [self.rows, self.cols]
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row][col]
    }

    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row]
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);

        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i][j] = self.data[j][i];
            }
        }

        res
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter()
                .map(|row| row.iter().map(|&x| functor(x)).collect())
                .collect(),
        }
    }

    pub fn scale(&self, factor: f64) -> Matrix {
        self.map(|x| x * factor)
    }

    pub fn sum(&self) -> f64 {
        self.data.iter().flatten().sum()
    }

    /// Matrix product `self · rhs`.
    pub fn matmul(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.cols != rhs.rows {
            return Err(SvmError::dimension_mismatch(
                "matmul",
                &[self.cols, rhs.cols],
                &rhs.shape(),
            ));
        }

        let mut res = Matrix::zeros(self.rows, rhs.cols);

        for i in 0..res.rows {
            for j in 0..res.cols {
                let mut sum = 0.0;

                for k in 0..self.cols {
                    sum += self.data[i][k] * rhs.data[k][j];
                }

                res.data[i][j] = sum;
            }
        }

        Ok(res)
    }

    pub fn add(&self, rhs: &Matrix) -> Result<Matrix> {
        self.zip_with(rhs, "add", |a, b| a + b)
    }

    fn zip_with<F>(&self, rhs: &Matrix, op: &'static str, f: F) -> Result<Matrix>
    where
        F: Fn(f64, f64) -> f64,
    {
        if self.shape() != rhs.shape() {
            return Err(SvmError::dimension_mismatch(op, &self.shape(), &rhs.shape()));
        }
        let data = self.data.iter().zip(rhs.data.iter())
            .map(|(row_a, row_b)| {
                row_a.iter().zip(row_b.iter()).map(|(&x, &y)| f(x, y)).collect()
            })
            .collect();
        Ok(Matrix { rows: self.rows, cols: self.cols, data })
    }
}
