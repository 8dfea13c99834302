//! Matrix type for dense 2D numeric data.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};
use std::path::Path;
use std::str::FromStr;

use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::diagnostics;
use crate::error::{MatrizError, Result};

/// A dense 2D matrix (row-major storage).
///
/// Checked operations return [`Result`]; the operator impls (`+`, `-`, `*`
/// and their assigning forms) degrade on bad shapes instead of failing:
/// they report the error through [`crate::diagnostics`] and leave the left
/// operand's values unchanged.
///
/// # Examples
///
/// ```
/// use matriz::primitives::Matrix;
///
/// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
///     .expect("data length matches rows * cols");
/// assert_eq!(m.shape(), (2, 3));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Matrix<T> {
    /// Creates an empty 0x0 matrix.
    #[must_use]
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            rows: 0,
            cols: 0,
        }
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Whether the matrix holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the underlying data as a row-major slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns row `index` as a slice.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is not a valid row.
    pub fn row(&self, index: usize) -> Result<&[T]> {
        self.check_row(index)?;
        let start = index * self.cols;
        Ok(&self.data[start..start + self.cols])
    }

    fn check_row(&self, index: usize) -> Result<()> {
        if index >= self.rows {
            return Err(MatrizError::index_1d(index, self.rows));
        }
        Ok(())
    }

    fn check_col(&self, index: usize) -> Result<()> {
        if index >= self.cols {
            return Err(MatrizError::index_1d(index, self.cols));
        }
        Ok(())
    }
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy> Matrix<T> {
    /// Creates a new matrix from a row-major vector of data.
    ///
    /// # Errors
    ///
    /// Returns an error if data length doesn't match rows * cols.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(MatrizError::dimension_mismatch(
                format!("{} elements ({rows}x{cols})", rows * cols),
                format!("{}", data.len()),
            ));
        }
        Ok(Self { data, rows, cols })
    }

    /// Creates a matrix from nested rows, inferring the shape.
    ///
    /// # Errors
    ///
    /// Returns an error if the rows do not all have the same length.
    ///
    /// # Examples
    ///
    /// ```
    /// use matriz::primitives::Matrix;
    ///
    /// let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).expect("rectangular");
    /// assert_eq!(m.shape(), (2, 2));
    /// ```
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let n = rows.len();
        let m = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(n * m);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != m {
                return Err(MatrizError::dimension_mismatch(
                    format!("{m} elements per row"),
                    format!("{} in row {i}", row.len()),
                ));
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            rows: n,
            cols: m,
        })
    }

    /// Gets the element at (row, col).
    ///
    /// # Errors
    ///
    /// Returns an error if either index is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrizError::index_2d((row, col), (self.rows, self.cols)));
        }
        Ok(self.data[row * self.cols + col])
    }

    /// Gets a mutable reference to the element at (row, col).
    ///
    /// # Errors
    ///
    /// Returns an error if either index is out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrizError::index_2d((row, col), (self.rows, self.cols)));
        }
        Ok(&mut self.data[row * self.cols + col])
    }

    /// Sets the element at (row, col).
    ///
    /// # Errors
    ///
    /// Returns an error if either index is out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        *self.get_mut(row, col)? = value;
        Ok(())
    }

    /// Returns a copy with rows `i` and `j` exchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if either row index is out of bounds; no matrix is
    /// produced in that case.
    pub fn row_swapped(&self, i: usize, j: usize) -> Result<Self> {
        self.check_row(i)?;
        self.check_row(j)?;
        let mut out = self.clone();
        for k in 0..self.cols {
            out.data.swap(i * self.cols + k, j * self.cols + k);
        }
        Ok(out)
    }

    /// Returns a copy with columns `i` and `j` exchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if either column index is out of bounds.
    pub fn column_swapped(&self, i: usize, j: usize) -> Result<Self> {
        self.check_col(i)?;
        self.check_col(j)?;
        let mut out = self.clone();
        for k in 0..self.rows {
            out.data.swap(k * self.cols + i, k * self.cols + j);
        }
        Ok(out)
    }

    /// Exchanges rows `i` and `j` in place.
    ///
    /// # Errors
    ///
    /// Returns an error and leaves the matrix unchanged if either index is
    /// out of bounds.
    pub fn swap_rows(&mut self, i: usize, j: usize) -> Result<()> {
        *self = self.row_swapped(i, j)?;
        Ok(())
    }

    /// Exchanges columns `i` and `j` in place.
    ///
    /// # Errors
    ///
    /// Returns an error and leaves the matrix unchanged if either index is
    /// out of bounds.
    pub fn swap_columns(&mut self, i: usize, j: usize) -> Result<()> {
        *self = self.column_swapped(i, j)?;
        Ok(())
    }

    /// Transposes the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.cols {
            for i in 0..self.rows {
                data.push(self.data[i * self.cols + j]);
            }
        }
        Self {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }
}

impl<T: Copy + Default> Matrix<T> {
    /// Creates a matrix of the given shape with default-valued elements.
    #[must_use]
    pub fn from_shape(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![T::default(); rows * cols],
            rows,
            cols,
        }
    }
}

impl<T: Copy + Zero> Matrix<T> {
    /// Creates a matrix of zeros.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![T::zero(); rows * cols],
            rows,
            cols,
        }
    }

    /// Gets the element at (row, col), degrading on bad indices.
    ///
    /// Out-of-bounds access reports an [`MatrizError::IndexOutOfRange`]
    /// through the diagnostics channel and returns the element at (0, 0)
    /// — or the additive identity when the matrix is empty. Callers that
    /// need the violation surfaced should use [`Matrix::get`].
    pub fn at(&self, row: usize, col: usize) -> T {
        match self.get(row, col) {
            Ok(value) => value,
            Err(e) => {
                diagnostics::report(&e);
                self.data.first().copied().unwrap_or_else(T::zero)
            }
        }
    }
}

impl<T: Copy + One> Matrix<T> {
    /// Creates a matrix of ones.
    #[must_use]
    pub fn ones(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![T::one(); rows * cols],
            rows,
            cols,
        }
    }
}

impl<T: Copy + Zero + One> Matrix<T> {
    /// Creates an identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut data = vec![T::zero(); n * n];
        for i in 0..n {
            data[i * n + i] = T::one();
        }
        Self {
            data,
            rows: n,
            cols: n,
        }
    }
}

impl<T> Matrix<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    /// Loads a matrix from a whitespace-delimited grid file.
    ///
    /// Each non-blank line becomes one row; values are separated by
    /// whitespace. An empty file yields the 0x0 matrix.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, a value fails to
    /// parse, or the lines do not all hold the same number of values.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let mut data = Vec::new();
        let mut rows = 0usize;
        let mut cols: Option<usize> = None;
        for (line_idx, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let mut count = 0usize;
            for token in line.split_whitespace() {
                let value = token.parse::<T>().map_err(|e| MatrizError::Parse {
                    line: line_idx + 1,
                    message: format!("invalid number {token:?}: {e}"),
                })?;
                data.push(value);
                count += 1;
            }
            match cols {
                None => cols = Some(count),
                Some(expected) if expected != count => {
                    return Err(MatrizError::Parse {
                        line: line_idx + 1,
                        message: format!("expected {expected} values, got {count}"),
                    });
                }
                Some(_) => {}
            }
            rows += 1;
        }
        Ok(Self {
            data,
            rows,
            cols: cols.unwrap_or(0),
        })
    }
}

impl<T: Copy + Add<Output = T>> Matrix<T> {
    /// Adds another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns an error if the shapes differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other)?;
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| a + b)
            .collect();
        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }
}

impl<T: Copy + Sub<Output = T>> Matrix<T> {
    /// Subtracts another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns an error if the shapes differ.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other)?;
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| a - b)
            .collect();
        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }
}

impl<T: Copy> Matrix<T> {
    fn check_same_shape(&self, other: &Self) -> Result<()> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(MatrizError::dimension_mismatch(
                format!("{}x{}", self.rows, self.cols),
                format!("{}x{}", other.rows, other.cols),
            ));
        }
        Ok(())
    }
}

impl<T: Copy + Zero + Mul<Output = T>> Matrix<T> {
    /// Matrix-matrix multiplication.
    ///
    /// The result has shape `(self.n_rows(), other.n_cols())`.
    ///
    /// # Errors
    ///
    /// Returns an error unless `self.n_cols() == other.n_rows()`.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(MatrizError::dimension_mismatch(
                format!("left cols = right rows ({})", self.cols),
                format!("{}", other.rows),
            ));
        }
        let mut data = Vec::with_capacity(self.rows * other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = T::zero();
                for k in 0..self.cols {
                    sum = sum + self.data[i * self.cols + k] * other.data[k * other.cols + j];
                }
                data.push(sum);
            }
        }
        Ok(Self {
            data,
            rows: self.rows,
            cols: other.cols,
        })
    }
}

impl<T: Copy + Mul<Output = T>> Matrix<T> {
    /// Multiplies each element by a scalar.
    #[must_use]
    pub fn mul_scalar(&self, scalar: T) -> Self {
        Self {
            data: self.data.iter().map(|&x| x * scalar).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Returns a copy with row `index` scaled by `factor`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is not a valid row.
    pub fn row_scaled(&self, index: usize, factor: T) -> Result<Self> {
        self.check_row(index)?;
        let mut out = self.clone();
        for k in 0..self.cols {
            let cell = index * self.cols + k;
            out.data[cell] = self.data[cell] * factor;
        }
        Ok(out)
    }

    /// Returns a copy with column `index` scaled by `factor`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is not a valid column.
    pub fn column_scaled(&self, index: usize, factor: T) -> Result<Self> {
        self.check_col(index)?;
        let mut out = self.clone();
        for k in 0..self.rows {
            let cell = k * self.cols + index;
            out.data[cell] = self.data[cell] * factor;
        }
        Ok(out)
    }

    /// Scales row `index` by `factor` in place.
    ///
    /// # Errors
    ///
    /// Returns an error and leaves the matrix unchanged if `index` is out
    /// of bounds.
    pub fn scale_row(&mut self, index: usize, factor: T) -> Result<()> {
        *self = self.row_scaled(index, factor)?;
        Ok(())
    }

    /// Scales column `index` by `factor` in place.
    ///
    /// # Errors
    ///
    /// Returns an error and leaves the matrix unchanged if `index` is out
    /// of bounds.
    pub fn scale_column(&mut self, index: usize, factor: T) -> Result<()> {
        *self = self.column_scaled(index, factor)?;
        Ok(())
    }
}

impl<T: Copy + Add<Output = T> + Mul<Output = T>> Matrix<T> {
    /// Returns a copy where row `target` becomes
    /// `row target + factor * row source`.
    ///
    /// # Errors
    ///
    /// Returns an error if either row index is out of bounds.
    pub fn row_added(&self, target: usize, source: usize, factor: T) -> Result<Self> {
        self.check_row(target)?;
        self.check_row(source)?;
        let mut out = self.clone();
        for k in 0..self.cols {
            let t = target * self.cols + k;
            let s = source * self.cols + k;
            out.data[t] = self.data[t] + factor * self.data[s];
        }
        Ok(out)
    }

    /// Returns a copy where column `target` becomes
    /// `column target + factor * column source`.
    ///
    /// # Errors
    ///
    /// Returns an error if either column index is out of bounds.
    pub fn column_added(&self, target: usize, source: usize, factor: T) -> Result<Self> {
        self.check_col(target)?;
        self.check_col(source)?;
        let mut out = self.clone();
        for k in 0..self.rows {
            let t = k * self.cols + target;
            let s = k * self.cols + source;
            out.data[t] = self.data[t] + factor * self.data[s];
        }
        Ok(out)
    }

    /// Adds `factor * row source` to row `target` in place.
    ///
    /// # Errors
    ///
    /// Returns an error and leaves the matrix unchanged if either index is
    /// out of bounds.
    pub fn add_scaled_row(&mut self, target: usize, source: usize, factor: T) -> Result<()> {
        *self = self.row_added(target, source, factor)?;
        Ok(())
    }

    /// Adds `factor * column source` to column `target` in place.
    ///
    /// # Errors
    ///
    /// Returns an error and leaves the matrix unchanged if either index is
    /// out of bounds.
    pub fn add_scaled_column(&mut self, target: usize, source: usize, factor: T) -> Result<()> {
        *self = self.column_added(target, source, factor)?;
        Ok(())
    }
}

impl<T: fmt::Display> Matrix<T> {
    /// Writes the bracketed row-major form to stdout. Debugging aid only.
    pub fn print(&self) {
        println!("{self}");
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for r in 0..self.rows {
            if r > 0 {
                write!(f, "\n ")?;
            }
            for c in 0..self.cols {
                write!(f, " {}", self.data[r * self.cols + c])?;
            }
        }
        write!(f, " ]")
    }
}

// Operator sugar. Shape violations degrade: the error is reported through
// the diagnostics channel and the left operand's values win.

impl<T: Copy + Add<Output = T>> Add for &Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        match Matrix::add(self, rhs) {
            Ok(sum) => sum,
            Err(e) => {
                diagnostics::report(&e);
                self.clone()
            }
        }
    }
}

impl<T: Copy + Add<Output = T>> Add for Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, rhs: Matrix<T>) -> Matrix<T> {
        &self + &rhs
    }
}

impl<T: Copy + Add<Output = T>> AddAssign<&Matrix<T>> for Matrix<T> {
    fn add_assign(&mut self, rhs: &Matrix<T>) {
        if let Err(e) = self.check_same_shape(rhs) {
            diagnostics::report(&e);
            return;
        }
        for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a = *a + b;
        }
    }
}

impl<T: Copy + Add<Output = T>> AddAssign for Matrix<T> {
    fn add_assign(&mut self, rhs: Matrix<T>) {
        *self += &rhs;
    }
}

impl<T: Copy + Sub<Output = T>> Sub for &Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, rhs: &Matrix<T>) -> Matrix<T> {
        match Matrix::sub(self, rhs) {
            Ok(diff) => diff,
            Err(e) => {
                diagnostics::report(&e);
                self.clone()
            }
        }
    }
}

impl<T: Copy + Sub<Output = T>> Sub for Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, rhs: Matrix<T>) -> Matrix<T> {
        &self - &rhs
    }
}

impl<T: Copy + Sub<Output = T>> SubAssign<&Matrix<T>> for Matrix<T> {
    fn sub_assign(&mut self, rhs: &Matrix<T>) {
        if let Err(e) = self.check_same_shape(rhs) {
            diagnostics::report(&e);
            return;
        }
        for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a = *a - b;
        }
    }
}

impl<T: Copy + Sub<Output = T>> SubAssign for Matrix<T> {
    fn sub_assign(&mut self, rhs: Matrix<T>) {
        *self -= &rhs;
    }
}

impl<T: Copy + Zero + Mul<Output = T>> Mul for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        match self.matmul(rhs) {
            Ok(product) => product,
            Err(e) => {
                diagnostics::report(&e);
                self.clone()
            }
        }
    }
}

impl<T: Copy + Zero + Mul<Output = T>> Mul for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: Matrix<T>) -> Matrix<T> {
        &self * &rhs
    }
}

impl<T: Copy + Zero + Mul<Output = T>> MulAssign<&Matrix<T>> for Matrix<T> {
    fn mul_assign(&mut self, rhs: &Matrix<T>) {
        match self.matmul(rhs) {
            Ok(product) => *self = product,
            Err(e) => diagnostics::report(&e),
        }
    }
}

impl<T: Copy + Zero + Mul<Output = T>> MulAssign for Matrix<T> {
    fn mul_assign(&mut self, rhs: Matrix<T>) {
        *self *= &rhs;
    }
}

impl<T: Copy + Mul<Output = T>> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, scalar: T) -> Matrix<T> {
        self.mul_scalar(scalar)
    }
}

impl<T: Copy + Mul<Output = T>> Mul<T> for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, scalar: T) -> Matrix<T> {
        self.mul_scalar(scalar)
    }
}

impl<T: Copy + Mul<Output = T>> MulAssign<T> for Matrix<T> {
    fn mul_assign(&mut self, scalar: T) {
        for x in &mut self.data {
            *x = *x * scalar;
        }
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
