//! Vector type for dense 1D numeric data.

use std::cell::Cell;
use std::fmt;
use std::ops::{Add, AddAssign, Index, Mul, MulAssign, Sub, SubAssign};

use num_traits::{Float, Zero};
use serde::{Deserialize, Serialize};

use crate::diagnostics;
use crate::error::{MatrizError, Result};

/// A dense 1D numeric vector with a cached Euclidean norm.
///
/// The norm is computed on first use and memoized in an explicit
/// uncomputed/computed cell; every mutation of the element data clears the
/// cell, so the cache is never observable except as avoided recomputation.
///
/// Checked operations return [`Result`]; the operator impls degrade on a
/// dimension mismatch the same way [`Matrix`](crate::primitives::Matrix)
/// operators do — report through [`crate::diagnostics`], left operand wins.
///
/// # Examples
///
/// ```
/// use matriz::primitives::Vector;
///
/// let v = Vector::from_slice(&[3.0, 4.0]);
/// assert_eq!(v.norm(), 5.0);
/// ```
#[derive(Serialize, Deserialize)]
pub struct Vector<T> {
    data: Vec<T>,
    #[serde(skip)]
    norm: Cell<Option<T>>,
}

impl<T> Vector<T> {
    /// Creates an empty 0-dimensional vector.
    #[must_use]
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            norm: Cell::new(None),
        }
    }

    /// Creates a vector from existing data, inferring the dimension.
    #[must_use]
    pub fn from_vec(data: Vec<T>) -> Self {
        Self {
            data,
            norm: Cell::new(None),
        }
    }

    /// Returns the dimension.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the vector is 0-dimensional.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector").field("data", &self.data).finish()
    }
}

impl<T: Copy> Clone for Vector<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            norm: Cell::new(self.norm.get()),
        }
    }
}

/// Two vectors are equal iff they have the same dimension and elements;
/// a dimension mismatch is plain inequality, never an error. The norm
/// cache does not participate.
impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: Copy> Vector<T> {
    /// Creates a vector from a slice.
    #[must_use]
    pub fn from_slice(data: &[T]) -> Self {
        Self::from_vec(data.to_vec())
    }

    /// Gets the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of bounds.
    pub fn get(&self, index: usize) -> Result<T> {
        if index >= self.data.len() {
            return Err(MatrizError::index_1d(index, self.data.len()));
        }
        Ok(self.data[index])
    }

    /// Gets a mutable reference to the element at `index`.
    ///
    /// Invalidates the norm cache.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of bounds.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        if index >= self.data.len() {
            return Err(MatrizError::index_1d(index, self.data.len()));
        }
        self.norm.set(None);
        Ok(&mut self.data[index])
    }

    /// Sets the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of bounds.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }
}

impl<T: Copy + Zero> Vector<T> {
    /// Gets the element at `index`, degrading on a bad index.
    ///
    /// Out-of-bounds access reports an [`MatrizError::IndexOutOfRange`]
    /// through the diagnostics channel and returns the additive identity.
    /// Callers that need the violation surfaced should use
    /// [`Vector::get`].
    pub fn at(&self, index: usize) -> T {
        match self.get(index) {
            Ok(value) => value,
            Err(e) => {
                diagnostics::report(&e);
                T::zero()
            }
        }
    }
}

impl<T: Copy + Add<Output = T>> Vector<T> {
    /// Adds another vector element-wise.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_same_dim(other)?;
        Ok(Self::from_vec(
            self.data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| a + b)
                .collect(),
        ))
    }
}

impl<T: Copy + Sub<Output = T>> Vector<T> {
    /// Subtracts another vector element-wise.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions differ.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.check_same_dim(other)?;
        Ok(Self::from_vec(
            self.data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| a - b)
                .collect(),
        ))
    }
}

impl<T: Copy> Vector<T> {
    fn check_same_dim(&self, other: &Self) -> Result<()> {
        if self.data.len() != other.data.len() {
            return Err(MatrizError::dimension_mismatch(
                format!("{}", self.data.len()),
                format!("{}", other.data.len()),
            ));
        }
        Ok(())
    }
}

impl<T: Copy + Mul<Output = T>> Vector<T> {
    /// Multiplies each element by a scalar.
    ///
    /// Scalar scaling and the dot product are deliberately two distinct
    /// named operations; neither shares an operator symbol with the other.
    #[must_use]
    pub fn scale(&self, scalar: T) -> Self {
        Self::from_vec(self.data.iter().map(|&x| x * scalar).collect())
    }
}

impl<T: Copy + Zero + Mul<Output = T>> Vector<T> {
    /// Dot product: the sum of elementwise products, accumulated from the
    /// additive identity.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions differ.
    pub fn dot(&self, other: &Self) -> Result<T> {
        self.check_same_dim(other)?;
        let mut sum = T::zero();
        for (&a, &b) in self.data.iter().zip(other.data.iter()) {
            sum = sum + a * b;
        }
        Ok(sum)
    }
}

impl<T: Copy + Sub<Output = T> + Mul<Output = T>> Vector<T> {
    /// 3-dimensional cross product.
    ///
    /// # Errors
    ///
    /// Returns an error unless both operands have dimension exactly 3.
    pub fn cross(&self, other: &Self) -> Result<Self> {
        if self.data.len() != 3 || other.data.len() != 3 {
            return Err(MatrizError::degenerate(format!(
                "cross product undefined for dimensions {} and {}",
                self.data.len(),
                other.data.len()
            )));
        }
        let a = &self.data;
        let b = &other.data;
        Ok(Self::from_vec(vec![
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]))
    }
}

impl<T: Float> Vector<T> {
    /// Euclidean norm: the square root of the vector dotted with itself.
    ///
    /// Computed on first use and cached; mutation through the checked
    /// mutators clears the cache.
    pub fn norm(&self) -> T {
        if let Some(cached) = self.norm.get() {
            return cached;
        }
        let mut sum = T::zero();
        for &x in &self.data {
            sum = sum + x * x;
        }
        let norm = sum.sqrt();
        self.norm.set(Some(norm));
        norm
    }

    /// Divides every element by the norm, making the vector unit length.
    ///
    /// # Errors
    ///
    /// Returns an error and leaves the vector unmodified if the norm is
    /// exactly zero.
    pub fn normalize(&mut self) -> Result<()> {
        let norm = self.norm();
        if norm.is_zero() {
            return Err(MatrizError::degenerate("cannot normalize the zero vector"));
        }
        for x in &mut self.data {
            *x = *x / norm;
        }
        self.norm.set(Some(T::one()));
        Ok(())
    }

    /// Returns a unit-length copy.
    ///
    /// # Errors
    ///
    /// Returns an error if the norm is exactly zero.
    pub fn normalized(&self) -> Result<Self> {
        let mut out = self.clone();
        out.normalize()?;
        Ok(out)
    }

    /// Scales `self` by `(self · other) / (self · self)`.
    ///
    /// Note the divisor: because it is the receiver's squared norm, the
    /// result equals the textbook projection of `other` onto the line
    /// spanned by `self` — not of `self` onto `other`. See
    /// `tests_vector_contract.rs` for the pinned-down semantics.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions differ or `self` is the zero
    /// vector.
    pub fn project_onto(&self, other: &Self) -> Result<Self> {
        self.check_same_dim(other)?;
        let denom = self.dot(self)?;
        if denom.is_zero() {
            return Err(MatrizError::degenerate("cannot project the zero vector"));
        }
        let factor = self.dot(other)? / denom;
        Ok(self.scale(factor))
    }
}

impl<T: fmt::Display> Vector<T> {
    /// Writes the bracketed text form to stdout. Debugging aid only.
    pub fn print(&self) {
        println!("{self}");
    }
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for x in &self.data {
            write!(f, " {x}")?;
        }
        write!(f, " ]")
    }
}

/// Read-only indexing with slice semantics.
///
/// # Panics
///
/// Panics if `index` is out of bounds; use [`Vector::get`] or
/// [`Vector::at`] for the checked and degrading forms. Mutation goes
/// through [`Vector::get_mut`]/[`Vector::set`] so the norm cache stays
/// coherent.
impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

// Operator sugar with the same degrade-and-report policy as Matrix.

impl<T: Copy + Add<Output = T>> Add for &Vector<T> {
    type Output = Vector<T>;

    fn add(self, rhs: &Vector<T>) -> Vector<T> {
        match Vector::add(self, rhs) {
            Ok(sum) => sum,
            Err(e) => {
                diagnostics::report(&e);
                self.clone()
            }
        }
    }
}

impl<T: Copy + Add<Output = T>> Add for Vector<T> {
    type Output = Vector<T>;

    fn add(self, rhs: Vector<T>) -> Vector<T> {
        &self + &rhs
    }
}

impl<T: Copy + Add<Output = T>> AddAssign<&Vector<T>> for Vector<T> {
    fn add_assign(&mut self, rhs: &Vector<T>) {
        if let Err(e) = self.check_same_dim(rhs) {
            diagnostics::report(&e);
            return;
        }
        self.norm.set(None);
        for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a = *a + b;
        }
    }
}

impl<T: Copy + Add<Output = T>> AddAssign for Vector<T> {
    fn add_assign(&mut self, rhs: Vector<T>) {
        *self += &rhs;
    }
}

impl<T: Copy + Sub<Output = T>> Sub for &Vector<T> {
    type Output = Vector<T>;

    fn sub(self, rhs: &Vector<T>) -> Vector<T> {
        match Vector::sub(self, rhs) {
            Ok(diff) => diff,
            Err(e) => {
                diagnostics::report(&e);
                self.clone()
            }
        }
    }
}

impl<T: Copy + Sub<Output = T>> Sub for Vector<T> {
    type Output = Vector<T>;

    fn sub(self, rhs: Vector<T>) -> Vector<T> {
        &self - &rhs
    }
}

impl<T: Copy + Sub<Output = T>> SubAssign<&Vector<T>> for Vector<T> {
    fn sub_assign(&mut self, rhs: &Vector<T>) {
        if let Err(e) = self.check_same_dim(rhs) {
            diagnostics::report(&e);
            return;
        }
        self.norm.set(None);
        for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a = *a - b;
        }
    }
}

impl<T: Copy + Sub<Output = T>> SubAssign for Vector<T> {
    fn sub_assign(&mut self, rhs: Vector<T>) {
        *self -= &rhs;
    }
}

impl<T: Copy + Mul<Output = T>> Mul<T> for &Vector<T> {
    type Output = Vector<T>;

    fn mul(self, scalar: T) -> Vector<T> {
        self.scale(scalar)
    }
}

impl<T: Copy + Mul<Output = T>> Mul<T> for Vector<T> {
    type Output = Vector<T>;

    fn mul(self, scalar: T) -> Vector<T> {
        self.scale(scalar)
    }
}

impl<T: Copy + Mul<Output = T>> MulAssign<T> for Vector<T> {
    fn mul_assign(&mut self, scalar: T) {
        self.norm.set(None);
        for x in &mut self.data {
            *x = *x * scalar;
        }
    }
}

#[cfg(test)]
#[path = "vector_tests.rs"]
mod tests;
