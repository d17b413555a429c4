//! Owned square matrix type.

use std::ops::{Index, IndexMut};

use crate::error::{BoundednessError, Result};
use crate::types::TropicalSemiring;

/// Owned square matrix storing semiring values.
///
/// The matrix stores values in row-major order. Equality and hashing are
/// structural over the dimension and every entry, so matrices can be used
/// as set keys.
///
/// ```
/// use tropical_bounded::{Mat, TropicalMinPlus, Weight};
///
/// let identity = Mat::<TropicalMinPlus>::identity(3);
/// assert_eq!(identity.get(0, 0), Weight::Finite(0));
/// assert_eq!(identity.get(0, 1), Weight::Infinite);
///
/// let m = Mat::<TropicalMinPlus>::from_fn(2, |i, j| TropicalMinPlus::finite((i + j) as u32));
/// let squared = m.times(&m).unwrap();
/// assert_eq!(squared.get(0, 0), Weight::Finite(0)); // min(0 + 0, 1 + 1)
/// assert!(m.times(&identity).is_err()); // 2x2 · 3x3
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Mat<S: TropicalSemiring> {
    pub(crate) data: Vec<S>,
    pub(crate) n: usize,
}

impl<S: TropicalSemiring> Mat<S> {
    /// Create a matrix with every entry set to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `n == 0`.
    pub fn filled(n: usize, value: S) -> Self {
        assert!(n > 0, "matrix dimension must be non-zero");
        Self {
            data: vec![value; n * n],
            n,
        }
    }

    /// Create a matrix filled with tropical zeros.
    ///
    /// For MinPlus this fills with +∞, for AndOr with `false`.
    pub fn zeros(n: usize) -> Self {
        Self::filled(n, S::tropical_zero())
    }

    /// Create the semiring identity matrix.
    ///
    /// Diagonal elements are tropical one, off-diagonal elements are
    /// tropical zero.
    pub fn identity(n: usize) -> Self {
        let mut mat = Self::zeros(n);
        for i in 0..n {
            mat.data[i * n + i] = S::tropical_one();
        }
        mat
    }

    /// Create a matrix from a function of (row, col).
    pub fn from_fn<F>(n: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> S,
    {
        assert!(n > 0, "matrix dimension must be non-zero");
        let data = (0..n * n).map(|idx| f(idx / n, idx % n)).collect();
        Self { data, n }
    }

    /// Create a matrix from rows of scalars.
    ///
    /// Fails on an empty grid or when any row length differs from the
    /// number of rows.
    pub fn from_rows<R>(rows: &[R]) -> Result<Self>
    where
        R: AsRef<[S::Scalar]>,
    {
        let n = rows.len();
        if n == 0 {
            return Err(BoundednessError::EmptyMatrix);
        }
        let mut data = Vec::with_capacity(n * n);
        for row in rows {
            let row = row.as_ref();
            if row.len() != n {
                return Err(BoundednessError::NotSquare {
                    rows: n,
                    cols: row.len(),
                });
            }
            data.extend(row.iter().map(|&s| S::from_scalar(s)));
        }
        Ok(Self { data, n })
    }

    /// Dimension of the matrix.
    #[inline]
    pub fn size(&self) -> usize {
        self.n
    }

    /// Scalar value at position (i, j).
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is not below the dimension.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> S::Scalar {
        self[(i, j)].value()
    }

    /// Overwrite the scalar at position (i, j). Panics like [`Mat::get`].
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: S::Scalar) {
        self[(i, j)] = S::from_scalar(value);
    }

    /// Get the underlying data as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[S] {
        &self.data
    }

    /// Iterate over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[S]> + '_ {
        self.data.chunks(self.n)
    }

    /// Apply `f` to every entry, producing a matrix over another semiring.
    pub fn map<T, F>(&self, mut f: F) -> Mat<T>
    where
        T: TropicalSemiring,
        F: FnMut(S) -> T,
    {
        Mat {
            data: self.data.iter().map(|&s| f(s)).collect(),
            n: self.n,
        }
    }

    /// Fail unless `other` has the same dimension.
    #[inline]
    pub fn ensure_same_size(&self, other: &Mat<S>) -> Result<()> {
        if self.n == other.n {
            Ok(())
        } else {
            Err(BoundednessError::DimensionMismatch {
                expected: self.n,
                found: other.n,
            })
        }
    }

    /// Compute row `i` of `self ⊗ other` into `out`.
    ///
    /// out[j] = ⊕_k (self[i,k] ⊗ other[k,j])
    #[inline]
    fn product_row(&self, i: usize, other: &Mat<S>, out: &mut [S]) -> Result<()> {
        let n = self.n;
        let row = &self.data[i * n..(i + 1) * n];
        for (j, slot) in out.iter_mut().enumerate() {
            let mut acc = S::tropical_zero();
            for (k, &a) in row.iter().enumerate() {
                if a.is_tropical_zero() {
                    continue;
                }
                acc = acc.tropical_add(a.tropical_mul(other.data[k * n + j])?);
            }
            *slot = acc;
        }
        Ok(())
    }

    /// Semiring product `self ⊗ other` as a new matrix.
    ///
    /// Neither operand is modified.
    pub fn times(&self, other: &Mat<S>) -> Result<Mat<S>> {
        self.ensure_same_size(other)?;
        let n = self.n;
        let mut data = vec![S::tropical_zero(); n * n];
        for (i, out) in data.chunks_mut(n).enumerate() {
            self.product_row(i, other, out)?;
        }
        Ok(Mat { data, n })
    }

    /// Overwrite `self` with `self ⊗ other`.
    ///
    /// The product is built in a separate buffer and swapped in at the end,
    /// so on error `self` is left unchanged. `other` cannot alias `self`
    /// here; use [`Mat::square_in_place`] for `self ⊗ self`.
    pub fn times_in_place(&mut self, other: &Mat<S>) -> Result<()> {
        let product = self.times(other)?;
        self.data = product.data;
        Ok(())
    }

    /// Overwrite `self` with `self ⊗ self`.
    pub fn square_in_place(&mut self) -> Result<()> {
        let product = self.times(self)?;
        self.data = product.data;
        Ok(())
    }

    /// Integer power by repeated squaring; `pow(0)` is the identity.
    pub fn pow(&self, k: u32) -> Result<Mat<S>> {
        let mut exp = k;
        let mut base = self.clone();
        let mut result = Self::identity(self.n);
        while exp > 0 {
            if exp & 1 == 1 {
                result.times_in_place(&base)?;
            }
            exp >>= 1;
            if exp > 0 {
                base.square_in_place()?;
            }
        }
        Ok(result)
    }
}

impl<S: TropicalSemiring> Index<(usize, usize)> for Mat<S> {
    type Output = S;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &S {
        assert!(i < self.n, "row index {} out of bounds {}", i, self.n);
        assert!(j < self.n, "col index {} out of bounds {}", j, self.n);
        &self.data[i * self.n + j]
    }
}

impl<S: TropicalSemiring> IndexMut<(usize, usize)> for Mat<S> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut S {
        assert!(i < self.n, "row index {} out of bounds {}", i, self.n);
        assert!(j < self.n, "col index {} out of bounds {}", j, self.n);
        &mut self.data[i * self.n + j]
    }
}
