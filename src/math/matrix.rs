use std::fmt;
use std::ops::{Index, Mul, Neg};
use std::slice::Chunks;

use crate::config::{visible_indices, PrintOptions};
use crate::error::{LinalgError, Result};
use crate::math::Element;

/// Rectangular, row-major matrix with at least one row and one column.
///
/// Arithmetic always returns a fresh matrix. The only in-place mutation is
/// [`Matrix::set`], which checks the replacement row before writing it.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

/// Right-hand side accepted by [`Matrix::multiply`].
#[derive(Debug, Clone, Copy)]
pub enum MatrixOperand<'a, T> {
    Scalar(T),
    Matrix(&'a Matrix<T>),
}

impl<T> Matrix<T> {
    /// Builds a matrix from a list of rows. The width is taken from the
    /// first row and every other row must match it.
    pub fn new(rows: Vec<Vec<T>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map(Vec::len).ok_or(LinalgError::Empty)?;
        if width == 0 {
            return Err(LinalgError::Empty);
        }
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            log::debug!("rejecting ragged input: row {} has length {}", row, found);
            return Err(LinalgError::RaggedRows {
                row,
                expected: width,
                found,
            });
        }

        let data = rows.into_iter().flatten().collect();
        Ok(Self {
            data,
            rows: height,
            cols: width,
        })
    }

    pub fn from_shape_vec(shape: (usize, usize), data: Vec<T>) -> Result<Self> {
        let (rows, cols) = shape;
        if rows == 0 || cols == 0 {
            return Err(LinalgError::Empty);
        }
        if data.len() != rows * cols {
            return Err(LinalgError::BufferSize {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    /// `(height, width)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn check_row(&self, index: usize) -> Result<()> {
        if index >= self.rows {
            return Err(LinalgError::IndexOutOfBounds {
                axis: "row",
                index,
                len: self.rows,
            });
        }
        Ok(())
    }

    /// Row `index` as a slice.
    pub fn get(&self, index: usize) -> Result<&[T]> {
        self.check_row(index)?;
        let start = self.offset(index, 0);
        Ok(&self.data[start..start + self.cols])
    }

    /// Replaces row `index` with `row`.
    ///
    /// The replacement is checked before it is written, so on error the
    /// matrix is left exactly as it was.
    pub fn set(&mut self, index: usize, row: Vec<T>) -> Result<()> {
        self.check_row(index)?;
        if row.len() != self.cols {
            log::debug!(
                "rejecting replacement for row {}: length {} != width {}",
                index,
                row.len(),
                self.cols
            );
            return Err(LinalgError::RowLength {
                index,
                expected: self.cols,
                found: row.len(),
            });
        }
        let start = self.offset(index, 0);
        for (slot, value) in self.data[start..start + self.cols].iter_mut().zip(row) {
            *slot = value;
        }
        Ok(())
    }

    /// Checks that the matrix is non-empty and that the buffer matches its shape.
    ///
    /// Every constructor and [`Matrix::set`] already enforce this, so for a
    /// matrix built through the public API it always returns `Ok`.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(LinalgError::Empty);
        }
        if self.data.len() != self.rows * self.cols {
            return Err(LinalgError::BufferSize {
                rows: self.rows,
                cols: self.cols,
                len: self.data.len(),
            });
        }
        Ok(())
    }

    pub fn rows(&self) -> Chunks<'_, T> {
        self.data.chunks(self.cols)
    }

    pub fn mapv<U, F>(&self, mut f: F) -> Matrix<U>
    where
        F: FnMut(&T) -> U,
    {
        Matrix {
            data: self.data.iter().map(|v| f(v)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    pub fn into_rows(self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        self.rows().map(<[T]>::to_vec).collect()
    }

    /// Renders the matrix with the given print options.
    pub fn display_with<'a>(&'a self, options: &'a PrintOptions) -> MatrixDisplay<'a, T> {
        MatrixDisplay {
            matrix: self,
            options,
        }
    }
}

impl<T: Element> Matrix<T> {
    /// Column `index` copied out in row order.
    pub fn column(&self, index: usize) -> Result<Vec<T>> {
        if index >= self.cols {
            return Err(LinalgError::IndexOutOfBounds {
                axis: "column",
                index,
                len: self.cols,
            });
        }
        Ok((0..self.rows).map(|row| self[(row, index)]).collect())
    }

    pub fn negate(&self) -> Matrix<T> {
        self.mapv(|&x| -x)
    }

    fn check_same_shape(&self, other: &Matrix<T>, op: &'static str) -> Result<()> {
        if self.shape() != other.shape() {
            log::debug!("{}: shape {:?} != {:?}", op, self.shape(), other.shape());
            return Err(LinalgError::ShapeMismatch {
                op,
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(())
    }

    pub fn add(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.check_same_shape(other, "add")?;
        log::trace!("add {:?}", self.shape());
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| a + b)
            .collect();
        Ok(Matrix {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    pub fn subtract(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.check_same_shape(other, "subtract")?;
        self.add(&other.negate())
    }

    pub fn transpose(&self) -> Matrix<T> {
        log::trace!("transpose {:?}", self.shape());
        let mut data = Vec::with_capacity(self.data.len());
        for col in 0..self.cols {
            data.extend((0..self.rows).map(|row| self[(row, col)]));
        }
        Matrix {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    pub fn scale(&self, k: T) -> Matrix<T> {
        log::trace!("scale {:?}", self.shape());
        self.mapv(|&x| x * k)
    }

    /// Matrix product; requires `self.ncols() == other.nrows()` and yields
    /// a `(self.nrows(), other.ncols())` matrix.
    pub fn matmul(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        if self.cols != other.rows {
            log::debug!(
                "matmul: width {} != height {}",
                self.cols,
                other.rows
            );
            return Err(LinalgError::ShapeMismatch {
                op: "matmul",
                left: self.shape(),
                right: other.shape(),
            });
        }
        log::trace!("matmul {:?} x {:?}", self.shape(), other.shape());

        let mut data = Vec::with_capacity(self.rows * other.cols);
        for row in self.rows() {
            for j in 0..other.cols {
                let value = row
                    .iter()
                    .enumerate()
                    .fold(T::zero(), |acc, (k, &a)| acc + a * other[(k, j)]);
                data.push(value);
            }
        }
        Ok(Matrix {
            data,
            rows: self.rows,
            cols: other.cols,
        })
    }

    pub fn multiply(&self, other: MatrixOperand<'_, T>) -> Result<Matrix<T>> {
        match other {
            MatrixOperand::Scalar(k) => Ok(self.scale(k)),
            MatrixOperand::Matrix(m) => self.matmul(m),
        }
    }
}

impl<T> Index<usize> for Matrix<T> {
    type Output = [T];

    fn index(&self, index: usize) -> &Self::Output {
        assert!(index < self.rows, "row index out of bounds");
        let start = self.offset(index, 0);
        &self.data[start..start + self.cols]
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "matrix index out of bounds"
        );
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl<'a, T: Element> Neg for &'a Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl<'a, T: Element> Mul<T> for &'a Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}

pub struct MatrixDisplay<'a, T> {
    matrix: &'a Matrix<T>,
    options: &'a PrintOptions,
}

impl<'a, T: fmt::Debug> fmt::Display for MatrixDisplay<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.matrix;
        write!(f, "Matrix([")?;
        let rows = visible_indices(m.rows, self.options.max_rows);
        for (i, row) in rows.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            let Some(row) = row else {
                write!(f, "...")?;
                continue;
            };
            write!(f, "[")?;
            let cols = visible_indices(m.cols, self.options.max_cols);
            for (j, col) in cols.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                match col {
                    Some(col) => {
                        let value = &m.data[m.offset(*row, *col)];
                        write!(f, "{}", self.options.format_value(value))?
                    }
                    None => write!(f, "...")?,
                }
            }
            write!(f, "]")?;
        }
        write!(f, "])")
    }
}

impl<T: fmt::Debug> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display_with(&PrintOptions::default()), f)
    }
}
