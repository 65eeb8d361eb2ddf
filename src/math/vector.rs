use std::fmt;
use std::iter::FromIterator;
use std::ops::{Index, Mul, Neg};
use std::slice::Iter;

use num_traits::AsPrimitive;

use crate::config::{visible_indices, PrintOptions};
use crate::error::{LinalgError, Result};
use crate::math::Element;

/// Fixed-length vector. Never mutated after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Vector<T> {
    coordinates: Vec<T>,
}

/// Right-hand side accepted by [`Vector::multiply`] and [`Vector::divide`].
#[derive(Debug, Clone, Copy)]
pub enum VectorOperand<'a, T> {
    Scalar(T),
    Vector(&'a Vector<T>),
}

/// Result of [`Vector::multiply`] or [`Vector::divide`]: a scalar when the
/// right-hand side was a vector, a vector when it was a scalar.
#[derive(Debug, Clone, PartialEq)]
pub enum Product<T> {
    Scalar(T),
    Vector(Vector<T>),
}

impl<T> Product<T> {
    pub fn scalar(self) -> Option<T> {
        match self {
            Product::Scalar(value) => Some(value),
            Product::Vector(_) => None,
        }
    }

    pub fn vector(self) -> Option<Vector<T>> {
        match self {
            Product::Vector(v) => Some(v),
            Product::Scalar(_) => None,
        }
    }
}

impl<T> Vector<T> {
    pub fn new(coordinates: Vec<T>) -> Self {
        Self { coordinates }
    }

    pub fn from_vec(coordinates: Vec<T>) -> Self {
        Self::new(coordinates)
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.coordinates.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.coordinates
    }

    pub fn mapv<U, F>(&self, mut f: F) -> Vector<U>
    where
        F: FnMut(&T) -> U,
    {
        Vector::from_vec(self.coordinates.iter().map(|v| f(v)).collect())
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.coordinates.clone()
    }

    pub fn into_inner(self) -> Vec<T> {
        self.coordinates
    }

    /// Renders the vector with the given print options.
    pub fn display_with<'a>(&'a self, options: &'a PrintOptions) -> VectorDisplay<'a, T> {
        VectorDisplay {
            vector: self,
            options,
        }
    }

    fn check_len(&self, other: &Vector<T>, op: &'static str) -> Result<()> {
        if self.len() != other.len() {
            log::debug!("{}: length {} != {}", op, self.len(), other.len());
            return Err(LinalgError::LengthMismatch {
                op,
                left: self.len(),
                right: other.len(),
            });
        }
        Ok(())
    }
}

impl<T: Element> Vector<T> {
    pub fn negate(&self) -> Vector<T> {
        self.mapv(|&x| -x)
    }

    pub fn add(&self, other: &Vector<T>) -> Result<Vector<T>> {
        log::trace!("add {} / {}", self.len(), other.len());
        self.check_len(other, "add")?;
        Ok(self.iter().zip(other.iter()).map(|(&a, &b)| a + b).collect())
    }

    pub fn subtract(&self, other: &Vector<T>) -> Result<Vector<T>> {
        log::trace!("subtract {} / {}", self.len(), other.len());
        self.check_len(other, "subtract")?;
        Ok(self.iter().zip(other.iter()).map(|(&a, &b)| a - b).collect())
    }

    /// Sum of pairwise products.
    pub fn dot(&self, other: &Vector<T>) -> Result<T> {
        log::trace!("dot {} / {}", self.len(), other.len());
        self.check_len(other, "dot")?;
        Ok(self
            .iter()
            .zip(other.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b))
    }

    pub fn scale(&self, k: T) -> Vector<T> {
        self.mapv(|&x| x * k)
    }

    /// Sum over `i` of `self[i] / other[i]`, computed in `f64`.
    pub fn quotient_sum(&self, other: &Vector<T>) -> Result<f64> {
        log::trace!("quotient_sum {} / {}", self.len(), other.len());
        self.check_len(other, "quotient_sum")?;
        if other.iter().any(|b| b.is_zero()) {
            return Err(LinalgError::DivisionByZero);
        }
        Ok(self
            .iter()
            .zip(other.iter())
            .map(|(&a, &b)| a.as_() / b.as_())
            .sum())
    }

    /// Every coordinate divided by `k`, promoted to `f64`.
    pub fn divide_scalar(&self, k: T) -> Result<Vector<f64>> {
        log::trace!("divide_scalar {}", self.len());
        if k.is_zero() {
            return Err(LinalgError::DivisionByZero);
        }
        let k: f64 = k.as_();
        Ok(self.mapv(|&x| AsPrimitive::<f64>::as_(x) / k))
    }

    pub fn multiply(&self, other: VectorOperand<'_, T>) -> Result<Product<T>> {
        match other {
            VectorOperand::Vector(v) => self.dot(v).map(Product::Scalar),
            VectorOperand::Scalar(k) => Ok(Product::Vector(self.scale(k))),
        }
    }

    pub fn divide(&self, other: VectorOperand<'_, T>) -> Result<Product<f64>> {
        match other {
            VectorOperand::Vector(v) => self.quotient_sum(v).map(Product::Scalar),
            VectorOperand::Scalar(k) => self.divide_scalar(k).map(Product::Vector),
        }
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(value: Vec<T>) -> Self {
        Vector::from_vec(value)
    }
}

impl<T> From<Vector<T>> for Vec<T> {
    fn from(value: Vector<T>) -> Self {
        value.coordinates
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Vector::from_vec(iter.into_iter().collect())
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.coordinates[index]
    }
}

impl<'a, T: Element> Neg for &'a Vector<T> {
    type Output = Vector<T>;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl<'a, T: Element> Mul<T> for &'a Vector<T> {
    type Output = Vector<T>;

    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}

pub struct VectorDisplay<'a, T> {
    vector: &'a Vector<T>,
    options: &'a PrintOptions,
}

impl<'a, T: fmt::Debug> fmt::Display for VectorDisplay<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector(")?;
        let indices = visible_indices(self.vector.len(), self.options.max_cols);
        for (idx, position) in indices.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            match position {
                Some(i) => write!(f, "{}", self.options.format_value(&self.vector[*i]))?,
                None => write!(f, "...")?,
            }
        }
        write!(f, ")")
    }
}

impl<T: fmt::Debug> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display_with(&PrintOptions::default()), f)
    }
}
