use thiserror::Error;

pub type Result<T> = std::result::Result<T, LinalgError>;

/// Error type for matrix and vector operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinalgError {
    /// Operand shapes are incompatible for a binary matrix operation.
    #[error("{op}: incompatible shapes, left operand is {left:?} and right operand is {right:?}")]
    ShapeMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },
    #[error("all rows must be the same length: row {row} has length {found}, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("replacement for row {index} has length {found}, expected {expected}")]
    RowLength {
        index: usize,
        expected: usize,
        found: usize,
    },
    #[error("invalid shape ({rows}, {cols}) for buffer of length {len}")]
    BufferSize { rows: usize, cols: usize, len: usize },
    #[error("matrix must have at least one row and one column")]
    Empty,
    /// Vector operands differ in length.
    #[error("{op}: vectors differ in length ({left} vs {right})")]
    LengthMismatch {
        op: &'static str,
        left: usize,
        right: usize,
    },
    #[error("division by zero")]
    DivisionByZero,
    #[error("{axis} index {index} out of bounds for length {len}")]
    IndexOutOfBounds {
        axis: &'static str,
        index: usize,
        len: usize,
    },
}

impl LinalgError {
    /// True for every variant that describes an invalid matrix shape.
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            LinalgError::ShapeMismatch { .. }
                | LinalgError::RaggedRows { .. }
                | LinalgError::RowLength { .. }
                | LinalgError::BufferSize { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_mismatch_names_both_shapes() {
        let err = LinalgError::ShapeMismatch {
            op: "add",
            left: (2, 3),
            right: (3, 2),
        };
        let msg = err.to_string();
        assert!(msg.contains("(2, 3)"));
        assert!(msg.contains("(3, 2)"));
        assert!(err.is_shape_error());
    }

    #[test]
    fn size_errors_are_not_shape_errors() {
        let err = LinalgError::LengthMismatch {
            op: "dot",
            left: 3,
            right: 2,
        };
        assert!(!err.is_shape_error());
        assert!(!LinalgError::DivisionByZero.is_shape_error());
        assert_eq!(err.to_string(), "dot: vectors differ in length (3 vs 2)");
    }
}
