use thiserror::Error;

pub type Result<T> = std::result::Result<T, TensorError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TensorError {
    // Indexing
    #[error("Index arity mismatch: tensor has rank {expected}, got {got} coordinates")]
    ArityMismatch { expected: usize, got: usize },

    #[error("Index out of bounds: coordinate {index} for dimension {dim} with extent {extent}")]
    CoordinateOutOfBounds {
        dim: usize,
        index: usize,
        extent: usize,
    },

    #[error("Index out of range: {index} for tensor of size {size}")]
    IndexOutOfRange { index: isize, size: usize },

    // Operand compatibility
    #[error("Shape mismatch: {lhs:?} vs {rhs:?}")]
    ShapeMismatch { lhs: Vec<usize>, rhs: Vec<usize> },

    #[error("Rank/size mismatch for dot product: {lhs:?} vs {rhs:?}")]
    DotMismatch { lhs: Vec<usize>, rhs: Vec<usize> },

    #[error("Data length mismatch: shape holds {expected} elements, got {got}")]
    LengthMismatch { expected: usize, got: usize },

    // Preconditions
    #[error("Empty tensor: '{op}' requires at least one element")]
    EmptyTensor { op: &'static str },

    #[error("Tensor is not sorted")]
    NotSorted,

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
