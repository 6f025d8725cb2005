//! clin - contiguous N-dimensional arrays
//!
//! A heap-allocated, row-major tensor container addressable by flat index or by
//! N-dimensional coordinates, with elementwise arithmetic, descriptive statistics
//! and an in-place merge sort.

mod algorithm;

mod display;

mod ops;

mod tensor;

mod utils;

pub use algorithm::merge_sort::merge_sort;
pub use display::config::PrintConfig;
pub use tensor::{Buffer, Cursor, Tensor, TensorDesc};
pub use utils::error::{Result, TensorError};
