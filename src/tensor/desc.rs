use crate::utils::error::{Result, TensorError};

/// Shape of a tensor and the row-major mapping between coordinates and flat offsets.
///
/// An empty shape is the degenerate descriptor: rank 0 and zero elements.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TensorDesc {
    dims: Vec<usize>,
    strides: Vec<usize>,
}

impl TensorDesc {
    pub fn new(dims: Vec<usize>) -> Self {
        let strides = Self::compute_strides(&dims);
        Self { dims, strides }
    }

    pub fn num_elements(&self) -> usize {
        Self::size_of(&self.dims)
    }

    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    // Get number of dimensions
    pub fn ndim(&self) -> usize {
        self.dims.len()
    }

    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Element count for a shape. The empty shape holds nothing.
    pub fn size_of(dims: &[usize]) -> usize {
        if dims.is_empty() {
            return 0;
        }
        dims.iter().product()
    }

    // Stride of dimension i is the product of every more interior extent
    pub fn compute_strides(dims: &[usize]) -> Vec<usize> {
        let mut s = vec![1; dims.len()];
        for i in (0..dims.len().saturating_sub(1)).rev() {
            s[i] = s[i + 1] * dims[i + 1];
        }
        s
    }

    /// Row-major flat offset of `coords`.
    ///
    /// Fails when the number of coordinates differs from the rank, or when any
    /// coordinate is not below the extent of its dimension.
    pub fn flat_index(&self, coords: &[usize]) -> Result<usize> {
        if coords.len() != self.dims.len() {
            return Err(TensorError::ArityMismatch {
                expected: self.dims.len(),
                got: coords.len(),
            });
        }

        for (dim, (&index, &extent)) in coords.iter().zip(self.dims.iter()).enumerate() {
            if index >= extent {
                return Err(TensorError::CoordinateOutOfBounds { dim, index, extent });
            }
        }

        Ok(Self::offset(coords, &self.strides))
    }

    /// Inverse of [`flat_index`](Self::flat_index).
    pub fn unravel(&self, idx: usize) -> Result<Vec<usize>> {
        let size = self.num_elements();
        if idx >= size {
            return Err(TensorError::IndexOutOfRange {
                index: isize::try_from(idx).unwrap_or(isize::MAX),
                size,
            });
        }

        let mut rem = idx;
        Ok(self
            .strides
            .iter()
            .map(|&stride| {
                let c = rem / stride;
                rem %= stride;
                c
            })
            .collect())
    }

    pub fn offset(idxs: &[usize], strides: &[usize]) -> usize {
        idxs.iter().zip(strides.iter()).map(|(i, s)| i * s).sum()
    }

    /// Brace-delimited rendering, e.g. `{3, 2, 2}`.
    pub fn to_brace_string(&self) -> String {
        let inner: Vec<String> = self.dims.iter().map(|d| d.to_string()).collect();
        format!("{{{}}}", inner.join(", "))
    }
}

impl From<&[usize]> for TensorDesc {
    fn from(dims: &[usize]) -> Self {
        Self::new(dims.to_vec())
    }
}
