use num_traits::{One, Zero};
use rand::{
    Rng,
    distr::{Distribution, Uniform, uniform::SampleUniform},
};

use crate::{
    tensor::{buffer::Buffer, desc::TensorDesc},
    utils::error::{Result, TensorError},
};

/// Contiguous row-major N-dimensional array.
///
/// The buffer length always equals the element count of the descriptor. A tensor
/// is the only owner of its buffer; [`take`](Tensor::take) and
/// [`move_from`](Tensor::move_from) hand the storage over and leave the source as
/// the empty tensor.
#[derive(Clone, Debug, PartialEq)]
pub struct Tensor<T> {
    desc: TensorDesc,
    buffer: Buffer<T>,
}

impl<T> Default for Tensor<T> {
    fn default() -> Self {
        Self {
            desc: TensorDesc::default(),
            buffer: Buffer::empty(),
        }
    }
}

impl<T> Tensor<T> {
    /// Empty tensor: rank 0, shape `{}`, size 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a tensor from explicit row-major contents.
    pub fn from_vec(shape: &[usize], data: Vec<T>) -> Result<Self> {
        let expected = TensorDesc::size_of(shape);
        if data.len() != expected {
            return Err(TensorError::LengthMismatch {
                expected,
                got: data.len(),
            });
        }

        Ok(Self {
            desc: TensorDesc::from(shape),
            buffer: Buffer::from_vec(data),
        })
    }

    pub(crate) fn from_parts(desc: TensorDesc, buffer: Buffer<T>) -> Self {
        debug_assert_eq!(desc.num_elements(), buffer.len());
        Self { desc, buffer }
    }

    pub fn size(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn rank(&self) -> usize {
        self.desc.ndim()
    }

    pub fn shape(&self) -> &[usize] {
        self.desc.dims()
    }

    pub fn desc(&self) -> &TensorDesc {
        &self.desc
    }

    /// Shape rendered as `{d0, d1, ...}`.
    pub fn shape_string(&self) -> String {
        self.desc.to_brace_string()
    }

    /// Flat offset of an N-dimensional coordinate.
    pub fn index(&self, coords: &[usize]) -> Result<usize> {
        self.desc.flat_index(coords)
    }

    /// Element at a flat index. Negative indices count back from the end.
    pub fn get(&self, index: isize) -> Result<&T> {
        let i = Buffer::<T>::resolve_index(index, self.size())?;
        self.buffer.get(i)
    }

    pub fn get_mut(&mut self, index: isize) -> Result<&mut T> {
        let i = Buffer::<T>::resolve_index(index, self.size())?;
        self.buffer.get_mut(i)
    }

    pub fn set(&mut self, index: isize, value: T) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Element at an N-dimensional coordinate. No negative aliasing here.
    pub fn get_at(&self, coords: &[usize]) -> Result<&T> {
        let i = self.index(coords)?;
        self.buffer.get(i)
    }

    pub fn get_at_mut(&mut self, coords: &[usize]) -> Result<&mut T> {
        let i = self.index(coords)?;
        self.buffer.get_mut(i)
    }

    pub fn set_at(&mut self, coords: &[usize], value: T) -> Result<()> {
        *self.get_at_mut(coords)? = value;
        Ok(())
    }

    /// Moves the contents out, leaving `self` as the empty tensor.
    pub fn take(&mut self) -> Self {
        Self {
            desc: std::mem::take(&mut self.desc),
            buffer: self.buffer.take(),
        }
    }

    /// Replaces this tensor with the contents of `other`, which is left empty.
    pub fn move_from(&mut self, other: &mut Self) {
        log::debug!(
            "moving tensor {} into tensor {}",
            other.shape_string(),
            self.shape_string()
        );
        // Assignment drops the old buffer only once the new one is in place
        *self = other.take();
    }

    pub fn as_slice(&self) -> &[T] {
        self.buffer.as_slice()
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.buffer.as_mut_slice()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.buffer.into_vec()
    }
}

impl<T: Clone> Tensor<T> {
    /// Overwrites every element with `value`.
    pub fn fill_with(&mut self, value: T) {
        self.buffer.as_mut_slice().fill(value);
    }

    /// Replaces this tensor with a deep copy of `other`.
    pub fn copy_from(&mut self, other: &Self) {
        log::debug!(
            "copying tensor {} into tensor {}",
            other.shape_string(),
            self.shape_string()
        );
        *self = other.clone();
    }
}

impl<T: Clone + Zero> Tensor<T> {
    /// Rank-1 tensor of `size` zeros.
    pub fn with_size(size: usize) -> Self {
        Self::from_parts(TensorDesc::new(vec![size]), Buffer::allocate(size))
    }

    /// Zero-filled tensor of the given shape. The empty shape gives the empty tensor.
    pub fn from_shape(shape: &[usize]) -> Self {
        let desc = TensorDesc::from(shape);
        let buffer = Buffer::allocate(desc.num_elements());
        Self::from_parts(desc, buffer)
    }
}

impl<T: Clone + One> Tensor<T> {
    pub fn ones(shape: &[usize]) -> Self {
        let desc = TensorDesc::from(shape);
        let buffer = Buffer::from_vec(vec![T::one(); desc.num_elements()]);
        Self::from_parts(desc, buffer)
    }
}

impl<T: SampleUniform> Tensor<T> {
    /// Tensor filled with samples drawn uniformly from `[low, high)`.
    pub fn random_uniform<R: Rng + ?Sized>(
        shape: &[usize],
        low: T,
        high: T,
        rng: &mut R,
    ) -> Result<Self> {
        let dist = Uniform::new(low, high).map_err(|e| TensorError::InvalidRange(e.to_string()))?;
        let desc = TensorDesc::from(shape);
        let data: Vec<T> = (0..desc.num_elements())
            .map(|_| dist.sample(rng))
            .collect();
        Ok(Self::from_parts(desc, Buffer::from_vec(data)))
    }
}
