use num_traits::Zero;

use crate::utils::error::{Result, TensorError};

/// Owned contiguous element storage. Never resized in place; a different length
/// means a different buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct Buffer<T> {
    data: Box<[T]>,
}

impl<T: Clone + Zero> Buffer<T> {
    /// Zero-filled storage for `count` elements. `count == 0` gives an empty buffer.
    pub fn allocate(count: usize) -> Self {
        log::trace!("allocating buffer of {} elements", count);
        Self {
            data: vec![T::zero(); count].into_boxed_slice(),
        }
    }
}

impl<T> Buffer<T> {
    pub fn empty() -> Self {
        Self {
            data: Box::default(),
        }
    }

    pub fn from_vec(v: Vec<T>) -> Self {
        Self {
            data: v.into_boxed_slice(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Takes ownership of the storage in O(1), leaving `self` empty.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Drops the storage. Calling it on an empty buffer does nothing.
    pub fn release(&mut self) {
        if !self.data.is_empty() {
            self.data = Box::default();
        }
    }

    pub fn get(&self, idx: usize) -> Result<&T> {
        let size = self.data.len();
        self.data
            .get(idx)
            .ok_or(TensorError::IndexOutOfRange {
                index: isize::try_from(idx).unwrap_or(isize::MAX),
                size,
            })
    }

    pub fn get_mut(&mut self, idx: usize) -> Result<&mut T> {
        let size = self.data.len();
        self.data
            .get_mut(idx)
            .ok_or(TensorError::IndexOutOfRange {
                index: isize::try_from(idx).unwrap_or(isize::MAX),
                size,
            })
    }

    pub fn set(&mut self, idx: usize, value: T) -> Result<()> {
        *self.get_mut(idx)? = value;
        Ok(())
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data.into_vec()
    }

    /// Maps a signed flat index onto `[0, len)`. A negative index `-k` counts from
    /// the end, so `-1` is the last element.
    pub fn resolve_index(index: isize, len: usize) -> Result<usize> {
        let resolved = if index < 0 {
            len.checked_sub(index.unsigned_abs())
        } else {
            Some(index as usize)
        };

        match resolved {
            Some(i) if i < len => Ok(i),
            _ => Err(TensorError::IndexOutOfRange { index, size: len }),
        }
    }
}

impl<T> Default for Buffer<T> {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_zeroed() {
        let buf = Buffer::<i32>::allocate(5);
        assert_eq!(buf.len(), 5);
        assert!(buf.as_slice().iter().all(|&x| x == 0));

        let empty = Buffer::<f64>::allocate(0);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut a = Buffer::from_vec(vec![1, 2, 3]);
        let b = a.clone();
        a.set(0, 10).unwrap();
        assert_eq!(b.as_slice(), &[1, 2, 3]);
        assert_eq!(a.as_slice(), &[10, 2, 3]);
    }

    #[test]
    fn test_take_leaves_source_empty() {
        let mut a = Buffer::from_vec(vec![4.0, 5.0]);
        let ptr = a.as_slice().as_ptr();
        let b = a.take();
        assert!(a.is_empty());
        assert_eq!(b.as_slice().as_ptr(), ptr);
        assert_eq!(b.as_slice(), &[4.0, 5.0]);
    }

    #[test]
    fn test_release_is_idempotent() {
        let mut a = Buffer::from_vec(vec![1u8, 2]);
        a.release();
        assert!(a.is_empty());
        a.release();
        assert!(a.is_empty());
    }

    #[test]
    fn test_get_out_of_range() {
        let buf = Buffer::from_vec(vec![1, 2, 3]);
        assert_eq!(buf.get(2), Ok(&3));
        assert_eq!(
            buf.get(3),
            Err(TensorError::IndexOutOfRange { index: 3, size: 3 })
        );
    }

    #[test]
    fn test_huge_index_reports_saturated() {
        let mut buf = Buffer::from_vec(vec![1, 2, 3]);
        let err = TensorError::IndexOutOfRange {
            index: isize::MAX,
            size: 3,
        };
        assert_eq!(buf.get(usize::MAX), Err(err.clone()));
        assert_eq!(buf.set(usize::MAX, 0), Err(err));
    }

    #[test]
    fn test_resolve_negative_index() {
        assert_eq!(Buffer::<i32>::resolve_index(-1, 10), Ok(9));
        assert_eq!(Buffer::<i32>::resolve_index(-10, 10), Ok(0));
        assert_eq!(Buffer::<i32>::resolve_index(4, 10), Ok(4));
        assert!(Buffer::<i32>::resolve_index(-11, 10).is_err());
        assert!(Buffer::<i32>::resolve_index(10, 10).is_err());
        assert!(Buffer::<i32>::resolve_index(-1, 0).is_err());
    }
}
