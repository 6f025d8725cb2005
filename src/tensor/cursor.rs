use crate::tensor::tensor::Tensor;

/// Bidirectional position over a tensor's elements in flat storage order.
///
/// A cursor ranges over `0..=size`; the position `size` is the end and holds no
/// element. Two cursors are equal when they point at the same storage location.
pub struct Cursor<'a, T> {
    data: &'a [T],
    pos: usize,
}

impl<'a, T> Cursor<'a, T> {
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_end(&self) -> bool {
        self.pos == self.data.len()
    }

    /// Element under the cursor, `None` at the end position.
    pub fn get(&self) -> Option<&'a T> {
        self.data.get(self.pos)
    }

    /// Steps forward. Returns false, without moving, when already at the end.
    pub fn move_next(&mut self) -> bool {
        if self.is_end() {
            return false;
        }
        self.pos += 1;
        true
    }

    /// Steps backward. Returns false, without moving, when at the first element.
    pub fn move_prev(&mut self) -> bool {
        if self.pos == 0 {
            return false;
        }
        self.pos -= 1;
        true
    }

    fn location(&self) -> *const T {
        self.data.as_ptr().wrapping_add(self.pos)
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data,
            pos: self.pos,
        }
    }
}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.location(), other.location())
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> Tensor<T> {
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor {
            data: self.as_slice(),
            pos: 0,
        }
    }

    pub fn end(&self) -> Cursor<'_, T> {
        let data = self.as_slice();
        Cursor {
            data,
            pos: data.len(),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }
}

impl<'a, T> IntoIterator for &'a Tensor<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Tensor<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for Tensor<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}
