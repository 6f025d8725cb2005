use crate::{algorithm::merge_sort::merge_sort, tensor::Tensor};

impl<T: Clone + PartialOrd> Tensor<T> {
    /// Sorts the flat buffer in place with merge sort; descending when `reverse` is set.
    pub fn sort(&mut self, reverse: bool) {
        log::trace!(
            "merge sort over {} elements (reverse: {})",
            self.size(),
            reverse
        );
        merge_sort(self.as_mut_slice(), reverse);
    }
}

impl<T> Tensor<T> {
    /// Reverses the flat element order in place.
    pub fn reverse(&mut self) {
        let data = self.as_mut_slice();
        let n = data.len();
        for i in 0..n / 2 {
            data.swap(i, n - 1 - i);
        }
    }
}
