use num_traits::{Num, NumCast, Zero};

use crate::{
    algorithm::merge_sort::merge_sort,
    tensor::Tensor,
    utils::error::{Result, TensorError},
};

impl<T: Copy + Zero> Tensor<T> {
    pub fn sum(&self) -> T {
        self.iter().fold(T::zero(), |acc, &x| acc + x)
    }
}

impl<T: Copy + PartialOrd> Tensor<T> {
    pub fn max(&self) -> Result<T> {
        self.scan("max", |candidate, best| candidate > best)
    }

    pub fn min(&self) -> Result<T> {
        self.scan("min", |candidate, best| candidate < best)
    }

    // Seeded with the first element, replaced whenever `better` holds
    fn scan(&self, op: &'static str, better: impl Fn(&T, &T) -> bool) -> Result<T> {
        let (&first, rest) = self
            .as_slice()
            .split_first()
            .ok_or(TensorError::EmptyTensor { op })?;

        Ok(rest
            .iter()
            .fold(first, |best, &x| if better(&x, &best) { x } else { best }))
    }

    /// True when the elements are monotonic in either direction.
    ///
    /// The direction is fixed by the first pair of unequal neighbours; tensors
    /// with fewer than two elements, or with all elements equal, are sorted.
    /// A pair that cannot be ordered (a NaN neighbour) makes the tensor unsorted.
    pub fn is_sorted(&self) -> bool {
        let mut ascending: Option<bool> = None;
        for pair in self.as_slice().windows(2) {
            let step = if pair[0] < pair[1] {
                true
            } else if pair[0] > pair[1] {
                false
            } else if pair[0] == pair[1] {
                continue;
            } else {
                return false;
            };

            match ascending {
                None => ascending = Some(step),
                Some(dir) if dir != step => return false,
                Some(_) => {}
            }
        }
        true
    }
}

impl<T: Copy + Num + NumCast + PartialOrd> Tensor<T> {
    /// `sum() / size()`, in the element type's own division.
    pub fn mean(&self) -> Result<T> {
        if self.is_empty() {
            return Err(TensorError::EmptyTensor { op: "mean" });
        }
        let count = <T as NumCast>::from(self.size()).ok_or_else(|| {
            TensorError::InvalidRange(format!(
                "element count {} does not fit the element type",
                self.size()
            ))
        })?;
        Ok(self.sum() / count)
    }

    /// Middle element of an already sorted tensor, or the average of the two
    /// middle elements when the size is even.
    pub fn median(&self) -> Result<T> {
        if self.is_empty() {
            return Err(TensorError::EmptyTensor { op: "median" });
        }
        if !self.is_sorted() {
            return Err(TensorError::NotSorted);
        }

        let data = self.as_slice();
        let n = data.len();
        if n % 2 == 0 {
            Ok(midpoint(data[n / 2 - 1], data[n / 2]))
        } else {
            Ok(data[(n - 1) / 2])
        }
    }
}

// (a + b) / 2 truncated toward zero, without forming a + b when it could overflow
fn midpoint<T: Copy + Num + PartialOrd>(a: T, b: T) -> T {
    let two = T::one() + T::one();
    let zero = T::zero();
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };

    if lo < zero && hi >= zero {
        // signs differ (or hi is zero), the sum stays in range
        (lo + hi) / two
    } else if lo >= zero {
        lo + (hi - lo) / two
    } else {
        hi - (hi - lo) / two
    }
}

impl<T: Clone + PartialOrd> Tensor<T> {
    /// Every value that reaches the highest frequency, in ascending order.
    pub fn mode(&self) -> Vec<T> {
        let mut values = self.as_slice().to_vec();
        merge_sort(&mut values, false);

        // (value, count) runs over the sorted copy
        let mut runs: Vec<(T, usize)> = Vec::new();
        for v in values {
            match runs.last_mut() {
                Some((last, count)) if *last == v => *count += 1,
                _ => runs.push((v, 1)),
            }
        }

        let max = runs.iter().map(|(_, c)| *c).max().unwrap_or(0);
        runs.into_iter()
            .filter(|(_, c)| *c == max)
            .map(|(v, _)| v)
            .collect()
    }
}
