use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use num_traits::Zero;

use crate::{
    tensor::{Buffer, Tensor},
    utils::error::{Result, TensorError},
};

impl<T: Copy> Tensor<T> {
    fn map_scalar(&self, f: impl Fn(T) -> T) -> Self {
        let data: Vec<T> = self.iter().map(|&x| f(x)).collect();
        Tensor::from_parts(self.desc().clone(), Buffer::from_vec(data))
    }

    fn check_same_shape(&self, other: &Self) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(TensorError::ShapeMismatch {
                lhs: self.shape().to_vec(),
                rhs: other.shape().to_vec(),
            });
        }
        Ok(())
    }

    fn zip_with(&self, other: &Self, f: impl Fn(T, T) -> T) -> Result<Self> {
        self.check_same_shape(other)?;
        let data: Vec<T> = self
            .iter()
            .zip(other.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Tensor::from_parts(self.desc().clone(), Buffer::from_vec(data)))
    }

    fn zip_assign(&mut self, other: &Self, f: impl Fn(T, T) -> T) -> Result<()> {
        self.check_same_shape(other)?;
        for (a, &b) in self.iter_mut().zip(other.iter()) {
            *a = f(*a, b);
        }
        Ok(())
    }
}

impl<T: Copy + Add<Output = T>> Tensor<T> {
    pub fn add_scalar(&self, rhs: T) -> Self {
        self.map_scalar(|x| x + rhs)
    }

    /// Elementwise sum. Both tensors must have the same shape.
    pub fn try_add(&self, rhs: &Self) -> Result<Self> {
        self.zip_with(rhs, |a, b| a + b)
    }

    pub fn try_add_assign(&mut self, rhs: &Self) -> Result<()> {
        self.zip_assign(rhs, |a, b| a + b)
    }
}

impl<T: Copy + Sub<Output = T>> Tensor<T> {
    pub fn sub_scalar(&self, rhs: T) -> Self {
        self.map_scalar(|x| x - rhs)
    }

    /// Elementwise difference. Both tensors must have the same shape.
    pub fn try_sub(&self, rhs: &Self) -> Result<Self> {
        self.zip_with(rhs, |a, b| a - b)
    }

    pub fn try_sub_assign(&mut self, rhs: &Self) -> Result<()> {
        self.zip_assign(rhs, |a, b| a - b)
    }
}

impl<T: Copy + Mul<Output = T>> Tensor<T> {
    pub fn mul_scalar(&self, rhs: T) -> Self {
        self.map_scalar(|x| x * rhs)
    }
}

impl<T: Copy + Zero + Mul<Output = T>> Tensor<T> {
    /// Inner product of two rank-1 tensors of equal size.
    pub fn dot(&self, rhs: &Self) -> Result<T> {
        if self.rank() != 1 || rhs.rank() != 1 || self.size() != rhs.size() {
            return Err(TensorError::DotMismatch {
                lhs: self.shape().to_vec(),
                rhs: rhs.shape().to_vec(),
            });
        }

        Ok(self
            .iter()
            .zip(rhs.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b))
    }
}

// Scalar operators. Tensor-tensor arithmetic can fail, so it stays on the try_* methods.
macro_rules! impl_scalar_op {
    ($op:ident, $method:ident, $assign_op:ident, $assign_method:ident, $named:ident) => {
        impl<T: Copy + $op<Output = T>> $op<T> for &Tensor<T> {
            type Output = Tensor<T>;

            fn $method(self, rhs: T) -> Tensor<T> {
                self.$named(rhs)
            }
        }

        impl<T: Copy + $op<Output = T>> $op<T> for Tensor<T> {
            type Output = Tensor<T>;

            fn $method(self, rhs: T) -> Tensor<T> {
                self.$named(rhs)
            }
        }

        impl<T: Copy + $op<Output = T>> $assign_op<T> for Tensor<T> {
            fn $assign_method(&mut self, rhs: T) {
                for x in self.iter_mut() {
                    *x = $op::$method(*x, rhs);
                }
            }
        }
    };
}

impl_scalar_op!(Add, add, AddAssign, add_assign, add_scalar);
impl_scalar_op!(Sub, sub, SubAssign, sub_assign, sub_scalar);
impl_scalar_op!(Mul, mul, MulAssign, mul_assign, mul_scalar);
