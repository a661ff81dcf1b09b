/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @Description  : 张量的原地运算（+=、-=、*=），优化器更新辅助状态与参数时使用，避免重复分配
 */

use super::arith::assert_same_shape;
use crate::errors::Operator;
use crate::tensor::Tensor;
use std::ops::{AddAssign, MulAssign, SubAssign};

impl<'a> AddAssign<&'a Tensor> for Tensor {
    fn add_assign(&mut self, other: &'a Tensor) {
        assert_same_shape(self, other, Operator::AddAssign);
        self.data += &other.data;
    }
}

impl AddAssign for Tensor {
    fn add_assign(&mut self, other: Tensor) {
        *self += &other;
    }
}

impl AddAssign<f32> for Tensor {
    fn add_assign(&mut self, scalar: f32) {
        self.data += scalar;
    }
}

impl<'a> SubAssign<&'a Tensor> for Tensor {
    fn sub_assign(&mut self, other: &'a Tensor) {
        assert_same_shape(self, other, Operator::SubAssign);
        self.data -= &other.data;
    }
}

impl SubAssign for Tensor {
    fn sub_assign(&mut self, other: Tensor) {
        *self -= &other;
    }
}

impl SubAssign<f32> for Tensor {
    fn sub_assign(&mut self, scalar: f32) {
        self.data -= scalar;
    }
}

impl<'a> MulAssign<&'a Tensor> for Tensor {
    fn mul_assign(&mut self, other: &'a Tensor) {
        assert_same_shape(self, other, Operator::MulAssign);
        self.data *= &other.data;
    }
}

impl MulAssign<f32> for Tensor {
    fn mul_assign(&mut self, scalar: f32) {
        self.data *= scalar;
    }
}
