use super::arith::assert_same_shape;
use crate::errors::Operator;
use crate::tensor::Tensor;
use std::cmp::PartialEq;

impl From<f32> for Tensor {
    /// 实现 From<f32> trait 用于将`f32`类型转换为形状为`[1]`的张量
    fn from(scalar: f32) -> Self {
        Tensor::new(&[scalar], &[1])
    }
}

impl PartialEq for Tensor {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl Tensor {
    /// 逐元素开平方
    pub fn sqrt(&self) -> Tensor {
        self.map(f32::sqrt)
    }

    /// 逐元素平方
    pub fn square(&self) -> Tensor {
        self.map(|x| x * x)
    }

    /// 对每个元素应用`f`，返回新张量
    pub fn map<F: Fn(f32) -> f32>(&self, f: F) -> Tensor {
        Tensor {
            data: self.data.mapv(f),
        }
    }

    /// 所有元素之和（纯数）
    pub fn sum(&self) -> f32 {
        self.data.sum()
    }

    /// 所有元素的均值（纯数）；空张量返回0
    pub fn mean(&self) -> f32 {
        if self.size() == 0 {
            0.
        } else {
            self.sum() / self.size() as f32
        }
    }

    /// 两个同形张量逐元素相乘后求和
    pub fn dot_sum(&self, other: &Tensor) -> f32 {
        assert_same_shape(self, other, Operator::Mul);
        (&self.data * &other.data).sum()
    }

    /// 实现矩阵乘法。只接受2阶张量，否则会触发panic。
    /// 需要保证前一个张量的列数（col）等于后一个张量的行数（row），否则也会触发panic。
    pub fn mat_mul(&self, other: &Tensor) -> Tensor {
        assert!(self.dimension() == 2, "输入的张量维度必须为2");
        assert!(other.dimension() == 2, "输入的张量维度必须为2");
        assert!(
            self.shape()[1] == other.shape()[0],
            "前一个张量的列数必须等于后一个张量的行数"
        );
        // 将动态维度数组转换为常量维度数组
        let self_data = self
            .data
            .view()
            .into_dimensionality::<ndarray::Ix2>()
            .expect("已检查为2阶");
        let other_data = other
            .data
            .view()
            .into_dimensionality::<ndarray::Ix2>()
            .expect("已检查为2阶");
        Tensor {
            data: self_data.dot(&other_data).into_dyn(),
        }
    }

    /// 2阶张量的转置
    pub fn transpose(&self) -> Tensor {
        assert!(self.dimension() == 2, "输入的张量维度必须为2");
        Tensor {
            data: self.data.t().to_owned(),
        }
    }

    /// 改变形状（元素总数必须不变）
    pub fn reshape(&self, shape: &[usize]) -> Tensor {
        Tensor::new(&self.to_vec(), shape)
    }
}
