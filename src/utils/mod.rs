//! # 常用接口模块
//!
//! 本模块提供训练循环与各优化器共用的一些小工具

#[cfg(test)]
mod tests;


use crate::tensor::Tensor;

/// 分类准确率：预测标签与真实标签逐个相等的比例。
/// 两者长度不同时只比较公共前缀，但分母取真实标签数；真实标签为空时返回0
pub fn accuracy(y_true: &[usize], y_pred: &[usize]) -> f32 {
    if y_true.is_empty() {
        return 0.;
    }
    let hits = y_true
        .iter()
        .zip(y_pred)
        .filter(|(truth, pred)| truth == pred)
        .count();
    hits as f32 / y_true.len() as f32
}

/// 指数滑动平均：`gamma * running + (1 - gamma) * new`
pub fn exp_running_avg(running: &Tensor, new: &Tensor, gamma: f32) -> Tensor {
    gamma * running + (1. - gamma) * new
}
