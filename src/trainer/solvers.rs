/*
 * @Author       : 老董
 * @Date         : 2026-10-15
 * @Description  : 每种更新规则一个入口函数，签名一致：
 *                 (模型, 训练特征, 训练标签, 可选验证集, 训练配置) → 训练好的模型
 */

use super::{TrainConfig, Trainer};
use crate::data::Dataset;
use crate::errors::OptimError;
use crate::model::Model;
use crate::optimizer::{Adagrad, Adam, Momentum, Nesterov, Optimizer, RmsProp, Sgd};
use crate::tensor::Tensor;

/// 验证集：（特征，标签）
pub type Validation<'a> = Option<(&'a Tensor, &'a [usize])>;

/// 用给定的优化器训练模型
pub fn solve<M>(
    optimizer: Optimizer,
    model: M,
    x_train: &Tensor,
    y_train: &[usize],
    val: Validation<'_>,
    config: &TrainConfig,
) -> Result<M, OptimError>
where
    M: Model + Clone,
{
    let train = Dataset::from_parts(x_train, y_train)?;
    let val = val
        .map(|(x_val, y_val)| Dataset::from_parts(x_val, y_val))
        .transpose()?;
    Trainer::new(optimizer, *config).fit(model, &train, val.as_ref())
}

pub fn sgd<M: Model + Clone>(
    model: M,
    x_train: &Tensor,
    y_train: &[usize],
    val: Validation<'_>,
    config: &TrainConfig,
) -> Result<M, OptimError> {
    solve(Sgd.into(), model, x_train, y_train, val, config)
}

pub fn momentum<M: Model + Clone>(
    model: M,
    x_train: &Tensor,
    y_train: &[usize],
    val: Validation<'_>,
    config: &TrainConfig,
) -> Result<M, OptimError> {
    solve(Momentum::default().into(), model, x_train, y_train, val, config)
}

pub fn nesterov<M: Model + Clone>(
    model: M,
    x_train: &Tensor,
    y_train: &[usize],
    val: Validation<'_>,
    config: &TrainConfig,
) -> Result<M, OptimError> {
    solve(Nesterov::default().into(), model, x_train, y_train, val, config)
}

pub fn adagrad<M: Model + Clone>(
    model: M,
    x_train: &Tensor,
    y_train: &[usize],
    val: Validation<'_>,
    config: &TrainConfig,
) -> Result<M, OptimError> {
    solve(Adagrad::default().into(), model, x_train, y_train, val, config)
}

pub fn rmsprop<M: Model + Clone>(
    model: M,
    x_train: &Tensor,
    y_train: &[usize],
    val: Validation<'_>,
    config: &TrainConfig,
) -> Result<M, OptimError> {
    solve(RmsProp::default().into(), model, x_train, y_train, val, config)
}

pub fn adam<M: Model + Clone>(
    model: M,
    x_train: &Tensor,
    y_train: &[usize],
    val: Validation<'_>,
    config: &TrainConfig,
) -> Result<M, OptimError> {
    solve(Adam::default().into(), model, x_train, y_train, val, config)
}
