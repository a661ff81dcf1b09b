/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @Description  : Nesterov 加速动量。
 *                 与动量法的速度更新完全相同，区别只在于梯度是在“前瞻点”（参数 + γ·v）上求得的：
 *                 训练循环会拷贝一份模型、把参数替换为前瞻点后再调用`train_step`，
 *                 随后丢弃该副本，真实模型只通过Δ被修改。
 */

use super::base::UpdateRule;
use super::momentum::Momentum;
use super::DEFAULT_GAMMA;
use crate::errors::{InputError, OptimError};
use crate::model::{Grads, Params};
use crate::tensor::Tensor;

/// Nesterov 优化器
#[derive(Debug, Clone, PartialEq)]
pub struct Nesterov {
    momentum: Momentum,
}

impl Nesterov {
    pub fn new(gamma: f32) -> Self {
        Self {
            momentum: Momentum::new(gamma),
        }
    }

    pub const fn gamma(&self) -> f32 {
        self.momentum.gamma()
    }

    /// 获取指定参数的速度
    pub fn velocity(&self, key: &str) -> Option<&Tensor> {
        self.momentum.velocity(key)
    }
}

impl Default for Nesterov {
    fn default() -> Self {
        Self::new(DEFAULT_GAMMA)
    }
}

impl UpdateRule for Nesterov {
    fn name(&self) -> &'static str {
        "nesterov"
    }

    fn validate(&self) -> Result<(), OptimError> {
        self.momentum.validate()
    }

    fn init_state(&mut self, params: &Params) {
        self.momentum.init_state(params);
    }

    fn compute_deltas(&mut self, grads: &Grads, lr: f32) -> Result<Grads, OptimError> {
        self.momentum.compute_deltas(grads, lr)
    }

    /// 前瞻参数：每个参数加上γ·v。速度尚未初始化时视为全零
    fn look_ahead(&self, params: &Params) -> Result<Option<Params>, OptimError> {
        let velocity = self.momentum.velocity_state();
        if velocity.is_empty() {
            return Ok(Some(params.clone()));
        }
        let mut ahead = Params::new();
        for (key, param) in params {
            let v = velocity
                .get(key)
                .ok_or_else(|| InputError::KeyMismatch { key: key.clone() })?;
            if !v.is_same_shape(param) {
                return Err(InputError::ShapeMismatch {
                    key: key.clone(),
                    expected: param.shape().to_vec(),
                    got: v.shape().to_vec(),
                }
                .into());
            }
            ahead.insert(key.clone(), param + &(self.gamma() * v));
        }
        Ok(Some(ahead))
    }

    fn reset(&mut self) {
        self.momentum.reset();
    }
}
