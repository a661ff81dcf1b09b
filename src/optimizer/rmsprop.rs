/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @Description  : RMSProp：c ← γ·c + (1−γ)·g²（指数滑动平均）；Δ = α·g / (√c + ε)
 */

use super::base::UpdateRule;
use super::config::{check_decay, check_eps};
use super::state::ParamState;
use super::{DEFAULT_GAMMA, EPS};
use crate::errors::OptimError;
use crate::model::{Grads, Params};
use crate::tensor::Tensor;
use crate::utils::exp_running_avg;

/// RMSProp 优化器
#[derive(Debug, Clone, PartialEq)]
pub struct RmsProp {
    /// 滑动平均的衰减系数γ
    gamma: f32,
    /// 数值稳定项
    eps: f32,
    /// 平方梯度的滑动平均
    cache: ParamState,
}

impl RmsProp {
    pub fn new(gamma: f32, eps: f32) -> Self {
        Self {
            gamma,
            eps,
            cache: ParamState::default(),
        }
    }

    pub const fn gamma(&self) -> f32 {
        self.gamma
    }

    pub const fn eps(&self) -> f32 {
        self.eps
    }

    /// 获取指定参数的平方梯度滑动平均
    pub fn cache(&self, key: &str) -> Option<&Tensor> {
        self.cache.get(key)
    }
}

impl Default for RmsProp {
    fn default() -> Self {
        Self::new(DEFAULT_GAMMA, EPS)
    }
}

impl UpdateRule for RmsProp {
    fn name(&self) -> &'static str {
        "rmsprop"
    }

    fn validate(&self) -> Result<(), OptimError> {
        check_decay("gamma", self.gamma)?;
        check_eps(self.eps)
    }

    fn init_state(&mut self, params: &Params) {
        self.cache = ParamState::zeros_like(params);
    }

    fn compute_deltas(&mut self, grads: &Grads, lr: f32) -> Result<Grads, OptimError> {
        self.cache.ensure_aligned(grads)?;

        let mut deltas = Grads::new();
        for (key, grad) in grads {
            let c = self.cache.buffer_mut(key)?;
            *c = exp_running_avg(c, &grad.square(), self.gamma);
            let denominator = c.sqrt() + self.eps;
            deltas.insert(key.clone(), lr * grad / &denominator);
        }
        Ok(deltas)
    }

    fn reset(&mut self) {
        self.cache.clear();
    }
}
