/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @Description  : Adagrad：c ← c + g²；Δ = α·g / (√c + ε)
 */

use super::base::UpdateRule;
use super::config::check_eps;
use super::state::ParamState;
use super::EPS;
use crate::errors::OptimError;
use crate::model::{Grads, Params};
use crate::tensor::Tensor;

/// Adagrad 优化器
#[derive(Debug, Clone, PartialEq)]
pub struct Adagrad {
    /// 数值稳定项
    eps: f32,
    /// 平方梯度的累加缓存
    cache: ParamState,
}

impl Adagrad {
    pub fn new(eps: f32) -> Self {
        Self {
            eps,
            cache: ParamState::default(),
        }
    }

    pub const fn eps(&self) -> f32 {
        self.eps
    }

    /// 获取指定参数的平方梯度缓存
    pub fn cache(&self, key: &str) -> Option<&Tensor> {
        self.cache.get(key)
    }
}

impl Default for Adagrad {
    fn default() -> Self {
        Self::new(EPS)
    }
}

impl UpdateRule for Adagrad {
    fn name(&self) -> &'static str {
        "adagrad"
    }

    fn validate(&self) -> Result<(), OptimError> {
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
            *c += &grad.square();
            let denominator = c.sqrt() + self.eps;
            deltas.insert(key.clone(), lr * grad / &denominator);
        }
        Ok(deltas)
    }

    fn reset(&mut self) {
        self.cache.clear();
    }
}
