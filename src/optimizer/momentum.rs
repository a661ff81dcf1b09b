/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @Description  : 动量法：v ← γ·v + α·g；Δ = v
 */

use super::base::UpdateRule;
use super::config::check_decay;
use super::state::ParamState;
use super::DEFAULT_GAMMA;
use crate::errors::OptimError;
use crate::model::{Grads, Params};
use crate::tensor::Tensor;

/// Momentum 优化器
#[derive(Debug, Clone, PartialEq)]
pub struct Momentum {
    /// 速度衰减系数γ
    gamma: f32,
    /// 速度v（按参数名索引）
    velocity: ParamState,
}

impl Momentum {
    pub fn new(gamma: f32) -> Self {
        Self {
            gamma,
            velocity: ParamState::default(),
        }
    }

    pub const fn gamma(&self) -> f32 {
        self.gamma
    }

    /// 获取指定参数的速度，用于调试和观察优化过程
    pub fn velocity(&self, key: &str) -> Option<&Tensor> {
        self.velocity.get(key)
    }

    pub(super) fn velocity_state(&self) -> &ParamState {
        &self.velocity
    }
}

impl Default for Momentum {
    fn default() -> Self {
        Self::new(DEFAULT_GAMMA)
    }
}

impl UpdateRule for Momentum {
    fn name(&self) -> &'static str {
        "momentum"
    }

    fn validate(&self) -> Result<(), OptimError> {
        check_decay("gamma", self.gamma)
    }

    fn init_state(&mut self, params: &Params) {
        self.velocity = ParamState::zeros_like(params);
    }

    fn compute_deltas(&mut self, grads: &Grads, lr: f32) -> Result<Grads, OptimError> {
        self.velocity.ensure_aligned(grads)?;

        let mut deltas = Grads::new();
        for (key, grad) in grads {
            let v = self.velocity.buffer_mut(key)?;
            *v *= self.gamma;
            *v += &(lr * grad);
            deltas.insert(key.clone(), v.clone());
        }
        Ok(deltas)
    }

    fn reset(&mut self) {
        self.velocity.clear();
    }
}
