/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-18
 * @Description  : Adam 优化器实现
 *
 * Adam: Adaptive Moment Estimation
 * - m = β1 * m + (1 - β1) * g
 * - r = β2 * r + (1 - β2) * g²
 * - m_hat = m / (1 - β1^t)，r_hat = r / (1 - β2^t)
 * - Δ = α * m_hat / (√r_hat + ε)
 */

use super::base::UpdateRule;
use super::config::{check_decay, check_eps};
use super::state::ParamState;
use super::{DEFAULT_BETA1, DEFAULT_BETA2, EPS};
use crate::errors::OptimError;
use crate::model::{Grads, Params};
use crate::tensor::Tensor;
use crate::utils::exp_running_avg;

/// Adam优化器
#[derive(Debug, Clone, PartialEq)]
pub struct Adam {
    /// β1 (一阶矩衰减)
    beta1: f32,
    /// β2 (二阶矩衰减)
    beta2: f32,
    /// 数值稳定项
    eps: f32,
    /// 一阶矩估计
    m: ParamState,
    /// 二阶矩估计
    r: ParamState,
    /// 时间步（从1开始计数，每次`compute_deltas`加一）
    t: usize,
}

impl Adam {
    /// 创建带完整配置的 Adam 优化器
    pub fn new(beta1: f32, beta2: f32, eps: f32) -> Self {
        Self {
            beta1,
            beta2,
            eps,
            m: ParamState::default(),
            r: ParamState::default(),
            t: 0,
        }
    }

    pub const fn betas(&self) -> (f32, f32) {
        (self.beta1, self.beta2)
    }

    pub const fn eps(&self) -> f32 {
        self.eps
    }

    /// 获取指定参数的（一阶矩，二阶矩）
    ///
    /// 用于调试和可视化优化过程
    pub fn moments(&self, key: &str) -> Option<(&Tensor, &Tensor)> {
        Some((self.m.get(key)?, self.r.get(key)?))
    }

    /// 获取当前时间步
    pub const fn timestep(&self) -> usize {
        self.t
    }
}

impl Default for Adam {
    fn default() -> Self {
        Self::new(DEFAULT_BETA1, DEFAULT_BETA2, EPS)
    }
}

impl UpdateRule for Adam {
    fn name(&self) -> &'static str {
        "adam"
    }

    fn validate(&self) -> Result<(), OptimError> {
        check_decay("beta1", self.beta1)?;
        check_decay("beta2", self.beta2)?;
        check_eps(self.eps)
    }

    fn init_state(&mut self, params: &Params) {
        self.m = ParamState::zeros_like(params);
        self.r = ParamState::zeros_like(params);
        self.t = 0;
    }

    fn compute_deltas(&mut self, grads: &Grads, lr: f32) -> Result<Grads, OptimError> {
        self.m.ensure_aligned(grads)?;
        self.r.ensure_aligned(grads)?;
        self.t += 1;

        let m_correction = bias_correction(self.beta1, self.t);
        let r_correction = bias_correction(self.beta2, self.t);

        let mut deltas = Grads::new();
        for (key, grad) in grads {
            let m = self.m.buffer_mut(key)?;
            *m = exp_running_avg(m, grad, self.beta1);
            let m_hat = &*m / m_correction;

            let r = self.r.buffer_mut(key)?;
            *r = exp_running_avg(r, &grad.square(), self.beta2);
            let r_hat = &*r / r_correction;

            let denominator = r_hat.sqrt() + self.eps;
            deltas.insert(key.clone(), lr * &m_hat / &denominator);
        }
        Ok(deltas)
    }

    fn reset(&mut self) {
        self.m.clear();
        self.r.clear();
        self.t = 0;
    }
}

/// 偏差修正系数 1 − βᵗ。t 超出 i32 范围时按 i32::MAX 计（此时βᵗ已为0）
pub(super) fn bias_correction(beta: f32, t: usize) -> f32 {
    1. - beta.powi(i32::try_from(t).unwrap_or(i32::MAX))
}
