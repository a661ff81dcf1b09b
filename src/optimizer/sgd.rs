/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @Description  : 朴素随机梯度下降：Δ = α·g
 */

use super::base::UpdateRule;
use crate::errors::OptimError;
use crate::model::{Grads, Params};

/// SGD 优化器，无辅助状态
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Sgd;

impl UpdateRule for Sgd {
    fn name(&self) -> &'static str {
        "sgd"
    }

    fn init_state(&mut self, _params: &Params) {}

    fn compute_deltas(&mut self, grads: &Grads, lr: f32) -> Result<Grads, OptimError> {
        Ok(grads
            .iter()
            .map(|(key, grad)| (key.clone(), lr * grad))
            .collect())
    }

    fn reset(&mut self) {
        // SGD 无状态
    }
}
