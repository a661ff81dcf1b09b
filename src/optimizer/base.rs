/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-18
 * @Description  : 优化器核心 trait 与按变体分发的优化器枚举
 *
 * 六种更新规则共享同一份契约：
 * 输入梯度映射与学习率 → 输出每个参数的增量Δ，并原地更新自身的辅助状态。
 * 训练循环统一执行 `参数 ← 参数 − Δ`，因此只需要一份小批量循环。
 */

use enum_dispatch::enum_dispatch;

use super::{Adagrad, Adam, Momentum, Nesterov, RmsProp, Sgd};
use crate::errors::OptimError;
use crate::model::{Grads, Params};

/// 更新规则 trait
///
/// # 使用示例
/// ```ignore
/// let mut optimizer = Optimizer::from(Adam::default());
/// optimizer.init_state(model.params());
///
/// let (grads, loss) = model.train_step(&x, &y)?;
/// let deltas = optimizer.compute_deltas(&grads, 0.01)?;
/// for (key, delta) in &deltas {
///     *model.params_mut().get_mut(key).unwrap() -= delta;
/// }
/// ```
#[enum_dispatch]
pub trait UpdateRule {
    /// 变体名称（用于日志）
    fn name(&self) -> &'static str;

    /// 检查超参数：衰减系数须在[0, 1)内，ε须为有限正数。
    /// 训练开始前调用，避免非法取值在张量运算中触发panic
    fn validate(&self) -> Result<(), OptimError> {
        Ok(())
    }

    /// 按参数形状把辅助状态全部清零（Adam 同时把时间步归零）。
    /// 每次训练开始前调用一次
    fn init_state(&mut self, params: &Params);

    /// 由梯度计算每个参数的增量Δ，同时原地更新辅助状态。
    /// 返回的映射与`grads`键集合相同；键或形状与辅助状态不符时返回`InvalidInput`
    fn compute_deltas(&mut self, grads: &Grads, lr: f32) -> Result<Grads, OptimError>;

    /// 计算梯度前的“前瞻”参数。仅 Nesterov 返回`Some(参数 + γ·v)`，
    /// 训练循环会在模型的临时副本上用它来求梯度
    fn look_ahead(&self, _params: &Params) -> Result<Option<Params>, OptimError> {
        Ok(None)
    }

    /// 清除累积状态（速度、缓存、矩估计、时间步）
    fn reset(&mut self);
}

/// 所有优化器变体
#[enum_dispatch(UpdateRule)]
#[derive(Debug, Clone)]
pub enum Optimizer {
    Sgd(Sgd),
    Momentum(Momentum),
    Nesterov(Nesterov),
    Adagrad(Adagrad),
    RmsProp(RmsProp),
    Adam(Adam),
}

impl Default for Optimizer {
    fn default() -> Self {
        Self::Sgd(Sgd)
    }
}
