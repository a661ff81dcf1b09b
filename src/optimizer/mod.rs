/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @Description  : 优化器模块：六种一阶更新规则及其共享契约
 *
 * | 变体      | 辅助状态             |
 * |-----------|----------------------|
 * | Sgd       | 无                   |
 * | Momentum  | 速度 v               |
 * | Nesterov  | 速度 v（前瞻求梯度） |
 * | Adagrad   | 平方梯度累加 c       |
 * | RmsProp   | 平方梯度滑动平均 c   |
 * | Adam      | 一阶矩 m、二阶矩 r、t |
 */

mod adagrad;
mod adam;
mod base;
mod config;
mod momentum;
mod nesterov;
mod rmsprop;
mod sgd;
mod state;

#[cfg(test)]
mod tests;

pub use adagrad::Adagrad;
pub use adam::Adam;
pub use base::{Optimizer, UpdateRule};
pub use config::OptimizerConfig;
pub use momentum::Momentum;
pub use nesterov::Nesterov;
pub use rmsprop::RmsProp;
pub use sgd::Sgd;
pub use state::ParamState;

/// 数值稳定项ε：加在平方根分母上，避免除零
pub const EPS: f32 = 1e-8;
/// 动量法、Nesterov 与 RMSProp 的默认衰减系数γ
pub const DEFAULT_GAMMA: f32 = 0.9;
/// Adam 一阶矩的默认衰减系数β1
pub const DEFAULT_BETA1: f32 = 0.9;
/// Adam 二阶矩的默认衰减系数β2
pub const DEFAULT_BETA2: f32 = 0.999;
