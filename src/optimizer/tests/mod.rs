/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @Description  : 优化器模块单元测试
 *
 * 测试按功能分组：
 * - state: 参数状态存储
 * - sgd / momentum / nesterov / adagrad / rmsprop / adam: 各更新规则
 * - config: 可序列化配置
 * - trait_tests: UpdateRule 通用行为
 */

mod adagrad;
mod config;
mod sgd;

use crate::model::Params;
use crate::tensor::Tensor;

/// 由（名称，数据，形状）构造参数/梯度映射
fn mapping(entries: &[(&str, &[f32], &[usize])]) -> Params {
    entries
        .iter()
        .map(|(key, data, shape)| (key.to_string(), Tensor::new(data, shape)))
        .collect()
}
