/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @Description  : 模型能力接口
 *
 * 优化器本身不关心网络结构、前向与反向传播，只把模型当作一种“能力”：
 * - 给定一个小批量，返回梯度映射与标量损失；
 * - 给定特征，返回预测标签；
 * - 暴露“参数名 → 张量”的参数映射，训练循环原地修改它。
 */

use std::collections::BTreeMap;

use crate::errors::OptimError;
use crate::tensor::Tensor;

/// 参数映射：参数名 → 张量。使用有序映射，保证遍历顺序与日志稳定
pub type Params = BTreeMap<String, Tensor>;

/// 梯度映射：键集合与形状都必须与参数映射一致
pub type Grads = Params;

/// 可被训练的模型
///
/// # 使用示例
/// ```ignore
/// impl Model for LogisticRegression {
///     fn params(&self) -> &Params { &self.params }
///     fn params_mut(&mut self) -> &mut Params { &mut self.params }
///     fn train_step(&mut self, x: &Tensor, y: &[usize]) -> Result<(Grads, f32), OptimError> { ... }
///     fn predict(&self, x: &Tensor) -> Result<Vec<usize>, OptimError> { ... }
/// }
/// ```
pub trait Model {
    /// 当前参数映射
    fn params(&self) -> &Params;

    /// 可变参数映射，供训练循环原地更新
    fn params_mut(&mut self) -> &mut Params;

    /// 在一个小批量上计算梯度与损失。
    /// 模型内部的错误请用`OptimError::model`包装后返回，训练循环会原样透传
    fn train_step(&mut self, x: &Tensor, y: &[usize]) -> Result<(Grads, f32), OptimError>;

    /// 预测每个样本的标签
    fn predict(&self, x: &Tensor) -> Result<Vec<usize>, OptimError>;
}
