/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @Description  : 错误类型定义
 *                 - TensorError：张量运算误用时的panic消息
 *                 - OptimError：优化流程中对外返回的错误（输入无效、数值不稳定、模型错误、配置错误）
 */

use thiserror::Error;
mod ops;
pub use self::ops::*;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TensorError {
    // 张量二元运算
    #[error(
        "形状不一致，故无法{operator}：第一个张量的形状为{tensor1_shape:?}，第二个张量的形状为{tensor2_shape:?}"
    )]
    OperatorError {
        operator: Operator,
        tensor1_shape: Vec<usize>,
        tensor2_shape: Vec<usize>,
    },

    #[error("数据长度{data_len}与形状{shape:?}不符")]
    DataShapeMismatch { data_len: usize, shape: Vec<usize> },
    #[error("作为除数的张量中存在为零元素")]
    DivByZeroElement,
}

/// 优化流程中的错误
#[derive(Error, Debug)]
pub enum OptimError {
    #[error("输入无效：{0}")]
    InvalidInput(#[from] InputError),

    /// 梯度或更新后的参数中出现了NaN/Inf
    #[error("数值不稳定：参数`{key}`的{stage}中出现NaN或Inf")]
    NumericalInstability { key: String, stage: Stage },

    /// 模型在计算梯度或预测时返回的错误，原样透传
    #[error(transparent)]
    Model(Box<dyn std::error::Error + Send + Sync + 'static>),

    #[error("配置解析失败：{0}")]
    Config(#[from] serde_json::Error),
}

impl OptimError {
    /// 把模型侧的任意错误包装为`OptimError::Model`
    pub fn model<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    {
        Self::Model(err.into())
    }
}

/// 各类无效输入
#[derive(Error, Debug, PartialEq)]
pub enum InputError {
    #[error("特征与标签的样本数不一致：特征{features}个，标签{labels}个")]
    SampleCountMismatch { features: usize, labels: usize },

    #[error("数据集为空")]
    EmptyDataset,

    #[error("特征张量至少需要1阶（首维为样本数）")]
    ScalarFeatures,

    // 数字比较用
    #[error("{value_name}须{operator}{threshold}，实际为{value}")]
    ValueMustSatisfyComparison {
        value_name: String,
        operator: ComparisonOperator,
        threshold: f64,
        value: f64,
    },

    #[error("参数`{key}`在参数、梯度与辅助状态中未对齐")]
    KeyMismatch { key: String },

    #[error("参数`{key}`的形状不一致：期望{expected:?}，实际{got:?}")]
    ShapeMismatch {
        key: String,
        expected: Vec<usize>,
        got: Vec<usize>,
    },
}

impl InputError {
    pub(crate) fn comparison(
        value_name: &str,
        operator: ComparisonOperator,
        threshold: f64,
        value: f64,
    ) -> Self {
        Self::ValueMustSatisfyComparison {
            value_name: value_name.to_string(),
            operator,
            threshold,
            value,
        }
    }
}

/// 数值检查发生的阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Gradient,
    Parameter,
}
impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let stage_name = match self {
            Stage::Gradient => "梯度",
            Stage::Parameter => "更新后的值",
        };
        write!(f, "{stage_name}")
    }
}
