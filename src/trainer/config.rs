/*
 * @Author       : 老董
 * @Date         : 2026-10-15
 * @Description  : 训练配置
 *
 * TrainConfig 描述一次训练运行本身（学习率、批大小、迭代次数、汇报间隔、随机种子），
 * SolverConfig 在其基础上再附带优化器配置，可整体由 JSON 加载：
 * {"train": {"learning_rate": 0.01, "n_iter": 500}, "optimizer": {"kind": "adam"}}
 */

use serde::{Deserialize, Serialize};

use super::Trainer;
use crate::errors::{ComparisonOperator, InputError, OptimError};
use crate::optimizer::OptimizerConfig;

/// 一次训练运行的参数，未给出的字段取默认值
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    /// 学习率α
    pub learning_rate: f32,
    /// 每个小批量的样本数（最后一批可以不满）
    pub minibatch_size: usize,
    /// 迭代次数（每次迭代抽取一个小批量）
    pub n_iter: usize,
    /// 每隔多少次迭代在验证集上汇报一次
    pub report_interval: usize,
    /// 随机种子；为None时从系统熵源取种
    pub seed: Option<u64>,
    /// 是否在每次迭代检查梯度与更新后参数中的NaN/Inf
    pub check_finite: bool,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            learning_rate: 1e-3,
            minibatch_size: 256,
            n_iter: 2000,
            report_interval: 100,
            seed: None,
            check_finite: true,
        }
    }
}

impl TrainConfig {
    /// 设置随机种子（用于可复现的打乱与抽样）
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// 检查各项取值：α须为有限正数，其余计数须≥1
    pub fn validate(&self) -> Result<(), OptimError> {
        if !(self.learning_rate > 0.) || !self.learning_rate.is_finite() {
            return Err(InputError::comparison(
                "learning_rate",
                ComparisonOperator::GreaterThan,
                0.,
                self.learning_rate as f64,
            )
            .into());
        }
        for (name, value) in [
            ("minibatch_size", self.minibatch_size),
            ("n_iter", self.n_iter),
            ("report_interval", self.report_interval),
        ] {
            if value < 1 {
                return Err(InputError::comparison(
                    name,
                    ComparisonOperator::GreaterOrEqual,
                    1.,
                    value as f64,
                )
                .into());
            }
        }
        Ok(())
    }
}

/// 训练配置 + 优化器配置
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    #[serde(default)]
    pub train: TrainConfig,
    #[serde(default)]
    pub optimizer: OptimizerConfig,
}

impl SolverConfig {
    /// 由 JSON 字符串加载并校验
    pub fn from_json(json: &str) -> Result<Self, OptimError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), OptimError> {
        self.train.validate()?;
        self.optimizer.validate()
    }

    /// 按配置构建训练器
    pub fn trainer(&self) -> Result<Trainer, OptimError> {
        self.validate()?;
        Ok(Trainer::new(self.optimizer.build()?, self.train))
    }
}
