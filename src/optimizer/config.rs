/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-18
 * @Description  : 优化器的可序列化配置，可由 JSON 描述并构建出对应的优化器
 *
 * 示例：{"kind": "adam", "beta1": 0.9, "beta2": 0.999}
 * 未给出的超参数取默认值。
 */

use serde::{Deserialize, Serialize};

use super::{
    Adagrad, Adam, DEFAULT_BETA1, DEFAULT_BETA2, DEFAULT_GAMMA, EPS, Momentum, Nesterov,
    Optimizer, RmsProp, Sgd,
};
use crate::errors::{ComparisonOperator, InputError, OptimError};

const fn default_gamma() -> f32 {
    DEFAULT_GAMMA
}
const fn default_beta1() -> f32 {
    DEFAULT_BETA1
}
const fn default_beta2() -> f32 {
    DEFAULT_BETA2
}
const fn default_eps() -> f32 {
    EPS
}

/// 优化器配置
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OptimizerConfig {
    #[default]
    Sgd,
    Momentum {
        #[serde(default = "default_gamma")]
        gamma: f32,
    },
    Nesterov {
        #[serde(default = "default_gamma")]
        gamma: f32,
    },
    Adagrad {
        #[serde(default = "default_eps")]
        eps: f32,
    },
    #[serde(rename = "rmsprop")]
    RmsProp {
        #[serde(default = "default_gamma")]
        gamma: f32,
        #[serde(default = "default_eps")]
        eps: f32,
    },
    Adam {
        #[serde(default = "default_beta1")]
        beta1: f32,
        #[serde(default = "default_beta2")]
        beta2: f32,
        #[serde(default = "default_eps")]
        eps: f32,
    },
}

impl OptimizerConfig {
    /// 检查超参数：衰减系数与β须在[0, 1)内，ε须>0
    pub fn validate(&self) -> Result<(), OptimError> {
        match *self {
            Self::Sgd => Ok(()),
            Self::Momentum { gamma } | Self::Nesterov { gamma } => check_decay("gamma", gamma),
            Self::Adagrad { eps } => check_eps(eps),
            Self::RmsProp { gamma, eps } => {
                check_decay("gamma", gamma)?;
                check_eps(eps)
            }
            Self::Adam { beta1, beta2, eps } => {
                check_decay("beta1", beta1)?;
                check_decay("beta2", beta2)?;
                check_eps(eps)
            }
        }
    }

    /// 校验后构建对应的优化器（辅助状态为空，训练开始时再按参数形状清零）
    pub fn build(&self) -> Result<Optimizer, OptimError> {
        self.validate()?;
        let optimizer: Optimizer = match *self {
            Self::Sgd => Sgd.into(),
            Self::Momentum { gamma } => Momentum::new(gamma).into(),
            Self::Nesterov { gamma } => Nesterov::new(gamma).into(),
            Self::Adagrad { eps } => Adagrad::new(eps).into(),
            Self::RmsProp { gamma, eps } => RmsProp::new(gamma, eps).into(),
            Self::Adam { beta1, beta2, eps } => Adam::new(beta1, beta2, eps).into(),
        };
        Ok(optimizer)
    }

    /// 各变体使用默认超参数的配置
    pub const fn momentum() -> Self {
        Self::Momentum {
            gamma: DEFAULT_GAMMA,
        }
    }

    pub const fn nesterov() -> Self {
        Self::Nesterov {
            gamma: DEFAULT_GAMMA,
        }
    }

    pub const fn adagrad() -> Self {
        Self::Adagrad { eps: EPS }
    }

    pub const fn rmsprop() -> Self {
        Self::RmsProp {
            gamma: DEFAULT_GAMMA,
            eps: EPS,
        }
    }

    pub const fn adam() -> Self {
        Self::Adam {
            beta1: DEFAULT_BETA1,
            beta2: DEFAULT_BETA2,
            eps: EPS,
        }
    }
}

pub(super) fn check_decay(name: &str, value: f32) -> Result<(), OptimError> {
    if !(value >= 0.) {
        return Err(InputError::comparison(
            name,
            ComparisonOperator::GreaterOrEqual,
            0.,
            value as f64,
        )
        .into());
    }
    if !(value < 1.) {
        return Err(
            InputError::comparison(name, ComparisonOperator::LessThan, 1., value as f64).into(),
        );
    }
    Ok(())
}

pub(super) fn check_eps(eps: f32) -> Result<(), OptimError> {
    if !(eps > 0.) || !eps.is_finite() {
        return Err(
            InputError::comparison("eps", ComparisonOperator::GreaterThan, 0., eps as f64).into(),
        );
    }
    Ok(())
}
