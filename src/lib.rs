//! # Only Optim
//!
//! `only_optim`用纯rust实现了一族随机一阶优化器：SGD、Momentum、Nesterov、Adagrad、RMSProp 与 Adam，
//! 并提供统一的小批量训练循环。模型（前向、反向、损失）由使用者通过[`model::Model`]接入，
//! 本库只负责“打乱 → 切分小批量 → 反复抽样求梯度 → 按规则更新参数 → 定期验证”这一过程。
//!
//! ```ignore
//! use only_optim::trainer::{TrainConfig, solvers};
//!
//! let config = TrainConfig { learning_rate: 0.01, minibatch_size: 4, n_iter: 500, ..Default::default() };
//! let model = solvers::adam(model, &x_train, &y_train, Some((&x_val, &y_val)), &config)?;
//! ```

pub mod data;
pub mod errors;
pub mod model;
pub mod optimizer;
pub mod tensor;
pub mod trainer;
pub mod utils;

pub use errors::{InputError, OptimError};
pub use model::{Grads, Model, Params};
pub use optimizer::{Optimizer, OptimizerConfig, UpdateRule};
pub use tensor::Tensor;
pub use trainer::{Progress, SolverConfig, TrainConfig, Trainer};
