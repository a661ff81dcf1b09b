/*
 * @Author       : 老董
 * @Date         : 2026-10-15
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-18
 * @Description  : 训练循环
 *
 * 一次运行分三段：
 * 1. 初始化：校验配置、优化器超参数与数据、播种随机数、打乱并切分小批量池、把优化器状态清零；
 * 2. 迭代：每次独立均匀地抽取一个小批量 → 求梯度（Nesterov 在前瞻副本上求）→ 计算Δ → 提交`参数 − Δ`；
 * 3. 结束：把训练好的模型按值返回。
 *
 * 任何错误都立即中止并向上传递，不重试。
 */

mod config;
mod progress;
pub mod solvers;

#[cfg(test)]
mod tests;

pub use config::{SolverConfig, TrainConfig};
pub use progress::Progress;

use log::{info, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::data::{Batcher, Dataset, Minibatch};
use crate::errors::{InputError, OptimError, Stage};
use crate::model::{Grads, Model, Params};
use crate::optimizer::{Optimizer, UpdateRule};
use crate::utils::accuracy;

type ProgressCallback = Box<dyn FnMut(&Progress)>;

/// 训练器：持有一个优化器（及其辅助状态）与训练配置
///
/// # 使用示例
/// ```ignore
/// let mut trainer = Trainer::new(Adam::default().into(), TrainConfig::default().seed(42))
///     .on_progress(|p| println!("{p}"));
/// let model = trainer.fit(model, &train, Some(&val))?;
/// ```
pub struct Trainer {
    optimizer: Optimizer,
    config: TrainConfig,
    on_progress: Option<ProgressCallback>,
    history: Vec<Progress>,
}

impl Trainer {
    pub fn new(optimizer: Optimizer, config: TrainConfig) -> Self {
        Self {
            optimizer,
            config,
            on_progress: None,
            history: Vec::new(),
        }
    }

    /// 注册汇报回调：每次验证汇报时调用，只用于观察
    pub fn on_progress<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&Progress) + 'static,
    {
        self.on_progress = Some(Box::new(callback));
        self
    }

    pub const fn optimizer(&self) -> &Optimizer {
        &self.optimizer
    }

    pub const fn config(&self) -> &TrainConfig {
        &self.config
    }

    /// 最近一次运行的所有汇报记录
    pub fn history(&self) -> &[Progress] {
        &self.history
    }

    /// 在`train`上迭代`n_iter`次，返回训练好的模型。
    /// 给出`val`时每隔`report_interval`次迭代汇报一次验证准确率
    pub fn fit<M>(
        &mut self,
        mut model: M,
        train: &Dataset,
        val: Option<&Dataset>,
    ) -> Result<M, OptimError>
    where
        M: Model + Clone,
    {
        self.config.validate()?;
        self.optimizer.validate()?;
        if train.is_empty() {
            return Err(InputError::EmptyDataset.into());
        }

        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let minibatches = Batcher::new(self.config.minibatch_size)?.partition(train, &mut rng);
        self.optimizer.init_state(model.params());
        self.history.clear();

        info!(
            "开始训练：优化器{}，学习率{}，{}个小批量，共{}次迭代",
            self.optimizer.name(),
            self.config.learning_rate,
            minibatches.len(),
            self.config.n_iter
        );

        for iteration in 1..=self.config.n_iter {
            let minibatch = &minibatches[rng.gen_range(0..minibatches.len())];
            let loss = self.step(&mut model, minibatch)?;
            trace!("Iter-{iteration} loss: {loss:.4}");

            if iteration % self.config.report_interval == 0 {
                if let Some(val) = val {
                    self.report(&model, val, iteration, loss)?;
                }
            }
        }

        info!("训练结束：共{}次迭代", self.config.n_iter);
        Ok(model)
    }

    /// 单次迭代：求梯度、计算Δ、全部检查通过后再一并提交
    fn step<M>(&mut self, model: &mut M, minibatch: &Minibatch) -> Result<f32, OptimError>
    where
        M: Model + Clone,
    {
        let (grads, loss) = match self.optimizer.look_ahead(model.params())? {
            Some(ahead) => {
                // 在临时副本上求前瞻点的梯度，副本随即丢弃
                let mut shadow = model.clone();
                *shadow.params_mut() = ahead;
                shadow.train_step(minibatch.features(), minibatch.labels())?
            }
            None => model.train_step(minibatch.features(), minibatch.labels())?,
        };

        check_aligned(model.params(), &grads)?;
        if self.config.check_finite {
            check_finite(&grads, Stage::Gradient)?;
        }

        let deltas = self
            .optimizer
            .compute_deltas(&grads, self.config.learning_rate)?;

        let mut updated = Params::new();
        for (key, param) in model.params() {
            let delta = deltas
                .get(key)
                .ok_or_else(|| InputError::KeyMismatch { key: key.clone() })?;
            updated.insert(key.clone(), param - delta);
        }
        if self.config.check_finite {
            check_finite(&updated, Stage::Parameter)?;
        }

        model.params_mut().extend(updated);
        Ok(loss)
    }

    fn report<M: Model>(
        &mut self,
        model: &M,
        val: &Dataset,
        iteration: usize,
        loss: f32,
    ) -> Result<(), OptimError> {
        let predictions = model.predict(val.features())?;
        if predictions.len() != val.len() {
            return Err(InputError::SampleCountMismatch {
                features: val.len(),
                labels: predictions.len(),
            }
            .into());
        }
        let progress = Progress {
            iteration,
            loss,
            val_accuracy: accuracy(val.labels(), &predictions),
        };
        info!("{progress}");
        if let Some(callback) = self.on_progress.as_mut() {
            callback(&progress);
        }
        self.history.push(progress);
        Ok(())
    }
}

/// 梯度与参数须键集合相同、逐键同形
fn check_aligned(params: &Params, grads: &Grads) -> Result<(), OptimError> {
    if let Some(key) = grads.keys().find(|key| !params.contains_key(*key)) {
        return Err(InputError::KeyMismatch { key: key.clone() }.into());
    }
    for (key, param) in params {
        let grad = grads
            .get(key)
            .ok_or_else(|| InputError::KeyMismatch { key: key.clone() })?;
        if !grad.is_same_shape(param) {
            return Err(InputError::ShapeMismatch {
                key: key.clone(),
                expected: param.shape().to_vec(),
                got: grad.shape().to_vec(),
            }
            .into());
        }
    }
    Ok(())
}

fn check_finite(tensors: &Params, stage: Stage) -> Result<(), OptimError> {
    match tensors.iter().find(|(_, tensor)| !tensor.is_finite()) {
        Some((key, _)) => Err(OptimError::NumericalInstability {
            key: key.clone(),
            stage,
        }),
        None => Ok(()),
    }
}
