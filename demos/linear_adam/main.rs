//! # 线性二分类示例
//!
//! 在合成的线性可分数据上训练逻辑回归，依次使用六种优化器并比较验证准确率：
//! - 数据：[-1, 1]²内均匀采样，标签为`x1 + x2 > 0.5`
//! - 模型：p = sigmoid(X·W + b)
//!
//! ## 运行
//! ```bash
//! RUST_LOG=info cargo run --example linear_adam
//! ```

mod model;

use model::LogisticRegression;
use only_optim::data::Dataset;
use only_optim::optimizer::OptimizerConfig;
use only_optim::utils::accuracy;
use only_optim::{Model, OptimError, SolverConfig, Tensor, TrainConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn synthetic_dataset(n: usize, seed: u64) -> Result<Dataset, OptimError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut features = Vec::with_capacity(n * 2);
    let mut labels = Vec::with_capacity(n);
    for _ in 0..n {
        let (x1, x2): (f32, f32) = (rng.gen_range(-1.0..=1.0), rng.gen_range(-1.0..=1.0));
        features.extend([x1, x2]);
        labels.push(usize::from(x1 + x2 > 0.5));
    }
    Dataset::new(Tensor::new(&features, &[n, 2]), labels)
}

fn main() -> Result<(), OptimError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("=== 线性二分类示例 ===\n");

    // 1. 数据：400个训练样本，100个验证样本
    let (train, val) = synthetic_dataset(500, 42)?.split_at(400);
    println!("数据: 训练{}个样本，验证{}个样本\n", train.len(), val.len());

    let train_config = TrainConfig {
        learning_rate: 0.01,
        minibatch_size: 16,
        n_iter: 2000,
        report_interval: 500,
        seed: Some(42),
        check_finite: true,
    };

    // 2. 依次用每种优化器训练同一个初始模型
    let optimizers = [
        OptimizerConfig::Sgd,
        OptimizerConfig::momentum(),
        OptimizerConfig::nesterov(),
        OptimizerConfig::adagrad(),
        OptimizerConfig::rmsprop(),
        OptimizerConfig::adam(),
    ];
    for optimizer in optimizers {
        let config = SolverConfig {
            train: train_config,
            optimizer,
        };
        let mut trainer = config.trainer()?;
        let model = trainer.fit(LogisticRegression::new(2, 0), &train, Some(&val))?;

        let acc = accuracy(val.labels(), &model.predict(val.features())?);
        println!(
            "{:>8}: 最终验证准确率 {:.1}%（共汇报{}次）",
            serde_json::to_string(&optimizer)?,
            acc * 100.,
            trainer.history().len()
        );
    }

    Ok(())
}
