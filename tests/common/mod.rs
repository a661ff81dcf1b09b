/*
 * @Author       : 老董
 * @Date         : 2026-10-15
 * @Description  : 集成测试共用：二维线性可分数据 + 无偏置的逻辑回归模型
 */

#![allow(dead_code)]

use only_optim::data::Dataset;
use only_optim::{Grads, Model, OptimError, Params, Tensor};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 逻辑回归：p = sigmoid(X·W)，参数只有一个`W`（形状[特征数]）
#[derive(Debug, Clone)]
pub struct LogisticRegression {
    params: Params,
}

impl LogisticRegression {
    pub fn new(n_features: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let w = Tensor::new_random_with_rng(-0.1, 0.1, &[n_features], &mut rng);
        Self {
            params: Params::from([("W".to_string(), w)]),
        }
    }

    fn probabilities(&self, x: &Tensor) -> Tensor {
        let w = &self.params["W"];
        x.mat_mul(&w.reshape(&[w.size(), 1]))
            .map(|z| 1. / (1. + (-z).exp()))
    }
}

impl Model for LogisticRegression {
    fn params(&self) -> &Params {
        &self.params
    }

    fn params_mut(&mut self) -> &mut Params {
        &mut self.params
    }

    fn train_step(&mut self, x: &Tensor, y: &[usize]) -> Result<(Grads, f32), OptimError> {
        let n = y.len();
        let p = self.probabilities(x);
        let targets = Tensor::new(&y.iter().map(|&label| label as f32).collect::<Vec<_>>(), &[n, 1]);

        let loss = p
            .to_vec()
            .iter()
            .zip(y)
            .map(|(&p, &label)| {
                let p = p.clamp(1e-7, 1. - 1e-7);
                if label == 1 { -p.ln() } else { -(1. - p).ln() }
            })
            .sum::<f32>()
            / n as f32;

        let w_size = self.params["W"].size();
        let grad = x.transpose().mat_mul(&(&p - &targets)) / n as f32;
        Ok((
            Grads::from([("W".to_string(), grad.reshape(&[w_size]))]),
            loss,
        ))
    }

    fn predict(&self, x: &Tensor) -> Result<Vec<usize>, OptimError> {
        Ok(self
            .probabilities(x)
            .to_vec()
            .iter()
            .map(|&p| usize::from(p >= 0.5))
            .collect())
    }
}

/// 在[-1, 1]²内均匀采样，标签为`x1 + x2 > 0`；丢弃离分界线过近（|x1 + x2| < 0.3）的点
pub fn separable_points(n: usize, seed: u64) -> Dataset {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut features = Vec::with_capacity(n * 2);
    let mut labels = Vec::with_capacity(n);
    while labels.len() < n {
        let (x1, x2): (f32, f32) = (rng.gen_range(-1.0..=1.0), rng.gen_range(-1.0..=1.0));
        if (x1 + x2).abs() < 0.3 {
            continue;
        }
        features.extend([x1, x2]);
        labels.push(usize::from(x1 + x2 > 0.));
    }
    Dataset::new(Tensor::new(&features, &[n, 2]), labels).unwrap()
}
