//! 带偏置的逻辑回归模型
//!
//! ```text
//! p = sigmoid(X·W + b)，损失为二元交叉熵
//! ```

use only_optim::{Grads, Model, OptimError, Params, Tensor};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Debug, Clone)]
pub struct LogisticRegression {
    params: Params,
}

impl LogisticRegression {
    pub fn new(n_features: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self {
            params: Params::from([
                (
                    "W".to_string(),
                    Tensor::new_random_with_rng(-0.1, 0.1, &[n_features, 1], &mut rng),
                ),
                ("b".to_string(), Tensor::zeros(&[1])),
            ]),
        }
    }

    fn probabilities(&self, x: &Tensor) -> Vec<f32> {
        let b = self.params["b"].number().unwrap_or(0.);
        x.mat_mul(&self.params["W"])
            .map(|z| 1. / (1. + (-(z + b)).exp()))
            .to_vec()
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
        let n = y.len() as f32;
        let p = self.probabilities(x);

        // dL/dz = p − y
        let errors = p
            .iter()
            .zip(y)
            .map(|(&p, &label)| p - label as f32)
            .collect::<Vec<_>>();
        let loss = p
            .iter()
            .zip(y)
            .map(|(&p, &label)| {
                let p = p.clamp(1e-7, 1. - 1e-7);
                if label == 1 { -p.ln() } else { -(1. - p).ln() }
            })
            .sum::<f32>()
            / n;

        let errors = Tensor::new(&errors, &[y.len(), 1]);
        let grad_w = x.transpose().mat_mul(&errors) / n;
        let grad_b = Tensor::new(&[errors.sum() / n], &[1]);
        Ok((
            Grads::from([("W".to_string(), grad_w), ("b".to_string(), grad_b)]),
            loss,
        ))
    }

    fn predict(&self, x: &Tensor) -> Result<Vec<usize>, OptimError> {
        Ok(self
            .probabilities(x)
            .into_iter()
            .map(|p| usize::from(p >= 0.5))
            .collect())
    }
}
