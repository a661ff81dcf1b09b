/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @Description  : SGD (随机梯度下降) 优化器测试
 */

use crate::optimizer::{Sgd, UpdateRule};
use crate::tensor::Tensor;

use super::mapping;

#[test]
fn test_sgd_delta_formula() {
    // Δ = α * g
    let grads = mapping(&[("w", &[1., -2., 0.5], &[3])]);
    let mut sgd = Sgd;
    let deltas = sgd.compute_deltas(&grads, 0.1).unwrap();
    assert_eq!(deltas["w"], Tensor::new(&[0.1, -0.2, 0.05], &[3]));
}

#[test]
fn test_sgd_zero_gradient_gives_zero_delta() {
    let params = mapping(&[("w", &[3., 4.], &[2])]);
    let grads = mapping(&[("w", &[0., 0.], &[2])]);
    let mut sgd = Sgd;
    sgd.init_state(&params);
    for _ in 0..10 {
        let deltas = sgd.compute_deltas(&grads, 0.5).unwrap();
        assert_eq!(deltas["w"], Tensor::zeros(&[2]));
    }
    assert_eq!(sgd.look_ahead(&params).unwrap(), None);
}
