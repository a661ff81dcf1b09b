/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @Description  : Adagrad 优化器测试
 */

use approx::assert_abs_diff_eq;

use crate::optimizer::{Adagrad, EPS, UpdateRule};

use super::mapping;

#[test]
fn test_adagrad_first_step() {
    // c = g² = 4；Δ = α*g/(√c + ε) = 0.1*2/2 = 0.1
    let params = mapping(&[("w", &[0.], &[1])]);
    let grads = mapping(&[("w", &[2.], &[1])]);
    let mut adagrad = Adagrad::default();
    adagrad.init_state(&params);

    let deltas = adagrad.compute_deltas(&grads, 0.1).unwrap();
    assert_abs_diff_eq!(deltas["w"].number().unwrap(), 0.1, epsilon = 1e-6);
    assert_abs_diff_eq!(adagrad.cache("w").unwrap().number().unwrap(), 4.);
}

#[test]
fn test_adagrad_cache_is_non_decreasing() {
    let params = mapping(&[("w", &[0., 0., 0.], &[3])]);
    let mut adagrad = Adagrad::default();
    adagrad.init_state(&params);

    let mut previous = vec![0.; 3];
    for step in 0..50 {
        let s = step as f32;
        // 符号与大小都在变化的梯度序列
        let g = [(s * 0.7).sin(), -(s * 0.3).cos() * 2., if step % 2 == 0 { 0.5 } else { -3. }];
        let grads = mapping(&[("w", &g, &[3])]);
        adagrad.compute_deltas(&grads, 0.01).unwrap();

        let cache = adagrad.cache("w").unwrap().to_vec();
        for (now, before) in cache.iter().zip(&previous) {
            assert!(now >= before);
        }
        previous = cache;
    }
}

#[test]
fn test_adagrad_zero_gradient_is_stable() {
    // 缓存为零时分母为ε，Δ仍有限且为零
    let params = mapping(&[("w", &[1.], &[1])]);
    let grads = mapping(&[("w", &[0.], &[1])]);
    let mut adagrad = Adagrad::new(EPS);
    adagrad.init_state(&params);
    let deltas = adagrad.compute_deltas(&grads, 0.1).unwrap();
    assert_eq!(deltas["w"].number(), Some(0.));
}
