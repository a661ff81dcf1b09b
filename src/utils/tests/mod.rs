use approx::assert_abs_diff_eq;

use crate::tensor::Tensor;
use crate::utils::{accuracy, exp_running_avg};

#[test]
fn test_accuracy() {
    assert_abs_diff_eq!(accuracy(&[0, 1, 1, 0], &[0, 1, 0, 0]), 0.75);
    assert_abs_diff_eq!(accuracy(&[1, 1], &[1, 1]), 1.);
    assert_abs_diff_eq!(accuracy(&[], &[]), 0.);
    // 预测不足时缺失部分按错误计
    assert_abs_diff_eq!(accuracy(&[1, 1, 1, 1], &[1, 1]), 0.5);
}

#[test]
fn test_exp_running_avg() {
    let running = Tensor::new(&[1., 2.], &[2]);
    let new = Tensor::new(&[3., 4.], &[2]);
    let avg = exp_running_avg(&running, &new, 0.9);
    let avg = avg.to_vec();
    assert_abs_diff_eq!(avg[0], 1.2, epsilon = 1e-6);
    assert_abs_diff_eq!(avg[1], 2.2, epsilon = 1e-6);
}
