use approx::assert_abs_diff_eq;

use crate::assert_panic;
use crate::tensor::Tensor;

#[test]
fn test_new_with_wrong_data_length_panics() {
    assert_panic!(
        Tensor::new(&[1., 2., 3.], &[2, 2]),
        "数据长度3与形状[2, 2]不符"
    );
}

#[test]
fn test_zeros_like_keeps_shape() {
    let t = Tensor::new_random(-1., 1., &[3, 4]);
    let z = Tensor::zeros_like(&t);
    assert_eq!(z.shape(), &[3, 4]);
    assert!(z.to_vec().iter().all(|&x| x == 0.));
}

#[test]
fn test_new_random_range() {
    let t = Tensor::new_random(-0.5, 0.5, &[10, 10]);
    assert_eq!(t.size(), 100);
    assert!(t.to_vec().iter().all(|&x| (-0.5..=0.5).contains(&x)));
}

#[test]
fn test_sqrt_square_map() {
    let t = Tensor::new(&[1., 4., 9.], &[3]);
    assert_eq!(t.sqrt(), Tensor::new(&[1., 2., 3.], &[3]));
    assert_eq!(t.square(), Tensor::new(&[1., 16., 81.], &[3]));
    assert_eq!(t.map(|x| -x), Tensor::new(&[-1., -4., -9.], &[3]));
}

#[test]
fn test_sum_mean_dot_sum() {
    let t = Tensor::new(&[1., 2., 3., 4.], &[2, 2]);
    assert_abs_diff_eq!(t.sum(), 10.);
    assert_abs_diff_eq!(t.mean(), 2.5);
    assert_abs_diff_eq!(t.dot_sum(&t), 30.);
    assert_abs_diff_eq!(Tensor::zeros(&[0]).mean(), 0.);
}

#[test]
fn test_mat_mul_and_transpose() {
    let a = Tensor::new(&[1., 2., 3., 4., 5., 6.], &[2, 3]);
    let b = Tensor::new(&[1., 0., 1.], &[3, 1]);
    assert_eq!(a.mat_mul(&b), Tensor::new(&[4., 10.], &[2, 1]));
    assert_eq!(
        a.transpose(),
        Tensor::new(&[1., 4., 2., 5., 3., 6.], &[3, 2])
    );
    assert_panic!(a.mat_mul(&a), "前一个张量的列数必须等于后一个张量的行数");
}

#[test]
fn test_is_finite() {
    assert!(Tensor::new(&[1., -2.], &[2]).is_finite());
    assert!(!Tensor::new(&[1., f32::NAN], &[2]).is_finite());
    assert!(!Tensor::new(&[f32::INFINITY], &[1]).is_finite());
}

#[test]
fn test_number_and_scalar() {
    assert_eq!(Tensor::from(3.).number(), Some(3.));
    assert_eq!(Tensor::new(&[7.], &[1, 1]).number(), Some(7.));
    assert_eq!(Tensor::new(&[1., 2.], &[2]).number(), None);
}

#[test]
fn test_display() {
    let t = Tensor::new(&[1., 2.], &[2]);
    let s = format!("{t}");
    assert!(s.contains("形状: [2]"));
}

#[test]
fn test_display_matrix_and_high_rank() {
    let t = Tensor::new(&[1., 2., 3., 4.], &[2, 2]);
    assert_eq!(
        format!("{t}"),
        "[[  1.0000,   2.0000],\n [  3.0000,   4.0000]]\n形状: [2, 2]\n"
    );

    let v = Tensor::new(&[0.5, -1.], &[2]);
    assert_eq!(format!("{v}"), "[  0.5000,  -1.0000]\n形状: [2]\n");

    let cube = Tensor::zeros(&[2, 2, 2]);
    assert!(format!("{cube}").contains("无法展示具体数据"));
}
