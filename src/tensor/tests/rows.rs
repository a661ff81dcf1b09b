use crate::tensor::Tensor;

fn matrix_4x2() -> Tensor {
    Tensor::new(&[0., 1., 10., 11., 20., 21., 30., 31.], &[4, 2])
}

#[test]
fn test_rows() {
    assert_eq!(matrix_4x2().rows(), Some(4));
    assert_eq!(Tensor::new(&[1.], &[]).rows(), None);
}

#[test]
fn test_select_rows_keeps_row_content() {
    let selected = matrix_4x2().select_rows(&[3, 0, 0]);
    assert_eq!(
        selected,
        Tensor::new(&[30., 31., 0., 1., 0., 1.], &[3, 2])
    );
}

#[test]
fn test_slice_rows_clamps_to_bounds() {
    let t = matrix_4x2();
    assert_eq!(t.slice_rows(1, 3), Tensor::new(&[10., 11., 20., 21.], &[2, 2]));
    assert_eq!(t.slice_rows(3, 100).shape(), &[1, 2]);
    assert_eq!(t.slice_rows(5, 8).shape(), &[0, 2]);
}

#[test]
fn test_split_rows_at() {
    let (head, tail) = matrix_4x2().split_rows_at(1);
    assert_eq!(head, Tensor::new(&[0., 1.], &[1, 2]));
    assert_eq!(tail.shape(), &[3, 2]);
}
