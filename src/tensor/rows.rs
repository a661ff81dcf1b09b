/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @Description  : 沿首维（样本维）的行操作，供数据集的打乱、切分与小批量构造使用
 */

use ndarray::{Axis, Slice};

use super::Tensor;

impl Tensor {
    /// 首维长度，即样本数；0阶张量返回None
    pub fn rows(&self) -> Option<usize> {
        self.shape().first().copied()
    }

    /// 按`indices`的顺序沿首维选取行，返回“克隆”的新张量。
    /// 索引越界会panic
    pub fn select_rows(&self, indices: &[usize]) -> Tensor {
        Tensor {
            data: self.data.select(Axis(0), indices),
        }
    }

    /// 选取首维上[start, end)的连续行
    pub fn slice_rows(&self, start: usize, end: usize) -> Tensor {
        let end = end.min(self.rows().unwrap_or(0));
        let start = start.min(end);
        Tensor {
            data: self
                .data
                .slice_axis(Axis(0), Slice::from(start..end))
                .to_owned(),
        }
    }

    /// 在第`mid`行处把张量一分为二：[0, mid)与[mid, rows)
    pub fn split_rows_at(&self, mid: usize) -> (Tensor, Tensor) {
        let rows = self.rows().unwrap_or(0);
        (self.slice_rows(0, mid), self.slice_rows(mid, rows))
    }
}
