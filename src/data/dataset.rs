/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @Description  : Dataset - 持有特征与整数标签的有标签数据集
 *
 * 特征张量的首维为样本数，标签与特征按下标一一对应（由构造函数保证）。
 * 小批量（Minibatch）就是一个较小的 Dataset。
 */

use rand::Rng;
use rand::seq::SliceRandom;

use crate::errors::{InputError, OptimError};
use crate::tensor::Tensor;

/// Dataset - 持有特征和标签的数据集
///
/// # 示例
/// ```ignore
/// let dataset = Dataset::new(features, labels)?;
/// println!("样本数: {}", dataset.len());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    features: Tensor,
    labels: Vec<usize>,
}

/// 小批量：由打乱后的数据集按顺序切出的一段连续行
pub type Minibatch = Dataset;

impl Dataset {
    /// 创建新的 Dataset
    ///
    /// # 参数
    /// - `features`: 特征张量，第一维为样本数
    /// - `labels`: 标签，长度必须与 features 的样本数一致
    ///
    /// # 错误
    /// - 特征为0阶张量：`InputError::ScalarFeatures`
    /// - 样本数不一致：`InputError::SampleCountMismatch`
    pub fn new(features: Tensor, labels: Vec<usize>) -> Result<Self, OptimError> {
        let rows = features.rows().ok_or(InputError::ScalarFeatures)?;
        if rows != labels.len() {
            return Err(InputError::SampleCountMismatch {
                features: rows,
                labels: labels.len(),
            }
            .into());
        }
        Ok(Self { features, labels })
    }

    /// 由借用的特征与标签构造（会拷贝一份）
    pub fn from_parts(features: &Tensor, labels: &[usize]) -> Result<Self, OptimError> {
        Self::new(features.clone(), labels.to_vec())
    }

    /// 获取样本数量
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// 检查数据集是否为空
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// 获取特征张量引用
    pub fn features(&self) -> &Tensor {
        &self.features
    }

    /// 获取标签引用
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// 拆回（特征，标签）
    pub fn into_parts(self) -> (Tensor, Vec<usize>) {
        (self.features, self.labels)
    }

    /// 按`indices`的顺序选取样本，特征与标签使用同一组下标
    ///
    /// 索引越界会panic
    pub fn select(&self, indices: &[usize]) -> Self {
        Self {
            features: self.features.select_rows(indices),
            labels: indices.iter().map(|&i| self.labels[i]).collect(),
        }
    }

    /// 选取[start, end)范围内的连续样本（越界部分自动截断）
    pub fn slice(&self, start: usize, end: usize) -> Self {
        let end = end.min(self.len());
        let start = start.min(end);
        Self {
            features: self.features.slice_rows(start, end),
            labels: self.labels[start..end].to_vec(),
        }
    }

    /// 在第`mid`个样本处一分为二，常用于划出验证集
    pub fn split_at(&self, mid: usize) -> (Self, Self) {
        (self.slice(0, mid), self.slice(mid, self.len()))
    }

    /// 返回一个行被随机重排后的新数据集；第i行特征与第i个标签来自原数据集的同一行
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        if self.is_empty() {
            return self.clone();
        }
        let mut indices: Vec<usize> = (0..self.len()).collect();
        indices.shuffle(rng);
        self.select(&indices)
    }
}
