/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @Description  : Batcher - 打乱有标签数据集并切分为固定大小的小批量
 *
 * 与逐轮遍历的加载器不同，这里只在训练开始时打乱一次、切分一次，
 * 得到的小批量池随后由训练循环按下标独立、均匀地随机抽取。
 */

use log::debug;
use rand::Rng;

use super::{Dataset, Minibatch};
use crate::errors::{ComparisonOperator, InputError, OptimError};
use crate::tensor::Tensor;

/// 按固定大小切分小批量
///
/// # 示例
/// ```ignore
/// let mut rng = StdRng::seed_from_u64(42);
/// let batches = Batcher::new(32)?.partition(&dataset, &mut rng);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Batcher {
    batch_size: usize,
}

impl Batcher {
    /// 创建新的 Batcher，`batch_size`须≥1
    pub fn new(batch_size: usize) -> Result<Self, OptimError> {
        if batch_size == 0 {
            return Err(InputError::comparison(
                "minibatch_size",
                ComparisonOperator::GreaterOrEqual,
                1.,
                0.,
            )
            .into());
        }
        Ok(Self { batch_size })
    }

    /// 获取批大小
    pub const fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// 给定样本数时可切出的批次数量（最后一批可以不满）
    pub const fn num_batches(&self, len: usize) -> usize {
        len.div_ceil(self.batch_size)
    }

    /// 先整体打乱一次，再按顺序切成若干个至多`batch_size`行的小批量
    pub fn partition<R: Rng + ?Sized>(&self, dataset: &Dataset, rng: &mut R) -> Vec<Minibatch> {
        let shuffled = dataset.shuffled(rng);
        let batches = (0..shuffled.len())
            .step_by(self.batch_size)
            .map(|start| shuffled.slice(start, start + self.batch_size))
            .collect::<Vec<_>>();
        debug!(
            "数据集（{}个样本）切分为{}个小批量，批大小{}",
            dataset.len(),
            batches.len(),
            self.batch_size
        );
        batches
    }
}

/// 对成对的特征与标签施加同一个随机排列
///
/// # 错误
/// 特征与标签的样本数不一致时返回`InputError::SampleCountMismatch`
pub fn shuffle<R: Rng + ?Sized>(
    features: &Tensor,
    labels: &[usize],
    rng: &mut R,
) -> Result<(Tensor, Vec<usize>), OptimError> {
    Ok(Dataset::from_parts(features, labels)?
        .shuffled(rng)
        .into_parts())
}

/// 打乱一次后切分为至多`size`行的连续小批量，最后一批可以不满
pub fn partition<R: Rng + ?Sized>(
    features: &Tensor,
    labels: &[usize],
    size: usize,
    rng: &mut R,
) -> Result<Vec<Minibatch>, OptimError> {
    let batcher = Batcher::new(size)?;
    let dataset = Dataset::from_parts(features, labels)?;
    Ok(batcher.partition(&dataset, rng))
}
