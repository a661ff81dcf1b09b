//! 数据模块
//!
//! 提供有标签数据集以及小批量的打乱与切分。
//!
//! # 主要组件
//!
//! - [`Dataset`]: 持有特征张量和整数标签的数据集
//! - [`Batcher`]: 打乱一次并切分为固定大小的小批量
//! - [`shuffle`] / [`partition`]: 直接作用于（特征，标签）对的便捷函数
//!
//! # 使用示例
//!
//! ```ignore
//! use only_optim::data::{Batcher, Dataset};
//!
//! let dataset = Dataset::new(train_x, train_y)?;
//! let mut rng = StdRng::seed_from_u64(42);
//! let minibatches = Batcher::new(32)?.partition(&dataset, &mut rng);
//! ```

mod batcher;
mod dataset;


pub use batcher::{Batcher, partition, shuffle};
pub use dataset::{Dataset, Minibatch};
