use std::fmt;

use serde::Serialize;

/// 一次验证汇报：第几次迭代、该次迭代的小批量损失、验证集准确率
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Progress {
    pub iteration: usize,
    pub loss: f32,
    pub val_accuracy: f32,
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Iter-{} loss: {:.4} validation: {:.6}",
            self.iteration, self.loss, self.val_accuracy
        )
    }
}
