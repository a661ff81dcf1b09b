/*
 * @Author       : 老董
 * @Date         : 2026-10-15
 * @Description  : 训练循环单元测试
 *
 * 使用一个行为可配置的小模型，以便分别构造零梯度、NaN梯度、键不符、模型报错等情形
 */


use std::cell::RefCell;
use std::rc::Rc;

use crate::data::Dataset;
use crate::errors::OptimError;
use crate::model::{Grads, Model, Params};
use crate::tensor::Tensor;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Behavior {
    /// 损失 0.5·‖w − target‖²，梯度 w − target
    Quadratic,
    ZeroGrad,
    NanGrad,
    WrongKey,
    WrongShape,
    Fails,
    /// 按二次损失训练，但预测结果比样本多3个
    ExtraPredictions,
}

/// 参数只有一个`w`（形状[2]）的玩具模型；`seen`记录每次求梯度时看到的`w`
#[derive(Debug, Clone)]
struct ToyModel {
    params: Params,
    target: Tensor,
    behavior: Behavior,
    seen: Rc<RefCell<Vec<Vec<f32>>>>,
}

impl ToyModel {
    fn new(w: [f32; 2], behavior: Behavior) -> Self {
        Self {
            params: Params::from([("w".to_string(), Tensor::new(&w, &[2]))]),
            target: Tensor::new(&[1., -2.], &[2]),
            behavior,
            seen: Rc::new(RefCell::new(Vec::new())),
        }
    }

    fn w(&self) -> Vec<f32> {
        self.params["w"].to_vec()
    }
}

impl Model for ToyModel {
    fn params(&self) -> &Params {
        &self.params
    }

    fn params_mut(&mut self) -> &mut Params {
        &mut self.params
    }

    fn train_step(&mut self, _x: &Tensor, _y: &[usize]) -> Result<(Grads, f32), OptimError> {
        let w = &self.params["w"];
        self.seen.borrow_mut().push(w.to_vec());
        let diff = w - &self.target;
        let loss = 0.5 * diff.dot_sum(&diff);
        let grads = match self.behavior {
            Behavior::Quadratic | Behavior::ExtraPredictions => Grads::from([("w".to_string(), diff)]),
            Behavior::ZeroGrad => Grads::from([("w".to_string(), Tensor::zeros(&[2]))]),
            Behavior::NanGrad => Grads::from([("w".to_string(), Tensor::new(&[f32::NAN, 0.], &[2]))]),
            Behavior::WrongKey => Grads::from([("u".to_string(), diff)]),
            Behavior::WrongShape => Grads::from([("w".to_string(), Tensor::zeros(&[2, 1]))]),
            Behavior::Fails => return Err(OptimError::model("前向传播失败")),
        };
        Ok((grads, loss))
    }

    /// 对每个样本都预测为0类
    fn predict(&self, x: &Tensor) -> Result<Vec<usize>, OptimError> {
        let rows = x.rows().unwrap_or(0);
        match self.behavior {
            Behavior::ExtraPredictions => Ok(vec![0; rows + 3]),
            _ => Ok(vec![0; rows]),
        }
    }
}

/// 8个样本的数据集，标签前一半为0、后一半为1
fn toy_dataset() -> Dataset {
    let features = Tensor::new(&(0..16).map(|i| i as f32).collect::<Vec<_>>(), &[8, 2]);
    Dataset::new(features, vec![0, 0, 0, 0, 1, 1, 1, 1]).unwrap()
}
