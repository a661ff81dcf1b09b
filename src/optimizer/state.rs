/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @Description  : 参数状态存储：每个参数名对应一块与该参数同形的辅助缓冲区
 *                 （速度、平方梯度缓存、一阶/二阶矩估计）
 */

use std::collections::BTreeMap;

use crate::errors::{InputError, OptimError};
use crate::model::{Grads, Params};
use crate::tensor::Tensor;

/// 按参数名索引的辅助缓冲区，初始值全零
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamState {
    buffers: BTreeMap<String, Tensor>,
}

impl ParamState {
    /// 为每个参数创建一块同形的全零缓冲区
    pub fn zeros_like(params: &Params) -> Self {
        Self {
            buffers: params
                .iter()
                .map(|(key, param)| (key.clone(), Tensor::zeros_like(param)))
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Tensor> {
        self.buffers.get(key)
    }

    pub fn len(&self) -> usize {
        self.buffers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.buffers.keys().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.buffers.clear();
    }

    /// 检查梯度与缓冲区是否一一对齐（键集合相同、形状相同）。
    /// 尚未初始化（为空）时按梯度的形状补一份全零缓冲区
    pub fn ensure_aligned(&mut self, grads: &Grads) -> Result<(), OptimError> {
        if self.buffers.is_empty() {
            *self = Self::zeros_like(grads);
            return Ok(());
        }
        if let Some(key) = self
            .buffers
            .keys()
            .find(|key| !grads.contains_key(key.as_str()))
        {
            return Err(InputError::KeyMismatch { key: key.clone() }.into());
        }
        for (key, grad) in grads {
            let buffer = self
                .buffers
                .get(key)
                .ok_or_else(|| InputError::KeyMismatch { key: key.clone() })?;
            if !buffer.is_same_shape(grad) {
                return Err(InputError::ShapeMismatch {
                    key: key.clone(),
                    expected: buffer.shape().to_vec(),
                    got: grad.shape().to_vec(),
                }
                .into());
            }
        }
        Ok(())
    }

    /// 取出某个参数的缓冲区以便原地更新
    pub fn buffer_mut(&mut self, key: &str) -> Result<&mut Tensor, OptimError> {
        self.buffers.get_mut(key).ok_or_else(|| {
            InputError::KeyMismatch {
                key: key.to_string(),
            }
            .into()
        })
    }
}
