//! 自定义操作符注册表
//!
//! 将操作符标识符映射到调用方提供的二元谓词，支持运行时注册与移除。
//! 读写锁只保护注册表自身的映射，规则评估不持有任何锁。

use crate::error::{Result, RuleError};
use crate::operators::Operator;
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// 自定义操作符谓词：(事实值, 条件值) -> 是否成立
pub type CustomOperatorFn = Arc<dyn Fn(&Value, &Value) -> bool + Send + Sync>;

/// 自定义操作符注册表
///
/// 由引擎实例持有，不是进程级全局状态。允许多个并发查找，注册与
/// 移除互斥。查找在释放读锁后才调用谓词，谓词执行不在锁内。
#[derive(Default)]
pub struct OperatorRegistry {
    operators: RwLock<HashMap<String, CustomOperatorFn>>,
}

impl OperatorRegistry {
    /// 创建空注册表
    pub fn new() -> Self {
        Self {
            operators: RwLock::new(HashMap::new()),
        }
    }

    /// 注册自定义操作符
    ///
    /// 内置操作符标识符是保留名，同名标识符重复注册也会被拒绝，
    /// 两种情况都返回 [`RuleError::DuplicateOperator`]。
    pub fn register<F>(&self, id: impl Into<String>, predicate: F) -> Result<()>
    where
        F: Fn(&Value, &Value) -> bool + Send + Sync + 'static,
    {
        let id = id.into();
        if Operator::builtin(&id).is_some() {
            return Err(RuleError::DuplicateOperator(id));
        }

        let mut operators = self.operators.write();
        if operators.contains_key(&id) {
            return Err(RuleError::DuplicateOperator(id));
        }

        operators.insert(id.clone(), Arc::new(predicate));
        info!(operator = %id, "自定义操作符已注册");
        Ok(())
    }

    /// 移除自定义操作符，幂等，不存在时无错误
    pub fn unregister(&self, id: &str) {
        if self.operators.write().remove(id).is_some() {
            debug!(operator = %id, "自定义操作符已移除");
        }
    }

    /// 查找自定义操作符
    pub fn lookup(&self, id: &str) -> Option<CustomOperatorFn> {
        self.operators.read().get(id).cloned()
    }

    /// 标识符是否已注册
    pub fn contains(&self, id: &str) -> bool {
        self.operators.read().contains_key(id)
    }

    /// 已注册的自定义操作符数量
    pub fn len(&self) -> usize {
        self.operators.read().len()
    }

    /// 注册表是否为空
    pub fn is_empty(&self) -> bool {
        self.operators.read().is_empty()
    }
}
