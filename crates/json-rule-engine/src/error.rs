//! 规则引擎错误类型

use thiserror::Error;

/// 规则引擎统一错误
///
/// 只有两类真正的错误：规则文档的结构/解析错误，以及操作符注册冲突。
/// 评估过程中的"失败"（事实缺失、类型不匹配、非法正则等）不是错误，
/// 条件直接判为不成立。
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("规则解析失败: {0}")]
    Parse(String),

    #[error("JSON 序列化错误: {0}")]
    Json(#[from] serde_json::Error),

    #[error("规则文件读写失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("操作符已被注册: {0}")]
    DuplicateOperator(String),
}

/// 错误结果类型别名
pub type Result<T> = std::result::Result<T, RuleError>;
