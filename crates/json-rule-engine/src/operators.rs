//! 规则操作符定义

use serde::{Deserialize, Serialize};
use std::fmt;

/// 条件操作符
///
/// 内置操作符对应线上规则文档中的固定标识符；其余任意标识符解析为
/// [`Operator::Custom`]，在评估时到自定义操作符注册表中查找。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Operator {
    // 通用比较
    Equal,
    NotEqual,

    // 数值比较
    GreaterThan,
    LessThan,
    GreaterThanInclusive,
    LessThanInclusive,

    // 集合成员
    In,
    NotIn,

    // 模式匹配
    Regex,

    // 空值检查
    IsNull,
    IsNotNull,

    /// 自定义操作符标识符
    Custom(String),
}

impl Operator {
    /// 解析内置操作符标识符，未识别时返回 None
    pub fn builtin(id: &str) -> Option<Self> {
        match id {
            "equal" => Some(Self::Equal),
            "notEqual" => Some(Self::NotEqual),
            "greaterThan" => Some(Self::GreaterThan),
            "lessThan" => Some(Self::LessThan),
            "greaterThanInclusive" => Some(Self::GreaterThanInclusive),
            "lessThanInclusive" => Some(Self::LessThanInclusive),
            "in" => Some(Self::In),
            "notIn" => Some(Self::NotIn),
            "regex" => Some(Self::Regex),
            "isNull" => Some(Self::IsNull),
            "isNotNull" => Some(Self::IsNotNull),
            _ => None,
        }
    }

    /// 是否为内置操作符
    pub fn is_builtin(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }

    /// 线上格式中的标识符
    pub fn as_str(&self) -> &str {
        match self {
            Self::Equal => "equal",
            Self::NotEqual => "notEqual",
            Self::GreaterThan => "greaterThan",
            Self::LessThan => "lessThan",
            Self::GreaterThanInclusive => "greaterThanInclusive",
            Self::LessThanInclusive => "lessThanInclusive",
            Self::In => "in",
            Self::NotIn => "notIn",
            Self::Regex => "regex",
            Self::IsNull => "isNull",
            Self::IsNotNull => "isNotNull",
            Self::Custom(id) => id,
        }
    }
}

impl From<String> for Operator {
    fn from(id: String) -> Self {
        Self::builtin(&id).unwrap_or(Self::Custom(id))
    }
}

impl From<&str> for Operator {
    fn from(id: &str) -> Self {
        Self::from(id.to_string())
    }
}

impl From<Operator> for String {
    fn from(op: Operator) -> Self {
        match op {
            Operator::Custom(id) => id,
            builtin => builtin.as_str().to_string(),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 逻辑操作符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogicalOperator {
    And,
    Or,
}

impl fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::And => write!(f, "and"),
            Self::Or => write!(f, "or"),
        }
    }
}
