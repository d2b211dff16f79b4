//! 值比较器
//!
//! 对动态类型值的类型感知比较：相等、排序、数值强制转换、集合成员、
//! 正则匹配。所有比较失败一律返回 false，不产生错误。

use regex::Regex;
use serde_json::Value;
use std::cmp::Ordering;

/// 值比较器
pub struct ValueComparator;

impl ValueComparator {
    /// 相等比较
    ///
    /// 两侧均为 null 时相等；仅一侧为 null 时不相等；数值统一按 f64
    /// 比较（100 == 100.0）；字符串和布尔值按精确值比较；其余类型
    /// （数组、对象及跨类型组合）做结构化深度比较。
    pub fn equal(a: &Value, b: &Value) -> bool {
        match (a, b) {
            (Value::Null, Value::Null) => true,
            (Value::Null, _) | (_, Value::Null) => false,
            (Value::Number(_), Value::Number(_)) => {
                Self::numeric_compare(a, b) == Some(Ordering::Equal)
            }
            (Value::String(x), Value::String(y)) => x == y,
            (Value::Bool(x), Value::Bool(y)) => x == y,
            _ => a == b,
        }
    }

    /// 大于比较，仅对两侧均为数值时有定义，否则为 false
    pub fn greater_than(a: &Value, b: &Value) -> bool {
        Self::numeric_compare(a, b) == Some(Ordering::Greater)
    }

    /// 小于比较，仅对两侧均为数值时有定义，否则为 false
    pub fn less_than(a: &Value, b: &Value) -> bool {
        Self::numeric_compare(a, b) == Some(Ordering::Less)
    }

    /// 大于等于：定义为 greater_than || equal
    ///
    /// 复用 equal 的完整语义，因此相等的非数值（如相同字符串）也满足
    /// 大于等于，即使大于比较本身对它们恒为 false。
    pub fn greater_than_or_equal(a: &Value, b: &Value) -> bool {
        Self::greater_than(a, b) || Self::equal(a, b)
    }

    /// 小于等于：定义为 less_than || equal
    pub fn less_than_or_equal(a: &Value, b: &Value) -> bool {
        Self::less_than(a, b) || Self::equal(a, b)
    }

    /// 数值排序，排序语义的唯一权威来源
    ///
    /// 两侧统一强制转换为 f64 后比较；任一侧非数值时返回 None。
    /// 整数超出 2^53 后会损失精度，极大的 64 位整数可能被判为相等。
    pub fn numeric_compare(a: &Value, b: &Value) -> Option<Ordering> {
        let x = a.as_f64()?;
        let y = b.as_f64()?;
        x.partial_cmp(&y)
    }

    /// 集合成员检查
    ///
    /// collection 必须是数组，线性扫描，任一元素与 value 按 equal
    /// 语义相等即为 true；非数组集合为 false。
    pub fn in_collection(value: &Value, collection: &Value) -> bool {
        match collection {
            Value::Array(items) => items.iter().any(|item| Self::equal(value, item)),
            _ => false,
        }
    }

    /// 正则匹配
    ///
    /// 值与模式都必须是字符串；模式非法时条件判为不成立，不中断评估。
    pub fn matches_pattern(value: &Value, pattern: &Value) -> bool {
        let (Some(s), Some(p)) = (value.as_str(), pattern.as_str()) else {
            return false;
        };

        match Regex::new(p) {
            Ok(re) => re.is_match(s),
            Err(_) => false,
        }
    }
}
