//! 规则引擎领域模型
//!
//! 规则、条件树与事件的数据结构定义，以及条件节点的多态 JSON 解析。

use crate::error::{Result, RuleError};
use crate::operators::{LogicalOperator, Operator};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use uuid::Uuid;

/// 叶子条件：对单个事实、单个操作符、单个比较值的谓词
///
/// 只引用事实名，到评估时才解引用。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub fact: String,
    pub operator: Operator,
    /// 比较值。isNull/isNotNull 等操作符不使用该值，文档中可省略
    #[serde(default)]
    pub value: Value,
}

impl Condition {
    pub fn new(fact: impl Into<String>, operator: Operator, value: impl Into<Value>) -> Self {
        Self {
            fact: fact.into(),
            operator,
            value: value.into(),
        }
    }
}

/// 条件组：以 and/or 组合的条件与嵌套组
///
/// 不变式：零个子节点的条件组评估为 true（AND 的空虚真），这是刻意
/// 的策略而非错误。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionGroup {
    pub operator: LogicalOperator,
    pub conditions: Vec<ConditionNode>,
}

impl ConditionGroup {
    pub fn new(operator: LogicalOperator, conditions: Vec<ConditionNode>) -> Self {
        Self {
            operator,
            conditions,
        }
    }

    pub fn and(conditions: Vec<ConditionNode>) -> Self {
        Self::new(LogicalOperator::And, conditions)
    }

    pub fn or(conditions: Vec<ConditionNode>) -> Self {
        Self::new(LogicalOperator::Or, conditions)
    }
}

/// 条件树节点（叶子条件或嵌套条件组）
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConditionNode {
    Condition(Condition),
    Group(ConditionGroup),
}

impl From<Condition> for ConditionNode {
    fn from(condition: Condition) -> Self {
        Self::Condition(condition)
    }
}

impl From<ConditionGroup> for ConditionNode {
    fn from(group: ConditionGroup) -> Self {
        Self::Group(group)
    }
}

/// 条件节点按结构区分变体：带 "fact" 字段的对象是叶子条件，带
/// "conditions" 字段的对象是嵌套条件组，两者都不是则整体解析失败。
impl<'de> Deserialize<'de> for ConditionNode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        if !value.is_object() {
            return Err(de::Error::custom("条件节点必须是 JSON 对象"));
        }

        if value.get("fact").is_some() {
            serde_json::from_value(value)
                .map(ConditionNode::Condition)
                .map_err(de::Error::custom)
        } else if value.get("conditions").is_some() {
            serde_json::from_value(value)
                .map(ConditionNode::Group)
                .map_err(de::Error::custom)
        } else {
            Err(de::Error::custom(
                "条件节点缺少 fact 或 conditions 字段，无法识别为条件或条件组",
            ))
        }
    }
}

/// 规则命中时返回的事件，负载对引擎不透明
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<HashMap<String, Value>>,
}

impl Event {
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            params: None,
        }
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }
}

/// 规则：条件树与事件的配对，priority 越大越先评估
///
/// 规则独占其条件树；加入规则存储后不再修改，只能整体替换。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub priority: i32,
    pub conditions: ConditionGroup,
    pub event: Event,
}

impl Rule {
    /// 程序化构建规则，id 自动生成
    pub fn new(
        name: impl Into<String>,
        priority: i32,
        conditions: ConditionGroup,
        event: Event,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            priority,
            conditions,
            event,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

/// 事实集合：事实名到动态类型值的映射
///
/// 每次评估调用独立提供，引擎从不修改它。查找按事实名精确匹配。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Facts {
    values: HashMap<String, Value>,
}

impl Facts {
    pub fn new() -> Self {
        Self::default()
    }

    /// 链式写入一个事实
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// 从 JSON 对象字符串构建事实集合
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        match value {
            Value::Object(map) => Ok(Self::from(map)),
            _ => Err(RuleError::Parse("事实集合必须是 JSON 对象".to_string())),
        }
    }
}

impl From<serde_json::Map<String, Value>> for Facts {
    fn from(map: serde_json::Map<String, Value>) -> Self {
        Self {
            values: map.into_iter().collect(),
        }
    }
}

impl From<HashMap<String, Value>> for Facts {
    fn from(values: HashMap<String, Value>) -> Self {
        Self { values }
    }
}
