//! 条件评估器
//!
//! 对条件树做纯递归的布尔求值。评估从不报错：事实缺失、类型不匹配、
//! 未注册的操作符都使对应条件判为不成立（fail-closed），规则只是不命中。

use crate::compare::ValueComparator;
use crate::models::{Condition, ConditionGroup, ConditionNode, Facts};
use crate::operators::{LogicalOperator, Operator};
use crate::registry::OperatorRegistry;

/// 条件评估器
///
/// 借用引擎的操作符注册表；自身无状态，可在多处并发使用。
pub struct ConditionEvaluator<'a> {
    registry: &'a OperatorRegistry,
}

impl<'a> ConditionEvaluator<'a> {
    pub fn new(registry: &'a OperatorRegistry) -> Self {
        Self { registry }
    }

    /// 判定事实集合是否满足条件树
    pub fn evaluate(&self, group: &ConditionGroup, facts: &Facts) -> bool {
        self.evaluate_group(group, facts)
    }

    fn evaluate_node(&self, node: &ConditionNode, facts: &Facts) -> bool {
        match node {
            ConditionNode::Condition(condition) => self.evaluate_condition(condition, facts),
            ConditionNode::Group(group) => self.evaluate_group(group, facts),
        }
    }

    /// 短路求值：子节点始终按文档顺序从左到右评估，AND 遇 false、
    /// OR 遇 true 即停，后续子节点不再求值。带副作用的自定义操作符
    /// 依赖这一顺序。
    fn evaluate_group(&self, group: &ConditionGroup, facts: &Facts) -> bool {
        if group.conditions.is_empty() {
            return true;
        }

        match group.operator {
            LogicalOperator::And => group
                .conditions
                .iter()
                .all(|node| self.evaluate_node(node, facts)),
            LogicalOperator::Or => group
                .conditions
                .iter()
                .any(|node| self.evaluate_node(node, facts)),
        }
    }

    fn evaluate_condition(&self, condition: &Condition, facts: &Facts) -> bool {
        // 事实缺失时条件不成立，不中断所在条件组
        let Some(fact_value) = facts.get(&condition.fact) else {
            return false;
        };

        match &condition.operator {
            Operator::Equal => ValueComparator::equal(fact_value, &condition.value),
            Operator::NotEqual => !ValueComparator::equal(fact_value, &condition.value),
            Operator::GreaterThan => ValueComparator::greater_than(fact_value, &condition.value),
            Operator::LessThan => ValueComparator::less_than(fact_value, &condition.value),
            Operator::GreaterThanInclusive => {
                ValueComparator::greater_than_or_equal(fact_value, &condition.value)
            }
            Operator::LessThanInclusive => {
                ValueComparator::less_than_or_equal(fact_value, &condition.value)
            }
            Operator::In => ValueComparator::in_collection(fact_value, &condition.value),
            Operator::NotIn => !ValueComparator::in_collection(fact_value, &condition.value),
            Operator::Regex => ValueComparator::matches_pattern(fact_value, &condition.value),
            // 空值检查直接针对事实值，不使用条件的比较值
            Operator::IsNull => fact_value.is_null(),
            Operator::IsNotNull => !fact_value.is_null(),
            Operator::Custom(id) => match self.registry.lookup(id) {
                Some(predicate) => predicate(fact_value, &condition.value),
                None => false,
            },
        }
    }
}
