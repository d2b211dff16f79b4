//! 规则存储
//!
//! 持有按优先级降序排列的规则序列。排序在写入时维护（sort-on-insert），
//! 评估路径直接按当前顺序迭代。

use crate::models::Rule;
use tracing::{debug, instrument};

/// 规则存储
///
/// 不变式：规则始终按 priority 降序排列，同优先级保持插入顺序
/// （稳定排序）。存储本身不支持评估期间的并发修改，需要并发更新的
/// 调用方先通过 [`RuleStore::snapshot`] 取快照再评估。
#[derive(Debug, Clone, Default)]
pub struct RuleStore {
    rules: Vec<Rule>,
}

impl RuleStore {
    /// 创建空存储
    pub fn new() -> Self {
        Self::default()
    }

    /// 加入规则并立即重建排序不变式
    #[instrument(skip(self, rule), fields(rule_id = %rule.id, priority = rule.priority))]
    pub fn add(&mut self, rule: Rule) {
        self.rules.push(rule);
        self.sort_by_priority();
        debug!("规则已加入存储");
    }

    /// 整体替换规则集
    pub fn replace_all(&mut self, rules: Vec<Rule>) {
        self.rules = rules;
        self.sort_by_priority();
    }

    // Vec::sort_by 是稳定排序，同优先级规则保持插入顺序
    fn sort_by_priority(&mut self) {
        self.rules.sort_by(|a, b| b.priority.cmp(&a.priority));
    }

    /// 当前优先级顺序下的规则序列
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// 复制当前排序后的规则序列，供与规则更新并发的评估使用
    pub fn snapshot(&self) -> Vec<Rule> {
        self.rules.clone()
    }

    /// 按 id 查找规则
    pub fn get(&self, id: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.id == id)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// 清空所有规则
    pub fn clear(&mut self) {
        self.rules.clear();
    }
}
