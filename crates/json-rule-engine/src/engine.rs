//! 规则引擎
//!
//! 组织一次完整评估：按优先级顺序逐条评估规则的条件树，收集命中
//! 规则的事件。同时提供规则集的 JSON 与文件装载/保存适配。

use crate::error::Result;
use crate::evaluator::ConditionEvaluator;
use crate::models::{Event, Facts, Rule};
use crate::registry::{CustomOperatorFn, OperatorRegistry};
use crate::store::RuleStore;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, info, instrument, trace};

/// 规则引擎
///
/// 持有规则存储与自定义操作符注册表。注册表是引擎实例的成员而非
/// 进程级全局状态，锁的范围只覆盖注册表映射，评估本身无锁。
#[derive(Default)]
pub struct Engine {
    store: RuleStore,
    registry: OperatorRegistry,
}

impl Engine {
    /// 创建空引擎
    pub fn new() -> Self {
        Self {
            store: RuleStore::new(),
            registry: OperatorRegistry::new(),
        }
    }

    /// 加入一条规则，排序不变式立即重建
    pub fn add_rule(&mut self, rule: Rule) {
        self.store.add(rule);
    }

    /// 注册自定义操作符，内置标识符与已注册标识符会被拒绝
    pub fn register_operator<F>(&self, id: impl Into<String>, predicate: F) -> Result<()>
    where
        F: Fn(&Value, &Value) -> bool + Send + Sync + 'static,
    {
        self.registry.register(id, predicate)
    }

    /// 移除自定义操作符，幂等
    pub fn unregister_operator(&self, id: &str) {
        self.registry.unregister(id);
    }

    /// 查找自定义操作符
    pub fn lookup_operator(&self, id: &str) -> Option<CustomOperatorFn> {
        self.registry.lookup(id)
    }

    /// 对一个事实集合评估全部规则，返回命中规则的事件
    ///
    /// 规则按优先级降序逐条评估，彼此独立，没有跨规则的提前终止：
    /// 即使某条规则命中，其余规则仍会评估。返回的事件按规则顺序排列。
    pub fn evaluate(&self, facts: &Facts) -> Vec<Event> {
        let evaluator = ConditionEvaluator::new(&self.registry);
        let mut events = Vec::new();

        for rule in self.store.rules() {
            if evaluator.evaluate(&rule.conditions, facts) {
                trace!(rule_id = %rule.id, rule_name = %rule.name, "规则命中");
                events.push(rule.event.clone());
            }
        }

        debug!(matched = events.len(), total = self.store.len(), "规则集评估完成");
        events
    }

    /// 从 JSON 字符串装载规则集，原子替换
    ///
    /// 整个数组解析成功后才替换内存中的规则集；任何一条规则或条件
    /// 解析失败都会中止装载，原有规则集保持不变。
    #[instrument(skip_all)]
    pub fn load_rules_from_json(&mut self, json: &str) -> Result<()> {
        let rules: Vec<Rule> = serde_json::from_str(json)?;
        let count = rules.len();
        self.store.replace_all(rules);
        info!(rule_count = count, "规则集已加载");
        Ok(())
    }

    /// 将当前规则集序列化为带缩进的 JSON
    pub fn rules_to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self.store.rules())?)
    }

    /// 从文件装载规则集，语义与 [`Engine::load_rules_from_json`] 一致
    #[instrument(skip_all)]
    pub fn load_rules_from_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        self.load_rules_from_json(&json)?;
        info!(path = %path.display(), "规则文件已装载");
        Ok(())
    }

    /// 将当前规则集保存到文件
    #[instrument(skip_all)]
    pub fn save_rules_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.rules_to_json()?)?;
        info!(path = %path.display(), rule_count = self.store.len(), "规则文件已保存");
        Ok(())
    }

    /// 当前优先级顺序下的规则序列
    pub fn rules(&self) -> &[Rule] {
        self.store.rules()
    }

    /// 规则数量
    pub fn rule_count(&self) -> usize {
        self.store.len()
    }

    /// 规则存储
    pub fn store(&self) -> &RuleStore {
        &self.store
    }

    /// 自定义操作符注册表
    pub fn registry(&self) -> &OperatorRegistry {
        &self.registry
    }
}
