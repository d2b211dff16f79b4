//! JSON 规则引擎
//!
//! 可嵌入的规则评估引擎：给定命名事实集合与声明式定义的规则集，
//! 判定哪些规则的条件成立并返回关联事件。支持：
//! - JSON 规则文档与程序化构建
//! - 嵌套 and/or 条件树的短路求值
//! - 内置比较/集合/正则/空值操作符
//! - 运行时注册的自定义操作符
//! - 按优先级降序的规则集评估

pub mod compare;
pub mod engine;
pub mod error;
pub mod evaluator;
pub mod models;
pub mod operators;
pub mod registry;
pub mod store;

pub use compare::ValueComparator;
pub use engine::Engine;
pub use error::{Result, RuleError};
pub use evaluator::ConditionEvaluator;
pub use models::{Condition, ConditionGroup, ConditionNode, Event, Facts, Rule};
pub use operators::{LogicalOperator, Operator};
pub use registry::{CustomOperatorFn, OperatorRegistry};
pub use store::RuleStore;
