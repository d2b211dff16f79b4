//! 自定义操作符示例：注册调用方提供的谓词并在规则中使用

use anyhow::Result;
use rule_engine::{Condition, ConditionGroup, Engine, Event, Facts, Operator, Rule};
use serde_json::json;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut engine = Engine::new();

    engine.register_operator("divisibleBy", |fact, value| {
        match (fact.as_f64(), value.as_f64()) {
            (Some(a), Some(b)) if b != 0.0 => a % b == 0.0,
            _ => false,
        }
    })?;

    engine.register_operator("startsWith", |fact, value| {
        match (fact.as_str(), value.as_str()) {
            (Some(s), Some(prefix)) => s.starts_with(prefix),
            _ => false,
        }
    })?;

    engine.register_operator("olderThan", |fact, value| {
        match (fact.as_f64(), value.as_f64()) {
            (Some(age), Some(years)) => age > years,
            _ => false,
        }
    })?;

    engine.add_rule(Rule::new(
        "age-rule",
        1,
        ConditionGroup::and(vec![
            Condition::new("age", Operator::Custom("divisibleBy".into()), 5).into(),
            Condition::new("age", Operator::Custom("olderThan".into()), 18).into(),
        ]),
        Event::new("ageRuleMatched").with_param("message", "Age requirements met!"),
    ));

    engine.add_rule(Rule::new(
        "name-rule",
        2,
        ConditionGroup::and(vec![
            Condition::new("name", Operator::Custom("startsWith".into()), "John").into(),
        ]),
        Event::new("nameRuleMatched").with_param("message", "Name starts with John!"),
    ));

    let test_cases = [
        Facts::new().with("age", 25).with("name", "John Doe"),
        Facts::new().with("age", 16).with("name", "John Smith"),
        Facts::new().with("age", 30).with("name", "Jane Doe"),
    ];

    for (i, facts) in test_cases.iter().enumerate() {
        let events = engine.evaluate(facts);
        println!("Test case {}:", i + 1);
        if events.is_empty() {
            println!("  no rules matched");
        }
        for event in events {
            let message = event
                .params
                .as_ref()
                .and_then(|p| p.get("message"))
                .cloned()
                .unwrap_or(json!(""));
            println!("  {} - {message}", event.event_type);
        }
    }

    Ok(())
}
