//! 复杂示例：嵌套条件组与多条不同优先级的规则

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

    // 高优先级：白金会员 或 消费满 1000
    engine.add_rule(Rule::new(
        "premium-discount",
        20,
        ConditionGroup::or(vec![
            Condition::new("membershipLevel", Operator::Equal, "platinum").into(),
            Condition::new("totalAmount", Operator::GreaterThanInclusive, 1000).into(),
        ]),
        Event::new("apply_discount").with_param("percentage", 15),
    ));

    // 低优先级：普通会员 且 (购物车有电子产品 或 消费超 100)
    engine.add_rule(Rule::new(
        "standard-discount",
        5,
        ConditionGroup::and(vec![
            Condition::new("membershipLevel", Operator::NotIn, json!(["platinum", "gold"]))
                .into(),
            ConditionGroup::or(vec![
                Condition::new("categories", Operator::In, json!(["electronics"])).into(),
                Condition::new("totalAmount", Operator::GreaterThan, 100).into(),
            ])
            .into(),
        ]),
        Event::new("apply_discount").with_param("percentage", 5),
    ));

    // 邮箱格式校验规则
    engine.add_rule(Rule::new(
        "valid-email",
        1,
        ConditionGroup::and(vec![
            Condition::new("email", Operator::Regex, r"^[\w.-]+@[\w.-]+\.\w+$").into(),
        ]),
        Event::new("email_verified"),
    ));

    let scenarios = [
        (
            "platinum member",
            Facts::new()
                .with("membershipLevel", "platinum")
                .with("totalAmount", 50)
                .with("email", "vip@example.com"),
        ),
        (
            "basic member with big cart",
            Facts::new()
                .with("membershipLevel", "basic")
                .with("totalAmount", 250)
                .with("email", "not-an-email"),
        ),
        (
            "basic member, small cart",
            Facts::new()
                .with("membershipLevel", "basic")
                .with("totalAmount", 30)
                .with("categories", "books"),
        ),
    ];

    for (label, facts) in scenarios {
        println!("--- {label} ---");
        for event in engine.evaluate(&facts) {
            match event.params {
                Some(params) => println!("  {} {params:?}", event.event_type),
                None => println!("  {}", event.event_type),
            }
        }
    }

    Ok(())
}
