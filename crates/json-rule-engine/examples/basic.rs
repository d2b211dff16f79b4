//! 基础示例：程序化构建单条规则并评估

use anyhow::Result;
use rule_engine::{Condition, ConditionGroup, Engine, Event, Facts, Operator, Rule};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut engine = Engine::new();

    // age > 18 AND country == "US"
    engine.add_rule(Rule::new(
        "us-adult",
        1,
        ConditionGroup::and(vec![
            Condition::new("age", Operator::GreaterThan, 18).into(),
            Condition::new("country", Operator::Equal, "US").into(),
        ]),
        Event::new("us_adult").with_param("message", "US adult customer"),
    ));

    let matching = Facts::new().with("age", 20).with("country", "US");
    let non_matching = Facts::new().with("age", 15).with("country", "US");

    for (label, facts) in [("matching", &matching), ("non-matching", &non_matching)] {
        let events = engine.evaluate(facts);
        println!("{label}: {} event(s)", events.len());
        for event in events {
            println!("  triggered: {}", event.event_type);
        }
    }

    Ok(())
}
