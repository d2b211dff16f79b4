//! JSON 规则集示例：从 JSON 字符串装载规则、评估、保存并重新装载

use anyhow::Result;
use rule_engine::{Engine, Facts};

const RULES_JSON: &str = r#"[
    {
        "id": "vip-customer",
        "name": "VIP Customer Rule",
        "priority": 20,
        "conditions": {
            "operator": "and",
            "conditions": [
                {"fact": "membershipLevel", "operator": "equal", "value": "platinum"},
                {"fact": "yearsAsMember", "operator": "greaterThan", "value": 5}
            ]
        },
        "event": {
            "type": "vip-status",
            "params": {
                "message": "Customer is a VIP member",
                "benefits": ["priority support", "exclusive offers"]
            }
        }
    },
    {
        "id": "new-customer",
        "name": "New Customer Welcome",
        "priority": 5,
        "conditions": {
            "operator": "and",
            "conditions": [
                {"fact": "yearsAsMember", "operator": "lessThan", "value": 1},
                {"fact": "firstPurchase", "operator": "equal", "value": true}
            ]
        },
        "event": {
            "type": "welcome-offer",
            "params": {
                "message": "Welcome to our service!",
                "offer": "10% off your next purchase"
            }
        }
    }
]"#;

fn print_events(engine: &Engine, facts: &Facts) {
    let events = engine.evaluate(facts);
    if events.is_empty() {
        println!("  no rules matched");
    }
    for event in events {
        println!("  rule triggered: {}", event.event_type);
        if let Some(params) = &event.params {
            if let Some(message) = params.get("message") {
                println!("    message: {message}");
            }
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut engine = Engine::new();
    engine.load_rules_from_json(RULES_JSON)?;

    println!("VIP customer scenario:");
    print_events(
        &engine,
        &Facts::new()
            .with("membershipLevel", "platinum")
            .with("yearsAsMember", 6)
            .with("firstPurchase", false),
    );

    println!("\nNew customer scenario:");
    print_events(
        &engine,
        &Facts::new()
            .with("membershipLevel", "basic")
            .with("yearsAsMember", 0)
            .with("firstPurchase", true),
    );

    // 保存到文件后重新装载，评估行为保持一致
    let path = std::env::temp_dir().join("rule_engine_demo_rules.json");
    engine.save_rules_to_file(&path)?;

    let mut reloaded = Engine::new();
    reloaded.load_rules_from_file(&path)?;
    std::fs::remove_file(&path).ok();

    println!("\nReloaded rule set: {} rule(s)", reloaded.rule_count());

    Ok(())
}
