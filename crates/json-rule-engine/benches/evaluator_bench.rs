//! 条件评估器性能基准测试
//!
//! 针对值比较器与条件树评估的细粒度性能测试。

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rule_engine::{
    Condition, ConditionEvaluator, ConditionGroup, Facts, Operator, OperatorRegistry,
    ValueComparator,
};
use serde_json::{Value, json};
use std::hint::black_box;

/// 数值比较操作基准
fn bench_numeric_comparisons(c: &mut Criterion) {
    let mut group = c.benchmark_group("numeric_comparisons");

    let field = json!(1000);
    let expected = json!(500);

    group.bench_function("equal", |b| {
        b.iter(|| ValueComparator::equal(black_box(&field), black_box(&expected)))
    });
    group.bench_function("greater_than", |b| {
        b.iter(|| ValueComparator::greater_than(black_box(&field), black_box(&expected)))
    });
    group.bench_function("greater_than_or_equal", |b| {
        b.iter(|| ValueComparator::greater_than_or_equal(black_box(&field), black_box(&expected)))
    });
    group.bench_function("less_than", |b| {
        b.iter(|| ValueComparator::less_than(black_box(&field), black_box(&expected)))
    });

    group.finish();
}

/// 字符串与结构化相等基准
fn bench_equality_kinds(c: &mut Criterion) {
    let mut group = c.benchmark_group("equality_kinds");

    let string_a = json!("hello world");
    let string_b = json!("hello world");
    group.bench_function("string", |b| {
        b.iter(|| ValueComparator::equal(black_box(&string_a), black_box(&string_b)))
    });

    let object_a = json!({"tags": ["a", "b"], "level": 3});
    let object_b = json!({"tags": ["a", "b"], "level": 3});
    group.bench_function("structural", |b| {
        b.iter(|| ValueComparator::equal(black_box(&object_a), black_box(&object_b)))
    });

    group.finish();
}

/// 正则匹配基准（每次评估编译一次模式）
fn bench_regex(c: &mut Criterion) {
    let mut group = c.benchmark_group("regex");

    let email = json!("user@example.com");
    let simple_pattern = json!(r"^user");
    let complex_pattern = json!(r"^[\w.-]+@[\w.-]+\.\w+$");

    group.bench_function("simple_pattern", |b| {
        b.iter(|| ValueComparator::matches_pattern(black_box(&email), black_box(&simple_pattern)))
    });
    group.bench_function("complex_pattern", |b| {
        b.iter(|| ValueComparator::matches_pattern(black_box(&email), black_box(&complex_pattern)))
    });

    group.finish();
}

/// in 操作符不同列表大小的性能
fn bench_in_collection_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("in_collection_scaling");

    let target = json!("target");

    for size in [5, 10, 50, 100, 500] {
        let items: Vec<Value> = (0..size)
            .map(|i| {
                if i == size - 1 {
                    json!("target")
                } else {
                    json!(format!("item_{i}"))
                }
            })
            .collect();
        let list = Value::Array(items);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| ValueComparator::in_collection(black_box(&target), black_box(&list)))
        });
    }

    group.finish();
}

/// 条件树评估基准：不同宽度的 AND 组
fn bench_and_group_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("and_group_width");

    let registry = OperatorRegistry::new();
    let evaluator = ConditionEvaluator::new(&registry);

    for width in [2, 5, 10, 20, 50] {
        let conditions = (0..width)
            .map(|i| {
                Condition::new(format!("field_{i}"), Operator::Equal, format!("value_{i}"))
                    .into()
            })
            .collect();
        let tree = ConditionGroup::and(conditions);

        let mut facts = Facts::new();
        for i in 0..width {
            facts.insert(format!("field_{i}"), format!("value_{i}"));
        }

        group.bench_with_input(BenchmarkId::from_parameter(width), &width, |b, _| {
            b.iter(|| evaluator.evaluate(black_box(&tree), black_box(&facts)))
        });
    }

    group.finish();
}

/// 条件树评估基准：不同深度的嵌套组
fn bench_nested_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("nested_depth");

    fn build_nested(depth: usize) -> ConditionGroup {
        if depth == 0 {
            return ConditionGroup::and(vec![
                Condition::new("leaf", Operator::Equal, "value").into(),
            ]);
        }

        let children = vec![
            Condition::new("leaf", Operator::Equal, "value").into(),
            build_nested(depth - 1).into(),
        ];
        if depth % 2 == 0 {
            ConditionGroup::and(children)
        } else {
            ConditionGroup::or(children)
        }
    }

    let registry = OperatorRegistry::new();
    let evaluator = ConditionEvaluator::new(&registry);
    let facts = Facts::new().with("leaf", "value");

    for depth in [1, 4, 8, 16] {
        let tree = build_nested(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, _| {
            b.iter(|| evaluator.evaluate(black_box(&tree), black_box(&facts)))
        });
    }

    group.finish();
}

/// 自定义操作符分发基准（含注册表查找开销）
fn bench_custom_operator_dispatch(c: &mut Criterion) {
    let registry = OperatorRegistry::new();
    registry
        .register("isEven", |fact, _| fact.as_i64().is_some_and(|n| n % 2 == 0))
        .unwrap();
    let evaluator = ConditionEvaluator::new(&registry);

    let tree = ConditionGroup::and(vec![
        Condition::new("number", Operator::Custom("isEven".into()), json!(null)).into(),
    ]);
    let facts = Facts::new().with("number", 42);

    c.bench_function("custom_operator_dispatch", |b| {
        b.iter(|| evaluator.evaluate(black_box(&tree), black_box(&facts)))
    });
}

/// 缺失事实处理基准
fn bench_missing_fact(c: &mut Criterion) {
    let registry = OperatorRegistry::new();
    let evaluator = ConditionEvaluator::new(&registry);

    let tree = ConditionGroup::and(vec![
        Condition::new("absent", Operator::Equal, "anything").into(),
    ]);
    let facts = Facts::new().with("present", 1);

    c.bench_function("missing_fact", |b| {
        b.iter(|| evaluator.evaluate(black_box(&tree), black_box(&facts)))
    });
}

criterion_group!(
    benches,
    bench_numeric_comparisons,
    bench_equality_kinds,
    bench_regex,
    bench_in_collection_scaling,
    bench_and_group_width,
    bench_nested_depth,
    bench_custom_operator_dispatch,
    bench_missing_fact,
);

criterion_main!(benches);
