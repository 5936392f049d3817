//! Property-based tests for catalog merge laws

use biucing::config::{merge, merge_value, Mapping};
use proptest::collection::{btree_map, vec};
use proptest::prelude::*;
use serde_json::Value;

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[a-z]{0,6}".prop_map(Value::String),
    ]
}

fn value() -> impl Strategy<Value = Value> {
    leaf().prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            vec(inner.clone(), 0..4).prop_map(Value::Array),
            btree_map("[a-e]", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

fn mapping() -> impl Strategy<Value = Mapping> {
    btree_map("[a-e]{1,2}", value(), 0..5).prop_map(|m| m.into_iter().collect())
}

/// Merging an empty override returns the base unchanged
#[test]
fn test_empty_override_is_identity() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&mapping(), |base| {
            prop_assert_eq!(merge(base.clone(), Mapping::new()), base);
            Ok(())
        })
        .unwrap();
}

/// Merging into an empty base yields the override
#[test]
fn test_empty_base_yields_override() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&mapping(), |overlay| {
            prop_assert_eq!(merge(Mapping::new(), overlay.clone()), overlay);
            Ok(())
        })
        .unwrap();
}

/// Every key of the result is either base-only, override-only, or the
/// merge of both values
#[test]
fn test_merge_is_keywise() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(mapping(), mapping()), |(base, overlay)| {
            let merged = merge(base.clone(), overlay.clone());

            for key in base.keys().chain(overlay.keys()) {
                let expected = match (base.get(key), overlay.get(key)) {
                    (Some(b), Some(o)) => merge_value(b.clone(), o.clone()),
                    (Some(b), None) => b.clone(),
                    (None, Some(o)) => o.clone(),
                    (None, None) => unreachable!(),
                };
                prop_assert_eq!(merged.get(key), Some(&expected));
            }
            prop_assert!(merged
                .keys()
                .all(|k| base.contains_key(k) || overlay.contains_key(k)));
            Ok(())
        })
        .unwrap();
}

/// Non-mapping override values replace the base value wholesale
#[test]
fn test_non_mapping_override_replaces() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(value(), leaf(), vec(value(), 0..4)), |(base, scalar, items)| {
            prop_assert_eq!(merge_value(base.clone(), scalar.clone()), scalar);
            let sequence = Value::Array(items);
            prop_assert_eq!(merge_value(base, sequence.clone()), sequence);
            Ok(())
        })
        .unwrap();
}

/// Merging is deterministic and leaves its inputs untouched
#[test]
fn test_merge_is_deterministic() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(mapping(), mapping()), |(base, overlay)| {
            let base_before = base.clone();
            let overlay_before = overlay.clone();

            let first = merge(base.clone(), overlay.clone());
            let second = merge(base.clone(), overlay.clone());

            prop_assert_eq!(first, second);
            prop_assert_eq!(base, base_before);
            prop_assert_eq!(overlay, overlay_before);
            Ok(())
        })
        .unwrap();
}

/// Applying the same override twice changes nothing further
#[test]
fn test_merge_is_idempotent_in_override() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(mapping(), mapping()), |(base, overlay)| {
            let once = merge(base, overlay.clone());
            let twice = merge(once.clone(), overlay);
            prop_assert_eq!(once, twice);
            Ok(())
        })
        .unwrap();
}
