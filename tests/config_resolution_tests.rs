//! Tests for loosely-typed configuration resolution
//!
//! These tests verify that arbitrary input shapes resolve to concrete
//! generation parameters via the fixed alias-key priority tables, and that
//! malformed input degrades to defaults instead of failing.

use employee_roster_simulator::types::{ResolvedConfig, DEFAULT_MAX_AGE, DEFAULT_MIN_AGE};
use serde_json::{json, Value};

/// Absent input resolves to zero employees and the default window
#[test]
fn test_null_resolves_to_defaults() {
    let config = ResolvedConfig::from_value(&Value::Null);

    assert_eq!(config.employee_count, 0);
    assert_eq!(config.min_age, DEFAULT_MIN_AGE);
    assert_eq!(config.max_age, DEFAULT_MAX_AGE);
}

/// A bare non-negative integer is the employee count
#[test]
fn test_bare_integer_is_count() {
    let config = ResolvedConfig::from_value(&json!(42));

    assert_eq!(config.employee_count, 42);
    assert_eq!(config.min_age, DEFAULT_MIN_AGE);
    assert_eq!(config.max_age, DEFAULT_MAX_AGE);
}

/// Count field aliases are scanned in priority order
#[test]
fn test_count_alias_priority_order() {
    assert_eq!(
        ResolvedConfig::from_value(&json!({"employeeCount": 1, "personCount": 2, "count": 3}))
            .employee_count,
        1
    );
    assert_eq!(
        ResolvedConfig::from_value(&json!({"personCount": 2, "count": 3})).employee_count,
        2
    );
    assert_eq!(ResolvedConfig::from_value(&json!({"count": 3})).employee_count, 3);
}

/// Invalid count shapes silently resolve to zero employees
#[test]
fn test_invalid_counts_degrade_to_zero() {
    for input in [
        json!(-5),
        json!(3.7),
        json!("10"),
        json!(true),
        json!([10]),
        json!({"employees": 10}),
        json!({"employeeCount": "many"}),
    ] {
        let config = ResolvedConfig::from_value(&input);
        assert_eq!(config.employee_count, 0, "input {:?} should resolve to zero", input);
    }
}

/// The age window can live in a nested box or inline on the input itself
#[test]
fn test_age_window_box_locations() {
    let nested = ResolvedConfig::from_value(&json!({"ageRange": {"min": 21, "max": 35}}));
    assert_eq!((nested.min_age, nested.max_age), (21, 35));

    let alias_box = ResolvedConfig::from_value(&json!({"age": {"min": 22, "max": 36}}));
    assert_eq!((alias_box.min_age, alias_box.max_age), (22, 36));

    let range_box = ResolvedConfig::from_value(&json!({"range": {"min": 23, "max": 37}}));
    assert_eq!((range_box.min_age, range_box.max_age), (23, 37));

    let inline = ResolvedConfig::from_value(&json!({"min": 24, "max": 38}));
    assert_eq!((inline.min_age, inline.max_age), (24, 38));
}

/// Box keys take priority over the inline window
#[test]
fn test_nested_box_shadows_inline_window() {
    let config = ResolvedConfig::from_value(&json!({
        "min": 50,
        "max": 60,
        "ageRange": {"min": 20, "max": 30},
    }));

    assert_eq!(config.min_age, 20);
    assert_eq!(config.max_age, 30);
}

/// Every min/max alias is accepted
#[test]
fn test_bound_key_aliases() {
    let min_aliases = ["min", "minAge", "ageMin", "from", "ageFrom", "fromAge", "lowerAge"];
    for key in min_aliases {
        let config = ResolvedConfig::from_value(&json!({"ageRange": {key: 33}}));
        assert_eq!(config.min_age, 33, "min alias {} not honored", key);
    }

    let max_aliases = ["max", "maxAge", "ageMax", "to", "ageTo", "toAge", "upperAge"];
    for key in max_aliases {
        let config = ResolvedConfig::from_value(&json!({"ageRange": {key: 44}}));
        assert_eq!(config.max_age, 44, "max alias {} not honored", key);
    }
}

/// Rejected overrides fall back to defaults and the clamp keeps the window sane
#[test]
fn test_bound_rejection_and_clamping() {
    // Negative minimum rejected
    let config = ResolvedConfig::from_value(&json!({"ageRange": {"min": -1}}));
    assert_eq!(config.min_age, DEFAULT_MIN_AGE);

    // Maximum below the accepted minimum rejected
    let config = ResolvedConfig::from_value(&json!({"ageRange": {"min": 40, "max": 20}}));
    assert_eq!(config.min_age, 40);
    assert_eq!(config.max_age, DEFAULT_MAX_AGE);

    // Accepted minimum above the default maximum clamps the maximum up
    let config = ResolvedConfig::from_value(&json!({"ageRange": {"min": 70}}));
    assert_eq!(config.min_age, 70);
    assert_eq!(config.max_age, 70);
}

/// The degenerate equal-bounds window is accepted as-is
#[test]
fn test_degenerate_window_resolution() {
    let config = ResolvedConfig::from_value(&json!({
        "employeeCount": 5,
        "ageRange": {"min": 30, "max": 30},
    }));

    assert_eq!(config.employee_count, 5);
    assert_eq!(config.min_age, 30);
    assert_eq!(config.max_age, 30);
}

/// The full structured shape resolves every field at once
#[test]
fn test_full_structured_request() {
    let config = ResolvedConfig::from_value(&json!({
        "personCount": 12,
        "range": {"fromAge": 25, "upperAge": 55},
    }));

    assert_eq!(config.employee_count, 12);
    assert_eq!(config.min_age, 25);
    assert_eq!(config.max_age, 55);
}
