//! Property tests for field normalization.
//!
//! Metadata comes from scrapers we don't control, so normalization has to
//! hold up against arbitrary JSON.

use proptest::prelude::*;
use serde_json::{json, Value};

use video_report::{build_record, coerce_int, format_followers, resolve_followers};

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        any::<u64>().prop_map(Value::from),
        any::<f64>().prop_map(|f| serde_json::Number::from_f64(f).map_or(Value::Null, Value::Number)),
        ".*".prop_map(Value::String),
        "[+-]?[0-9_ ]{0,12}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 24, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::hash_map("[a-z_]{1,24}", inner, 0..6)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn coerce_int_never_panics(value in arb_json(), default in any::<i64>()) {
        let _ = coerce_int(Some(&value), default);
    }

    #[test]
    fn coerce_int_missing_returns_default(default in any::<i64>()) {
        prop_assert_eq!(coerce_int(None, default), default);
        prop_assert_eq!(coerce_int(Some(&Value::Null), default), default);
    }

    #[test]
    fn coerce_int_round_trips_integer_strings(n in any::<i64>()) {
        prop_assert_eq!(coerce_int(Some(&json!(n.to_string())), 0), n);
        prop_assert_eq!(coerce_int(Some(&json!(format!("  {n} "))), 0), n);
    }

    #[test]
    fn garbage_strings_return_default(s in "[a-zA-Z][a-zA-Z0-9 ]*", default in any::<i64>()) {
        prop_assert_eq!(coerce_int(Some(&json!(s)), default), default);
    }

    #[test]
    fn followers_are_never_zero(value in arb_json()) {
        if let Some(map) = value.as_object() {
            if let Some(n) = resolve_followers(map) {
                prop_assert!(n > 0);
            }
        }
    }

    #[test]
    fn built_records_keep_invariants(value in arb_json(), url in "https://[a-z]{1,10}\\.com/[a-z0-9]{0,8}") {
        if let Some(record) = build_record(&value, &url) {
            prop_assert_eq!(record.source_url, url);
            prop_assert_ne!(record.followers, Some(0));
            prop_assert!(!record.title.trim().is_empty());
            prop_assert!(!record.username.trim().is_empty());
        }
    }

    #[test]
    fn format_followers_is_na_only_when_unknown(n in 1u64..) {
        prop_assert_ne!(format_followers(Some(n)), "N/A");
    }
}

#[test]
fn test_positive_string_follower_candidate() {
    let map = json!({"follower_count": "1500"});
    assert_eq!(resolve_followers(map.as_object().unwrap()), Some(1500));
}

#[test]
fn test_zero_follower_candidate_falls_through_to_nested() {
    let map = json!({"follower_count": 0, "channel": {"follower_count": 250}});
    assert_eq!(resolve_followers(map.as_object().unwrap()), Some(250));
}

#[test]
fn test_format_followers_thresholds() {
    assert_eq!(format_followers(Some(999)), "999");
    assert_eq!(format_followers(Some(1_000)), "1.0K");
    assert_eq!(format_followers(Some(1_500)), "1.5K");
    assert_eq!(format_followers(Some(1_000_000)), "1.0M");
    assert_eq!(format_followers(Some(2_300_000)), "2.3M");
    assert_eq!(format_followers(Some(0)), "N/A");
    assert_eq!(format_followers(None), "N/A");
}
