//! Tests for the SQL shaping and capability surface of the Oracle driver.

mod common;
use common::*;

use chrono::{FixedOffset, TimeDelta, TimeZone};
use oxide_sql_driver::{Capability, DialectDriver, DriverError, LikeAnchor};

fn dialect() -> Box<dyn DialectDriver> {
    Box::new(driver(ScriptedConnection::new()))
}

#[test]
fn quote_identifier_wraps_and_doubles_quotes() {
    let d = dialect();
    for name in ["users", "", "a\"b", "\"\"", "mixed Case", "x\"y\"z"] {
        let quoted = d.quote_identifier(name);
        assert!(quoted.starts_with('"') && quoted.ends_with('"'), "{quoted}");
        let inner = &quoted[1..quoted.len() - 1];
        assert_eq!(inner.replace("\"\"", "\""), name);
        assert_eq!(
            inner.matches('"').count(),
            2 * name.matches('"').count(),
            "{quoted}"
        );
    }
}

#[test]
fn quote_identifier_is_injective_on_plain_names() {
    let d = dialect();
    let names = ["a", "b", "ab", "a b", "A", ""];
    let quoted: Vec<String> = names.iter().map(|n| d.quote_identifier(n)).collect();
    for (i, a) in quoted.iter().enumerate() {
        for b in &quoted[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn limit_without_offset_wraps_once() {
    let sql = dialect()
        .apply_limit_offset("SELECT * FROM t", Some(10), Some(0))
        .unwrap();
    assert_eq!(sql, "SELECT * FROM (SELECT * FROM t) WHERE ROWNUM <= 10");
}

#[test]
fn limit_with_offset_wraps_twice() {
    let sql = dialect()
        .apply_limit_offset("SELECT * FROM t", Some(10), Some(5))
        .unwrap();
    assert_eq!(sql.matches("SELECT").count(), 3);
    assert!(sql.contains("ROWNUM AS \"__rnum\""));
    assert!(sql.contains("WHERE ROWNUM <= 15"));
    assert!(sql.ends_with("WHERE \"__rnum\" > 5"));
}

#[test]
fn offset_without_limit_has_no_upper_bound() {
    let sql = dialect()
        .apply_limit_offset("SELECT * FROM t", None, Some(5))
        .unwrap();
    assert!(!sql.contains("ROWNUM <="));
    assert_eq!(sql.matches("WHERE").count(), 1);
    assert!(sql.ends_with("WHERE \"__rnum\" > 5"));
}

#[test]
fn negative_bounds_are_invalid_arguments() {
    let d = dialect();
    for (limit, offset) in [
        (Some(-1), None),
        (Some(-1), Some(10)),
        (None, Some(-1)),
        (Some(10), Some(-1)),
    ] {
        let err = d
            .apply_limit_offset("SELECT * FROM t", limit, offset)
            .unwrap_err();
        assert!(matches!(err, DriverError::InvalidArgument(_)), "{err}");
    }
}

#[test]
fn supports_only_sequence_and_subselect() {
    let d = dialect();
    for capability in Capability::ALL {
        let expected = matches!(capability, Capability::Sequence | Capability::Subselect);
        assert_eq!(d.supports(capability), expected, "{capability:?}");
    }
}

#[test]
fn date_interval_is_not_supported() {
    let err = dialect()
        .format_date_interval(&TimeDelta::days(3))
        .unwrap_err();
    assert!(matches!(err, DriverError::NotSupported(_)));
}

#[test]
fn like_is_not_implemented_for_any_anchor() {
    let d = dialect();
    for anchor in [0, 1, -1].map(LikeAnchor::from) {
        let err = d.format_like("50%", anchor).unwrap_err();
        assert!(matches!(err, DriverError::NotImplemented(_)));
    }
}

#[test]
fn date_time_defaults_to_unix_seconds() {
    let value = FixedOffset::west_opt(5 * 3600)
        .unwrap()
        .with_ymd_and_hms(2001, 9, 8, 20, 46, 40)
        .unwrap();
    assert_eq!(dialect().format_date_time(&value), "1000000000");
}
