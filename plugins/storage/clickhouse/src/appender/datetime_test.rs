use serde_json::json;

use super::*;
use crate::appender::node;
use crate::error::ErrorKind;

fn datetime() -> DateTimeAppender {
    DateTimeAppender::new(ColDateTime::default())
}

fn datetime64(scale: i64) -> DateTime64Appender {
    DateTime64Appender::new(ColDateTime64::new(9, None), scale)
}

#[test]
fn datetime_appends_unix_seconds() {
    let mut app = datetime();
    app.append(node(&json!(1_700_000_000))).unwrap();

    let col = app.into_column();
    assert_eq!(col.values().len(), 1);
    assert_eq!(col.values()[0].timestamp(), 1_700_000_000);
    assert_eq!(col.values()[0].timestamp_subsec_nanos(), 0);
}

#[test]
fn datetime_rejects_null_and_absent() {
    let mut app = datetime();
    assert_eq!(app.append(node(&json!(null))), Err(AppendError::NullValue));
    assert_eq!(app.append(None), Err(AppendError::NullValue));
    assert_eq!(app.column().len(), 0);
}

#[test]
fn datetime_rejects_non_integers() {
    let mut app = datetime();
    for bad in [json!("1700000000"), json!(1.5), json!(3_000_000_000_i64), json!([1])] {
        let err = app.append(node(&bad)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Coercion, "{bad}");
    }
    assert!(app.column().is_empty());

    // Still usable after errors.
    app.append(node(&json!(0))).unwrap();
    assert_eq!(app.column().len(), 1);
}

#[test]
fn datetime64_microseconds() {
    let mut app = datetime64(1_000);
    app.append(node(&json!(1_700_000_000_123_456_i64))).unwrap();

    let ts = app.into_column().values()[0];
    assert_eq!(ts.timestamp(), 1_700_000_000);
    assert_eq!(ts.timestamp_subsec_nanos(), 123_456_000);
}

#[test]
fn datetime64_negative_milliseconds() {
    let mut app = datetime64(1_000_000);
    app.append(node(&json!(-1_500))).unwrap();

    assert_eq!(split_nanos(-1_500_000_000), (-1, -500_000_000));
    let ts = app.into_column().values()[0];
    assert_eq!(ts.timestamp_millis(), -1_500);
    assert_eq!(ts.timestamp(), -2);
    assert_eq!(ts.timestamp_subsec_nanos(), 500_000_000);
}

#[test]
fn datetime64_scale_overflow_fails() {
    let mut app = datetime64(1_000_000);
    let err = app.append(node(&json!(1_700_000_000_123_456_i64))).unwrap_err();

    assert_eq!(
        err,
        AppendError::ScaleOverflow {
            value: 1_700_000_000_123_456,
            scale: 1_000_000,
        }
    );
    assert_eq!(err.kind(), ErrorKind::Overflow);
    assert!(app.column().is_empty());
}

#[test]
fn datetime64_rejects_null_and_strings() {
    let mut app = datetime64(1);
    assert_eq!(app.append(node(&json!(null))), Err(AppendError::NullValue));
    assert_eq!(app.append(node(&json!("12"))).unwrap_err().kind(), ErrorKind::Coercion);
    assert!(app.column().is_empty());
}

#[test]
fn split_nanos_truncates_toward_zero() {
    assert_eq!(split_nanos(0), (0, 0));
    assert_eq!(split_nanos(1_700_000_000_123_456_000), (1_700_000_000, 123_456_000));
    assert_eq!(split_nanos(-999_999_999), (0, -999_999_999));
    assert_eq!(split_nanos(-2_000_000_000), (-2, 0));
}

#[test]
fn scale_follows_precision() {
    assert_eq!(scale_for_precision(0), Some(1_000_000_000));
    assert_eq!(scale_for_precision(3), Some(1_000_000));
    assert_eq!(scale_for_precision(6), Some(1_000));
    assert_eq!(scale_for_precision(9), Some(1));
    assert_eq!(scale_for_precision(10), None);

    let app = DateTime64Appender::from_precision(3, Some("UTC".into())).unwrap();
    assert_eq!(app.scale(), 1_000_000);
    assert_eq!(app.column().column_type().to_string(), "DateTime64(3, 'UTC')");
    assert!(DateTime64Appender::from_precision(10, None).is_err());
}

#[test]
fn reset_empties_column() {
    let mut app = datetime64(1);
    app.append(node(&json!(5))).unwrap();
    app.reset();
    assert!(app.column().is_empty());
}
