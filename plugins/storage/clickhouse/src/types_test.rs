use super::*;

#[test]
fn parses_datetime() {
    assert_eq!(ColumnType::parse("DateTime"), Ok(ColumnType::DateTime { timezone: None }));
    assert_eq!(
        ColumnType::parse(" DateTime('Asia/Tokyo') "),
        Ok(ColumnType::DateTime {
            timezone: Some("Asia/Tokyo".into()),
        })
    );
    assert!(ColumnType::parse("DateTime()").is_err());
}

#[test]
fn parses_datetime64() {
    assert_eq!(
        "DateTime64(6)".parse::<ColumnType>(),
        Ok(ColumnType::DateTime64 {
            precision: 6,
            timezone: None,
        })
    );
    assert_eq!(
        ColumnType::parse("DateTime64(3, 'UTC')"),
        Ok(ColumnType::DateTime64 {
            precision: 3,
            timezone: Some("UTC".into()),
        })
    );
}

#[test]
fn rejects_bad_precision() {
    assert_eq!(
        ColumnType::parse("DateTime64(10)"),
        Err(ColumnTypeError::Precision("10".into()))
    );
    assert!(matches!(ColumnType::parse("DateTime64(x)"), Err(ColumnTypeError::Precision(_))));
    assert!(ColumnType::parse("DateTime64").is_err());
}

#[test]
fn parses_ips() {
    assert_eq!(ColumnType::parse("IPv4"), Ok(ColumnType::IPv4));
    assert_eq!(ColumnType::parse("IPv6"), Ok(ColumnType::IPv6));
    assert_eq!(
        ColumnType::parse("Nullable(IPv4)"),
        Ok(ColumnType::Nullable(Box::new(ColumnType::IPv4)))
    );
}

#[test]
fn nullable_only_wraps_ips() {
    assert_eq!(
        ColumnType::parse("Nullable(DateTime)"),
        Err(ColumnTypeError::Unsupported("Nullable(DateTime)".into()))
    );
    assert!(ColumnType::parse("Nullable(Nullable(IPv4))").is_err());
}

#[test]
fn rejects_other_types() {
    for ty in ["String", "UInt32", "IPv4(1)", "LowCardinality(String)", "Enum8", ""] {
        assert!(ColumnType::parse(ty).is_err(), "{ty}");
    }
}

#[test]
fn parses_enum8() {
    let ty = ColumnType::parse("Enum8('info' = 1, 'warn'=2,'error' = -128)").unwrap();
    let ColumnType::Enum8(def) = &ty else {
        panic!("expected Enum8, got {ty}");
    };
    assert_eq!(def.value_of("info"), Some(1));
    assert_eq!(def.value_of("error"), Some(-128));
    assert_eq!(def.value_of("debug"), None);
    assert_eq!(ty.to_string(), "Enum8('info' = 1, 'warn' = 2, 'error' = -128)");
}

#[test]
fn enum_labels_may_contain_syntax() {
    let ty = ColumnType::parse(r"Enum16('a, b' = 1, 'it\'s' = 2, 'x = (y)' = 300)").unwrap();
    let ColumnType::Enum16(def) = &ty else {
        panic!("expected Enum16, got {ty}");
    };
    let labels: Vec<_> = def.variants().iter().map(|(l, _)| l.as_str()).collect();
    assert_eq!(labels, ["a, b", "it's", "x = (y)"]);
    assert_eq!(ColumnType::parse(&ty.to_string()), Ok(ty.clone()));
}

#[test]
fn enum8_value_range() {
    let err = ColumnType::parse("Enum8('a' = 128)").unwrap_err();
    assert!(matches!(err, ColumnTypeError::Enum { .. }));
    assert!(ColumnType::parse("Enum16('a' = 32767)").is_ok());
    assert!(ColumnType::parse("Enum16('a' = 32768)").is_err());
}

#[test]
fn enum_rejects_duplicates_and_garbage() {
    for ty in [
        "Enum8('a' = 1, 'a' = 2)",
        "Enum8('a' = 1, 'b' = 1)",
        "Enum8()",
        "Enum8('a')",
        "Enum8(a = 1)",
        "Enum8('a' = 1 'b' = 2)",
        "Enum8('a = 1)",
    ] {
        assert!(
            matches!(ColumnType::parse(ty), Err(ColumnTypeError::Enum { .. })),
            "{ty}"
        );
    }
}

#[test]
fn display_round_trips() {
    for ty in ["DateTime", "DateTime64(0, 'UTC')", "Nullable(IPv6)", "Enum8('a' = 1)"] {
        assert_eq!(ColumnType::parse(ty).unwrap().to_string(), ty);
    }
}
