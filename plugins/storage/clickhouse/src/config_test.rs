use super::*;

const ACCESS_LOG: &str = r#"
table = "access_log"

[[columns]]
name = "ts"
type = "DateTime64(3)"

[[columns]]
name = "received"
type = "DateTime"

[[columns]]
name = "client_ip"
type = "Nullable(IPv6)"

[[columns]]
name = "level"
type = "Enum8('info' = 1, 'warn' = 2, 'error' = 3)"
"#;

#[test]
fn parses_columns_in_order() {
    let config = TableConfig::parse(ACCESS_LOG).unwrap();

    assert_eq!(config.table, "access_log");
    let names: Vec<_> = config.columns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["ts", "received", "client_ip", "level"]);
    assert_eq!(
        config.columns[0].column_type,
        ColumnType::DateTime64 {
            precision: 3,
            timezone: None,
        }
    );
    assert!(config.columns[2].column_type.is_nullable());
}

#[test]
fn builds_one_appender_per_column() {
    let config = TableConfig::parse(ACCESS_LOG).unwrap();
    let appenders = config.appenders().unwrap();

    assert_eq!(appenders.len(), 4);
    for (named, column) in appenders.iter().zip(&config.columns) {
        assert_eq!(named.name, column.name);
        assert_eq!(named.appender.column().column_type(), column.column_type);
        assert!(named.appender.column().is_empty());
    }
}

#[test]
fn rejects_unknown_type() {
    let err = TableConfig::parse(
        r#"
        table = "t"
        [[columns]]
        name = "id"
        type = "UInt64"
        "#,
    )
    .unwrap_err();

    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().contains("unsupported column type \"UInt64\""));
}

#[test]
fn rejects_duplicate_columns() {
    let err = TableConfig::parse(
        r#"
        table = "t"
        [[columns]]
        name = "ip"
        type = "IPv4"
        [[columns]]
        name = "ip"
        type = "IPv6"
        "#,
    )
    .unwrap_err();

    assert_eq!(err.to_string(), "table t: duplicate column \"ip\"");
}

#[test]
fn columns_default_to_empty() {
    let config = TableConfig::parse(r#"table = "empty""#).unwrap();
    assert!(config.columns.is_empty());
    assert!(config.appenders().unwrap().is_empty());
}

#[test]
fn load_reports_path() {
    let err = TableConfig::load("/nonexistent/table.toml").unwrap_err();
    assert!(err.to_string().starts_with("config /nonexistent/table.toml: "));
}
