use std::net::AddrParseError;

use column_api::CoercionError;

use crate::proto::AddressFamily;

/// Category of an append failure. Lets the batch builder decide whether to
/// skip the record, dead-letter it, or fail the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Value absent where the column is not nullable.
    Null,
    /// Value present but of the wrong primitive shape.
    Coercion,
    /// String is not an IP literal.
    AddressParse,
    /// IP literal of the other family.
    AddressFamily,
    /// Value doesn't fit the column's time range.
    Overflow,
}

/// Error returned by `ColumnAppender::append`.
///
/// The column is never modified when this is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppendError {
    #[error("node is nil")]
    NullValue,

    #[error(transparent)]
    Coercion(#[from] CoercionError),

    #[error("invalid IP address {value:?}: {source}")]
    AddressParse { value: String, source: AddrParseError },

    #[error("invalid {family} value, val={value}")]
    AddressFamily { family: AddressFamily, value: String },

    #[error("value {value} with scale {scale} overflows int64 nanoseconds")]
    ScaleOverflow { value: i64, scale: i64 },

    #[error("timestamp {seconds}s is out of range")]
    TimestampOutOfRange { seconds: i64 },
}

impl AppendError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppendError::NullValue => ErrorKind::Null,
            AppendError::Coercion(_) => ErrorKind::Coercion,
            AppendError::AddressParse { .. } => ErrorKind::AddressParse,
            AppendError::AddressFamily { .. } => ErrorKind::AddressFamily,
            AppendError::ScaleOverflow { .. } | AppendError::TimestampOutOfRange { .. } => {
                ErrorKind::Overflow
            }
        }
    }
}

/// Error writing a column in Native format.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error("{column}: row {row}: value {value} out of range")]
    OutOfRange { column: String, row: usize, value: String },

    #[error("{column}: row {row}: unknown enum value {value:?}")]
    UnknownEnumValue { column: String, row: usize, value: String },
}

/// Error parsing or building a column type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColumnTypeError {
    #[error("unsupported column type {0:?}")]
    Unsupported(String),

    #[error("invalid DateTime64 precision {0:?}, expected 0..=9")]
    Precision(String),

    #[error("invalid enum definition {definition:?}: {reason}")]
    Enum { definition: String, reason: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config {path}: {source}")]
    Io { path: String, source: std::io::Error },

    #[error("config parse: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("table {table}: duplicate column {column:?}")]
    DuplicateColumn { table: String, column: String },

    #[error("table {table}: column {column}: {source}")]
    Column { table: String, column: String, source: ColumnTypeError },
}
