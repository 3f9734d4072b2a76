//! Column appenders: one JSON node in, one typed ClickHouse cell out.
//!
//! An appender owns its column buffer exclusively. The batch builder calls
//! `append` once per record, encodes the column when the block is full and
//! then calls `reset`. A failed `append` leaves the buffer untouched and the
//! appender usable.

mod datetime;
mod enums;
mod ip;

pub use datetime::{DateTime64Appender, DateTimeAppender, scale_for_precision, split_nanos};
pub use enums::{Enum8Appender, Enum16Appender, EnumAppender};
pub use ip::{IPv4Appender, IPv6Appender, IpAppender, IpFamily};

use column_api::Node;

use crate::error::{AppendError, ColumnTypeError};
use crate::proto::{ColDateTime, ColEnum, Column};
use crate::types::ColumnType;

pub trait ColumnAppender: Send {
    /// Convert `node` and append it. `None` is an absent field.
    fn append(&mut self, node: Option<&dyn Node>) -> Result<(), AppendError>;

    fn column(&self) -> &dyn Column;

    fn column_mut(&mut self) -> &mut dyn Column;

    /// Drop all rows, ready for the next block.
    fn reset(&mut self) {
        self.column_mut().reset();
    }
}

/// The node, or `NullValue` if it is absent or `null`.
fn require(node: Option<&dyn Node>) -> Result<&dyn Node, AppendError> {
    present(node).ok_or(AppendError::NullValue)
}

fn present(node: Option<&dyn Node>) -> Option<&dyn Node> {
    node.filter(|n| !n.is_null())
}

/// Build the appender for a column type.
///
/// `Nullable` is only supported around `IPv4` and `IPv6`.
pub fn new_appender(column_type: &ColumnType) -> Result<Box<dyn ColumnAppender>, ColumnTypeError> {
    let appender: Box<dyn ColumnAppender> = match column_type {
        ColumnType::DateTime { timezone } => {
            Box::new(DateTimeAppender::new(ColDateTime::new(timezone.clone())))
        }
        ColumnType::DateTime64 { precision, timezone } => {
            Box::new(DateTime64Appender::from_precision(*precision, timezone.clone())?)
        }
        ColumnType::IPv4 => Box::new(IPv4Appender::new(false)),
        ColumnType::IPv6 => Box::new(IPv6Appender::new(false)),
        ColumnType::Enum8(definition) => Box::new(Enum8Appender::new(ColEnum::new(definition.clone()))),
        ColumnType::Enum16(definition) => Box::new(Enum16Appender::new(ColEnum::new(definition.clone()))),
        ColumnType::Nullable(inner) => match inner.as_ref() {
            ColumnType::IPv4 => Box::new(IPv4Appender::new(true)),
            ColumnType::IPv6 => Box::new(IPv6Appender::new(true)),
            _ => return Err(ColumnTypeError::Unsupported(column_type.to_string())),
        },
    };
    tracing::debug!(%column_type, "column appender created");
    Ok(appender)
}

#[cfg(test)]
fn node(value: &serde_json::Value) -> Option<&dyn Node> {
    Some(value as &dyn Node)
}
