//! Typed, append-only column buffers for one insert block.
//!
//! Each buffer keeps rows in memory until the batch owner encodes the block
//! and calls `reset`. `encode` writes the column body of the ClickHouse
//! Native format (little-endian, no header).

mod datetime;
mod enums;
mod ip;
mod nullable;

pub use datetime::{ColDateTime, ColDateTime64};
pub use enums::{ColEnum, Enum8, Enum16, EnumWidth};
pub use ip::{AddressFamily, ColIPv4, ColIPv6};
pub use nullable::ColNullable;

use crate::error::EncodeError;
use crate::types::ColumnType;

/// Untyped view of a column buffer.
pub trait Column: Send {
    fn column_type(&self) -> ColumnType;

    /// Number of rows appended since construction or the last `reset`.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all rows, keeping allocated capacity.
    fn reset(&mut self);

    /// Append the Native column body to `out`.
    ///
    /// On error `out` may hold a partial column and must be discarded.
    fn encode(&self, out: &mut Vec<u8>) -> Result<(), EncodeError>;
}

/// Typed append. Infallible: values are already validated by the caller.
pub trait ColumnInput: Column {
    type Value;

    fn append(&mut self, value: Self::Value);
}

/// Columns that may sit inside `Nullable(...)`.
pub trait NullableInput: ColumnInput {
    /// Zero value stored under a null-map entry.
    fn append_zero(&mut self);
}
