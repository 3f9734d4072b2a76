use chrono::{DateTime, TimeDelta, Utc};
use column_api::Node;

use super::{ColumnAppender, require};
use crate::error::{AppendError, ColumnTypeError};
use crate::proto::{ColDateTime, ColDateTime64, Column, ColumnInput};
use crate::types::MAX_PRECISION;

const NANOS_PER_SEC: i64 = 1_000_000_000;

/// Unix seconds → `DateTime`.
pub struct DateTimeAppender {
    col: ColDateTime,
}

impl DateTimeAppender {
    pub fn new(col: ColDateTime) -> Self {
        Self { col }
    }

    pub fn into_column(self) -> ColDateTime {
        self.col
    }
}

impl ColumnAppender for DateTimeAppender {
    fn append(&mut self, node: Option<&dyn Node>) -> Result<(), AppendError> {
        let seconds = i64::from(require(node)?.as_int()?);
        let value = DateTime::from_timestamp(seconds, 0).ok_or(AppendError::TimestampOutOfRange { seconds })?;
        self.col.append(value);
        Ok(())
    }

    fn column(&self) -> &dyn Column {
        &self.col
    }

    fn column_mut(&mut self) -> &mut dyn Column {
        &mut self.col
    }
}

/// Integer in source units → `DateTime64`.
///
/// `scale` converts one source unit to nanoseconds: 1 for nanoseconds,
/// 1_000 for microseconds, 1_000_000 for milliseconds.
pub struct DateTime64Appender {
    col: ColDateTime64,
    scale: i64,
}

impl DateTime64Appender {
    pub fn new(col: ColDateTime64, scale: i64) -> Self {
        Self { col, scale }
    }

    /// Source values are in units of the column's own precision,
    /// e.g. milliseconds for `DateTime64(3)`.
    pub fn from_precision(precision: u8, timezone: Option<String>) -> Result<Self, ColumnTypeError> {
        let scale = scale_for_precision(precision).ok_or_else(|| ColumnTypeError::Precision(precision.to_string()))?;
        Ok(Self::new(ColDateTime64::new(precision, timezone), scale))
    }

    pub fn scale(&self) -> i64 {
        self.scale
    }

    pub fn into_column(self) -> ColDateTime64 {
        self.col
    }
}

impl ColumnAppender for DateTime64Appender {
    fn append(&mut self, node: Option<&dyn Node>) -> Result<(), AppendError> {
        let value = require(node)?.as_int64()?;
        let nanos = value.checked_mul(self.scale).ok_or(AppendError::ScaleOverflow {
            value,
            scale: self.scale,
        })?;
        let (seconds, rem) = split_nanos(nanos);
        let ts = DateTime::from_timestamp(seconds, 0)
            .and_then(|t| t.checked_add_signed(TimeDelta::nanoseconds(rem)))
            .ok_or(AppendError::TimestampOutOfRange { seconds })?;
        self.col.append(ts);
        Ok(())
    }

    fn column(&self) -> &dyn Column {
        &self.col
    }

    fn column_mut(&mut self) -> &mut dyn Column {
        &mut self.col
    }
}

/// `10^(9 - precision)`, `None` above nanosecond precision.
pub fn scale_for_precision(precision: u8) -> Option<i64> {
    let exp = MAX_PRECISION.checked_sub(precision)?;
    Some(10_i64.pow(u32::from(exp)))
}

/// Truncating split: the remainder has the sign of `nanos`.
pub fn split_nanos(nanos: i64) -> (i64, i64) {
    (nanos / NANOS_PER_SEC, nanos % NANOS_PER_SEC)
}

#[cfg(test)]
#[path = "datetime_test.rs"]
mod datetime_test;
