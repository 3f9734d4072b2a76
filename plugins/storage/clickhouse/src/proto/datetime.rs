use chrono::{DateTime, Utc};

use super::{Column, ColumnInput};
use crate::error::EncodeError;
use crate::types::ColumnType;

/// `DateTime`: second precision, stored as `UInt32`.
#[derive(Debug, Clone, Default)]
pub struct ColDateTime {
    timezone: Option<String>,
    values: Vec<DateTime<Utc>>,
}

impl ColDateTime {
    pub fn new(timezone: Option<String>) -> Self {
        Self {
            timezone,
            values: Vec::new(),
        }
    }

    pub fn values(&self) -> &[DateTime<Utc>] {
        &self.values
    }
}

impl Column for ColDateTime {
    fn column_type(&self) -> ColumnType {
        ColumnType::DateTime {
            timezone: self.timezone.clone(),
        }
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn reset(&mut self) {
        self.values.clear();
    }

    fn encode(&self, out: &mut Vec<u8>) -> Result<(), EncodeError> {
        out.reserve(self.values.len() * 4);
        for (row, value) in self.values.iter().enumerate() {
            let secs = u32::try_from(value.timestamp()).map_err(|_| EncodeError::OutOfRange {
                column: self.column_type().to_string(),
                row,
                value: value.to_rfc3339(),
            })?;
            out.extend_from_slice(&secs.to_le_bytes());
        }
        Ok(())
    }
}

impl ColumnInput for ColDateTime {
    type Value = DateTime<Utc>;

    /// Sub-second part is dropped.
    fn append(&mut self, value: DateTime<Utc>) {
        let secs = value.timestamp();
        self.values.push(DateTime::from_timestamp(secs, 0).unwrap_or(value));
    }
}

/// `DateTime64(P)`: stored as `Int64` ticks of `10^-P` seconds.
#[derive(Debug, Clone)]
pub struct ColDateTime64 {
    precision: u8,
    timezone: Option<String>,
    values: Vec<DateTime<Utc>>,
}

impl ColDateTime64 {
    /// `precision` above 9 is clamped to 9.
    pub fn new(precision: u8, timezone: Option<String>) -> Self {
        Self {
            precision: precision.min(crate::types::MAX_PRECISION),
            timezone,
            values: Vec::new(),
        }
    }

    pub fn precision(&self) -> u8 {
        self.precision
    }

    pub fn values(&self) -> &[DateTime<Utc>] {
        &self.values
    }

    /// Ticks since epoch; nanoseconds finer than the precision are truncated.
    fn ticks(&self, value: &DateTime<Utc>) -> Option<i64> {
        let per_sec = 10_i64.pow(u32::from(self.precision));
        let sub = i64::from(value.timestamp_subsec_nanos()) / (1_000_000_000 / per_sec);
        value.timestamp().checked_mul(per_sec)?.checked_add(sub)
    }
}

impl Column for ColDateTime64 {
    fn column_type(&self) -> ColumnType {
        ColumnType::DateTime64 {
            precision: self.precision,
            timezone: self.timezone.clone(),
        }
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn reset(&mut self) {
        self.values.clear();
    }

    fn encode(&self, out: &mut Vec<u8>) -> Result<(), EncodeError> {
        out.reserve(self.values.len() * 8);
        for (row, value) in self.values.iter().enumerate() {
            let ticks = self.ticks(value).ok_or_else(|| EncodeError::OutOfRange {
                column: self.column_type().to_string(),
                row,
                value: value.to_rfc3339(),
            })?;
            out.extend_from_slice(&ticks.to_le_bytes());
        }
        Ok(())
    }
}

impl ColumnInput for ColDateTime64 {
    type Value = DateTime<Utc>;

    fn append(&mut self, value: DateTime<Utc>) {
        self.values.push(value);
    }
}
