use super::{Column, ColumnInput, NullableInput};
use crate::error::EncodeError;
use crate::types::ColumnType;

/// `Nullable(T)`: a null map (one byte per row, 1 = null) followed by the
/// inner column. Null rows hold the inner type's zero value.
#[derive(Debug, Clone, Default)]
pub struct ColNullable<C> {
    nulls: Vec<bool>,
    values: C,
}

impl<C: NullableInput> ColNullable<C> {
    /// Wrap an empty inner column.
    pub fn new(values: C) -> Self {
        debug_assert!(values.is_empty());
        Self {
            nulls: Vec::new(),
            values,
        }
    }

    /// `None` is the null sentinel.
    pub fn append(&mut self, value: Option<C::Value>) {
        match value {
            Some(v) => {
                self.nulls.push(false);
                self.values.append(v);
            }
            None => {
                self.nulls.push(true);
                self.values.append_zero();
            }
        }
    }

    pub fn is_null(&self, row: usize) -> Option<bool> {
        self.nulls.get(row).copied()
    }

    pub fn null_count(&self) -> usize {
        self.nulls.iter().filter(|n| **n).count()
    }

    pub fn values(&self) -> &C {
        &self.values
    }
}

impl<C: NullableInput> Column for ColNullable<C> {
    fn column_type(&self) -> ColumnType {
        ColumnType::Nullable(Box::new(self.values.column_type()))
    }

    fn len(&self) -> usize {
        self.nulls.len()
    }

    fn reset(&mut self) {
        self.nulls.clear();
        self.values.reset();
    }

    fn encode(&self, out: &mut Vec<u8>) -> Result<(), EncodeError> {
        out.extend(self.nulls.iter().map(|n| u8::from(*n)));
        self.values.encode(out)
    }
}
