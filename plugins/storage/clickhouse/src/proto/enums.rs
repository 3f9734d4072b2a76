use std::marker::PhantomData;

use super::{Column, ColumnInput};
use crate::error::EncodeError;
use crate::types::{ColumnType, EnumDefinition};

/// Storage width of an enum column.
pub trait EnumWidth: Send + 'static {
    fn column_type(definition: EnumDefinition) -> ColumnType;

    /// Write one ordinal; `None` if it doesn't fit the width.
    fn write(ordinal: i16, out: &mut Vec<u8>) -> Option<()>;
}

/// `Enum8`: `Int8` ordinals.
#[derive(Debug, Clone, Copy)]
pub enum Enum8 {}

/// `Enum16`: `Int16` ordinals.
#[derive(Debug, Clone, Copy)]
pub enum Enum16 {}

impl EnumWidth for Enum8 {
    fn column_type(definition: EnumDefinition) -> ColumnType {
        ColumnType::Enum8(definition)
    }

    fn write(ordinal: i16, out: &mut Vec<u8>) -> Option<()> {
        let ordinal = i8::try_from(ordinal).ok()?;
        out.extend_from_slice(&ordinal.to_le_bytes());
        Some(())
    }
}

impl EnumWidth for Enum16 {
    fn column_type(definition: EnumDefinition) -> ColumnType {
        ColumnType::Enum16(definition)
    }

    fn write(ordinal: i16, out: &mut Vec<u8>) -> Option<()> {
        out.extend_from_slice(&ordinal.to_le_bytes());
        Some(())
    }
}

/// Enum column keeping the labels as appended.
///
/// Labels are resolved against the definition only in `encode`, so a label
/// that isn't a declared member is accepted here and rejected there.
#[derive(Debug, Clone)]
pub struct ColEnum<W> {
    definition: EnumDefinition,
    values: Vec<String>,
    width: PhantomData<W>,
}

impl<W: EnumWidth> ColEnum<W> {
    pub fn new(definition: EnumDefinition) -> Self {
        Self {
            definition,
            values: Vec::new(),
            width: PhantomData,
        }
    }

    pub fn definition(&self) -> &EnumDefinition {
        &self.definition
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }
}

impl<W: EnumWidth> Column for ColEnum<W> {
    fn column_type(&self) -> ColumnType {
        W::column_type(self.definition.clone())
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn reset(&mut self) {
        self.values.clear();
    }

    fn encode(&self, out: &mut Vec<u8>) -> Result<(), EncodeError> {
        for (row, label) in self.values.iter().enumerate() {
            let ordinal = self.definition.value_of(label).ok_or_else(|| EncodeError::UnknownEnumValue {
                column: self.column_type().to_string(),
                row,
                value: label.clone(),
            })?;
            W::write(ordinal, out).ok_or_else(|| EncodeError::OutOfRange {
                column: self.column_type().to_string(),
                row,
                value: ordinal.to_string(),
            })?;
        }
        Ok(())
    }
}

impl<W: EnumWidth> ColumnInput for ColEnum<W> {
    type Value = String;

    fn append(&mut self, value: String) {
        self.values.push(value);
    }
}
