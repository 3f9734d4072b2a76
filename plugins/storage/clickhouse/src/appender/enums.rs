use column_api::Node;

use super::{ColumnAppender, require};
use crate::error::AppendError;
use crate::proto::{ColEnum, Column, ColumnInput, Enum8, Enum16, EnumWidth};

/// String label → `Enum8`/`Enum16`.
///
/// Labels are not checked against the declared members here; `ColEnum`
/// does that when the block is encoded.
pub struct EnumAppender<W> {
    col: ColEnum<W>,
}

pub type Enum8Appender = EnumAppender<Enum8>;
pub type Enum16Appender = EnumAppender<Enum16>;

impl<W: EnumWidth> EnumAppender<W> {
    pub fn new(col: ColEnum<W>) -> Self {
        Self { col }
    }

    pub fn into_column(self) -> ColEnum<W> {
        self.col
    }
}

impl<W: EnumWidth> ColumnAppender for EnumAppender<W> {
    fn append(&mut self, node: Option<&dyn Node>) -> Result<(), AppendError> {
        let label = require(node)?.as_string()?;
        self.col.append(label.to_string());
        Ok(())
    }

    fn column(&self) -> &dyn Column {
        &self.col
    }

    fn column_mut(&mut self) -> &mut dyn Column {
        &mut self.col
    }
}

#[cfg(test)]
#[path = "enums_test.rs"]
mod enums_test;
