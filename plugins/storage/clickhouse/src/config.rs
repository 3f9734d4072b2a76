use std::path::Path;

use serde::Deserialize;

use crate::appender::{ColumnAppender, new_appender};
use crate::error::ConfigError;
use crate::types::ColumnType;

/// Column layout of one target table, parsed from TOML.
///
/// ```toml
/// table = "access_log"
///
/// [[columns]]
/// name = "ts"
/// type = "DateTime64(3)"
///
/// [[columns]]
/// name = "client_ip"
/// type = "Nullable(IPv6)"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct TableConfig {
    pub table: String,

    #[serde(default)]
    pub columns: Vec<ColumnConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ColumnConfig {
    pub name: String,
    /// ClickHouse type, e.g. `"Enum8('info' = 1, 'warn' = 2)"`.
    #[serde(rename = "type")]
    pub column_type: ColumnType,
}

/// An appender together with the record field it reads.
pub struct NamedAppender {
    pub name: String,
    pub appender: Box<dyn ColumnAppender>,
}

impl TableConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), table = %config.table, columns = config.columns.len(), "table config loaded");
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (i, column) in self.columns.iter().enumerate() {
            if self.columns[..i].iter().any(|c| c.name == column.name) {
                return Err(ConfigError::DuplicateColumn {
                    table: self.table.clone(),
                    column: column.name.clone(),
                });
            }
        }
        Ok(())
    }

    /// One fresh appender per column, in declaration order.
    pub fn appenders(&self) -> Result<Vec<NamedAppender>, ConfigError> {
        self.columns
            .iter()
            .map(|column| {
                let appender = new_appender(&column.column_type).map_err(|source| ConfigError::Column {
                    table: self.table.clone(),
                    column: column.name.clone(),
                    source,
                })?;
                Ok(NamedAppender {
                    name: column.name.clone(),
                    appender,
                })
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
