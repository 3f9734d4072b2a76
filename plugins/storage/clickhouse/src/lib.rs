//! ClickHouse column appenders.
//!
//! Turns values of parsed JSON records into typed ClickHouse cells for
//! `DateTime`, `DateTime64`, `IPv4`, `IPv6` (optionally `Nullable`),
//! `Enum8` and `Enum16` columns.
//!
//! ```ignore
//! let config = TableConfig::load("access_log.toml")?;
//! for NamedAppender { name, mut appender } in config.appenders()? {
//!     appender.append(record.get(&name).map(|v| v as &dyn Node))?;
//! }
//! ```

pub mod appender;
pub mod config;
pub mod error;
pub mod proto;
pub mod types;

pub use appender::{ColumnAppender, new_appender};
pub use config::{ColumnConfig, NamedAppender, TableConfig};
pub use error::{AppendError, ColumnTypeError, ConfigError, EncodeError, ErrorKind};
pub use types::{ColumnType, EnumDefinition};
