//! ClickHouse column types handled by this plugin.
//!
//! Types are written the way ClickHouse prints them in `DESCRIBE TABLE`:
//!
//! - `DateTime`, `DateTime('Europe/Berlin')`
//! - `DateTime64(3)`, `DateTime64(6, 'UTC')`
//! - `IPv4`, `IPv6`, `Nullable(IPv4)`, `Nullable(IPv6)`
//! - `Enum8('info' = 1, 'warn' = 2)`, `Enum16(...)`

use std::fmt;
use std::str::FromStr;

use crate::error::ColumnTypeError;

/// Largest sub-second precision of `DateTime64`.
pub const MAX_PRECISION: u8 = 9;

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(try_from = "String")]
pub enum ColumnType {
    DateTime { timezone: Option<String> },
    DateTime64 { precision: u8, timezone: Option<String> },
    IPv4,
    IPv6,
    Enum8(EnumDefinition),
    Enum16(EnumDefinition),
    /// Only `IPv4` and `IPv6` are accepted inside.
    Nullable(Box<ColumnType>),
}

impl ColumnType {
    pub fn parse(s: &str) -> Result<Self, ColumnTypeError> {
        let s = s.trim();
        let unsupported = || ColumnTypeError::Unsupported(s.to_string());

        let (name, args) = match s.find('(') {
            Some(open) => {
                let args = s[open + 1..].strip_suffix(')').ok_or_else(unsupported)?;
                (s[..open].trim(), Some(args))
            }
            None => (s, None),
        };

        match (name, args) {
            ("DateTime", None) => Ok(ColumnType::DateTime { timezone: None }),
            ("DateTime", Some(args)) => Ok(ColumnType::DateTime {
                timezone: Some(unquote(args).ok_or_else(unsupported)?),
            }),
            ("DateTime64", Some(args)) => {
                let (precision, timezone) = match args.split_once(',') {
                    Some((p, tz)) => (p, Some(unquote(tz).ok_or_else(unsupported)?)),
                    None => (args, None),
                };
                let precision = precision
                    .trim()
                    .parse::<u8>()
                    .ok()
                    .filter(|p| *p <= MAX_PRECISION)
                    .ok_or_else(|| ColumnTypeError::Precision(precision.trim().to_string()))?;
                Ok(ColumnType::DateTime64 { precision, timezone })
            }
            ("IPv4", None) => Ok(ColumnType::IPv4),
            ("IPv6", None) => Ok(ColumnType::IPv6),
            ("Enum8", Some(args)) => Ok(ColumnType::Enum8(EnumDefinition::parse(args, i8::MIN.into(), i8::MAX.into())?)),
            ("Enum16", Some(args)) => Ok(ColumnType::Enum16(EnumDefinition::parse(args, i16::MIN, i16::MAX)?)),
            ("Nullable", Some(args)) => match ColumnType::parse(args)? {
                inner @ (ColumnType::IPv4 | ColumnType::IPv6) => Ok(ColumnType::Nullable(Box::new(inner))),
                _ => Err(unsupported()),
            },
            _ => Err(unsupported()),
        }
    }

    pub fn is_nullable(&self) -> bool {
        matches!(self, ColumnType::Nullable(_))
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::DateTime { timezone: None } => f.write_str("DateTime"),
            ColumnType::DateTime { timezone: Some(tz) } => write!(f, "DateTime('{tz}')"),
            ColumnType::DateTime64 { precision, timezone: None } => write!(f, "DateTime64({precision})"),
            ColumnType::DateTime64 { precision, timezone: Some(tz) } => {
                write!(f, "DateTime64({precision}, '{tz}')")
            }
            ColumnType::IPv4 => f.write_str("IPv4"),
            ColumnType::IPv6 => f.write_str("IPv6"),
            ColumnType::Enum8(def) => write!(f, "Enum8({def})"),
            ColumnType::Enum16(def) => write!(f, "Enum16({def})"),
            ColumnType::Nullable(inner) => write!(f, "Nullable({inner})"),
        }
    }
}

impl FromStr for ColumnType {
    type Err = ColumnTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColumnType::parse(s)
    }
}

impl TryFrom<String> for ColumnType {
    type Error = ColumnTypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        ColumnType::parse(&s)
    }
}

/// `'label'` → `label`. No escapes, timezone names never need them.
fn unquote(s: &str) -> Option<String> {
    let inner = s.trim().strip_prefix('\'')?.strip_suffix('\'')?;
    (!inner.is_empty() && !inner.contains('\'')).then(|| inner.to_string())
}

// ═══════════════════════════════════════════════════════════════
//  Enum definition
// ═══════════════════════════════════════════════════════════════

/// Declared members of an `Enum8`/`Enum16` column, in declaration order.
///
/// Labels and values are unique. Values are kept as `i16`; the width of the
/// column decides whether they must also fit `i8`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDefinition {
    variants: Vec<(String, i16)>,
}

impl EnumDefinition {
    pub fn new(variants: Vec<(String, i16)>) -> Result<Self, ColumnTypeError> {
        let def = Self { variants };
        let invalid = |reason: String| ColumnTypeError::Enum {
            definition: def.to_string(),
            reason,
        };
        if def.variants.is_empty() {
            return Err(invalid("no variants".into()));
        }
        for (i, (label, value)) in def.variants.iter().enumerate() {
            let earlier = &def.variants[..i];
            if earlier.iter().any(|(l, _)| l == label) {
                return Err(invalid(format!("duplicate label {label:?}")));
            }
            if earlier.iter().any(|(_, v)| v == value) {
                return Err(invalid(format!("duplicate value {value}")));
            }
        }
        Ok(def)
    }

    /// Parse the body of `Enum8(...)`: `'a' = 1, 'b' = 2`.
    ///
    /// Labels may contain `,`, `=` and `)`; `\'` and `\\` are escapes.
    fn parse(body: &str, min: i16, max: i16) -> Result<Self, ColumnTypeError> {
        let invalid = |reason: &str| ColumnTypeError::Enum {
            definition: body.to_string(),
            reason: reason.to_string(),
        };

        let mut variants = Vec::new();
        let mut chars = body.chars().peekable();
        loop {
            skip_whitespace(&mut chars);
            if chars.next() != Some('\'') {
                return Err(invalid("expected quoted label"));
            }
            let mut label = String::new();
            loop {
                match chars.next() {
                    Some('\\') => match chars.next() {
                        Some(c) => label.push(c),
                        None => return Err(invalid("unterminated label")),
                    },
                    Some('\'') => break,
                    Some(c) => label.push(c),
                    None => return Err(invalid("unterminated label")),
                }
            }

            skip_whitespace(&mut chars);
            if chars.next() != Some('=') {
                return Err(invalid("expected '=' after label"));
            }
            skip_whitespace(&mut chars);
            let mut digits = String::new();
            while let Some(c) = chars.next_if(|c| *c == '-' || *c == '+' || c.is_ascii_digit()) {
                digits.push(c);
            }
            let value = digits
                .parse::<i16>()
                .ok()
                .filter(|v| (min..=max).contains(v))
                .ok_or_else(|| invalid(&format!("value {digits:?} out of range {min}..={max}")))?;
            variants.push((label, value));

            skip_whitespace(&mut chars);
            match chars.next() {
                Some(',') => continue,
                None => break,
                Some(_) => return Err(invalid("expected ',' between variants")),
            }
        }

        Self::new(variants)
    }

    pub fn value_of(&self, label: &str) -> Option<i16> {
        self.variants.iter().find(|(l, _)| l == label).map(|(_, v)| *v)
    }

    pub fn variants(&self) -> &[(String, i16)] {
        &self.variants
    }
}

impl fmt::Display for EnumDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (label, value)) in self.variants.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            let escaped = label.replace('\\', "\\\\").replace('\'', "\\'");
            write!(f, "'{escaped}' = {value}")?;
        }
        Ok(())
    }
}

fn skip_whitespace(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) {
    while chars.next_if(|c| c.is_whitespace()).is_some() {}
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
