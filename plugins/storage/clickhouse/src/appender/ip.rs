use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use column_api::Node;

use super::{ColumnAppender, present};
use crate::error::AppendError;
use crate::proto::{AddressFamily, ColIPv4, ColIPv6, ColNullable, Column, ColumnInput, NullableInput};

/// Address type of an IP column.
pub trait IpFamily: Sized + Send + 'static {
    const FAMILY: AddressFamily;

    type Col: NullableInput<Value = Self> + Default;

    /// `None` if `addr` is of the other family.
    fn from_addr(addr: IpAddr) -> Option<Self>;
}

impl IpFamily for Ipv4Addr {
    const FAMILY: AddressFamily = AddressFamily::V4;

    type Col = ColIPv4;

    fn from_addr(addr: IpAddr) -> Option<Self> {
        match addr {
            IpAddr::V4(v4) => Some(v4),
            IpAddr::V6(_) => None,
        }
    }
}

impl IpFamily for Ipv6Addr {
    const FAMILY: AddressFamily = AddressFamily::V6;

    type Col = ColIPv6;

    /// IPv4-mapped literals like `::ffff:1.2.3.4` already parse as V6.
    fn from_addr(addr: IpAddr) -> Option<Self> {
        match addr {
            IpAddr::V6(v6) => Some(v6),
            IpAddr::V4(_) => None,
        }
    }
}

/// The single buffer an IP appender owns, fixed at construction.
enum Buffer<C> {
    Plain(C),
    Nullable(ColNullable<C>),
}

/// IP literal → `IPv4`/`IPv6`, optionally `Nullable`.
pub struct IpAppender<A: IpFamily> {
    buf: Buffer<A::Col>,
}

pub type IPv4Appender = IpAppender<Ipv4Addr>;
pub type IPv6Appender = IpAppender<Ipv6Addr>;

impl<A: IpFamily> IpAppender<A> {
    pub fn new(nullable: bool) -> Self {
        let col = A::Col::default();
        let buf = if nullable {
            Buffer::Nullable(ColNullable::new(col))
        } else {
            Buffer::Plain(col)
        };
        Self { buf }
    }

    pub fn is_nullable(&self) -> bool {
        matches!(self.buf, Buffer::Nullable(_))
    }
}

impl<A: IpFamily> ColumnAppender for IpAppender<A> {
    fn append(&mut self, node: Option<&dyn Node>) -> Result<(), AppendError> {
        let Some(node) = present(node) else {
            return match &mut self.buf {
                Buffer::Nullable(col) => {
                    col.append(None);
                    Ok(())
                }
                Buffer::Plain(_) => Err(AppendError::NullValue),
            };
        };

        let text = node.as_string()?;
        let addr: IpAddr = text.parse().map_err(|source| AppendError::AddressParse {
            value: text.to_string(),
            source,
        })?;
        let addr = A::from_addr(addr).ok_or_else(|| AppendError::AddressFamily {
            family: A::FAMILY,
            value: text.to_string(),
        })?;

        match &mut self.buf {
            Buffer::Plain(col) => col.append(addr),
            Buffer::Nullable(col) => col.append(Some(addr)),
        }
        Ok(())
    }

    fn column(&self) -> &dyn Column {
        match &self.buf {
            Buffer::Plain(col) => col,
            Buffer::Nullable(col) => col,
        }
    }

    fn column_mut(&mut self) -> &mut dyn Column {
        match &mut self.buf {
            Buffer::Plain(col) => col,
            Buffer::Nullable(col) => col,
        }
    }
}

#[cfg(test)]
#[path = "ip_test.rs"]
mod ip_test;
