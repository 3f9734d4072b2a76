use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

use super::{Column, ColumnInput, NullableInput};
use crate::error::EncodeError;
use crate::types::ColumnType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressFamily {
    V4,
    V6,
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressFamily::V4 => f.write_str("IPv4"),
            AddressFamily::V6 => f.write_str("IPv6"),
        }
    }
}

/// `IPv4`: stored as `UInt32`.
#[derive(Debug, Clone, Default)]
pub struct ColIPv4 {
    values: Vec<Ipv4Addr>,
}

impl ColIPv4 {
    pub fn values(&self) -> &[Ipv4Addr] {
        &self.values
    }
}

impl Column for ColIPv4 {
    fn column_type(&self) -> ColumnType {
        ColumnType::IPv4
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn reset(&mut self) {
        self.values.clear();
    }

    fn encode(&self, out: &mut Vec<u8>) -> Result<(), EncodeError> {
        out.reserve(self.values.len() * 4);
        for addr in &self.values {
            out.extend_from_slice(&u32::from(*addr).to_le_bytes());
        }
        Ok(())
    }
}

impl ColumnInput for ColIPv4 {
    type Value = Ipv4Addr;

    fn append(&mut self, value: Ipv4Addr) {
        self.values.push(value);
    }
}

impl NullableInput for ColIPv4 {
    fn append_zero(&mut self) {
        self.values.push(Ipv4Addr::UNSPECIFIED);
    }
}

/// `IPv6`: stored as 16 bytes in network order.
#[derive(Debug, Clone, Default)]
pub struct ColIPv6 {
    values: Vec<Ipv6Addr>,
}

impl ColIPv6 {
    pub fn values(&self) -> &[Ipv6Addr] {
        &self.values
    }
}

impl Column for ColIPv6 {
    fn column_type(&self) -> ColumnType {
        ColumnType::IPv6
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn reset(&mut self) {
        self.values.clear();
    }

    fn encode(&self, out: &mut Vec<u8>) -> Result<(), EncodeError> {
        out.reserve(self.values.len() * 16);
        for addr in &self.values {
            out.extend_from_slice(&addr.octets());
        }
        Ok(())
    }
}

impl ColumnInput for ColIPv6 {
    type Value = Ipv6Addr;

    fn append(&mut self, value: Ipv6Addr) {
        self.values.push(value);
    }
}

impl NullableInput for ColIPv6 {
    fn append_zero(&mut self) {
        self.values.push(Ipv6Addr::UNSPECIFIED);
    }
}
