// crates/objdict/src/od/value.rs

use alloc::{string::String, vec::Vec};

/// Represents any value that can be stored in an Object Dictionary entry.
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectValue {
    Boolean(bool),
    Integer(i64),
    Unsigned(u64),
    Real(f64),
    VisibleString(String),
    Domain(Vec<u8>),
}

impl ObjectValue {
    /// Byte length of string and domain values. `None` for numeric values.
    pub fn byte_len(&self) -> Option<usize> {
        match self {
            ObjectValue::VisibleString(s) => Some(s.len()),
            ObjectValue::Domain(d) => Some(d.len()),
            _ => None,
        }
    }

    /// Returns the value as a signed integer if it is integral.
    ///
    /// Unsigned values above `i64::MAX` do not fit and return `None`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ObjectValue::Boolean(b) => Some(i64::from(*b)),
            ObjectValue::Integer(v) => Some(*v),
            ObjectValue::Unsigned(v) => i64::try_from(*v).ok(),
            _ => None,
        }
    }

    /// Returns the value as an unsigned integer if it is integral and non-negative.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            ObjectValue::Boolean(b) => Some(u64::from(*b)),
            ObjectValue::Integer(v) => u64::try_from(*v).ok(),
            ObjectValue::Unsigned(v) => Some(*v),
            _ => None,
        }
    }

    /// Raw bytes of string and domain values.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            ObjectValue::VisibleString(s) => Some(s.as_bytes()),
            ObjectValue::Domain(d) => Some(d),
            _ => None,
        }
    }
}

impl From<u8> for ObjectValue {
    fn from(v: u8) -> Self {
        ObjectValue::Unsigned(u64::from(v))
    }
}

impl From<u16> for ObjectValue {
    fn from(v: u16) -> Self {
        ObjectValue::Unsigned(u64::from(v))
    }
}

impl From<u32> for ObjectValue {
    fn from(v: u32) -> Self {
        ObjectValue::Unsigned(u64::from(v))
    }
}

impl From<i32> for ObjectValue {
    fn from(v: i32) -> Self {
        ObjectValue::Integer(i64::from(v))
    }
}

impl From<&str> for ObjectValue {
    fn from(v: &str) -> Self {
        ObjectValue::VisibleString(v.into())
    }
}
