// crates/objdictgen/src/value.rs

//! Renders dictionary values as C literals.

use crate::error::GenError;
use crate::types::SemanticKind;
use objdict::ObjectValue;
use std::fmt::Write;

/// A rendered value: the literal and its trailing human-readable comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    pub text: String,
    /// Either empty or `\t/* <decimal> */`.
    pub comment: String,
}

impl Literal {
    fn bare(text: String) -> Self {
        Self {
            text,
            comment: String::new(),
        }
    }
}

/// Formats `value` under `kind`.
///
/// `index` and `sub_index` only locate the value in error reports.
pub fn format_value(
    kind: SemanticKind,
    value: &ObjectValue,
    index: u16,
    sub_index: u8,
) -> Result<Literal, GenError> {
    let invalid = || GenError::InvalidValue {
        index,
        sub_index,
        kind: kind.to_string(),
    };

    match kind {
        SemanticKind::VisibleString => match value {
            ObjectValue::VisibleString(s) => Ok(Literal::bare(format!("\"{}\"", s))),
            _ => Err(invalid()),
        },
        SemanticKind::Domain => {
            let bytes = value.as_bytes().ok_or_else(invalid)?;
            let mut text = String::with_capacity(bytes.len() * 4 + 2);
            text.push('"');
            for byte in bytes {
                write!(text, "\\x{:02x}", byte)?;
            }
            text.push('"');
            Ok(Literal::bare(text))
        }
        SemanticKind::Real(_) => {
            let real = match value {
                ObjectValue::Real(r) => *r,
                ObjectValue::Integer(v) => *v as f64,
                ObjectValue::Unsigned(v) => *v as f64,
                _ => return Err(invalid()),
            };
            Ok(Literal::bare(format!("{:.6}", real)))
        }
        SemanticKind::Unsigned(_)
        | SemanticKind::Integer(_)
        | SemanticKind::Boolean
        | SemanticKind::ValueRange(_) => {
            let (negative, magnitude) = match value {
                ObjectValue::Boolean(b) => (false, u64::from(*b)),
                ObjectValue::Unsigned(v) => (false, *v),
                ObjectValue::Integer(v) => (*v < 0, v.unsigned_abs()),
                _ => return Err(invalid()),
            };
            let sign = if negative { "-" } else { "" };
            Ok(Literal {
                text: format!("{}0x{:X}", sign, magnitude),
                comment: format!("\t/* {} */", magnitude),
            })
        }
    }
}
