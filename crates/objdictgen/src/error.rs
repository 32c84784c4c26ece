// crates/objdictgen/src/error.rs

use std::fmt;
use std::io;

/// Errors that abort a generation run.
///
/// Every variant is fatal: no partial output is ever written.
#[derive(Debug)]
pub enum GenError {
    /// A type name does not match any recognised pattern or width.
    UnresolvableType { type_name: String },

    /// A domain variable or subindex has no usable initial byte content.
    UninitializedDomain { index: u16, sub_index: u8 },

    /// A referenced data type code has no canonical name in the dictionary.
    MissingTypeDefinition { type_code: u16 },

    /// A stored value cannot be rendered under its resolved kind.
    InvalidValue {
        index: u16,
        sub_index: u8,
        kind: String,
    },

    /// The dictionary listed an index it holds no entry or subindex for.
    MissingEntry { index: u16, sub_index: Option<u8> },

    /// An error occurred during string formatting.
    FmtError(fmt::Error),

    /// Writing one of the output documents failed.
    Io(io::Error),
}

impl From<fmt::Error> for GenError {
    fn from(e: fmt::Error) -> Self {
        GenError::FmtError(e)
    }
}

impl From<io::Error> for GenError {
    fn from(e: io::Error) -> Self {
        GenError::Io(e)
    }
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenError::UnresolvableType { type_name } => {
                write!(f, "{} isn't a valid type for CanFestival", type_name)
            }
            GenError::UninitializedDomain { index, sub_index } => write!(
                f,
                "Domain variable not initialized (index 0x{:04X}, subindex 0x{:02X})",
                index, sub_index
            ),
            GenError::MissingTypeDefinition { type_code } => write!(
                f,
                "Datatype with value \"0x{:04X}\" isn't defined in CanFestival",
                type_code
            ),
            GenError::InvalidValue {
                index,
                sub_index,
                kind,
            } => write!(
                f,
                "Value at index 0x{:04X} subindex 0x{:02X} cannot be rendered as {}",
                index, sub_index, kind
            ),
            GenError::MissingEntry { index, sub_index } => match sub_index {
                Some(sub_index) => write!(
                    f,
                    "Missing subindex 0x{:02X} of index 0x{:04X}",
                    sub_index, index
                ),
                None => write!(f, "Missing entry for index 0x{:04X}", index),
            },
            GenError::FmtError(e) => write!(f, "Formatting error: {}", e),
            GenError::Io(e) => write!(f, "Unable to write generated file: {}", e),
        }
    }
}

impl std::error::Error for GenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenError::FmtError(e) => Some(e),
            GenError::Io(e) => Some(e),
            _ => None,
        }
    }
}
