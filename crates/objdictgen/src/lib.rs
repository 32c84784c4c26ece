// src/lib.rs

#![doc = "Generates the C object dictionary sources a CANopen stack links against."]
#![doc = ""]
#![doc = "An `objdict::ObjectDictionary` is lowered into a definition document (`.c`)"]
#![doc = "and a declaration document (`.h`) holding statically allocated tables."]
#![doc = ""]
#![doc = "It provides:"]
#![doc = "- `generate_file_content`: Composing both documents in memory."]
#![doc = "- `generate_file`: Composing and writing both documents next to each other."]

// --- Crate Modules ---

pub mod builder;
mod config;
mod error;
mod log;
mod output;
mod resolver;
mod types;
mod value;

// --- Public API Re-exports ---

pub use config::{DEFAULT_BANNER, DEFAULT_STACK_HEADER, GeneratorConfig};
pub use error::GenError;
pub use output::header_path_for;
pub use resolver::{TypeFamily, TypeResolver};
pub use types::{
    Category, GeneratedFiles, PointerAliases, QuickIndex, RangeTypeId, ResolvedType, SemanticKind,
    StorageType,
};
pub use value::{Literal, format_value};

use ::log::info;
use objdict::ObjectDictionary;
use std::path::Path;

/// Composes the definition and declaration documents of `od`.
///
/// `header_file_name` is the name the definition document `#include`s and
/// the base of the include guard. Nothing touches the file system.
pub fn generate_file_content(
    od: &ObjectDictionary,
    header_file_name: &str,
    aliases: &PointerAliases,
    config: &GeneratorConfig,
) -> Result<GeneratedFiles, GenError> {
    builder::compose(od, header_file_name, aliases, config)
}

/// Generates `path` and its companion header (`path` with a `.h` extension)
/// using the default configuration.
///
/// Either both files are written or neither is replaced.
pub fn generate_file(
    path: impl AsRef<Path>,
    od: &ObjectDictionary,
    aliases: &PointerAliases,
) -> Result<(), GenError> {
    generate_file_with_config(path, od, aliases, &GeneratorConfig::default())
}

/// Same as [`generate_file`] with an explicit `GeneratorConfig`.
pub fn generate_file_with_config(
    path: impl AsRef<Path>,
    od: &ObjectDictionary,
    aliases: &PointerAliases,
    config: &GeneratorConfig,
) -> Result<(), GenError> {
    let source_path = path.as_ref();
    let header_path = header_path_for(source_path);
    let header_file_name = header_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let files = generate_file_content(od, &header_file_name, aliases, config)?;
    output::write_pair(source_path, &header_path, &files)?;
    info!(
        "Object dictionary of '{}' written to {}",
        od.node_name(),
        source_path.display()
    );
    Ok(())
}
