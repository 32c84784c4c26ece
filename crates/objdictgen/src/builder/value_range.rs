// crates/objdictgen/src/builder/value_range.rs

//! Emits the value-range type constants and the `<node>_valueRangeTest`
//! dispatch routine.

use crate::error::GenError;
use crate::log::{GenContext, gen_debug};
use crate::resolver::TypeResolver;
use crate::types::{RangeTypeId, ResolvedType, SemanticKind, StorageType};
use objdict::od::constants::IDX_TYPE_AREA_END;
use objdict::{ObjectDictionary, ObjectValue};
use regex::Regex;
use std::fmt::Write;
use std::sync::LazyLock;

static RANGE_MODEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([_A-Z]*)([0-9]*)\[(-?[0-9]+)-(-?[0-9]+)\]$").expect("range pattern is valid")
});

/// Type registered for subindex 0 of 0x1003: only 0 may be written.
pub(crate) const EMC_RANGE: ResolvedType = ResolvedType {
    storage: StorageType::Unsigned(8),
    size: None,
    kind: SemanticKind::ValueRange(RangeTypeId::Emc),
    unsigned: true,
};

/// Returns true if `name` declares a value range (`UNSIGNED8[0-100]`).
pub fn is_range_name(name: &str) -> bool {
    RANGE_MODEL.is_match(name)
}

/// Registers every range type of the dictionary into `resolver` and returns
/// the rendered constants and dispatch routine.
pub(crate) fn build_value_ranges(
    od: &ObjectDictionary,
    resolver: &mut TypeResolver,
) -> Result<String, GenError> {
    let node = od.node_name();
    let ctx = GenContext::new(node, "value-ranges");

    let mut defines = String::from(
        "\n#define valueRange_EMC 0x9F /* Type for index 0x1003 subindex 0x00 (only set of value 0 is possible) */",
    );
    let mut cases = String::from(
        "    case valueRange_EMC:\n      if (*(UNS8*)value != (UNS8)0) return OD_VALUE_RANGE_EXCEEDED;\n      break;\n",
    );

    let mut number = 0u32;
    for index in od.indexes_in(0, IDX_TYPE_AREA_END) {
        let Some(entry) = od.entry(index) else {
            continue;
        };
        if !is_range_name(&entry.name) {
            continue;
        }
        number += 1;

        let base_code = range_field(od, index, 1)?
            .as_u64()
            .and_then(|code| u16::try_from(code).ok())
            .ok_or_else(|| GenError::InvalidValue {
                index,
                sub_index: 1,
                kind: "type code".to_string(),
            })?;
        let base_name = od
            .type_name(base_code)
            .ok_or(GenError::MissingTypeDefinition { type_code: base_code })?;
        let base = resolver.resolve(&base_name)?;

        let id = RangeTypeId::Numbered(number);
        resolver.register(
            entry.name.clone(),
            ResolvedType {
                kind: SemanticKind::ValueRange(id),
                ..base
            },
        );

        let min = range_field(od, index, 2)?;
        let max = range_field(od, index, 3)?;
        let min_text = bound_text(min, index, 2)?;
        let max_text = bound_text(max, index, 3)?;
        gen_debug!(
            ctx,
            "Registered {} for '{}' ({} {}..{})",
            id,
            entry.name,
            base.storage,
            min_text,
            max_text
        );

        write!(
            defines,
            "\n#define {} 0x{:02X} /* Type {}, {} < value < {} */",
            id, index, base.storage, min_text, max_text
        )?;
        writeln!(cases, "    case {}:", id)?;
        if base.unsigned && is_non_positive(min) {
            cases.push_str(
                "      /* Negative or null low limit ignored because of unsigned type */;\n",
            );
        } else {
            writeln!(
                cases,
                "      if (*({0}*)value < ({0}){1}) return OD_VALUE_TOO_LOW;",
                base.storage, min_text
            )?;
        }
        writeln!(
            cases,
            "      if (*({0}*)value > ({0}){1}) return OD_VALUE_TOO_HIGH;",
            base.storage, max_text
        )?;
        cases.push_str("    break;\n");
    }

    let mut content = defines;
    write!(
        content,
        "\nUNS32 {}_valueRangeTest (UNS8 typeValue, void * value)\n{{",
        node
    )?;
    content.push_str("\n  switch (typeValue) {\n");
    content.push_str(&cases);
    content.push_str("  }\n  return 0;\n}\n");
    Ok(content)
}

fn range_field(od: &ObjectDictionary, index: u16, sub_index: u8) -> Result<&ObjectValue, GenError> {
    od.value(index, sub_index).ok_or(GenError::MissingEntry {
        index,
        sub_index: Some(sub_index),
    })
}

/// Decimal rendering of a range bound.
fn bound_text(value: &ObjectValue, index: u16, sub_index: u8) -> Result<String, GenError> {
    match value {
        ObjectValue::Integer(v) => Ok(v.to_string()),
        ObjectValue::Unsigned(v) => Ok(v.to_string()),
        ObjectValue::Boolean(b) => Ok(u8::from(*b).to_string()),
        ObjectValue::Real(r) => Ok(r.to_string()),
        _ => Err(GenError::InvalidValue {
            index,
            sub_index,
            kind: "range bound".to_string(),
        }),
    }
}

fn is_non_positive(value: &ObjectValue) -> bool {
    match value {
        ObjectValue::Integer(v) => *v <= 0,
        ObjectValue::Unsigned(v) => *v == 0,
        ObjectValue::Boolean(b) => !*b,
        ObjectValue::Real(r) => *r <= 0.0,
        _ => false,
    }
}
