// crates/objdictgen/src/builder/defaults.rs

//! Fallback content for standard entries the stack always links against.
//!
//! Each default is only emitted when the dictionary does not define the
//! index in the communication area. Defaults are not part of the
//! navigation table.

use super::Emission;
use crate::error::GenError;
use crate::log::{GenContext, gen_debug};
use objdict::ObjectDictionary;
use objdict::od::constants::*;
use std::fmt::Write;

/// The indexes that receive fallback content, in emission order.
pub const DEFAULTED_INDEXES: [u16; 8] = [
    IDX_PREDEFINED_ERROR_FIELD_AU32,
    IDX_SYNC_COB_ID_U32,
    IDX_COMM_CYCLE_PERIOD_U32,
    IDX_EMCY_COB_ID_U32,
    IDX_CONSUMER_HEARTBEAT_AU32,
    IDX_PRODUCER_HEARTBEAT_U16,
    IDX_GUARD_TIME_U16,
    IDX_LIFE_TIME_FACTOR_U8,
];

/// Returns true if `index` is defined in the communication area.
fn is_defined(od: &ObjectDictionary, index: u16) -> bool {
    (IDX_COMM_AREA_START..=IDX_COMM_AREA_END).contains(&index) && od.contains(index)
}

/// Inserts the fallback content of every standard entry `od` lacks.
pub(crate) fn build_defaults(od: &ObjectDictionary, emission: &mut Emission) -> Result<(), GenError> {
    let ctx = GenContext::new(od.node_name(), "defaults");
    let node = od.node_name();

    for index in DEFAULTED_INDEXES {
        if is_defined(od, index) {
            continue;
        }
        let name = od.entry_name(index).unwrap_or_default();
        let content = default_content(od, index, node, name)?;
        gen_debug!(ctx, "Synthesised default for 0x{:04X} '{}'", index, name);
        emission.index_contents.insert(index, content);
    }
    Ok(())
}

fn default_content(
    od: &ObjectDictionary,
    index: u16,
    node: &str,
    name: &str,
) -> Result<String, GenError> {
    let mut out = String::new();
    match index {
        IDX_PREDEFINED_ERROR_FIELD_AU32 => {
            write!(out, "\n/* index 0x1003 :   {} */\n", name)?;
            writeln!(
                out,
                "                    UNS8 {}_highestSubIndex_obj1003 = 0; /* number of subindex - 1*/",
                node
            )?;
            writeln!(out, "                    UNS32 {}_obj1003[] = ", node)?;
            out.push_str("                    {\n");
            out.push_str("                      0x0\t/* 0 */\n");
            out.push_str("                    };\n");
            writeln!(out, "                    ODCallback_t {}_Index1003_callbacks[] = ", node)?;
            out.push_str("                     {\n");
            out.push_str("                       NULL,\n");
            out.push_str("                       NULL,\n");
            out.push_str("                     };\n");
            writeln!(out, "                    subindex {}_Index1003[] = ", node)?;
            out.push_str("                     {\n");
            writeln!(
                out,
                "                       {{ RW, valueRange_EMC, sizeof (UNS8), (void*)&{}_highestSubIndex_obj1003 }},",
                node
            )?;
            writeln!(
                out,
                "                       {{ RO, uint32, sizeof (UNS32), (void*)&{}_obj1003[0] }}",
                node
            )?;
            out.push_str("                     };\n");
        }
        IDX_SYNC_COB_ID_U32 | IDX_COMM_CYCLE_PERIOD_U32 => {
            write!(out, "\n/* index 0x{:04X} :   {} */\n", index, name)?;
            writeln!(
                out,
                "                    UNS32 {}_obj{:04X} = 0x0;   /* 0 */",
                node, index
            )?;
        }
        IDX_EMCY_COB_ID_U32 => {
            write!(out, "\n/* index 0x1014 :   {} */\n", name)?;
            writeln!(
                out,
                "                    UNS32 {}_obj1014 = 0x80 + 0x{:02X};   /* 128 + NodeID */",
                node,
                od.node_id().0
            )?;
        }
        IDX_CONSUMER_HEARTBEAT_AU32 => {
            write!(out, "\n/* index 0x1016 :   {} */\n", name)?;
            writeln!(out, "                    UNS8 {}_highestSubIndex_obj1016 = 0;", node)?;
            writeln!(out, "                    UNS32 {}_obj1016[]={{0}};", node)?;
        }
        IDX_PRODUCER_HEARTBEAT_U16 | IDX_GUARD_TIME_U16 => {
            write!(out, "\n/* index 0x{:04X} :   {} */ \n", index, name)?;
            writeln!(
                out,
                "                    UNS16 {}_obj{:04X} = 0x0;   /* 0 */",
                node, index
            )?;
        }
        IDX_LIFE_TIME_FACTOR_U8 => {
            write!(out, "\n/* index 0x100D :   {} */ \n", name)?;
            writeln!(out, "                    UNS8 {}_obj100D = 0x0;   /* 0 */", node)?;
        }
        _ => {
            return Err(GenError::MissingEntry {
                index,
                sub_index: None,
            });
        }
    }
    Ok(out)
}
