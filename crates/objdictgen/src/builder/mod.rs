// crates/objdictgen/src/builder/mod.rs

//! Lowers an `ObjectDictionary` into the C definition and declaration
//! documents.
//!
//! The stages run in a fixed order: value-range types, entries, fallback
//! defaults, navigation tables and finally composition. Nothing is written
//! to disk here; see `output` for that.

pub mod defaults;
pub mod entry;
pub mod navigation;
pub mod utils;
pub mod value_range;

use crate::config::GeneratorConfig;
use crate::error::GenError;
use crate::log::{GenContext, gen_debug, gen_info, gen_warn};
use crate::resolver::TypeResolver;
use crate::types::{GeneratedFiles, PointerAliases};
use navigation::{Navigation, render_quick_index};
use objdict::ObjectDictionary;
use objdict::od::constants::{IDX_COMM_AREA_START, IDX_CONSUMER_HEARTBEAT_AU32};
use std::collections::BTreeMap;
use std::fmt::Write;

/// Fragments accumulated while emitting entries.
#[derive(Debug, Default)]
pub(crate) struct Emission {
    /// File-scope definitions of mapped variables.
    pub mapped_variables: String,
    /// `extern` lines for the header, in definition order.
    pub header_declarations: String,
    /// Pointer alias definitions.
    pub pointed_variables: String,
    /// Per-index block of the object dictionary section.
    pub index_contents: BTreeMap<u16, String>,
    /// Callback assignment used by `scanIndexOD`, empty if none.
    pub callbacks: BTreeMap<u16, String>,
    pub mapped_count: usize,
}

/// Generates both documents for `od` in memory.
pub(crate) fn compose(
    od: &ObjectDictionary,
    header_file_name: &str,
    aliases: &PointerAliases,
    config: &GeneratorConfig,
) -> Result<GeneratedFiles, GenError> {
    let node = od.node_name();
    let ctx = GenContext::new(node, "compose");
    gen_info!(
        ctx,
        "Generating object dictionary '{}' ({} entries)",
        header_file_name,
        od.len()
    );

    warn_unused_aliases(od, aliases);

    let mut resolver = TypeResolver::new(od.default_string_size());
    let mut emission = Emission::default();

    gen_debug!(ctx, "Building value range types");
    let value_ranges = value_range::build_value_ranges(od, &mut resolver)?;

    gen_debug!(ctx, "Building entries");
    entry::build_entries(od, &mut resolver, aliases, &mut emission)?;

    gen_debug!(ctx, "Building fallback defaults");
    defaults::build_defaults(od, &mut emission)?;

    gen_debug!(ctx, "Building navigation tables");
    let navigation = navigation::build_navigation(od, &emission.callbacks)?;

    let source = compose_source(od, header_file_name, config, &emission, &value_ranges, &navigation)?;
    let header = compose_header(od, header_file_name, config, &emission)?;

    gen_info!(
        ctx,
        "Generated {} indexes, {} mapped variables",
        navigation.positions.len(),
        emission.mapped_count
    );
    Ok(GeneratedFiles { source, header })
}

fn warn_unused_aliases(od: &ObjectDictionary, aliases: &PointerAliases) {
    let ctx = GenContext::new(od.node_name(), "aliases");
    for ((index, sub_index), alias) in aliases {
        if *index < IDX_COMM_AREA_START || od.value(*index, *sub_index).is_none() {
            gen_warn!(
                ctx,
                "Ignoring pointer alias '{}': no subindex 0x{:02X} at index 0x{:04X}",
                alias,
                sub_index,
                index
            );
        }
    }
}

/// Number of consumer heartbeat timers, from subindex 0 of 0x1016.
fn heartbeat_timer_count(od: &ObjectDictionary) -> Result<u8, GenError> {
    if !od.contains(IDX_CONSUMER_HEARTBEAT_AU32) {
        return Ok(0);
    }
    od.value(IDX_CONSUMER_HEARTBEAT_AU32, 0)
        .and_then(|v| v.as_u64())
        .and_then(|count| u8::try_from(count).ok())
        .ok_or(GenError::InvalidValue {
            index: IDX_CONSUMER_HEARTBEAT_AU32,
            sub_index: 0,
            kind: "subindex count".to_string(),
        })
}

fn section(title: &str) -> String {
    format!(
        "\n/**************************************************************************/\n/* {:<71}*/\n/**************************************************************************/\n",
        title
    )
}

fn compose_source(
    od: &ObjectDictionary,
    header_file_name: &str,
    config: &GeneratorConfig,
    emission: &Emission,
    value_ranges: &str,
    nav: &Navigation,
) -> Result<String, GenError> {
    let node = od.node_name();
    let mut out = String::new();

    write!(out, "\n{}\n", config.banner)?;
    write!(out, "\n#include \"{}\"\n", header_file_name)?;

    out.push_str(&section("Declaration of mapped variables"));
    out.push_str(&emission.mapped_variables);

    out.push_str(&section("Declaration of value range types"));
    out.push_str(value_ranges);

    out.push_str(&section("The node id"));
    out.push_str("/* node_id default value.*/\n");
    writeln!(out, "UNS8 {}_bDeviceNodeId = 0x{:02X};", node, od.node_id().0)?;
    out.push('\n');
    out.push_str("/**************************************************************************/\n");
    out.push_str("/* Array of message processing information */\n\n");
    writeln!(
        out,
        "const UNS8 {}_iam_a_slave = {};",
        node,
        u8::from(od.node_type().is_slave())
    )?;
    out.push('\n');

    let timers = heartbeat_timer_count(od)?;
    if timers > 0 {
        let initializer = vec!["TIMER_NONE"; usize::from(timers)].join(",");
        writeln!(
            out,
            "TIMER_HANDLE {}_heartBeatTimers[{}] = {{{}}};",
            node, timers, initializer
        )?;
    } else {
        writeln!(out, "TIMER_HANDLE {}_heartBeatTimers[1];", node)?;
    }

    out.push_str("\n/*\n");
    out.push_str("$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$\n\n");
    out.push_str("                               OBJECT DICTIONARY\n\n");
    out.push_str("$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$\n");
    out.push_str("*/\n");

    for content in emission.index_contents.values() {
        out.push_str(content);
    }

    out.push_str(&section("Declaration of pointed variables"));
    out.push_str(&emission.pointed_variables);

    write!(out, "\nconst indextable {}_objdict[] = \n{{\n", node)?;
    out.push_str(&nav.index_table);
    out.push_str("};\n\n");
    writeln!(
        out,
        "const indextable * {}_scanIndexOD (UNS16 wIndex, UNS32 * errorCode, ODCallback_t **callbacks)",
        node
    )?;
    out.push_str("{\n\tint i;\n\t*callbacks = NULL;\n\tswitch(wIndex){\n");
    out.push_str(&nav.switch);
    out.push_str("\t\tdefault:\n\t\t\t*errorCode = OD_NO_SUCH_OBJECT;\n\t\t\treturn NULL;\n\t}\n");
    writeln!(out, "\t*errorCode = OD_SUCCESSFUL;\n\treturn &{}_objdict[i];\n}}", node)?;

    out.push_str("\n/* \n");
    out.push_str(" * To count at which received SYNC a PDO must be sent.\n");
    out.push_str(" * Even if no pdoTransmit are defined, at least one entry is computed\n");
    out.push_str(" * for compilations issues.\n");
    out.push_str(" */\n");
    writeln!(
        out,
        "s_PDO_status {}_PDO_status[{}] = {{{}}};",
        node,
        nav.max_pdo_transmit,
        vec!["s_PDO_status_Initializer"; nav.max_pdo_transmit].join(",")
    )?;

    out.push_str(&render_quick_index(node, &nav.quick_index)?);

    writeln!(
        out,
        "\nconst UNS16 {0}_ObjdictSize = sizeof({0}_objdict)/sizeof({0}_objdict[0]); ",
        node
    )?;
    writeln!(
        out,
        "\nCO_Data {0}_Data = CANOPEN_NODE_DATA_INITIALIZER({0});\n",
        node
    )?;
    Ok(out)
}

/// Include guard derived from the header's own file name.
pub fn include_guard(header_file_name: &str) -> String {
    header_file_name.replace('.', "_").to_uppercase()
}

fn compose_header(
    od: &ObjectDictionary,
    header_file_name: &str,
    config: &GeneratorConfig,
    emission: &Emission,
) -> Result<String, GenError> {
    let node = od.node_name();
    let guard = include_guard(header_file_name);
    let mut out = String::new();

    write!(out, "\n{}\n", config.banner)?;
    write!(out, "\n#ifndef {0}\n#define {0}\n\n", guard)?;
    writeln!(out, "#include \"{}\"\n", config.stack_header)?;
    out.push_str("/* Prototypes of function provided by object dictionnary */\n");
    writeln!(
        out,
        "UNS32 {}_valueRangeTest (UNS8 typeValue, void * value);",
        node
    )?;
    writeln!(
        out,
        "const indextable * {}_scanIndexOD (UNS16 wIndex, UNS32 * errorCode, ODCallback_t **callbacks);\n",
        node
    )?;
    out.push_str("/* Master node data struct */\n");
    writeln!(out, "extern CO_Data {}_Data;", node)?;
    out.push_str(&emission.header_declarations);
    write!(out, "\n#endif // {}\n", guard)?;
    Ok(out)
}
