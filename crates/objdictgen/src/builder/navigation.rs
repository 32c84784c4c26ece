// crates/objdictgen/src/builder/navigation.rs

//! Builds the index table, the `scanIndexOD` switch and the quick-index
//! summary of one dictionary.

use crate::error::GenError;
use crate::types::{Category, QuickIndex};
use objdict::ObjectDictionary;
use objdict::od::constants::IDX_COMM_AREA_START;
use std::collections::BTreeMap;
use std::fmt::Write;

/// Navigation data derived in one ascending pass over the dictionary.
#[derive(Debug, Default)]
pub struct Navigation {
    /// Rows of `<node>_objdict[]`.
    pub index_table: String,
    /// `case` lines of `<node>_scanIndexOD`.
    pub switch: String,
    pub quick_index: QuickIndex,
    /// Number of transmit PDO parameter entries, at least 1.
    pub max_pdo_transmit: usize,
    /// Table position of every listed index.
    pub positions: BTreeMap<u16, usize>,
}

/// Builds the navigation data for every index from 0x1000 upwards.
///
/// `callbacks` holds the callback assignment text per index, as produced by
/// the entry emitter; indexes without one get an empty assignment.
pub(crate) fn build_navigation(
    od: &ObjectDictionary,
    callbacks: &BTreeMap<u16, String>,
) -> Result<Navigation, GenError> {
    let node = od.node_name();
    let mut nav = Navigation::default();
    let mut pdo_transmit = 0usize;

    for (position, index) in od.indexes_in(IDX_COMM_AREA_START, u16::MAX).enumerate() {
        writeln!(
            nav.index_table,
            "  {{ (subindex*){0}_Index{1:04X},sizeof({0}_Index{1:04X})/sizeof({0}_Index{1:04X}[0]), 0x{1:04X}}},",
            node, index
        )?;
        let callback = callbacks.get(&index).map_or("", String::as_str);
        writeln!(
            nav.switch,
            "\t\tcase 0x{:04X}: i = {};{}break;",
            index, position, callback
        )?;

        for category in Category::ALL {
            if category.contains(index) {
                nav.quick_index.record(category, position);
                if category == Category::PdoTransmit {
                    pdo_transmit += 1;
                }
            }
        }
        nav.positions.insert(index, position);
    }

    nav.max_pdo_transmit = pdo_transmit.max(1);
    Ok(nav)
}

/// Renders the `firstIndex` and `lastIndex` tables.
pub fn render_quick_index(node: &str, quick: &QuickIndex) -> Result<String, GenError> {
    let mut out = String::new();
    for (table, bound) in [("firstIndex", false), ("lastIndex", true)] {
        write!(out, "\nconst quick_index {}_{} = {{\n", node, table)?;
        let last = Category::ALL.len() - 1;
        for (i, category) in Category::ALL.iter().enumerate() {
            let position = if bound {
                quick.last(*category)
            } else {
                quick.first(*category)
            };
            let sep = if i == last { "" } else { "," };
            writeln!(out, "  {}{} /* {} */", position, sep, category.label())?;
        }
        out.push_str("};\n");
    }
    Ok(out)
}
