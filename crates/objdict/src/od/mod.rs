// crates/objdict/src/od/mod.rs

pub mod constants;
mod entry;
pub mod predefined;
mod value;

pub use entry::{AccessType, Object, ObjectEntry, StructFlags, SubEntry};
pub use value::ObjectValue;

use crate::types::{NodeId, NodeType};
use alloc::{
    borrow::Cow,
    collections::BTreeMap,
    string::{String, ToString},
};
use log::trace;

/// Default floor for the storage size of string types.
pub const DEFAULT_STRING_SIZE: usize = 10;

/// Node-level information carried by a dictionary.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeInfo {
    /// Name of the node, used as prefix for every generated symbol.
    pub name: String,
    pub id: NodeId,
    pub node_type: NodeType,
    pub description: String,
    /// Minimum storage size of string types.
    pub default_string_size: usize,
}

impl Default for NodeInfo {
    fn default() -> Self {
        Self {
            name: String::new(),
            id: NodeId::default(),
            node_type: NodeType::default(),
            description: String::new(),
            default_string_size: DEFAULT_STRING_SIZE,
        }
    }
}

/// The main Object Dictionary structure.
#[derive(Debug, Clone, Default)]
pub struct ObjectDictionary {
    pub node: NodeInfo,
    entries: BTreeMap<u16, ObjectEntry>,
}

impl ObjectDictionary {
    /// Creates a new, empty OD for the given node.
    pub fn new(node: NodeInfo) -> Self {
        Self {
            node,
            entries: BTreeMap::new(),
        }
    }

    /// Inserts a new object entry into the dictionary at a given index.
    pub fn insert(&mut self, index: u16, entry: ObjectEntry) {
        trace!(
            "OD insert 0x{:04X} '{}' ({} subindexes)",
            index,
            entry.name,
            entry.object.len()
        );
        self.entries.insert(index, entry);
    }

    pub fn node_name(&self) -> &str {
        &self.node.name
    }

    pub fn node_id(&self) -> NodeId {
        self.node.id
    }

    pub fn node_type(&self) -> NodeType {
        self.node.node_type
    }

    pub fn description(&self) -> &str {
        &self.node.description
    }

    pub fn default_string_size(&self) -> usize {
        self.node.default_string_size
    }

    /// Iterates over all populated indexes in ascending numeric order.
    pub fn indexes(&self) -> impl Iterator<Item = u16> + '_ {
        self.entries.keys().copied()
    }

    /// Iterates over populated indexes within `start..=end`, ascending.
    pub fn indexes_in(&self, start: u16, end: u16) -> impl Iterator<Item = u16> + '_ {
        self.entries.range(start..=end).map(|(index, _)| *index)
    }

    pub fn contains(&self, index: u16) -> bool {
        self.entries.contains_key(&index)
    }

    pub fn entry(&self, index: u16) -> Option<&ObjectEntry> {
        self.entries.get(&index)
    }

    /// Returns the entry name, falling back to the standard profile name for
    /// well-known indexes this dictionary does not define.
    pub fn entry_name(&self, index: u16) -> Option<&str> {
        match self.entries.get(&index) {
            Some(entry) => Some(entry.name.as_str()),
            None => predefined::standard_entry_name(index),
        }
    }

    /// Returns the metadata of one subindex.
    pub fn sub_entry(&self, index: u16, sub_index: u8) -> Option<&SubEntry> {
        self.entries
            .get(&index)
            .and_then(|entry| entry.sub_entry(sub_index))
    }

    /// Reads a value from the Object Dictionary by index and sub-index.
    pub fn value(&self, index: u16, sub_index: u8) -> Option<&ObjectValue> {
        self.entries
            .get(&index)
            .and_then(|entry| entry.object.get(sub_index))
    }

    /// Returns `true` if any subindex of `index` has a change callback.
    pub fn has_entry_callbacks(&self, index: u16) -> bool {
        self.entries
            .get(&index)
            .is_some_and(ObjectEntry::has_callbacks)
    }

    /// Resolves a data type code to its canonical name.
    ///
    /// Standard codes resolve to their CANopen names. Any other code that
    /// is populated in the type area (custom strings, value ranges) resolves
    /// to the name of that entry.
    pub fn type_name(&self, code: u16) -> Option<Cow<'_, str>> {
        if let Some(name) = predefined::standard_type_name(code) {
            return Some(Cow::Borrowed(name));
        }
        if code <= constants::IDX_TYPE_AREA_END {
            return self
                .entries
                .get(&code)
                .map(|entry| Cow::Borrowed(entry.name.as_str()));
        }
        None
    }

    /// Number of populated indexes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl core::fmt::Display for ObjectDictionary {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} (node 0x{:02X}, {}, {} entries)",
            self.node.name,
            self.node.id.0,
            self.node.node_type,
            self.entries.len()
        )
    }
}

/// Convenience for building user-defined type entries in the type area.
///
/// A value-range type entry holds its base type code at subindex 1 and its
/// bounds at subindexes 2 and 3.
pub fn value_range_entry(name: &str, base_type: u16, min: i64, max: i64) -> ObjectEntry {
    ObjectEntry::array(
        name.to_string(),
        alloc::vec![
            SubEntry::new("Number of Entries", constants::TYPE_UNSIGNED8, AccessType::ReadOnly),
            SubEntry::new("Type", constants::TYPE_UNSIGNED8, AccessType::ReadOnly),
            SubEntry::new("Minimum Value", base_type, AccessType::ReadOnly),
            SubEntry::new("Maximum Value", base_type, AccessType::ReadOnly),
        ],
        alloc::vec![
            ObjectValue::Unsigned(3),
            ObjectValue::Unsigned(u64::from(base_type)),
            ObjectValue::Integer(min),
            ObjectValue::Integer(max),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn test_od() -> ObjectDictionary {
        let mut od = ObjectDictionary::new(NodeInfo {
            name: "TestSlave".into(),
            id: NodeId(0x12),
            ..Default::default()
        });
        od.insert(
            0x2000,
            ObjectEntry::variable(
                "Counter",
                SubEntry::new("Counter", constants::TYPE_UNSIGNED8, AccessType::ReadWrite),
                ObjectValue::Unsigned(7),
            ),
        );
        od.insert(
            0x1000,
            ObjectEntry::variable(
                "Device Type",
                SubEntry::new("Device Type", constants::TYPE_UNSIGNED32, AccessType::ReadOnly),
                ObjectValue::Unsigned(0x191),
            ),
        );
        od.insert(0x00A0, value_range_entry("UNSIGNED8[0-100]", constants::TYPE_UNSIGNED8, 0, 100));
        od.insert(
            0x00A1,
            ObjectEntry::array(
                "VISIBLE_STRING20",
                vec![SubEntry::new("Number of Entries", constants::TYPE_UNSIGNED8, AccessType::ReadOnly)],
                vec![ObjectValue::Unsigned(0)],
            ),
        );
        od
    }

    #[test]
    fn test_indexes_are_ascending() {
        let od = test_od();
        let indexes: vec::Vec<u16> = od.indexes().collect();
        assert_eq!(indexes, vec![0x00A0, 0x00A1, 0x1000, 0x2000]);
        let comm: vec::Vec<u16> = od.indexes_in(0x1000, 0x11FF).collect();
        assert_eq!(comm, vec![0x1000]);
    }

    #[test]
    fn test_type_name_resolution() {
        let od = test_od();
        assert_eq!(od.type_name(constants::TYPE_UNSIGNED16).as_deref(), Some("UNSIGNED16"));
        assert_eq!(od.type_name(0x00A0).as_deref(), Some("UNSIGNED8[0-100]"));
        assert_eq!(od.type_name(0x00A1).as_deref(), Some("VISIBLE_STRING20"));
        assert_eq!(od.type_name(0x00A2), None);
        // Indexes outside the type area are never types
        assert_eq!(od.type_name(0x2000), None);
    }

    #[test]
    fn test_entry_name_falls_back_to_profile() {
        let od = test_od();
        assert_eq!(od.entry_name(0x2000), Some("Counter"));
        assert_eq!(od.entry_name(0x1017), Some("Producer Heartbeat Time"));
        assert_eq!(od.entry_name(0x3000), None);
    }

    #[test]
    fn test_value_access() {
        let od = test_od();
        assert_eq!(od.value(0x2000, 0), Some(&ObjectValue::Unsigned(7)));
        assert_eq!(od.value(0x00A0, 3), Some(&ObjectValue::Integer(100)));
        assert_eq!(od.value(0x2000, 1), None);
        assert!(!od.has_entry_callbacks(0x2000));
        assert_eq!(od.node_name(), "TestSlave");
        assert_eq!(od.default_string_size(), DEFAULT_STRING_SIZE);
    }
}
