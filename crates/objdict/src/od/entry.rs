use super::value::ObjectValue;
use alloc::string::String;
use alloc::vec::Vec;
use core::ops::BitOr;

/// The data held by an Object Dictionary entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    /// A single value stored at subindex 0.
    Variable(ObjectValue),
    /// One value per subindex. Element 0 is the subindex-0 entry count.
    Sequence(Vec<ObjectValue>),
}

impl Object {
    /// Number of subindexes this object occupies.
    pub fn len(&self) -> usize {
        match self {
            Object::Variable(_) => 1,
            Object::Sequence(values) => values.len(),
        }
    }

    /// Returns `true` for a sequence without any subindex.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the value stored at `sub_index`.
    pub fn get(&self, sub_index: u8) -> Option<&ObjectValue> {
        match self {
            Object::Variable(value) if sub_index == 0 => Some(value),
            Object::Variable(_) => None,
            Object::Sequence(values) => values.get(sub_index as usize),
        }
    }
}

/// Defines the access rights for an Object Dictionary subindex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessType {
    /// read and write access
    #[default]
    ReadWrite,
    /// read only access
    ReadOnly,
    /// write only access
    WriteOnly,
}

impl AccessType {
    /// The access token the stack's subindex tables expect.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessType::ReadWrite => "RW",
            AccessType::ReadOnly => "RO",
            AccessType::WriteOnly => "WO",
        }
    }
}

/// Structural flags of an entry as a type-safe bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StructFlags(pub u8);

impl StructFlags {
    // --- Flag Constants ---
    pub const MULTIPLE_SUBINDEXES: Self = Self(1 << 1);
    pub const IDENTICAL_SUBINDEXES: Self = Self(1 << 2);
    pub const IDENTICAL_INDEXES: Self = Self(1 << 3);

    // --- Presets ---
    pub const VAR: Self = Self(0);
    pub const ARRAY: Self = Self::MULTIPLE_SUBINDEXES;
    pub const RECORD: Self = Self(Self::MULTIPLE_SUBINDEXES.0 | Self::IDENTICAL_SUBINDEXES.0);

    /// Checks if all of the specified flags are set.
    pub fn contains(&self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Returns an empty set of flags.
    pub fn empty() -> Self {
        Self(0)
    }

    /// Inserts the specified flags.
    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }
}

impl BitOr for StructFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

/// Per-subindex metadata.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubEntry {
    /// Declared name of the subindex.
    pub name: String,
    /// Data type code, resolved through `ObjectDictionary::type_name`.
    pub data_type: u16,
    /// Access rights.
    pub access: AccessType,
    /// The value must survive a power cycle.
    pub save: bool,
    /// A change callback is registered for this subindex.
    pub callback: bool,
}

impl SubEntry {
    pub fn new(name: impl Into<String>, data_type: u16, access: AccessType) -> Self {
        Self {
            name: name.into(),
            data_type,
            access,
            save: false,
            callback: false,
        }
    }

    /// Marks the subindex as persistent.
    pub fn saved(mut self) -> Self {
        self.save = true;
        self
    }

    /// Registers a change callback for the subindex.
    pub fn with_callback(mut self) -> Self {
        self.callback = true;
        self
    }
}

/// A complete entry in the Object Dictionary, containing both the data and its metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectEntry {
    /// A descriptive name for the object.
    pub name: String,
    /// The actual data.
    pub object: Object,
    /// Structural flags (VAR, ARRAY, RECORD).
    pub structure: StructFlags,
    /// Subindex metadata. Identical-subindex entries may declare only
    /// subindexes 0 and 1; the last one describes every further subindex.
    pub sub_entries: Vec<SubEntry>,
}

impl ObjectEntry {
    /// Builds a scalar entry.
    pub fn variable(name: impl Into<String>, sub_entry: SubEntry, value: ObjectValue) -> Self {
        Self {
            name: name.into(),
            object: Object::Variable(value),
            structure: StructFlags::VAR,
            sub_entries: alloc::vec![sub_entry],
        }
    }

    /// Builds an identical-subindex entry. `values[0]` is the count.
    pub fn record(
        name: impl Into<String>,
        count_entry: SubEntry,
        element_entry: SubEntry,
        values: Vec<ObjectValue>,
    ) -> Self {
        Self {
            name: name.into(),
            object: Object::Sequence(values),
            structure: StructFlags::RECORD,
            sub_entries: alloc::vec![count_entry, element_entry],
        }
    }

    /// Builds a heterogeneous entry with one `SubEntry` per value.
    pub fn array(
        name: impl Into<String>,
        sub_entries: Vec<SubEntry>,
        values: Vec<ObjectValue>,
    ) -> Self {
        Self {
            name: name.into(),
            object: Object::Sequence(values),
            structure: StructFlags::ARRAY,
            sub_entries,
        }
    }

    /// Returns the metadata describing `sub_index`.
    pub fn sub_entry(&self, sub_index: u8) -> Option<&SubEntry> {
        match self.sub_entries.get(sub_index as usize) {
            Some(sub) => Some(sub),
            None if sub_index > 0
                && self.structure.contains(StructFlags::IDENTICAL_SUBINDEXES) =>
            {
                self.sub_entries.last()
            }
            None => None,
        }
    }

    /// Returns `true` if any subindex has a change callback registered.
    pub fn has_callbacks(&self) -> bool {
        self.sub_entries.iter().any(|sub| sub.callback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_struct_flags_presets() {
        assert!(StructFlags::RECORD.contains(StructFlags::IDENTICAL_SUBINDEXES));
        assert!(StructFlags::RECORD.contains(StructFlags::MULTIPLE_SUBINDEXES));
        assert!(!StructFlags::ARRAY.contains(StructFlags::IDENTICAL_SUBINDEXES));
        assert!(!StructFlags::VAR.contains(StructFlags::MULTIPLE_SUBINDEXES));

        let mut flags = StructFlags::empty();
        flags.insert(StructFlags::MULTIPLE_SUBINDEXES);
        assert_eq!(flags, StructFlags::ARRAY);
        assert_eq!(
            StructFlags::MULTIPLE_SUBINDEXES | StructFlags::IDENTICAL_SUBINDEXES,
            StructFlags::RECORD
        );
    }

    #[test]
    fn test_record_sub_entry_fallback() {
        let entry = ObjectEntry::record(
            "Consumer Heartbeat Time",
            SubEntry::new("Number of Entries", 0x05, AccessType::ReadOnly),
            SubEntry::new("Consumer Heartbeat Time", 0x07, AccessType::ReadWrite),
            vec![
                ObjectValue::Unsigned(3),
                ObjectValue::Unsigned(0),
                ObjectValue::Unsigned(0),
                ObjectValue::Unsigned(0),
            ],
        );
        assert_eq!(entry.sub_entry(3).map(|s| s.data_type), Some(0x07));
        assert_eq!(entry.sub_entry(0).map(|s| s.data_type), Some(0x05));
        assert_eq!(entry.object.len(), 4);
    }

    #[test]
    fn test_array_sub_entry_has_no_fallback() {
        let entry = ObjectEntry::array(
            "Identity",
            vec![
                SubEntry::new("Number of Entries", 0x05, AccessType::ReadOnly),
                SubEntry::new("Vendor ID", 0x07, AccessType::ReadOnly),
            ],
            vec![ObjectValue::Unsigned(1), ObjectValue::Unsigned(0)],
        );
        assert!(entry.sub_entry(2).is_none());
        assert!(!entry.has_callbacks());
    }

    #[test]
    fn test_callbacks_detected_on_any_subindex() {
        let entry = ObjectEntry::variable(
            "Producer Heartbeat Time",
            SubEntry::new("Producer Heartbeat Time", 0x06, AccessType::ReadWrite).with_callback(),
            ObjectValue::Unsigned(0),
        );
        assert!(entry.has_callbacks());
        assert_eq!(entry.object.get(0), Some(&ObjectValue::Unsigned(0)));
        assert_eq!(entry.object.get(1), None);
    }
}
