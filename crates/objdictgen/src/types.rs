// crates/objdictgen/src/types.rs

//! Public data structures shared by the generator stages.

use objdict::od::constants::*;
use std::collections::BTreeMap;
use std::fmt;

/// Caller-chosen pointer alias names keyed by (index, subindex).
pub type PointerAliases = BTreeMap<(u16, u8), String>;

/// The two generated documents of one run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GeneratedFiles {
    /// Definition document (`.c`).
    pub source: String,
    /// Declaration document (`.h`).
    pub header: String,
}

/// C storage type of a resolved data type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageType {
    /// `UNS<width>`
    Unsigned(u8),
    /// `INTEGER<width>`
    Integer(u8),
    /// `REAL<width>`
    Real(u8),
}

impl fmt::Display for StorageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageType::Unsigned(width) => write!(f, "UNS{}", width),
            StorageType::Integer(width) => write!(f, "INTEGER{}", width),
            StorageType::Real(width) => write!(f, "REAL{}", width),
        }
    }
}

/// Identifier of a value-range validator type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RangeTypeId {
    /// Built-in type of 0x1003 subindex 0: only 0 may be written.
    Emc,
    /// Range declared by the dictionary, numbered from 1 in declaration order.
    Numbered(u32),
}

impl fmt::Display for RangeTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeTypeId::Emc => write!(f, "valueRange_EMC"),
            RangeTypeId::Numbered(n) => write!(f, "valueRange_{}", n),
        }
    }
}

/// The closed set of data kinds the stack's subindex tables understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticKind {
    Unsigned(u8),
    Integer(u8),
    Real(u8),
    VisibleString,
    Domain,
    Boolean,
    ValueRange(RangeTypeId),
}

impl SemanticKind {
    /// Kinds whose storage is a byte array sized per call site.
    pub fn is_byte_sequence(&self) -> bool {
        matches!(self, SemanticKind::VisibleString | SemanticKind::Domain)
    }
}

impl fmt::Display for SemanticKind {
    /// Writes the type tag used in the subindex tables (`uint8`, `domain`, ...).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SemanticKind::Unsigned(width) => write!(f, "uint{}", width),
            SemanticKind::Integer(width) => write!(f, "int{}", width),
            SemanticKind::Real(width) => write!(f, "real{}", width),
            SemanticKind::VisibleString => write!(f, "visible_string"),
            SemanticKind::Domain => write!(f, "domain"),
            SemanticKind::Boolean => write!(f, "boolean"),
            SemanticKind::ValueRange(id) => write!(f, "{}", id),
        }
    }
}

/// A fully resolved data type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedType {
    pub storage: StorageType,
    /// Element count, only for string and domain kinds.
    pub size: Option<usize>,
    pub kind: SemanticKind,
    pub unsigned: bool,
}

impl ResolvedType {
    /// Array suffix for declarations (`[12]`), empty for scalars.
    pub fn array_suffix(&self) -> String {
        match self.size {
            Some(size) => format!("[{}]", size),
            None => String::new(),
        }
    }
}

/// Functional categories summarised by the quick-index tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    SdoServer,
    SdoClient,
    PdoReceive,
    PdoReceiveMap,
    PdoTransmit,
    PdoTransmitMap,
}

impl Category {
    /// All categories in table order.
    pub const ALL: [Category; 6] = [
        Category::SdoServer,
        Category::SdoClient,
        Category::PdoReceive,
        Category::PdoReceiveMap,
        Category::PdoTransmit,
        Category::PdoTransmitMap,
    ];

    /// Inclusive index window of the category.
    pub fn window(&self) -> (u16, u16) {
        match self {
            Category::SdoServer => (IDX_SDO_SERVER_START, IDX_SDO_SERVER_END),
            Category::SdoClient => (IDX_SDO_CLIENT_START, IDX_SDO_CLIENT_END),
            Category::PdoReceive => (IDX_RPDO_COMM_PARAM_START, IDX_RPDO_COMM_PARAM_END),
            Category::PdoReceiveMap => (IDX_RPDO_MAPPING_PARAM_START, IDX_RPDO_MAPPING_PARAM_END),
            Category::PdoTransmit => (IDX_TPDO_COMM_PARAM_START, IDX_TPDO_COMM_PARAM_END),
            Category::PdoTransmitMap => (IDX_TPDO_MAPPING_PARAM_START, IDX_TPDO_MAPPING_PARAM_END),
        }
    }

    pub fn contains(&self, index: u16) -> bool {
        let (start, end) = self.window();
        (start..=end).contains(&index)
    }

    /// Label written next to each quick-index row.
    pub fn label(&self) -> &'static str {
        match self {
            Category::SdoServer => "SDO_SVR",
            Category::SdoClient => "SDO_CLT",
            Category::PdoReceive => "PDO_RCV",
            Category::PdoReceiveMap => "PDO_RCV_MAP",
            Category::PdoTransmit => "PDO_TRS",
            Category::PdoTransmitMap => "PDO_TRS_MAP",
        }
    }

    fn position(&self) -> usize {
        *self as usize
    }
}

/// First and last navigation-table positions per category.
///
/// A zero means "no entry found yet"; empty categories keep it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuickIndex {
    pub first: [usize; 6],
    pub last: [usize; 6],
}

impl QuickIndex {
    pub fn first(&self, category: Category) -> usize {
        self.first[category.position()]
    }

    pub fn last(&self, category: Category) -> usize {
        self.last[category.position()]
    }

    /// Records that the table row at `position` lies in `category`.
    pub(crate) fn record(&mut self, category: Category, position: usize) {
        let slot = category.position();
        self.last[slot] = position;
        if self.first[slot] == 0 {
            self.first[slot] = position;
        }
    }
}
