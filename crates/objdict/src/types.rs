use core::convert::TryFrom;
use core::fmt;

/// Highest node id a CANopen node may carry (127 or 7Fh).
pub const MAX_NODE_ID: u8 = 0x7F;

/// Represents a CANopen Node ID, wrapping a `u8` to ensure type safety.
///
/// Valid Node IDs are in the range 1-127. The value 0 is accepted as the
/// "not yet configured" id that dictionaries of master nodes usually carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct NodeId(pub u8);

/// Error type for invalid Node ID creation.
#[derive(Debug, PartialEq, Eq)]
pub enum NodeIdError {
    /// Node ID is outside the valid range (0-127).
    InvalidRange(u8),
}

impl fmt::Display for NodeIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeIdError::InvalidRange(value) => {
                write!(f, "Invalid NodeId value: {}. Valid range is 0-127.", value)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for NodeIdError {}

impl TryFrom<u8> for NodeId {
    type Error = NodeIdError;

    /// Creates a `NodeId` from a `u8`, returning an error if the value is not a valid
    /// CANopen node identifier.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0..=MAX_NODE_ID => Ok(NodeId(value)),
            _ => Err(NodeIdError::InvalidRange(value)),
        }
    }
}

impl From<NodeId> for u8 {
    fn from(node_id: NodeId) -> Self {
        node_id.0
    }
}

/// The network role of the node described by a dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeType {
    /// NMT master.
    Master,
    /// NMT slave.
    #[default]
    Slave,
}

impl NodeType {
    /// Returns `true` for the slave role.
    pub fn is_slave(&self) -> bool {
        matches!(self, NodeType::Slave)
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeType::Master => write!(f, "master"),
            NodeType::Slave => write!(f, "slave"),
        }
    }
}
