// crates/objdict/src/lib.rs

#![cfg_attr(not(feature = "std"), no_std)]
#![doc = "In-memory model of a CANopen node's object dictionary."]
#![doc = ""]
#![doc = "This `no_std + alloc` library holds the node description (name, id, role)"]
#![doc = "and the index/subindex entries consumed by the `objdictgen` code generator."]

// 'alloc' is used for the entry map, names and sequence values
extern crate alloc;

// --- Foundation Modules ---
pub mod types;

// --- Object Dictionary ---
pub mod od;

// --- Top-level Exports ---
pub use od::{
    AccessType, NodeInfo, Object, ObjectDictionary, ObjectEntry, ObjectValue, StructFlags,
    SubEntry,
};
pub use types::{NodeId, NodeIdError, NodeType};
