//! Shared dictionaries for the integration tests.

#![allow(dead_code)]

use objdict::od::constants::*;
use objdict::od::value_range_entry;
use objdict::{
    AccessType, NodeId, NodeInfo, NodeType, ObjectDictionary, ObjectEntry, ObjectValue, SubEntry,
};

/// Routes generator logs through the test harness.
pub fn init_logging() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Trace)
        .try_init();
}

pub fn empty_node(name: &str, id: u8) -> ObjectDictionary {
    ObjectDictionary::new(NodeInfo {
        name: name.into(),
        id: NodeId(id),
        node_type: NodeType::Slave,
        description: "Integration test node".into(),
        ..Default::default()
    })
}

pub fn var(name: &str, data_type: u16, value: ObjectValue) -> ObjectEntry {
    ObjectEntry::variable(name, SubEntry::new(name, data_type, AccessType::ReadWrite), value)
}

fn count_entry() -> SubEntry {
    SubEntry::new("Number of Entries", TYPE_UNSIGNED8, AccessType::ReadOnly)
}

/// A dictionary with one mapped `UNSIGNED8` at 0x2000 and nothing else.
pub fn minimal_mapped() -> ObjectDictionary {
    let mut od = empty_node("Minimal", 0x01);
    od.insert(0x2000, var("Output Byte", TYPE_UNSIGNED8, ObjectValue::Unsigned(0x12)));
    od
}

/// A slave node exercising every entry shape, ranges, callbacks and the
/// communication categories.
pub fn test_slave() -> ObjectDictionary {
    let mut od = empty_node("TestSlave", 0x20);

    od.insert(0x00A0, value_range_entry("UNSIGNED8[0-100]", TYPE_UNSIGNED8, 0, 100));
    od.insert(0x00A1, value_range_entry("INTEGER16[-50-50]", TYPE_INTEGER16, -50, 50));

    od.insert(
        IDX_DEVICE_TYPE_U32,
        ObjectEntry::variable(
            "Device Type",
            SubEntry::new("Device Type", TYPE_UNSIGNED32, AccessType::ReadOnly),
            ObjectValue::Unsigned(0x0001_0191),
        ),
    );
    od.insert(
        IDX_ERROR_REGISTER_U8,
        ObjectEntry::variable(
            "Error Register",
            SubEntry::new("Error Register", TYPE_UNSIGNED8, AccessType::ReadOnly),
            ObjectValue::Unsigned(0),
        ),
    );
    od.insert(
        IDX_PRODUCER_HEARTBEAT_U16,
        ObjectEntry::variable(
            "Producer Heartbeat Time",
            SubEntry::new("Producer Heartbeat Time", TYPE_UNSIGNED16, AccessType::ReadWrite)
                .with_callback(),
            ObjectValue::Unsigned(1000),
        ),
    );
    od.insert(
        IDX_IDENTITY_REC,
        ObjectEntry::array(
            "Identity",
            vec![
                count_entry(),
                SubEntry::new("Vendor ID", TYPE_UNSIGNED32, AccessType::ReadOnly),
                SubEntry::new("Product Code", TYPE_UNSIGNED32, AccessType::ReadOnly),
            ],
            vec![
                ObjectValue::Unsigned(2),
                ObjectValue::Unsigned(0x175),
                ObjectValue::Unsigned(0x100),
            ],
        ),
    );
    od.insert(
        0x1200,
        ObjectEntry::array(
            "Server SDO Parameter",
            vec![
                count_entry(),
                SubEntry::new("COB ID Client to Server", TYPE_UNSIGNED32, AccessType::ReadOnly),
                SubEntry::new("COB ID Server to Client", TYPE_UNSIGNED32, AccessType::ReadOnly),
            ],
            vec![
                ObjectValue::Unsigned(2),
                ObjectValue::Unsigned(0x620),
                ObjectValue::Unsigned(0x5A0),
            ],
        ),
    );
    for (i, index) in [0x1400u16, 0x1401].into_iter().enumerate() {
        od.insert(
            index,
            ObjectEntry::array(
                "Receive PDO Parameter",
                vec![
                    count_entry(),
                    SubEntry::new("COB ID used by PDO", TYPE_UNSIGNED32, AccessType::ReadWrite),
                    SubEntry::new("Transmission Type", TYPE_UNSIGNED8, AccessType::ReadWrite),
                ],
                vec![
                    ObjectValue::Unsigned(2),
                    ObjectValue::Unsigned(0x220 + 0x100 * i as u64),
                    ObjectValue::Unsigned(0xFF),
                ],
            ),
        );
    }
    od.insert(
        0x1600,
        ObjectEntry::record(
            "Receive PDO 1 Mapping",
            count_entry(),
            SubEntry::new("PDO 1 Mapping for an application object", TYPE_UNSIGNED32, AccessType::ReadWrite),
            vec![ObjectValue::Unsigned(1), ObjectValue::Unsigned(0x2000_0008)],
        ),
    );
    od.insert(
        0x1800,
        ObjectEntry::array(
            "Transmit PDO 1 Parameter",
            vec![
                count_entry(),
                SubEntry::new("COB ID used by PDO", TYPE_UNSIGNED32, AccessType::ReadWrite),
                SubEntry::new("Transmission Type", TYPE_UNSIGNED8, AccessType::ReadWrite),
            ],
            vec![
                ObjectValue::Unsigned(2),
                ObjectValue::Unsigned(0x1A0),
                ObjectValue::Unsigned(0xFF),
            ],
        ),
    );
    od.insert(
        0x1A00,
        ObjectEntry::record(
            "Transmit PDO 1 Mapping",
            count_entry(),
            SubEntry::new("PDO 1 Mapping for a process data variable", TYPE_UNSIGNED32, AccessType::ReadWrite),
            vec![ObjectValue::Unsigned(1), ObjectValue::Unsigned(0x2001_0010)],
        ),
    );

    od.insert(0x2000, var("Input Byte", TYPE_UNSIGNED8, ObjectValue::Unsigned(0)));
    od.insert(
        0x2001,
        ObjectEntry::variable(
            "Speed",
            SubEntry::new("Speed", TYPE_INTEGER16, AccessType::ReadWrite).saved(),
            ObjectValue::Integer(-120),
        ),
    );
    // Range-typed variable: its type code is the range definition's index.
    od.insert(0x2002, var("Percent", 0x00A0, ObjectValue::Unsigned(50)));
    od.insert(0x2003, var("Device Label", TYPE_VISIBLE_STRING, ObjectValue::from("slave")));
    od.insert(
        0x2100,
        ObjectEntry::record(
            "Analog Inputs",
            count_entry(),
            SubEntry::new("Analog Input", TYPE_INTEGER32, AccessType::ReadOnly),
            vec![
                ObjectValue::Unsigned(3),
                ObjectValue::Integer(0),
                ObjectValue::Integer(-1),
                ObjectValue::Integer(1),
            ],
        ),
    );
    od
}
