//! Well-known data types and communication profile entries.

use super::constants::*;

/// Returns the canonical name of a standard data type code.
pub fn standard_type_name(code: u16) -> Option<&'static str> {
    let name = match code {
        TYPE_BOOLEAN => "BOOLEAN",
        TYPE_INTEGER8 => "INTEGER8",
        TYPE_INTEGER16 => "INTEGER16",
        TYPE_INTEGER32 => "INTEGER32",
        TYPE_UNSIGNED8 => "UNSIGNED8",
        TYPE_UNSIGNED16 => "UNSIGNED16",
        TYPE_UNSIGNED32 => "UNSIGNED32",
        TYPE_REAL32 => "REAL32",
        TYPE_VISIBLE_STRING => "VISIBLE_STRING",
        TYPE_OCTET_STRING => "OCTET_STRING",
        TYPE_UNICODE_STRING => "UNICODE_STRING",
        TYPE_TIME_OF_DAY => "TIME_OF_DAY",
        TYPE_TIME_DIFFERENCE => "TIME_DIFFERENCE",
        TYPE_DOMAIN => "DOMAIN",
        TYPE_INTEGER24 => "INTEGER24",
        TYPE_REAL64 => "REAL64",
        TYPE_INTEGER40 => "INTEGER40",
        TYPE_INTEGER48 => "INTEGER48",
        TYPE_INTEGER56 => "INTEGER56",
        TYPE_INTEGER64 => "INTEGER64",
        TYPE_UNSIGNED24 => "UNSIGNED24",
        TYPE_UNSIGNED40 => "UNSIGNED40",
        TYPE_UNSIGNED48 => "UNSIGNED48",
        TYPE_UNSIGNED56 => "UNSIGNED56",
        TYPE_UNSIGNED64 => "UNSIGNED64",
        _ => return None,
    };
    Some(name)
}

/// Returns the CiA 301 name of a well-known communication profile entry.
///
/// Ranged entries (SDO and PDO parameters) report the name of the
/// first entry of their range.
pub fn standard_entry_name(index: u16) -> Option<&'static str> {
    let name = match index {
        IDX_DEVICE_TYPE_U32 => "Device Type",
        IDX_ERROR_REGISTER_U8 => "Error Register",
        0x1002 => "Manufacturer Status Register",
        IDX_PREDEFINED_ERROR_FIELD_AU32 => "Pre-defined Error Field",
        IDX_SYNC_COB_ID_U32 => "SYNC COB ID",
        IDX_COMM_CYCLE_PERIOD_U32 => "Communication / Cycle Period",
        0x1007 => "Synchronous Window Length",
        IDX_MANUFACTURER_DEVICE_NAME_VS => "Manufacturer Device Name",
        0x1009 => "Manufacturer Hardware Version",
        0x100A => "Manufacturer Software Version",
        IDX_GUARD_TIME_U16 => "Guard Time",
        IDX_LIFE_TIME_FACTOR_U8 => "Life Time Factor",
        IDX_STORE_PARAMETERS_AU32 => "Store parameters",
        IDX_RESTORE_DEFAULTS_AU32 => "Restore Default Parameters",
        0x1012 => "TIME COB ID",
        0x1013 => "High Resolution Timestamp",
        IDX_EMCY_COB_ID_U32 => "Emergency COB ID",
        0x1015 => "Inhibit Time Emergency",
        IDX_CONSUMER_HEARTBEAT_AU32 => "Consumer Heartbeat Time",
        IDX_PRODUCER_HEARTBEAT_U16 => "Producer Heartbeat Time",
        IDX_IDENTITY_REC => "Identity",
        IDX_SDO_SERVER_START..=IDX_SDO_SERVER_END => "Server SDO Parameter",
        IDX_SDO_CLIENT_START..=IDX_SDO_CLIENT_END => "Client SDO Parameter",
        IDX_RPDO_COMM_PARAM_START..=IDX_RPDO_COMM_PARAM_END => "Receive PDO Parameter",
        IDX_RPDO_MAPPING_PARAM_START..=IDX_RPDO_MAPPING_PARAM_END => "Receive PDO Mapping",
        IDX_TPDO_COMM_PARAM_START..=IDX_TPDO_COMM_PARAM_END => "Transmit PDO Parameter",
        IDX_TPDO_MAPPING_PARAM_START..=IDX_TPDO_MAPPING_PARAM_END => "Transmit PDO Mapping",
        _ => return None,
    };
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_type_names() {
        assert_eq!(standard_type_name(TYPE_UNSIGNED8), Some("UNSIGNED8"));
        assert_eq!(standard_type_name(TYPE_INTEGER56), Some("INTEGER56"));
        assert_eq!(standard_type_name(TYPE_DOMAIN), Some("DOMAIN"));
        // 0x000E and 0x0017 are reserved
        assert_eq!(standard_type_name(0x000E), None);
        assert_eq!(standard_type_name(0x0017), None);
    }

    #[test]
    fn test_legacy_entries_have_names() {
        for index in [0x1003, 0x1005, 0x1006, 0x100C, 0x100D, 0x1014, 0x1016, 0x1017] {
            assert!(standard_entry_name(index).is_some(), "0x{:04X} has no name", index);
        }
        assert_eq!(standard_entry_name(0x1A05), Some("Transmit PDO Mapping"));
        assert_eq!(standard_entry_name(0x2000), None);
    }
}
