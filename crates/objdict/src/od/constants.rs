// crates/objdict/src/od/constants.rs
//! Central repository for standard Object Dictionary indices and data type codes.
//!
//! This module provides `pub const` definitions for well-known object
//! indices from the CANopen communication profile (CiA 301),
//! using a consistent `IDX_` and `TYPE_` naming convention.

// --- 0x0000 - 0x0260: Data Type Area ---

pub const TYPE_BOOLEAN: u16 = 0x0001;
pub const TYPE_INTEGER8: u16 = 0x0002;
pub const TYPE_INTEGER16: u16 = 0x0003;
pub const TYPE_INTEGER32: u16 = 0x0004;
pub const TYPE_UNSIGNED8: u16 = 0x0005;
pub const TYPE_UNSIGNED16: u16 = 0x0006;
pub const TYPE_UNSIGNED32: u16 = 0x0007;
pub const TYPE_REAL32: u16 = 0x0008;
pub const TYPE_VISIBLE_STRING: u16 = 0x0009;
pub const TYPE_OCTET_STRING: u16 = 0x000A;
pub const TYPE_UNICODE_STRING: u16 = 0x000B;
pub const TYPE_TIME_OF_DAY: u16 = 0x000C;
pub const TYPE_TIME_DIFFERENCE: u16 = 0x000D;
pub const TYPE_DOMAIN: u16 = 0x000F;
pub const TYPE_INTEGER24: u16 = 0x0010;
pub const TYPE_REAL64: u16 = 0x0011;
pub const TYPE_INTEGER40: u16 = 0x0012;
pub const TYPE_INTEGER48: u16 = 0x0013;
pub const TYPE_INTEGER56: u16 = 0x0014;
pub const TYPE_INTEGER64: u16 = 0x0015;
pub const TYPE_UNSIGNED24: u16 = 0x0016;
pub const TYPE_UNSIGNED40: u16 = 0x0018;
pub const TYPE_UNSIGNED48: u16 = 0x0019;
pub const TYPE_UNSIGNED56: u16 = 0x001A;
pub const TYPE_UNSIGNED64: u16 = 0x001B;

/// Last index of the area holding standard and user-defined type entries.
pub const IDX_TYPE_AREA_END: u16 = 0x0260;

// --- 0x1000 - 0x1FFF: Communication Profile Area ---

pub const IDX_COMM_AREA_START: u16 = 0x1000;
pub const IDX_COMM_AREA_END: u16 = 0x11FF;

// 0x10xx: General Communication
pub const IDX_DEVICE_TYPE_U32: u16 = 0x1000;
pub const IDX_ERROR_REGISTER_U8: u16 = 0x1001;
pub const IDX_PREDEFINED_ERROR_FIELD_AU32: u16 = 0x1003;
pub const IDX_SYNC_COB_ID_U32: u16 = 0x1005;
pub const IDX_COMM_CYCLE_PERIOD_U32: u16 = 0x1006;
pub const IDX_MANUFACTURER_DEVICE_NAME_VS: u16 = 0x1008;
pub const IDX_GUARD_TIME_U16: u16 = 0x100C;
pub const IDX_LIFE_TIME_FACTOR_U8: u16 = 0x100D;
pub const IDX_STORE_PARAMETERS_AU32: u16 = 0x1010;
pub const IDX_RESTORE_DEFAULTS_AU32: u16 = 0x1011;
pub const IDX_EMCY_COB_ID_U32: u16 = 0x1014;
pub const IDX_CONSUMER_HEARTBEAT_AU32: u16 = 0x1016;
pub const IDX_PRODUCER_HEARTBEAT_U16: u16 = 0x1017;
pub const IDX_IDENTITY_REC: u16 = 0x1018;

// 0x12xx: SDO Parameters
pub const IDX_SDO_SERVER_START: u16 = 0x1200;
pub const IDX_SDO_SERVER_END: u16 = 0x127F;
pub const IDX_SDO_CLIENT_START: u16 = 0x1280;
pub const IDX_SDO_CLIENT_END: u16 = 0x12FF;

// 0x14xx - 0x1Bxx: PDO Parameters
pub const IDX_RPDO_COMM_PARAM_START: u16 = 0x1400;
pub const IDX_RPDO_COMM_PARAM_END: u16 = 0x15FF;
pub const IDX_RPDO_MAPPING_PARAM_START: u16 = 0x1600;
pub const IDX_RPDO_MAPPING_PARAM_END: u16 = 0x17FF;
pub const IDX_TPDO_COMM_PARAM_START: u16 = 0x1800;
pub const IDX_TPDO_COMM_PARAM_END: u16 = 0x19FF;
pub const IDX_TPDO_MAPPING_PARAM_START: u16 = 0x1A00;
pub const IDX_TPDO_MAPPING_PARAM_END: u16 = 0x1BFF;

// --- 0x2000 - 0xBFFF: Manufacturer and Device Profile Areas ---
pub const IDX_USER_AREA_START: u16 = 0x2000;
pub const IDX_USER_AREA_END: u16 = 0xBFFF;
