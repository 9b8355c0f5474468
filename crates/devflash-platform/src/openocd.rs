//! OpenOCD debugger/programmer parameters.

use serde::{Deserialize, Serialize};

/// Parameters for attaching to a device with OpenOCD.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenOcdConfig {
    /// OpenOCD target configuration file (e.g., "stm32f2x.cfg").
    pub target_config: String,
    /// JEDEC manufacturer string of the MCU vendor.
    pub mcu_manufacturer: String,
    /// Address of the MCU's unique device ID register.
    pub device_id_address: u32,
    /// Hex prefix prepended to the raw device ID, when the platform uses one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_id_prefix: Option<String>,
    /// Assert SRST when connecting. Needed for firmware built without
    /// JTAG/SWD debug support, where the target must be reset on attach.
    #[serde(default)]
    pub assert_srst_on_connect: bool,
    /// Unlock the flash sectors before programming; the bootloader's sector
    /// may be locked.
    #[serde(default)]
    pub unlock_flash: bool,
}
