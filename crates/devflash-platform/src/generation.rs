//! Generation-level platform defaults.
//!
//! Device models of the same hardware generation share their flash layout,
//! debugger parameters, and storage topology. Each supported generation is
//! described once here; per-model records inherit these defaults.

use devflash_device::StorageType;
use serde::{Deserialize, Serialize};

use crate::flash::{DctRegion, FilesystemRegion, FlashInterface};
use crate::openocd::OpenOcdConfig;

/// Defaults shared by every device model of one hardware generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationCommons {
    /// Generation number.
    pub gen: u8,
    /// Whether the generation carries a radio stack.
    #[serde(default)]
    pub has_radio_stack: bool,
    /// On-chip flash bank.
    pub internal_flash: FlashInterface,
    /// External flash bank, when one exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_flash: Option<FlashInterface>,
    /// Device configuration table region.
    pub dct: DctRegion,
    /// Filesystem region, when the generation has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filesystem: Option<FilesystemRegion>,
    /// OpenOCD attach/programming parameters.
    pub open_ocd: OpenOcdConfig,
}

impl GenerationCommons {
    /// Generation 2: STM32F2-based models. The DCT lives at a fixed offset
    /// in internal flash; there is no external flash and no filesystem.
    pub fn gen2() -> Self {
        Self {
            gen: 2,
            has_radio_stack: false,
            internal_flash: FlashInterface { dfu_alt_setting: 0 },
            external_flash: None,
            dct: DctRegion {
                dfu_alt_setting: 1,
                storage: StorageType::InternalFlash,
                address: Some(0x0800_4000),
                size: Some(32768), // 2 pages
            },
            filesystem: None,
            open_ocd: OpenOcdConfig {
                target_config: "stm32f2x.cfg".into(),
                mcu_manufacturer: "STMicroelectronics".into(),
                device_id_address: 0x1fff_7a10, // UID
                device_id_prefix: None,
                // Gen 2 firmware images are built without JTAG/SWD debug
                // support, so the target must be reset on attach.
                assert_srst_on_connect: true,
                unlock_flash: true,
            },
        }
    }

    /// Generation 3: nRF52-based models with a radio stack. The DCT is
    /// stored as files on the external-flash filesystem.
    pub fn gen3() -> Self {
        Self {
            gen: 3,
            has_radio_stack: true,
            internal_flash: FlashInterface { dfu_alt_setting: 0 },
            external_flash: Some(FlashInterface { dfu_alt_setting: 2 }),
            dct: DctRegion {
                dfu_alt_setting: 1,
                storage: StorageType::Filesystem,
                address: None,
                size: None,
            },
            filesystem: Some(FilesystemRegion {
                storage: StorageType::ExternalFlash,
                address: 0x8000_0000,
                size: 2 * 1024 * 1024,
            }),
            open_ocd: OpenOcdConfig {
                target_config: "nrf52.cfg".into(),
                mcu_manufacturer: "Nordic VLSI ASA".into(),
                device_id_address: 0x1000_0060, // FICR
                device_id_prefix: Some("e00fce68".into()),
                assert_srst_on_connect: false,
                unlock_flash: false,
            },
        }
    }

    /// All supported generations.
    pub fn all() -> Vec<GenerationCommons> {
        vec![Self::gen2(), Self::gen3()]
    }
}
