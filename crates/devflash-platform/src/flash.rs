//! Flash region descriptors.
//!
//! Describes where firmware and configuration data live on a device and how
//! each region is addressed over DFU.

use devflash_device::StorageType;
use serde::{Deserialize, Serialize};

/// A flash bank reachable over DFU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlashInterface {
    /// DFU alternate setting selecting this bank.
    pub dfu_alt_setting: u8,
}

/// The device configuration table region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DctRegion {
    /// DFU alternate setting selecting the DCT.
    pub dfu_alt_setting: u8,
    /// Storage backing the DCT.
    pub storage: StorageType,
    /// Fixed offset of the DCT, when it lives directly in flash.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<u32>,
    /// Size in bytes, when the DCT lives at a fixed offset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

/// The on-device filesystem region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilesystemRegion {
    /// Storage backing the filesystem.
    pub storage: StorageType,
    /// Base address of the filesystem partition.
    pub address: u32,
    /// Partition size in bytes.
    pub size: u32,
}
