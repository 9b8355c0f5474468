//! Shared device-description vocabulary for the devflash tooling.
//!
//! Host-side tools describe where a firmware module or data region lives on
//! a device using the types in this crate. Descriptors are exchanged as
//! camelCase JSON, so every type serializes under that convention.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Errors produced when interpreting device descriptors.
#[derive(Debug, thiserror::Error)]
pub enum DeviceError {
    /// Storage token not recognized.
    #[error("unknown storage type: {value}")]
    UnknownStorageType {
        /// The offending token.
        value: String,
    },
}

/// Result type for device-description operations.
pub type Result<T> = std::result::Result<T, DeviceError>;

/// The kind of storage backing a device memory region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StorageType {
    /// On-chip MCU flash.
    InternalFlash,
    /// External (typically SPI/QSPI) flash.
    ExternalFlash,
    /// A file on the device's filesystem.
    Filesystem,
}

impl StorageType {
    /// The camelCase descriptor token for this storage type.
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageType::InternalFlash => "internalFlash",
            StorageType::ExternalFlash => "externalFlash",
            StorageType::Filesystem => "filesystem",
        }
    }
}

impl fmt::Display for StorageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StorageType {
    type Err = DeviceError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "internalFlash" => Ok(StorageType::InternalFlash),
            "externalFlash" => Ok(StorageType::ExternalFlash),
            "filesystem" => Ok(StorageType::Filesystem),
            _ => Err(DeviceError::UnknownStorageType { value: s.into() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_parse_agree() {
        for st in [
            StorageType::InternalFlash,
            StorageType::ExternalFlash,
            StorageType::Filesystem,
        ] {
            assert_eq!(st.to_string().parse::<StorageType>().unwrap(), st);
        }
    }

    #[test]
    fn unknown_token_is_rejected() {
        let err = "eeprom".parse::<StorageType>().unwrap_err();
        assert!(err.to_string().contains("eeprom"));
    }

    #[test]
    fn serializes_as_camel_case_token() {
        let json = serde_json::to_string(&StorageType::ExternalFlash).unwrap();
        assert_eq!(json, "\"externalFlash\"");
    }
}
