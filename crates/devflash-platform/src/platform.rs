//! Per-model platform records.
//!
//! A [`Platform`] is the flat, fully-resolved description of one device
//! model: its identity plus every generation default, with the model's own
//! overrides layered on top.

use serde::{Deserialize, Serialize};

use crate::flash::{DctRegion, FilesystemRegion, FlashInterface};
use crate::generation::GenerationCommons;
use crate::openocd::OpenOcdConfig;

/// A fully-resolved device platform record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Platform {
    /// Numeric platform ID. Unique across all supported models.
    pub id: u16,
    /// Lowercase platform slug. Unique across all supported models.
    pub name: String,
    /// Human-readable model name.
    pub display_name: String,
    /// Hardware generation this model belongs to.
    pub gen: u8,
    /// Whether the model bundles network co-processor firmware.
    #[serde(default)]
    pub has_ncp_firmware: bool,
    /// Whether the model carries a radio stack.
    #[serde(default)]
    pub has_radio_stack: bool,
    /// On-chip flash bank.
    pub internal_flash: FlashInterface,
    /// External flash bank, when one exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_flash: Option<FlashInterface>,
    /// Device configuration table region.
    pub dct: DctRegion,
    /// Filesystem region, when the model has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filesystem: Option<FilesystemRegion>,
    /// OpenOCD attach/programming parameters.
    pub open_ocd: OpenOcdConfig,
}

/// One row of the static platform table: a model's identity and the fields
/// it overrides on top of its generation's defaults.
#[derive(Debug, Clone)]
pub struct PlatformOverrides {
    pub id: u16,
    pub name: &'static str,
    pub display_name: &'static str,
    pub gen: u8,
    pub has_ncp_firmware: bool,
    /// Overrides the generation's filesystem partition size.
    pub filesystem_size: Option<u32>,
}

impl PlatformOverrides {
    fn new(id: u16, name: &'static str, display_name: &'static str, gen: u8) -> Self {
        Self {
            id,
            name,
            display_name,
            gen,
            has_ncp_firmware: false,
            filesystem_size: None,
        }
    }

    fn with_ncp_firmware(mut self) -> Self {
        self.has_ncp_firmware = true;
        self
    }

    fn with_filesystem_size(mut self, size: u32) -> Self {
        self.filesystem_size = Some(size);
        self
    }

    /// The supported device models, in declaration order.
    pub fn supported() -> Vec<PlatformOverrides> {
        vec![
            Self::new(6, "photon", "Photon", 2),
            Self::new(8, "p1", "P1", 2),
            Self::new(10, "electron", "Electron", 2),
            Self::new(12, "argon", "Argon", 3).with_ncp_firmware(),
            Self::new(13, "boron", "Boron", 3),
            Self::new(14, "xenon", "Xenon", 3),
            Self::new(22, "asom", "A SoM", 3).with_ncp_firmware(),
            Self::new(23, "bsom", "B SoM", 3),
            Self::new(25, "b5som", "B5 SoM", 3).with_filesystem_size(4 * 1024 * 1024),
            Self::new(26, "tracker", "Tracker", 3).with_filesystem_size(4 * 1024 * 1024),
        ]
    }
}

impl Platform {
    /// Layer a model's overrides on top of its generation's defaults.
    ///
    /// Nested blocks merge field-by-field: a value present in the overrides
    /// replaces the default, an absent one inherits it. `overrides.gen` must
    /// match `commons.gen`; an override for a region the generation does not
    /// define is a defect in the static table.
    pub fn merged(commons: &GenerationCommons, overrides: PlatformOverrides) -> Platform {
        assert_eq!(
            commons.gen, overrides.gen,
            "platform '{}' merged against generation {} defaults",
            overrides.name, commons.gen
        );

        let filesystem = match (commons.filesystem.as_ref(), overrides.filesystem_size) {
            (Some(fs), size) => Some(FilesystemRegion {
                storage: fs.storage,
                address: fs.address,
                size: size.unwrap_or(fs.size),
            }),
            (None, None) => None,
            (None, Some(_)) => panic!(
                "platform '{}' overrides the filesystem size, but generation {} has no filesystem",
                overrides.name, commons.gen
            ),
        };

        Platform {
            id: overrides.id,
            name: overrides.name.into(),
            display_name: overrides.display_name.into(),
            gen: commons.gen,
            has_ncp_firmware: overrides.has_ncp_firmware,
            has_radio_stack: commons.has_radio_stack,
            internal_flash: commons.internal_flash,
            external_flash: commons.external_flash,
            dct: commons.dct.clone(),
            filesystem,
            open_ocd: commons.open_ocd.clone(),
        }
    }
}
