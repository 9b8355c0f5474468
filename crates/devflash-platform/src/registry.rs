//! The platform registry.
//!
//! Built once from the static generation and platform tables, then shared
//! immutably for the lifetime of the process. All lookups are exact-match
//! reads; the registry exposes no mutation API.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::{PlatformError, Result};
use crate::generation::GenerationCommons;
use crate::platform::{Platform, PlatformOverrides};

static REGISTRY: LazyLock<PlatformRegistry> = LazyLock::new(PlatformRegistry::new);

/// Index over the supported device platforms.
#[derive(Debug)]
pub struct PlatformRegistry {
    platforms: Vec<Platform>,
    by_id: HashMap<u16, usize>,
    by_name: HashMap<String, usize>,
    commons_by_gen: HashMap<u8, GenerationCommons>,
}

impl PlatformRegistry {
    /// Build the registry from the static tables.
    ///
    /// Panics on a defective table: a platform referencing an unregistered
    /// generation, or a duplicate platform ID or name.
    pub fn new() -> Self {
        let commons_by_gen: HashMap<u8, GenerationCommons> = GenerationCommons::all()
            .into_iter()
            .map(|c| (c.gen, c))
            .collect();

        let platforms: Vec<Platform> = PlatformOverrides::supported()
            .into_iter()
            .map(|overrides| {
                let commons = commons_by_gen.get(&overrides.gen).unwrap_or_else(|| {
                    panic!(
                        "platform '{}' references unregistered generation {}",
                        overrides.name, overrides.gen
                    )
                });
                Platform::merged(commons, overrides)
            })
            .collect();

        let mut by_id = HashMap::new();
        let mut by_name = HashMap::new();
        for (index, p) in platforms.iter().enumerate() {
            let prev = by_id.insert(p.id, index);
            assert!(prev.is_none(), "duplicate platform ID: {}", p.id);
            let prev = by_name.insert(p.name.clone(), index);
            assert!(prev.is_none(), "duplicate platform name: {}", p.name);
        }

        Self {
            platforms,
            by_id,
            by_name,
            commons_by_gen,
        }
    }

    /// All supported platforms, in declaration order.
    pub fn all(&self) -> &[Platform] {
        &self.platforms
    }

    /// Look up a platform by its numeric ID.
    pub fn by_id(&self, id: u16) -> Result<&Platform> {
        self.by_id
            .get(&id)
            .map(|&i| &self.platforms[i])
            .ok_or(PlatformError::UnknownId { id })
    }

    /// Look up a platform by its name. Exact, case-sensitive match.
    pub fn by_name(&self, name: &str) -> Result<&Platform> {
        self.by_name
            .get(name)
            .map(|&i| &self.platforms[i])
            .ok_or_else(|| PlatformError::UnknownName { name: name.into() })
    }

    /// Look up the shared defaults for a hardware generation.
    ///
    /// Every generation referenced by the platform table is registered, so
    /// this cannot fail for a `gen` taken from a [`Platform`]; the error
    /// path covers defects in the static table.
    pub fn commons_for_gen(&self, gen: u8) -> Result<&GenerationCommons> {
        self.commons_by_gen.get(&gen).ok_or(PlatformError::Internal)
    }
}

impl Default for PlatformRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// The process-wide registry, built on first access.
pub fn registry() -> &'static PlatformRegistry {
    &REGISTRY
}

/// All supported platforms, in declaration order.
pub fn platforms() -> &'static [Platform] {
    registry().all()
}

/// Look up a platform by its numeric ID.
pub fn platform_for_id(id: u16) -> Result<&'static Platform> {
    registry().by_id(id)
}

/// Look up a platform by its name.
pub fn platform_for_name(name: &str) -> Result<&'static Platform> {
    registry().by_name(name)
}

/// Look up the shared defaults for a hardware generation.
pub fn platform_commons_for_gen(gen: u8) -> Result<&'static GenerationCommons> {
    registry().commons_for_gen(gen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use devflash_device::StorageType;

    #[test]
    fn every_platform_round_trips_by_id_and_name() {
        for p in platforms() {
            assert_eq!(platform_for_id(p.id).unwrap(), p);
            assert_eq!(platform_for_name(&p.name).unwrap(), p);
        }
    }

    #[test]
    fn ids_and_names_are_unique() {
        let all = platforms();
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.id, b.id);
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn non_overridden_fields_match_generation_commons() {
        for p in platforms() {
            let commons = platform_commons_for_gen(p.gen).unwrap();
            assert_eq!(p.has_radio_stack, commons.has_radio_stack);
            assert_eq!(p.internal_flash, commons.internal_flash);
            assert_eq!(p.external_flash, commons.external_flash);
            assert_eq!(p.dct, commons.dct);
            assert_eq!(p.open_ocd, commons.open_ocd);
            if let (Some(fs), Some(default_fs)) = (&p.filesystem, &commons.filesystem) {
                assert_eq!(fs.storage, default_fs.storage);
                assert_eq!(fs.address, default_fs.address);
            } else {
                assert_eq!(p.filesystem, commons.filesystem);
            }
        }
    }

    #[test]
    fn declaration_order_is_preserved() {
        let ids: Vec<u16> = platforms().iter().map(|p| p.id).collect();
        assert_eq!(ids, [6, 8, 10, 12, 13, 14, 22, 23, 25, 26]);
    }

    #[test]
    fn unknown_id_is_reported() {
        let err = platform_for_id(999).unwrap_err();
        assert!(matches!(err, PlatformError::UnknownId { id: 999 }));
        assert!(err.to_string().contains("999"));
    }

    #[test]
    fn unknown_name_is_reported() {
        let err = platform_for_name("nonexistent").unwrap_err();
        assert!(matches!(err, PlatformError::UnknownName { .. }));
        assert!(err.to_string().contains("nonexistent"));
    }

    #[test]
    fn name_lookup_is_case_sensitive() {
        assert!(platform_for_name("Photon").is_err());
        assert!(platform_for_name("photon").is_ok());
    }

    #[test]
    fn unregistered_generation_is_an_internal_error() {
        let err = platform_commons_for_gen(9).unwrap_err();
        assert!(matches!(err, PlatformError::Internal));
    }

    #[test]
    fn b5som_overrides_filesystem_size_only() {
        let p = platform_for_id(25).unwrap();
        assert_eq!(p.name, "b5som");
        assert_eq!(p.gen, 3);
        assert!(p.has_radio_stack);

        let commons = platform_commons_for_gen(3).unwrap();
        assert_eq!(p.open_ocd, commons.open_ocd);

        let fs = p.filesystem.as_ref().unwrap();
        let default_fs = commons.filesystem.as_ref().unwrap();
        assert_eq!(fs.size, 4 * 1024 * 1024);
        assert_eq!(default_fs.size, 2 * 1024 * 1024);
        assert_eq!(fs.storage, default_fs.storage);
        assert_eq!(fs.address, default_fs.address);
    }

    #[test]
    fn photon_has_no_filesystem_and_resets_on_attach() {
        let p = platform_for_id(6).unwrap();
        assert_eq!(p.name, "photon");
        assert_eq!(p.gen, 2);
        assert!(p.filesystem.is_none());
        assert!(p.open_ocd.assert_srst_on_connect);
        assert!(p.open_ocd.unlock_flash);
    }

    #[test]
    fn gen2_dct_constants() {
        let commons = platform_commons_for_gen(2).unwrap();
        assert_eq!(commons.dct.address, Some(0x0800_4000));
        assert_eq!(commons.dct.size, Some(32768));
        assert_eq!(commons.dct.storage, StorageType::InternalFlash);
    }

    #[test]
    fn ncp_firmware_models() {
        let with_ncp: Vec<&str> = platforms()
            .iter()
            .filter(|p| p.has_ncp_firmware)
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(with_ncp, ["argon", "asom"]);
    }

    #[test]
    fn descriptor_shape_uses_camel_case_and_omits_absent_regions() {
        let p = platform_for_name("photon").unwrap();
        let json = serde_json::to_value(p).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj["displayName"], "Photon");
        assert_eq!(obj["dct"]["dfuAltSetting"], 1);
        assert_eq!(obj["openOcd"]["assertSrstOnConnect"], true);
        assert!(!obj.contains_key("filesystem"));
        assert!(!obj.contains_key("externalFlash"));
    }
}
