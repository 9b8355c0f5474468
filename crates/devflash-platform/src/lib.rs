//! Static registry of supported device platforms.
//!
//! Each hardware generation contributes shared defaults (flash layout,
//! debugger parameters, storage topology); each device model layers its own
//! overrides on top. The merged records are indexed by numeric ID and by
//! name and shared immutably for the lifetime of the process:
//!
//! ```
//! use devflash_platform::platform_for_name;
//!
//! let p = platform_for_name("boron").unwrap();
//! assert_eq!(p.id, 13);
//! assert_eq!(p.gen, 3);
//! ```

pub mod error;
pub mod flash;
pub mod generation;
pub mod openocd;
pub mod platform;
pub mod registry;

pub use error::{PlatformError, Result};
pub use flash::{DctRegion, FilesystemRegion, FlashInterface};
pub use generation::GenerationCommons;
pub use openocd::OpenOcdConfig;
pub use platform::Platform;
pub use registry::{
    platform_commons_for_gen, platform_for_id, platform_for_name, platforms, registry,
    PlatformRegistry,
};
