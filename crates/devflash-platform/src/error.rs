//! Error types for platform registry lookups.

/// Errors that can occur when querying the platform registry.
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    /// No platform with the requested numeric ID.
    #[error("unknown platform ID: {id}")]
    UnknownId {
        /// The ID that was looked up.
        id: u16,
    },

    /// No platform with the requested name.
    #[error("unknown platform name: {name}")]
    UnknownName {
        /// The name that was looked up.
        name: String,
    },

    /// Defect in the static platform table.
    #[error("internal platform registry error")]
    Internal,
}

/// Result type for platform registry operations.
pub type Result<T> = std::result::Result<T, PlatformError>;
