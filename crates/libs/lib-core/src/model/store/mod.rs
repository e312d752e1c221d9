//! # Settings Store
//!
//! The persisted configuration store is a write-only sink for committed settings,
//! plus a snapshot read when the settings form opens.
//!
//! ## Implementations
//!
//! - [`MemorySettingsStore`] - in-process store that counts writes
//! - [`JsonFileSettingsStore`] - pretty-printed JSON file with an `updated_at` stamp
//!
//! ## Example
//!
//! ```rust
//! use lib_core::model::store::{MemorySettingsStore, SettingsStore};
//! use shared::dto::ResolvedConfiguration;
//!
//! let store = MemorySettingsStore::new();
//! assert!(store.snapshot().unwrap().is_none());
//!
//! store.save(&ResolvedConfiguration::default()).unwrap();
//! assert_eq!(store.writes(), 1);
//! ```

// region: --- Modules
pub mod json_file;
pub mod memory;
// endregion: --- Modules

// region: --- Re-exports
pub use json_file::JsonFileSettingsStore;
pub use memory::MemorySettingsStore;
// endregion: --- Re-exports

// region: --- Types and Functions
use crate::error::Result;
use shared::dto::ResolvedConfiguration;

/// Persisted configuration store.
///
/// `save` must apply the whole configuration or nothing.
pub trait SettingsStore: Send + Sync {
    /// Last saved configuration, or `None` if nothing was saved yet.
    fn snapshot(&self) -> Result<Option<ResolvedConfiguration>>;

    /// Replace the stored configuration.
    fn save(&self, config: &ResolvedConfiguration) -> Result<()>;
}
// endregion: --- Types and Functions
