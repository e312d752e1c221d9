//! # In-Memory Settings Store

use super::SettingsStore;
use crate::error::Result;
use parking_lot::RwLock;
use shared::dto::ResolvedConfiguration;

#[derive(Debug, Default)]
struct Inner {
    config: Option<ResolvedConfiguration>,
    writes: usize,
}

/// Settings store held in process memory.
///
/// Counts successful writes so callers can assert that a blocked commit wrote nothing.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    inner: RwLock<Inner>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a configuration (not counted as a write).
    pub fn with_config(config: ResolvedConfiguration) -> Self {
        Self {
            inner: RwLock::new(Inner {
                config: Some(config),
                writes: 0,
            }),
        }
    }

    /// Number of `save` calls applied so far.
    pub fn writes(&self) -> usize {
        self.inner.read().writes
    }

    pub fn current(&self) -> Option<ResolvedConfiguration> {
        self.inner.read().config.clone()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn snapshot(&self) -> Result<Option<ResolvedConfiguration>> {
        Ok(self.current())
    }

    fn save(&self, config: &ResolvedConfiguration) -> Result<()> {
        let mut inner = self.inner.write();
        inner.config = Some(config.clone());
        inner.writes += 1;
        tracing::debug!(writes = inner.writes, "Saved settings to memory store");
        Ok(())
    }
}
