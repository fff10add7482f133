//! Per-type pool configuration, supplied once at startup.

use crate::entity::EntityTypeId;
use crate::prototype::EntityPrototype;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Sizing half of a pool configuration.
///
/// Kept separate from the prototype reference so it can be loaded from
/// data (the prototype itself is a live object and never serialized).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PoolSizing {
    /// Number of instances created and parked at startup.
    pub initial_size: usize,

    /// Optional ceiling on live instances of this type. `None` means the
    /// pool grows without bound on exhaustion, which is the default
    /// policy; `Some(n)` makes an acquire that would push the live count
    /// past `n` fail instead of growing.
    pub capacity: Option<usize>,
}

impl Default for PoolSizing {
    fn default() -> Self {
        Self {
            initial_size: 0,
            capacity: None,
        }
    }
}

impl PoolSizing {
    /// Sizing with `initial_size` pre-warmed instances and no ceiling.
    pub fn prewarmed(initial_size: usize) -> Self {
        Self {
            initial_size,
            capacity: None,
        }
    }
}

/// One entity type's pool configuration: prototype + sizing.
///
/// Immutable after registry construction.
#[derive(Clone)]
pub struct PoolConfig {
    pub prototype: Arc<dyn EntityPrototype>,
    pub sizing: PoolSizing,
}

impl PoolConfig {
    pub fn new(prototype: Arc<dyn EntityPrototype>, sizing: PoolSizing) -> Self {
        Self { prototype, sizing }
    }

    /// The identity token of the configured type, taken from the prototype.
    pub fn type_id(&self) -> EntityTypeId {
        self.prototype.type_id()
    }
}
