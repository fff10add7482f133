//! Mutex-guarded registry for hosts with more than one execution context.

use glam::{Quat, Vec3};
use parking_lot::Mutex;
use std::sync::Arc;

use crate::entity::{EntityTypeId, PoolEntryId};
use crate::error::Result;
use crate::registry::PoolRegistry;

/// Cloneable handle that serializes all acquire/release traffic through
/// one lock.
///
/// The baseline [`PoolRegistry`] assumes a single execution context.
/// When spawn and despawn requests arrive from multiple worker threads,
/// concurrent dequeue/enqueue on the same idle queue is unsafe; this
/// wrapper takes one registry-wide lock per operation instead. Each
/// operation is bounded by at most one instantiation, so the critical
/// section stays short.
#[derive(Clone)]
pub struct SharedPoolRegistry {
    inner: Arc<Mutex<PoolRegistry>>,
}

impl SharedPoolRegistry {
    pub fn new(registry: PoolRegistry) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    /// Locked [`PoolRegistry::acquire`].
    pub fn acquire(
        &self,
        type_id: EntityTypeId,
        position: Vec3,
        orientation: Quat,
    ) -> Result<PoolEntryId> {
        self.inner.lock().acquire(type_id, position, orientation)
    }

    /// Locked [`PoolRegistry::release`].
    pub fn release(&self, handle: PoolEntryId) -> Result<()> {
        self.inner.lock().release(handle)
    }

    pub fn idle_count(&self, type_id: EntityTypeId) -> Option<usize> {
        self.inner.lock().idle_count(type_id)
    }

    pub fn live_count(&self, type_id: EntityTypeId) -> Option<usize> {
        self.inner.lock().live_count(type_id)
    }
}
