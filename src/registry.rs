// Copyright 2024 Saptak Santra
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! PoolRegistry: per-type idle queues and prototype table.

use ahash::AHashMap;
use glam::{Quat, Vec3};
use slotmap::SlotMap;
use smallvec::SmallVec;
use std::collections::VecDeque;
use std::sync::Arc;
use tracing::{debug, trace, warn};

use crate::config::PoolConfig;
use crate::entity::{EntityTypeId, EntryState, PoolEntryId, PooledEntity};
use crate::error::{PoolError, Result};
use crate::prototype::EntityPrototype;

/// One recyclable entity instance tracked by the registry.
struct PoolEntry {
    instance: Box<dyn PooledEntity>,
    type_id: EntityTypeId,
    state: EntryState,
}

/// Per-type registration record: prototype plus growth bookkeeping.
struct PoolSlot {
    prototype: Arc<dyn EntityPrototype>,
    capacity: Option<usize>,
    /// Instances ever created for this type (idle + checked out).
    live: usize,
}

/// Single source of truth for "is there a free instance of type T".
///
/// Owns all entry storage; idle queues hold handles only. A checked-out
/// entry stays in storage but is the caller's responsibility until it is
/// explicitly released. All operations are synchronous and expect a single
/// execution context; see [`SharedPoolRegistry`](crate::shared::SharedPoolRegistry)
/// for multi-context hosts.
pub struct PoolRegistry {
    /// Entry storage keyed by generational handles
    entries: SlotMap<PoolEntryId, PoolEntry>,

    /// EntityTypeId -> FIFO queue of idle entry handles
    idle: AHashMap<EntityTypeId, VecDeque<PoolEntryId>>,

    /// EntityTypeId -> prototype + ceiling. Populated together with `idle`
    /// per type at construction, never independently.
    slots: AHashMap<EntityTypeId, PoolSlot>,

    /// Types in registration order, for authority binding
    registered: SmallVec<[EntityTypeId; 8]>,

    /// Recycled-acquire counter (for diagnostics)
    recycled: u64,
}

impl PoolRegistry {
    /// Build the registry from the startup config list, pre-warming each
    /// type's queue to its configured initial size.
    ///
    /// Pre-warming instantiates real entity representations, so this is
    /// the expensive call; it runs once, before any spawn traffic. A type
    /// appearing in more than one config is rejected with
    /// [`PoolError::DuplicateRegistration`] rather than silently
    /// overwritten.
    pub fn new(configs: Vec<PoolConfig>) -> Result<Self> {
        let mut registry = Self {
            entries: SlotMap::with_key(),
            idle: AHashMap::with_capacity(configs.len()),
            slots: AHashMap::with_capacity(configs.len()),
            registered: SmallVec::new(),
            recycled: 0,
        };

        for config in configs {
            let type_id = config.type_id();
            if registry.slots.contains_key(&type_id) {
                return Err(PoolError::DuplicateRegistration(type_id));
            }

            let mut queue = VecDeque::with_capacity(config.sizing.initial_size);
            for _ in 0..config.sizing.initial_size {
                let mut instance = config.prototype.instantiate(Vec3::ZERO, Quat::IDENTITY);
                instance.deactivate();
                queue.push_back(registry.entries.insert(PoolEntry {
                    instance,
                    type_id,
                    state: EntryState::Idle,
                }));
            }

            // Both maps gain the type in the same step
            registry.idle.insert(type_id, queue);
            registry.slots.insert(
                type_id,
                PoolSlot {
                    prototype: Arc::clone(&config.prototype),
                    capacity: config.sizing.capacity,
                    live: config.sizing.initial_size,
                },
            );
            registry.registered.push(type_id);

            debug!(
                %type_id,
                initial_size = config.sizing.initial_size,
                capacity = ?config.sizing.capacity,
                "pool registered"
            );
        }

        Ok(registry)
    }

    /// Check out an instance of `type_id` at the given pose.
    ///
    /// Reuses the oldest idle instance when one exists (FIFO, no
    /// representation allocation); otherwise grows the pool by
    /// instantiating from the registered prototype. Growth is unbounded
    /// unless the type was configured with a ceiling.
    pub fn acquire(
        &mut self,
        type_id: EntityTypeId,
        position: Vec3,
        orientation: Quat,
    ) -> Result<PoolEntryId> {
        let queue = self
            .idle
            .get_mut(&type_id)
            .ok_or(PoolError::UnregisteredType(type_id))?;

        if let Some(id) = queue.pop_front() {
            let entry = self
                .entries
                .get_mut(id)
                .ok_or(PoolError::StaleHandle(id))?;
            entry.instance.set_transform(position, orientation);
            entry.instance.activate();
            entry.state = EntryState::Active;
            self.recycled += 1;
            trace!(%type_id, ?id, "pool entry recycled");
            return Ok(id);
        }

        // Queue empty: grow
        let slot = self
            .slots
            .get_mut(&type_id)
            .ok_or(PoolError::UnregisteredType(type_id))?;
        if let Some(capacity) = slot.capacity {
            if slot.live >= capacity {
                return Err(PoolError::CapacityExhausted { type_id, capacity });
            }
        }

        let instance = slot.prototype.instantiate(position, orientation);
        slot.live += 1;
        let live = slot.live;
        let id = self.entries.insert(PoolEntry {
            instance,
            type_id,
            state: EntryState::Active,
        });
        debug!(%type_id, ?id, live, "pool grew on exhaustion");
        Ok(id)
    }

    /// Return a checked-out instance to its type's idle queue.
    ///
    /// The instance is deactivated, not destroyed, and becomes eligible
    /// for reuse by a later acquire of the same type. Releasing an entry
    /// that is already idle is rejected with [`PoolError::AlreadyIdle`]
    /// instead of corrupting the queue with a duplicate handle.
    pub fn release(&mut self, handle: PoolEntryId) -> Result<()> {
        let entry = self
            .entries
            .get_mut(handle)
            .ok_or(PoolError::StaleHandle(handle))?;

        if entry.state == EntryState::Idle {
            warn!(?handle, type_id = %entry.type_id, "double release rejected");
            return Err(PoolError::AlreadyIdle(handle));
        }

        let type_id = entry.type_id;
        let queue = self
            .idle
            .get_mut(&type_id)
            .ok_or(PoolError::UnregisteredType(type_id))?;

        entry.instance.deactivate();
        entry.state = EntryState::Idle;
        queue.push_back(handle);
        trace!(%type_id, ?handle, "pool entry parked");
        Ok(())
    }

    /// Whether `type_id` was registered at construction.
    pub fn is_registered(&self, type_id: EntityTypeId) -> bool {
        self.slots.contains_key(&type_id)
    }

    /// Registered types, in registration order.
    pub fn registered_types(&self) -> &[EntityTypeId] {
        &self.registered
    }

    /// Idle instances currently parked for `type_id`.
    pub fn idle_count(&self, type_id: EntityTypeId) -> Option<usize> {
        self.idle.get(&type_id).map(VecDeque::len)
    }

    /// Instances ever created for `type_id` (idle + checked out).
    pub fn live_count(&self, type_id: EntityTypeId) -> Option<usize> {
        self.slots.get(&type_id).map(|slot| slot.live)
    }

    /// Activation state of a handle, if it resolves to a live entry.
    pub fn entry_state(&self, handle: PoolEntryId) -> Option<EntryState> {
        self.entries.get(handle).map(|entry| entry.state)
    }

    /// Type token of a handle, if it resolves to a live entry.
    pub fn entry_type(&self, handle: PoolEntryId) -> Option<EntityTypeId> {
        self.entries.get(handle).map(|entry| entry.type_id)
    }

    /// Total acquires served from an idle queue rather than by growth.
    pub fn recycled_count(&self) -> u64 {
        self.recycled
    }
}
