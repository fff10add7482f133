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

//! Entity identity tokens and the pooled-entity seam.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};
use slotmap::new_key_type;
use std::fmt;

new_key_type! {
    /// Handle to one recyclable pool entry, backed by slotmap's
    /// generational keys so a handle to a removed entry is detectably stale.
    pub struct PoolEntryId;
}

/// Opaque, stable identifier for a poolable entity type.
///
/// A registered integer token rather than a prototype hash: two distinct
/// prototypes can never collide on identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityTypeId(pub u32);

impl fmt::Display for EntityTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "type#{}", self.0)
    }
}

/// Network client identity of the peer that will own a spawned instance.
///
/// The pool ignores it (ownership assignment belongs to the spawn
/// authority) but the instance-provider contract carries it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClientId(pub u64);

/// Activation state of a pool entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryState {
    /// Checked out by the spawn authority.
    Active,
    /// Parked on its type's idle queue, invisible to the simulation.
    Idle,
}

/// The entity representation the pool recycles.
///
/// Rendering, physics and replication live behind this trait; the pool only
/// needs to park and revive instances.
pub trait PooledEntity: Send {
    /// Move the instance to a new position and orientation.
    fn set_transform(&mut self, position: Vec3, orientation: Quat);

    /// Make the instance visible to the simulation again.
    fn activate(&mut self);

    /// Remove the instance from simulation/visibility without destroying
    /// its underlying representation.
    fn deactivate(&mut self);
}
