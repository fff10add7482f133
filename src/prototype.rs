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

//! Prototype seam: how the pool creates fresh entity representations.

use crate::entity::{EntityTypeId, PooledEntity};
use glam::{Quat, Vec3};

/// Template used to create new entities when a pool is exhausted (and to
/// pre-warm it at startup).
///
/// Instantiation is the expensive operation the pool exists to amortize;
/// the registry calls it once per pre-warmed entry at construction and
/// once per growth step afterwards, never on the recycle path.
pub trait EntityPrototype: Send + Sync {
    /// The registered identity token of the entity type this prototype
    /// produces. Every instance spawned from the same prototype resolves
    /// to the same token.
    fn type_id(&self) -> EntityTypeId;

    /// Create one fresh representation at the given pose.
    fn instantiate(&self, position: Vec3, orientation: Quat) -> Box<dyn PooledEntity>;
}
