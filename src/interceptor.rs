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

//! SpawnInterceptor: routes an authority's spawn/destroy calls through the pool.

use glam::{Quat, Vec3};
use std::cell::RefCell;
use std::rc::Rc;

use crate::entity::{ClientId, EntityTypeId, PoolEntryId};
use crate::error::Result;
use crate::registry::PoolRegistry;

/// The instance-provider shape a spawn authority expects for one entity
/// type: it calls [`instantiate`](InstanceProvider::instantiate) when it
/// wants a new logical entity and [`destroy`](InstanceProvider::destroy)
/// when that entity should disappear.
pub trait InstanceProvider {
    /// Produce an instance at the given pose for the given owning client.
    fn instantiate(
        &self,
        owner: ClientId,
        position: Vec3,
        orientation: Quat,
    ) -> Result<PoolEntryId>;

    /// Dispose of an instance the authority no longer wants.
    fn destroy(&self, handle: PoolEntryId) -> Result<()>;
}

/// The registration surface of the external spawn authority.
///
/// Passed explicitly wherever it is needed; the pool never reaches for a
/// process-wide singleton.
pub trait SpawnAuthority {
    /// Register `provider` as the instance source for `type_id`. Must be
    /// called before the authority spawns any entity of that type.
    fn add_provider(&mut self, type_id: EntityTypeId, provider: Box<dyn InstanceProvider>);
}

/// Implements the authority's instance-provider contract for exactly one
/// entity type by forwarding to a shared [`PoolRegistry`]: spawns acquire
/// from the pool, destroys release back into it.
pub struct SpawnInterceptor {
    type_id: EntityTypeId,
    registry: Rc<RefCell<PoolRegistry>>,
}

impl SpawnInterceptor {
    /// Bind an interceptor to one registered type.
    ///
    /// The registry must already have registered `type_id`; construction
    /// order guarantees the interceptor never sees an unregistered type.
    pub fn new(type_id: EntityTypeId, registry: Rc<RefCell<PoolRegistry>>) -> Self {
        debug_assert!(
            registry.borrow().is_registered(type_id),
            "interceptor bound before its type was registered"
        );
        Self { type_id, registry }
    }

    /// The entity type this interceptor serves.
    pub fn type_id(&self) -> EntityTypeId {
        self.type_id
    }
}

impl InstanceProvider for SpawnInterceptor {
    fn instantiate(
        &self,
        _owner: ClientId,
        position: Vec3,
        orientation: Quat,
    ) -> Result<PoolEntryId> {
        // Ownership assignment is the authority's concern
        self.registry
            .borrow_mut()
            .acquire(self.type_id, position, orientation)
    }

    fn destroy(&self, handle: PoolEntryId) -> Result<()> {
        self.registry.borrow_mut().release(handle)
    }
}

/// Register one interceptor per registered type with the authority.
///
/// Call once at startup, after [`PoolRegistry::new`] and before any spawn
/// traffic; from then on every spawn and destroy of a registered type is
/// transparently redirected through the pool.
pub fn bind_pool(registry: &Rc<RefCell<PoolRegistry>>, authority: &mut dyn SpawnAuthority) {
    let types: Vec<EntityTypeId> = registry.borrow().registered_types().to_vec();
    for type_id in types {
        let interceptor = SpawnInterceptor::new(type_id, Rc::clone(registry));
        authority.add_provider(type_id, Box::new(interceptor));
    }
}
