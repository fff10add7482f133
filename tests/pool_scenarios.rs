//! End-to-end pool behavior driven through the spawn-authority contract.

use netpool::prelude::*;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Stand-in entity representation; records its activation state.
#[allow(dead_code)]
struct Marker {
    active: bool,
}

impl PooledEntity for Marker {
    fn set_transform(&mut self, _position: Vec3, _orientation: Quat) {}
    fn activate(&mut self) {
        self.active = true;
    }
    fn deactivate(&mut self) {
        self.active = false;
    }
}

struct MarkerPrototype {
    type_id: EntityTypeId,
    created: Arc<AtomicUsize>,
}

impl EntityPrototype for MarkerPrototype {
    fn type_id(&self) -> EntityTypeId {
        self.type_id
    }
    fn instantiate(&self, _position: Vec3, _orientation: Quat) -> Box<dyn PooledEntity> {
        self.created.fetch_add(1, Ordering::Relaxed);
        Box::new(Marker { active: true })
    }
}

/// Authority double: a provider table plus spawn/despawn entry points the
/// way a netcode layer would drive them.
#[derive(Default)]
struct FakeAuthority {
    providers: HashMap<EntityTypeId, Box<dyn InstanceProvider>>,
}

impl SpawnAuthority for FakeAuthority {
    fn add_provider(&mut self, type_id: EntityTypeId, provider: Box<dyn InstanceProvider>) {
        self.providers.insert(type_id, provider);
    }
}

impl FakeAuthority {
    fn spawn(&self, type_id: EntityTypeId, owner: ClientId) -> Result<PoolEntryId> {
        self.providers[&type_id].instantiate(owner, Vec3::ZERO, Quat::IDENTITY)
    }

    fn despawn(&self, type_id: EntityTypeId, handle: PoolEntryId) -> Result<()> {
        self.providers[&type_id].destroy(handle)
    }
}

fn make_config(type_id: u32, initial_size: usize) -> (PoolConfig, Arc<AtomicUsize>) {
    let created = Arc::new(AtomicUsize::new(0));
    let prototype = Arc::new(MarkerPrototype {
        type_id: EntityTypeId(type_id),
        created: created.clone(),
    });
    (
        PoolConfig::new(prototype, PoolSizing::prewarmed(initial_size)),
        created,
    )
}

#[test]
fn test_full_spawn_despawn_scenario() {
    let type_a = EntityTypeId(1);
    let type_b = EntityTypeId(2);

    let (config_a, created_a) = make_config(1, 2);
    let (config_b, created_b) = make_config(2, 0);

    let registry = Rc::new(RefCell::new(
        PoolRegistry::new(vec![config_a, config_b]).unwrap(),
    ));
    let mut authority = FakeAuthority::default();
    bind_pool(&registry, &mut authority);

    assert_eq!(created_a.load(Ordering::Relaxed), 2, "type A pre-warmed");
    assert_eq!(created_b.load(Ordering::Relaxed), 0, "type B not pre-warmed");

    // Two spawns of A drain the pre-warmed queue without creating anything
    let a1 = authority.spawn(type_a, ClientId(10)).unwrap();
    let a2 = authority.spawn(type_a, ClientId(11)).unwrap();
    assert_ne!(a1, a2, "pre-warmed handles are distinct");
    assert_eq!(created_a.load(Ordering::Relaxed), 2);
    assert_eq!(registry.borrow().idle_count(type_a), Some(0));

    // Third spawn of A grows the pool
    let a3 = authority.spawn(type_a, ClientId(12)).unwrap();
    assert_ne!(a3, a1);
    assert_ne!(a3, a2);
    assert_eq!(created_a.load(Ordering::Relaxed), 3, "pool grew to 3");
    assert_eq!(registry.borrow().live_count(type_a), Some(3));

    // B had nothing parked, so its first spawn is a fresh instance
    let b1 = authority.spawn(type_b, ClientId(10)).unwrap();
    assert_eq!(created_b.load(Ordering::Relaxed), 1);
    assert_eq!(registry.borrow().entry_type(b1), Some(type_b));

    // Despawn one A, respawn A: exactly that handle comes back
    authority.despawn(type_a, a2).unwrap();
    assert_eq!(registry.borrow().entry_state(a2), Some(EntryState::Idle));
    let a4 = authority.spawn(type_a, ClientId(13)).unwrap();
    assert_eq!(a4, a2, "released handle is reused");
    assert_eq!(created_a.load(Ordering::Relaxed), 3, "reuse allocates nothing");
}

#[test]
fn test_fifo_law_through_authority() {
    let type_a = EntityTypeId(1);
    let (config, _) = make_config(1, 3);
    let registry = Rc::new(RefCell::new(PoolRegistry::new(vec![config]).unwrap()));
    let mut authority = FakeAuthority::default();
    bind_pool(&registry, &mut authority);

    let h1 = authority.spawn(type_a, ClientId(1)).unwrap();
    let h2 = authority.spawn(type_a, ClientId(1)).unwrap();
    let h3 = authority.spawn(type_a, ClientId(1)).unwrap();

    authority.despawn(type_a, h2).unwrap();
    authority.despawn(type_a, h3).unwrap();
    authority.despawn(type_a, h1).unwrap();

    assert_eq!(authority.spawn(type_a, ClientId(1)).unwrap(), h2);
    assert_eq!(authority.spawn(type_a, ClientId(1)).unwrap(), h3);
    assert_eq!(authority.spawn(type_a, ClientId(1)).unwrap(), h1);
}

#[test]
fn test_unregistered_type_has_no_provider_and_registry_rejects() {
    let (config, _) = make_config(1, 1);
    let registry = Rc::new(RefCell::new(PoolRegistry::new(vec![config]).unwrap()));
    let mut authority = FakeAuthority::default();
    bind_pool(&registry, &mut authority);

    let missing = EntityTypeId(42);
    assert!(!authority.providers.contains_key(&missing));
    assert_eq!(
        registry
            .borrow_mut()
            .acquire(missing, Vec3::ZERO, Quat::IDENTITY),
        Err(PoolError::UnregisteredType(missing))
    );
}

#[test]
fn test_double_despawn_is_reported_not_silent() {
    let type_a = EntityTypeId(1);
    let (config, _) = make_config(1, 1);
    let registry = Rc::new(RefCell::new(PoolRegistry::new(vec![config]).unwrap()));
    let mut authority = FakeAuthority::default();
    bind_pool(&registry, &mut authority);

    let handle = authority.spawn(type_a, ClientId(1)).unwrap();
    authority.despawn(type_a, handle).unwrap();

    assert_eq!(
        authority.despawn(type_a, handle),
        Err(PoolError::AlreadyIdle(handle))
    );
    assert_eq!(
        registry.borrow().idle_count(type_a),
        Some(1),
        "second despawn must not enqueue a duplicate"
    );
}
