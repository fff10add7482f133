use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use netpool::prelude::*;
use std::sync::Arc;

struct Projectile;

impl PooledEntity for Projectile {
    fn set_transform(&mut self, _position: Vec3, _orientation: Quat) {}
    fn activate(&mut self) {}
    fn deactivate(&mut self) {}
}

struct ProjectilePrototype;

impl EntityPrototype for ProjectilePrototype {
    fn type_id(&self) -> EntityTypeId {
        EntityTypeId(1)
    }
    fn instantiate(&self, _position: Vec3, _orientation: Quat) -> Box<dyn PooledEntity> {
        Box::new(Projectile)
    }
}

fn prewarmed_registry(initial_size: usize) -> PoolRegistry {
    let config = PoolConfig::new(
        Arc::new(ProjectilePrototype),
        PoolSizing::prewarmed(initial_size),
    );
    PoolRegistry::new(vec![config]).unwrap()
}

fn recycle_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("recycle");

    group.bench_function("acquire_release_round_trip", |b| {
        b.iter_batched(
            || prewarmed_registry(1),
            |mut registry| {
                for _ in 0..10_000 {
                    let handle = registry
                        .acquire(EntityTypeId(1), Vec3::ZERO, Quat::IDENTITY)
                        .unwrap();
                    registry.release(handle).unwrap();
                }
                registry
            },
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

fn growth_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("growth");

    group.bench_function("acquire_cold_pool", |b| {
        b.iter_batched(
            || prewarmed_registry(0),
            |mut registry| {
                for _ in 0..10_000 {
                    registry
                        .acquire(EntityTypeId(1), Vec3::ZERO, Quat::IDENTITY)
                        .unwrap();
                }
                registry
            },
            BatchSize::LargeInput,
        )
    });

    group.bench_function("acquire_prewarmed_pool", |b| {
        b.iter_batched(
            || prewarmed_registry(10_000),
            |mut registry| {
                for _ in 0..10_000 {
                    registry
                        .acquire(EntityTypeId(1), Vec3::ZERO, Quat::IDENTITY)
                        .unwrap();
                }
                registry
            },
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

criterion_group!(benches, recycle_benchmark, growth_benchmark);
criterion_main!(benches);
