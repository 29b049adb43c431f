//! Registration Benchmark Suite
//!
//! Startup-path targets:
//!   enemy_registration_1000_custom ....... bulk identity allocation
//!   character_registration_200_builtin ... shared pool indexing
//!   lookup_by_identity ................... read path after load

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tnh_registry::character::CharacterDefinition;
use tnh_registry::enemy::EnemyTemplate;
use tnh_registry::pool::{DEFAULT_POOL_CATEGORY, EquipmentPool, PoolKey, PoolType};
use tnh_registry::{EnemyIdentity, Registry, RegistryConfig};

fn fresh_registry() -> Registry {
    Registry::new(RegistryConfig::default()).expect("default config")
}

/// Benchmark: register 1000 custom enemies into an empty registry.
fn bench_enemy_registration(c: &mut Criterion) {
    let templates: Vec<EnemyTemplate> = (0..1000)
        .map(|i| EnemyTemplate::new(format!("custom_enemy_{i}"), format!("Enemy {i}")))
        .collect();

    c.bench_function("enemy_registration_1000_custom", |b| {
        b.iter(|| {
            let mut registry = fresh_registry();
            for template in &templates {
                registry
                    .register_custom_enemy(black_box(template.clone()))
                    .expect("unique key");
            }
            black_box(registry.stats());
        });
    });
}

/// Benchmark: register 200 built-in characters sharing four catalogue pools.
fn bench_character_registration(c: &mut Criterion) {
    let shared: Vec<Arc<EquipmentPool>> = (0..4)
        .map(|i| {
            Arc::new(
                EquipmentPool::new(format!("Catalogue {i}"), PoolType::Firearm, 2)
                    .shared_as(PoolKey::new("catalogue".into(), i, DEFAULT_POOL_CATEGORY)),
            )
        })
        .collect();
    let definitions: Vec<CharacterDefinition> = (0..200)
        .map(|i| {
            let id = format!("builtin_{i}");
            shared
                .iter()
                .fold(CharacterDefinition::new(id.clone(), id, "Builtin"), |def, pool| {
                    def.with_pool(Arc::clone(pool))
                })
        })
        .collect();

    c.bench_function("character_registration_200_builtin", |b| {
        b.iter(|| {
            let mut registry = fresh_registry();
            for definition in &definitions {
                black_box(registry.register_default_character(definition.clone()));
            }
        });
    });
}

/// Benchmark: point lookup by numeric identity.
fn bench_lookup(c: &mut Criterion) {
    let mut registry = fresh_registry();
    for i in 0..1000 {
        registry
            .register_custom_enemy(EnemyTemplate::new(format!("custom_enemy_{i}"), "Enemy"))
            .expect("unique key");
    }
    let target = EnemyIdentity::new(30_500).expect("valid identity");

    c.bench_function("lookup_by_identity", |b| {
        b.iter(|| black_box(registry.enemy(black_box(target))));
    });
}

criterion_group!(
    benches,
    bench_enemy_registration,
    bench_character_registration,
    bench_lookup
);
criterion_main!(benches);
