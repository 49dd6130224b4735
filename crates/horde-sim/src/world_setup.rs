//! Entity spawn factories.
//!
//! Every factory spawns the entity, gives it a visual handle and registers it
//! with the collision registry, so membership is established in one place.

use glam::Vec2;
use hecs::{Entity, World};

use horde_core::catalog::{EnemyDefinition, EnemyTypeId, WeaponId};
use horde_core::components::*;
use horde_core::constants::*;
use horde_core::enums::{BeamPhase, CollidableKind, CollisionGroup};
use horde_core::types::{Position, Velocity};

use horde_ai::vitals::spawn_vitals;

use crate::collision::{Collider, CollisionRegistry, ContactHandler};
use crate::combat::{BeamHitCooldowns, HitLedger};
use crate::weapons::WeaponStats;

/// Pickup collection radius.
const PICKUP_RADIUS: f32 = 10.0;

/// Hands out visual handles.
#[derive(Debug, Clone, Default)]
pub struct HandleAllocator {
    next: u32,
}

impl HandleAllocator {
    pub fn allocate(&mut self) -> VisualHandle {
        let handle = VisualHandle(self.next);
        self.next += 1;
        handle
    }
}

/// Install the pair rules the game uses.
///
/// Projectiles report hits through their own per-entity contacts; enemy
/// touches and pickups go through pair handlers.
pub fn install_pair_rules(registry: &mut CollisionRegistry) {
    registry.set_pair_rule(CollisionGroup::Projectile, CollisionGroup::Enemy, None);
    registry.set_pair_rule(
        CollisionGroup::Enemy,
        CollisionGroup::Player,
        Some(ContactHandler::EnemyTouchesPlayer),
    );
    registry.set_pair_rule(
        CollisionGroup::Player,
        CollisionGroup::Pickup,
        Some(ContactHandler::PlayerCollectsPickup),
    );
}

/// Spawn the player at `position`.
pub fn spawn_player(world: &mut World, registry: &mut CollisionRegistry, position: Vec2) -> Entity {
    let entity = world.spawn((
        Player,
        Position::from(position),
        PlayerVitals {
            health: PLAYER_MAX_HEALTH,
            max_health: PLAYER_MAX_HEALTH,
            invulnerable_secs: 0.0,
            experience: 0,
            level: 1,
        },
    ));
    registry.register(
        entity,
        Collider::new(CollidableKind::Player, PLAYER_COLLISION_RADIUS),
    );
    entity
}

/// Spawn an enemy of the given type.
pub fn spawn_enemy(
    world: &mut World,
    registry: &mut CollisionRegistry,
    handles: &mut HandleAllocator,
    def: &EnemyDefinition,
    type_id: EnemyTypeId,
    position: Vec2,
    order: u64,
) -> Entity {
    let handle = handles.allocate();
    let stats = EnemyStats {
        type_id,
        speed: def.speed,
        contact_damage: def.contact_damage,
        experience: def.experience,
        is_boss: def.is_boss,
    };
    let movement = MovementState {
        pattern: def.movement,
        ..Default::default()
    };

    let entity = world.spawn((
        Enemy,
        Position::from(position),
        stats,
        spawn_vitals(def.max_health),
        movement,
        Pose::default(),
        SpawnOrder(order),
        handle,
    ));
    registry.register(entity, Collider::new(CollidableKind::Enemy, def.radius));
    entity
}

/// Spawn a projectile flying from `origin` toward `target`.
///
/// A target on top of the origin falls back to +x instead of a NaN direction.
#[allow(clippy::too_many_arguments)]
pub fn spawn_projectile(
    world: &mut World,
    registry: &mut CollisionRegistry,
    handles: &mut HandleAllocator,
    weapon: WeaponId,
    origin: Vec2,
    target: Vec2,
    stats: &WeaponStats,
    exclude: Option<Entity>,
) -> Entity {
    let handle = handles.allocate();
    let direction = (target - origin).try_normalize().unwrap_or(Vec2::X);
    let velocity = direction * stats.projectile_speed;

    let projectile = Projectile {
        weapon,
        damage: stats.damage,
        pierce_remaining: stats.pierce,
        age: 0.0,
        lifetime: stats.projectile_lifetime,
        spin_rate: stats.spin_rate,
        retired: false,
    };
    let pose = Pose {
        rotation: direction.y.atan2(direction.x),
        ..Pose::default()
    };

    let entity = world.spawn((
        Position::from(origin),
        Velocity::from(velocity),
        projectile,
        HitLedger(exclude.into_iter().collect()),
        pose,
        handle,
    ));
    registry.register(
        entity,
        Collider::new(CollidableKind::Projectile, stats.projectile_radius).notifying(),
    );
    entity
}

/// Spawn a rotating beam anchored at `anchor`.
///
/// Beams register with zero radius: they are members of the registry but
/// never produce circle contacts; their hits come from the swept-rectangle test.
pub fn spawn_beam(
    world: &mut World,
    registry: &mut CollisionRegistry,
    handles: &mut HandleAllocator,
    weapon: WeaponId,
    anchor: Vec2,
    start_angle: f32,
    stats: &WeaponStats,
) -> Entity {
    let handle = handles.allocate();
    let beam = Beam {
        weapon,
        damage: stats.damage,
        pierce: stats.pierce,
        range: stats.range,
        half_width: BEAM_HALF_WIDTH,
        rotation_rate: stats.rotation_rate,
        angle: start_angle,
        total_rotation: 0.0,
        age: 0.0,
        phase: BeamPhase::Creation,
        phase_elapsed: 0.0,
        expired: false,
        terminated: false,
    };
    let pose = Pose {
        rotation: start_angle,
        ..Pose::default()
    };

    let entity = world.spawn((
        Position::from(anchor),
        beam,
        BeamHitCooldowns::default(),
        pose,
        handle,
    ));
    registry.register(entity, Collider::new(CollidableKind::Beam, 0.0));
    entity
}

/// Spawn an experience gem.
pub fn spawn_pickup(
    world: &mut World,
    registry: &mut CollisionRegistry,
    handles: &mut HandleAllocator,
    position: Position,
    experience: u32,
) -> Entity {
    let handle = handles.allocate();
    let entity = world.spawn((
        position,
        Pickup {
            experience,
            collected: false,
        },
        Pose::default(),
        handle,
    ));
    registry.register(entity, Collider::new(CollidableKind::Pickup, PICKUP_RADIUS));
    entity
}
