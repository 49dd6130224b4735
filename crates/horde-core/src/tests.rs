#[cfg(test)]
mod tests {
    use crate::catalog::*;
    use crate::commands::SimCommand;
    use crate::enums::*;
    use crate::events::SimEvent;
    use crate::components::VisualHandle;
    use crate::state::FrameSnapshot;
    use crate::types::{Bounds, Position, SimTime, Velocity};

    const SAMPLE_CATALOG: &str = r#"{
        "enemies": [
            { "name": "Blob", "max_health": 20, "speed": 60.0, "contact_damage": 5, "experience": 1 },
            { "name": "Hopper", "max_health": 35, "speed": 80.0, "contact_damage": 8, "experience": 2,
              "radius": 18.0, "movement": "Hop" }
        ],
        "weapons": [
            { "id": 0, "name": "Bolt", "archetype": { "type": "SingleTarget" },
              "base_damage": 25.0, "attack_interval": 1.0, "range": 400.0,
              "projectile_speed": 500.0, "level": 1, "max_level": 8,
              "effects": { "damage_multiplier": 1.25 } },
            { "id": 1, "name": "Nova", "archetype": { "type": "Radial", "count": 8 },
              "base_damage": 10.0, "attack_interval": 2.0, "range": 300.0,
              "projectile_speed": 300.0, "max_level": 5,
              "effects": { "damage_multiplier": 1.1, "pierce_bonus": 1 } }
        ],
        "waves": [
            { "start": 0.0, "end": 1.0, "enemies": ["Blob"], "spawn_rate": 50.0,
              "max_count": 50, "event": "Normal" },
            { "start": 1.0, "end": 2.0, "enemies": ["Blob", "Hopper"], "spawn_rate": 2.0,
              "max_count": 80, "event": "CircleFormation" }
        ]
    }"#;

    // ---- Catalog ----

    #[test]
    fn test_catalog_from_json_applies_defaults() {
        let catalog = Catalog::from_json(SAMPLE_CATALOG).unwrap();
        assert_eq!(catalog.enemies.len(), 2);
        assert_eq!(catalog.weapons.len(), 2);
        assert_eq!(catalog.waves.len(), 2);

        let blob = &catalog.enemies[0];
        assert_eq!(blob.movement, MovementPattern::Seek);
        assert!((blob.radius - crate::constants::ENEMY_DEFAULT_RADIUS).abs() < 1e-6);
        assert!(!blob.is_boss);

        let hopper = &catalog.enemies[1];
        assert_eq!(hopper.movement, MovementPattern::Hop);

        let nova = catalog.weapon(WeaponId(1)).unwrap();
        assert_eq!(nova.archetype, WeaponArchetype::Radial { count: 8 });
        assert_eq!(nova.level, 0, "Level defaults to locked");
        assert!((nova.effects.fire_rate_multiplier - 1.0).abs() < 1e-6);

        assert_eq!(catalog.waves[1].event, WaveEvent::CircleFormation);
    }

    #[test]
    fn test_catalog_from_json_rejects_garbage() {
        let err = Catalog::from_json("{ not json").unwrap_err();
        assert!(err.starts_with("invalid catalog"), "got: {err}");
    }

    #[test]
    fn test_enemy_index_lookup() {
        let catalog = Catalog::from_json(SAMPLE_CATALOG).unwrap();
        let index = catalog.enemy_index();
        assert_eq!(index.lookup("Blob"), Some(EnemyTypeId(0)));
        assert_eq!(index.lookup("Hopper"), Some(EnemyTypeId(1)));
        assert_eq!(index.lookup("Dragon"), None);
        assert_eq!(catalog.enemy(EnemyTypeId(1)).unwrap().name, "Hopper");
        assert!(catalog.enemy(EnemyTypeId(9)).is_none());
    }

    #[test]
    fn test_wave_window_is_half_open() {
        let catalog = Catalog::from_json(SAMPLE_CATALOG).unwrap();
        let first = &catalog.waves[0];
        assert!(first.contains(0.0));
        assert!(first.contains(0.999));
        assert!(!first.contains(1.0), "End bound is exclusive");
        assert!(!first.contains(-0.1));
    }

    // ---- Enums ----

    #[test]
    fn test_beam_is_in_projectile_group() {
        assert_eq!(CollidableKind::Beam.group(), CollisionGroup::Projectile);
        assert_eq!(CollidableKind::Projectile.group(), CollisionGroup::Projectile);
        assert_eq!(CollidableKind::Pickup.group(), CollisionGroup::Pickup);
        assert_eq!(CollidableKind::Enemy.group(), CollisionGroup::Enemy);
        assert_eq!(CollidableKind::Player.group(), CollisionGroup::Player);
    }

    #[test]
    fn test_wave_event_serializes_as_plain_tag() {
        let json = serde_json::to_string(&WaveEvent::BossEvent).unwrap();
        assert_eq!(json, "\"BossEvent\"");
        let back: WaveEvent = serde_json::from_str("\"FinalAssault\"").unwrap();
        assert_eq!(back, WaveEvent::FinalAssault);
    }

    // ---- Commands and events ----

    #[test]
    fn test_sim_command_serde() {
        let commands = vec![
            SimCommand::StartRun,
            SimCommand::MovePlayer { x: 10.0, y: -4.0 },
            SimCommand::UpgradeWeapon { weapon: WeaponId(2) },
            SimCommand::SetTimeScale { scale: 2.0 },
            SimCommand::Restart,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: SimCommand = serde_json::from_str(&json).unwrap();
            // SimCommand doesn't derive PartialEq; compare JSON
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    #[test]
    fn test_sim_event_is_tagged() {
        let event = SimEvent::Detach {
            handle: VisualHandle(7),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"Detach\""), "got: {json}");
        let back: SimEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_snapshot_serde() {
        let snapshot = FrameSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: FrameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.phase, back.phase);
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    // ---- Geometry ----

    #[test]
    fn test_position_distance() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-6);
        assert!((a.distance_sq_to(&b) - 25.0).abs() < 1e-6);
    }

    #[test]
    fn test_velocity_speed_and_heading() {
        let v = Velocity::new(3.0, 4.0);
        assert!((v.speed() - 5.0).abs() < 1e-6);

        let down = Velocity::new(0.0, 10.0);
        assert!((down.heading() - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_bounds_contains() {
        let b = Bounds {
            left: -10.0,
            right: 10.0,
            top: -5.0,
            bottom: 5.0,
        };
        assert!((b.width() - 20.0).abs() < 1e-6);
        assert!((b.height() - 10.0).abs() < 1e-6);
        assert!(b.contains(&Position::new(0.0, 0.0)));
        assert!(!b.contains(&Position::new(11.0, 0.0)));
    }

    #[test]
    fn test_sim_time_minutes() {
        let mut time = SimTime::default();
        for _ in 0..3600 {
            time.advance(1.0 / 60.0);
        }
        assert_eq!(time.tick, 3600);
        assert!(
            (time.elapsed_minutes() - 1.0).abs() < 1e-9,
            "3600 ticks at 60Hz should be one minute, got {}",
            time.elapsed_minutes()
        );
    }
}
