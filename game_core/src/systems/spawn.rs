use glam::{Quat, Vec3};
use hecs::World;

use crate::components::{Body, TargetTag};
use crate::params::{Config, Params};
use crate::resources::{Events, GameRng};

/// Keep the minimum number of pop-up targets alive. Runs once per tick,
/// before collision checks.
pub fn ensure_targets(world: &mut World, rng: &mut GameRng, config: &Config, events: &mut Events) {
    let live = world.query::<(&Body, &TargetTag)>().iter().count();
    for _ in live..config.min_targets {
        let x = rng.gen_range(Params::TARGET_X_MIN, Params::TARGET_X_MAX);
        let y = rng.gen_range(Params::TARGET_Y_MIN, Params::TARGET_Y_MAX);
        spawn_target(world, config, Vec3::new(x, y, config.hoop_plane_z));
        events.target_spawned = true;
    }
}

/// Spawn a single passive target facing the court
pub fn spawn_target(world: &mut World, config: &Config, center: Vec3) -> hecs::Entity {
    let body = Body::new(
        config.target_shape,
        config.target_material,
        Vec3::from(Params::TARGET_SIZE),
    )
    .emplace(
        center,
        Quat::from_rotation_y(-std::f32::consts::FRAC_PI_2),
        Vec3::ZERO,
        0.0,
        Vec3::X,
    );
    world.spawn((body, TargetTag))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawns_up_to_minimum() {
        let mut world = World::new();
        let mut rng = GameRng::new(7);
        let mut config = Config::new();
        config.min_targets = 3;
        let mut events = Events::new();

        ensure_targets(&mut world, &mut rng, &config, &mut events);

        assert_eq!(world.query::<&TargetTag>().iter().count(), 3);
        assert!(events.target_spawned);
    }

    #[test]
    fn test_no_spawn_when_stocked() {
        let mut world = World::new();
        let mut rng = GameRng::new(7);
        let config = Config::new();
        let mut events = Events::new();

        spawn_target(&mut world, &config, Vec3::new(0.0, 5.0, config.hoop_plane_z));
        ensure_targets(&mut world, &mut rng, &config, &mut events);

        assert_eq!(world.query::<&TargetTag>().iter().count(), 1);
        assert!(!events.target_spawned);
    }

    #[test]
    fn test_spawn_positions_stay_in_bounds() {
        let mut world = World::new();
        let mut rng = GameRng::new(99);
        let mut config = Config::new();
        config.min_targets = 50;
        let mut events = Events::new();

        ensure_targets(&mut world, &mut rng, &config, &mut events);

        for (_entity, (body, _)) in world.query::<(&Body, &TargetTag)>().iter() {
            assert!(body.center.x >= Params::TARGET_X_MIN && body.center.x < Params::TARGET_X_MAX);
            assert!(body.center.y >= Params::TARGET_Y_MIN && body.center.y < Params::TARGET_Y_MAX);
            assert_eq!(body.center.z, config.hoop_plane_z);
            assert_eq!(body.linear_velocity, Vec3::ZERO);
        }
    }

    #[test]
    fn test_fixed_seed_spawns_identically() {
        let spawn_once = |seed: u64| {
            let mut world = World::new();
            let mut rng = GameRng::new(seed);
            let config = Config::new();
            let mut events = Events::new();
            ensure_targets(&mut world, &mut rng, &config, &mut events);
            let center = world
                .query::<(&Body, &TargetTag)>()
                .iter()
                .map(|(_e, (body, _))| body.center)
                .next()
                .unwrap();
            center
        };
        assert_eq!(spawn_once(42), spawn_once(42));
    }
}
