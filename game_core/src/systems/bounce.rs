use hecs::World;

use crate::components::{BallTag, Body};
use crate::params::{Config, Params};
use crate::resources::Events;

/// Bounce the ball off the floor and walls with energy loss.
///
/// Not a full rigid-body response: the normal component flips sign scaled by
/// the restitution factor and tangential components lose a little speed.
pub fn bounce_walls(world: &mut World, config: &Config, events: &mut Events) {
    for (_entity, (body, _)) in world.query_mut::<(&mut Body, &BallTag)>() {
        // Floor
        if body.center.y < config.floor_y && body.linear_velocity.y < 0.0 {
            body.linear_velocity.x *= Params::FLOOR_FRICTION_X;
            body.linear_velocity.y *= -config.restitution;
            body.linear_velocity.z *= Params::FLOOR_FRICTION_Z;
            body.angular_velocity *= Params::SPIN_DAMPING;
            events.ball_hit_wall = true;
        }

        // Back wall behind the hoop
        if body.center.z < config.back_wall_z && body.linear_velocity.z < 0.0 {
            body.linear_velocity.z *= -config.restitution;
            body.angular_velocity *= -Params::SPIN_DAMPING;
            events.ball_hit_wall = true;
        }

        // Side walls; only flip when still moving outward so a ball resting
        // on the boundary cannot oscillate
        let outward_right = body.center.x >= config.side_wall_x && body.linear_velocity.x > 0.0;
        let outward_left = body.center.x <= -config.side_wall_x && body.linear_velocity.x < 0.0;
        if outward_right || outward_left {
            body.linear_velocity.x *= -config.restitution;
            body.angular_velocity *= Params::SIDE_SPIN_DAMPING;
            events.ball_hit_wall = true;
        }
    }
}

/// Despawn ball bodies that left the court entirely
pub fn cull_out_of_bounds(world: &mut World, config: &Config) {
    let mut gone = Vec::new();
    for (entity, (body, _)) in world.query::<(&Body, &BallTag)>().iter() {
        if body.center.z > config.out_of_bounds_z || body.center.y < config.out_of_bounds_y {
            gone.push(entity);
        }
    }
    for entity in gone {
        log::debug!("ball left the court, despawning");
        let _ = world.despawn(entity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{MaterialId, ShapeId};
    use glam::{Quat, Vec3};

    fn spawn_ball(world: &mut World, center: Vec3, velocity: Vec3) -> hecs::Entity {
        let body = Body::new(ShapeId(0), MaterialId(0), Vec3::ONE).emplace(
            center,
            Quat::IDENTITY,
            velocity,
            1.0,
            Vec3::X,
        );
        world.spawn((body, BallTag))
    }

    #[test]
    fn test_side_wall_flips_and_damps_x_velocity() {
        let mut world = World::new();
        let config = Config::new();
        let mut events = Events::new();
        let entity = spawn_ball(&mut world, Vec3::new(25.0, 5.0, -10.0), Vec3::new(5.0, 0.0, 0.0));

        bounce_walls(&mut world, &config, &mut events);

        let body = world.get::<&Body>(entity).unwrap();
        assert_eq!(body.linear_velocity.x, -4.0);
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_side_wall_ignores_inward_motion() {
        let mut world = World::new();
        let config = Config::new();
        let mut events = Events::new();
        let entity = spawn_ball(
            &mut world,
            Vec3::new(25.5, 5.0, -10.0),
            Vec3::new(-5.0, 0.0, 0.0),
        );

        bounce_walls(&mut world, &config, &mut events);

        let body = world.get::<&Body>(entity).unwrap();
        assert_eq!(body.linear_velocity.x, -5.0);
        assert!(!events.ball_hit_wall);
    }

    #[test]
    fn test_floor_bounce_damps_all_axes() {
        let mut world = World::new();
        let config = Config::new();
        let mut events = Events::new();
        let entity = spawn_ball(
            &mut world,
            Vec3::new(0.0, 0.5, -10.0),
            Vec3::new(2.0, -4.0, -6.0),
        );

        bounce_walls(&mut world, &config, &mut events);

        let body = world.get::<&Body>(entity).unwrap();
        assert!((body.linear_velocity.x - 2.0 * Params::FLOOR_FRICTION_X).abs() < 1e-6);
        assert!((body.linear_velocity.y - 4.0 * config.restitution).abs() < 1e-6);
        assert!((body.linear_velocity.z + 6.0 * Params::FLOOR_FRICTION_Z).abs() < 1e-6);
        assert!(body.linear_velocity.y > 0.0, "floor bounce reverses y");
    }

    #[test]
    fn test_back_wall_reverses_z() {
        let mut world = World::new();
        let config = Config::new();
        let mut events = Events::new();
        let entity = spawn_ball(
            &mut world,
            Vec3::new(0.0, 5.0, -34.5),
            Vec3::new(0.0, 0.0, -8.0),
        );

        bounce_walls(&mut world, &config, &mut events);

        let body = world.get::<&Body>(entity).unwrap();
        assert!((body.linear_velocity.z - 8.0 * config.restitution).abs() < 1e-6);
        assert!(body.linear_velocity.z > 0.0, "back wall reverses z");
    }

    #[test]
    fn test_cull_despawns_runaway_ball() {
        let mut world = World::new();
        let config = Config::new();
        spawn_ball(
            &mut world,
            Vec3::new(0.0, 5.0, config.out_of_bounds_z + 1.0),
            Vec3::new(0.0, 0.0, 6.0),
        );
        spawn_ball(&mut world, Vec3::new(0.0, 5.0, -10.0), Vec3::ZERO);

        cull_out_of_bounds(&mut world, &config);

        assert_eq!(world.query::<&BallTag>().iter().count(), 1);
    }

    #[test]
    fn test_cull_honors_configured_bounds() {
        let mut world = World::new();
        let mut config = Config::new();
        config.out_of_bounds_y = -50.0;
        spawn_ball(&mut world, Vec3::new(0.0, -10.0, -10.0), Vec3::ZERO);

        cull_out_of_bounds(&mut world, &config);
        assert_eq!(world.query::<&BallTag>().iter().count(), 1);

        config.out_of_bounds_y = Params::OUT_OF_BOUNDS_Y;
        cull_out_of_bounds(&mut world, &config);
        assert_eq!(world.query::<&BallTag>().iter().count(), 0);
    }
}
