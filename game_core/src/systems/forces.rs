use hecs::World;

use crate::components::{BallTag, Body};
use crate::params::Config;

/// Apply gravity to every launched ball
pub fn apply_gravity(world: &mut World, dt: f32, config: &Config) {
    for (_entity, (body, _)) in world.query_mut::<(&mut Body, &BallTag)>() {
        body.linear_velocity.y += config.gravity * dt;
    }
}
