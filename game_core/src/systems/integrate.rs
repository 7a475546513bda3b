use hecs::World;

use crate::components::Body;

/// Advance every body one explicit Euler step
pub fn advance_bodies(world: &mut World, dt: f32) {
    if dt == 0.0 {
        return;
    }
    for (_entity, body) in world.query_mut::<&mut Body>() {
        body.advance(dt);
    }
}
