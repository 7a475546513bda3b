use hecs::World;

use crate::components::{BallTag, Body, TargetTag};
use crate::params::Config;
use crate::resources::{Events, Session};

/// Which bounding-volume approximation to test with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundingTest {
    Sphere,
    Cube,
}

/// Stateless overlap test over two body poses
#[derive(Debug, Clone, Copy)]
pub struct Collider {
    pub test: BoundingTest,
    pub leeway: f32,
}

/// Pure overlap predicate. The leeway makes hits slightly more forgiving
/// than exact geometry.
pub fn bodies_collide(a: &Body, b: &Body, collider: &Collider) -> bool {
    match collider.test {
        BoundingTest::Sphere => {
            let reach = a.radius() + b.radius() + collider.leeway;
            a.center.distance_squared(b.center) <= reach * reach
        }
        BoundingTest::Cube => {
            // Moving body's center in the target's local frame; the target's
            // pose already folds in its per-axis extents.
            let local = b.current_pose().inverse().transform_point3(a.center);
            local.x.abs() <= 1.0 + collider.leeway
                && local.y.abs() <= 1.0 + collider.leeway
                && local.z.abs() <= 1.0 + collider.leeway
        }
    }
}

/// Test every live ball against every live target; the first hit of a flight
/// scores and despawns the target. The latch keeps a continuous overlap
/// across several ticks from scoring more than once per flight.
pub fn resolve_hits(
    world: &mut World,
    session: &mut Session,
    config: &Config,
    events: &mut Events,
    scored_this_flight: &mut bool,
) {
    let collider = config.collider();

    let mut balls: Vec<(hecs::Entity, Body)> = world
        .query::<(&Body, &BallTag)>()
        .iter()
        .map(|(e, (body, _))| (e, *body))
        .collect();
    balls.sort_by_key(|(e, _)| e.id());

    let mut targets: Vec<(hecs::Entity, Body)> = world
        .query::<(&Body, &TargetTag)>()
        .iter()
        .map(|(e, (body, _))| (e, *body))
        .collect();
    targets.sort_by_key(|(e, _)| e.id());

    for (_ball_entity, ball) in &balls {
        for (target_entity, target) in &targets {
            if !bodies_collide(ball, target, &collider) {
                continue;
            }
            if !*scored_this_flight {
                let points = if session.in_bonus_window() {
                    config.bonus_hit_points
                } else {
                    config.hit_points
                };
                session.award(points);
                events.target_hit = Some(points);
                let _ = world.despawn(*target_entity);
                log::debug!("target hit for {} points, score {}", points, session.score);
            }
            *scored_this_flight = true;
        }
    }
}
