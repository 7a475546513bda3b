use glam::{Mat4, Quat, Vec3};

use crate::components::{BallTag, Body};
use crate::params::{Config, Params};
use crate::render::DrawTarget;
use crate::resources::{PointerState, Session};
use crate::systems::{
    apply_gravity, bounce_walls, cull_out_of_bounds, ensure_targets, resolve_hits,
};
use crate::{GameRules, StepContext};

/// Ball lifecycle within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallPhase {
    /// Ball follows the pointer; no physics body exists
    Idle,
    /// Pointer held; still following, the throw velocity is being sampled
    Armed,
    /// Pointer released; a physics body is in flight
    Launched,
}

/// Pop-a-shot rules: throwing the ball at pop-up targets on the hoop plane
pub struct Basketball {
    phase: BallPhase,
    scored_this_flight: bool,
    throw_spawned: bool,
}

impl Basketball {
    pub fn new() -> Self {
        Self {
            phase: BallPhase::Idle,
            scored_this_flight: false,
            throw_spawned: false,
        }
    }

    pub fn phase(&self) -> BallPhase {
        self.phase
    }

    /// Where the carried ball sits while it follows the pointer.
    /// The ball cannot be dragged below the floor.
    fn carried_pose(pointer: &PointerState) -> Mat4 {
        let center = Vec3::new(
            pointer.pos.x,
            1.0 + pointer.pos.y.max(0.0),
            Params::BALL_CARRY_Z,
        );
        Mat4::from_translation(center) * Mat4::from_scale(Vec3::splat(Params::BALL_SIZE))
    }

    /// Initial flight velocity from the pointer's finite-difference estimate
    fn launch_velocity(pointer: &PointerState, dt: f32) -> Vec3 {
        let estimate = pointer.velocity_estimate(dt);
        let lift = estimate.y.abs().min(1.0);
        Vec3::new(
            Params::LAUNCH_SCALE_X * estimate.x,
            Params::LAUNCH_SCALE_Y * lift,
            Params::LAUNCH_SCALE_Z * lift,
        )
    }

    fn spawn_ball(&mut self, ctx: &mut StepContext<'_>, dt: f32) {
        let center = Vec3::new(
            ctx.pointer.pos.x,
            1.0 + ctx.pointer.pos.y.max(0.0),
            Params::BALL_CARRY_Z,
        );
        let velocity = Self::launch_velocity(ctx.pointer, dt);
        let body = Body::new(
            ctx.config.ball_shape,
            ctx.config.ball_material,
            Vec3::splat(Params::BALL_SIZE),
        )
        .emplace(
            center,
            Quat::IDENTITY,
            velocity,
            Params::BALL_SPIN_RATE,
            Vec3::X,
        );
        ctx.world.spawn((body, BallTag));
        ctx.events.ball_launched = true;
        self.throw_spawned = true;
        log::debug!("ball launched with velocity {:?}", velocity);
    }

    fn despawn_balls(ctx: &mut StepContext<'_>) {
        let balls: Vec<hecs::Entity> = ctx
            .world
            .query::<&BallTag>()
            .iter()
            .map(|(e, _)| e)
            .collect();
        for entity in balls {
            let _ = ctx.world.despawn(entity);
        }
    }
}

impl Default for Basketball {
    fn default() -> Self {
        Self::new()
    }
}

impl GameRules for Basketball {
    fn update_state(&mut self, dt: f32, ctx: &mut StepContext<'_>) {
        if dt == 0.0 {
            return;
        }

        // Ball lifecycle: carried while idle or armed, one body per throw
        match self.phase {
            BallPhase::Idle | BallPhase::Armed => Self::despawn_balls(ctx),
            BallPhase::Launched => {
                if !self.throw_spawned {
                    self.spawn_ball(ctx, dt);
                }
            }
        }

        // Keep targets stocked before collision checks
        ensure_targets(ctx.world, ctx.rng, ctx.config, ctx.events);

        ctx.session.tick(dt);

        apply_gravity(ctx.world, dt, ctx.config);
        bounce_walls(ctx.world, ctx.config, ctx.events);
        cull_out_of_bounds(ctx.world, ctx.config);

        resolve_hits(
            ctx.world,
            ctx.session,
            ctx.config,
            ctx.events,
            &mut self.scored_this_flight,
        );
    }

    fn pointer_down(&mut self, session: &mut Session) {
        self.phase = BallPhase::Armed;
        self.scored_this_flight = false;
        self.throw_spawned = false;
        // Clicking after the buzzer starts a fresh session
        if session.expired() {
            session.restart();
        }
    }

    fn pointer_up(&mut self, _session: &mut Session) {
        if self.phase == BallPhase::Armed {
            self.phase = BallPhase::Launched;
        }
    }

    fn render_extras(&self, pointer: &PointerState, config: &Config, target: &mut dyn DrawTarget) {
        // The carried ball is drawn directly; it only becomes a body on launch
        if self.phase != BallPhase::Launched {
            target.draw(
                config.ball_shape,
                Self::carried_pose(pointer),
                config.ball_material,
            );
        }
    }
}
