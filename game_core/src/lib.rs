pub mod basketball;
pub mod camera;
pub mod clock;
pub mod components;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;

pub use basketball::*;
pub use camera::*;
pub use clock::*;
pub use components::*;
pub use params::*;
pub use render::*;
pub use resources::*;

use glam::{Quat, Vec3};
use hecs::World;

/// Per-step view over the shared simulation state, handed to the game rules
pub struct StepContext<'a> {
    pub world: &'a mut World,
    pub session: &'a mut Session,
    pub events: &'a mut Events,
    pub rng: &'a mut GameRng,
    pub pointer: &'a PointerState,
    pub config: &'a Config,
}

/// Domain-specific behavior a concrete game supplies.
///
/// `update_state` runs once per discrete tick, before bodies are integrated.
/// Supplying it is a construction requirement of [`Simulation`], so a game
/// without one cannot be built.
pub trait GameRules {
    fn update_state(&mut self, dt: f32, ctx: &mut StepContext<'_>);

    /// Pointer button pressed; delivered between frames
    fn pointer_down(&mut self, _session: &mut Session) {}

    /// Pointer button released; delivered between frames
    fn pointer_up(&mut self, _session: &mut Session) {}

    /// Extra draw calls that are not physics bodies
    fn render_extras(&self, _pointer: &PointerState, _config: &Config, _target: &mut dyn DrawTarget) {
    }
}

/// Fixed-timestep simulation with interpolated rendering.
///
/// Each rendered frame reports a wall-clock delta; the clock decides how many
/// fixed steps are due, the rules and integrator run once per step, and
/// `render` blends the last two discrete states for display.
pub struct Simulation<R: GameRules> {
    pub world: World,
    pub clock: SimClock,
    pub session: Session,
    pub events: Events,
    pub rng: GameRng,
    pub pointer: PointerState,
    pub config: Config,
    pub rules: R,
    alpha: f32,
}

impl<R: GameRules> Simulation<R> {
    pub fn new(rules: R, config: Config, seed: u64) -> Self {
        let clock = SimClock::new(config.fixed_dt, config.time_scale, config.max_frame_accum);
        let session = Session::new(config.game_time, config.bonus_time);
        Self {
            world: World::new(),
            clock,
            session,
            events: Events::new(),
            rng: GameRng::new(seed),
            pointer: PointerState::new(),
            config,
            rules,
            alpha: 0.0,
        }
    }

    /// Advance the simulation by one rendered frame's wall-clock delta.
    /// Runs zero or more fixed steps, bounded by the catch-up clamp, then
    /// stores the blend factor for rendering.
    pub fn simulate(&mut self, frame_dt: f32) {
        self.clock.begin_frame(frame_dt);
        while self.clock.step_due() {
            let dt = self.clock.consume_step();
            self.step_once(dt);
        }
        self.alpha = self.clock.alpha();
    }

    fn step_once(&mut self, dt: f32) {
        self.events.clear();
        let mut ctx = StepContext {
            world: &mut self.world,
            session: &mut self.session,
            events: &mut self.events,
            rng: &mut self.rng,
            pointer: &self.pointer,
            config: &self.config,
        };
        self.rules.update_state(dt, &mut ctx);
        systems::advance_bodies(&mut self.world, dt);
        // The sample window advances with simulation time, not wall time
        self.pointer.record_sample();
    }

    /// Draw every live body at its blended pose, then the rules' extras
    pub fn render(&self, target: &mut dyn DrawTarget) {
        for (_entity, body) in self.world.query::<&Body>().iter() {
            target.draw(body.shape, body.blended_pose(self.alpha), body.material);
        }
        self.rules.render_extras(&self.pointer, &self.config, target);
    }

    /// Blend factor between the last two discrete states
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    // Pointer edges; hosts call these from input handlers, between frames

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer.set_position(x, y);
    }

    pub fn pointer_down(&mut self) {
        self.pointer.down = true;
        self.rules.pointer_down(&mut self.session);
    }

    pub fn pointer_up(&mut self) {
        self.pointer.down = false;
        self.rules.pointer_up(&mut self.session);
    }
}

/// Helper to create a ball body in flight
pub fn create_ball(
    world: &mut World,
    config: &Config,
    center: Vec3,
    velocity: Vec3,
) -> hecs::Entity {
    let body = Body::new(
        config.ball_shape,
        config.ball_material,
        Vec3::splat(Params::BALL_SIZE),
    )
    .emplace(
        center,
        Quat::IDENTITY,
        velocity,
        Params::BALL_SPIN_RATE,
        Vec3::X,
    );
    world.spawn((body, BallTag))
}

/// Helper to create a target at a fixed position
pub fn create_target(world: &mut World, config: &Config, center: Vec3) -> hecs::Entity {
    systems::spawn_target(world, config, center)
}
