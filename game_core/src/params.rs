use crate::render::{MaterialId, ShapeId};
use crate::systems::collision::{BoundingTest, Collider};

/// Game tuning parameters for the pop-a-shot court
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Court geometry
    pub const FLOOR_Y: f32 = 1.0;
    pub const BACK_WALL_Z: f32 = -34.0;
    pub const SIDE_WALL_X: f32 = 25.0;
    pub const HOOP_PLANE_Z: f32 = -35.0;
    pub const OUT_OF_BOUNDS_Z: f32 = 20.0;
    pub const OUT_OF_BOUNDS_Y: f32 = -5.0;

    // Ball
    pub const BALL_SIZE: f32 = 1.0;
    pub const BALL_CARRY_Z: f32 = -5.0;
    pub const BALL_SPIN_RATE: f32 = -0.5;
    pub const GRAVITY: f32 = -0.8;

    // Launch velocity shaping (pointer estimate -> world units)
    pub const LAUNCH_SCALE_X: f32 = 3.0;
    pub const LAUNCH_SCALE_Y: f32 = 6.0;
    pub const LAUNCH_SCALE_Z: f32 = -8.0;

    // Bounce damping
    pub const RESTITUTION: f32 = 0.8;
    pub const FLOOR_FRICTION_X: f32 = 0.9;
    pub const FLOOR_FRICTION_Z: f32 = 0.95;
    pub const SPIN_DAMPING: f32 = 0.95;
    pub const SIDE_SPIN_DAMPING: f32 = 0.8;

    // Targets
    pub const TARGET_SIZE: [f32; 3] = [0.15, 1.5, 1.4];
    pub const TARGET_X_MIN: f32 = -20.0;
    pub const TARGET_X_MAX: f32 = 20.0;
    pub const TARGET_Y_MIN: f32 = 2.0;
    pub const TARGET_Y_MAX: f32 = 20.0;
    pub const MIN_TARGETS: usize = 1;

    // Scoring session
    pub const GAME_TIME: f32 = 120.0;
    pub const BONUS_TIME: f32 = 30.0;
    pub const HIT_POINTS: u32 = 1;
    pub const BONUS_HIT_POINTS: u32 = 5;

    // Collision
    pub const LEEWAY: f32 = 0.1;

    // Pointer tracking
    pub const POINTER_WINDOW: usize = 10;
    pub const POINTER_VEL_SCALE: f32 = 150.0;

    // Physics clock
    pub const FIXED_DT: f32 = 0.05; // 20 Hz
    pub const MAX_FRAME_ACCUM: f32 = 0.1; // Clamp to prevent catch-up spirals
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub fixed_dt: f32,
    pub max_frame_accum: f32,
    pub time_scale: f32,
    pub gravity: f32,
    pub restitution: f32,
    pub bounding_test: BoundingTest,
    pub leeway: f32,
    pub min_targets: usize,
    pub game_time: f32,
    pub bonus_time: f32,
    pub hit_points: u32,
    pub bonus_hit_points: u32,
    pub floor_y: f32,
    pub back_wall_z: f32,
    pub side_wall_x: f32,
    pub hoop_plane_z: f32,
    pub out_of_bounds_z: f32,
    pub out_of_bounds_y: f32,
    pub ball_shape: ShapeId,
    pub ball_material: MaterialId,
    pub target_shape: ShapeId,
    pub target_material: MaterialId,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fixed_dt: Params::FIXED_DT,
            max_frame_accum: Params::MAX_FRAME_ACCUM,
            time_scale: 1.0,
            gravity: Params::GRAVITY,
            restitution: Params::RESTITUTION,
            bounding_test: BoundingTest::Sphere,
            leeway: Params::LEEWAY,
            min_targets: Params::MIN_TARGETS,
            game_time: Params::GAME_TIME,
            bonus_time: Params::BONUS_TIME,
            hit_points: Params::HIT_POINTS,
            bonus_hit_points: Params::BONUS_HIT_POINTS,
            floor_y: Params::FLOOR_Y,
            back_wall_z: Params::BACK_WALL_Z,
            side_wall_x: Params::SIDE_WALL_X,
            hoop_plane_z: Params::HOOP_PLANE_Z,
            out_of_bounds_z: Params::OUT_OF_BOUNDS_Z,
            out_of_bounds_y: Params::OUT_OF_BOUNDS_Y,
            ball_shape: ShapeId(0),
            ball_material: MaterialId(0),
            target_shape: ShapeId(1),
            target_material: MaterialId(1),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collider for the configured bounding-volume test
    pub fn collider(&self) -> Collider {
        Collider {
            test: self.bounding_test,
            leeway: self.leeway,
        }
    }

    /// Upper bound on discrete steps a single frame can trigger
    pub fn max_steps_per_frame(&self) -> u32 {
        (self.max_frame_accum / self.fixed_dt).ceil() as u32
    }
}
