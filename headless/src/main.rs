//! Headless host for the pop-a-shot simulation.
//!
//! Stands in for the GPU renderer: drives the fixed-timestep loop with a
//! scripted pointer session and logs the draw calls a real renderer would
//! receive.

use anyhow::Result;
use game_core::{
    camera_view, free_view, Basketball, CameraMode, Config, DrawTarget, MaterialId, ShapeId,
    Simulation,
};
use glam::Mat4;

/// Draw sink that counts calls per frame instead of rasterizing
#[derive(Default)]
struct ConsoleDraw {
    calls: usize,
}

impl DrawTarget for ConsoleDraw {
    fn draw(&mut self, shape: ShapeId, pose: Mat4, material: MaterialId) {
        self.calls += 1;
        let pos = pose.w_axis.truncate();
        log::trace!(
            "draw shape={:?} material={:?} at ({:.2}, {:.2}, {:.2})",
            shape,
            material,
            pos.x,
            pos.y,
            pos.z
        );
    }
}

fn init_logging() {
    let mut builder = env_logger::Builder::new();
    if let Ok(filter) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filter);
    } else {
        builder.filter_level(log::LevelFilter::Info);
    }
    builder.init();
}

fn main() -> Result<()> {
    init_logging();

    let mut sim = Simulation::new(Basketball::new(), Config::new(), 2024);
    let camera = CameraMode::Free;
    let frame_dt = 1.0 / 60.0;

    log::info!(
        "pop-a-shot headless run: fixed step {}s, {} step(s) max per frame",
        sim.config.fixed_dt,
        sim.config.max_steps_per_frame()
    );

    // Scripted session: repeatedly pick the ball up, flick it toward the
    // hoop, and wait for the flight to resolve.
    let mut draws = ConsoleDraw::default();
    let throws = 10;
    for throw in 0..throws {
        sim.pointer_down();
        for i in 0..30 {
            // Drag upward with a slight sideways drift per throw
            let drift = (throw as f32 - throws as f32 / 2.0) * 0.02;
            sim.pointer_moved(i as f32 * drift, i as f32 * 0.4);
            sim.simulate(frame_dt);
            sim.render(&mut draws);
        }
        sim.pointer_up();

        // Let the throw fly for three simulated seconds
        for _ in 0..180 {
            let steps_before = sim.clock.steps_taken;
            sim.simulate(frame_dt);
            sim.render(&mut draws);
            // Events persist across zero-step frames; log each hit once
            if sim.clock.steps_taken == steps_before {
                continue;
            }
            if let Some(points) = sim.events.target_hit {
                log::info!(
                    "throw {} scored {} point(s), total {}",
                    throw + 1,
                    points,
                    sim.session.score
                );
            }
        }
    }

    let view = camera_view(camera, &sim.world, free_view());
    log::debug!("final view matrix {:?}", view);

    log::info!(
        "session over: score {}, high score {}, {:.1}s simulated in {} steps, {} draw calls",
        sim.session.score,
        sim.session.high_score,
        sim.clock.t,
        sim.clock.steps_taken,
        draws.calls
    );
    Ok(())
}
