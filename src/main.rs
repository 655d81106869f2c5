use std::path::Path;

use anyhow::Result;
use glam::Vec3;
use log::{debug, info};
use winit::{
    event::{ElementState, Event, WindowEvent},
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

use cube_roller::engine::frame_clock::FrameClock;
use cube_roller::engine::physics::CollisionLayer;
use cube_roller::game::cube::{CubeActor, RollConfig, RollEvent};

/// A few blocks around the spawn cell so collisions can be tried out
const DEMO_OBSTACLES: [(f32, f32); 4] = [(2.0, 0.0), (-2.0, 1.0), (0.0, 3.0), (1.0, -2.0)];

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Cube Roller...");

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let config = RollConfig::from_file(Path::new(&path))?;
            info!("Loaded config from {}", path);
            config
        }
        None => RollConfig::default(),
    };

    let mut actor = CubeActor::new(config)?;
    let cell = actor.config().cell_size();
    let half_extent = actor.config().half_extent;
    for (x, z) in DEMO_OBSTACLES {
        let center = Vec3::new(x * cell, half_extent, z * cell);
        actor
            .obstacles_mut()
            .add_block(center, half_extent, CollisionLayer::Obstacle);
    }
    let cues = actor.config().cues.clone();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Cube Roller")
        .with_inner_size(winit::dpi::LogicalSize::new(1280, 720))
        .with_resizable(true)
        .build(&event_loop)?;

    info!("Window created successfully - arrows/WASD to roll, P to pause, R to reset");

    let mut clock = FrameClock::new();

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                let pressed = event.state == ElementState::Pressed && !event.repeat;
                match event.physical_key {
                    PhysicalKey::Code(KeyCode::KeyP) if pressed => {
                        clock.toggle_pause();
                        actor.input_mut().set_suspended(clock.is_paused());
                    }
                    PhysicalKey::Code(KeyCode::KeyR) if pressed => {
                        actor.reset(Vec3::new(0.0, half_extent, 0.0));
                    }
                    _ => actor.input_mut().process_keyboard_event(&event),
                }
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                let dt = clock.begin_frame();
                if !clock.is_paused() {
                    actor.tick(dt);
                }

                for roll_event in actor.drain_events() {
                    if let Some(cue) = cues.cue_for(&roll_event) {
                        debug!("Playing {} sound at {:.2}", cue.kind.clip_name(), cue.volume);
                    }
                    if let RollEvent::Landed { position, .. } = roll_event {
                        info!("Landed at {} ({:.0} fps)", position, clock.fps());
                    }
                }

                window.request_redraw();
            }
            Event::AboutToWait => {
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
