//! Headless demo: drives a `SceneController` through a scripted session
//! (load, drag, pan, zoom, part framing, speed changes) and logs what the
//! renderer would draw.
//!
//! Usage: `clockview [options.toml]`. Set `RUST_LOG=debug` for per-event
//! detail.

use std::collections::VecDeque;
use std::f32::consts::TAU;
use std::path::Path;
use std::thread;
use std::time::Duration;

use clockview::camera::Aabb;
use clockview::controller::LoadRequest;
use clockview::input::{InputEvent, MouseButton};
use clockview::options::Options;
use clockview::scene::{
    AssetLoader, ClockPart, Frame, Mechanics, NodeTable, Renderer,
};
use clockview::util::frame_timing::FrameTiming;
use clockview::{ClockError, SceneController, SceneEvent};
use glam::Vec3;

const TARGET_FPS: u32 = 60;
const FRAMES: u32 = 240;
/// Frames the stand-in loader takes before delivering the model.
const LOAD_LATENCY: u32 = 30;

/// Stand-in for the real mechanism: tracks clock time and a pendulum
/// phase so the log shows the time scale taking effect.
struct ClockTime {
    seconds: f32,
    time_scale: f32,
}

impl Mechanics for ClockTime {
    type Root = NodeTable;

    fn bind(root: &NodeTable) -> Self {
        log::info!("mechanism bound to {} nodes", root.len());
        Self {
            seconds: 0.0,
            time_scale: 1.0,
        }
    }

    fn update(&mut self, dt: f32) {
        self.seconds += dt;
    }

    fn time_scale(&self) -> f32 {
        self.time_scale
    }

    fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale;
    }
}

/// Loader that hands back a hard-coded movement after a fixed delay.
#[derive(Default)]
struct DelayedLoader {
    in_flight: Option<(LoadRequest, u32)>,
}

impl AssetLoader for DelayedLoader {
    fn load(&mut self, request: LoadRequest) {
        log::info!("loading {}", request.path);
        self.in_flight = Some((request, LOAD_LATENCY));
    }
}

impl DelayedLoader {
    fn poll(&mut self) -> Option<SceneEvent<NodeTable>> {
        let (request, frames_left) = self.in_flight.as_mut()?;
        if request.token.is_cancelled() {
            self.in_flight = None;
            return None;
        }
        if *frames_left > 0 {
            *frames_left -= 1;
            return None;
        }
        let (request, _) = self.in_flight.take()?;
        Some(SceneEvent::LoadComplete {
            load: request.token.id(),
            root: movement(),
        })
    }
}

fn movement() -> NodeTable {
    NodeTable::new()
        .with_node(
            "case",
            Vec3::ZERO,
            Some(Aabb::new(Vec3::new(-3.0, -6.0, -1.0), Vec3::new(3.0, 4.0, 1.0))),
        )
        .with_node(ClockPart::GearHours.node_name(), Vec3::new(0.0, 1.5, 0.3), None)
        .with_node(ClockPart::Pendulum.node_name(), Vec3::new(0.0, -4.0, -0.4), None)
        .with_node(ClockPart::Anchor.node_name(), Vec3::new(0.0, 2.6, -0.2), None)
        .with_node(ClockPart::EscapeWheel.node_name(), Vec3::new(0.0, 2.2, 0.0), None)
        .with_node(ClockPart::MovementSpring.node_name(), Vec3::new(-1.2, 0.4, 0.1), None)
}

struct LogRenderer {
    frames: u32,
}

impl Renderer<NodeTable> for LogRenderer {
    fn render(&mut self, frame: &Frame<'_, NodeTable>) {
        self.frames += 1;
        if self.frames % 30 == 0 {
            log::info!(
                "frame {}: eye {:?} -> target {:?}, key light {:?}, model {}",
                self.frames,
                frame.camera.eye,
                frame.camera.target,
                frame.lighting.key_direction(),
                if frame.scene.is_some() { "loaded" } else { "pending" },
            );
        }
    }
}

/// Input script keyed by frame number.
fn scripted_input(frame: u32) -> Vec<InputEvent> {
    match frame {
        60 => vec![InputEvent::PointerDown {
            button: MouseButton::Primary,
            x: 400,
            y: 300,
        }],
        61..=90 => {
            let step = (frame - 60) as i32;
            vec![InputEvent::PointerMove {
                x: 400 + step * 6,
                y: 300 + step,
                shift: frame > 80,
            }]
        }
        91 => vec![InputEvent::PointerUp {
            button: MouseButton::Primary,
        }],
        120..=125 => vec![InputEvent::Wheel { delta_y: -100.0 }],
        _ => Vec::new(),
    }
}

fn main() -> Result<(), ClockError> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let options = match std::env::args().nth(1) {
        Some(path) => Options::load(Path::new(&path))?,
        None => Options::default(),
    };

    let mut controller: SceneController<ClockTime> =
        SceneController::with_options(options, 1280, 720);
    let mut loader = DelayedLoader::default();
    let mut renderer = LogRenderer { frames: 0 };
    let mut queue: VecDeque<SceneEvent<NodeTable>> = VecDeque::new();

    // Requested before the mechanism exists; applied when the model loads.
    controller.set_speed(2.0);
    let _ = controller.start_load(&mut loader);

    let mut timing = FrameTiming::new(TARGET_FPS);
    for frame in 0..FRAMES {
        while !timing.should_render() {
            thread::sleep(Duration::from_millis(1));
        }
        let dt = timing.tick();

        queue.extend(scripted_input(frame).into_iter().map(SceneEvent::Input));
        if let Some(event) = loader.poll() {
            queue.push_back(event);
        }
        if frame == 150 {
            queue.push_back(SceneEvent::Resize {
                width: 800,
                height: 800,
            });
        }

        while let Some(event) = queue.pop_front() {
            if let Err(e) = controller.handle_event(event) {
                log::warn!("{e}");
            }
        }

        if frame == 180 {
            let part = ClockPart::ALL[(frame / 60) as usize % ClockPart::ALL.len()];
            if let Err(e) = controller.look_at(part) {
                log::warn!("{e}");
            }
            controller.set_speed(-0.5);
        }

        controller.update(dt);
        controller.render(&mut renderer);
    }

    log::info!("ran {FRAMES} frames at {:.1} fps", timing.fps());
    if let Some(mechanics) = controller.mechanics() {
        log::info!(
            "clock ran {:.2}s of mechanism time ({:.2} turns of the seconds hand)",
            mechanics.seconds,
            mechanics.seconds / 60.0,
        );
    }
    log::info!(
        "final camera: h {:.3} rad, v {:.3} rad, zoom {:.2}, wrapped h {:.3}",
        controller.camera().horizontal(),
        controller.camera().vertical(),
        controller.camera().zoom(),
        controller.camera().horizontal().rem_euclid(TAU),
    );
    Ok(())
}
