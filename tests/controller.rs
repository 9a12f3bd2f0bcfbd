//! End-to-end behavior of `SceneController` driven through its public API.

use std::f32::consts::PI;

use clockview::camera::Aabb;
use clockview::controller::{LoadRequest, LoadToken};
use clockview::input::{InputEvent, MouseButton};
use clockview::options::{Options, PlaybackOptions};
use clockview::scene::{
    AssetLoader, ClockPart, Frame, Mechanics, NodeTable, Renderer, SceneRoot,
};
use clockview::{ClockError, PartNotFoundReason, SceneController, SceneEvent};
use glam::Vec3;

struct FakeMechanics {
    updates: Vec<f32>,
    time_scale: f32,
}

impl Mechanics for FakeMechanics {
    type Root = NodeTable;

    fn bind(_root: &NodeTable) -> Self {
        Self {
            updates: Vec::new(),
            time_scale: 1.0,
        }
    }

    fn update(&mut self, dt: f32) {
        self.updates.push(dt);
    }

    fn time_scale(&self) -> f32 {
        self.time_scale
    }

    fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale;
    }
}

#[derive(Default)]
struct RecordingRenderer {
    frames: Vec<(bool, Vec3, Vec3)>,
}

impl Renderer<NodeTable> for RecordingRenderer {
    fn render(&mut self, frame: &Frame<'_, NodeTable>) {
        self.frames.push((
            frame.scene.is_some(),
            frame.camera.eye,
            frame.lighting.key_direction(),
        ));
    }
}

#[derive(Default)]
struct QueueLoader {
    requests: Vec<LoadRequest>,
}

impl AssetLoader for QueueLoader {
    fn load(&mut self, request: LoadRequest) {
        self.requests.push(request);
    }
}

type Controller = SceneController<FakeMechanics>;

const GEAR_HOURS_POS: Vec3 = Vec3::new(0.0, 1.5, 0.3);
const PENDULUM_POS: Vec3 = Vec3::new(0.0, -4.0, -0.4);

fn clock_model() -> NodeTable {
    NodeTable::new()
        .with_node(
            "case",
            Vec3::ZERO,
            Some(Aabb::new(
                Vec3::new(-3.0, -6.0, -1.0),
                Vec3::new(3.0, 4.0, 1.0),
            )),
        )
        .with_node("gear_hours", GEAR_HOURS_POS, None)
        .with_node("pendulum", PENDULUM_POS, None)
}

fn load(controller: &mut Controller, root: NodeTable) {
    let request = controller.begin_load().unwrap();
    controller
        .handle_event(SceneEvent::LoadComplete {
            load: request.token.id(),
            root,
        })
        .unwrap();
}

fn loaded() -> Controller {
    let mut controller = Controller::new(800, 600);
    load(&mut controller, clock_model());
    controller
}

fn input(controller: &mut Controller, event: InputEvent) {
    controller.handle_event(SceneEvent::Input(event)).unwrap();
}

fn camera_state(c: &Controller) -> (f32, f32, f32, Vec3) {
    let cam = c.camera();
    (cam.horizontal(), cam.vertical(), cam.zoom(), cam.target())
}

// ── Part framing ──

#[test]
fn look_at_part_before_load_fails_without_touching_camera() {
    let mut controller = Controller::new(800, 600);
    let before = camera_state(&controller);
    let err = controller.look_at_part("gear_hours").unwrap_err();
    assert!(matches!(
        err,
        ClockError::PartNotFound {
            reason: PartNotFoundReason::SceneNotLoaded,
            ..
        }
    ));
    assert_eq!(camera_state(&controller), before);
}

#[test]
fn look_at_part_after_load_applies_preset_exactly() {
    let mut controller = loaded();
    controller.look_at_part("pendulum").unwrap();
    controller.look_at_part("gear_hours").unwrap();
    let (h, v, zoom, target) = camera_state(&controller);
    assert_eq!(target, GEAR_HOURS_POS);
    assert_eq!(h, PI);
    assert_eq!(v, 0.0);
    assert_eq!(zoom, 16.0);
}

#[test]
fn unknown_or_missing_parts_report_reason() {
    let mut controller = loaded();
    let before = camera_state(&controller);

    let err = controller.look_at_part("cuckoo").unwrap_err();
    assert!(matches!(
        err,
        ClockError::PartNotFound {
            reason: PartNotFoundReason::UnknownPart,
            ..
        }
    ));

    // Preset exists, but the model has no anchor node.
    let err = controller.look_at(ClockPart::Anchor).unwrap_err();
    assert!(matches!(
        err,
        ClockError::PartNotFound {
            reason: PartNotFoundReason::MissingNode,
            ..
        }
    ));
    assert_eq!(camera_state(&controller), before);
}

// ── Load lifecycle ──

#[test]
fn load_frames_default_part_and_restricts_target() {
    let controller = loaded();
    assert!(controller.is_loaded());
    assert!(!controller.is_loading());

    let preset = ClockPart::GearHours.preset();
    let (h, v, zoom, target) = camera_state(&controller);
    assert_eq!((h, v, zoom), (preset.horizontal, preset.vertical, preset.zoom));
    assert_eq!(target, GEAR_HOURS_POS);

    let bounds = controller.scene().unwrap().bounds().unwrap();
    let restriction = controller.camera().restriction().unwrap();
    assert_eq!(restriction, bounds.scaled_depth(2.0));
    assert_eq!(restriction.min.z, -2.0);
    assert_eq!(restriction.max.z, 2.0);
}

#[test]
fn pan_after_load_never_leaves_model_bounds() {
    let mut controller = loaded();
    let restriction = controller.camera().restriction().unwrap();
    input(
        &mut controller,
        InputEvent::PointerDown {
            button: MouseButton::Primary,
            x: 0,
            y: 0,
        },
    );
    for i in 1..400 {
        input(
            &mut controller,
            InputEvent::PointerMove {
                x: i * 25,
                y: -i * 40,
                shift: true,
            },
        );
        assert!(restriction.contains(controller.camera().target()));
    }
}

#[test]
fn stale_and_cancelled_completions_are_ignored() {
    let mut controller = Controller::new(800, 600);
    let first = controller.begin_load().unwrap();
    let second = controller.begin_load().unwrap();
    assert!(first.token.is_cancelled());
    assert!(!second.token.is_cancelled());

    controller
        .handle_event(SceneEvent::LoadComplete {
            load: first.token.id(),
            root: clock_model(),
        })
        .unwrap();
    assert!(!controller.is_loaded());

    controller.cancel_load();
    assert!(second.token.is_cancelled());
    controller
        .handle_event(SceneEvent::LoadComplete {
            load: second.token.id(),
            root: clock_model(),
        })
        .unwrap();
    assert!(!controller.is_loaded());
}

#[test]
fn load_failure_is_reported_and_leaves_controller_unloaded() {
    let mut controller = Controller::new(800, 600);
    let request = controller.begin_load().unwrap();
    let err = controller
        .handle_event(SceneEvent::LoadFailed {
            load: request.token.id(),
            message: "404".into(),
        })
        .unwrap_err();
    assert!(matches!(err, ClockError::AssetLoad(ref m) if m == "404"));
    assert!(!controller.is_loaded());
    assert!(!controller.is_loading());

    controller.update(0.1);
    assert!(controller.mechanics().is_none());

    // A fresh attempt still works.
    load(&mut controller, clock_model());
    assert!(controller.is_loaded());
}

#[test]
fn scene_loads_at_most_once() {
    let mut controller = loaded();
    assert!(controller.begin_load().is_none());
    let mut loader = QueueLoader::default();
    assert!(!controller.start_load(&mut loader));
    assert!(loader.requests.is_empty());
}

#[test]
fn start_load_hands_request_to_loader() {
    let mut controller = Controller::new(800, 600);
    let mut loader = QueueLoader::default();
    assert!(controller.start_load(&mut loader));
    assert!(controller.is_loading());
    assert_eq!(loader.requests.len(), 1);
    assert_eq!(loader.requests[0].path, "assets/clock.json");
}

#[test]
fn dropping_controller_cancels_outstanding_load() {
    let mut controller = Controller::new(800, 600);
    let token: LoadToken = controller.begin_load().unwrap().token;
    drop(controller);
    assert!(token.is_cancelled());
}

// ── Time scale ──

#[test]
fn speed_set_before_load_applies_on_load() {
    let mut controller = Controller::new(800, 600);
    controller.set_speed(2.0);
    assert_eq!(controller.time_scale(), 2.0);
    load(&mut controller, clock_model());
    assert_eq!(controller.mechanics().unwrap().time_scale(), 2.0);

    controller.update(0.5);
    assert_eq!(controller.mechanics().unwrap().updates, vec![1.0]);
}

#[test]
fn zero_pauses_and_negative_reverses() {
    let mut controller = loaded();
    controller.set_speed(0.0);
    controller.update(0.25);
    controller.set_speed(-1.0);
    controller.update(0.25);
    controller.set_speed(f32::NAN);
    assert_eq!(controller.time_scale(), -1.0);
    assert_eq!(controller.mechanics().unwrap().updates, vec![0.0, -0.25]);
}

#[test]
fn configured_time_scale_applies_on_load() {
    let options = Options {
        playback: PlaybackOptions {
            time_scale: 0.5,
            ..PlaybackOptions::default()
        },
        ..Options::default()
    };
    let mut controller = Controller::with_options(options, 800, 600);
    assert_eq!(controller.time_scale(), 0.5);
    load(&mut controller, clock_model());
    controller.update(0.5);
    assert_eq!(controller.mechanics().unwrap().updates, vec![0.25]);
}

#[test]
fn reverse_disabled_pauses_on_negative_speed() {
    let options = Options {
        playback: PlaybackOptions {
            allow_reverse: false,
            ..PlaybackOptions::default()
        },
        ..Options::default()
    };
    let mut controller = Controller::with_options(options, 800, 600);
    load(&mut controller, clock_model());
    controller.set_speed(-1.0);
    assert_eq!(controller.time_scale(), 0.0);
    controller.update(0.25);
    assert_eq!(controller.mechanics().unwrap().updates, vec![0.0]);
}

#[test]
fn nan_limits_in_options_file_do_not_break_controller() {
    let toml_str = r"
[camera]
vertical_margin = nan

[playback]
max_time_scale = nan
";
    let options = Options::from_toml(toml_str).unwrap();
    let mut controller = Controller::with_options(options, 800, 600);
    load(&mut controller, clock_model());

    controller.camera_mut().rotate(0.1, 10.0);
    let cam = controller.camera();
    assert!(cam.vertical() < PI / 2.0);
    assert!(cam.eye().is_finite());

    controller.set_speed(1e6);
    assert_eq!(controller.time_scale(), 100.0);
    controller.set_speed(-2.0);
    assert_eq!(controller.time_scale(), -2.0);
}

#[test]
fn update_before_load_only_moves_camera() {
    let mut controller = Controller::new(800, 600);
    controller.update(0.016);
    controller.update(f32::NAN);
    assert!(controller.mechanics().is_none());
}

// ── Resize ──

#[test]
fn resize_keeps_only_latest_aspect() {
    let mut controller = Controller::new(800, 600);
    controller.resize(1920, 1080);
    controller
        .handle_event(SceneEvent::Resize {
            width: 500,
            height: 1000,
        })
        .unwrap();
    assert_eq!(controller.camera().aspect(), 0.5);
    assert_eq!(controller.viewport(), (500, 1000));
}

#[test]
fn degenerate_viewport_sizes() {
    let mut controller = Controller::new(800, 600);
    // Zero height is treated as one pixel.
    controller.resize(800, 0);
    assert_eq!(controller.camera().aspect(), 800.0);
    // Zero width gives aspect zero, which the camera rejects.
    controller.resize(0, 600);
    assert_eq!(controller.camera().aspect(), 800.0);
    assert_eq!(controller.viewport(), (0, 600));
    controller.resize(300, 600);
    assert_eq!(controller.camera().aspect(), 0.5);
}

// ── Input ──

#[test]
fn secondary_button_and_idle_moves_leave_camera_alone() {
    let mut controller = Controller::new(800, 600);
    let before = camera_state(&controller);
    input(
        &mut controller,
        InputEvent::PointerDown {
            button: MouseButton::Secondary,
            x: 10,
            y: 10,
        },
    );
    input(
        &mut controller,
        InputEvent::PointerMove {
            x: 200,
            y: 150,
            shift: false,
        },
    );
    assert!(!controller.input().is_dragging());
    assert_eq!(camera_state(&controller), before);
}

#[test]
fn primary_drag_rotates_then_release_stops() {
    let mut controller = Controller::new(800, 600);
    input(
        &mut controller,
        InputEvent::PointerDown {
            button: MouseButton::Primary,
            x: 100,
            y: 100,
        },
    );
    input(
        &mut controller,
        InputEvent::PointerMove {
            x: 150,
            y: 125,
            shift: false,
        },
    );
    let (h, v, _, _) = camera_state(&controller);
    assert!((h - 50.0 * 0.004).abs() < 1e-6);
    assert!((v - 25.0 * 0.004).abs() < 1e-6);

    input(
        &mut controller,
        InputEvent::PointerUp {
            button: MouseButton::Primary,
        },
    );
    let after_release = camera_state(&controller);
    input(
        &mut controller,
        InputEvent::PointerMove {
            x: 400,
            y: 400,
            shift: false,
        },
    );
    assert_eq!(camera_state(&controller), after_release);
}

#[test]
fn wheel_zooms_out_on_positive_delta() {
    let mut controller = Controller::new(800, 600);
    let start = controller.camera().zoom();
    input(&mut controller, InputEvent::Wheel { delta_y: 100.0 });
    assert!(controller.camera().zoom() > start);
    input(&mut controller, InputEvent::Wheel { delta_y: -300.0 });
    assert!(controller.camera().zoom() < start);
    for _ in 0..1000 {
        input(&mut controller, InputEvent::Wheel { delta_y: -1000.0 });
    }
    assert!(controller.camera().zoom() > 0.0);
}

// ── Rendering ──

#[test]
fn render_reports_scene_and_camera_relative_lighting() {
    let mut controller = Controller::new(800, 600);
    let mut renderer = RecordingRenderer::default();
    controller.render(&mut renderer);

    let request = controller.begin_load().unwrap();
    controller
        .handle_event(SceneEvent::LoadComplete {
            load: request.token.id(),
            root: clock_model(),
        })
        .unwrap();
    controller.update(0.016);
    controller.render(&mut renderer);

    assert_eq!(renderer.frames.len(), 2);
    assert!(!renderer.frames[0].0);
    let (has_scene, eye, key_dir) = renderer.frames[1];
    assert!(has_scene);
    assert_eq!(eye, controller.camera().eye());
    // Gear-hours framing looks from behind (h = π): the key light swings
    // with the camera to the -Z side.
    assert!(key_dir.z < 0.0);
    assert!(key_dir.y > 0.0);
}
