//! Frame-tick and input-dispatch timings for the scene controller.

use std::hint::black_box;

use clockview::camera::Aabb;
use clockview::input::{InputEvent, MouseButton};
use clockview::scene::{Mechanics, NodeTable};
use clockview::{SceneController, SceneEvent};
use criterion::{criterion_group, criterion_main, Criterion};
use glam::Vec3;

struct Idle {
    time_scale: f32,
}

impl Mechanics for Idle {
    type Root = NodeTable;

    fn bind(_root: &NodeTable) -> Self {
        Self { time_scale: 1.0 }
    }

    fn update(&mut self, dt: f32) {
        let _ = black_box(dt);
    }

    fn time_scale(&self) -> f32 {
        self.time_scale
    }

    fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale;
    }
}

fn loaded_controller() -> SceneController<Idle> {
    let mut controller = SceneController::new(1280, 720);
    let root = NodeTable::new()
        .with_node(
            "case",
            Vec3::ZERO,
            Some(Aabb::new(Vec3::splat(-3.0), Vec3::splat(3.0))),
        )
        .with_node("gear_hours", Vec3::new(0.0, 1.0, 0.2), None);
    if let Some(request) = controller.begin_load() {
        let _ = controller.handle_event(SceneEvent::LoadComplete {
            load: request.token.id(),
            root,
        });
    }
    controller
}

fn frame_tick_benchmark(c: &mut Criterion) {
    let mut controller = loaded_controller();
    controller.camera_mut().set_auto_rotate(true);
    let _ = c.bench_function("frame_update", |b| {
        b.iter(|| controller.update(black_box(1.0 / 60.0)));
    });
}

fn drag_benchmark(c: &mut Criterion) {
    let mut controller = loaded_controller();
    controller.handle_input(InputEvent::PointerDown {
        button: MouseButton::Primary,
        x: 0,
        y: 0,
    });
    let mut x = 0;
    let _ = c.bench_function("drag_move", |b| {
        b.iter(|| {
            x = (x + 3) % 1000;
            controller.handle_input(black_box(InputEvent::PointerMove {
                x,
                y: x / 2,
                shift: x % 2 == 0,
            }));
        });
    });
}

criterion_group!(benches, frame_tick_benchmark, drag_benchmark);
criterion_main!(benches);
