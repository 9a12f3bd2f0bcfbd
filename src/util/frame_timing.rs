//! Frame pacing and per-frame delta time.

use web_time::{Duration, Instant};

/// Longest frame delta handed to the simulation, in seconds. Longer gaps
/// (a backgrounded tab, a debugger pause) are clamped to this.
const MAX_FRAME_DELTA: f32 = 0.25;

/// Frame timing with FPS calculation and optional frame limiting.
///
/// Produces the `dt` the host passes to
/// [`SceneController::update`](crate::controller::SceneController::update).
pub struct FrameTiming {
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    /// Minimum frame duration based on target FPS
    min_frame_duration: Duration,
    /// Last frame timestamp
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameTiming {
    /// Create a new frame timer with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / target_fps as f64)
        } else {
            Duration::ZERO
        };

        Self {
            target_fps,
            min_frame_duration,
            last_frame: Instant::now(),
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,    // 5% new value, 95% old value
        }
    }

    /// Whether enough time has passed since the last frame to render.
    #[must_use]
    pub fn should_render(&self) -> bool {
        if self.target_fps == 0 {
            return true;
        }
        self.last_frame.elapsed() >= self.min_frame_duration
    }

    /// Mark the start of a new frame and return the seconds since the
    /// previous one, clamped to a quarter second.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            // Exponential moving average for smooth display
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        frame_time.min(MAX_FRAME_DELTA)
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlimited_always_renders() {
        assert!(FrameTiming::new(0).should_render());
    }

    #[test]
    fn tick_is_small_and_non_negative() {
        let mut timing = FrameTiming::new(60);
        let dt = timing.tick();
        assert!((0.0..=MAX_FRAME_DELTA).contains(&dt));
        assert!(timing.fps() > 0.0);
    }
}
