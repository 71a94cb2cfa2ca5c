use web_time::Instant;

/// Frame timing with clamped delta time and FPS calculation.
pub struct FrameTiming {
    /// Longest delta handed to the simulation, in seconds
    max_dt: f32,
    /// Last frame timestamp
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameTiming {
    /// Create a new frame timer with a delta-time ceiling in seconds.
    #[must_use]
    pub fn new(max_dt: f32) -> Self {
        Self {
            max_dt: max_dt.max(0.0),
            last_frame: Instant::now(),
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,    /* 5% new value, 95% old value for smooth
                                 * display */
        }
    }

    /// Advance to now and return the frame's delta time in seconds.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Advance to `now` and return the frame's delta time in seconds,
    /// clamped to `[0, max_dt]`. A clock that runs backwards yields 0 and
    /// keeps the previous timestamp.
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let Some(elapsed) = now.checked_duration_since(self.last_frame) else {
            log::warn!("non-monotonic frame clock, skipping frame");
            return 0.0;
        };
        self.last_frame = now;

        // Calculate instantaneous FPS
        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            // Exponential moving average for smooth display
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }

        if frame_time > self.max_dt {
            log::debug!(
                "frame took {frame_time:.3}s, clamping to {:.3}s",
                self.max_dt
            );
        }
        frame_time.min(self.max_dt)
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

#[cfg(test)]
mod tests {
    use web_time::Duration;

    use super::*;

    #[test]
    fn delta_is_elapsed_time() {
        let mut timing = FrameTiming::new(1.0);
        let start = timing.last_frame;
        let dt = timing.tick_at(start + Duration::from_millis(16));
        assert!((dt - 0.016).abs() < 1e-6);
    }

    #[test]
    fn long_frames_are_clamped() {
        let mut timing = FrameTiming::new(0.1);
        let start = timing.last_frame;
        assert_eq!(timing.tick_at(start + Duration::from_secs(3)), 0.1);
    }

    #[test]
    fn backwards_clock_yields_zero() {
        let mut timing = FrameTiming::new(0.1);
        let start = timing.last_frame;
        let later = start + Duration::from_millis(50);
        assert!(timing.tick_at(later) > 0.0);
        assert_eq!(timing.tick_at(start), 0.0);
        // the later timestamp is kept as the reference
        let dt = timing.tick_at(later + Duration::from_millis(10));
        assert!((dt - 0.01).abs() < 1e-6);
    }
}
