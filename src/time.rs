//! Frame pacing and frame-rate bookkeeping.
//!
//! Simulation speed is tied to the frame rate: every frame integrates the same
//! number of steps, and the loop yields for a fixed pause after presenting
//! instead of measuring delta time.

use std::time::{Duration, Instant};

/// Counts presented frames and performs the fixed post-frame pause.
#[derive(Debug)]
pub struct FrameClock {
    /// Pause after each presented frame.
    sleep: Duration,
    /// Total frames since start.
    frame_count: u64,
    /// Calculated FPS (updated periodically).
    fps: f32,
    /// Frame count at last FPS update.
    fps_frame_count: u64,
    /// Time of last FPS calculation.
    fps_update_time: Instant,
    /// How often to update FPS calculation.
    fps_update_interval: Duration,
}

impl FrameClock {
    pub fn new(sleep: Duration) -> Self {
        Self {
            sleep,
            frame_count: 0,
            fps: 0.0,
            fps_frame_count: 0,
            fps_update_time: Instant::now(),
            fps_update_interval: Duration::from_secs(1),
        }
    }

    /// Record a presented frame. Returns the new FPS value when it was recomputed.
    pub fn tick(&mut self) -> Option<f32> {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> Option<f32> {
        self.frame_count += 1;

        let since_update = now.duration_since(self.fps_update_time);
        if since_update < self.fps_update_interval {
            return None;
        }

        let frames = self.frame_count - self.fps_frame_count;
        self.fps = frames as f32 / since_update.as_secs_f32();
        self.fps_frame_count = self.frame_count;
        self.fps_update_time = now;
        Some(self.fps)
    }

    /// Block the thread for the configured pause.
    pub fn pause(&self) {
        if !self.sleep.is_zero() {
            std::thread::sleep(self.sleep);
        }
    }

    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_new() {
        let clock = FrameClock::new(Duration::from_millis(4));
        assert_eq!(clock.frame(), 0);
        assert_eq!(clock.fps(), 0.0);
    }

    #[test]
    fn test_tick_counts_frames() {
        let mut clock = FrameClock::new(Duration::ZERO);
        let start = clock.fps_update_time;
        for i in 1..=10 {
            assert_eq!(clock.tick_at(start + Duration::from_millis(i)), None);
        }
        assert_eq!(clock.frame(), 10);
    }

    #[test]
    fn test_fps_over_interval() {
        let mut clock = FrameClock::new(Duration::ZERO);
        let start = clock.fps_update_time;
        for i in 1..60 {
            clock.tick_at(start + Duration::from_millis(i * 16));
        }
        let fps = clock.tick_at(start + Duration::from_secs(1)).unwrap();
        assert!((fps - 60.0).abs() < 1e-3);
        assert_eq!(clock.fps(), fps);
    }

    #[test]
    fn test_pause_sleeps() {
        let clock = FrameClock::new(Duration::from_millis(5));
        let start = Instant::now();
        clock.pause();
        assert!(start.elapsed() >= Duration::from_millis(5));
    }
}
