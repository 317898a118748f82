use crate::constants::FRAME_STATS_INTERVAL_SEC;
use instant::Instant;

/// Counts frames and periodically logs the achieved frame rate.
#[derive(Debug)]
pub struct FrameClock {
    frames: u64,
    window_frames: u64,
    window_start: Instant,
    last_instant: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            frames: 0,
            window_frames: 0,
            window_start: now,
            last_instant: now,
        }
    }

    /// Record a frame; returns the seconds since the previous one.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        self.frames += 1;
        self.window_frames += 1;

        let window = (now - self.window_start).as_secs_f64();
        if window >= FRAME_STATS_INTERVAL_SEC {
            log::debug!(
                "[frame] {} frames, {:.1} fps",
                self.frames,
                self.window_frames as f64 / window
            );
            self.window_frames = 0;
            self.window_start = now;
        }
        dt.as_secs_f32()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
