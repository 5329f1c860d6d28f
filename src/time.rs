//! Frame clock for the draw loop.
//!
//! `draw_web()` fires at ~60fps with variable spacing. `FrameClock` turns
//! wall-clock timestamps into per-frame deltas for effects, clamped so a
//! backgrounded tab does not replay seconds of animation in one frame.

/// Largest delta handed out for a single frame.
const MAX_FRAME_MS: f64 = 250.0;

pub struct FrameClock {
    /// Timestamp of the last update (ms), None if first frame
    last_timestamp: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_timestamp: None,
        }
    }

    /// Feed the current timestamp (from `performance.now()`); returns the
    /// delta in whole milliseconds since the previous frame.
    pub fn update(&mut self, now_ms: f64) -> u32 {
        let delta = match self.last_timestamp {
            Some(prev) => (now_ms - prev).clamp(0.0, MAX_FRAME_MS),
            None => 0.0,
        };
        self.last_timestamp = Some(now_ms);
        delta as u32
    }
}
