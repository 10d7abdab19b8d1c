//! Fixed-timestep clock in the "Fix Your Timestep" pattern.
//!
//! The host reports how long each displayed frame took; the clock turns that
//! into a whole number of 60 Hz simulation ticks and keeps the remainder for
//! the next frame. Per-tick smoothing rates therefore behave the same at any
//! refresh rate.

use tracing::warn;

/// Fixed simulation timestep: 60 Hz.
pub const FIXED_DT: f64 = 1.0 / 60.0;

/// Frame times above this are clamped so a stalled tab does not replay
/// seconds of simulation at once.
pub const MAX_FRAME_TIME: f64 = 0.25;

/// Turns host frame times into whole 60 Hz ticks.
#[derive(Clone, Debug, Default)]
pub struct FrameClock {
    /// Host time not yet spent on a tick, always below one `FIXED_DT`.
    carry: f64,
    sim_seconds: f64,
    frames_seen: u64,
    ticks_run: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one host frame of `frame_time` seconds and return how
    /// many fixed ticks to run now.
    ///
    /// Negative or non-finite frame times count as zero.
    pub fn advance(&mut self, frame_time: f64) -> u32 {
        let elapsed = if frame_time.is_finite() {
            frame_time.max(0.0)
        } else {
            0.0
        };
        if elapsed > MAX_FRAME_TIME {
            warn!(
                frame_ms = elapsed * 1000.0,
                cap_ms = MAX_FRAME_TIME * 1000.0,
                "long frame, dropping the excess"
            );
        }
        self.carry += elapsed.min(MAX_FRAME_TIME);
        self.frames_seen += 1;

        let due = (self.carry / FIXED_DT).floor() as u32;
        self.carry -= f64::from(due) * FIXED_DT;
        if self.carry < 0.0 {
            self.carry = 0.0;
        }
        self.sim_seconds += f64::from(due) * FIXED_DT;
        self.ticks_run += u64::from(due);
        due
    }

    /// Fraction of a tick left over, in `[0, 1)`.
    pub fn alpha(&self) -> f64 {
        (self.carry / FIXED_DT).clamp(0.0, 1.0)
    }

    pub fn frames_seen(&self) -> u64 {
        self.frames_seen
    }

    pub fn ticks_run(&self) -> u64 {
        self.ticks_run
    }

    /// Simulated seconds so far.
    pub fn sim_seconds(&self) -> f64 {
        self.sim_seconds
    }
}
